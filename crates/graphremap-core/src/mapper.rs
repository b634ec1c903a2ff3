//! Identifier mapper: raw identifiers -> dense, first-seen-first-assigned ids.
//!
//! ```text
//! raw:    [50, 10, 50, 30]     start = 0
//! dense:  [ 0,  1,  0,  2]     lookup = {50:0, 10:1, 30:2}
//! ```
//!
//! The counter is always supplied by the caller. Each physical vertex table
//! starts its own range; kinds that share one number space get their start
//! offset from the propagator.

use ahash::AHashMap;

/// Original (possibly sparse) identifier as found in a table cell.
pub type RawId = i64;

/// Reassigned identifier in `[start, start + len)`.
pub type DenseId = u64;

/// Mapping from raw to dense identifiers for one physical vertex table.
///
/// Built by [`remap`] and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct LookupTable {
    ids: AHashMap<RawId, DenseId>,
    start: DenseId,
}

impl LookupTable {
    /// Dense id assigned to `raw`, if the table saw it.
    pub fn get(&self, raw: RawId) -> Option<DenseId> {
        self.ids.get(&raw).copied()
    }

    pub fn contains(&self, raw: RawId) -> bool {
        self.ids.contains_key(&raw)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// First dense id of the range.
    pub fn start(&self) -> DenseId {
        self.start
    }

    /// Largest dense id handed out, or `None` for an empty table.
    pub fn max_dense(&self) -> Option<DenseId> {
        if self.ids.is_empty() {
            None
        } else {
            Some(self.start + self.ids.len() as DenseId - 1)
        }
    }

    /// First dense id past the end of the range.
    pub fn next_dense(&self) -> DenseId {
        self.start + self.ids.len() as DenseId
    }

    pub fn iter(&self) -> impl Iterator<Item = (RawId, DenseId)> + '_ {
        self.ids.iter().map(|(&raw, &dense)| (raw, dense))
    }
}

/// Densify `raw_ids` starting at `start`.
///
/// Returns the rewritten sequence (same length and order as the input) and
/// the lookup table holding exactly one entry per distinct raw value.
pub fn remap<I>(raw_ids: I, start: DenseId) -> (Vec<DenseId>, LookupTable)
where
    I: IntoIterator<Item = RawId>,
{
    let raw_ids = raw_ids.into_iter();
    let mut ids: AHashMap<RawId, DenseId> = AHashMap::with_capacity(raw_ids.size_hint().0);
    let mut dense = Vec::with_capacity(raw_ids.size_hint().0);
    let mut next = start;

    for raw in raw_ids {
        let id = *ids.entry(raw).or_insert_with(|| {
            let assigned = next;
            next += 1;
            assigned
        });
        dense.push(id);
    }

    (dense, LookupTable { ids, start })
}
