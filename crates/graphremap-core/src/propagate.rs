//! Mapping propagator: remap vertex tables, then rewrite the edge tables that reference them.
//!
//! ```text
//!   for group in [static, dynamic]:
//!     vertices/*.csv ──remap id column──► MappingStore (type → lookup, plus aliases)
//!     edges/*.csv    ◄──substitute endpoints── MappingStore
//! ```
//!
//! One `MappingStore` spans all groups, so dynamic edges can point at static
//! vertex types (`Person_isLocatedIn_City`).

use crate::config::{EndpointColumns, RemapConfig, TableGroup};
use crate::error::{RemapError, Result};
use crate::layout::{vertex_type, EdgeName};
use crate::mapper::{self, DenseId, LookupTable, RawId};
use crate::report::{EdgeTableStats, GroupReport, RemapReport, VertexTableStats};
use crate::table::{Table, TableStore};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Lookup tables keyed by entity type name. Aliases share the physical table's `Arc`.
#[derive(Debug, Clone, Default)]
pub struct MappingStore {
    tables: BTreeMap<String, Arc<LookupTable>>,
}

impl MappingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, entity_type: &str) -> Option<&Arc<LookupTable>> {
        self.tables.get(entity_type)
    }

    /// Register `lookup` under `entity_type` and every alias. Returns the names that
    /// already had a table and were replaced.
    pub fn insert(
        &mut self,
        entity_type: &str,
        lookup: Arc<LookupTable>,
        aliases: &[String],
    ) -> Vec<String> {
        let mut replaced = Vec::new();
        for name in std::iter::once(entity_type).chain(aliases.iter().map(String::as_str)) {
            if self
                .tables
                .insert(name.to_string(), Arc::clone(&lookup))
                .is_some()
            {
                replaced.push(name.to_string());
            }
        }
        replaced
    }

    /// Start offset for the next continuous-numbering table: one past the largest dense
    /// id any of `kinds` has been given so far, or 0.
    pub fn continuous_offset(&self, kinds: &[String]) -> DenseId {
        kinds
            .iter()
            .filter_map(|kind| self.tables.get(kind))
            .filter_map(|lookup| lookup.max_dense())
            .max()
            .map_or(0, |max| max + 1)
    }

    pub fn entity_types(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

pub struct Propagator<S> {
    store: S,
    config: RemapConfig,
    mappings: MappingStore,
}

impl<S: TableStore> Propagator<S> {
    pub fn new(store: S, config: RemapConfig) -> Self {
        Self {
            store,
            config,
            mappings: MappingStore::new(),
        }
    }

    pub fn mappings(&self) -> &MappingStore {
        &self.mappings
    }

    pub fn into_parts(self) -> (S, MappingStore) {
        (self.store, self.mappings)
    }

    /// Remap every group under `root` in configuration order.
    pub fn process(&mut self, root: &Path) -> Result<RemapReport> {
        let mut report = RemapReport::default();
        for group in self.config.groups.clone() {
            report.groups.push(self.process_group(root, &group)?);
        }
        debug!(
            entity_types = ?self.mappings.entity_types().collect::<Vec<_>>(),
            "lookup tables built"
        );
        Ok(report)
    }

    /// Phase 1 (all vertex tables) then phase 2 (all edge tables) for one group.
    pub fn process_group(&mut self, root: &Path, group: &TableGroup) -> Result<GroupReport> {
        let group_dir = root.join(&group.name);
        let vertices_dir = group_dir.join(&self.config.vertices_dir);
        let edges_dir = group_dir.join(&self.config.edges_dir);
        info!(group = %group.name, dir = %group_dir.display(), "processing table group");

        let mut report = GroupReport::new(&group.name);

        for path in self.store.list_tables(&vertices_dir, &self.config.extension)? {
            report += self.remap_vertex_table(&path)?;
        }

        for path in self.store.list_tables(&edges_dir, &self.config.extension)? {
            report += self.rewrite_edge_table(&path, group.endpoints)?;
        }

        Ok(report)
    }

    /// Densify the identifier column of one vertex table and record its lookup table.
    pub fn remap_vertex_table(&mut self, path: &Path) -> Result<VertexTableStats> {
        let entity_type = vertex_type(path)?;
        let mut table = self.store.load(path)?;

        let id_col = table
            .column_index(&self.config.id_column)
            .ok_or_else(|| RemapError::MissingColumn {
                path: path.to_path_buf(),
                column: self.config.id_column.clone(),
            })?;
        let raw_ids = parse_column(path, &table, id_col)?;

        let start = if self.config.is_continuous(&entity_type) {
            self.mappings
                .continuous_offset(&self.config.continuous_kinds)
        } else {
            0
        };
        debug!(entity_type = %entity_type, start, "remapping vertex identifiers");

        let (dense, lookup) = mapper::remap(raw_ids, start);
        for (row, id) in table.rows.iter_mut().zip(&dense) {
            row[id_col] = id.to_string();
        }

        let stats = VertexTableStats {
            rows: table.row_count(),
            identifiers_assigned: lookup.len(),
        };

        let aliases = self.config.aliases.aliases_of(&entity_type).to_vec();
        let replaced = self
            .mappings
            .insert(&entity_type, Arc::new(lookup), &aliases);
        if !replaced.is_empty() {
            warn!(
                entity_type = %entity_type,
                replaced = ?replaced,
                "lookup table replaced an earlier one"
            );
        }

        self.store.save(path, &table)?;
        info!(
            path = %path.display(),
            rows = stats.rows,
            distinct = stats.identifiers_assigned,
            start,
            "remapped vertex table"
        );
        Ok(stats)
    }

    /// Substitute both endpoint columns of one edge table through the stored lookup tables.
    pub fn rewrite_edge_table(
        &mut self,
        path: &Path,
        endpoints: EndpointColumns,
    ) -> Result<EdgeTableStats> {
        let name = EdgeName::from_path(path)?;
        let source_lookup = self.lookup_for(&name.source, path)?;
        let destination_lookup = self.lookup_for(&name.destination, path)?;

        let mut table = self.store.load(path)?;
        let mut stats = EdgeTableStats {
            rows: table.row_count(),
            ..Default::default()
        };

        for (col, entity_type, lookup) in [
            (endpoints.source, &name.source, &source_lookup),
            (endpoints.destination, &name.destination, &destination_lookup),
        ] {
            let header = endpoint_header(path, &table, col, entity_type)?;
            for (i, row) in table.rows.iter_mut().enumerate() {
                let cell = row.get_mut(col).ok_or_else(|| RemapError::MissingColumn {
                    path: path.to_path_buf(),
                    column: header.clone(),
                })?;
                let raw = parse_raw(path, i, &header, cell)?;
                match lookup.get(raw) {
                    Some(dense) => {
                        *cell = dense.to_string();
                        stats.endpoints_rewritten += 1;
                    }
                    None => stats.endpoints_passed_through += 1,
                }
            }
        }

        self.store.save(path, &table)?;
        info!(
            path = %path.display(),
            rows = stats.rows,
            rewritten = stats.endpoints_rewritten,
            passed_through = stats.endpoints_passed_through,
            "rewrote edge table"
        );
        Ok(stats)
    }

    fn lookup_for(&self, entity_type: &str, table: &Path) -> Result<Arc<LookupTable>> {
        self.mappings
            .get(entity_type)
            .cloned()
            .ok_or_else(|| RemapError::MissingMapping {
                entity_type: entity_type.to_string(),
                table: table.to_path_buf(),
            })
    }
}

/// Header of endpoint column `col`; warns when it does not name `entity_type`
/// (SNB headers look like `PersonId`, `Person1Id`, `CommentId`).
fn endpoint_header(path: &Path, table: &Table, col: usize, entity_type: &str) -> Result<String> {
    if col >= table.column_count() {
        return Err(RemapError::MissingColumn {
            path: path.to_path_buf(),
            column: format!("#{col} ({entity_type} endpoint)"),
        });
    }
    let header = &table.headers[col];
    if !header.starts_with(entity_type) {
        warn!(
            path = %path.display(),
            column = col,
            header = %header,
            expected = %entity_type,
            "endpoint column header does not name its entity type"
        );
    }
    Ok(header.clone())
}

fn parse_column(path: &Path, table: &Table, col: usize) -> Result<Vec<RawId>> {
    let column = &table.headers[col];
    table
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| parse_raw(path, i, column, row.get(col).map_or("", String::as_str)))
        .collect()
}

fn parse_raw(path: &Path, row_index: usize, column: &str, value: &str) -> Result<RawId> {
    value
        .trim()
        .parse::<RawId>()
        .map_err(|_| RemapError::InvalidIdentifier {
            path: path.to_path_buf(),
            line: row_index + 2,
            column: column.to_string(),
            value: value.to_string(),
        })
}
