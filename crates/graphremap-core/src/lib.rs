//! Dense identifier remapping for graph datasets
//!
//! Rewrites LDBC SNB style vertex/edge tables so every entity type's
//! identifiers form a contiguous integer range:
//! - `mapper`: raw → dense ids in order of first appearance
//! - `propagate`: vertex tables first, then edge endpoints through the
//!   recorded lookup tables (aliases and continuous ranges included)
//! - `table`: the tabular source/sink seam (`|`-delimited files by default)

pub mod config;
pub mod error;
pub mod layout;
pub mod mapper;
pub mod propagate;
pub mod report;
pub mod table;

pub use config::{AliasTable, EndpointColumns, RemapConfig, TableGroup};
pub use error::{RemapError, Result};
pub use layout::EdgeName;
pub use mapper::{remap, DenseId, LookupTable, RawId};
pub use propagate::{MappingStore, Propagator};
pub use report::{EdgeTableStats, GroupReport, RemapReport, VertexTableStats};
pub use table::{CsvTableStore, Table, TableStore};

/// Remap the dataset under `root` in place with the SNB defaults.
pub fn remap_dataset(root: &std::path::Path) -> Result<RemapReport> {
    Propagator::new(CsvTableStore::new(), RemapConfig::default()).process(root)
}
