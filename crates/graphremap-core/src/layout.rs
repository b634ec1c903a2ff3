//! Table file naming conventions.
//!
//! - vertex tables: `<EntityType>.csv`
//! - edge tables:   `<SourceType>_<relation>_<DestinationType>[_<partition>...].csv`

use crate::error::{RemapError, Result};
use std::path::Path;

fn file_stem(path: &Path) -> Result<&str> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| RemapError::MalformedFileName {
            path: path.to_path_buf(),
            reason: "file name has no UTF-8 stem".to_string(),
        })
}

/// Entity type of a vertex table (its file stem).
pub fn vertex_type(path: &Path) -> Result<String> {
    file_stem(path).map(str::to_string)
}

/// Entity types and relationship parsed from an edge table file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeName {
    pub source: String,
    pub relation: String,
    pub destination: String,
}

impl EdgeName {
    /// Segments past the third (datagen partition suffixes such as `_0_0`) are ignored.
    pub fn parse(stem: &str) -> std::result::Result<Self, String> {
        let parts: Vec<&str> = stem.split('_').collect();
        match parts.as_slice() {
            [source, relation, destination, ..]
                if !source.is_empty() && !relation.is_empty() && !destination.is_empty() =>
            {
                Ok(Self {
                    source: source.to_string(),
                    relation: relation.to_string(),
                    destination: destination.to_string(),
                })
            }
            _ => Err(format!(
                "expected `<Source>_<relation>_<Destination>`, found `{stem}`"
            )),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        Self::parse(file_stem(path)?).map_err(|reason| RemapError::MalformedFileName {
            path: path.to_path_buf(),
            reason,
        })
    }
}
