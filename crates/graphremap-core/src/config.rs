//! Run configuration.
//!
//! `RemapConfig::default()` describes the LDBC SNB layout:
//!
//! ```text
//! <root>/
//!   static/   vertices/*.csv   edges/*.csv   (endpoints in columns 0, 1)
//!   dynamic/  vertices/*.csv   edges/*.csv   (endpoints in columns 1, 2)
//! ```

/// Positions of the source and destination identifier columns in an edge table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointColumns {
    pub source: usize,
    pub destination: usize,
}

/// One subdirectory of the dataset root holding `vertices/` and `edges/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableGroup {
    pub name: String,
    pub endpoints: EndpointColumns,
}

impl TableGroup {
    pub fn new(name: impl Into<String>, source: usize, destination: usize) -> Self {
        Self {
            name: name.into(),
            endpoints: EndpointColumns {
                source,
                destination,
            },
        }
    }
}

/// Composite vertex types whose single physical table also backs other type names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    entries: Vec<(String, Vec<String>)>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_aliases<I, S>(mut self, physical: impl Into<String>, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries.push((
            physical.into(),
            aliases.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Logical names backed by the `physical` table (empty if it is not composite).
    pub fn aliases_of(&self, physical: &str) -> &[String] {
        self.entries
            .iter()
            .find(|(name, _)| name == physical)
            .map(|(_, aliases)| aliases.as_slice())
            .unwrap_or(&[])
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemapConfig {
    /// Processed in order; lookup tables from earlier groups stay visible to later ones.
    pub groups: Vec<TableGroup>,
    pub aliases: AliasTable,
    /// Vertex kinds numbered in one shared, continuous range.
    pub continuous_kinds: Vec<String>,
    /// Header of the primary identifier column in vertex tables.
    pub id_column: String,
    /// Extension of table files (without the dot).
    pub extension: String,
    pub vertices_dir: String,
    pub edges_dir: String,
}

impl RemapConfig {
    pub fn is_continuous(&self, entity_type: &str) -> bool {
        self.continuous_kinds.iter().any(|kind| kind == entity_type)
    }
}

impl Default for RemapConfig {
    fn default() -> Self {
        Self {
            groups: vec![TableGroup::new("static", 0, 1), TableGroup::new("dynamic", 1, 2)],
            aliases: AliasTable::new()
                .with_aliases("Place", ["City", "Country", "Continent"])
                .with_aliases("Organisation", ["Company", "University"]),
            continuous_kinds: vec!["Comment".to_string(), "Post".to_string()],
            id_column: "id".to_string(),
            extension: "csv".to_string(),
            vertices_dir: "vertices".to_string(),
            edges_dir: "edges".to_string(),
        }
    }
}
