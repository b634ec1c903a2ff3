//! In-memory tables and the storage seam they are loaded from / saved to.

use crate::error::{RemapError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A delimited table: one header row plus data rows, all cells kept as text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Where tables come from and go back to.
pub trait TableStore {
    /// Table files directly inside `dir` carrying `extension`, sorted by file name.
    fn list_tables(&self, dir: &Path, extension: &str) -> Result<Vec<PathBuf>>;

    fn load(&self, path: &Path) -> Result<Table>;

    /// Overwrite the table at `path`.
    fn save(&mut self, path: &Path, table: &Table) -> Result<()>;
}

/// Delimited text files on disk (`|`-separated by default).
#[derive(Debug, Clone)]
pub struct CsvTableStore {
    delimiter: u8,
}

impl Default for CsvTableStore {
    fn default() -> Self {
        Self { delimiter: b'|' }
    }
}

impl CsvTableStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }
}

impl TableStore for CsvTableStore {
    fn list_tables(&self, dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
        if !dir.is_dir() {
            return Err(RemapError::MissingDirectory {
                path: dir.to_path_buf(),
            });
        }

        let mut tables = Vec::new();
        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|source| RemapError::Walk {
                path: dir.to_path_buf(),
                source,
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.into_path();
            if path.extension().is_some_and(|ext| ext == extension) {
                tables.push(path);
            }
        }
        Ok(tables)
    }

    fn load(&self, path: &Path) -> Result<Table> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .from_path(path)
            .map_err(|e| RemapError::csv(path, e))?;

        let headers = reader
            .headers()
            .map_err(|e| RemapError::csv(path, e))?
            .iter()
            .map(str::to_string)
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| RemapError::csv(path, e))?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Table { headers, rows })
    }

    fn save(&mut self, path: &Path, table: &Table) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .quote_style(csv::QuoteStyle::Necessary)
            .from_path(path)
            .map_err(|e| RemapError::csv(path, e))?;

        writer
            .write_record(&table.headers)
            .map_err(|e| RemapError::csv(path, e))?;
        for row in &table.rows {
            writer
                .write_record(row)
                .map_err(|e| RemapError::csv(path, e))?;
        }
        writer.flush().map_err(|source| RemapError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
