//! Data File Loader Module
//! Reads whitespace-delimited numeric tables written by the fitting step.

use crate::error::{PlotError, PlotResult};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// One data row, cells kept as text until a column is selected.
#[derive(Debug, Clone, PartialEq)]
pub struct DataRow {
    /// 1-based line number in the source file
    pub line: usize,
    pub cells: Vec<String>,
}

/// Rows of one data file, comment and blank lines removed.
#[derive(Debug, Clone)]
pub struct DataTable {
    path: PathBuf,
    rows: Vec<DataRow>,
}

impl DataTable {
    /// Split text into rows. Lines starting with `#` are comments.
    pub fn parse(path: impl Into<PathBuf>, text: &str) -> Self {
        let rows = text
            .lines()
            .enumerate()
            .filter_map(|(idx, line)| {
                let trimmed = line.trim();
                if trimmed.is_empty() || trimmed.starts_with('#') {
                    return None;
                }
                Some(DataRow {
                    line: idx + 1,
                    cells: trimmed.split_whitespace().map(str::to_string).collect(),
                })
            })
            .collect();

        Self {
            path: path.into(),
            rows,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn rows(&self) -> &[DataRow] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Loads data files on demand.
pub struct DataLoader;

impl DataLoader {
    /// Read a whole file and release the handle before returning.
    pub fn load_table(path: &Path) -> PlotResult<DataTable> {
        let text = fs::read_to_string(path).map_err(|source| PlotError::DataSource {
            path: path.to_path_buf(),
            source,
        })?;
        let table = DataTable::parse(path, &text);
        debug!(path = %path.display(), rows = table.row_count(), "loaded data file");
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_comments_and_blank_lines() {
        let text = "# x2      h1exp/(J/mol)\n\n0.100000  -1.23400e+03\n  # trailing note\n0.200000\t-2.5e3\n";
        let table = DataTable::parse("dioxane_h1.out", text);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows()[0].line, 3);
        assert_eq!(table.rows()[0].cells, vec!["0.100000", "-1.23400e+03"]);
        assert_eq!(table.rows()[1].line, 5);
        assert_eq!(table.rows()[1].cells, vec!["0.200000", "-2.5e3"]);
    }

    #[test]
    fn empty_text_yields_empty_table() {
        let table = DataTable::parse("empty.out", "# header only\n");
        assert!(table.is_empty());
    }

    #[test]
    fn missing_file_is_a_data_source_error() {
        let err = DataLoader::load_table(Path::new("/nonexistent/dioxane_hrk.out")).unwrap_err();
        match err {
            PlotError::DataSource { path, .. } => {
                assert_eq!(path, PathBuf::from("/nonexistent/dioxane_hrk.out"))
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
