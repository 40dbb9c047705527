//! Data Processor Module
//! Column selection and unit conversion for a single series.

use crate::config::{Columns, SeriesSpec};
use crate::data::DataTable;
use crate::error::{PlotError, PlotResult};

/// Turns a loaded table into plot points for one series.
pub struct DataProcessor;

impl DataProcessor {
    /// Select the configured columns and apply the transform to y.
    ///
    /// Every row is checked for column count before any value is parsed, so a
    /// short row fails the series before it yields a single point. A cell in a
    /// selected column that is not a number aborts the series.
    pub fn extract_points(table: &DataTable, series: &SeriesSpec) -> PlotResult<Vec<[f64; 2]>> {
        let needed = series.columns.highest();
        if let Some(row) = table.rows().iter().find(|row| row.cells.len() < needed) {
            return Err(PlotError::ColumnIndex {
                path: table.path().to_path_buf(),
                line: row.line,
                column: needed,
                available: row.cells.len(),
            });
        }

        table
            .rows()
            .iter()
            .enumerate()
            .map(|(ordinal, row)| {
                let cell = |column: usize| Self::parse_cell(table, row.line, column, &row.cells);
                let (x, y) = match series.columns {
                    Columns::Single(y) => (ordinal as f64, cell(y)?),
                    Columns::Pair(x, y) => (cell(x)?, cell(y)?),
                };
                Ok([x, series.transform.apply(y)])
            })
            .collect()
    }

    fn parse_cell(
        table: &DataTable,
        line: usize,
        column: usize,
        cells: &[String],
    ) -> PlotResult<f64> {
        let raw = &cells[column - 1];
        raw.parse::<f64>().map_err(|_| PlotError::Parse {
            path: table.path().to_path_buf(),
            line,
            column,
            cell: raw.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Transform;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn table(text: &str) -> DataTable {
        DataTable::parse("test.out", text)
    }

    #[test]
    fn converts_joules_to_kilojoules() {
        let t = table("0.0 0\n0.5 -5500\n1.0 0\n");
        let series =
            SeriesSpec::new("test.out", Columns::Pair(1, 2)).with_transform(Transform::DivideBy1000);
        let points = DataProcessor::extract_points(&t, &series).unwrap();
        assert_eq!(points.len(), 3);
        assert_relative_eq!(points[0][0], 0.0);
        assert_relative_eq!(points[0][1], 0.0);
        assert_relative_eq!(points[1][0], 0.5);
        assert_relative_eq!(points[1][1], -5.5);
        assert_relative_eq!(points[2][0], 1.0);
        assert_relative_eq!(points[2][1], 0.0);
    }

    #[test]
    fn point_count_matches_row_count() {
        let t = table("# x2 he\n0.1 1\n0.2 2\n0.3 3\n0.4 4\n");
        let series = SeriesSpec::new("test.out", Columns::Pair(1, 2));
        let points = DataProcessor::extract_points(&t, &series).unwrap();
        assert_eq!(points.len(), t.row_count());
    }

    #[test]
    fn single_column_uses_row_ordinal_for_x() {
        let t = table("0.1 10\n0.2 20\n");
        let series = SeriesSpec::new("test.out", Columns::Single(2));
        let points = DataProcessor::extract_points(&t, &series).unwrap();
        assert_eq!(points, vec![[0.0, 10.0], [1.0, 20.0]]);
    }

    #[test]
    fn selects_later_columns() {
        let t = table("0.5 -100 -200 -300\n");
        let series = SeriesSpec::new("test.out", Columns::Pair(1, 4));
        let points = DataProcessor::extract_points(&t, &series).unwrap();
        assert_eq!(points, vec![[0.5, -300.0]]);
    }

    #[test]
    fn column_out_of_range_fails_before_any_point() {
        let t = table("0.0 1 2\n0.5 3 4\n");
        let series = SeriesSpec::new("test.out", Columns::Pair(1, 5));
        match DataProcessor::extract_points(&t, &series) {
            Err(PlotError::ColumnIndex {
                line,
                column,
                available,
                ..
            }) => {
                assert_eq!(line, 1);
                assert_eq!(column, 5);
                assert_eq!(available, 3);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn short_row_late_in_file_is_still_a_column_error() {
        let t = table("0.0 1\n0.5\n");
        let series = SeriesSpec::new("test.out", Columns::Pair(1, 2));
        assert!(matches!(
            DataProcessor::extract_points(&t, &series),
            Err(PlotError::ColumnIndex { line: 2, .. })
        ));
    }

    #[test]
    fn malformed_selected_cell_aborts_series() {
        let t = table("0.0 1\n0.5 n/a\n1.0 3\n");
        let series = SeriesSpec::new("test.out", Columns::Pair(1, 2));
        match DataProcessor::extract_points(&t, &series) {
            Err(PlotError::Parse { line, column, cell, .. }) => {
                assert_eq!(line, 2);
                assert_eq!(column, 2);
                assert_eq!(cell, "n/a");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn unselected_columns_are_not_parsed() {
        let t = table("0.0 label 1\n");
        let series = SeriesSpec::new("test.out", Columns::Pair(1, 3));
        let points = DataProcessor::extract_points(&t, &series).unwrap();
        assert_eq!(points, vec![[0.0, 1.0]]);
    }

    #[test]
    fn empty_table_gives_empty_series() {
        let t = table("");
        let series = SeriesSpec::new("test.out", Columns::Pair(1, 7));
        assert!(DataProcessor::extract_points(&t, &series).unwrap().is_empty());
    }

    proptest! {
        #[test]
        fn divide_by_1000_is_linear(a in -1.0e6f64..1.0e6, b in -1.0e6f64..1.0e6) {
            let t = Transform::DivideBy1000;
            prop_assert!((t.apply(a + b) - (t.apply(a) + t.apply(b))).abs() <= 1e-9);
            prop_assert!((t.apply(3.0 * a) - 3.0 * t.apply(a)).abs() <= 1e-9);
        }
    }
}
