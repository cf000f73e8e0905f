//! Plain-text rendering of a [`Dataset`], laid out like a pandas frame dump:
//! an index column, right-aligned values, and head/tail truncation for long
//! tables.

use crate::dataset::{Column, Dataset};
use std::fmt;

/// Rows shown from each end of a truncated table.
const TRUNCATED_EDGE_ROWS: usize = 5;

/// Longest fractional part printed for non-integral columns.
const MAX_DECIMALS: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableFormat {
    /// Tables longer than this are cut to their first and last rows.
    /// `None` prints everything.
    pub max_rows: Option<usize>,
}

impl Default for TableFormat {
    fn default() -> Self {
        TableFormat { max_rows: Some(60) }
    }
}

impl TableFormat {
    pub fn unlimited() -> Self {
        TableFormat { max_rows: None }
    }

    /// Rows kept at each end when `rows` must be truncated, `None` when the
    /// whole table fits. A limit smaller than twice the usual edge shrinks
    /// the edge instead.
    fn truncation_edge(&self, rows: usize) -> Option<usize> {
        let max = self.max_rows.filter(|&max| rows > max)?;
        let edge = TRUNCATED_EDGE_ROWS.min(max / 2).max(1);
        (rows > 2 * edge).then_some(edge)
    }

    pub fn render(&self, dataset: &Dataset) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_table(&mut out, dataset);
        out
    }

    pub fn write_table(&self, w: &mut impl fmt::Write, dataset: &Dataset) -> fmt::Result {
        if dataset.is_empty() {
            let names: Vec<&str> = Column::ALL.iter().map(|c| c.name()).collect();
            writeln!(w, "Empty dataset")?;
            writeln!(w, "Columns: [{}]", names.join(", "))?;
            return writeln!(w, "Index: []");
        }

        let edge = self.truncation_edge(dataset.len());
        let truncated = edge.is_some();
        let visible = visible_rows(dataset.len(), edge);

        // One string per cell; `None` marks the "..." separator row.
        let index_cells: Vec<Option<String>> = visible
            .iter()
            .map(|row| row.map(|idx| idx.to_string()))
            .collect();

        let mut columns: Vec<(Column, Vec<Option<String>>)> = Vec::with_capacity(3);
        for column in Column::ALL {
            let values = dataset.column(column);
            let decimals = column_decimals(&values);
            let cells = visible
                .iter()
                .map(|row| row.map(|idx| format!("{:.*}", decimals, values[idx])))
                .collect();
            columns.push((column, cells));
        }

        let index_width = index_cells
            .iter()
            .map(|cell| cell.as_deref().unwrap_or("..").len())
            .max()
            .unwrap_or(0);

        let widths: Vec<usize> = columns
            .iter()
            .map(|(column, cells)| {
                cells
                    .iter()
                    .map(|cell| cell.as_deref().unwrap_or("...").len())
                    .chain(std::iter::once(column.name().len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        write!(w, "{:index_width$}", "")?;
        for ((column, _), width) in columns.iter().zip(&widths) {
            write!(w, "  {:>width$}", column.name())?;
        }
        writeln!(w)?;

        for (line, index) in index_cells.iter().enumerate() {
            write!(w, "{:<index_width$}", index.as_deref().unwrap_or(".."))?;
            for ((_, cells), width) in columns.iter().zip(&widths) {
                write!(w, "  {:>width$}", cells[line].as_deref().unwrap_or("..."))?;
            }
            writeln!(w)?;
        }

        if truncated {
            writeln!(w)?;
            let (rows, cols) = dataset.shape();
            writeln!(w, "[{rows} rows x {cols} columns]")?;
        }

        Ok(())
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        TableFormat::default().write_table(f, self)
    }
}

fn visible_rows(len: usize, edge: Option<usize>) -> Vec<Option<usize>> {
    let Some(edge) = edge else {
        return (0..len).map(Some).collect();
    };

    (0..edge)
        .map(Some)
        .chain(std::iter::once(None))
        .chain((len - edge..len).map(Some))
        .collect()
}

/// Decimals needed to print every value of a column the same way: zero for
/// all-integral columns, otherwise the longest fraction any value needs.
fn column_decimals(values: &[f64]) -> usize {
    values
        .iter()
        .filter(|v| v.fract() != 0.0)
        .map(|v| {
            let text = v.to_string();
            text.split_once('.').map_or(0, |(_, frac)| frac.len())
        })
        .max()
        .unwrap_or(0)
        .min(MAX_DECIMALS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Measurement;

    fn dataset(rows: &[(f64, f64, f64)]) -> Dataset {
        Dataset::new(
            rows.iter()
                .map(|&(a, b, c)| Measurement::new(a, b, c))
                .collect(),
        )
    }

    #[test]
    fn renders_header_index_and_aligned_values() {
        let data = dataset(&[(5.0, 120.0, 3.0), (10.0, 95.0, 7.0)]);
        let expected = concat!(
            "   Input Length  Time(ms)  Output Length\n",
            "0             5       120              3\n",
            "1            10        95              7\n",
        );
        assert_eq!(data.to_string(), expected);
    }

    #[test]
    fn fractional_column_uses_common_precision() {
        let data = dataset(&[(1.0, 2.5, 3.0), (2.0, 10.25, 4.0)]);
        let text = data.to_string();
        assert!(text.contains(" 2.50"), "{text}");
        assert!(text.contains("10.25"), "{text}");
        // Integral columns stay integral.
        assert!(!text.contains("1.0"), "{text}");
    }

    #[test]
    fn precision_is_capped() {
        assert_eq!(column_decimals(&[1.0 / 3.0]), MAX_DECIMALS);
        assert_eq!(column_decimals(&[1.0, 2.0]), 0);
        assert_eq!(column_decimals(&[0.5, 0.125]), 3);
    }

    #[test]
    fn every_value_is_printed() {
        let rows: Vec<(f64, f64, f64)> = (0..20)
            .map(|i| (i as f64 * 3.0, 1000.0 + i as f64, 7.0 * i as f64))
            .collect();
        let text = dataset(&rows).to_string();
        for (a, b, c) in rows {
            for value in [a, b, c] {
                assert!(text.contains(&format!("{value}")), "missing {value}");
            }
        }
        assert!(!text.contains("rows x"));
    }

    #[test]
    fn long_tables_show_head_and_tail() {
        let rows: Vec<(f64, f64, f64)> = (0..100).map(|i| (i as f64, 1.0, 2.0)).collect();
        let text = dataset(&rows).to_string();
        let lines: Vec<&str> = text.lines().collect();

        // header + 5 + separator + 5 + blank + footer
        assert_eq!(lines.len(), 14);
        assert!(lines[1].starts_with('0'));
        assert!(lines[6].starts_with(".."));
        assert!(lines[6].contains("..."));
        assert!(lines[11].starts_with("99"));
        assert_eq!(lines[13], "[100 rows x 3 columns]");
    }

    fn index_column(text: &str) -> Vec<String> {
        text.lines()
            .skip(1)
            .take_while(|line| !line.is_empty())
            .filter_map(|line| line.split_whitespace().next())
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn small_row_limit_shrinks_head_and_tail() {
        let rows: Vec<(f64, f64, f64)> = (0..4).map(|i| (i as f64, 1.0, 2.0)).collect();
        let text = TableFormat { max_rows: Some(3) }.render(&dataset(&rows));

        assert_eq!(index_column(&text), ["0", "..", "3"]);
        assert!(text.ends_with("[4 rows x 3 columns]\n"), "{text}");
    }

    #[test]
    fn head_and_tail_never_overlap() {
        for max in 1..12 {
            for len in 1..15 {
                let rows: Vec<(f64, f64, f64)> =
                    (0..len).map(|i| (i as f64, 1.0, 2.0)).collect();
                let text = TableFormat { max_rows: Some(max) }.render(&dataset(&rows));
                let indexes: Vec<usize> = index_column(&text)
                    .iter()
                    .filter_map(|cell| cell.parse().ok())
                    .collect();

                assert!(
                    indexes.windows(2).all(|pair| pair[0] < pair[1]),
                    "max {max}, len {len}:\n{text}"
                );
                assert_eq!(indexes.first(), Some(&0));
                assert_eq!(indexes.last(), Some(&(len - 1)));
            }
        }
    }

    #[test]
    fn seven_rows_over_limit_of_six_show_three_each_end() {
        let rows: Vec<(f64, f64, f64)> = (0..7).map(|i| (i as f64, 1.0, 2.0)).collect();
        let text = TableFormat { max_rows: Some(6) }.render(&dataset(&rows));
        assert_eq!(index_column(&text), ["0", "1", "2", "..", "4", "5", "6"]);
    }

    #[test]
    fn unlimited_format_prints_all_rows() {
        let rows: Vec<(f64, f64, f64)> = (0..100).map(|i| (i as f64, 1.0, 2.0)).collect();
        let text = TableFormat::unlimited().render(&dataset(&rows));
        assert_eq!(text.lines().count(), 101);
    }

    #[test]
    fn empty_dataset_lists_columns() {
        let text = Dataset::default().to_string();
        assert!(text.contains("Columns: [Input Length, Time(ms), Output Length]"));
    }
}
