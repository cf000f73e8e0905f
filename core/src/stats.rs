use crate::dataset::{Column, Dataset};
use std::fmt;

/// Basic statistics for one column: count, mean, sample standard deviation,
/// min and max.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColumnStatistics {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
}

impl ColumnStatistics {
    /// Returns `None` for an empty column.
    pub fn of(data: &[f64]) -> Option<Self> {
        let mean = mean(data)?;
        Some(ColumnStatistics {
            count: data.len(),
            mean,
            std: std_deviation(data, mean),
            min: data.iter().copied().fold(f64::MAX, f64::min),
            max: data.iter().copied().fold(f64::MIN, f64::max),
        })
    }
}

fn mean(data: &[f64]) -> Option<f64> {
    match data.len() {
        0 => None,
        count => Some(data.iter().sum::<f64>() / count as f64),
    }
}

// Sample (n - 1) deviation, 0 for a single value.
fn std_deviation(data: &[f64], mean: f64) -> f64 {
    if data.len() < 2 {
        return 0.0;
    }

    let variance = data
        .iter()
        .map(|value| {
            let diff = mean - value;
            diff * diff
        })
        .sum::<f64>()
        / (data.len() - 1) as f64;

    variance.sqrt()
}

/// Per-column statistics of a whole dataset.
#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    columns: Vec<(Column, ColumnStatistics)>,
}

impl Summary {
    pub fn of(dataset: &Dataset) -> Option<Self> {
        let columns = Column::ALL
            .iter()
            .map(|&column| ColumnStatistics::of(&dataset.column(column)).map(|s| (column, s)))
            .collect::<Option<Vec<_>>>()?;

        Some(Summary { columns })
    }

    pub fn get(&self, column: Column) -> Option<&ColumnStatistics> {
        self.columns
            .iter()
            .find(|(c, _)| *c == column)
            .map(|(_, stats)| stats)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Column, ColumnStatistics)> {
        self.columns.iter()
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const LABEL_WIDTH: usize = 5;
        let widths: Vec<usize> = self
            .columns
            .iter()
            .map(|(column, _)| column.name().len().max(12))
            .collect();

        write!(f, "{:LABEL_WIDTH$}", "")?;
        for ((column, _), width) in self.columns.iter().zip(&widths) {
            write!(f, "  {:>width$}", column.name())?;
        }
        writeln!(f)?;

        let rows: [(&str, fn(&ColumnStatistics) -> f64); 5] = [
            ("count", |s| s.count as f64),
            ("mean", |s| s.mean),
            ("std", |s| s.std),
            ("min", |s| s.min),
            ("max", |s| s.max),
        ];

        for (label, field) in rows {
            write!(f, "{label:<LABEL_WIDTH$}")?;
            for ((_, stats), width) in self.columns.iter().zip(&widths) {
                write!(f, "  {:>width$.6}", field(stats))?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
