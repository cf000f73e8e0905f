use crate::dataset::{Column, Dataset};

pub const DEFAULT_TITLE: &str =
    "3 Iterations, 5 Propositional Variables, Delta = 5, Interval Max = 10";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PlotError {
    #[error("dataset has no rows to plot")]
    NoPoints,
}

/// Everything needed to draw a scatter plot of one column against another.
#[derive(Clone, Debug, PartialEq)]
pub struct ScatterPlot {
    pub title: String,
    pub x: Column,
    pub y: Column,
    /// `[x, y]` pairs, one per dataset row, in row order.
    pub points: Vec<[f64; 2]>,
    /// Marker colour as RGB.
    pub color: [u8; 3],
}

impl ScatterPlot {
    pub fn from_dataset(
        dataset: &Dataset,
        x: Column,
        y: Column,
        title: impl Into<String>,
    ) -> Result<Self, PlotError> {
        if dataset.is_empty() {
            return Err(PlotError::NoPoints);
        }

        let points = dataset
            .rows()
            .iter()
            .map(|row| [row.value(x), row.value(y)])
            .collect();

        Ok(ScatterPlot {
            title: title.into(),
            x,
            y,
            points,
            color: marker_color(y),
        })
    }

    pub fn x_label(&self) -> &'static str {
        self.x.name()
    }

    pub fn y_label(&self) -> &'static str {
        self.y.name()
    }

    /// `([x_min, y_min], [x_max, y_max])` over all points.
    pub fn bounds(&self) -> ([f64; 2], [f64; 2]) {
        self.points.iter().fold(
            ([f64::MAX, f64::MAX], [f64::MIN, f64::MIN]),
            |(min, max), p| {
                (
                    [min[0].min(p[0]), min[1].min(p[1])],
                    [max[0].max(p[0]), max[1].max(p[1])],
                )
            },
        )
    }
}

// Timings are drawn red and output sizes blue.
fn marker_color(y: Column) -> [u8; 3] {
    match y {
        Column::OutputLength => [0, 0, 255],
        Column::InputLength | Column::TimeMs => [255, 0, 0],
    }
}
