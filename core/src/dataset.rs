use serde::Serialize;

/// One benchmark run: how long the computation took for a given input, and
/// how large its output was.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Measurement {
    #[serde(rename = "Input Length")]
    pub input_length: f64,
    #[serde(rename = "Time(ms)")]
    pub time_ms: f64,
    #[serde(rename = "Output Length")]
    pub output_length: f64,
}

impl Measurement {
    pub fn new(input_length: f64, time_ms: f64, output_length: f64) -> Self {
        Measurement {
            input_length,
            time_ms,
            output_length,
        }
    }

    pub fn value(&self, column: Column) -> f64 {
        match column {
            Column::InputLength => self.input_length,
            Column::TimeMs => self.time_ms,
            Column::OutputLength => self.output_length,
        }
    }
}

/// The three columns of a measurement file, in file order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Column {
    InputLength,
    TimeMs,
    OutputLength,
}

impl Column {
    pub const ALL: [Column; 3] = [Column::InputLength, Column::TimeMs, Column::OutputLength];

    pub fn name(self) -> &'static str {
        match self {
            Column::InputLength => "Input Length",
            Column::TimeMs => "Time(ms)",
            Column::OutputLength => "Output Length",
        }
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Measurements in the order they appeared in the source file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    rows: Vec<Measurement>,
}

impl Dataset {
    pub fn new(rows: Vec<Measurement>) -> Self {
        Dataset { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// `(rows, columns)`; the column count is always 3.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), Column::ALL.len())
    }

    pub fn rows(&self) -> &[Measurement] {
        &self.rows
    }

    pub fn get(&self, index: usize) -> Option<&Measurement> {
        self.rows.get(index)
    }

    /// Copies one column out, keeping row order.
    pub fn column(&self, column: Column) -> Vec<f64> {
        self.rows.iter().map(|row| row.value(column)).collect()
    }

    /// Rows as a JSON array of records keyed by column name.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.rows)
    }
}

impl From<Vec<Measurement>> for Dataset {
    fn from(rows: Vec<Measurement>) -> Self {
        Dataset::new(rows)
    }
}
