use clap::{Parser, ValueEnum};
use graph_core::{Column, TableFormat, DEFAULT_TITLE};
use log::LevelFilter;
use std::path::PathBuf;

pub(crate) const DEFAULT_DATA_FILE: &str = "complexities4.txt";

/// Which column goes on the vertical axis; the horizontal axis is always
/// the input length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum YAxis {
    /// Elapsed time in milliseconds.
    Time,
    /// Length of the computed output.
    Output,
}

impl YAxis {
    pub(crate) fn column(self) -> Column {
        match self {
            YAxis::Time => Column::TimeMs,
            YAxis::Output => Column::OutputLength,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Aligned text table.
    Table,
    /// JSON array of records keyed by column name.
    Json,
}

/// Prints a file of benchmark measurements and plots time against input
/// length.
#[derive(Debug, Parser)]
#[command(name = "complexity_graph", version, about)]
pub(crate) struct Settings {
    /// Measurement file: three whitespace-separated numbers per line
    /// (input length, time in ms, output length), no header.
    #[arg(env = "COMPLEXITY_GRAPH_DATA", default_value = DEFAULT_DATA_FILE)]
    pub(crate) data_file: PathBuf,

    /// Plot title.
    #[arg(long, env = "COMPLEXITY_GRAPH_TITLE", default_value = DEFAULT_TITLE)]
    pub(crate) title: String,

    /// Column plotted on the vertical axis.
    #[arg(long = "y", value_enum, default_value_t = YAxis::Time)]
    pub(crate) y_axis: YAxis,

    /// Longest table printed in full; longer tables show only head and
    /// tail. 0 prints every row.
    #[arg(long, default_value_t = 60)]
    pub(crate) max_rows: usize,

    /// How the dataset is written to stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub(crate) format: OutputFormat,

    /// Also print count, mean, std, min and max per column.
    #[arg(long)]
    pub(crate) describe: bool,

    /// Print the dataset and exit without opening the plot window.
    #[arg(long)]
    pub(crate) no_window: bool,

    /// Log level for stderr (off, error, warn, info, debug, trace).
    #[arg(long, env = "COMPLEXITY_GRAPH_LOG", default_value = "warn")]
    pub(crate) log_level: LevelFilter,

    /// Also append log records to this file.
    #[arg(long)]
    pub(crate) log_file: Option<PathBuf>,
}

impl Settings {
    pub(crate) fn table_format(&self) -> TableFormat {
        match self.max_rows {
            0 => TableFormat::unlimited(),
            max => TableFormat {
                max_rows: Some(max),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_reproduce_fixed_behaviour() {
        let settings = Settings::try_parse_from(["complexity_graph"]).unwrap();
        assert_eq!(settings.data_file, PathBuf::from(DEFAULT_DATA_FILE));
        assert_eq!(settings.title, DEFAULT_TITLE);
        assert_eq!(settings.y_axis.column(), Column::TimeMs);
        assert_eq!(settings.format, OutputFormat::Table);
        assert_eq!(settings.table_format(), TableFormat::default());
        assert_eq!(settings.log_level, LevelFilter::Warn);
        assert!(!settings.describe);
        assert!(!settings.no_window);
        assert!(settings.log_file.is_none());
    }

    #[test]
    fn flags_override_defaults() {
        let settings = Settings::try_parse_from([
            "complexity_graph",
            "runs/complexities5.txt",
            "--title",
            "Delta = 3",
            "--y",
            "output",
            "--max-rows",
            "0",
            "--format",
            "json",
            "--describe",
            "--no-window",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(settings.data_file, PathBuf::from("runs/complexities5.txt"));
        assert_eq!(settings.title, "Delta = 3");
        assert_eq!(settings.y_axis.column(), Column::OutputLength);
        assert_eq!(settings.table_format(), TableFormat::unlimited());
        assert_eq!(settings.format, OutputFormat::Json);
        assert!(settings.describe);
        assert!(settings.no_window);
        assert_eq!(settings.log_level, LevelFilter::Debug);
    }

    #[test]
    fn rejects_unknown_axis() {
        assert!(Settings::try_parse_from(["complexity_graph", "--y", "memory"]).is_err());
    }
}
