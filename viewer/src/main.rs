mod app;
mod settings;

use anyhow::Context;
use clap::Parser;
use graph_core::{load_dataset, Column, Dataset, ScatterPlot, Summary};
use std::io::{self, Write};

use app::ComplexityGraphApp;
use settings::{OutputFormat, Settings};

/// Writes the dataset (and optionally its summary) the way the settings ask.
fn print_dataset(out: &mut impl Write, dataset: &Dataset, settings: &Settings) -> anyhow::Result<()> {
    match settings.format {
        OutputFormat::Table => {
            let mut text = String::new();
            settings
                .table_format()
                .write_table(&mut text, dataset)
                .context("failed to format dataset")?;
            out.write_all(text.as_bytes())?;
        }
        OutputFormat::Json => {
            writeln!(out, "{}", dataset.to_json().context("failed to serialize dataset")?)?;
        }
    }

    if settings.describe {
        if let Some(summary) = Summary::of(dataset) {
            writeln!(out)?;
            write!(out, "{summary}")?;
        }
    }

    out.flush()?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let settings = Settings::parse();
    graph_core::initialize_logger(settings.log_level, settings.log_file.as_deref())?;

    let dataset = load_dataset(&settings.data_file)
        .with_context(|| format!("could not load {}", settings.data_file.display()))?;
    print_dataset(&mut io::stdout().lock(), &dataset, &settings)?;

    if settings.no_window {
        return Ok(());
    }

    // A dataset that cannot be plotted fails here, before a window exists.
    let plot = ScatterPlot::from_dataset(
        &dataset,
        Column::InputLength,
        settings.y_axis.column(),
        settings.title.as_str(),
    )?;

    app::run(ComplexityGraphApp::new(
        Some(settings.data_file),
        dataset,
        plot,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use graph_core::Measurement;

    fn sample() -> Dataset {
        Dataset::new(vec![
            Measurement::new(5.0, 120.0, 3.0),
            Measurement::new(10.0, 95.0, 7.0),
        ])
    }

    fn printed(args: &[&str]) -> String {
        let settings = Settings::try_parse_from(args).unwrap();
        let mut out = Vec::new();
        print_dataset(&mut out, &sample(), &settings).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn table_output_by_default() {
        let text = printed(&["complexity_graph"]);
        assert!(text.starts_with("   Input Length  Time(ms)  Output Length\n"));
        assert!(text.contains("120"));
        assert!(!text.contains("count"));
    }

    #[test]
    fn json_output_lists_records() {
        let text = printed(&["complexity_graph", "--format", "json"]);
        assert!(text.trim_start().starts_with('['));
        assert!(text.contains("\"Time(ms)\": 120.0"), "{text}");
    }

    #[test]
    fn describe_appends_summary() {
        let text = printed(&["complexity_graph", "--describe"]);
        assert!(text.contains("\ncount"));
        assert!(text.contains("mean"));
    }
}
