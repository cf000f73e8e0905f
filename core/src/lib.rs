use anyhow::Context;
use log::LevelFilter;
use log4rs::{
    append::{
        console::{ConsoleAppender, Target},
        file::FileAppender,
    },
    config::{Appender, Config, Root},
    encode::{pattern::PatternEncoder, Encode},
    filter::threshold::ThresholdFilter,
};
use std::{backtrace, env, io::Write as _, path::Path};

pub mod dataset;
pub mod loader;
pub mod scatter;
pub mod stats;
pub mod table;

pub use dataset::{Column, Dataset, Measurement};
pub use loader::{load_dataset, read_dataset, LoadError};
pub use scatter::{PlotError, ScatterPlot, DEFAULT_TITLE};
pub use stats::{ColumnStatistics, Summary};
pub use table::TableFormat;

/// Pattern encoder that follows error records with a captured backtrace.
#[derive(Debug)]
struct ErrorBacktraceEncoder {
    pattern: PatternEncoder,
    backtraces: bool,
}

impl ErrorBacktraceEncoder {
    /// Backtraces are on when `RUST_BACKTRACE` or `RUST_LIB_BACKTRACE` is set.
    fn from_env(pattern: &str) -> Self {
        let backtraces =
            env::var_os("RUST_BACKTRACE").is_some() || env::var_os("RUST_LIB_BACKTRACE").is_some();
        Self::with_backtraces(pattern, backtraces)
    }

    fn with_backtraces(pattern: &str, backtraces: bool) -> Self {
        ErrorBacktraceEncoder {
            pattern: PatternEncoder::new(pattern),
            backtraces,
        }
    }
}

impl Encode for ErrorBacktraceEncoder {
    fn encode(
        &self,
        w: &mut dyn log4rs::encode::Write,
        record: &log::Record<'_>,
    ) -> anyhow::Result<()> {
        self.pattern.encode(w, record)?;

        if self.backtraces && record.level() == log::Level::Error {
            let trace = backtrace::Backtrace::force_capture();
            write!(w, "Backtrace:\n{trace}\n")?;
        }
        Ok(())
    }
}

/// Installs the global logger.
///
/// Records at `log_level` and above go to stderr so that stdout stays free
/// for the dataset dump. When `file_path` is given, the same records are
/// also appended to that file.
pub fn initialize_logger(log_level: LevelFilter, file_path: Option<&Path>) -> anyhow::Result<()> {
    const LOGGING_PATTERN: &str = "{d} {l} {f}:{L} - {m}\n";

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(ErrorBacktraceEncoder::from_env(LOGGING_PATTERN)))
        .build();

    let mut config_builder = Config::builder().appender(
        Appender::builder()
            .filter(Box::new(ThresholdFilter::new(log_level)))
            .build("stderr", Box::new(stderr)),
    );
    let mut root_builder = Root::builder().appender("stderr");

    if let Some(path) = file_path {
        // Pattern: https://docs.rs/log4rs/*/log4rs/encode/pattern/index.html
        let logfile = FileAppender::builder()
            .encoder(Box::new(ErrorBacktraceEncoder::from_env(LOGGING_PATTERN)))
            .build(path)
            .with_context(|| format!("failed to open log file {}", path.display()))?;

        config_builder =
            config_builder.appender(Appender::builder().build("logfile", Box::new(logfile)));
        root_builder = root_builder.appender("logfile");
    }

    let config = config_builder
        .build(root_builder.build(log_level))
        .context("invalid logger configuration")?;

    let _handle = log4rs::init_config(config).context("logger already initialized")?;

    Ok(())
}
