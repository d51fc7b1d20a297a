//! The report pipeline: load the results table, preview it, and render the
//! latest run as a chart image.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

use crate::chart::{self, ChartSpec};
use crate::model::{BenchRecord, ResultsTable};
use crate::viewer;

/// Default input path, relative to the current working directory.
pub const DEFAULT_INPUT: &str = "swap_results.csv";

/// Default output path for the rendered chart.
pub const DEFAULT_OUTPUT: &str = "swap_benchmark.png";

/// Number of trailing rows printed as the preview.
pub const PREVIEW_ROWS: usize = 5;

/// Errors that can occur while producing a benchmark report.
#[derive(Debug)]
pub enum ReportError {
    /// The input CSV file does not exist at the expected path.
    InputMissing {
        /// The path that was checked.
        path: PathBuf,
    },
    /// The input file exists but could not be parsed as a results table.
    InvalidFormat(csv::Error),
    /// The input file parsed but contains no data rows.
    EmptyTable {
        /// The path of the empty file.
        path: PathBuf,
    },
    /// The chart image could not be rendered or written.
    OutputWrite {
        /// The output path that could not be produced.
        path: PathBuf,
        /// The underlying rendering or I/O error.
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// The preview could not be written to standard output.
    Preview(io::Error),
}

impl From<csv::Error> for ReportError {
    fn from(err: csv::Error) -> Self {
        Self::InvalidFormat(err)
    }
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputMissing { path } => write!(
                f,
                "{} not found - run swap_bench first to produce it",
                path.display()
            ),
            Self::InvalidFormat(err) => write!(f, "Failed to parse results table: {err}"),
            Self::EmptyTable { path } => {
                write!(f, "{} contains no benchmark runs", path.display())
            }
            Self::OutputWrite { path, source } => {
                write!(f, "Failed to write chart to {}: {source}", path.display())
            }
            Self::Preview(err) => write!(f, "Failed to print table preview: {err}"),
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidFormat(err) => Some(err),
            Self::OutputWrite { source, .. } => Some(source.as_ref()),
            Self::Preview(err) => Some(err),
            Self::InputMissing { .. } | Self::EmptyTable { .. } => None,
        }
    }
}

/// Renders the swap-benchmark report for the most recent run.
///
/// The renderer is configured through `with_*` methods and consumed by
/// [`ReportRenderer::run`]; it keeps no state between runs. Defaults
/// reproduce the fixed-path behavior of the original tool: read
/// `swap_results.csv`, write `swap_benchmark.png`, and open the result in an
/// image viewer.
pub struct ReportRenderer {
    input: PathBuf,
    output: PathBuf,
    preview_rows: usize,
    dimensions: (u32, u32),
    show: bool,
}

impl Default for ReportRenderer {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            preview_rows: PREVIEW_ROWS,
            dimensions: chart::DEFAULT_DIMENSIONS,
            show: true,
        }
    }
}

impl ReportRenderer {
    /// Creates a renderer with the default paths and settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the CSV file to read.
    pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = input.into();
        self
    }

    /// Sets the path the chart image is written to.
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Sets how many trailing rows the preview prints.
    pub fn with_preview_rows(mut self, rows: usize) -> Self {
        self.preview_rows = rows;
        self
    }

    /// Sets the pixel dimensions of the rendered chart.
    pub fn with_dimensions(mut self, dimensions: (u32, u32)) -> Self {
        self.dimensions = dimensions;
        self
    }

    /// Enables or disables opening the chart in an image viewer afterwards.
    pub fn show(mut self, show: bool) -> Self {
        self.show = show;
        self
    }

    /// Returns the configured input path.
    pub fn input(&self) -> &Path {
        &self.input
    }

    /// Returns the configured output path.
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Runs the full pipeline and returns the record that was charted.
    ///
    /// Steps, in order: check the input file exists, parse it, print the
    /// tail preview to stdout, select the last row, render the bar chart to
    /// the output path, and finally open the image viewer if enabled. Only
    /// the viewer step is best-effort; every other failure aborts the run.
    pub fn run(self) -> Result<BenchRecord, ReportError> {
        if !self.input.exists() {
            return Err(ReportError::InputMissing { path: self.input });
        }

        let table = ResultsTable::from_path(&self.input)?;
        debug!("Loaded {} benchmark runs from {}", table.len(), self.input.display());

        let stdout = io::stdout();
        table
            .write_tail(stdout.lock(), self.preview_rows)
            .map_err(ReportError::Preview)?;

        let latest = *table.latest().ok_or(ReportError::EmptyTable {
            path: self.input.clone(),
        })?;

        let spec = ChartSpec::for_record(&latest);
        chart::render_png(&spec, &self.output, self.dimensions).map_err(|source| {
            ReportError::OutputWrite {
                path: self.output.clone(),
                source,
            }
        })?;
        println!("Generated {}", self.output.display());

        if self.show {
            viewer::open(&self.output);
        }

        Ok(latest)
    }
}
