use std::error::Error;
use std::path::PathBuf;

use clap::Parser;

use swap_report::report::{DEFAULT_INPUT, DEFAULT_OUTPUT};
use swap_report::ReportRenderer;

/// Renders the latest swap-benchmark run as a bar chart.
///
/// Reads the CSV table appended to by `swap_bench`, prints the most recent
/// entries, and saves a chart comparing the temp-var and XOR swap timings.
/// Invoked with no arguments it reads `swap_results.csv` and writes
/// `swap_benchmark.png` in the current directory.
#[derive(Parser)]
#[command(author, version, about = "Chart the latest swap benchmark run")]
struct Cli {
    /// CSV results file produced by swap_bench.
    #[arg(long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Path the chart image is written to.
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Skip opening the rendered chart in an image viewer.
    #[arg(long)]
    no_show: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = ReportRenderer::new()
        .with_input(cli.input)
        .with_output(cli.output)
        .show(!cli.no_show)
        .run();

    if let Err(err) = result {
        eprintln!("Error: {}", err);
        print_error_sources(&err);
        std::process::exit(1);
    }
}

fn print_error_sources(mut error: &(dyn Error + 'static)) {
    while let Some(source) = error.source() {
        eprintln!("  caused by: {}", source);
        error = source;
    }
}
