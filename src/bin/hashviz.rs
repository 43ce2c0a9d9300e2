//! Command line entry point: `hashviz <load_results_csv>` and `hashviz report <REPORT>`.

use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{Parser, Subcommand};
use hashviz::{chart, load, read_report, Error, ReportLayout};
use log::info;

/// Plot hash table benchmark results.
#[derive(Debug, Parser)]
#[command(name = "hashviz", version)]
#[command(
    about = "Plot hash table benchmark results",
    long_about = "Plot hash table benchmark results\n\n\
    Compares MinimalPerfectHash, SimpleHash, ElasticHash and FunnelHash.\n\n\
    Examples:\n  \
      hashviz load_results.csv\n  \
      hashviz report benchmark.log --layout v1-en"
)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Load-test results to plot (same as `hashviz load`)
    #[arg(value_name = "LOAD_RESULTS_CSV")]
    load_results_csv: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Plot lookup time against load size from a load-test CSV
    Load {
        /// CSV file: two preamble lines, then `size,mph,sh,eh,fh` rows
        #[arg(value_name = "LOAD_RESULTS_CSV")]
        load_results_csv: PathBuf,
    },

    /// Plot build and lookup times from a benchmark report
    Report {
        /// Benchmark output containing the performance comparison table
        #[arg(value_name = "REPORT")]
        report: PathBuf,

        /// Header wording of the table: v1 or v1-en
        #[arg(short, long, default_value = "v1")]
        layout: ReportLayout,
    },
}

fn plot_load(path: &Path) -> anyhow::Result<ExitCode> {
    let parsed = load::read_load_csv(path)?;
    for row in &parsed.skipped {
        println!("Skipping invalid line: {}", row.text);
    }

    if parsed.series.is_empty() {
        println!("No valid data could be parsed from the CSV file");
        return Ok(ExitCode::SUCCESS);
    }

    let output = chart::render_load(&parsed.series)?;
    println!("Load comparison chart saved as {}", output.display());
    Ok(ExitCode::SUCCESS)
}

fn plot_report(path: &Path, layout: ReportLayout) -> hashviz::Result<PathBuf> {
    info!("reading {} with layout {layout}", path.display());
    let result = read_report(path, layout)?.ok_or_else(|| Error::TableNotFound {
        path: path.to_owned(),
    })?;
    chart::render_comparison(&result)
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();
    let cli = Cli::parse();

    match (cli.command, cli.load_results_csv) {
        (Some(Command::Load { load_results_csv }), _) | (None, Some(load_results_csv)) => {
            plot_load(&load_results_csv)
        }
        (Some(Command::Report { report, layout }), _) => match plot_report(&report, layout) {
            Ok(output) => {
                println!("Performance chart saved as {}", output.display());
                Ok(ExitCode::SUCCESS)
            }
            // Missing table: message on stdout, exit code 1.
            Err(err @ Error::TableNotFound { .. }) => {
                println!("{err}");
                Ok(ExitCode::FAILURE)
            }
            Err(err) => Err(err.into()),
        },
        (None, None) => {
            println!("Usage: hashviz <load_results_csv>");
            Ok(ExitCode::FAILURE)
        }
    }
}
