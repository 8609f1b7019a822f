mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};

use crate::input::{DEFAULT_RESULTS_PATH, MissingPolicy, load_results};
use crate::model::threshold::DEFAULT_THRESHOLD;
use crate::pipeline::stage2_evaluate::{Stage2Params, run_stage2};
use crate::pipeline::stage3_report::{ReportFormat, render_stdout, write_reports};
use crate::report::build_summary;

#[derive(Debug, Parser)]
#[command(name = "evalreport", version, about = "Binary classifier evaluation report")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Load a results artifact and print the evaluation report.
    Run(RunArgs),
}

#[derive(Debug, Clone, Args)]
struct RunArgs {
    /// Results artifact (.pkl, .json, optionally .gz).
    #[arg(long, default_value = DEFAULT_RESULTS_PATH)]
    results: PathBuf,
    /// Directory for report.txt, summary.json and TSV tables.
    #[arg(long)]
    out: Option<PathBuf>,
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    threshold: f64,
    /// Histogram bins over [0,1].
    #[arg(long, default_value_t = 10)]
    bins: usize,
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,
    /// Fail instead of falling back to synthetic data when the artifact is missing.
    #[arg(long)]
    strict: bool,
}

#[derive(Debug, Clone)]
struct RunConfig {
    results: PathBuf,
    out_dir: Option<PathBuf>,
    threshold: f64,
    bins: usize,
    format: ReportFormat,
    missing: MissingPolicy,
}

fn main() {
    logging::init();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let Command::Run(args) = cli.command;
    let config = resolve_config(args)?;
    debug!("run config: {:?}", config);

    let loaded = load_results(&config.results, config.missing).map_err(|e| e.to_string())?;
    info!("source: {}", loaded.source.describe());

    let stage2 = run_stage2(
        &loaded.result,
        &Stage2Params {
            threshold: config.threshold,
            bins: config.bins,
        },
    );
    let summary = build_summary(&loaded, &stage2);

    let rendered = render_stdout(&summary, config.format).map_err(|e| e.to_string())?;
    print!("{rendered}");

    if let Some(out_dir) = &config.out_dir {
        write_reports(&loaded.result, &summary, &stage2, out_dir).map_err(|e| e.to_string())?;
    }

    Ok(())
}

fn resolve_config(args: RunArgs) -> Result<RunConfig, String> {
    if !args.threshold.is_finite() || !(0.0..=1.0).contains(&args.threshold) {
        return Err(format!(
            "invalid --threshold {} (expected a value in [0, 1])",
            args.threshold
        ));
    }
    if args.bins == 0 {
        return Err("invalid --bins 0 (expected at least 1)".to_string());
    }
    Ok(RunConfig {
        results: args.results,
        out_dir: args.out,
        threshold: args.threshold,
        bins: args.bins,
        format: args.format,
        missing: if args.strict {
            MissingPolicy::Fail
        } else {
            MissingPolicy::Synthesize
        },
    })
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
