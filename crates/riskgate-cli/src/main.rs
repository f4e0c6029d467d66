use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use riskgate_core::inspect_paths;
use riskgate_core::report::{model::ToolInfo, render};

mod args;

fn init_logging() {
    let default_level = "warn";
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    // clap exits with status 2 and prints usage when no paths are given,
    // before any file is touched.
    let args = args::Args::parse();
    init_logging();
    tracing::debug!(paths = args.paths.len(), format = ?args.format, jobs = args.jobs, "starting");

    let tool = ToolInfo {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    let report = inspect_paths(&args.paths, tool, usize::from(args.jobs))?;

    let output = match args.format {
        args::OutputFormat::Json => serde_json::to_string_pretty(&report)? + "\n",
        args::OutputFormat::Text => render::render_text(&report),
    };

    match args.out {
        Some(path) => std::fs::write(path, &output)?,
        None => print!("{output}"),
    }

    std::process::exit(report.exit_code());
}
