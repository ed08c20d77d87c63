//! nuget-index-check - Wait until a NuGet package version is indexed.
//!
//! CLI entry point.

use clap::Parser;
use nuget_index_check::notify::{github, ConsoleOutput};
use nuget_index_check::{CheckReport, Config, IndexChecker};
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::parse();

    // Set up logging
    let filter = if config.verbose {
        EnvFilter::new("nuget_index_check=debug,info")
    } else {
        EnvFilter::new("nuget_index_check=info,warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tokio::spawn(async {
        #[cfg(unix)]
        {
            use tokio::signal::unix::{signal, SignalKind};
            let (Ok(mut sigterm), Ok(mut sigint)) =
                (signal(SignalKind::terminate()), signal(SignalKind::interrupt()))
            else {
                return;
            };

            tokio::select! {
                _ = sigterm.recv() => {},
                _ = sigint.recv() => {},
            }
        }

        #[cfg(not(unix))]
        {
            let _ = tokio::signal::ctrl_c().await;
        }

        eprintln!("\nSignal received, stopping.");
        std::process::exit(130);
    });

    match run(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(code) => code,
    }
}

async fn run(config: &Config) -> Result<(), ExitCode> {
    let checker = match IndexChecker::new(&config.settings()) {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to create HTTP client: {}", e);
            return Err(ExitCode::FAILURE);
        }
    };

    let console = ConsoleOutput::new(config.json, github::is_github_actions());
    let report = checker.check(&config.request()).await;

    console.print_events(&report);
    write_indexed_output(config, &report)?;
    console.print_summary(&report);

    if report.is_success() {
        Ok(())
    } else {
        Err(ExitCode::FAILURE)
    }
}

fn write_indexed_output(config: &Config, report: &CheckReport) -> Result<(), ExitCode> {
    let Some(indexed) = report.indexed() else {
        return Ok(());
    };

    // Stdout belongs to the JSON report, which already carries the outcome.
    if config.json && config.output.is_none() {
        return Ok(());
    }

    github::write_output(config.output.as_deref(), "indexed", &indexed.to_string()).map_err(|e| {
        error!("Failed to write output: {}", e);
        ExitCode::FAILURE
    })
}
