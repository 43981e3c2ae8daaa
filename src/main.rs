//! shaderpack CLI - embed shader payloads as constant byte arrays
//!
//! Usage:
//!   shaderpack [OPTIONS] <OUTPUT> <INPUT>...
//!   shaderpack [OPTIONS] --manifest <FILE>

mod cli;
mod ui;

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use is_terminal::IsTerminal;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use shaderpack::{check, dry_run, load_manifest_with_warnings, pack, PackConfig};

/// Environment variable holding a tracing filter directive
const LOG_ENV: &str = "SHADERPACK_LOG";

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let code = match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            ui::error::print_error(&err, cli.json);
            1
        }
    };

    let _ = std::io::stdout().flush();
    std::process::exit(code);
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(format!("shaderpack={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<i32> {
    let config = resolve_config(cli)?;

    if cli.check {
        return cmd_check(&config, cli);
    }

    let report = if cli.dry_run {
        dry_run(&config)?
    } else {
        pack(&config)?
    };

    if cli.json {
        ui::json::emit(ui::output::report_event("pack", &report))?;
    } else if cli.dry_run || cli.verbose > 0 {
        print!("{}", ui::output::render_report(&report));
    }

    Ok(0)
}

fn resolve_config(cli: &Cli) -> Result<PackConfig> {
    if let Some(manifest) = &cli.manifest {
        let (config, warnings) = load_manifest_with_warnings(manifest)?;
        ui::output::print_config_warnings(&warnings);
        return Ok(config);
    }

    let output = cli
        .output
        .clone()
        .context("an <OUTPUT> path or --manifest is required")?;
    Ok(PackConfig::new(output, cli.inputs.clone()))
}

fn cmd_check(config: &PackConfig, cli: &Cli) -> Result<i32> {
    let result = check(config)?;
    let report = &result.report;

    if cli.json {
        let mut event = ui::output::report_event("check", report);
        event["changed"] = serde_json::json!(result.changed);
        ui::json::emit(event)?;
    } else {
        let text = ui::output::render_report(report);
        if report.status.is_fresh() {
            print!("{}", text);
        } else {
            eprint!("{}{}", text, ui::output::render_changed(&result.changed));
        }

        if cli.verbose > 0 {
            if let Some(current) = &result.current {
                if current != &result.expected {
                    eprint!(
                        "{}",
                        ui::diff::render_artifact_diff(
                            &report.output.display().to_string(),
                            current,
                            &result.expected,
                            std::io::stderr().is_terminal(),
                        )
                    );
                }
            }
        }
    }

    Ok(if report.status.is_fresh() { 0 } else { 1 })
}
