//! CLI entry point for mcpguard.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `mcpguard-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{ArgAction, Parser};
use mcpguard_app::{
    AuditInput, EnforcementPolicy, ResponseInput, load_engine, run_audit, run_response_check,
    serialize_report,
};
use mcpguard_settings::Overrides;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "mcpguard",
    version,
    about = "Marker compliance guard for agent definitions and agent responses"
)]
struct Cli {
    /// Directory containing agent definition files.
    #[arg(long, default_value = ".claude/agents")]
    agents_dir: Utf8PathBuf,

    /// Enforcement policy; defaults to the configured profile (blocking).
    #[arg(long, value_parser = ["warning", "blocking", "auto-injection"])]
    enforcement: Option<String>,

    /// Audit the agent definitions in --agents-dir.
    #[arg(long, conflicts_with = "check_response")]
    validate_config: bool,

    /// Enforce the policy on one agent response file.
    #[arg(long, value_name = "FILE")]
    check_response: Option<Utf8PathBuf>,

    /// Subject name for --check-response (defaults to the file stem).
    #[arg(long, requires = "check_response")]
    subject: Option<String>,

    /// Print the ledger summary to stderr after --check-response.
    #[arg(long, requires = "check_response")]
    summary: bool,

    /// Path to mcpguard config TOML (missing file means defaults).
    #[arg(long, default_value = "mcpguard.toml")]
    config: Utf8PathBuf,

    /// Override profile (strict|warn|remediate).
    #[arg(long)]
    profile: Option<String>,

    /// Write a JSON report of the verdicts.
    #[arg(long, value_name = "FILE")]
    report_out: Option<Utf8PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let code = match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("mcpguard error: {err:#}");
            1
        }
    };
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<i32> {
    if !cli.validate_config && cli.check_response.is_none() {
        print_usage();
        return Ok(0);
    }

    // Missing config file is allowed (defaults apply).
    let cfg_text = std::fs::read_to_string(&cli.config).unwrap_or_default();
    let overrides = Overrides {
        profile: cli.profile.clone(),
        enforcement: cli.enforcement.clone(),
    };
    let mut engine = load_engine(&cfg_text, overrides)?;
    tracing::info!(
        config = %cli.config,
        enforcement = engine.policy().as_str(),
        "engine ready"
    );

    if cli.validate_config {
        let output = run_audit(
            &engine,
            AuditInput {
                agents_dir: &cli.agents_dir,
            },
        )?;
        print!("{}", output.rendered);
        if let Some(path) = &cli.report_out {
            write_report_file(path, &serialize_report(&output.report)?)?;
        }
        return Ok(output.exit_code());
    }

    let Some(path) = &cli.check_response else {
        return Ok(0);
    };
    let output = run_response_check(
        &mut engine,
        ResponseInput {
            path,
            subject: cli.subject.as_deref(),
        },
    )?;

    if output.decision.allowed {
        print!("{}", output.decision.message);
        if engine.policy() != EnforcementPolicy::AutoRemediate {
            println!();
        }
    } else {
        eprintln!("{}", output.decision.message);
    }
    if cli.summary {
        eprintln!("{}", engine.summarize());
    }
    if let Some(path) = &cli.report_out {
        write_report_file(path, &serialize_report(&output.report)?)?;
    }
    Ok(output.exit_code())
}

fn print_usage() {
    println!("Usage: mcpguard --validate-config [--agents-dir <DIR>]");
    println!("Runtime check: mcpguard --check-response <FILE> [--enforcement <POLICY>]");
}

fn write_report_file(path: &Utf8Path, data: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, data).with_context(|| format!("write report: {}", path))?;
    Ok(())
}
