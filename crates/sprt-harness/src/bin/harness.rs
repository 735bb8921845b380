//! CLI entrypoint for the sprt harness.

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use sprt_core::{RuntimeConfig, Target};
use sprt_harness::structured_log::{
    ArtifactIndex, LogEmitter, LogEntry, LogLevel, Outcome, StreamKind, validate_log_file,
};
use sprt_harness::{HarnessError, fingerprint, layout_check, limits_report, symbols};

/// Verification tooling for the sprt libc layer.
#[derive(Debug, Parser)]
#[command(name = "sprt-harness")]
#[command(about = "Layout, symbol and limits checks for the sprt libc layer")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Args)]
struct OutputArgs {
    /// Output JSON path (if omitted, prints to stdout).
    #[arg(long)]
    output: Option<PathBuf>,
    /// Structured JSONL log path.
    #[arg(long)]
    log: Option<PathBuf>,
    /// Artifact index JSON path. Requires --output.
    #[arg(long, requires = "output")]
    artifact_index: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the compiled leaf and build switches.
    Target,
    /// Integer and floating limits for a leaf.
    Limits {
        /// Leaf as `os-arch` (defaults to the compiled leaf).
        #[arg(long)]
        target: Option<String>,
        #[command(flatten)]
        out: OutputArgs,
    },
    /// Compare runtime structure layouts with the platform C library.
    CheckLayouts {
        #[command(flatten)]
        out: OutputArgs,
    },
    /// Report which functions a leaf declares and how they link.
    Symbols {
        #[arg(long)]
        target: Option<String>,
        /// Unavailable-function policy (omit or stub).
        #[arg(long, default_value = "omit")]
        policy: String,
        /// Build mode (building or consuming).
        #[arg(long, default_value = "consuming")]
        mode: String,
        #[command(flatten)]
        out: OutputArgs,
    },
    /// Digest of the compiled leaf's layouts.
    Fingerprint {
        #[command(flatten)]
        out: OutputArgs,
    },
    /// Validate a structured JSONL log.
    ValidateLog {
        #[arg(long)]
        log: PathBuf,
    },
}

#[derive(Serialize)]
struct TargetSummary {
    target: String,
    data_model: &'static str,
    enosys: i32,
    build_mode: &'static str,
    unavailable_policy: &'static str,
    compiler_assisted_ints: bool,
    alloca_temporaries: bool,
    builtin_inlines: bool,
    missing: Vec<&'static str>,
}

fn parse_target(s: Option<&str>) -> Result<Target, HarnessError> {
    match s {
        Some(s) => Ok(s.parse()?),
        None => Ok(Target::CURRENT),
    }
}

fn emitter(log: Option<&Path>, run_id: &str) -> std::io::Result<LogEmitter> {
    match log {
        Some(path) => LogEmitter::to_file(path, run_id),
        None => Ok(LogEmitter::sink(run_id)),
    }
}

fn write_json<T: Serialize>(out: &OutputArgs, kind: &str, value: &T) -> Result<(), HarnessError> {
    let body = serde_json::to_string_pretty(value)?;
    let Some(path) = &out.output else {
        println!("{body}");
        return Ok(());
    };
    std::fs::write(path, &body)?;
    eprintln!("Wrote {}", path.display());
    if let Some(index_path) = &out.artifact_index {
        let mut index = ArtifactIndex::new(kind);
        index.add_bytes(path.display().to_string(), kind, body.as_bytes());
        std::fs::write(index_path, index.to_json()?)?;
    }
    Ok(())
}

fn finish(
    mut log: LogEmitter,
    stream: StreamKind,
    target: Target,
    outcome: Outcome,
    started: Instant,
    details: serde_json::Value,
) -> std::io::Result<()> {
    let level = if outcome == Outcome::Pass { LogLevel::Info } else { LogLevel::Error };
    log.emit_entry(
        LogEntry::new("", level, "run_complete")
            .with_stream(stream)
            .with_target(target.to_string())
            .with_mode(RuntimeConfig::current().build_mode.as_str())
            .with_outcome(outcome)
            .with_duration_ms(started.elapsed().as_millis() as u64)
            .with_details(details),
    )?;
    log.flush()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let started = Instant::now();

    match cli.command {
        Command::Target => {
            let cfg = RuntimeConfig::current();
            let target = Target::CURRENT;
            let summary = TargetSummary {
                target: target.to_string(),
                data_model: target.data_model().as_str(),
                enosys: target.enosys(),
                build_mode: cfg.build_mode.as_str(),
                unavailable_policy: cfg.unavailable_policy.as_str(),
                compiler_assisted_ints: cfg.compiler_assisted_ints,
                alloca_temporaries: cfg.alloca_temporaries,
                builtin_inlines: cfg.builtin_inlines,
                missing: target.missing().map(|c| c.cfg_name()).collect(),
            };
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Command::Limits { target, out } => {
            let target = parse_target(target.as_deref())?;
            let log = emitter(out.log.as_deref(), "limits")?;
            let report = limits_report::report(target);
            write_json(&out, "limits", &report)?;
            finish(
                log,
                StreamKind::Limits,
                target,
                Outcome::Pass,
                started,
                serde_json::json!({ "ints": report.ints.len(), "floats": report.floats.len() }),
            )?;
        }
        Command::CheckLayouts { out } => {
            let mut log = emitter(out.log.as_deref(), "layout")?;
            let report = layout_check::check_layouts();
            for m in &report.mismatches {
                log.emit_entry(
                    LogEntry::new("", LogLevel::Warn, "layout_mismatch")
                        .with_stream(StreamKind::Layout)
                        .with_target(report.target.clone())
                        .with_outcome(Outcome::Fail)
                        .with_details(serde_json::to_value(m)?),
                )?;
            }
            write_json(&out, "layout-check", &report)?;
            let count = report.mismatches.len();
            let outcome = if count == 0 { Outcome::Pass } else { Outcome::Fail };
            finish(
                log,
                StreamKind::Layout,
                Target::CURRENT,
                outcome,
                started,
                serde_json::json!({ "types": report.types_compared, "mismatches": count }),
            )?;
            if count > 0 {
                return Err(HarnessError::LayoutMismatch { count }.into());
            }
        }
        Command::Symbols { target, policy, mode, out } => {
            let target = parse_target(target.as_deref())?;
            let policy = symbols::parse_policy(&policy)?;
            let mode = symbols::parse_mode(&mode)?;
            let mut log = emitter(out.log.as_deref(), "symbols")?;
            let report = symbols::report(target, policy, mode);
            for row in report.symbols.iter().filter(|r| !r.available) {
                let entry = LogEntry::new("", LogLevel::Info, "symbol_unavailable")
                    .with_stream(StreamKind::Symbols)
                    .with_target(report.target.clone())
                    .with_mode(report.mode.clone())
                    .with_symbol(row.header.clone(), row.public.clone())
                    .with_outcome(Outcome::Skip);
                let entry = if row.declared {
                    entry.with_errno(target.enosys())
                } else {
                    entry
                };
                log.emit_entry(entry)?;
            }
            write_json(&out, "symbols", &report)?;
            finish(
                log,
                StreamKind::Symbols,
                target,
                Outcome::Pass,
                started,
                serde_json::json!({
                    "declared": report.declared,
                    "stubbed": report.stubbed,
                    "omitted": report.omitted,
                }),
            )?;
        }
        Command::Fingerprint { out } => {
            let log = emitter(out.log.as_deref(), "fingerprint")?;
            let fp = fingerprint::current()?;
            write_json(&out, "fingerprint", &fp)?;
            finish(
                log,
                StreamKind::Fingerprint,
                Target::CURRENT,
                Outcome::Pass,
                started,
                serde_json::json!({ "sha256": fp.sha256 }),
            )?;
        }
        Command::ValidateLog { log } => {
            let (lines, errors) = validate_log_file(&log)?;
            for err in &errors {
                eprintln!("{err}");
            }
            println!("{lines} line(s), {} error(s)", errors.len());
            if !errors.is_empty() {
                return Err(format!("{} invalid log line(s) in {}", errors.len(), log.display()).into());
            }
        }
    }

    Ok(())
}
