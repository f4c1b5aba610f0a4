/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{error, info, warn};

use timetabler::config::load_request;
use timetabler::payload::ScheduleResponse;
use timetabler::report::ScheduleSummary;
use timetabler::verify::{audit, Violation};

// ── CLI argument definition ───────────────────────────────────────────────────

/// Timetabler – greedy university timetable solver.
///
/// Each request file is solved independently; responses are printed to
/// stdout in command-line order, or written to `--output-dir`.
///
/// Example:
///   timetabler spring.yaml autumn.json -o out/ --verify
#[derive(Debug, Parser)]
#[command(
    name = "timetabler",
    about = "Greedy university timetable solver",
    long_about = None,
)]
struct Cli {
    /// Request files (`.yaml` / `.yml` for YAML, anything else is JSON).
    #[arg(required = true)]
    requests: Vec<PathBuf>,

    /// Write `<stem>.schedule.json` per request into this directory instead of
    /// printing to stdout.
    #[arg(short = 'o', long = "output-dir")]
    output_dir: Option<PathBuf>,

    /// Emit single-line JSON instead of pretty-printed JSON.
    #[arg(short = 'c', long = "compact", default_value_t = false)]
    compact: bool,

    /// Audit every produced schedule and exit non-zero on any violation.
    #[arg(long = "verify", default_value_t = false)]
    verify: bool,
}

/// Everything produced for one request file.
struct Outcome {
    path: PathBuf,
    response: ScheduleResponse,
    violations: Vec<Violation>,
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() {
    // Initialise structured logging on stderr; stdout carries the responses.
    // Level is controlled by the RUST_LOG env-var (e.g. RUST_LOG=debug).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    info!(
        requests   = cli.requests.len(),
        output_dir = ?cli.output_dir,
        compact    = cli.compact,
        verify     = cli.verify,
        "Configuration"
    );

    // Two requests sharing a file stem would write the same response file.
    if cli.output_dir.is_some() {
        if let Err(e) = check_output_names(&cli.requests) {
            error!("{:#}", e);
            process::exit(1);
        }
    }

    // ── Solve every request concurrently ──────────────────────────────────────
    let handles: Vec<_> = cli
        .requests
        .iter()
        .cloned()
        .map(|path| {
            let verify = cli.verify;
            tokio::task::spawn_blocking(move || run_one(path, verify))
        })
        .collect();

    let mut failed = false;

    for (path, handle) in cli.requests.iter().zip(handles) {
        let outcome = match handle.await {
            Ok(Ok(outcome)) => outcome,
            Ok(Err(e)) => {
                error!("{:#}", e);
                failed = true;
                continue;
            }
            Err(e) => {
                error!("Solver task for {} panicked: {}", path.display(), e);
                failed = true;
                continue;
            }
        };

        for v in &outcome.violations {
            error!(request = %outcome.path.display(), "invariant violated: {}", v);
        }
        failed |= !outcome.violations.is_empty();

        if let Err(e) = emit(&cli, &outcome) {
            error!("{:#}", e);
            failed = true;
        }
    }

    if failed {
        process::exit(1);
    }
}

// ── Per-request pipeline ──────────────────────────────────────────────────────

fn run_one(path: PathBuf, verify: bool) -> Result<Outcome> {
    let request = load_request(&path)?;

    for w in request.lint() {
        warn!(request = %path.display(), "{}", w);
    }

    let response = timetabler::generate_schedule(&request);

    if let Some(msg) = &response.message {
        warn!(request = %path.display(), "{}", msg);
    }

    let summary = ScheduleSummary::compute(&request, &response);
    info!(
        request            = %path.display(),
        status             = ?response.status,
        placed             = summary.placed,
        unplaced           = summary.unplaced,
        teacher_gaps       = summary.teacher_gaps,
        teachers_scheduled = summary.teachers_scheduled,
        "Summary"
    );

    let violations = if verify {
        audit(&request, &response)
    } else {
        Vec::new()
    };

    Ok(Outcome {
        path,
        response,
        violations,
    })
}

fn emit(cli: &Cli, outcome: &Outcome) -> Result<()> {
    let body = if cli.compact {
        serde_json::to_string(&outcome.response)?
    } else {
        serde_json::to_string_pretty(&outcome.response)?
    };

    match &cli.output_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Cannot create output directory: {}", dir.display()))?;
            let target = dir.join(output_name(&outcome.path));
            std::fs::write(&target, body)
                .with_context(|| format!("Cannot write response: {}", target.display()))?;
            info!("Wrote {}", target.display());
        }
        None => println!("{}", body),
    }

    Ok(())
}

/// `spring.yaml` → `spring.schedule.json`.
fn output_name(request: &Path) -> String {
    let stem = request
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("request");
    format!("{stem}.schedule.json")
}

/// Fail if two request paths map to the same output file name.
fn check_output_names(requests: &[PathBuf]) -> Result<()> {
    let mut seen: BTreeMap<String, &Path> = BTreeMap::new();
    for path in requests {
        let name = output_name(path);
        if let Some(first) = seen.insert(name.clone(), path) {
            bail!(
                "{} and {} would both be written to {}",
                first.display(),
                path.display(),
                name
            );
        }
    }
    Ok(())
}
