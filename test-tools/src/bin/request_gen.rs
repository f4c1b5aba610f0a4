/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! request-gen – synthetic request generator for manual timetabler runs.
//!
//! Produces a seeded, reproducible request:
//!   • teachers `T01..`, groups `G01..` (15–35 students), rooms `R01..`
//!     (20–150 seats, the last one always large enough for any stream)
//!   • assignments pairing a random teacher with 1–3 random groups; roughly
//!     one in three is a lecture
//!   • a few busy slots per teacher and an occasional preferred room
//!
//! Example:
//!   request-gen --teachers 8 --groups 6 --assignments 20 --seed 7 -o big.yaml

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use timetabler::lattice::slot_id;
use timetabler::payload::{AssignmentSpec, GroupSpec, RoomSpec, ScheduleRequest, SessionType};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Yaml,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "request-gen", about = "Generate a synthetic timetabler request")]
struct Args {
    #[arg(long, default_value_t = 5)]
    teachers: usize,

    #[arg(long, default_value_t = 4)]
    groups: usize,

    #[arg(long, default_value_t = 4)]
    rooms: usize,

    #[arg(long, default_value_t = 12)]
    assignments: usize,

    #[arg(long, value_delimiter = ',', default_value = "Mon,Tue,Wed,Thu,Fri")]
    days: Vec<String>,

    #[arg(
        long,
        value_delimiter = ',',
        default_value = "8:00,9:40,11:20,13:00,14:40,16:20"
    )]
    times: Vec<String>,

    /// RNG seed; the same seed always yields the same request.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    #[arg(long, value_enum, default_value_t = Format::Yaml)]
    format: Format,

    /// Output file (stdout when omitted).
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let request = generate(&args);

    info!(
        seed        = args.seed,
        teachers    = request.teachers.len(),
        groups      = request.groups.len(),
        rooms       = request.rooms.len(),
        assignments = request.assignments.len(),
        "Generated request"
    );

    let body = match args.format {
        Format::Yaml => serde_yaml::to_string(&request)?,
        Format::Json => serde_json::to_string_pretty(&request)?,
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, body)
                .with_context(|| format!("Cannot write request: {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => println!("{}", body),
    }

    Ok(())
}

fn generate(args: &Args) -> ScheduleRequest {
    let mut rng = StdRng::seed_from_u64(args.seed);

    let teachers: Vec<String> = (1..=args.teachers).map(|i| format!("T{i:02}")).collect();

    let groups: Vec<GroupSpec> = (1..=args.groups)
        .map(|i| GroupSpec {
            name: format!("G{i:02}"),
            size: rng.random_range(15..=35),
        })
        .collect();

    let total: u32 = groups.iter().map(|g| g.size).sum();
    let rooms: Vec<RoomSpec> = (1..=args.rooms)
        .map(|i| RoomSpec {
            name: format!("R{i:02}"),
            capacity: Some(if i == args.rooms {
                total.max(150)
            } else {
                rng.random_range(20..=150)
            }),
        })
        .collect();

    let subjects = ["Calculus", "Physics", "Databases", "Networks", "History", "Algebra"];

    let mut assignments = Vec::with_capacity(args.assignments);
    if !teachers.is_empty() && !groups.is_empty() {
        for _ in 0..args.assignments {
            let Some(teacher) = teachers.choose(&mut rng) else {
                break;
            };
            let Some(subject) = subjects.choose(&mut rng) else {
                break;
            };
            let n = rng.random_range(1..=groups.len().min(3));
            let picked = rand::seq::index::sample(&mut rng, groups.len(), n)
                .into_iter()
                .map(|i| groups[i].name.clone())
                .collect();
            let kind = if rng.random_bool(1.0 / 3.0) {
                SessionType::Lecture
            } else {
                SessionType::Seminar
            };
            assignments.push(AssignmentSpec {
                teacher: teacher.clone(),
                groups: picked,
                subject: subject.to_string(),
                count: rng.random_range(1..=2),
                kind,
            });
        }
    }

    let grid: Vec<String> = args
        .days
        .iter()
        .flat_map(|d| args.times.iter().map(move |t| slot_id(d, t)))
        .collect();

    let mut teacher_busy = BTreeMap::new();
    let mut teacher_prefs = BTreeMap::new();
    for t in &teachers {
        let k = rng.random_range(0..=grid.len().min(3));
        if k > 0 {
            let busy: Vec<String> = grid.choose_multiple(&mut rng, k).cloned().collect();
            teacher_busy.insert(t.clone(), busy);
        }
        if rng.random_bool(0.25) {
            if let Some(room) = rooms.choose(&mut rng) {
                teacher_prefs.insert(t.clone(), room.name.clone());
            }
        }
    }

    ScheduleRequest {
        teachers,
        subjects: subjects.iter().map(|s| s.to_string()).collect(),
        groups,
        rooms,
        assignments,
        teacher_prefs,
        teacher_busy,
        days: args.days.clone(),
        times: args.times.clone(),
    }
}
