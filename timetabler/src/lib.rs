/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Timetabler – greedy university timetable solver
//!
//! One request flows through a strictly linear pipeline:
//!
//! ```text
//! lib.rs
//! ├── payload         – wire request / response shapes (serde)
//! ├── config/         – request file loading (YAML or JSON)
//! ├── catalog         – group sizes and room capacities looked up by name
//! ├── lattice         – days × times → ordered slot grid
//! ├── streams         – assignments → tasks (lecture streams, seminar splits)
//! ├── priority        – hardest-first task ordering
//! ├── scheduler/      – greedy placement engine + occupancy + scoring
//! ├── report          – chronological output and diagnostics
//! └── verify          – post-hoc audit of a produced schedule
//! ```

pub mod catalog;
pub mod config;
pub mod lattice;
pub mod payload;
pub mod priority;
pub mod report;
pub mod scheduler;
pub mod streams;
pub mod task;
pub mod verify;

use payload::{ScheduleRequest, ScheduleResponse};

/// Run the full pipeline for one request and package the outcome.
///
/// Never fails: an empty slot grid becomes a response with `status: "error"`,
/// and tasks that cannot be placed become entries in `errors`.
pub fn generate_schedule(request: &ScheduleRequest) -> ScheduleResponse {
    match scheduler::solve(request) {
        Ok(solution) => report::success(solution),
        Err(e) => report::failure(&e),
    }
}
