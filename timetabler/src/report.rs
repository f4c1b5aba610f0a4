/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Packaging a [`Solution`] (or a [`SolveError`]) into the wire response, and
//! a small quality summary of a produced schedule.

use std::collections::{BTreeMap, BTreeSet};

use crate::lattice::SlotLattice;
use crate::payload::{ScheduleRequest, ScheduleResponse, Status};
use crate::scheduler::{Solution, SolveError};

/// Successful solve → `status: "success"`.
///
/// Entries are sorted by canonical slot order (stable, so entries sharing a
/// slot keep placement order).  Diagnostics keep the order tasks were
/// attempted in.
pub fn success(solution: Solution) -> ScheduleResponse {
    let Solution {
        mut placed,
        unplaced,
        ..
    } = solution;

    placed.sort_by_key(|e| e.slot_index);

    ScheduleResponse {
        status: Status::Success,
        message: None,
        schedule: placed.iter().map(|e| e.to_response()).collect(),
        errors: unplaced.iter().map(|u| u.diagnostic()).collect(),
    }
}

/// Solve that could not start → `status: "error"` with empty lists.
pub fn failure(err: &SolveError) -> ScheduleResponse {
    ScheduleResponse {
        status: Status::Error,
        message: Some(err.to_string()),
        schedule: Vec::new(),
        errors: Vec::new(),
    }
}

// ── Summary ───────────────────────────────────────────────────────────────────

/// Headline numbers for one response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleSummary {
    pub placed: usize,
    pub unplaced: usize,
    /// Idle periods inside teachers' days: time indices strictly between a
    /// teacher's first and last session of a day that the teacher does not
    /// use.
    pub teacher_gaps: usize,
    /// Teachers with at least one placed session.
    pub teachers_scheduled: usize,
}

impl ScheduleSummary {
    /// Compute from `response`, resolving slot ids against `request`'s grid.
    /// Entries whose slot id is not on the grid are counted but ignored for
    /// gap purposes.
    pub fn compute(request: &ScheduleRequest, response: &ScheduleResponse) -> Self {
        let mut summary = ScheduleSummary {
            placed: response.schedule.len(),
            unplaced: response.errors.len(),
            ..Default::default()
        };

        let Ok(lattice) = SlotLattice::build(&request.days, &request.times) else {
            return summary;
        };

        // teacher → day → used time indices
        let mut days: BTreeMap<&str, BTreeMap<usize, BTreeSet<usize>>> = BTreeMap::new();
        for entry in &response.schedule {
            let Some(slot) = lattice.position_of(&entry.slot).and_then(|i| lattice.get(i)) else {
                continue;
            };
            days.entry(entry.teacher.as_str())
                .or_default()
                .entry(slot.day_index)
                .or_default()
                .insert(slot.time_index);
        }

        summary.teachers_scheduled = days.len();
        summary.teacher_gaps = days
            .values()
            .flat_map(|d| d.values())
            .map(|used| match (used.first(), used.last()) {
                (Some(&lo), Some(&hi)) => (hi - lo + 1) - used.len(),
                _ => 0,
            })
            .sum();

        summary
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
