/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Greedy placement engine.
//!
//! [`solve()`] runs the whole pipeline for one request:
//!
//! ```text
//! SlotLattice::build ─► expand_assignments ─► prioritize ─► PlacementEngine::place_all
//! ```
//!
//! and returns a [`Solution`]: committed [`ScheduleEntry`]s in placement order
//! plus every [`UnplacedTask`] with its reason.
//!
//! # Per-task procedure
//! 1. **Candidates** – slots where the teacher and all the task's groups are
//!    free and which the teacher has not declared busy.
//! 2. **Scoring** – [`scoring::gap_score`] against the teacher's day; stable
//!    sort best first.
//! 3. **Room** – for a non-lecture whose teacher has a preferred room that is
//!    free and large enough, take it outright (even if a smaller room is
//!    free).  Otherwise take the smallest free room that fits.
//! 4. **Commit** on the first slot that yields a room; otherwise the task is
//!    unplaced.
//!
//! Commits are never undone.  A later, harder task can fail because an easier
//! one took its only slot; that is accepted, not repaired.
//!
//! # Example
//! ```rust,ignore
//! let solution = scheduler::solve(&request)?;
//! assert_eq!(solution.placed.len() + solution.unplaced.len(), solution.task_count);
//! ```

pub mod error;
pub mod occupancy;
pub mod scoring;

pub use error::{PlacementFailure, SolveError};

use std::collections::{BTreeMap, HashMap, HashSet};

use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::lattice::{SlotLattice, TimeSlot};
use crate::payload::ScheduleRequest;
use crate::priority::prioritize;
use crate::streams::expand_assignments;
use crate::task::{ScheduleEntry, Task, UnplacedTask};

use occupancy::OccupancyState;
use scoring::{gap_score, rank, Candidate};

// ── Solution ──────────────────────────────────────────────────────────────────

/// Raw outcome of one solve, before reporting.
#[derive(Debug, Clone)]
pub struct Solution {
    /// Committed placements, in the order they were made.
    pub placed: Vec<ScheduleEntry>,
    /// Tasks that found no slot/room, in the order they were attempted.
    pub unplaced: Vec<UnplacedTask>,
    /// Number of tasks produced by expansion.
    pub task_count: usize,
}

/// Run the pipeline for `request`.
///
/// # Errors
/// [`SolveError::EmptyGrid`] if no days or no times are configured.  Every
/// other problem is per-task and ends up in [`Solution::unplaced`].
pub fn solve(request: &ScheduleRequest) -> Result<Solution, SolveError> {
    let lattice = SlotLattice::build(&request.days, &request.times)?;
    let catalog = Catalog::from_request(request);

    let mut tasks = expand_assignments(&request.assignments, &catalog);
    prioritize(&mut tasks);
    let task_count = tasks.len();

    info!(
        slots = lattice.len(),
        rooms = catalog.rooms().len(),
        assignments = request.assignments.len(),
        tasks = task_count,
        "=== timetable solve ==="
    );

    let engine = PlacementEngine::new(
        &lattice,
        &catalog,
        &request.teacher_prefs,
        &request.teacher_busy,
    );
    let (placed, unplaced) = engine.place_all(tasks);

    info!(
        placed = placed.len(),
        unplaced = unplaced.len(),
        total = task_count,
        "=== solve complete ==="
    );

    Ok(Solution {
        placed,
        unplaced,
        task_count,
    })
}

// ── PlacementEngine ───────────────────────────────────────────────────────────

/// Borrowed, read-only view of everything placement needs.  All mutable
/// state lives in the [`OccupancyState`] created inside
/// [`place_all`](Self::place_all).
pub struct PlacementEngine<'a> {
    lattice: &'a SlotLattice,
    catalog: &'a Catalog,
    prefs: &'a BTreeMap<String, String>,
    /// teacher → slot ids the teacher cannot teach in.
    busy: HashMap<&'a str, HashSet<&'a str>>,
}

impl<'a> PlacementEngine<'a> {
    pub fn new(
        lattice: &'a SlotLattice,
        catalog: &'a Catalog,
        prefs: &'a BTreeMap<String, String>,
        busy: &'a BTreeMap<String, Vec<String>>,
    ) -> Self {
        let busy = busy
            .iter()
            .map(|(t, slots)| (t.as_str(), slots.iter().map(String::as_str).collect()))
            .collect();
        Self {
            lattice,
            catalog,
            prefs,
            busy,
        }
    }

    /// Place `tasks` in the given order.  Each task is attempted exactly once.
    pub fn place_all(&self, tasks: Vec<Task>) -> (Vec<ScheduleEntry>, Vec<UnplacedTask>) {
        let mut occ = OccupancyState::new(self.lattice.len());
        let mut placed = Vec::new();
        let mut unplaced = Vec::new();

        for task in tasks {
            match self.place(&task, &mut occ) {
                Ok((slot_index, slot, room)) => {
                    info!(
                        subject = %task.subject,
                        kind = %task.kind,
                        teacher = %task.teacher,
                        groups = ?task.groups,
                        slot = %slot.id,
                        room = %room,
                        "✓ placed"
                    );
                    placed.push(ScheduleEntry {
                        slot_index,
                        slot: slot.clone(),
                        room,
                        task,
                    });
                }
                Err(reason) => {
                    warn!(
                        subject = %task.subject,
                        kind = %task.kind,
                        teacher = %task.teacher,
                        groups = ?task.groups,
                        reason = %reason,
                        "✗ unplaced"
                    );
                    unplaced.push(UnplacedTask { task, reason });
                }
            }
        }

        (placed, unplaced)
    }

    /// Find and commit a slot and room for one task.
    fn place(
        &self,
        task: &Task,
        occ: &mut OccupancyState,
    ) -> Result<(usize, &'a TimeSlot, String), PlacementFailure> {
        let mut candidates = self.candidate_slots(task, occ);
        if candidates.is_empty() {
            return Err(PlacementFailure::NoCommonFreeTime);
        }
        rank(&mut candidates);

        let mut failure = PlacementFailure::NoCommonFreeTime;

        for c in candidates {
            let Some(slot) = self.lattice.get(c.slot_index) else {
                continue;
            };
            match self.pick_room(task, c.slot_index, occ) {
                Some(room) => {
                    occ.commit(c.slot_index, slot, task, &room);
                    return Ok((c.slot_index, slot, room));
                }
                None => {
                    debug!(
                        subject = %task.subject,
                        slot = %slot.id,
                        score = c.score,
                        enrollment = task.enrollment,
                        "no free room large enough"
                    );
                    failure = PlacementFailure::NoRoomCapacity {
                        enrollment: task.enrollment,
                    };
                }
            }
        }

        Err(failure)
    }

    /// Chronological list of scored slots open to `task`.
    fn candidate_slots(&self, task: &Task, occ: &OccupancyState) -> Vec<Candidate> {
        let busy = self.busy.get(task.teacher.as_str());

        self.lattice
            .iter()
            .filter(|(i, slot)| {
                occ.teacher_free(*i, &task.teacher)
                    && occ.groups_free(*i, &task.groups)
                    && !busy.is_some_and(|b| b.contains(slot.id.as_str()))
            })
            .map(|(i, slot)| Candidate {
                slot_index: i,
                score: gap_score(occ.used_indices(&task.teacher, slot.day_index), slot.time_index),
            })
            .collect()
    }

    /// Room for `task` in `slot_index`, or `None` if no free room fits.
    ///
    /// Non-lecture tasks go to the teacher's preferred room whenever it is
    /// free and large enough, even if a smaller room would also fit.
    fn pick_room(&self, task: &Task, slot_index: usize, occ: &OccupancyState) -> Option<String> {
        if !task.is_lecture() {
            if let Some(pref) = self.prefs.get(&task.teacher) {
                if occ.room_free(slot_index, pref)
                    && self.catalog.room_capacity(pref).covers(task.enrollment)
                {
                    return Some(pref.clone());
                }
            }
        }

        let mut free: Vec<_> = self
            .catalog
            .rooms()
            .iter()
            .filter(|r| occ.room_free(slot_index, &r.name))
            .collect();
        free.sort_by_key(|r| r.capacity);

        free.into_iter()
            .find(|r| r.capacity.covers(task.enrollment))
            .map(|r| r.name.clone())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
