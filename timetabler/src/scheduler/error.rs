/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Structured error types for the timetable solver.
//!
//! Two error enums model the two failure layers:
//!
//! * [`PlacementFailure`]: why a single task could not be placed.  Not fatal:
//!   the engine records it and moves on to the next task.
//! * [`SolveError`]: the whole solve cannot start.  Mapped to a response with
//!   `status: "error"` by [`crate::report::failure`], never surfaced as a panic.
//!
//! The `Display` text of [`PlacementFailure`] is the reason printed in the
//! response's `errors` list.

use thiserror::Error;

// ── Per-task failures ─────────────────────────────────────────────────────────

/// Reason a task ended up unplaced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementFailure {
    /// No slot had the teacher and every group free (after the teacher's
    /// unavailability list was applied).
    #[error("no common free time")]
    NoCommonFreeTime,

    /// Some slots were free for everyone, but none of them had a free room
    /// large enough.  `enrollment` is the headcount that did not fit.
    #[error("no room of sufficient capacity")]
    NoRoomCapacity { enrollment: u64 },
}

// ── Top-level solve errors ────────────────────────────────────────────────────

/// Error returned by [`solve()`](super::solve) before any task is attempted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// No days or no time labels were configured, so there is no slot to
    /// place anything into.
    #[error("no days or class times configured ({days} day(s), {times} time label(s)); the slot grid is empty")]
    EmptyGrid { days: usize, times: usize },
}
