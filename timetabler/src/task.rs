/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Core task data structures for the timetable pipeline.
//!
//! Two distinct types model the two sides of the placement step:
//!
//! ```text
//! AssignmentSpec  ──(streams)──►  Task  ──(scheduler)──►  ScheduleEntry  ──(report)──►  ResponseEntry
//!                                  ↑ atomic unit              ↑ committed placement
//!                                  consumed exactly once      slot + room attached
//! ```
//!
//! # Ownership model
//! The expander produces `Vec<Task>`; the prioritizer reorders it in place and
//! the placement engine consumes it by value.  Each task ends up either inside
//! exactly one [`ScheduleEntry`] or exactly one [`UnplacedTask`].

use crate::lattice::TimeSlot;
use crate::payload::{ResponseEntry, SessionType};
use crate::scheduler::PlacementFailure;

// ── Task (input to placement) ─────────────────────────────────────────────────

/// One session that must land in exactly one slot and one room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub teacher: String,

    /// Non-empty.  One name for seminars; one or more for a lecture stream.
    pub groups: Vec<String>,

    pub subject: String,

    pub kind: SessionType,

    /// Total headcount of `groups`, fixed at expansion time.
    pub enrollment: u64,
}

impl Task {
    pub fn is_lecture(&self) -> bool {
        self.kind == SessionType::Lecture
    }

    /// Composite ordering key: `(is_lecture, group count, enrollment)`.
    ///
    /// Larger keys are attempted first.
    pub fn priority_key(&self) -> (bool, usize, u64) {
        (self.is_lecture(), self.groups.len(), self.enrollment)
    }
}

// ── ScheduleEntry (committed placement) ───────────────────────────────────────

/// A task committed to a slot and a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleEntry {
    /// Canonical slot position, used for chronological sorting.
    pub slot_index: usize,
    pub slot: TimeSlot,
    pub room: String,
    pub task: Task,
}

impl ScheduleEntry {
    /// Wire form: groups joined with `", "`.
    pub fn to_response(&self) -> ResponseEntry {
        ResponseEntry {
            slot: self.slot.id.clone(),
            day: self.slot.day.clone(),
            time: self.slot.time.clone(),
            teacher: self.task.teacher.clone(),
            group: self.task.groups.join(", "),
            subject: self.task.subject.clone(),
            room: self.room.clone(),
            kind: self.task.kind,
        }
    }
}

// ── UnplacedTask ──────────────────────────────────────────────────────────────

/// A task the engine could not place, with the reason it gave up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnplacedTask {
    pub task: Task,
    pub reason: PlacementFailure,
}

impl UnplacedTask {
    /// Human-readable diagnostic line: subject, type, teacher, reason.
    pub fn diagnostic(&self) -> String {
        format!(
            "{} ({}) for {}. Reason: {}",
            self.task.subject, self.task.kind, self.task.teacher, self.reason
        )
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn task(kind: SessionType, groups: &[&str], enrollment: u64) -> Task {
        Task {
            teacher: "Ivanov".into(),
            groups: groups.iter().map(|g| g.to_string()).collect(),
            subject: "Physics".into(),
            kind,
            enrollment,
        }
    }

    #[test]
    fn lecture_key_outranks_any_seminar_key() {
        let lec = task(SessionType::Lecture, &["A"], 1);
        let sem = task(SessionType::Seminar, &["A"], 500);
        assert!(lec.priority_key() > sem.priority_key());
    }

    #[test]
    fn group_count_outranks_enrollment() {
        let two = task(SessionType::Lecture, &["A", "B"], 10);
        let one = task(SessionType::Lecture, &["C"], 90);
        assert!(two.priority_key() > one.priority_key());
    }

    #[test]
    fn entry_to_response_joins_groups() {
        let entry = ScheduleEntry {
            slot_index: 3,
            slot: TimeSlot {
                day: "Tue".into(),
                day_index: 1,
                time: "10:40".into(),
                time_index: 1,
                id: "Tue 10:40".into(),
            },
            room: "Hall".into(),
            task: task(SessionType::Lecture, &["A", "B"], 40),
        };
        let r = entry.to_response();
        assert_eq!(r.slot, "Tue 10:40");
        assert_eq!(r.day, "Tue");
        assert_eq!(r.time, "10:40");
        assert_eq!(r.group, "A, B");
        assert_eq!(r.room, "Hall");
        assert_eq!(r.kind, SessionType::Lecture);
    }

    #[test]
    fn diagnostic_names_subject_type_teacher_and_reason() {
        let u = UnplacedTask {
            task: task(SessionType::Seminar, &["A"], 12),
            reason: PlacementFailure::NoCommonFreeTime,
        };
        assert_eq!(
            u.diagnostic(),
            "Physics (seminar) for Ivanov. Reason: no common free time"
        );
    }
}
