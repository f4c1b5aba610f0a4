/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Wire shapes for one timetable request and its response.
//!
//! ```text
//! caller  ──(ScheduleRequest)──►  pipeline  ──(ScheduleResponse)──►  caller
//!            camelCase keys                    groups joined ", "
//! ```
//!
//! Field names follow the external payload (`teacherPrefs`, `teacherBusy`).
//! The snake_case spellings are accepted as aliases on input so request files
//! written by hand in either style load unchanged.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::lattice::slot_id;

// ── Session type ──────────────────────────────────────────────────────────────

/// Kind of teaching session.
///
/// Lectures may share a room across several groups (a *stream*); seminars are
/// always taught to one group at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionType {
    Lecture,
    Seminar,
}

impl SessionType {
    pub fn as_str(self) -> &'static str {
        match self {
            SessionType::Lecture => "lecture",
            SessionType::Seminar => "seminar",
        }
    }
}

impl fmt::Display for SessionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Request ───────────────────────────────────────────────────────────────────

/// A student group and its headcount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSpec {
    pub name: String,
    #[serde(default)]
    pub size: u32,
}

/// A physical room.
///
/// A missing `capacity` or an explicit `0` means the room is unbounded.  Only
/// a missing one also lifts the lecture stream limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
}

/// One coarse teaching commitment: `count` sessions of `subject` taught by
/// `teacher` to `groups`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentSpec {
    pub teacher: String,
    pub groups: Vec<String>,
    pub subject: String,
    pub count: u32,
    #[serde(rename = "type")]
    pub kind: SessionType,
}

/// Everything one solve needs.  Nothing survives past the response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRequest {
    pub teachers: Vec<String>,
    #[serde(default)]
    pub subjects: Vec<String>,
    pub groups: Vec<GroupSpec>,
    pub rooms: Vec<RoomSpec>,
    pub assignments: Vec<AssignmentSpec>,
    /// Teacher → preferred room (applied to seminars only).
    #[serde(default, alias = "teacher_prefs")]
    pub teacher_prefs: BTreeMap<String, String>,
    /// Teacher → slot ids (`"<day> <time>"`) the teacher cannot teach in.
    #[serde(default, alias = "teacher_busy")]
    pub teacher_busy: BTreeMap<String, Vec<String>>,
    pub days: Vec<String>,
    pub times: Vec<String>,
}

impl ScheduleRequest {
    /// Non-fatal consistency warnings.
    ///
    /// The solver accepts every one of these situations (unknown groups count
    /// as size 0, an unknown preferred room is treated as unbounded, and so
    /// on); they are reported so the caller can spot likely typos.
    pub fn lint(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        let teachers: HashSet<&str> = self.teachers.iter().map(String::as_str).collect();

        let mut groups: HashSet<&str> = HashSet::new();
        for g in &self.groups {
            if !groups.insert(g.name.as_str()) {
                warnings.push(format!("duplicate group name '{}'", g.name));
            }
        }

        let mut rooms: HashSet<&str> = HashSet::new();
        for r in &self.rooms {
            if !rooms.insert(r.name.as_str()) {
                warnings.push(format!("duplicate room name '{}'", r.name));
            }
        }

        for (i, a) in self.assignments.iter().enumerate() {
            if !teachers.contains(a.teacher.as_str()) {
                warnings.push(format!(
                    "assignment #{i} ({}): teacher '{}' is not in the teacher list",
                    a.subject, a.teacher
                ));
            }
            if a.groups.is_empty() {
                warnings.push(format!(
                    "assignment #{i} ({}): no groups listed, it produces no sessions",
                    a.subject
                ));
            }
            for g in &a.groups {
                if !groups.contains(g.as_str()) {
                    warnings.push(format!(
                        "assignment #{i} ({}): unknown group '{g}' (treated as size 0)",
                        a.subject
                    ));
                }
            }
            if a.count == 0 {
                warnings.push(format!(
                    "assignment #{i} ({}): count is 0, it produces no sessions",
                    a.subject
                ));
            }
        }

        for (teacher, room) in &self.teacher_prefs {
            if !rooms.contains(room.as_str()) {
                warnings.push(format!(
                    "preferred room '{room}' of teacher '{teacher}' is not a configured room"
                ));
            }
        }

        let slot_ids: HashSet<String> = self
            .days
            .iter()
            .flat_map(|d| self.times.iter().map(move |t| slot_id(d, t)))
            .collect();
        for (teacher, busy) in &self.teacher_busy {
            for s in busy {
                if !slot_ids.contains(s) {
                    warnings.push(format!(
                        "busy slot '{s}' of teacher '{teacher}' matches no configured slot"
                    ));
                }
            }
        }

        warnings
    }
}

// ── Response ──────────────────────────────────────────────────────────────────

/// Top-level outcome.  `Error` is reserved for an empty slot grid; tasks that
/// could not be placed do not change it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// One placed session as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseEntry {
    pub slot: String,
    pub day: String,
    pub time: String,
    pub teacher: String,
    /// Group names joined with `", "`.
    pub group: String,
    pub subject: String,
    pub room: String,
    #[serde(rename = "type")]
    pub kind: SessionType,
}

impl ResponseEntry {
    /// Split the joined `group` field back into names.
    pub fn group_names(&self) -> Vec<&str> {
        self.group.split(", ").filter(|g| !g.is_empty()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleResponse {
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub schedule: Vec<ResponseEntry>,
    pub errors: Vec<String>,
}

// ── Tests ─────────────────────────────────────────────────────────────────────
