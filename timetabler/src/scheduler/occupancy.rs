/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Per-solve occupancy bookkeeping.
//!
//! Created empty at the start of a solve and only ever grown: a commit marks
//! the teacher, every group and the room busy in one slot, and records the
//! slot's time index against the teacher's day.  Nothing is ever released.

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::lattice::TimeSlot;
use crate::task::Task;

#[derive(Debug, Default)]
struct SlotUse {
    teachers: HashSet<String>,
    groups: HashSet<String>,
    rooms: HashSet<String>,
}

/// Who and what is busy in each slot, plus each teacher's used time indices
/// per day (for the gap heuristic).
#[derive(Debug, Default)]
pub struct OccupancyState {
    /// Indexed by canonical slot position.
    slots: Vec<SlotUse>,
    /// teacher → day position → used time indices.
    teacher_days: HashMap<String, HashMap<usize, BTreeSet<usize>>>,
}

impl OccupancyState {
    /// Empty state for a grid of `slot_count` slots.
    pub fn new(slot_count: usize) -> Self {
        Self {
            slots: (0..slot_count).map(|_| SlotUse::default()).collect(),
            teacher_days: HashMap::new(),
        }
    }

    pub fn teacher_free(&self, slot: usize, teacher: &str) -> bool {
        self.slots
            .get(slot)
            .is_some_and(|u| !u.teachers.contains(teacher))
    }

    /// `true` only if none of `groups` is busy in `slot`.
    pub fn groups_free(&self, slot: usize, groups: &[String]) -> bool {
        self.slots
            .get(slot)
            .is_some_and(|u| groups.iter().all(|g| !u.groups.contains(g)))
    }

    pub fn room_free(&self, slot: usize, room: &str) -> bool {
        self.slots
            .get(slot)
            .is_some_and(|u| !u.rooms.contains(room))
    }

    /// Time indices `teacher` already teaches on day `day_index`.
    pub fn used_indices(&self, teacher: &str, day_index: usize) -> Option<&BTreeSet<usize>> {
        self.teacher_days.get(teacher)?.get(&day_index)
    }

    /// Mark `task` as taught in `slot` (canonical position `slot_index`) and
    /// `room`.  Irrevocable for the rest of the solve.
    pub fn commit(&mut self, slot_index: usize, slot: &TimeSlot, task: &Task, room: &str) {
        if let Some(u) = self.slots.get_mut(slot_index) {
            u.teachers.insert(task.teacher.clone());
            u.rooms.insert(room.to_string());
            u.groups.extend(task.groups.iter().cloned());
        }

        self.teacher_days
            .entry(task.teacher.clone())
            .or_default()
            .entry(slot.day_index)
            .or_default()
            .insert(slot.time_index);
    }
}
