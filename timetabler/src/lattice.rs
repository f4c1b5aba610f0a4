/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! The slot grid: every configured day crossed with every time label.
//!
//! Slots are stored in canonical order (all times of the first day, then all
//! times of the second day, …) and are addressed by their position in that
//! order.  The position doubles as the sort key for the final output.

use crate::scheduler::SolveError;

/// Format the external slot identifier `"<day> <time>"`.
///
/// `teacherBusy` entries must match this text exactly.
pub fn slot_id(day: &str, time: &str) -> String {
    format!("{day} {time}")
}

/// One (day, time) cell of the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlot {
    pub day: String,
    /// Position of `day` in the configured day list.
    pub day_index: usize,
    pub time: String,
    /// Zero-based position of `time` within the day.
    pub time_index: usize,
    /// `"<day> <time>"`.
    pub id: String,
}

/// Ordered, immutable slot grid for one solve.
#[derive(Debug, Clone)]
pub struct SlotLattice {
    slots: Vec<TimeSlot>,
}

impl SlotLattice {
    /// Cross `days` with `times`.
    ///
    /// # Errors
    /// [`SolveError::EmptyGrid`] if either list is empty.
    pub fn build(days: &[String], times: &[String]) -> Result<Self, SolveError> {
        if days.is_empty() || times.is_empty() {
            return Err(SolveError::EmptyGrid {
                days: days.len(),
                times: times.len(),
            });
        }

        let slots = days
            .iter()
            .enumerate()
            .flat_map(|(day_index, day)| {
                times.iter().enumerate().map(move |(time_index, time)| TimeSlot {
                    day: day.clone(),
                    day_index,
                    time: time.clone(),
                    time_index,
                    id: slot_id(day, time),
                })
            })
            .collect();

        Ok(Self { slots })
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slot at canonical position `index`.
    pub fn get(&self, index: usize) -> Option<&TimeSlot> {
        self.slots.get(index)
    }

    /// `(canonical position, slot)` pairs in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &TimeSlot)> {
        self.slots.iter().enumerate()
    }

    /// Canonical position of the slot whose id is `id`, if any.
    ///
    /// With repeated day names the first match wins.
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.slots.iter().position(|s| s.id == id)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
