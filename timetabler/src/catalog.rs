/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Name-keyed lookups for group headcounts and room capacities.
//!
//! Built once per solve from the request.  Unknown names never fail a lookup:
//! an unknown group weighs 0 students and an unknown room is unbounded.

use std::collections::HashMap;

use crate::payload::ScheduleRequest;

// ── Capacity ──────────────────────────────────────────────────────────────────

/// Seating capacity of a room.
///
/// A configured capacity of `0` is the "no limit" sentinel.  The derived
/// ordering puts every `Limited` value before `Unbounded`, so sorting rooms by
/// capacity yields smallest-first with unbounded rooms last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Capacity {
    Limited(u32),
    Unbounded,
}

impl Capacity {
    /// Interpret a raw configured capacity (`0` = unbounded).
    pub fn from_raw(seats: u32) -> Self {
        if seats == 0 {
            Capacity::Unbounded
        } else {
            Capacity::Limited(seats)
        }
    }

    /// Interpret an optional configured capacity; a missing one is unbounded.
    pub fn from_declared(seats: Option<u32>) -> Self {
        seats.map_or(Capacity::Unbounded, Capacity::from_raw)
    }

    /// `true` if `enrollment` students fit.
    pub fn covers(self, enrollment: u64) -> bool {
        match self {
            Capacity::Limited(seats) => u64::from(seats) >= enrollment,
            Capacity::Unbounded => true,
        }
    }
}

impl std::fmt::Display for Capacity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Capacity::Limited(seats) => write!(f, "{seats}"),
            Capacity::Unbounded => f.write_str("unbounded"),
        }
    }
}

// ── Catalog ───────────────────────────────────────────────────────────────────

/// A configured room with its interpreted capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub name: String,
    pub capacity: Capacity,
}

/// Group and room reference data for one solve.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    group_sizes: HashMap<String, u32>,
    /// Rooms in request order (the order ties fall back to when sorting).
    rooms: Vec<Room>,
    room_capacity: HashMap<String, Capacity>,
    /// Some room was configured without a capacity at all.
    undeclared_room: bool,
}

impl Catalog {
    /// Build from a request.  Where names repeat, the last entry wins for
    /// lookups; `rooms()` still lists every configured room.
    pub fn from_request(request: &ScheduleRequest) -> Self {
        let group_sizes = request
            .groups
            .iter()
            .map(|g| (g.name.clone(), g.size))
            .collect();

        let rooms: Vec<Room> = request
            .rooms
            .iter()
            .map(|r| Room {
                name: r.name.clone(),
                capacity: Capacity::from_declared(r.capacity),
            })
            .collect();

        let room_capacity = rooms
            .iter()
            .map(|r| (r.name.clone(), r.capacity))
            .collect();

        let undeclared_room = request.rooms.iter().any(|r| r.capacity.is_none());

        Self {
            group_sizes,
            rooms,
            room_capacity,
            undeclared_room,
        }
    }

    /// Headcount of `group`, `0` if unknown.
    pub fn group_size(&self, group: &str) -> u32 {
        self.group_sizes.get(group).copied().unwrap_or(0)
    }

    /// Total headcount of `groups`.
    pub fn enrollment<S: AsRef<str>>(&self, groups: &[S]) -> u64 {
        groups
            .iter()
            .map(|g| u64::from(self.group_size(g.as_ref())))
            .sum()
    }

    /// Capacity of `room`; unknown rooms are unbounded.
    pub fn room_capacity(&self, room: &str) -> Capacity {
        self.room_capacity
            .get(room)
            .copied()
            .unwrap_or(Capacity::Unbounded)
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Largest room capacity, used to bound lecture streams.
    ///
    /// Unbounded when there are no rooms, when any room has no capacity
    /// configured, or when every room is configured with `0`.  Explicit-zero
    /// rooms in a mixed set do not lift the bound: the limit is the largest
    /// positive value.
    pub fn max_room_capacity(&self) -> Capacity {
        if self.undeclared_room {
            return Capacity::Unbounded;
        }
        self.rooms
            .iter()
            .filter_map(|r| match r.capacity {
                Capacity::Limited(seats) => Some(seats),
                Capacity::Unbounded => None,
            })
            .max()
            .map(Capacity::Limited)
            .unwrap_or(Capacity::Unbounded)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::{GroupSpec, RoomSpec};

    fn request(groups: &[(&str, u32)], rooms: &[(&str, u32)]) -> ScheduleRequest {
        let rooms: Vec<(&str, Option<u32>)> = rooms.iter().map(|&(n, c)| (n, Some(c))).collect();
        request_with(groups, &rooms)
    }

    fn request_with(groups: &[(&str, u32)], rooms: &[(&str, Option<u32>)]) -> ScheduleRequest {
        ScheduleRequest {
            groups: groups
                .iter()
                .map(|&(n, s)| GroupSpec {
                    name: n.into(),
                    size: s,
                })
                .collect(),
            rooms: rooms
                .iter()
                .map(|&(n, c)| RoomSpec {
                    name: n.into(),
                    capacity: c,
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn zero_capacity_is_unbounded() {
        assert_eq!(Capacity::from_raw(0), Capacity::Unbounded);
        assert!(Capacity::Unbounded.covers(u64::MAX));
    }

    #[test]
    fn covers_is_inclusive() {
        assert!(Capacity::Limited(10).covers(10));
        assert!(!Capacity::Limited(10).covers(11));
    }

    #[test]
    fn ordering_puts_unbounded_last() {
        let mut caps = vec![
            Capacity::Unbounded,
            Capacity::Limited(40),
            Capacity::Limited(12),
        ];
        caps.sort();
        assert_eq!(
            caps,
            vec![
                Capacity::Limited(12),
                Capacity::Limited(40),
                Capacity::Unbounded
            ]
        );
    }

    #[test]
    fn enrollment_sums_known_groups_and_ignores_unknown() {
        let cat = Catalog::from_request(&request(&[("A", 10), ("B", 15)], &[]));
        assert_eq!(cat.enrollment(&["A", "B", "ghost"]), 25);
        assert_eq!(cat.group_size("ghost"), 0);
    }

    #[test]
    fn unknown_room_is_unbounded() {
        let cat = Catalog::from_request(&request(&[], &[("101", 20)]));
        assert_eq!(cat.room_capacity("101"), Capacity::Limited(20));
        assert_eq!(cat.room_capacity("nowhere"), Capacity::Unbounded);
    }

    #[test]
    fn max_room_capacity_cases() {
        let none = Catalog::from_request(&request(&[], &[]));
        assert_eq!(none.max_room_capacity(), Capacity::Unbounded);

        let zeros = Catalog::from_request(&request(&[], &[("a", 0), ("b", 0)]));
        assert_eq!(zeros.max_room_capacity(), Capacity::Unbounded);

        let mixed = Catalog::from_request(&request(&[], &[("a", 0), ("b", 30), ("c", 60)]));
        assert_eq!(mixed.max_room_capacity(), Capacity::Limited(60));
    }

    #[test]
    fn room_without_capacity_lifts_the_stream_limit() {
        let cat = Catalog::from_request(&request_with(&[], &[("Hall", None), ("101", Some(30))]));
        assert_eq!(cat.room_capacity("Hall"), Capacity::Unbounded);
        assert_eq!(cat.max_room_capacity(), Capacity::Unbounded);

        let zero = Catalog::from_request(&request_with(&[], &[("Hall", Some(0)), ("101", Some(30))]));
        assert_eq!(zero.room_capacity("Hall"), Capacity::Unbounded);
        assert_eq!(zero.max_room_capacity(), Capacity::Limited(30));
    }

    #[test]
    fn duplicate_names_last_wins_for_lookup() {
        let cat = Catalog::from_request(&request(&[("A", 5), ("A", 9)], &[("r", 5), ("r", 50)]));
        assert_eq!(cat.group_size("A"), 9);
        assert_eq!(cat.room_capacity("r"), Capacity::Limited(50));
        assert_eq!(cat.rooms().len(), 2);
    }
}
