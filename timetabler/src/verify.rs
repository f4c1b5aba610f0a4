/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Post-hoc audit of a produced schedule.
//!
//! Re-checks every invariant a schedule must satisfy, working only from the
//! request and the wire response, so it can audit responses from any source.
//!
//! Checks:
//! 1. every entry's slot id is on the request's grid
//! 2. no teacher twice in one slot
//! 3. no group twice in one slot
//! 4. no room twice in one slot
//! 5. room capacity covers the entry's enrollment
//! 6. no entry in a slot its teacher declared busy

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::catalog::{Capacity, Catalog};
use crate::lattice::slot_id;
use crate::payload::{ScheduleRequest, ScheduleResponse};

/// One broken invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("slot '{slot}' is not on the configured grid")]
    UnknownSlot { slot: String },

    #[error("teacher '{teacher}' is booked more than once in '{slot}'")]
    TeacherDoubleBooked { slot: String, teacher: String },

    #[error("group '{group}' is booked more than once in '{slot}'")]
    GroupDoubleBooked { slot: String, group: String },

    #[error("room '{room}' is booked more than once in '{slot}'")]
    RoomDoubleBooked { slot: String, room: String },

    #[error("room '{room}' in '{slot}' seats {capacity} but {enrollment} students are scheduled")]
    OverCapacity {
        slot: String,
        room: String,
        capacity: Capacity,
        enrollment: u64,
    },

    #[error("teacher '{teacher}' is scheduled in '{slot}', which they declared busy")]
    TeacherUnavailable { slot: String, teacher: String },
}

/// Every violation in `response`, in entry order.  Empty means the schedule
/// is sound.
pub fn audit(request: &ScheduleRequest, response: &ScheduleResponse) -> Vec<Violation> {
    let catalog = Catalog::from_request(request);

    let grid: HashSet<String> = request
        .days
        .iter()
        .flat_map(|d| request.times.iter().map(move |t| slot_id(d, t)))
        .collect();

    let busy: HashMap<&str, HashSet<&str>> = request
        .teacher_busy
        .iter()
        .map(|(t, s)| (t.as_str(), s.iter().map(String::as_str).collect()))
        .collect();

    let mut teachers: HashSet<(&str, &str)> = HashSet::new();
    let mut groups: HashSet<(&str, &str)> = HashSet::new();
    let mut rooms: HashSet<(&str, &str)> = HashSet::new();
    let mut violations = Vec::new();

    for e in &response.schedule {
        let slot = e.slot.as_str();

        if !grid.contains(slot) {
            violations.push(Violation::UnknownSlot { slot: slot.into() });
        }

        if !teachers.insert((slot, e.teacher.as_str())) {
            violations.push(Violation::TeacherDoubleBooked {
                slot: slot.into(),
                teacher: e.teacher.clone(),
            });
        }

        let names = e.group_names();
        for &g in &names {
            if !groups.insert((slot, g)) {
                violations.push(Violation::GroupDoubleBooked {
                    slot: slot.into(),
                    group: g.to_string(),
                });
            }
        }

        if !rooms.insert((slot, e.room.as_str())) {
            violations.push(Violation::RoomDoubleBooked {
                slot: slot.into(),
                room: e.room.clone(),
            });
        }

        let capacity = catalog.room_capacity(&e.room);
        let enrollment = catalog.enrollment(&names);
        if !capacity.covers(enrollment) {
            violations.push(Violation::OverCapacity {
                slot: slot.into(),
                room: e.room.clone(),
                capacity,
                enrollment,
            });
        }

        if busy
            .get(e.teacher.as_str())
            .is_some_and(|b| b.contains(slot))
        {
            violations.push(Violation::TeacherUnavailable {
                slot: slot.into(),
                teacher: e.teacher.clone(),
            });
        }
    }

    violations
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::{GroupSpec, ResponseEntry, RoomSpec, SessionType, Status};

    fn request() -> ScheduleRequest {
        ScheduleRequest {
            teachers: vec!["Ivanov".into(), "Petrov".into()],
            groups: vec![
                GroupSpec {
                    name: "A".into(),
                    size: 20,
                },
                GroupSpec {
                    name: "B".into(),
                    size: 20,
                },
            ],
            rooms: vec![
                RoomSpec {
                    name: "small".into(),
                    capacity: Some(25),
                },
                RoomSpec {
                    name: "big".into(),
                    capacity: Some(100),
                },
            ],
            days: vec!["Mon".into()],
            times: vec!["9:00".into(), "10:00".into()],
            ..Default::default()
        }
    }

    fn entry(slot: &str, teacher: &str, group: &str, room: &str) -> ResponseEntry {
        let (day, time) = slot.split_once(' ').unwrap();
        ResponseEntry {
            slot: slot.into(),
            day: day.into(),
            time: time.into(),
            teacher: teacher.into(),
            group: group.into(),
            subject: "S".into(),
            room: room.into(),
            kind: SessionType::Lecture,
        }
    }

    fn response(schedule: Vec<ResponseEntry>) -> ScheduleResponse {
        ScheduleResponse {
            status: Status::Success,
            message: None,
            schedule,
            errors: vec![],
        }
    }

    #[test]
    fn sound_schedule_has_no_violations() {
        let resp = response(vec![
            entry("Mon 9:00", "Ivanov", "A, B", "big"),
            entry("Mon 10:00", "Petrov", "A", "small"),
        ]);
        assert!(audit(&request(), &resp).is_empty());
    }

    #[test]
    fn detects_double_bookings() {
        let resp = response(vec![
            entry("Mon 9:00", "Ivanov", "A", "big"),
            entry("Mon 9:00", "Ivanov", "A", "big"),
        ]);
        let v = audit(&request(), &resp);
        assert!(v.iter().any(|x| matches!(x, Violation::TeacherDoubleBooked { .. })));
        assert!(v.iter().any(|x| matches!(x, Violation::GroupDoubleBooked { .. })));
        assert!(v.iter().any(|x| matches!(x, Violation::RoomDoubleBooked { .. })));
    }

    #[test]
    fn detects_over_capacity() {
        let resp = response(vec![entry("Mon 9:00", "Ivanov", "A, B", "small")]);
        let v = audit(&request(), &resp);
        assert_eq!(
            v,
            vec![Violation::OverCapacity {
                slot: "Mon 9:00".into(),
                room: "small".into(),
                capacity: Capacity::Limited(25),
                enrollment: 40,
            }]
        );
    }

    #[test]
    fn detects_busy_teacher_and_unknown_slot() {
        let mut req = request();
        req.teacher_busy
            .insert("Ivanov".into(), vec!["Mon 9:00".into()]);
        let resp = response(vec![
            entry("Mon 9:00", "Ivanov", "A", "big"),
            entry("Sun 9:00", "Petrov", "B", "big"),
        ]);
        let v = audit(&req, &resp);
        assert_eq!(v.len(), 2, "got: {v:?}");
        assert!(matches!(v[0], Violation::TeacherUnavailable { .. }));
        assert!(matches!(v[1], Violation::UnknownSlot { .. }));
    }
}
