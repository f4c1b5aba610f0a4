/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Task expansion: coarse assignments → atomic placement tasks.
//!
//! * **Seminars** – every group becomes its own task, `count` times over.
//! * **Lectures** – groups are packed into *streams* bounded by the largest
//!   room capacity (first-fit-decreasing), then each stream becomes a task,
//!   `count` times over.
//!
//! The packing is a greedy approximation and must stay exactly this greedy so
//! that identical requests produce identical streams.

use tracing::debug;

use crate::catalog::{Capacity, Catalog};
use crate::payload::{AssignmentSpec, SessionType};
use crate::task::Task;

/// Pack `groups` into capacity-bounded streams.
///
/// 1. Order groups by size, largest first (stable for equal sizes).
/// 2. A group that alone exceeds `limit` is emitted as a singleton stream
///    straight away; the running stream stays open.
/// 3. Otherwise the group joins the running stream if the total still fits,
///    else the running stream is closed and a new one starts with the group.
/// 4. The last running stream is closed if non-empty.
pub fn plan_streams(groups: &[String], catalog: &Catalog, limit: Capacity) -> Vec<Vec<String>> {
    let mut sorted: Vec<&String> = groups.iter().collect();
    sorted.sort_by(|a, b| catalog.group_size(b).cmp(&catalog.group_size(a)));

    let mut streams: Vec<Vec<String>> = Vec::new();
    let mut current: Vec<String> = Vec::new();
    let mut current_size: u64 = 0;

    for name in sorted {
        let size = u64::from(catalog.group_size(name));

        if !limit.covers(size) {
            streams.push(vec![name.clone()]);
            continue;
        }

        if limit.covers(current_size + size) {
            current.push(name.clone());
            current_size += size;
        } else {
            if !current.is_empty() {
                streams.push(std::mem::take(&mut current));
            }
            current.push(name.clone());
            current_size = size;
        }
    }

    if !current.is_empty() {
        streams.push(current);
    }

    streams
}

/// Expand every assignment into tasks, in assignment order.
pub fn expand_assignments(assignments: &[AssignmentSpec], catalog: &Catalog) -> Vec<Task> {
    let limit = catalog.max_room_capacity();
    let mut tasks = Vec::new();

    for a in assignments {
        let before = tasks.len();

        match a.kind {
            SessionType::Seminar => {
                for group in &a.groups {
                    for _ in 0..a.count {
                        tasks.push(make_task(a, vec![group.clone()], catalog));
                    }
                }
            }
            SessionType::Lecture => {
                let streams = plan_streams(&a.groups, catalog, limit);
                debug!(
                    teacher = %a.teacher,
                    subject = %a.subject,
                    limit = %limit,
                    streams = ?streams,
                    "lecture streams planned"
                );
                for stream in streams {
                    for _ in 0..a.count {
                        tasks.push(make_task(a, stream.clone(), catalog));
                    }
                }
            }
        }

        debug!(
            teacher = %a.teacher,
            subject = %a.subject,
            kind = %a.kind,
            produced = tasks.len() - before,
            "assignment expanded"
        );
    }

    tasks
}

fn make_task(a: &AssignmentSpec, groups: Vec<String>, catalog: &Catalog) -> Task {
    let enrollment = catalog.enrollment(&groups);
    Task {
        teacher: a.teacher.clone(),
        groups,
        subject: a.subject.clone(),
        kind: a.kind,
        enrollment,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::{GroupSpec, RoomSpec, ScheduleRequest};

    fn catalog(groups: &[(&str, u32)], rooms: &[u32]) -> Catalog {
        let req = ScheduleRequest {
            groups: groups
                .iter()
                .map(|&(n, s)| GroupSpec {
                    name: n.into(),
                    size: s,
                })
                .collect(),
            rooms: rooms
                .iter()
                .enumerate()
                .map(|(i, &c)| RoomSpec {
                    name: format!("R{i}"),
                    capacity: Some(c),
                })
                .collect(),
            ..Default::default()
        };
        Catalog::from_request(&req)
    }

    fn names(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    fn assignment(kind: SessionType, groups: &[&str], count: u32) -> AssignmentSpec {
        AssignmentSpec {
            teacher: "Sidorova".into(),
            groups: names(groups),
            subject: "History".into(),
            count,
            kind,
        }
    }

    // ── plan_streams ──────────────────────────────────────────────────────────

    #[test]
    fn two_small_groups_share_one_stream() {
        let cat = catalog(&[("A", 5), ("B", 5)], &[10]);
        let s = plan_streams(&names(&["A", "B"]), &cat, cat.max_room_capacity());
        assert_eq!(s, vec![names(&["A", "B"])]);
    }

    #[test]
    fn groups_are_packed_largest_first() {
        // limit 50: 30 → [C]; 20 fits (50) → [C, A]; 15 overflows → new [B]; 10 fits → [B, D]
        let cat = catalog(&[("A", 20), ("B", 15), ("C", 30), ("D", 10)], &[50]);
        let s = plan_streams(&names(&["A", "B", "C", "D"]), &cat, cat.max_room_capacity());
        assert_eq!(s, vec![names(&["C", "A"]), names(&["B", "D"])]);
    }

    #[test]
    fn oversized_group_becomes_singleton_without_closing_running_stream() {
        // limit 40: Big(90) → singleton; then A and B stream together
        let cat = catalog(&[("Big", 90), ("A", 20), ("B", 20)], &[40]);
        let s = plan_streams(&names(&["A", "Big", "B"]), &cat, cat.max_room_capacity());
        assert_eq!(s, vec![names(&["Big"]), names(&["A", "B"])]);
    }

    #[test]
    fn equal_sizes_keep_input_order() {
        let cat = catalog(&[("X", 10), ("Y", 10), ("Z", 10)], &[20]);
        let s = plan_streams(&names(&["Z", "X", "Y"]), &cat, cat.max_room_capacity());
        assert_eq!(s, vec![names(&["Z", "X"]), names(&["Y"])]);
    }

    #[test]
    fn unbounded_limit_merges_everything() {
        let cat = catalog(&[("A", 500), ("B", 700)], &[]);
        let s = plan_streams(&names(&["A", "B"]), &cat, Capacity::Unbounded);
        assert_eq!(s, vec![names(&["B", "A"])]);
    }

    #[test]
    fn empty_group_list_yields_no_streams() {
        let cat = catalog(&[], &[10]);
        assert!(plan_streams(&[], &cat, cat.max_room_capacity()).is_empty());
    }

    // ── expand_assignments ────────────────────────────────────────────────────

    #[test]
    fn seminar_splits_groups_and_repeats_count() {
        let cat = catalog(&[("A", 5), ("B", 7)], &[100]);
        let tasks = expand_assignments(&[assignment(SessionType::Seminar, &["A", "B"], 2)], &cat);

        let groups: Vec<Vec<String>> = tasks.iter().map(|t| t.groups.clone()).collect();
        assert_eq!(
            groups,
            vec![names(&["A"]), names(&["A"]), names(&["B"]), names(&["B"])]
        );
        assert!(tasks.iter().all(|t| t.kind == SessionType::Seminar));
        assert_eq!(tasks[2].enrollment, 7);
    }

    #[test]
    fn lecture_produces_one_task_per_stream_per_repetition() {
        let cat = catalog(&[("A", 30), ("B", 30), ("C", 30)], &[60]);
        let tasks = expand_assignments(&[assignment(SessionType::Lecture, &["A", "B", "C"], 3)], &cat);
        // streams: [A, B], [C] → 2 × 3 tasks
        assert_eq!(tasks.len(), 6);
        assert_eq!(tasks[0].groups, names(&["A", "B"]));
        assert_eq!(tasks[0].enrollment, 60);
        assert_eq!(tasks[3].groups, names(&["C"]));
    }

    #[test]
    fn zero_count_produces_nothing() {
        let cat = catalog(&[("A", 5)], &[10]);
        let tasks = expand_assignments(
            &[
                assignment(SessionType::Lecture, &["A"], 0),
                assignment(SessionType::Seminar, &["A"], 0),
            ],
            &cat,
        );
        assert!(tasks.is_empty());
    }
}
