/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Hardest-first task ordering.
//!
//! The placement engine never backtracks, so the tasks most likely to become
//! unplaceable (lectures, many groups, many students) go first.

use crate::task::Task;

/// Sort `tasks` in place, descending by [`Task::priority_key`].
///
/// The sort is stable: tasks with equal keys keep their creation order.
pub fn prioritize(tasks: &mut [Task]) {
    tasks.sort_by(|a, b| b.priority_key().cmp(&a.priority_key()));
}
