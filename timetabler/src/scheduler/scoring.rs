/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Gap-avoidance scoring of candidate slots.
//!
//! A teacher's day reads best as one unbroken block.  Each candidate slot is
//! scored against the time indices the teacher already uses on that day:
//!
//! | Teacher's day so far | Score |
//! |---|---|
//! | nothing scheduled | [`SCORE_FREE_DAY`] = 10 |
//! | nearest session adjacent (distance 1) | [`SCORE_ADJACENT`] = 100 |
//! | nearest session two away (one idle slot between) | [`SCORE_ONE_GAP`] = −50 |
//! | anything further | [`SCORE_NEUTRAL`] = 0 |
//!
//! Candidates are then ranked by score, highest first, with a stable sort so
//! equal scores keep chronological order.

use std::collections::BTreeSet;

pub const SCORE_FREE_DAY: i32 = 10;
pub const SCORE_ADJACENT: i32 = 100;
pub const SCORE_ONE_GAP: i32 = -50;
pub const SCORE_NEUTRAL: i32 = 0;

/// Score `time_index` against the teacher's `used` indices on the same day.
pub fn gap_score(used: Option<&BTreeSet<usize>>, time_index: usize) -> i32 {
    let Some(used) = used.filter(|u| !u.is_empty()) else {
        return SCORE_FREE_DAY;
    };

    let distance = used
        .iter()
        .map(|&u| u.abs_diff(time_index))
        .min()
        .unwrap_or(usize::MAX);

    match distance {
        1 => SCORE_ADJACENT,
        2 => SCORE_ONE_GAP,
        _ => SCORE_NEUTRAL,
    }
}

/// A slot that passed the availability filter, with its score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub slot_index: usize,
    pub score: i32,
}

/// Order `candidates` best first.  Stable: ties keep their incoming order,
/// which callers build chronologically.
pub fn rank(candidates: &mut [Candidate]) {
    candidates.sort_by(|a, b| b.score.cmp(&a.score));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn used(v: &[usize]) -> BTreeSet<usize> {
        v.iter().copied().collect()
    }

    #[test]
    fn free_day_scores_ten() {
        assert_eq!(gap_score(None, 3), SCORE_FREE_DAY);
        assert_eq!(gap_score(Some(&BTreeSet::new()), 3), SCORE_FREE_DAY);
    }

    #[test]
    fn adjacent_slot_scores_highest() {
        let u = used(&[2]);
        assert_eq!(gap_score(Some(&u), 1), SCORE_ADJACENT);
        assert_eq!(gap_score(Some(&u), 3), SCORE_ADJACENT);
    }

    #[test]
    fn one_idle_slot_is_penalised() {
        let u = used(&[2]);
        assert_eq!(gap_score(Some(&u), 0), SCORE_ONE_GAP);
        assert_eq!(gap_score(Some(&u), 4), SCORE_ONE_GAP);
    }

    #[test]
    fn distant_slot_is_neutral() {
        let u = used(&[0]);
        assert_eq!(gap_score(Some(&u), 5), SCORE_NEUTRAL);
    }

    #[test]
    fn nearest_used_index_decides() {
        // 5 is two from 3 but adjacent to 6 → adjacency wins because the
        // minimum distance is 1
        let u = used(&[3, 6]);
        assert_eq!(gap_score(Some(&u), 5), SCORE_ADJACENT);
        // 0 is three from 3 → neutral, though 6 is further still
        assert_eq!(gap_score(Some(&u), 0), SCORE_NEUTRAL);
    }

    #[test]
    fn rank_is_stable_for_equal_scores() {
        let mut c = vec![
            Candidate { slot_index: 0, score: 10 },
            Candidate { slot_index: 1, score: 100 },
            Candidate { slot_index: 2, score: 10 },
            Candidate { slot_index: 3, score: -50 },
            Candidate { slot_index: 4, score: 100 },
        ];
        rank(&mut c);
        let order: Vec<usize> = c.iter().map(|c| c.slot_index).collect();
        assert_eq!(order, vec![1, 4, 0, 2, 3]);
    }
}
