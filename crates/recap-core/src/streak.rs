//! Consecutive-day streak statistics.
//!
//! Streak data is a derived projection: it is always recomputed from the
//! full reflection history and never mutated independently. Recomputing
//! from the same history always yields the same result.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::reflection::Reflection;

/// Derived streak statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakData {
    pub current_streak: u32,
    pub longest_streak: u32,
    /// Total reflection records, not unique days.
    pub total_reflections: u32,
    /// Unique local calendar dates with at least one reflection,
    /// most recent first.
    pub reflection_dates: Vec<NaiveDate>,
}

/// Compute streak statistics as of a given local calendar day.
///
/// A streak continues when the most recent reflection date is today or
/// yesterday (the user who reflected yesterday has not broken anything
/// by not having reflected yet today). A most recent date 2+ days old
/// resets the current streak to 0; past gaps never break a run that is
/// anchored at the most recent date.
pub fn compute_streak_at(reflections: &[Reflection], today: NaiveDate) -> StreakData {
    if reflections.is_empty() {
        return StreakData::default();
    }

    // Unique dates, most recent first.
    let unique: BTreeSet<NaiveDate> = reflections.iter().map(|r| r.local_date()).collect();
    let dates: Vec<NaiveDate> = unique.into_iter().rev().collect();

    let gap = (today - dates[0]).num_days();
    let mut current_streak = 0u32;
    if gap == 0 || gap == 1 {
        current_streak = 1;
        for pair in dates.windows(2) {
            if (pair[0] - pair[1]).num_days() == 1 {
                current_streak += 1;
            } else {
                break;
            }
        }
    }

    // Longest run anywhere in history, floored at the current run.
    let mut longest_streak = 0u32;
    let mut run = 1u32;
    for pair in dates.windows(2) {
        if (pair[0] - pair[1]).num_days() == 1 {
            run += 1;
        } else {
            longest_streak = longest_streak.max(run);
            run = 1;
        }
    }
    longest_streak = longest_streak.max(run).max(current_streak);

    StreakData {
        current_streak,
        longest_streak,
        total_reflections: reflections.len() as u32,
        reflection_dates: dates,
    }
}

/// Compute streak statistics as of today.
pub fn compute_streak(reflections: &[Reflection]) -> StreakData {
    compute_streak_at(reflections, Local::now().date_naive())
}
