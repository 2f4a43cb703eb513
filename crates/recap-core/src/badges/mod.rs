//! Badge evaluation.
//!
//! Badges derive entirely from the reflection history and streak data.
//! An unlocked badge stays unlocked forever; its progress is frozen at
//! the moment of unlock and never recomputed.

mod catalog;

pub use catalog::{spec, BadgeRule, BadgeSpec, CATALOG};

use chrono::{DateTime, Datelike, Duration, Local, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::reflection::Reflection;
use crate::streak::StreakData;

/// Runtime badge state: catalog identity plus progress and unlock time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub requirement: String,
    pub progress: u32,
    pub total: Option<u32>,
    pub unlocked_at: Option<DateTime<Utc>>,
}

impl Badge {
    fn from_spec(spec: &BadgeSpec) -> Self {
        Self {
            id: spec.id.to_string(),
            name: spec.name.to_string(),
            description: spec.description.to_string(),
            icon: spec.icon.to_string(),
            requirement: spec.requirement.to_string(),
            progress: 0,
            total: Some(spec.rule.total()),
            unlocked_at: None,
        }
    }
}

/// Evaluate the full badge set against the reflection history, at `now`.
///
/// Catalog entries missing from `existing` are initialized with zero
/// progress. Already-unlocked badges are skipped entirely. Everything
/// else gets its progress recomputed per its rule, and `unlocked_at`
/// set the first time the threshold is met. The returned vector is the
/// complete replacement state.
pub fn evaluate_badges_at(
    reflections: &[Reflection],
    streak: &StreakData,
    existing: &[Badge],
    now: DateTime<Local>,
) -> Vec<Badge> {
    let mut badges: Vec<Badge> = existing.to_vec();
    for spec in CATALOG {
        if !badges.iter().any(|b| b.id == spec.id) {
            badges.push(Badge::from_spec(spec));
        }
    }

    for badge in &mut badges {
        if badge.unlocked_at.is_some() {
            continue;
        }
        // Badges persisted under ids no longer in the catalog are left alone.
        let Some(spec) = catalog::spec(&badge.id) else {
            continue;
        };
        let (progress, unlock) = evaluate_rule(&spec.rule, reflections, streak, now);
        badge.progress = progress;
        if unlock {
            badge.unlocked_at = Some(now.with_timezone(&Utc));
        }
    }

    badges
}

/// Evaluate the full badge set as of the current instant.
pub fn evaluate_badges(
    reflections: &[Reflection],
    streak: &StreakData,
    existing: &[Badge],
) -> Vec<Badge> {
    evaluate_badges_at(reflections, streak, existing, Local::now())
}

fn evaluate_rule(
    rule: &BadgeRule,
    reflections: &[Reflection],
    streak: &StreakData,
    now: DateTime<Local>,
) -> (u32, bool) {
    // Progress is capped at the rule's total: a backlog evaluated in
    // one pass must not freeze progress above what the badge displays.
    match *rule {
        BadgeRule::TotalReflections { threshold } => {
            let count = reflections.len() as u32;
            (count.min(threshold), count >= threshold)
        }
        BadgeRule::CurrentStreak { threshold } => (
            streak.current_streak.min(threshold),
            streak.current_streak >= threshold,
        ),
        BadgeRule::WeeklyReflections { threshold } => {
            let count = this_week_count(reflections, now);
            (count.min(threshold), count >= threshold)
        }
        BadgeRule::BeforeHour { hour, threshold } => {
            let count = count_by_hour(reflections, |h| h < hour);
            (count.min(threshold), count >= threshold)
        }
        BadgeRule::AtOrAfterHour { hour, threshold } => {
            let count = count_by_hour(reflections, |h| h >= hour);
            (count.min(threshold), count >= threshold)
        }
        BadgeRule::Category {
            category,
            threshold,
        } => {
            // Prompt ids start with their activity id, which embeds the
            // category slug for onboarding-created activities.
            let slug = category.slug();
            let count = reflections
                .iter()
                .filter(|r| r.prompt_id.contains(slug))
                .count() as u32;
            (count.min(threshold), count >= threshold)
        }
        BadgeRule::Comeback { min_streak } => {
            if streak.current_streak >= min_streak && streak.longest_streak > streak.current_streak
            {
                (min_streak, true)
            } else {
                (0, false)
            }
        }
    }
}

/// Reflections recorded since the start of the current week (Sunday 00:00 local).
fn this_week_count(reflections: &[Reflection], now: DateTime<Local>) -> u32 {
    let week_start = now.date_naive() - Duration::days(now.weekday().num_days_from_sunday() as i64);
    reflections
        .iter()
        .filter(|r| r.created_at.with_timezone(&Local).date_naive() >= week_start)
        .count() as u32
}

fn count_by_hour(reflections: &[Reflection], pred: impl Fn(u32) -> bool) -> u32 {
    reflections
        .iter()
        .filter(|r| pred(r.created_at.with_timezone(&Local).hour()))
        .count() as u32
}

/// Badges unlocked in `new` that were absent or still locked in `old`.
pub fn newly_unlocked(old: &[Badge], new: &[Badge]) -> Vec<Badge> {
    new.iter()
        .filter(|b| {
            b.unlocked_at.is_some()
                && old
                    .iter()
                    .find(|o| o.id == b.id)
                    .map_or(true, |o| o.unlocked_at.is_none())
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    // 2026-03-04 is a Wednesday; the week started Sunday 2026-03-01.
    fn now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 3, 4, 12, 0, 0).unwrap()
    }

    fn reflection_at(day: u32, hour: u32, prompt_id: &str) -> Reflection {
        Reflection {
            id: format!("r-{day}-{hour}-{prompt_id}"),
            prompt_id: prompt_id.to_string(),
            video_uri: "file:///tmp/clip.mp4".to_string(),
            duration_secs: 30,
            created_at: Local
                .with_ymd_and_hms(2026, 3, day, hour, 0, 0)
                .unwrap()
                .with_timezone(&Utc),
        }
    }

    fn streak(current: u32, longest: u32) -> StreakData {
        StreakData {
            current_streak: current,
            longest_streak: longest,
            ..StreakData::default()
        }
    }

    fn find<'a>(badges: &'a [Badge], id: &str) -> &'a Badge {
        badges.iter().find(|b| b.id == id).unwrap()
    }

    #[test]
    fn catalog_is_fully_initialized() {
        let badges = evaluate_badges_at(&[], &StreakData::default(), &[], now());
        assert_eq!(badges.len(), CATALOG.len());
        assert!(badges.iter().all(|b| b.unlocked_at.is_none()));
    }

    #[test]
    fn first_reflection_unlocks_at_exactly_one() {
        let empty = evaluate_badges_at(&[], &StreakData::default(), &[], now());
        assert!(find(&empty, "first-reflection").unlocked_at.is_none());

        let one = vec![reflection_at(4, 12, "gym-1-x")];
        let badges = evaluate_badges_at(&one, &streak(1, 1), &[], now());
        let first = find(&badges, "first-reflection");
        assert!(first.unlocked_at.is_some());
        assert_eq!(first.progress, 1);
    }

    #[test]
    fn backlog_evaluation_caps_progress_at_total() {
        // A first evaluation over five reflections must not freeze
        // first-reflection at 5/1.
        let reflections: Vec<Reflection> = (0..5u32)
            .map(|i| reflection_at(1 + i % 4, 12, &format!("p{i}")))
            .collect();
        let badges = evaluate_badges_at(&reflections, &streak(10, 10), &[], now());

        let first = find(&badges, "first-reflection");
        assert!(first.unlocked_at.is_some());
        assert_eq!(first.progress, 1);

        let ww = find(&badges, "week-warrior");
        assert!(ww.unlocked_at.is_some());
        assert_eq!(ww.progress, 7);

        for badge in &badges {
            if let Some(total) = badge.total {
                assert!(badge.progress <= total, "{} overshoots its total", badge.id);
            }
        }
    }

    #[test]
    fn week_warrior_boundary() {
        let badges = evaluate_badges_at(&[], &streak(6, 6), &[], now());
        let ww = find(&badges, "week-warrior");
        assert!(ww.unlocked_at.is_none());
        assert_eq!(ww.progress, 6);

        let badges = evaluate_badges_at(&[], &streak(7, 7), &[], now());
        assert!(find(&badges, "week-warrior").unlocked_at.is_some());
    }

    #[test]
    fn unlocked_badge_is_never_reevaluated() {
        let one = vec![reflection_at(4, 12, "p")];
        let first = evaluate_badges_at(&one, &streak(1, 1), &[], now());
        let unlocked_at = find(&first, "first-reflection").unlocked_at;
        assert!(unlocked_at.is_some());

        // Re-evaluating against an empty history must not re-lock it,
        // and its progress stays frozen.
        let later = Local.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap();
        let second = evaluate_badges_at(&[], &StreakData::default(), &first, later);
        let badge = find(&second, "first-reflection");
        assert_eq!(badge.unlocked_at, unlocked_at);
        assert_eq!(badge.progress, 1);
    }

    #[test]
    fn weekly_count_only_counts_this_week() {
        // Sat Feb 28 is last week; Sun Mar 1 onward counts.
        let reflections = vec![
            reflection_at(1, 10, "a"),
            reflection_at(2, 10, "b"),
            reflection_at(3, 10, "c"),
            reflection_at(4, 10, "d"),
        ];
        let badges = evaluate_badges_at(&reflections, &streak(4, 4), &[], now());
        let cc = find(&badges, "consistent-creator");
        assert_eq!(cc.progress, 4);
        assert!(cc.unlocked_at.is_none());

        let mut five = reflections;
        five.push(reflection_at(4, 11, "e"));
        let badges = evaluate_badges_at(&five, &streak(4, 4), &[], now());
        assert!(find(&badges, "consistent-creator").unlocked_at.is_some());
    }

    #[test]
    fn early_bird_and_night_owl_split_by_local_hour() {
        let mut reflections: Vec<Reflection> = (0..10u32)
            .map(|i| reflection_at(1 + (i % 4), 7, &format!("m{i}")))
            .collect();
        reflections.push(reflection_at(2, 21, "evening"));

        let badges = evaluate_badges_at(&reflections, &streak(1, 1), &[], now());
        let early = find(&badges, "early-bird");
        assert_eq!(early.progress, 10);
        assert!(early.unlocked_at.is_some());

        let owl = find(&badges, "night-owl");
        assert_eq!(owl.progress, 1);
        assert!(owl.unlocked_at.is_none());
    }

    #[test]
    fn category_badges_count_prompt_ids() {
        let reflections: Vec<Reflection> = (0..20u32)
            .map(|i| {
                reflection_at(1 + (i % 4), 10 + (i % 3), &format!("gym-7-2026-03-0{}", 1 + i % 4))
            })
            .collect();
        let badges = evaluate_badges_at(&reflections, &streak(1, 1), &[], now());
        let gym = find(&badges, "gym-enthusiast");
        assert_eq!(gym.progress, 20);
        assert!(gym.unlocked_at.is_some());
        assert_eq!(find(&badges, "scholar").progress, 0);
    }

    #[test]
    fn comeback_requires_longer_historical_streak() {
        let badges = evaluate_badges_at(&[], &streak(3, 3), &[], now());
        assert!(find(&badges, "comeback-kid").unlocked_at.is_none());

        let badges = evaluate_badges_at(&[], &streak(3, 9), &[], now());
        let cb = find(&badges, "comeback-kid");
        assert!(cb.unlocked_at.is_some());
        assert_eq!(cb.progress, 3);
    }

    #[test]
    fn newly_unlocked_reports_only_transitions() {
        let old = evaluate_badges_at(&[], &StreakData::default(), &[], now());
        let one = vec![reflection_at(4, 12, "p")];
        let new = evaluate_badges_at(&one, &streak(1, 1), &old, now());

        let fresh = newly_unlocked(&old, &new);
        assert_eq!(fresh.len(), 1);
        assert_eq!(fresh[0].id, "first-reflection");

        // No transition between two identical evaluations.
        let again = evaluate_badges_at(&one, &streak(1, 1), &new, now());
        assert!(newly_unlocked(&new, &again).is_empty());
    }
}
