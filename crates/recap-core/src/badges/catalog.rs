//! The fixed badge catalog.
//!
//! Adding a badge means adding a `BadgeSpec` here; the rule is a closed
//! enum, so the evaluator covers every kind at compile time.

use crate::schedule::ActivityType;

/// Unlock rule for one badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeRule {
    /// Total reflections ever recorded.
    TotalReflections { threshold: u32 },
    /// Current consecutive-day streak length.
    CurrentStreak { threshold: u32 },
    /// Reflections recorded since the start of the current week (Sunday).
    WeeklyReflections { threshold: u32 },
    /// Reflections recorded before the given local hour.
    BeforeHour { hour: u32, threshold: u32 },
    /// Reflections recorded at or after the given local hour.
    AtOrAfterHour { hour: u32, threshold: u32 },
    /// Reflections tied to prompts of one activity category.
    Category {
        category: ActivityType,
        threshold: u32,
    },
    /// Rebuilding after a broken streak: current streak at least
    /// `min_streak` while the historical longest exceeds it.
    Comeback { min_streak: u32 },
}

impl BadgeRule {
    /// The counting target shown next to progress.
    pub fn total(&self) -> u32 {
        match *self {
            BadgeRule::TotalReflections { threshold }
            | BadgeRule::CurrentStreak { threshold }
            | BadgeRule::WeeklyReflections { threshold }
            | BadgeRule::BeforeHour { threshold, .. }
            | BadgeRule::AtOrAfterHour { threshold, .. }
            | BadgeRule::Category { threshold, .. } => threshold,
            BadgeRule::Comeback { min_streak } => min_streak,
        }
    }
}

/// A catalog entry: static identity plus the unlock rule.
#[derive(Debug, Clone, Copy)]
pub struct BadgeSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub requirement: &'static str,
    pub rule: BadgeRule,
}

/// Every badge the app can award.
pub const CATALOG: &[BadgeSpec] = &[
    BadgeSpec {
        id: "first-reflection",
        name: "First Steps",
        description: "Record your very first reflection",
        icon: "🎬",
        requirement: "1 reflection",
        rule: BadgeRule::TotalReflections { threshold: 1 },
    },
    BadgeSpec {
        id: "week-warrior",
        name: "Week Warrior",
        description: "Keep a 7-day reflection streak",
        icon: "🔥",
        requirement: "7-day streak",
        rule: BadgeRule::CurrentStreak { threshold: 7 },
    },
    BadgeSpec {
        id: "consistent-creator",
        name: "Consistent Creator",
        description: "Record 5 reflections in one week",
        icon: "📅",
        requirement: "5 reflections this week",
        rule: BadgeRule::WeeklyReflections { threshold: 5 },
    },
    BadgeSpec {
        id: "month-milestone",
        name: "Month Milestone",
        description: "Keep a 30-day reflection streak",
        icon: "🏆",
        requirement: "30-day streak",
        rule: BadgeRule::CurrentStreak { threshold: 30 },
    },
    BadgeSpec {
        id: "centurion",
        name: "Centurion",
        description: "Record 100 reflections",
        icon: "💯",
        requirement: "100 reflections",
        rule: BadgeRule::TotalReflections { threshold: 100 },
    },
    BadgeSpec {
        id: "early-bird",
        name: "Early Bird",
        description: "Record 10 reflections before 9am",
        icon: "🌅",
        requirement: "10 reflections before 09:00",
        rule: BadgeRule::BeforeHour {
            hour: 9,
            threshold: 10,
        },
    },
    BadgeSpec {
        id: "night-owl",
        name: "Night Owl",
        description: "Record 10 reflections after 8pm",
        icon: "🦉",
        requirement: "10 reflections at or after 20:00",
        rule: BadgeRule::AtOrAfterHour {
            hour: 20,
            threshold: 10,
        },
    },
    BadgeSpec {
        id: "gym-enthusiast",
        name: "Gym Enthusiast",
        description: "Record 20 gym reflections",
        icon: "💪",
        requirement: "20 gym reflections",
        rule: BadgeRule::Category {
            category: ActivityType::Gym,
            threshold: 20,
        },
    },
    BadgeSpec {
        id: "scholar",
        name: "Scholar",
        description: "Record 20 class reflections",
        icon: "📚",
        requirement: "20 class reflections",
        rule: BadgeRule::Category {
            category: ActivityType::Class,
            threshold: 20,
        },
    },
    BadgeSpec {
        id: "comeback-kid",
        name: "Comeback Kid",
        description: "Rebuild a 3-day streak after breaking a longer one",
        icon: "🔄",
        requirement: "3-day streak after a longer broken streak",
        rule: BadgeRule::Comeback { min_streak: 3 },
    },
];

/// Look up a catalog entry by id.
pub fn spec(id: &str) -> Option<&'static BadgeSpec> {
    CATALOG.iter().find(|s| s.id == id)
}
