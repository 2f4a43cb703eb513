//! Weekly recurring activity schedule.
//!
//! Activities are static definitions ("gym on Tuesday 18:00-19:00");
//! the prompt generator turns them into concrete time-stamped prompts.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Category of a scheduled activity.
///
/// Closed set: the prompt question pool and category badges are keyed
/// by this enum, so adding a category is a compile-time change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    Gym,
    Class,
    Meeting,
    Study,
    Other,
}

impl ActivityType {
    /// Stable identifier used in activity ids and persisted records.
    pub fn slug(&self) -> &'static str {
        match self {
            ActivityType::Gym => "gym",
            ActivityType::Class => "class",
            ActivityType::Meeting => "meeting",
            ActivityType::Study => "study",
            ActivityType::Other => "other",
        }
    }

    /// Human-readable display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            ActivityType::Gym => "Gym",
            ActivityType::Class => "Class",
            ActivityType::Meeting => "Meeting",
            ActivityType::Study => "Study",
            ActivityType::Other => "Other",
        }
    }

    /// Parse from a slug, for CLI input.
    pub fn from_slug(s: &str) -> Option<Self> {
        match s {
            "gym" => Some(ActivityType::Gym),
            "class" => Some(ActivityType::Class),
            "meeting" => Some(ActivityType::Meeting),
            "study" => Some(ActivityType::Study),
            "other" => Some(ActivityType::Other),
            _ => None,
        }
    }
}

/// A recurring weekly activity.
///
/// Times are local wall-clock `HH:mm` strings; `day_of_week` is
/// 0=Sunday through 6=Saturday.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleActivity {
    pub id: String,
    pub title: String,
    pub activity_type: ActivityType,
    pub day_of_week: u8,
    pub start_time: String, // HH:mm
    pub end_time: String,   // HH:mm
}

impl ScheduleActivity {
    /// Create a new activity with a generated id embedding the category slug.
    pub fn new(
        title: impl Into<String>,
        activity_type: ActivityType,
        day_of_week: u8,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            id: format!("{}-{}", activity_type.slug(), uuid::Uuid::new_v4()),
            title: title.into(),
            activity_type,
            day_of_week,
            start_time: start_time.into(),
            end_time: end_time.into(),
        }
    }

    /// Validate the activity before it enters the schedule.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] for an empty title, a day outside
    /// 0..=6, an unparseable time, or an end time not after the start.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::InvalidValue {
                field: "title".to_string(),
                message: "title must not be empty".to_string(),
            });
        }
        if self.day_of_week > 6 {
            return Err(ValidationError::InvalidDayOfWeek(self.day_of_week));
        }
        let start = parse_hhmm(&self.start_time)?;
        let end = parse_hhmm(&self.end_time)?;
        if end <= start {
            return Err(ValidationError::InvalidTimeRange {
                start: self.start_time.clone(),
                end: self.end_time.clone(),
            });
        }
        Ok(())
    }
}

/// Parse an `HH:mm` wall-clock string.
pub fn parse_hhmm(value: &str) -> Result<NaiveTime, ValidationError> {
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| ValidationError::InvalidTime {
        value: value.to_string(),
    })
}
