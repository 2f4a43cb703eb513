//! Onboarding state.
//!
//! Absent from storage until the user starts onboarding; `completed`
//! gates the rest of the app.

use serde::{Deserialize, Serialize};

use crate::schedule::ScheduleActivity;

/// Progress through the first-run flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnboardingState {
    pub completed: bool,
    pub current_step: u32,
    pub user_name: Option<String>,
    pub weekly_schedule: Vec<ScheduleActivity>,
}

impl OnboardingState {
    /// The state written when the user finishes onboarding.
    pub fn completed_with(schedule: Vec<ScheduleActivity>, user_name: impl Into<String>) -> Self {
        Self {
            completed: true,
            current_step: 3,
            user_name: Some(user_name.into()),
            weekly_schedule: schedule,
        }
    }
}
