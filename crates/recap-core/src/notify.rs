//! Notification scheduling interface.
//!
//! The engine never delivers notifications itself; it hands them to a
//! platform implementation of [`Notifier`]. Delivery failures are
//! reported as errors and tolerated by the caller -- a missed
//! notification must never corrupt state.

use chrono::{DateTime, Utc};

use crate::badges::Badge;
use crate::error::CoreError;
use crate::prompts::Prompt;

/// Every notification backend implements this trait.
pub trait Notifier {
    /// Cancel every notification previously scheduled.
    fn cancel_all(&mut self) -> Result<(), Box<dyn std::error::Error>>;

    /// Schedule a notification for a future instant. Returns a backend
    /// token identifying the scheduled delivery.
    fn schedule_at(
        &mut self,
        at: DateTime<Utc>,
        title: &str,
        body: &str,
        payload: &str,
    ) -> Result<String, Box<dyn std::error::Error>>;

    /// Deliver a notification immediately.
    fn send_now(
        &mut self,
        title: &str,
        body: &str,
        payload: &str,
    ) -> Result<(), Box<dyn std::error::Error>>;
}

/// Schedule one notification per incomplete prompt.
pub fn schedule_prompt(notifier: &mut dyn Notifier, prompt: &Prompt) -> Result<String, CoreError> {
    notifier
        .schedule_at(
            prompt.scheduled_time,
            "Time to reflect!",
            &prompt.question,
            &prompt.id,
        )
        .map_err(|e| CoreError::Notification(e.to_string()))
}

/// Announce a freshly unlocked badge.
pub fn announce_badge(notifier: &mut dyn Notifier, badge: &Badge) -> Result<(), CoreError> {
    notifier
        .send_now(
            &format!("{} Badge unlocked: {}", badge.icon, badge.name),
            &badge.description,
            &badge.id,
        )
        .map_err(|e| CoreError::Notification(e.to_string()))
}

/// A notifier that drops everything. Used where no delivery backend
/// exists (tests, headless runs).
#[derive(Debug, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn cancel_all(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        Ok(())
    }

    fn schedule_at(
        &mut self,
        _at: DateTime<Utc>,
        _title: &str,
        _body: &str,
        _payload: &str,
    ) -> Result<String, Box<dyn std::error::Error>> {
        Ok(String::new())
    }

    fn send_now(
        &mut self,
        _title: &str,
        _body: &str,
        _payload: &str,
    ) -> Result<(), Box<dyn std::error::Error>> {
        Ok(())
    }
}
