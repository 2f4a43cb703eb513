//! Recorded video reflections.
//!
//! A reflection is the append-only record produced when the user answers
//! a prompt. `created_at` is authoritative for all streak and badge math.

use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A self-recorded reflection answering one prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reflection {
    pub id: String,
    pub prompt_id: String,
    pub video_uri: String,
    /// Recording length in seconds. Must be positive.
    pub duration_secs: u32,
    pub created_at: DateTime<Utc>,
}

impl Reflection {
    /// Create a reflection timestamped now.
    pub fn new(
        prompt_id: impl Into<String>,
        video_uri: impl Into<String>,
        duration_secs: u32,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            prompt_id: prompt_id.into(),
            video_uri: video_uri.into(),
            duration_secs,
            created_at: Utc::now(),
        }
    }

    /// The local calendar date this reflection was recorded on.
    pub fn local_date(&self) -> NaiveDate {
        self.created_at.with_timezone(&Local).date_naive()
    }
}
