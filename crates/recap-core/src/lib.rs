//! # Recap Core Library
//!
//! Core business logic for Recap, a habit-reflection tracker: users
//! schedule recurring activities, get prompted after each one, answer
//! with a short self-recorded video, and build streaks and badges from
//! the resulting history.
//!
//! ## Architecture
//!
//! - **Prompt Generator**: pure derivation of today's pending prompts
//!   from the weekly schedule
//! - **Streak Calculator**: consecutive-day streak statistics, always
//!   recomputed from the full reflection history
//! - **Badge Evaluator**: fixed badge catalog with a closed rule enum
//! - **AppStore**: the state coordinator, the only component with side
//!   effects (persistence and notification scheduling)
//! - **Storage**: SQLite-backed JSON aggregate store
//!
//! ## Key Components
//!
//! - [`AppStore`]: mutation entry point for every operation
//! - [`Database`]: aggregate persistence
//! - [`Notifier`]: notification backend trait

pub mod badges;
pub mod error;
pub mod notify;
pub mod onboarding;
pub mod preferences;
pub mod prompts;
pub mod reflection;
pub mod schedule;
pub mod storage;
pub mod store;
pub mod streak;

pub use badges::{evaluate_badges, newly_unlocked, Badge, BadgeRule, BadgeSpec, CATALOG};
pub use error::{CoreError, DatabaseError, Result, ValidationError};
pub use notify::{NullNotifier, Notifier};
pub use onboarding::OnboardingState;
pub use preferences::{NotificationPrefs, Preferences};
pub use prompts::{due_now, generate_prompts, upcoming, Prompt};
pub use reflection::Reflection;
pub use schedule::{ActivityType, ScheduleActivity};
pub use storage::Database;
pub use store::AppStore;
pub use streak::{compute_streak, StreakData};
