//! SQLite-backed aggregate storage.
//!
//! Every persisted aggregate (schedule, reflections, badges, streak,
//! preferences, prompts, onboarding) is one JSON record in a `kv`
//! table, keyed by domain name. Date fields serialize as RFC 3339 and
//! round-trip exactly. A missing or malformed record is treated as
//! absent data: the caller gets the default aggregate and a warning is
//! logged, so a damaged store never takes the app down.

use rusqlite::{params, Connection};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::badges::Badge;
use crate::error::DatabaseError;
use crate::onboarding::OnboardingState;
use crate::preferences::Preferences;
use crate::prompts::Prompt;
use crate::reflection::Reflection;
use crate::schedule::ScheduleActivity;
use crate::streak::StreakData;

use super::data_dir;

const KEY_ONBOARDING: &str = "onboarding";
const KEY_SCHEDULE: &str = "schedule";
const KEY_REFLECTIONS: &str = "reflections";
const KEY_BADGES: &str = "badges";
const KEY_STREAK: &str = "streak";
const KEY_PREFERENCES: &str = "preferences";
const KEY_PROMPTS: &str = "prompts";

/// SQLite database holding all persisted aggregates.
#[derive(Debug)]
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at `~/.config/recap/recap.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self, Box<dyn std::error::Error>> {
        let path = data_dir()?.join("recap.db");
        let conn = Connection::open(&path)
            .map_err(|source| DatabaseError::OpenFailed { path, source })?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    pub fn open_memory() -> Result<Self, Box<dyn std::error::Error>> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), DatabaseError> {
        self.conn
            .execute_batch(
                "CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
            )
            .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;
        Ok(())
    }

    /// Get a raw value from the kv store.
    pub fn kv_get(&self, key: &str) -> Result<Option<String>, rusqlite::Error> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        let result = stmt.query_row(params![key], |row| row.get::<_, String>(0));
        match result {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Set a raw value in the kv store.
    pub fn kv_set(&self, key: &str, value: &str) -> Result<(), rusqlite::Error> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }

    /// Load one aggregate, or None when absent, unreadable, or malformed.
    fn load_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.kv_get(key) {
            Ok(v) => v?,
            Err(e) => {
                warn!(key, error = %e, "storage read failed, using default");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(v) => Some(v),
            Err(e) => {
                warn!(key, error = %e, "malformed record, using default");
                None
            }
        }
    }

    fn save_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), DatabaseError> {
        let raw = serde_json::to_string(value)
            .map_err(|e| DatabaseError::QueryFailed(format!("serialize {key}: {e}")))?;
        self.kv_set(key, &raw)?;
        Ok(())
    }

    pub fn load_onboarding(&self) -> Option<OnboardingState> {
        self.load_json(KEY_ONBOARDING)
    }

    pub fn save_onboarding(&self, state: &OnboardingState) -> Result<(), DatabaseError> {
        self.save_json(KEY_ONBOARDING, state)
    }

    pub fn load_schedule(&self) -> Vec<ScheduleActivity> {
        self.load_json(KEY_SCHEDULE).unwrap_or_default()
    }

    pub fn save_schedule(&self, schedule: &[ScheduleActivity]) -> Result<(), DatabaseError> {
        self.save_json(KEY_SCHEDULE, &schedule)
    }

    pub fn load_reflections(&self) -> Vec<Reflection> {
        self.load_json(KEY_REFLECTIONS).unwrap_or_default()
    }

    pub fn save_reflections(&self, reflections: &[Reflection]) -> Result<(), DatabaseError> {
        self.save_json(KEY_REFLECTIONS, &reflections)
    }

    /// Append one reflection to the persisted history.
    pub fn append_reflection(&self, reflection: &Reflection) -> Result<(), DatabaseError> {
        let mut reflections = self.load_reflections();
        reflections.push(reflection.clone());
        self.save_reflections(&reflections)
    }

    pub fn load_badges(&self) -> Vec<Badge> {
        self.load_json(KEY_BADGES).unwrap_or_default()
    }

    pub fn save_badges(&self, badges: &[Badge]) -> Result<(), DatabaseError> {
        self.save_json(KEY_BADGES, &badges)
    }

    pub fn load_streak(&self) -> StreakData {
        self.load_json(KEY_STREAK).unwrap_or_default()
    }

    pub fn save_streak(&self, streak: &StreakData) -> Result<(), DatabaseError> {
        self.save_json(KEY_STREAK, streak)
    }

    pub fn load_preferences(&self) -> Preferences {
        self.load_json(KEY_PREFERENCES).unwrap_or_default()
    }

    pub fn save_preferences(&self, preferences: &Preferences) -> Result<(), DatabaseError> {
        self.save_json(KEY_PREFERENCES, preferences)
    }

    pub fn load_prompts(&self) -> Vec<Prompt> {
        self.load_json(KEY_PROMPTS).unwrap_or_default()
    }

    pub fn save_prompts(&self, prompts: &[Prompt]) -> Result<(), DatabaseError> {
        self.save_json(KEY_PROMPTS, &prompts)
    }
}
