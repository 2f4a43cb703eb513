//! User preferences.
//!
//! Stored as one JSON record in the database alongside the other
//! aggregates. Individual values can be read and written by
//! dot-separated key for the CLI's `prefs get`/`prefs set`.

use serde::{Deserialize, Serialize};

use crate::schedule::ActivityType;

/// Notification timing preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationPrefs {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Minutes before an activity starts to prompt (unused by default).
    #[serde(default)]
    pub prompt_before_minutes: i64,
    /// Minutes after an activity ends to prompt.
    #[serde(default = "default_after_minutes")]
    pub prompt_after_minutes: i64,
    /// Optional daily reminder time, HH:mm.
    #[serde(default)]
    pub reminder_time: Option<String>,
}

/// User preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub notifications: NotificationPrefs,
    #[serde(default)]
    pub favorite_prompt_types: Vec<ActivityType>,
    /// Maximum recording length in seconds.
    #[serde(default = "default_video_duration")]
    pub video_duration_secs: u32,
    #[serde(default)]
    pub dark_mode: bool,
}

fn default_true() -> bool {
    true
}
fn default_after_minutes() -> i64 {
    15
}
fn default_video_duration() -> u32 {
    60
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            enabled: true,
            prompt_before_minutes: 0,
            prompt_after_minutes: 15,
            reminder_time: None,
        }
    }
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            notifications: NotificationPrefs::default(),
            favorite_prompt_types: Vec::new(),
            video_duration_secs: 60,
            dark_mode: false,
        }
    }
}

impl Preferences {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut parts = key.split('.').peekable();
        if parts.peek().is_none() {
            return Err("preference key is empty".into());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            if is_leaf {
                let obj = current
                    .as_object_mut()
                    .ok_or_else(|| format!("unknown preference key: {key}"))?;
                let existing = obj
                    .get(part)
                    .ok_or_else(|| format!("unknown preference key: {key}"))?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(value.parse::<bool>()?),
                    serde_json::Value::Number(_) => {
                        if let Ok(n) = value.parse::<i64>() {
                            serde_json::Value::Number(n.into())
                        } else {
                            return Err(format!("cannot parse '{value}' as number").into());
                        }
                    }
                    serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                        serde_json::from_str(value)?
                    }
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current
                .get_mut(part)
                .ok_or_else(|| format!("unknown preference key: {key}"))?;
        }

        Err(format!("unknown preference key: {key}").into())
    }

    /// Get a preference value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a preference value by key. Returns error if key is unknown.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value cannot be
    /// parsed as the field's type.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), Box<dyn std::error::Error>> {
        let mut json = serde_json::to_value(&*self)?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        *self = serde_json::from_value(json)?;
        Ok(())
    }

    /// Whether replacing these preferences with `next` changes when
    /// prompts fire, requiring a prompt regeneration.
    pub fn timing_changed(&self, next: &Preferences) -> bool {
        self.notifications != next.notifications
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_preferences_roundtrip() {
        let prefs = Preferences::default();
        let json = serde_json::to_string(&prefs).unwrap();
        let parsed: Preferences = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, prefs);
        assert_eq!(parsed.notifications.prompt_after_minutes, 15);
        assert_eq!(parsed.video_duration_secs, 60);
    }

    #[test]
    fn get_supports_dot_path_keys() {
        let prefs = Preferences::default();
        assert_eq!(prefs.get("notifications.enabled").as_deref(), Some("true"));
        assert_eq!(
            prefs.get("notifications.prompt_after_minutes").as_deref(),
            Some("15")
        );
        assert!(prefs.get("notifications.missing").is_none());
    }

    #[test]
    fn set_updates_nested_number() {
        let mut prefs = Preferences::default();
        prefs.set("notifications.prompt_after_minutes", "30").unwrap();
        assert_eq!(prefs.notifications.prompt_after_minutes, 30);
    }

    #[test]
    fn set_rejects_unknown_key() {
        let mut prefs = Preferences::default();
        assert!(prefs.set("nonexistent.key", "1").is_err());
    }

    #[test]
    fn set_rejects_invalid_type() {
        let mut prefs = Preferences::default();
        assert!(prefs.set("dark_mode", "not_a_bool").is_err());
    }

    #[test]
    fn timing_change_detection() {
        let prefs = Preferences::default();
        let mut next = prefs.clone();
        next.dark_mode = true;
        assert!(!prefs.timing_changed(&next));

        next.notifications.prompt_after_minutes = 5;
        assert!(prefs.timing_changed(&next));
    }
}
