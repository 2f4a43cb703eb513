//! Shared helpers for CLI commands.

use chrono::{DateTime, Local, Utc};
use recap_core::{AppStore, Database, Notifier};

/// Notification backend that prints to the terminal. Scheduled
/// deliveries are listed as they are registered; there is no daemon, so
/// the token is informational.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn cancel_all(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        Ok(())
    }

    fn schedule_at(
        &mut self,
        at: DateTime<Utc>,
        title: &str,
        _body: &str,
        payload: &str,
    ) -> Result<String, Box<dyn std::error::Error>> {
        println!(
            "scheduled: {} at {}",
            title,
            at.with_timezone(&Local).format("%Y-%m-%d %H:%M")
        );
        Ok(payload.to_string())
    }

    fn send_now(
        &mut self,
        title: &str,
        body: &str,
        _payload: &str,
    ) -> Result<(), Box<dyn std::error::Error>> {
        println!("{title}\n  {body}");
        Ok(())
    }
}

/// Open the database and load the full application state.
pub fn open_store() -> Result<AppStore, Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let mut store = AppStore::new(db, Box::new(ConsoleNotifier));
    store.initialize()?;
    Ok(store)
}
