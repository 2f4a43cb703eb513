pub mod database;

pub use database::Database;

use std::path::PathBuf;

/// Returns `~/.config/recap[-dev]/` based on RECAP_ENV.
///
/// Set RECAP_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("RECAP_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("recap-dev")
    } else {
        base_dir.join("recap")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
