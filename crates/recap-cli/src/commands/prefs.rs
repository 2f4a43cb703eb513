use clap::Subcommand;

use crate::common::open_store;

#[derive(Subcommand)]
pub enum PrefsAction {
    /// Show all preferences
    Show,
    /// Get one value by dot-separated key
    Get { key: String },
    /// Set one value by dot-separated key
    Set { key: String, value: String },
}

pub fn run(action: PrefsAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store()?;

    match action {
        PrefsAction::Show => {
            println!("{}", serde_json::to_string_pretty(store.preferences())?);
        }
        PrefsAction::Get { key } => match store.preferences().get(&key) {
            Some(value) => println!("{value}"),
            None => return Err(format!("unknown preference key: {key}").into()),
        },
        PrefsAction::Set { key, value } => {
            let mut prefs = store.preferences().clone();
            prefs.set(&key, &value)?;
            store.update_preferences(prefs)?;
            println!("{key} = {value}");
        }
    }
    Ok(())
}
