use clap::Subcommand;

use crate::common::open_store;

#[derive(Subcommand)]
pub enum StreakAction {
    /// Current streak statistics
    Show {
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: StreakAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store()?;

    match action {
        StreakAction::Show { json } => {
            let streak = store.streak();
            if json {
                println!("{}", serde_json::to_string_pretty(streak)?);
            } else {
                println!("Current streak:    {} day(s)", streak.current_streak);
                println!("Longest streak:    {} day(s)", streak.longest_streak);
                println!("Total reflections: {}", streak.total_reflections);
            }
        }
    }
    Ok(())
}
