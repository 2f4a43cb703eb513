use clap::Subcommand;

use crate::common::open_store;

#[derive(Subcommand)]
pub enum BadgesAction {
    /// List every badge with progress
    List {
        #[arg(long)]
        json: bool,
        /// Only show unlocked badges
        #[arg(long)]
        unlocked: bool,
    },
}

pub fn run(action: BadgesAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = open_store()?;

    match action {
        BadgesAction::List { json, unlocked } => {
            let badges: Vec<_> = store
                .badges()
                .iter()
                .filter(|b| !unlocked || b.unlocked_at.is_some())
                .collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&badges)?);
            } else {
                for b in badges {
                    let status = match b.unlocked_at {
                        Some(at) => format!("unlocked {}", at.format("%Y-%m-%d")),
                        None => match b.total {
                            Some(total) => format!("{}/{}", b.progress, total),
                            None => format!("{}", b.progress),
                        },
                    };
                    println!("{} {:<20} {}  ({})", b.icon, b.name, b.requirement, status);
                }
            }
        }
    }
    Ok(())
}
