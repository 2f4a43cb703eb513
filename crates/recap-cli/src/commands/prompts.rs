use chrono::Local;
use clap::Subcommand;
use recap_core::prompts::{due_now, upcoming};

use crate::common::open_store;

#[derive(Subcommand)]
pub enum PromptsAction {
    /// All prompts in the current set
    List {
        #[arg(long)]
        json: bool,
    },
    /// Incomplete future prompts, soonest first
    Upcoming {
        #[arg(long, default_value_t = 5)]
        limit: usize,
    },
    /// Regenerate prompts from the schedule
    Refresh,
}

pub fn run(action: PromptsAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store()?;

    match action {
        PromptsAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(store.prompts())?);
            } else if store.prompts().is_empty() {
                println!("No prompts for today.");
            } else {
                for p in store.prompts() {
                    let when = p.scheduled_time.with_timezone(&Local).format("%H:%M");
                    let marker = if p.completed {
                        "done"
                    } else if due_now(p) {
                        "due now"
                    } else {
                        "pending"
                    };
                    println!("{}  {}  [{}] {}", p.id, when, marker, p.question);
                }
            }
        }
        PromptsAction::Upcoming { limit } => {
            for p in upcoming(store.prompts(), limit) {
                let when = p.scheduled_time.with_timezone(&Local).format("%H:%M");
                println!("{}  {}  {} -- {}", p.id, when, p.activity_title, p.question);
            }
        }
        PromptsAction::Refresh => {
            store.refresh_prompts()?;
            println!("Prompts regenerated: {}", store.prompts().len());
        }
    }
    Ok(())
}
