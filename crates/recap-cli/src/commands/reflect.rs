use clap::Subcommand;
use recap_core::Reflection;

use crate::common::open_store;

#[derive(Subcommand)]
pub enum ReflectAction {
    /// Record a reflection against a prompt
    Record {
        /// Id of the prompt being answered
        prompt_id: String,
        /// URI of the recorded video
        #[arg(long)]
        video: String,
        /// Recording length in seconds
        #[arg(long)]
        duration: u32,
    },
    /// List recorded reflections
    List {
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: ReflectAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store()?;

    match action {
        ReflectAction::Record {
            prompt_id,
            video,
            duration,
        } => {
            if duration == 0 {
                return Err("duration must be positive".into());
            }
            let reflection = Reflection::new(prompt_id, video, duration);
            let unlocked = store.record_reflection(reflection)?;
            println!(
                "Reflection recorded. Current streak: {} day(s).",
                store.streak().current_streak
            );
            for badge in unlocked {
                println!("Badge unlocked: {} {}", badge.icon, badge.name);
            }
        }
        ReflectAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(store.reflections())?);
            } else {
                for r in store.reflections() {
                    println!(
                        "{}  {}  {}s  prompt {}",
                        r.id,
                        r.created_at.format("%Y-%m-%d %H:%M"),
                        r.duration_secs,
                        r.prompt_id
                    );
                }
            }
        }
    }
    Ok(())
}
