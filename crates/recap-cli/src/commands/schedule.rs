use clap::Subcommand;
use recap_core::{ActivityType, ScheduleActivity};

use crate::common::open_store;

#[derive(Subcommand)]
pub enum ScheduleAction {
    /// Add a recurring activity
    Add {
        /// Activity title
        title: String,
        /// Category: gym, class, meeting, study, other
        #[arg(long, default_value = "other")]
        category: String,
        /// Day of week, 0 (Sunday) through 6 (Saturday)
        #[arg(long)]
        day: u8,
        /// Start time, HH:mm
        #[arg(long)]
        start: String,
        /// End time, HH:mm
        #[arg(long)]
        end: String,
    },
    /// List scheduled activities
    List {
        #[arg(long)]
        json: bool,
    },
    /// Remove an activity by id
    Remove { id: String },
}

pub fn run(action: ScheduleAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store()?;

    match action {
        ScheduleAction::Add {
            title,
            category,
            day,
            start,
            end,
        } => {
            let activity_type = ActivityType::from_slug(&category)
                .ok_or_else(|| format!("unknown category: {category}"))?;
            let activity = ScheduleActivity::new(title, activity_type, day, start, end);
            let id = activity.id.clone();
            store.add_activity(activity)?;
            println!("Activity added: {id}");
        }
        ScheduleAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(store.schedule())?);
            } else if store.schedule().is_empty() {
                println!("No activities scheduled.");
            } else {
                for a in store.schedule() {
                    println!(
                        "{}  [{}] day {} {}-{}  {}",
                        a.id,
                        a.activity_type.display_name(),
                        a.day_of_week,
                        a.start_time,
                        a.end_time,
                        a.title
                    );
                }
            }
        }
        ScheduleAction::Remove { id } => {
            store.remove_activity(&id)?;
            println!("Activity removed: {id}");
        }
    }
    Ok(())
}
