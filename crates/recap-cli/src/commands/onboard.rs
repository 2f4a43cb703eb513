use clap::Subcommand;

use crate::common::open_store;

#[derive(Subcommand)]
pub enum OnboardAction {
    /// Mark onboarding complete with the current schedule
    Complete {
        /// User's display name
        #[arg(long)]
        name: String,
    },
    /// Show onboarding status
    Status,
}

pub fn run(action: OnboardAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = open_store()?;

    match action {
        OnboardAction::Complete { name } => {
            let schedule = store.schedule().to_vec();
            store.complete_onboarding(schedule, name)?;
            println!(
                "Onboarding complete. {} prompt(s) generated for today.",
                store.prompts().len()
            );
        }
        OnboardAction::Status => match store.onboarding() {
            Some(state) if state.completed => {
                println!(
                    "Onboarding complete for {}.",
                    state.user_name.as_deref().unwrap_or("unknown user")
                );
            }
            Some(state) => println!("Onboarding in progress (step {}).", state.current_step),
            None => println!("Onboarding not started."),
        },
    }
    Ok(())
}
