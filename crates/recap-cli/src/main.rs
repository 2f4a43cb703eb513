use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod common;

#[derive(Parser)]
#[command(name = "recap", version, about = "Recap CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Complete onboarding
    Onboard {
        #[command(subcommand)]
        action: commands::onboard::OnboardAction,
    },
    /// Weekly schedule management
    Schedule {
        #[command(subcommand)]
        action: commands::schedule::ScheduleAction,
    },
    /// Pending reflection prompts
    Prompts {
        #[command(subcommand)]
        action: commands::prompts::PromptsAction,
    },
    /// Record and list reflections
    Reflect {
        #[command(subcommand)]
        action: commands::reflect::ReflectAction,
    },
    /// Streak statistics
    Streak {
        #[command(subcommand)]
        action: commands::streak::StreakAction,
    },
    /// Achievement badges
    Badges {
        #[command(subcommand)]
        action: commands::badges::BadgesAction,
    },
    /// Preference management
    Prefs {
        #[command(subcommand)]
        action: commands::prefs::PrefsAction,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Onboard { action } => commands::onboard::run(action),
        Commands::Schedule { action } => commands::schedule::run(action),
        Commands::Prompts { action } => commands::prompts::run(action),
        Commands::Reflect { action } => commands::reflect::run(action),
        Commands::Streak { action } => commands::streak::run(action),
        Commands::Badges { action } => commands::badges::run(action),
        Commands::Prefs { action } => commands::prefs::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
