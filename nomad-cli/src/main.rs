use anyhow::Result;
use clap::{Parser, Subcommand};
use nomad_core::{Config, GeminiClient, PlanningMode, TripQuery, ai, prompt};
use tracing::info;

#[derive(Parser)]
#[command(name = "nomad")]
#[command(about = "Intent-based travel planning from the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan a trip from free-form constraints
    Plan {
        /// Trip needs and constraints
        description: String,

        /// Planning mode, label or slug (see `nomad modes`)
        #[arg(short, long, default_value = "family-friendly")]
        mode: PlanningMode,
    },

    /// List the available planning modes
    Modes,

    /// Print the composed prompt without calling the API
    Prompt {
        /// Trip needs and constraints
        description: String,

        /// Planning mode, label or slug (see `nomad modes`)
        #[arg(short, long, default_value = "family-friendly")]
        mode: PlanningMode,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    // Load .env
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Plan { description, mode } => {
            plan_command(mode, description).await?;
        }
        Commands::Modes => {
            modes_command();
        }
        Commands::Prompt { description, mode } => {
            prompt_command(mode, &description);
        }
    }

    Ok(())
}

async fn plan_command(mode: PlanningMode, description: String) -> Result<()> {
    let config = Config::from_env()?;
    let query = TripQuery::new(mode, description, config.gemini_api_key);

    info!(mode = %mode, "Gemini is reasoning about your trip");

    match ai::plan_trip(&query, &GeminiClient).await {
        Ok(recommendation) => {
            println!("\n## 🧳 Nomad’s Recommendation\n");
            println!("{}", recommendation.answer);
        }
        Err(e) if e.is_validation() => {
            eprintln!("{e}");
            std::process::exit(2);
        }
        Err(e) => {
            eprintln!("Something went wrong:\n{e}");
            std::process::exit(1);
        }
    }

    Ok(())
}

fn modes_command() {
    for mode in PlanningMode::ALL {
        println!("{:<16} {}", mode.slug(), mode.label());
    }
}

fn prompt_command(mode: PlanningMode, description: &str) {
    println!("--- system instruction ---");
    println!("{}", prompt::SYSTEM_INSTRUCTION);
    println!("--- user message ---");
    println!("{}", prompt::compose_user_message(mode, description));
}
