use anyhow::Context;
use clap::{Parser, Subcommand};
use powerplant_core::{
    default_topic, random_topic, AppConfig, CoreError, ErrorReporter, CONTENT_TOPICS,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "powerplant-social", about = "PowerPlant Energy Instagram content engine")]
struct Cli {
    /// Optional TOML configuration file
    #[arg(long, env = "POWERPLANT_CONFIG", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Check that the engine loads
    #[command(name = "test")]
    Test,
    /// Generate a caption for a topic and print it as JSON
    #[command(name = "generate_content")]
    GenerateContent {
        /// Topic to write about; defaults to the first brand topic
        topic: Option<String>,
        /// Pick a brand topic at random instead
        #[arg(long, conflicts_with = "topic")]
        random: bool,
    },
    /// Print the brand topic list as JSON
    #[command(name = "topics")]
    Topics,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                EnvFilter::new("powerplant_social=info,automation=info,llm_interface=info")
            }),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let Some(command) = cli.command else {
        eprintln!("Usage: powerplant-social <command> [args...]");
        std::process::exit(1);
    };

    let config = match AppConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            let error = CoreError::from(e);
            ErrorReporter::new().report_error(&error);
            return Err(error).context("Failed to load configuration");
        }
    };

    match command {
        Command::Test => {
            println!("Instagram engine loaded successfully");
        }
        Command::GenerateContent { topic, random } => {
            let topic = match topic {
                Some(topic) => topic,
                None if random => random_topic().to_string(),
                None => default_topic().to_string(),
            };
            tracing::info!("Generating content for topic: {}", topic);
            let post =
                llm_interface::generate_post(&config.anthropic_api_key, &config.llm, &topic).await;
            println!("{}", serde_json::to_string(&post)?);
        }
        Command::Topics => {
            println!("{}", serde_json::to_string(CONTENT_TOPICS)?);
        }
    }

    Ok(())
}
