/// MoodTunes - mood-based music library
use clap::Parser;
use moodtunes::{commands, AppConfig, AppState, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (stderr, so command output stays clean)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "moodtunes=info,mood_storage=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?;
    config.validate()?;

    let state = AppState::open(config).await?;

    let mut stdout = std::io::stdout().lock();
    commands::run(&state, cli.command, &mut stdout).await?;

    Ok(())
}
