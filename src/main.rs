use anyhow::Result;
use drink_tally::config::{LogFormat, Settings};
use drink_tally::Application;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
#[instrument]
async fn main() -> Result<()> {
    let settings = Settings::new()?;

    // Initialize tracing; RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);
    match settings.logging.format {
        LogFormat::Compact => subscriber.compact().init(),
        LogFormat::Pretty => subscriber.pretty().init(),
        LogFormat::Full => subscriber.init(),
    }

    info!("Starting drink tally demo");

    let app = Application::new().await?;
    app.run().await?;

    Ok(())
}
