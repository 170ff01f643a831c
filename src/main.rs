use anyhow::Context;
use tracing::info;
use tracing_error::ErrorLayer;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};

use starblast::app::App;
use starblast::constants::LOOP_TIME;

/// The main entry point of the application.
///
/// This function sets up tracing, initializes SDL and the game state, and
/// then enters the main game loop.
pub fn main() -> anyhow::Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .finish()
        .with(ErrorLayer::default());

    tracing::subscriber::set_global_default(subscriber).context("Could not set global default subscriber")?;

    let mut app = App::new().context("Could not create app")?;

    info!(loop_time = ?LOOP_TIME, "Starting game loop");

    loop {
        if !app.run() {
            break;
        }
    }

    Ok(())
}
