use crate::app_config::AppConfig;
use crate::location_updater::LocationUpdater;
use crate::page::TerminalPage;
use std::sync::Arc;
use tokio::io::{BufReader, stdin};
use tracing::info;

mod api;
mod app_config;
mod coordinates_deserializer;
mod domain;
mod geolocation;
mod location_updater;
mod page;
mod trigger;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).with_writer(std::io::stderr).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!("✅  Loaded configuration");

    let client = api::new_client()?;
    let updater = Arc::new(LocationUpdater::from_config(&config, client, Arc::new(TerminalPage::new())));

    info!(
        property_id = %updater.property_id(),
        "🔥 {} is up and running, press enter to update the property location or type 'q' to quit",
        env!("CARGO_PKG_NAME")
    );

    let outcomes = trigger::listen(BufReader::new(stdin()), updater).await?;
    info!("Handled {} location requests", outcomes.len());

    Ok(())
}
