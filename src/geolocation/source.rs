use crate::app_config::Location;
use crate::domain::Coordinates;
use crate::geolocation::{FixedPositionSource, HttpPositionSource};
use async_trait::async_trait;
use reqwest::Client;
use std::fmt::Debug;
use std::sync::Arc;
use thiserror::Error;

/// The host's location services.
#[async_trait]
pub trait PositionSource: Debug + Send + Sync {
    async fn current_position(&self) -> Result<Coordinates, PositionError>;
}

#[derive(Error, Debug)]
pub enum PositionError {
    #[error("permission to read the position was denied")]
    PermissionDenied,
    #[error("position unavailable: {0}")]
    PositionUnavailable(String),
    #[error("timed out waiting for the position")]
    Timeout,
    #[error("position request error: {0}")]
    Source(#[from] reqwest::Error),
}

/// Builds the configured position source, or `None` when location services are not available.
pub fn position_source(location: &Location, client: &Client) -> Option<Arc<dyn PositionSource>> {
    match location {
        Location::Fixed(coordinates) => Some(Arc::new(FixedPositionSource::new(*coordinates))),
        Location::Http { url } => Some(Arc::new(HttpPositionSource::new(client.clone(), url.clone()))),
        Location::None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_source_without_location_services() {
        assert!(position_source(&Location::None, &Client::new()).is_none());
    }

    #[tokio::test]
    async fn fixed_location_yields_the_configured_position() -> Result<(), PositionError> {
        let coordinates = Coordinates::new(51.8615899, 4.3580323).unwrap();
        let source = position_source(&Location::Fixed(coordinates), &Client::new()).unwrap();

        assert_eq!(source.current_position().await?, coordinates);

        Ok(())
    }
}
