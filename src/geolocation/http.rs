use crate::domain::Coordinates;
use crate::geolocation::{PositionError, PositionSource};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, instrument};

/// Looks up the position through an IP geolocation service answering with `latitude`/`longitude` or `lat`/`lon`.
#[derive(Debug)]
pub struct HttpPositionSource {
    client: Client,
    url: String,
}

impl HttpPositionSource {
    pub fn new(client: Client, url: String) -> Self {
        HttpPositionSource { client, url }
    }
}

#[async_trait]
impl PositionSource for HttpPositionSource {
    #[instrument(skip_all)]
    async fn current_position(&self) -> Result<Coordinates, PositionError> {
        debug!(url = %self.url, "Requesting the current position...");
        let response = self.client.get(&self.url).send().await.map_err(|e| {
            if e.is_timeout() {
                PositionError::Timeout
            } else {
                PositionError::Source(e)
            }
        })?;

        let status = response.status();
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => return Err(PositionError::PermissionDenied),
            StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => return Err(PositionError::Timeout),
            _ if !status.is_success() => {
                return Err(PositionError::PositionUnavailable(format!("geolocation service responded with {}", status)));
            }
            _ => {}
        }

        let body = response.text().await?;
        let coordinates = serde_json::from_str::<Coordinates>(&body)
            .map_err(|e| PositionError::PositionUnavailable(format!("unexpected geolocation response: {}", e)))?;
        debug!(%coordinates, "Requesting the current position... OK");

        Ok(coordinates)
    }
}
