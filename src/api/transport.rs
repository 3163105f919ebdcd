use crate::api::UpdateLocationRequest;
use crate::domain::{Coordinates, PropertyId};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::fmt::Debug;
use thiserror::Error;
use tracing::{debug, instrument, warn};

/// Sends location updates for a property to the backend.
#[async_trait]
pub trait LocationTransport: Debug + Send + Sync {
    async fn update_location(&self, property_id: &PropertyId, coordinates: Coordinates) -> Result<UpdateLocationResponse, SubmissionError>;
}

/// A response whose body parsed as JSON. The status is not part of the success decision.
#[derive(Debug, PartialEq)]
pub struct UpdateLocationResponse {
    pub status: StatusCode,
    pub body: Value,
}

#[derive(Error, Debug)]
pub enum SubmissionError {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("response is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Debug)]
pub struct HttpLocationTransport {
    client: Client,
    base_url: String,
}

impl HttpLocationTransport {
    pub fn new(client: Client, base_url: &str) -> Self {
        HttpLocationTransport {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn update_location_url(&self, property_id: &PropertyId) -> String {
        format!("{}/api/properties/{}/update-location/", self.base_url, property_id)
    }
}

#[async_trait]
impl LocationTransport for HttpLocationTransport {
    #[instrument(skip_all, fields(property_id = %property_id))]
    async fn update_location(&self, property_id: &PropertyId, coordinates: Coordinates) -> Result<UpdateLocationResponse, SubmissionError> {
        let request = UpdateLocationRequest::from(coordinates);
        let response = self.client.put(self.update_location_url(property_id)).json(&request).send().await?;

        let status = response.status();
        let text = response.text().await?;
        let body = serde_json::from_str::<Value>(&text)?;

        if status.is_success() {
            debug!(status_code = %status, "Backend accepted the location update: {}", body);
        } else {
            let message = body.get("error").and_then(Value::as_str).unwrap_or("no error message");
            warn!(status_code = %status, "⚠️ Backend rejected the location update: {}", message);
        }

        Ok(UpdateLocationResponse { status, body })
    }
}
