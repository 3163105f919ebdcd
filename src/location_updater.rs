use crate::api::{HttpLocationTransport, LocationTransport};
use crate::app_config::AppConfig;
use crate::domain::{Coordinates, PropertyId};
use crate::geolocation::{PositionSource, position_source};
use crate::page::Page;
use reqwest::Client;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

pub const UNSUPPORTED_MESSAGE: &str = "Geolocation is not supported by this browser.";
pub const UPDATED_MESSAGE: &str = "Location updated successfully!";

/// Which branch a single trigger ended in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    Unsupported,
    AcquisitionFailed,
    SubmissionFailed,
    Updated,
}

/// Acquires the current position and submits it as the location of one property.
#[derive(Debug)]
pub struct LocationUpdater {
    position_source: Option<Arc<dyn PositionSource>>,
    transport: Arc<dyn LocationTransport>,
    page: Arc<dyn Page>,
    property_id: PropertyId,
}

impl LocationUpdater {
    pub fn new(
        position_source: Option<Arc<dyn PositionSource>>,
        transport: Arc<dyn LocationTransport>,
        page: Arc<dyn Page>,
        property_id: PropertyId,
    ) -> Self {
        LocationUpdater {
            position_source,
            transport,
            page,
            property_id,
        }
    }

    /// Wires the configured position source and backend for the configured property.
    pub fn from_config(config: &AppConfig, client: Client, page: Arc<dyn Page>) -> Self {
        let position_source = position_source(config.location(), &client);
        if position_source.is_none() {
            warn!("⚠️ No location source configured");
        }

        let transport = Arc::new(HttpLocationTransport::new(client, config.api().base_url()));
        LocationUpdater::new(position_source, transport, page, config.property().id().clone())
    }

    pub fn property_id(&self) -> &PropertyId {
        &self.property_id
    }

    /// Handles one activation of the "get location" trigger.
    #[instrument(skip_all, fields(property_id = %self.property_id))]
    pub async fn on_trigger(&self) -> TriggerOutcome {
        let Some(position_source) = &self.position_source else {
            self.page.alert(UNSUPPORTED_MESSAGE);
            return TriggerOutcome::Unsupported;
        };

        let coordinates = match position_source.current_position().await {
            Ok(coordinates) => coordinates,
            Err(e) => {
                error!("❌ Error getting location: {}", e);
                return TriggerOutcome::AcquisitionFailed;
            }
        };
        debug!(%coordinates, "Acquired the current position");

        self.page.render_location(&coordinates.to_string());
        self.update_property_location(coordinates, &self.property_id).await
    }

    /// Submits `coordinates` for `property_id` and tells the user when the backend answered with JSON.
    pub async fn update_property_location(&self, coordinates: Coordinates, property_id: &PropertyId) -> TriggerOutcome {
        match self.transport.update_location(property_id, coordinates).await {
            Ok(response) => {
                info!(status_code = %response.status, "✅ Submitted location for property {}", property_id);
                debug!(body = %response.body, "Location update response");
                self.page.alert(UPDATED_MESSAGE);
                TriggerOutcome::Updated
            }
            Err(e) => {
                error!("❌ Error: {}", e);
                TriggerOutcome::SubmissionFailed
            }
        }
    }
}
