use crate::domain::Coordinates;
use crate::geolocation::{PositionError, PositionSource};
use async_trait::async_trait;

#[derive(Debug)]
pub struct FixedPositionSource {
    coordinates: Coordinates,
}

impl FixedPositionSource {
    pub fn new(coordinates: Coordinates) -> Self {
        FixedPositionSource { coordinates }
    }
}

#[async_trait]
impl PositionSource for FixedPositionSource {
    async fn current_position(&self) -> Result<Coordinates, PositionError> {
        Ok(self.coordinates)
    }
}
