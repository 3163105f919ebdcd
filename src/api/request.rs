use crate::domain::Coordinates;
use serde::Serialize;

#[derive(Debug, Serialize, PartialEq)]
pub struct UpdateLocationRequest {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<Coordinates> for UpdateLocationRequest {
    fn from(coordinates: Coordinates) -> Self {
        UpdateLocationRequest {
            latitude: coordinates.latitude(),
            longitude: coordinates.longitude(),
        }
    }
}
