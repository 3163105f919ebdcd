use crate::domain::Coordinates;
use serde::de::Error;
use serde::{Deserialize, Deserializer};

impl<'de> Deserialize<'de> for Coordinates {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Debug, Deserialize)]
        pub struct Inner {
            #[serde(alias = "lat")]
            latitude: f64,
            #[serde(alias = "lon")]
            longitude: f64,
        }

        let inner = Inner::deserialize(deserializer)?;
        Coordinates::new(inner.latitude, inner.longitude).map_err(|e| Error::custom(format!("invalid location {}", e)))
    }
}
