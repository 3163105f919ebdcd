use crate::domain::{Coordinates, PropertyId};
use config::{Config, ConfigError};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    api: Api,
    property: Property,
    location: Location,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config", "config_local", config::Environment::default())
    }

    /// Layers `name`, then the optional `local_name`, then `environment` with `__` separating nested keys.
    fn load_from(name: &str, local_name: &str, environment: config::Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::with_name(name).required(true))
            .add_source(config::File::with_name(local_name).required(false))
            .add_source(environment.separator("__").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    pub fn api(&self) -> &Api {
        &self.api
    }

    pub fn property(&self) -> &Property {
        &self.property
    }

    pub fn location(&self) -> &Location {
        &self.location
    }
}

#[derive(Debug, Deserialize)]
pub struct Api {
    base_url: String,
}

impl Api {
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

#[derive(Debug, Deserialize)]
pub struct Property {
    id: PropertyId,
}

impl Property {
    pub fn id(&self) -> &PropertyId {
        &self.id
    }
}

/// Where the current position comes from. `None` means the host has no location services.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum Location {
    Fixed(Coordinates),
    Http { url: String },
    None,
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                api: Api { base_url: "http://localhost:8000".to_string() },
                property: Property { id: PropertyId::new("1") },
                location: Location::Fixed(Coordinates::new(37.7749, -122.4194).unwrap()),
            },
        }
    }

    pub fn base_url(mut self, url: String) -> Self {
        self.config.api.base_url = url;
        self
    }

    pub fn property_id(mut self, id: &str) -> Self {
        self.config.property.id = PropertyId::new(id);
        self
    }

    pub fn location(mut self, location: Location) -> Self {
        self.config.location = location;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
