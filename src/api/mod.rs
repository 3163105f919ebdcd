mod client;
mod request;
mod transport;

pub use client::new_client;
pub use request::UpdateLocationRequest;
pub use transport::{HttpLocationTransport, LocationTransport};
#[cfg(test)]
pub use transport::{SubmissionError, UpdateLocationResponse};
