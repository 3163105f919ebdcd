mod fixed;
mod http;
mod source;

pub use fixed::FixedPositionSource;
pub use http::HttpPositionSource;
pub use source::{PositionError, PositionSource, position_source};
