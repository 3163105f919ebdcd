mod coordinates;
mod property_id;

pub use coordinates::Coordinates;
pub use property_id::PropertyId;
