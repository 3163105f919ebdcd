use std::fmt;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinatesError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(CoordinatesError::LatitudeOutOfRange(latitude));
        }

        if !(-180.0..=180.0).contains(&longitude) {
            return Err(CoordinatesError::LongitudeOutOfRange(longitude));
        }

        Ok(Coordinates { latitude, longitude })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Latitude: ")?;
        write_degrees(f, self.latitude)?;
        f.write_str(", Longitude: ")?;
        write_degrees(f, self.longitude)
    }
}

/// Shortest round-trip decimal, with `-0` shown as `0` and magnitudes below 1e-6 in exponent form (`1e-7`).
fn write_degrees(f: &mut fmt::Formatter<'_>, degrees: f64) -> fmt::Result {
    if degrees == 0.0 {
        f.write_str("0")
    } else if degrees.abs() < 1e-6 {
        write!(f, "{:e}", degrees)
    } else {
        write!(f, "{}", degrees)
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum CoordinatesError {
    #[error("invalid latitude: {0}, must be between -90 and 90")]
    LatitudeOutOfRange(f64),
    #[error("invalid longitude: {0}, must be between -180 and 180")]
    LongitudeOutOfRange(f64),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case::origin(0.0, 0.0)]
    #[case::north_pole(90.0, 0.0)]
    #[case::south_pole(-90.0, 0.0)]
    #[case::date_line_east(0.0, 180.0)]
    #[case::date_line_west(0.0, -180.0)]
    #[case::san_francisco(37.7749, -122.4194)]
    fn accepts_coordinates_in_range(#[case] latitude: f64, #[case] longitude: f64) {
        let coordinates = Coordinates::new(latitude, longitude).unwrap();

        assert_eq!(coordinates.latitude(), latitude);
        assert_eq!(coordinates.longitude(), longitude);
    }

    #[rstest]
    #[case::latitude_too_high(90.1, 0.0, CoordinatesError::LatitudeOutOfRange(90.1))]
    #[case::latitude_too_low(-90.1, 0.0, CoordinatesError::LatitudeOutOfRange(-90.1))]
    #[case::longitude_too_high(0.0, 180.5, CoordinatesError::LongitudeOutOfRange(180.5))]
    #[case::longitude_too_low(0.0, -181.0, CoordinatesError::LongitudeOutOfRange(-181.0))]
    fn rejects_coordinates_out_of_range(#[case] latitude: f64, #[case] longitude: f64, #[case] expected: CoordinatesError) {
        assert_eq!(Coordinates::new(latitude, longitude), Err(expected));
    }

    #[test]
    fn rejects_nan() {
        assert!(Coordinates::new(f64::NAN, 0.0).is_err());
    }

    #[rstest]
    #[case::fractional(37.7749, -122.4194, "Latitude: 37.7749, Longitude: -122.4194")]
    #[case::whole_numbers(52.0, 4.0, "Latitude: 52, Longitude: 4")]
    #[case::negative_zero(-0.0, -0.0, "Latitude: 0, Longitude: 0")]
    #[case::tiny_magnitudes(1e-7, -1.5e-7, "Latitude: 1e-7, Longitude: -1.5e-7")]
    #[case::smallest_plain_decimal(0.000001, -0.000001, "Latitude: 0.000001, Longitude: -0.000001")]
    fn displays_latitude_and_longitude(#[case] latitude: f64, #[case] longitude: f64, #[case] expected: &str) {
        let coordinates = Coordinates::new(latitude, longitude).unwrap();

        assert_eq!(coordinates.to_string(), expected);
    }
}
