//! Coordinate tuple lists.

use serde::Serialize;

/// A longitude/latitude pair with optional altitude.
///
/// `altitude` is `None` when the source tuple had only two components.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Coordinate {
    pub longitude: f64,
    pub latitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub altitude: Option<f64>,
}

impl Coordinate {
    #[must_use]
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
            altitude: None,
        }
    }

    #[must_use]
    pub fn with_altitude(longitude: f64, latitude: f64, altitude: f64) -> Self {
        Self {
            longitude,
            latitude,
            altitude: Some(altitude),
        }
    }
}

fn component(part: Option<&str>) -> f64 {
    part.and_then(super::parse_f64).unwrap_or(0.0)
}

/// Decode a `<coordinates>` body.
///
/// Tuples are separated by whitespace and components by commas. Unparsable
/// components become 0.
///
/// # Examples
/// ```
/// use kml_codec::scalar::{parse_coordinates, Coordinate};
///
/// let coords = parse_coordinates("1,2,3 4,5");
/// assert_eq!(coords, vec![Coordinate::with_altitude(1.0, 2.0, 3.0), Coordinate::new(4.0, 5.0)]);
/// ```
#[must_use]
pub fn parse_coordinates(input: &str) -> Vec<Coordinate> {
    input
        .split_whitespace()
        .map(|tuple| {
            let mut parts = tuple.split(',');
            let longitude = component(parts.next());
            let latitude = component(parts.next());
            let altitude = parts.next().map(|p| component(Some(p)));
            Coordinate {
                longitude,
                latitude,
                altitude,
            }
        })
        .collect()
}

/// Encode a coordinate list, one `lon,lat[,alt]` tuple per entry.
#[must_use]
pub fn format_coordinates(coordinates: &[Coordinate]) -> String {
    coordinates
        .iter()
        .map(|c| match c.altitude {
            Some(altitude) => format!("{},{},{}", c.longitude, c.latitude, altitude),
            None => format!("{},{}", c.longitude, c.latitude),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Decode a `gx:coord` body: one space-separated `lon lat alt` tuple.
#[must_use]
pub fn parse_track_coord(input: &str) -> Coordinate {
    let mut parts = input.split_whitespace();
    let longitude = component(parts.next());
    let latitude = component(parts.next());
    let altitude = parts.next().map(|p| component(Some(p)));
    Coordinate {
        longitude,
        latitude,
        altitude,
    }
}

/// Encode a `gx:coord` body.
#[must_use]
pub fn format_track_coord(coordinate: &Coordinate) -> String {
    match coordinate.altitude {
        Some(altitude) => format!(
            "{} {} {}",
            coordinate.longitude, coordinate.latitude, altitude
        ),
        None => format!("{} {}", coordinate.longitude, coordinate.latitude),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_tuples() {
        let coords = parse_coordinates("1,2,3 4,5");
        assert_eq!(coords.len(), 2);
        assert_eq!(coords[0], Coordinate::with_altitude(1.0, 2.0, 3.0));
        assert_eq!(coords[1], Coordinate::new(4.0, 5.0));
        assert_eq!(coords[1].altitude, None);
    }

    #[test]
    fn test_parse_multiline_body() {
        let body = "\n    -122.08,37.42,0\n\t-122.09,37.43,10\n  ";
        let coords = parse_coordinates(body);
        assert_eq!(coords.len(), 2);
        assert_eq!(coords[1].altitude, Some(10.0));
    }

    #[test]
    fn test_bad_components_become_zero() {
        let coords = parse_coordinates("abc,2,x");
        assert_eq!(coords, vec![Coordinate::with_altitude(0.0, 2.0, 0.0)]);
    }

    #[test]
    fn test_non_finite_components_become_zero() {
        let coords = parse_coordinates("NaN,1 inf,2,-infinity");
        assert_eq!(
            coords,
            vec![
                Coordinate::new(0.0, 1.0),
                Coordinate::with_altitude(0.0, 2.0, 0.0),
            ]
        );
        assert_eq!(parse_track_coord("1 NaN 3"), Coordinate::with_altitude(1.0, 0.0, 3.0));
    }

    #[test]
    fn test_empty_body() {
        assert!(parse_coordinates("   ").is_empty());
        assert_eq!(format_coordinates(&[]), "");
    }

    #[test]
    fn test_format_preserves_altitude_presence() {
        let coords = vec![
            Coordinate::with_altitude(1.0, 2.0, 3.0),
            Coordinate::new(4.5, -5.25),
        ];
        assert_eq!(format_coordinates(&coords), "1,2,3 4.5,-5.25");
        assert_eq!(parse_coordinates(&format_coordinates(&coords)), coords);
    }

    #[test]
    fn test_track_coord() {
        let coord = parse_track_coord("-122.207881 37.371915 156.0");
        assert_eq!(coord, Coordinate::with_altitude(-122.207881, 37.371915, 156.0));
        assert_eq!(format_track_coord(&coord), "-122.207881 37.371915 156");
    }
}
