//! Geometry variants.

use serde::Serialize;

use super::data::ExtendedData;
use super::enums::AltitudeMode;
use super::link::Link;
use super::ObjectIds;
use crate::scalar::{parse_f64, Coordinate, KmlDateTime};

/// Any geometry a Placemark, MultiGeometry or update operation can hold.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    LinearRing(LinearRing),
    Polygon(Polygon),
    MultiGeometry(MultiGeometry),
    Model(Model),
    Track(Track),
    MultiTrack(MultiTrack),
}

impl Geometry {
    /// Element name as written in KML.
    #[must_use]
    pub fn element_name(&self) -> &'static str {
        match self {
            Self::Point(_) => "Point",
            Self::LineString(_) => "LineString",
            Self::LinearRing(_) => "LinearRing",
            Self::Polygon(_) => "Polygon",
            Self::MultiGeometry(_) => "MultiGeometry",
            Self::Model(_) => "Model",
            Self::Track(_) => "gx:Track",
            Self::MultiTrack(_) => "gx:MultiTrack",
        }
    }

    #[must_use]
    pub fn ids(&self) -> &ObjectIds {
        match self {
            Self::Point(g) => &g.ids,
            Self::LineString(g) => &g.ids,
            Self::LinearRing(g) => &g.ids,
            Self::Polygon(g) => &g.ids,
            Self::MultiGeometry(g) => &g.ids,
            Self::Model(g) => &g.ids,
            Self::Track(g) => &g.ids,
            Self::MultiTrack(g) => &g.ids,
        }
    }

    /// Number of leaf geometries, counting nested collections.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::MultiGeometry(multi) => multi.geometries.iter().map(Self::leaf_count).sum(),
            Self::MultiTrack(multi) => multi.tracks.len(),
            _ => 1,
        }
    }
}

/// Geometries that hold other geometries.
///
/// Single-slot holders replace their geometry; collections append.
pub trait GeometryContainer {
    fn add_geometry(&mut self, geometry: Geometry);
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Point {
    #[serde(flatten)]
    pub ids: ObjectIds,
    pub extrude: bool,
    pub altitude_mode: AltitudeMode,
    pub coordinates: Option<Coordinate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LineString {
    #[serde(flatten)]
    pub ids: ObjectIds,
    pub extrude: bool,
    pub tessellate: bool,
    pub altitude_mode: AltitudeMode,
    pub coordinates: Vec<Coordinate>,
    pub altitude_offset: f64,
    pub draw_order: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LinearRing {
    #[serde(flatten)]
    pub ids: ObjectIds,
    pub extrude: bool,
    pub tessellate: bool,
    pub altitude_mode: AltitudeMode,
    pub coordinates: Vec<Coordinate>,
    pub altitude_offset: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Polygon {
    #[serde(flatten)]
    pub ids: ObjectIds,
    pub extrude: bool,
    pub tessellate: bool,
    pub altitude_mode: AltitudeMode,
    pub outer_boundary: Option<LinearRing>,
    pub inner_boundaries: Vec<LinearRing>,
}

/// `<outerBoundaryIs>` / `<innerBoundaryIs>` while they are being parsed.
///
/// Legacy files put several rings in one `innerBoundaryIs`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Boundary {
    pub rings: Vec<LinearRing>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MultiGeometry {
    #[serde(flatten)]
    pub ids: ObjectIds,
    pub geometries: Vec<Geometry>,
}

impl GeometryContainer for MultiGeometry {
    fn add_geometry(&mut self, geometry: Geometry) {
        self.geometries.push(geometry);
    }
}

/// A 3D model referenced by `<Link>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Model {
    #[serde(flatten)]
    pub ids: ObjectIds,
    pub altitude_mode: AltitudeMode,
    pub location: Option<Location>,
    pub orientation: Option<Orientation>,
    pub scale: Option<Scale>,
    pub link: Option<Link>,
    pub resource_map: Option<ResourceMap>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Location {
    #[serde(flatten)]
    pub ids: ObjectIds,
    pub longitude: f64,
    pub latitude: f64,
    pub altitude: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Orientation {
    #[serde(flatten)]
    pub ids: ObjectIds,
    pub heading: f64,
    pub tilt: f64,
    pub roll: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scale {
    #[serde(flatten)]
    pub ids: ObjectIds,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Default for Scale {
    fn default() -> Self {
        Self {
            ids: ObjectIds::default(),
            x: 1.0,
            y: 1.0,
            z: 1.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResourceMap {
    #[serde(flatten)]
    pub ids: ObjectIds,
    pub aliases: Vec<Alias>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Alias {
    #[serde(flatten)]
    pub ids: ObjectIds,
    pub target_href: Option<String>,
    pub source_href: Option<String>,
}

/// `<gx:angles>`: heading, tilt and roll of one track sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Angles {
    pub heading: f64,
    pub tilt: f64,
    pub roll: f64,
}

impl Angles {
    /// Decode a space-separated `heading tilt roll` triple; gaps become 0.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut parts = text
            .split_whitespace()
            .map(|p| parse_f64(p).unwrap_or(0.0));
        Self {
            heading: parts.next().unwrap_or(0.0),
            tilt: parts.next().unwrap_or(0.0),
            roll: parts.next().unwrap_or(0.0),
        }
    }

    #[must_use]
    pub fn to_kml_string(&self) -> String {
        format!("{} {} {}", self.heading, self.tilt, self.roll)
    }
}

/// `<gx:Track>`: parallel lists of timestamps, positions and angles.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Track {
    #[serde(flatten)]
    pub ids: ObjectIds,
    pub altitude_mode: AltitudeMode,
    pub whens: Vec<KmlDateTime>,
    pub coords: Vec<Coordinate>,
    pub angles: Vec<Angles>,
    pub model: Option<Model>,
    pub extended_data: Option<ExtendedData>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MultiTrack {
    #[serde(flatten)]
    pub ids: ObjectIds,
    pub altitude_mode: AltitudeMode,
    pub interpolate: bool,
    pub tracks: Vec<Track>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multi_geometry_appends_in_order() {
        let mut multi = MultiGeometry::default();
        multi.add_geometry(Geometry::Point(Point::default()));
        multi.add_geometry(Geometry::LineString(LineString::default()));

        let names: Vec<_> = multi.geometries.iter().map(Geometry::element_name).collect();
        assert_eq!(names, vec!["Point", "LineString"]);
    }

    #[test]
    fn test_leaf_count_recurses() {
        let inner = MultiGeometry {
            geometries: vec![
                Geometry::Point(Point::default()),
                Geometry::Point(Point::default()),
            ],
            ..MultiGeometry::default()
        };
        let outer = Geometry::MultiGeometry(MultiGeometry {
            geometries: vec![Geometry::MultiGeometry(inner), Geometry::Polygon(Polygon::default())],
            ..MultiGeometry::default()
        });
        assert_eq!(outer.leaf_count(), 3);
    }

    #[test]
    fn test_angles_parse() {
        let angles = Angles::parse("45.5 10 -3");
        assert_eq!(angles.heading, 45.5);
        assert_eq!(angles.roll, -3.0);
        assert_eq!(Angles::parse("7"), Angles { heading: 7.0, tilt: 0.0, roll: 0.0 });
        assert_eq!(angles.to_kml_string(), "45.5 10 -3");
    }
}
