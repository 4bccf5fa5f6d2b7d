//! Regions, bounding boxes and overlay placement.

use serde::Serialize;

use super::enums::{AltitudeMode, GridOrigin, Units};
use super::ObjectIds;
use crate::scalar::Coordinate;

pub const DEFAULT_MAX_LOD_PIXELS: f64 = -1.0;
pub const DEFAULT_TILE_SIZE: i32 = 256;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Region {
    #[serde(flatten)]
    pub ids: ObjectIds,
    pub lat_lon_alt_box: Option<LatLonAltBox>,
    pub lod: Option<Lod>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LatLonAltBox {
    #[serde(flatten)]
    pub ids: ObjectIds,
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
    pub min_altitude: f64,
    pub max_altitude: f64,
    pub altitude_mode: AltitudeMode,
}

/// Level of detail; `max_lod_pixels` of -1 means "no upper bound".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lod {
    #[serde(flatten)]
    pub ids: ObjectIds,
    pub min_lod_pixels: f64,
    pub max_lod_pixels: f64,
    pub min_fade_extent: f64,
    pub max_fade_extent: f64,
}

impl Default for Lod {
    fn default() -> Self {
        Self {
            ids: ObjectIds::default(),
            min_lod_pixels: 0.0,
            max_lod_pixels: DEFAULT_MAX_LOD_PIXELS,
            min_fade_extent: 0.0,
            max_fade_extent: 0.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LatLonBox {
    #[serde(flatten)]
    pub ids: ObjectIds,
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
    pub rotation: f64,
}

/// `<gx:LatLonQuad>`: four corners, counter-clockwise from lower left.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LatLonQuad {
    #[serde(flatten)]
    pub ids: ObjectIds,
    pub coordinates: Vec<Coordinate>,
}

/// A 2D point given entirely by attributes (`hotSpot`, `overlayXY`,
/// `screenXY`, `rotationXY`, `size`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
    pub x_units: Units,
    pub y_units: Units,
}

impl Default for Vec2 {
    fn default() -> Self {
        Self {
            x: 1.0,
            y: 1.0,
            x_units: Units::default(),
            y_units: Units::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ViewVolume {
    #[serde(flatten)]
    pub ids: ObjectIds,
    pub left_fov: f64,
    pub right_fov: f64,
    pub bottom_fov: f64,
    pub top_fov: f64,
    pub near: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImagePyramid {
    #[serde(flatten)]
    pub ids: ObjectIds,
    pub tile_size: i32,
    pub max_width: i32,
    pub max_height: i32,
    pub grid_origin: GridOrigin,
}

impl Default for ImagePyramid {
    fn default() -> Self {
        Self {
            ids: ObjectIds::default(),
            tile_size: DEFAULT_TILE_SIZE,
            max_width: 0,
            max_height: 0,
            grid_origin: GridOrigin::default(),
        }
    }
}
