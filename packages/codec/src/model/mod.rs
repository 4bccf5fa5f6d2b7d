//! Typed KML document tree.
//!
//! Every element is exclusively owned by its parent. Cross references
//! (`styleUrl`, `href`, `targetId`) are plain strings.

pub mod data;
pub mod enums;
pub mod feature;
pub mod geometry;
pub mod link;
pub mod node;
pub mod region;
pub mod style;
pub mod tour;
pub mod update;
pub mod view;

use serde::Serialize;

pub use data::{
    Data, ExtendedData, FieldValue, Schema, SchemaData, SimpleArrayData, SimpleData, SimpleField,
};
pub use enums::{
    AltitudeMode, ColorMode, DisplayMode, FlyToMode, GridOrigin, ItemIconState, ListItemType,
    PlayMode, RefreshMode, Shape, StyleState, Units, ViewRefreshMode,
};
pub use feature::{
    AddressElement, Document, Feature, FeatureCommon, FeatureContainer, Folder, GroundOverlay,
    HasStyleSelectors, NetworkLink, OverlayCommon, PhotoOverlay, Placemark, ScreenOverlay,
    Snippet, Tour,
};
pub use geometry::{
    Alias, Angles, Boundary, Geometry, GeometryContainer, LineString, LinearRing, Location, Model,
    MultiGeometry, MultiTrack, Orientation, Point, Polygon, ResourceMap, Scale, Track,
};
pub use link::{AtomLink, Author, Link};
pub use node::Node;
pub use region::{ImagePyramid, LatLonAltBox, LatLonBox, LatLonQuad, Lod, Region, Vec2, ViewVolume};
pub use style::{
    BalloonStyle, HasColorAndMode, IconStyle, ItemIcon, LabelStyle, LineStyle, ListStyle, Pair,
    PolyStyle, Style, StyleMap, StyleSelector,
};
pub use tour::{AnimatedUpdate, FlyTo, Playlist, SoundCue, TourControl, TourPrimitive, Wait};
pub use update::{
    Change, Create, Delete, NetworkLinkControl, Patch, Update, UpdateOperation, UpdateTarget,
};
pub use view::{AbstractView, Camera, LookAt, TimePrimitive, TimeSpan, TimeStamp, ViewerOption, ViewerOptions};

/// `id` and `targetId` attributes carried by most elements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct ObjectIds {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_id: Option<String>,
}

impl ObjectIds {
    #[must_use]
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            target_id: None,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.target_id.is_none()
    }
}

/// The `<kml>` root.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Kml {
    pub hint: Option<String>,
    pub network_link_control: Option<NetworkLinkControl>,
    pub feature: Option<Feature>,
}

impl Kml {
    #[must_use]
    pub fn new(feature: Feature) -> Self {
        Self {
            feature: Some(feature),
            ..Self::default()
        }
    }

    /// Every feature in the document, depth-first in document order.
    #[must_use]
    pub fn features(&self) -> Vec<&Feature> {
        let mut out = Vec::new();
        if let Some(feature) = &self.feature {
            feature::collect_features(feature, &mut out);
        }
        out
    }

    /// First feature matching a predicate, in document order.
    pub fn find_first_feature<P>(&self, predicate: P) -> Option<&Feature>
    where
        P: Fn(&Feature) -> bool,
    {
        self.features().into_iter().find(|f| predicate(f))
    }

    /// Shared style with the given id, looked up on every feature.
    ///
    /// Accepts either a bare id or a `styleUrl` such as `#id`.
    #[must_use]
    pub fn find_style(&self, id_or_url: &str) -> Option<&StyleSelector> {
        self.features()
            .into_iter()
            .find_map(|f| f.find_style_by_url(id_or_url))
    }

    /// Every placemark, depth-first in document order.
    #[must_use]
    pub fn placemarks(&self) -> Vec<&Placemark> {
        self.features()
            .into_iter()
            .filter_map(|f| match f {
                Feature::Placemark(placemark) => Some(placemark),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Kml {
        let mut folder = Folder::default();
        folder.add_feature(Feature::Placemark(Placemark {
            common: FeatureCommon {
                name: Some("inner".to_string()),
                ..FeatureCommon::default()
            },
            geometry: None,
        }));

        let mut document = Document {
            common: FeatureCommon {
                style_selectors: vec![StyleSelector::Style(Style {
                    ids: ObjectIds::with_id("shared"),
                    ..Style::default()
                })],
                ..FeatureCommon::default()
            },
            ..Document::default()
        };
        document.add_feature(Feature::Folder(folder));
        Kml::new(Feature::Document(document))
    }

    #[test]
    fn test_features_traversal() {
        let kml = sample();
        let names: Vec<_> = kml.features().iter().map(|f| f.element_name()).collect();
        assert_eq!(names, vec!["Document", "Folder", "Placemark"]);
        assert_eq!(kml.placemarks().len(), 1);
    }

    #[test]
    fn test_find_first_feature() {
        let kml = sample();
        let found = kml.find_first_feature(|f| f.name() == Some("inner"));
        assert!(matches!(found, Some(Feature::Placemark(_))));
        assert!(kml.find_first_feature(|f| f.name() == Some("nope")).is_none());
    }

    #[test]
    fn test_find_style() {
        let kml = sample();
        assert!(kml.find_style("#shared").is_some());
        assert!(kml.find_style("shared").is_some());
        assert!(kml.find_style("#missing").is_none());
    }

    #[test]
    fn test_empty_document() {
        let kml = Kml::default();
        assert!(kml.features().is_empty());
    }
}
