//! Features: everything that can appear in the places panel.

use serde::Serialize;

use super::data::{ExtendedData, Schema};
use super::enums::{AltitudeMode, Shape};
use super::geometry::{Geometry, GeometryContainer, Point};
use super::link::{AtomLink, Author, Link};
use super::region::{ImagePyramid, LatLonBox, LatLonQuad, Region, Vec2, ViewVolume};
use super::style::StyleSelector;
use super::tour::Playlist;
use super::view::{AbstractView, TimePrimitive};
use super::ObjectIds;
use crate::scalar::Color;

pub const DEFAULT_SNIPPET_MAX_LINES: i32 = 2;

/// Nodes that hold an ordered list of features.
pub trait FeatureContainer {
    fn add_feature(&mut self, feature: Feature);
}

/// Nodes that own inline style selectors.
pub trait HasStyleSelectors {
    fn style_selectors(&self) -> &[StyleSelector];
    fn add_style_selector(&mut self, selector: StyleSelector);

    /// Inline selector with the given id.
    fn find_style(&self, id: &str) -> Option<&StyleSelector> {
        self.style_selectors()
            .iter()
            .find(|s| s.id() == Some(id))
    }
}

/// Fields every feature carries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureCommon {
    #[serde(flatten)]
    pub ids: ObjectIds,
    pub name: Option<String>,
    pub visibility: bool,
    pub open: bool,
    pub balloon_visibility: bool,
    pub author: Option<Author>,
    pub atom_link: Option<AtomLink>,
    pub address: Option<String>,
    pub address_details: Option<AddressElement>,
    pub phone_number: Option<String>,
    pub snippets: Vec<Snippet>,
    pub description: Option<String>,
    pub view: Option<AbstractView>,
    pub time: Option<TimePrimitive>,
    pub style_url: Option<String>,
    pub style_selectors: Vec<StyleSelector>,
    pub region: Option<Region>,
    pub extended_data: Option<ExtendedData>,
}

impl FeatureCommon {
    #[must_use]
    pub fn new(ids: ObjectIds) -> Self {
        Self {
            ids,
            ..Self::default()
        }
    }
}

impl Default for FeatureCommon {
    fn default() -> Self {
        Self {
            ids: ObjectIds::default(),
            name: None,
            visibility: true,
            open: false,
            balloon_visibility: true,
            author: None,
            atom_link: None,
            address: None,
            address_details: None,
            phone_number: None,
            snippets: Vec::new(),
            description: None,
            view: None,
            time: None,
            style_url: None,
            style_selectors: Vec::new(),
            region: None,
            extended_data: None,
        }
    }
}

/// `<Snippet maxLines="..">` (or `<linkSnippet>`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snippet {
    pub max_lines: i32,
    pub text: String,
}

impl Default for Snippet {
    fn default() -> Self {
        Self {
            max_lines: DEFAULT_SNIPPET_MAX_LINES,
            text: String::new(),
        }
    }
}

/// One element of an `<xal:AddressDetails>` tree, kept generically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AddressElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub text: Option<String>,
    pub children: Vec<AddressElement>,
}

/// Any feature.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum Feature {
    Document(Document),
    Folder(Folder),
    Placemark(Placemark),
    NetworkLink(NetworkLink),
    GroundOverlay(GroundOverlay),
    ScreenOverlay(ScreenOverlay),
    PhotoOverlay(PhotoOverlay),
    Tour(Tour),
}

impl Feature {
    /// Element name as written in KML.
    #[must_use]
    pub fn element_name(&self) -> &'static str {
        match self {
            Self::Document(_) => "Document",
            Self::Folder(_) => "Folder",
            Self::Placemark(_) => "Placemark",
            Self::NetworkLink(_) => "NetworkLink",
            Self::GroundOverlay(_) => "GroundOverlay",
            Self::ScreenOverlay(_) => "ScreenOverlay",
            Self::PhotoOverlay(_) => "PhotoOverlay",
            Self::Tour(_) => "gx:Tour",
        }
    }

    #[must_use]
    pub fn common(&self) -> &FeatureCommon {
        match self {
            Self::Document(f) => &f.common,
            Self::Folder(f) => &f.common,
            Self::Placemark(f) => &f.common,
            Self::NetworkLink(f) => &f.common,
            Self::GroundOverlay(f) => &f.common,
            Self::ScreenOverlay(f) => &f.common,
            Self::PhotoOverlay(f) => &f.common,
            Self::Tour(f) => &f.common,
        }
    }

    pub fn common_mut(&mut self) -> &mut FeatureCommon {
        match self {
            Self::Document(f) => &mut f.common,
            Self::Folder(f) => &mut f.common,
            Self::Placemark(f) => &mut f.common,
            Self::NetworkLink(f) => &mut f.common,
            Self::GroundOverlay(f) => &mut f.common,
            Self::ScreenOverlay(f) => &mut f.common,
            Self::PhotoOverlay(f) => &mut f.common,
            Self::Tour(f) => &mut f.common,
        }
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.common().name.as_deref()
    }

    /// Child features; empty for non-containers.
    #[must_use]
    pub fn children(&self) -> &[Feature] {
        match self {
            Self::Document(document) => &document.features,
            Self::Folder(folder) => &folder.features,
            _ => &[],
        }
    }

    #[must_use]
    pub fn is_container(&self) -> bool {
        matches!(self, Self::Document(_) | Self::Folder(_))
    }

    /// This feature and all descendants, depth-first in document order.
    #[must_use]
    pub fn descendants(&self) -> Vec<&Feature> {
        let mut out = Vec::new();
        collect_features(self, &mut out);
        out
    }

    /// Inline style selector this feature's `styleUrl` fragment points at,
    /// looked up on the feature itself.
    #[must_use]
    pub fn find_style_by_url(&self, url: &str) -> Option<&StyleSelector> {
        let id = url.rsplit_once('#').map_or(url, |(_, fragment)| fragment);
        self.find_style(id)
    }
}

pub(crate) fn collect_features<'a>(feature: &'a Feature, out: &mut Vec<&'a Feature>) {
    out.push(feature);
    for child in feature.children() {
        collect_features(child, out);
    }
}

impl HasStyleSelectors for Feature {
    fn style_selectors(&self) -> &[StyleSelector] {
        &self.common().style_selectors
    }

    fn add_style_selector(&mut self, selector: StyleSelector) {
        self.common_mut().style_selectors.push(selector);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Document {
    #[serde(flatten)]
    pub common: FeatureCommon,
    pub schemas: Vec<Schema>,
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Folder {
    #[serde(flatten)]
    pub common: FeatureCommon,
    pub features: Vec<Feature>,
}

macro_rules! feature_container {
    ($($name:ident),+) => {
        $(
            impl FeatureContainer for $name {
                fn add_feature(&mut self, feature: Feature) {
                    self.features.push(feature);
                }
            }
        )+
    };
}

feature_container!(Document, Folder);

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Placemark {
    #[serde(flatten)]
    pub common: FeatureCommon,
    pub geometry: Option<Geometry>,
}

impl GeometryContainer for Placemark {
    fn add_geometry(&mut self, geometry: Geometry) {
        self.geometry = Some(geometry);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NetworkLink {
    #[serde(flatten)]
    pub common: FeatureCommon,
    pub refresh_visibility: bool,
    pub fly_to_view: bool,
    pub link: Option<Link>,
}

/// Fields shared by the three overlay features.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OverlayCommon {
    pub color: Color,
    pub draw_order: i32,
    pub icon: Option<Link>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GroundOverlay {
    #[serde(flatten)]
    pub common: FeatureCommon,
    #[serde(flatten)]
    pub overlay: OverlayCommon,
    pub altitude: f64,
    pub altitude_mode: AltitudeMode,
    pub lat_lon_box: Option<LatLonBox>,
    pub lat_lon_quad: Option<LatLonQuad>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScreenOverlay {
    #[serde(flatten)]
    pub common: FeatureCommon,
    #[serde(flatten)]
    pub overlay: OverlayCommon,
    pub overlay_xy: Option<Vec2>,
    pub screen_xy: Option<Vec2>,
    pub rotation_xy: Option<Vec2>,
    pub size: Option<Vec2>,
    pub rotation: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PhotoOverlay {
    #[serde(flatten)]
    pub common: FeatureCommon,
    #[serde(flatten)]
    pub overlay: OverlayCommon,
    pub rotation: f64,
    pub view_volume: Option<ViewVolume>,
    pub image_pyramid: Option<ImagePyramid>,
    pub point: Option<Point>,
    pub shape: Shape,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Tour {
    #[serde(flatten)]
    pub common: FeatureCommon,
    pub playlist: Option<Playlist>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::style::Style;

    fn named_placemark(name: &str) -> Feature {
        Feature::Placemark(Placemark {
            common: FeatureCommon {
                name: Some(name.to_string()),
                ..FeatureCommon::default()
            },
            geometry: None,
        })
    }

    #[test]
    fn test_common_defaults() {
        let common = FeatureCommon::default();
        assert!(common.visibility);
        assert!(!common.open);
        assert!(common.balloon_visibility);
    }

    #[test]
    fn test_placemark_replaces_geometry() {
        let mut placemark = Placemark::default();
        placemark.add_geometry(Geometry::Point(Point::default()));
        placemark.add_geometry(Geometry::Polygon(Default::default()));
        assert!(matches!(placemark.geometry, Some(Geometry::Polygon(_))));
    }

    #[test]
    fn test_descendants_depth_first() {
        let mut inner = Folder::default();
        inner.add_feature(named_placemark("b"));
        let mut document = Document::default();
        document.add_feature(named_placemark("a"));
        document.add_feature(Feature::Folder(inner));
        document.add_feature(named_placemark("c"));

        let root = Feature::Document(document);
        let kinds: Vec<_> = root
            .descendants()
            .iter()
            .map(|f| f.name().unwrap_or(f.element_name()))
            .collect();
        assert_eq!(kinds, vec!["Document", "a", "Folder", "b", "c"]);
    }

    #[test]
    fn test_find_style_by_url_fragment() {
        let mut feature = Feature::Document(Document::default());
        feature.add_style_selector(StyleSelector::Style(Style {
            ids: ObjectIds::with_id("hot"),
            ..Style::default()
        }));

        assert!(feature.find_style_by_url("#hot").is_some());
        assert!(feature.find_style_by_url("styles.kml#hot").is_some());
        assert!(feature.find_style_by_url("#cold").is_none());
    }
}
