//! The sum of every element kind the parser can construct.

use serde::Serialize;

use super::data::{
    Data, ExtendedData, Schema, SchemaData, SimpleArrayData, SimpleData, SimpleField,
};
use super::feature::{AddressElement, Feature, FeatureContainer, HasStyleSelectors, Snippet};
use super::geometry::{
    Alias, Boundary, Geometry, GeometryContainer, Location, Orientation, ResourceMap, Scale,
};
use super::link::{AtomLink, Author, Link};
use super::region::{
    ImagePyramid, LatLonAltBox, LatLonBox, LatLonQuad, Lod, Region, Vec2, ViewVolume,
};
use super::style::{
    BalloonStyle, HasColorAndMode, IconStyle, ItemIcon, LabelStyle, LineStyle, ListStyle, Pair,
    PolyStyle, StyleSelector,
};
use super::tour::{Playlist, TourPrimitive};
use super::update::{Change, Create, Delete, NetworkLinkControl, Update};
use super::view::{AbstractView, TimePrimitive, ViewerOption, ViewerOptions};
use super::Kml;

/// A constructed element, either complete or still on the parse stack.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Node {
    Kml(Kml),
    Feature(Feature),
    Geometry(Geometry),
    StyleSelector(StyleSelector),
    IconStyle(IconStyle),
    LabelStyle(LabelStyle),
    LineStyle(LineStyle),
    PolyStyle(PolyStyle),
    BalloonStyle(BalloonStyle),
    ListStyle(ListStyle),
    ItemIcon(ItemIcon),
    Pair(Pair),
    Link(Link),
    AtomLink(AtomLink),
    Author(Author),
    View(AbstractView),
    ViewerOptions(ViewerOptions),
    ViewerOption(ViewerOption),
    Time(TimePrimitive),
    Region(Region),
    LatLonAltBox(LatLonAltBox),
    Lod(Lod),
    LatLonBox(LatLonBox),
    LatLonQuad(LatLonQuad),
    Vec2(Vec2),
    ViewVolume(ViewVolume),
    ImagePyramid(ImagePyramid),
    Boundary(Boundary),
    Location(Location),
    Orientation(Orientation),
    Scale(Scale),
    ResourceMap(ResourceMap),
    Alias(Alias),
    ExtendedData(ExtendedData),
    Data(Data),
    SchemaData(SchemaData),
    SimpleData(SimpleData),
    SimpleArrayData(SimpleArrayData),
    Schema(Schema),
    SimpleField(SimpleField),
    NetworkLinkControl(NetworkLinkControl),
    Update(Update),
    Create(Create),
    Change(Change),
    Delete(Delete),
    Playlist(Playlist),
    TourPrimitive(TourPrimitive),
    Snippet(Snippet),
    Address(AddressElement),
}

impl Node {
    /// Feature-holding capability, if this node has it.
    pub fn as_feature_container(&mut self) -> Option<&mut dyn FeatureContainer> {
        match self {
            Self::Feature(Feature::Document(document)) => Some(document),
            Self::Feature(Feature::Folder(folder)) => Some(folder),
            Self::Create(create) => Some(create),
            Self::Delete(delete) => Some(delete),
            _ => None,
        }
    }

    /// Geometry-holding capability, if this node has it.
    pub fn as_geometry_container(&mut self) -> Option<&mut dyn GeometryContainer> {
        match self {
            Self::Feature(Feature::Placemark(placemark)) => Some(placemark),
            Self::Geometry(Geometry::MultiGeometry(multi)) => Some(multi),
            Self::Create(create) => Some(create),
            Self::Delete(delete) => Some(delete),
            _ => None,
        }
    }

    /// Style-selector-holding capability, if this node has it.
    pub fn as_style_holder(&mut self) -> Option<&mut dyn HasStyleSelectors> {
        match self {
            Self::Feature(feature) => Some(feature),
            _ => None,
        }
    }

    /// `color`/`colorMode` capability, if this node has it.
    pub fn as_color_style(&mut self) -> Option<&mut dyn HasColorAndMode> {
        match self {
            Self::IconStyle(style) => Some(style),
            Self::LabelStyle(style) => Some(style),
            Self::LineStyle(style) => Some(style),
            Self::PolyStyle(style) => Some(style),
            _ => None,
        }
    }

    /// Take text content for nodes whose body is their value; other nodes
    /// ignore it.
    pub fn absorb_text(&mut self, text: &str) {
        match self {
            Self::Snippet(snippet) => snippet.text = text.to_string(),
            Self::SimpleData(data) => data.value = text.to_string(),
            Self::Address(element) if !text.is_empty() => element.text = Some(text.to_string()),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::feature::{Document, Placemark};
    use crate::model::geometry::Point;

    #[test]
    fn test_capabilities_by_variant() {
        let mut document = Node::Feature(Feature::Document(Document::default()));
        assert!(document.as_feature_container().is_some());
        assert!(document.as_geometry_container().is_none());
        assert!(document.as_style_holder().is_some());

        let mut placemark = Node::Feature(Feature::Placemark(Placemark::default()));
        assert!(placemark.as_feature_container().is_none());
        assert!(placemark.as_geometry_container().is_some());

        let mut point = Node::Geometry(Geometry::Point(Point::default()));
        assert!(point.as_geometry_container().is_none());
        assert!(point.as_style_holder().is_none());

        let mut create = Node::Create(Create::default());
        assert!(create.as_feature_container().is_some());
        assert!(create.as_geometry_container().is_some());
    }

    #[test]
    fn test_absorb_text() {
        let mut snippet = Node::Snippet(Snippet::default());
        snippet.absorb_text("short");
        assert!(matches!(snippet, Node::Snippet(ref s) if s.text == "short"));

        let mut point = Node::Geometry(Geometry::Point(Point::default()));
        let before = point.clone();
        point.absorb_text("ignored");
        assert_eq!(point, before);
    }
}
