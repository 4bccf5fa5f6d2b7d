//! Registry setup for the KML 2.2 vocabulary (with `gx` and `atom`).

use std::sync::LazyLock;

use super::core::ElementRegistry;
use super::types::Attributes;
use crate::error::Result;
use crate::model::{
    AbstractView, Alias, AnimatedUpdate, AtomLink, Author, BalloonStyle, Boundary, Camera, Change,
    Create, Data, Delete, Document, ExtendedData, Feature, FeatureCommon, FlyTo, Folder, Geometry,
    GroundOverlay, IconStyle, ImagePyramid, ItemIcon, Kml, LabelStyle, LatLonAltBox, LatLonBox,
    LatLonQuad, LineString, LineStyle, LinearRing, Link, ListStyle, Location, Lod, LookAt, Model,
    MultiGeometry, MultiTrack, NetworkLink, NetworkLinkControl, Node, Orientation, Pair,
    PhotoOverlay, Placemark, Playlist, Point, PolyStyle, Polygon, Region, ResourceMap, Scale,
    Schema, SchemaData, ScreenOverlay, SimpleArrayData, SimpleData, SimpleField, Snippet,
    SoundCue, Style, StyleMap, StyleSelector, TimePrimitive, TimeSpan, TimeStamp, Tour,
    TourControl, TourPrimitive, Track, Update, Vec2, ViewVolume, ViewerOption, ViewerOptions,
    Wait,
};
use crate::scalar::{parse_bool, ScalarKind};

/// Shared registry, built once and read by every parse.
pub static KML_REGISTRY: LazyLock<ElementRegistry> = LazyLock::new(create_kml_registry);

/// Build a node from an `ObjectIds`-only element.
macro_rules! ids_only {
    ($wrap:expr, $ty:ident) => {
        |attrs: &Attributes| -> Result<Node> {
            Ok($wrap($ty {
                ids: attrs.object_ids(),
                ..$ty::default()
            }))
        }
    };
}

/// Build a feature node; features keep their ids in `FeatureCommon`.
macro_rules! feature {
    ($variant:ident) => {
        |attrs: &Attributes| -> Result<Node> {
            Ok(Node::Feature(Feature::$variant($variant {
                common: FeatureCommon::new(attrs.object_ids()),
                ..$variant::default()
            })))
        }
    };
}

/// Create a registry with all KML element roles.
#[must_use]
pub fn create_kml_registry() -> ElementRegistry {
    let mut registry = ElementRegistry::new();

    // Root
    registry.register("kml", |attrs: &Attributes| -> Result<Node> {
        Ok(Node::Kml(Kml {
            hint: attrs.string("hint"),
            ..Kml::default()
        }))
    });

    // Features
    registry.register("Document", feature!(Document));
    registry.register("Folder", feature!(Folder));
    registry.register("Placemark", feature!(Placemark));
    registry.register("NetworkLink", feature!(NetworkLink));
    registry.register("GroundOverlay", feature!(GroundOverlay));
    registry.register("ScreenOverlay", feature!(ScreenOverlay));
    registry.register("PhotoOverlay", feature!(PhotoOverlay));
    registry.register("Tour", feature!(Tour));

    // Geometry
    registry.register("Point", ids_only!(|g| Node::Geometry(Geometry::Point(g)), Point));
    registry.register(
        "LineString",
        ids_only!(|g| Node::Geometry(Geometry::LineString(g)), LineString),
    );
    registry.register(
        "LinearRing",
        ids_only!(|g| Node::Geometry(Geometry::LinearRing(g)), LinearRing),
    );
    registry.register("Polygon", ids_only!(|g| Node::Geometry(Geometry::Polygon(g)), Polygon));
    registry.register(
        "MultiGeometry",
        ids_only!(|g| Node::Geometry(Geometry::MultiGeometry(g)), MultiGeometry),
    );
    registry.register("Model", ids_only!(|g| Node::Geometry(Geometry::Model(g)), Model));
    registry.register("Track", ids_only!(|g| Node::Geometry(Geometry::Track(g)), Track));
    registry.register(
        "MultiTrack",
        ids_only!(|g| Node::Geometry(Geometry::MultiTrack(g)), MultiTrack),
    );
    registry.register("outerBoundaryIs", boundary);
    registry.register("innerBoundaryIs", boundary);
    registry.register("Location", ids_only!(Node::Location, Location));
    registry.register("Orientation", ids_only!(Node::Orientation, Orientation));
    registry.register("Scale", ids_only!(Node::Scale, Scale));
    registry.register("ResourceMap", ids_only!(Node::ResourceMap, ResourceMap));
    registry.register("Alias", ids_only!(Node::Alias, Alias));

    // Styles
    registry.register(
        "Style",
        ids_only!(|s| Node::StyleSelector(StyleSelector::Style(s)), Style),
    );
    registry.register(
        "StyleMap",
        ids_only!(|s| Node::StyleSelector(StyleSelector::StyleMap(s)), StyleMap),
    );
    registry.register("Pair", ids_only!(Node::Pair, Pair));
    registry.register("IconStyle", ids_only!(Node::IconStyle, IconStyle));
    registry.register("LabelStyle", ids_only!(Node::LabelStyle, LabelStyle));
    registry.register("LineStyle", ids_only!(Node::LineStyle, LineStyle));
    registry.register("PolyStyle", ids_only!(Node::PolyStyle, PolyStyle));
    registry.register("BalloonStyle", ids_only!(Node::BalloonStyle, BalloonStyle));
    registry.register("ListStyle", ids_only!(Node::ListStyle, ListStyle));
    registry.register("ItemIcon", ids_only!(Node::ItemIcon, ItemIcon));

    // Links and Atom metadata
    registry.register("Link", ids_only!(Node::Link, Link));
    registry.register("Icon", ids_only!(Node::Link, Link));
    registry.register("Url", ids_only!(Node::Link, Link));
    registry.register("link", atom_link);
    registry.register("author", |_attrs: &Attributes| -> Result<Node> {
        Ok(Node::Author(Author::default()))
    });

    // Views and time
    registry.register("Camera", ids_only!(|v| Node::View(AbstractView::Camera(v)), Camera));
    registry.register("LookAt", ids_only!(|v| Node::View(AbstractView::LookAt(v)), LookAt));
    registry.register("ViewerOptions", |_attrs: &Attributes| -> Result<Node> {
        Ok(Node::ViewerOptions(ViewerOptions::default()))
    });
    registry.register("option", |attrs: &Attributes| -> Result<Node> {
        Ok(Node::ViewerOption(ViewerOption {
            name: attrs.string("name").unwrap_or_default(),
            enabled: attrs.get("enabled").is_some_and(parse_bool),
        }))
    });
    registry.register(
        "TimeStamp",
        ids_only!(|t| Node::Time(TimePrimitive::TimeStamp(t)), TimeStamp),
    );
    registry.register(
        "TimeSpan",
        ids_only!(|t| Node::Time(TimePrimitive::TimeSpan(t)), TimeSpan),
    );

    // Regions and overlay placement
    registry.register("Region", ids_only!(Node::Region, Region));
    registry.register("LatLonAltBox", ids_only!(Node::LatLonAltBox, LatLonAltBox));
    registry.register("Lod", ids_only!(Node::Lod, Lod));
    registry.register("LatLonBox", ids_only!(Node::LatLonBox, LatLonBox));
    registry.register("LatLonQuad", ids_only!(Node::LatLonQuad, LatLonQuad));
    registry.register("ViewVolume", ids_only!(Node::ViewVolume, ViewVolume));
    registry.register("ImagePyramid", ids_only!(Node::ImagePyramid, ImagePyramid));
    for tag in ["hotSpot", "overlayXY", "screenXY", "rotationXY", "size"] {
        registry.register(tag, vec2);
    }

    // Extended data and schemas
    registry.register("ExtendedData", |_attrs: &Attributes| -> Result<Node> {
        Ok(Node::ExtendedData(ExtendedData::default()))
    });
    registry.register("Data", |attrs: &Attributes| -> Result<Node> {
        Ok(Node::Data(Data {
            ids: attrs.object_ids(),
            name: attrs.string("name"),
            ..Data::default()
        }))
    });
    registry.register("SchemaData", |attrs: &Attributes| -> Result<Node> {
        Ok(Node::SchemaData(SchemaData::new(
            attrs.object_ids(),
            attrs.string("schemaUrl"),
        )))
    });
    registry.register("SimpleData", |attrs: &Attributes| -> Result<Node> {
        Ok(Node::SimpleData(SimpleData {
            name: attrs.required("SimpleData", "name")?,
            value: String::new(),
        }))
    });
    registry.register("SimpleArrayData", |attrs: &Attributes| -> Result<Node> {
        Ok(Node::SimpleArrayData(SimpleArrayData {
            name: attrs.required("gx:SimpleArrayData", "name")?,
            values: Vec::new(),
        }))
    });
    registry.register("Schema", |attrs: &Attributes| -> Result<Node> {
        Ok(Node::Schema(Schema {
            ids: attrs.object_ids(),
            name: attrs.string("name"),
            fields: Vec::new(),
        }))
    });
    registry.register("SimpleField", |attrs: &Attributes| simple_field(attrs, false));
    registry.register("SimpleArrayField", |attrs: &Attributes| simple_field(attrs, true));

    // Updates
    registry.register("NetworkLinkControl", |_attrs: &Attributes| -> Result<Node> {
        Ok(Node::NetworkLinkControl(NetworkLinkControl::default()))
    });
    registry.register("Update", |_attrs: &Attributes| -> Result<Node> {
        Ok(Node::Update(Update::default()))
    });
    registry.register("Create", |_attrs: &Attributes| -> Result<Node> {
        Ok(Node::Create(Create::default()))
    });
    registry.register("Change", |_attrs: &Attributes| -> Result<Node> {
        Ok(Node::Change(Change::default()))
    });
    registry.register("Delete", |_attrs: &Attributes| -> Result<Node> {
        Ok(Node::Delete(Delete::default()))
    });

    // Tours
    registry.register("Playlist", ids_only!(Node::Playlist, Playlist));
    registry.register(
        "FlyTo",
        ids_only!(|p| Node::TourPrimitive(TourPrimitive::FlyTo(p)), FlyTo),
    );
    registry.register(
        "Wait",
        ids_only!(|p| Node::TourPrimitive(TourPrimitive::Wait(p)), Wait),
    );
    registry.register(
        "AnimatedUpdate",
        ids_only!(|p| Node::TourPrimitive(TourPrimitive::AnimatedUpdate(p)), AnimatedUpdate),
    );
    registry.register(
        "TourControl",
        ids_only!(|p| Node::TourPrimitive(TourPrimitive::TourControl(p)), TourControl),
    );
    registry.register(
        "SoundCue",
        ids_only!(|p| Node::TourPrimitive(TourPrimitive::SoundCue(p)), SoundCue),
    );

    // Text-bodied composites
    registry.register("Snippet", snippet);
    registry.register("linkSnippet", snippet);

    registry.rich_text("description");

    registry.scalars(
        ScalarKind::Bool,
        [
            "visibility",
            "open",
            "balloonVisibility",
            "extrude",
            "tessellate",
            "fill",
            "outline",
            "refreshVisibility",
            "flyToView",
            "labelVisibility",
            "interpolate",
        ],
    );

    registry.scalars(
        ScalarKind::Double,
        [
            "longitude",
            "latitude",
            "altitude",
            "heading",
            "tilt",
            "roll",
            "range",
            "north",
            "south",
            "east",
            "west",
            "rotation",
            "minAltitude",
            "maxAltitude",
            "minLodPixels",
            "maxLodPixels",
            "minFadeExtent",
            "maxFadeExtent",
            "scale",
            "width",
            "outerWidth",
            "physicalWidth",
            "refreshInterval",
            "viewRefreshTime",
            "viewBoundScale",
            "x",
            "y",
            "z",
            "w",
            "h",
            "horizFov",
            "duration",
            "delayedStart",
            "leftFov",
            "rightFov",
            "bottomFov",
            "topFov",
            "near",
            "minRefreshPeriod",
            "maxSessionLength",
            "altitudeOffset",
        ],
    );

    registry.scalars(
        ScalarKind::Int,
        ["drawOrder", "tileSize", "maxWidth", "maxHeight", "maxSnippetLines"],
    );

    registry.scalars(
        ScalarKind::Text,
        [
            "name",
            "address",
            "phoneNumber",
            "styleUrl",
            "href",
            "viewFormat",
            "httpQuery",
            "text",
            "displayName",
            "value",
            "targetHref",
            "sourceHref",
            "cookie",
            "message",
            "linkName",
            "linkDescription",
            "state",
            "angles",
            "uri",
            "email",
        ],
    );

    registry.scalars(
        ScalarKind::Token,
        [
            "altitudeMode",
            "seaFloorAltitudeMode",
            "colorMode",
            "refreshMode",
            "viewRefreshMode",
            "displayMode",
            "listItemType",
            "key",
            "gridOrigin",
            "flyToMode",
            "playMode",
            "shape",
        ],
    );

    registry.scalars(
        ScalarKind::Color,
        ["color", "bgColor", "textColor", "outerColor"],
    );

    registry.scalars(ScalarKind::DateTime, ["when", "begin", "end", "expires"]);
    registry.scalars(ScalarKind::Coordinates, ["coordinates"]);
    registry.scalars(ScalarKind::TrackCoord, ["coord"]);

    // Deprecated free-form metadata container
    registry.skip(["Metadata"]);

    registry
}

fn boundary(_attrs: &Attributes) -> Result<Node> {
    Ok(Node::Boundary(Boundary::default()))
}

fn atom_link(attrs: &Attributes) -> Result<Node> {
    Ok(Node::AtomLink(AtomLink {
        href: attrs.required("atom:link", "href")?,
        rel: attrs.string("rel"),
        mime_type: attrs.string("type"),
        hreflang: attrs.string("hreflang"),
        title: attrs.string("title"),
        length: attrs.string("length"),
    }))
}

fn vec2(attrs: &Attributes) -> Result<Node> {
    Ok(Node::Vec2(Vec2 {
        x: attrs.f64_or("x", 1.0),
        y: attrs.f64_or("y", 1.0),
        x_units: attrs.token("xunits"),
        y_units: attrs.token("yunits"),
    }))
}

fn snippet(attrs: &Attributes) -> Result<Node> {
    Ok(Node::Snippet(Snippet {
        max_lines: attrs.i32_or("maxLines", Snippet::default().max_lines),
        text: String::new(),
    }))
}

fn simple_field(attrs: &Attributes, array: bool) -> Result<Node> {
    Ok(Node::SimpleField(SimpleField {
        name: attrs.string("name"),
        field_type: attrs.string("type"),
        display_name: None,
        array,
    }))
}
