//! Links, views, regions, data, updates and tours.

use std::io::Write;

use super::xml::{object_attributes, KmlWriter};
use crate::error::Result;
use crate::model::link::{DEFAULT_REFRESH_INTERVAL, DEFAULT_VIEW_BOUND_SCALE, DEFAULT_VIEW_REFRESH_TIME};
use crate::model::region::{DEFAULT_MAX_LOD_PIXELS, DEFAULT_TILE_SIZE};
use crate::model::update::DEFAULT_MAX_SESSION_LENGTH;
use crate::model::{
    AbstractView, Change, Data, ExtendedData, FieldValue, ImagePyramid, LatLonAltBox, LatLonBox,
    LatLonQuad, Link, Lod, NetworkLinkControl, Node, Patch, Playlist, Region, Schema, SchemaData,
    SimpleField, TimePrimitive, TourPrimitive, Update, UpdateOperation,
    UpdateTarget, Vec2, ViewVolume, ViewerOption, ViewerOptions,
};
use crate::scalar::{format_bool, BoolStyle, KmlToken};

impl<W: Write> KmlWriter<W> {
    /// `Link`, `Icon` or `Url`; they share one shape.
    pub(crate) fn link(&mut self, name: &str, link: &Link) -> Result<()> {
        self.element(name, &object_attributes(&link.ids), |w| {
            w.opt_text("href", link.href.as_deref())?;
            w.token("refreshMode", &link.refresh_mode)?;
            w.number("refreshInterval", link.refresh_interval, DEFAULT_REFRESH_INTERVAL)?;
            w.token("viewRefreshMode", &link.view_refresh_mode)?;
            w.number("viewRefreshTime", link.view_refresh_time, DEFAULT_VIEW_REFRESH_TIME)?;
            w.number("viewBoundScale", link.view_bound_scale, DEFAULT_VIEW_BOUND_SCALE)?;
            w.opt_text("viewFormat", link.view_format.as_deref())?;
            w.opt_text("httpQuery", link.http_query.as_deref())?;
            w.number("gx:x", link.x, 0.0)?;
            w.number("gx:y", link.y, 0.0)?;
            w.number("gx:w", link.w, 0.0)?;
            w.number("gx:h", link.h, 0.0)
        })
    }

    pub(crate) fn view(&mut self, view: &AbstractView) -> Result<()> {
        match view {
            AbstractView::Camera(camera) => {
                self.element("Camera", &object_attributes(&camera.ids), |w| {
                    if let Some(time) = &camera.time {
                        w.time_primitive(time, true)?;
                    }
                    if let Some(options) = &camera.viewer_options {
                        w.viewer_options(options)?;
                    }
                    w.number("longitude", camera.longitude, 0.0)?;
                    w.number("latitude", camera.latitude, 0.0)?;
                    w.number("altitude", camera.altitude, 0.0)?;
                    w.number("heading", camera.heading, 0.0)?;
                    w.number("tilt", camera.tilt, 0.0)?;
                    w.number("roll", camera.roll, 0.0)?;
                    w.altitude_mode(camera.altitude_mode)?;
                    w.number("gx:horizFov", camera.horiz_fov, 0.0)
                })
            }
            AbstractView::LookAt(look_at) => {
                self.element("LookAt", &object_attributes(&look_at.ids), |w| {
                    if let Some(time) = &look_at.time {
                        w.time_primitive(time, true)?;
                    }
                    if let Some(options) = &look_at.viewer_options {
                        w.viewer_options(options)?;
                    }
                    w.number("longitude", look_at.longitude, 0.0)?;
                    w.number("latitude", look_at.latitude, 0.0)?;
                    w.number("altitude", look_at.altitude, 0.0)?;
                    w.number("heading", look_at.heading, 0.0)?;
                    w.number("tilt", look_at.tilt, 0.0)?;
                    w.number("range", look_at.range, 0.0)?;
                    w.altitude_mode(look_at.altitude_mode)?;
                    w.number("gx:horizFov", look_at.horiz_fov, 0.0)
                })
            }
        }
    }

    fn viewer_options(&mut self, options: &ViewerOptions) -> Result<()> {
        self.element("gx:ViewerOptions", &[], |w| {
            for option in &options.options {
                w.viewer_option(option)?;
            }
            Ok(())
        })
    }

    fn viewer_option(&mut self, option: &ViewerOption) -> Result<()> {
        self.empty(
            "gx:option",
            &[
                ("name", option.name.as_str()),
                ("enabled", format_bool(option.enabled, BoolStyle::Textual)),
            ],
        )
    }

    /// Inside a view the time primitive belongs to the extension vocabulary.
    pub(crate) fn time_primitive(&mut self, time: &TimePrimitive, in_view: bool) -> Result<()> {
        match time {
            TimePrimitive::TimeStamp(stamp) => {
                let name = if in_view { "gx:TimeStamp" } else { "TimeStamp" };
                self.element(name, &object_attributes(&stamp.ids), |w| {
                    w.datetime("when", stamp.when.as_ref())
                })
            }
            TimePrimitive::TimeSpan(span) => {
                let name = if in_view { "gx:TimeSpan" } else { "TimeSpan" };
                self.element(name, &object_attributes(&span.ids), |w| {
                    w.datetime("begin", span.begin.as_ref())?;
                    w.datetime("end", span.end.as_ref())
                })
            }
        }
    }

    pub(crate) fn region(&mut self, region: &Region) -> Result<()> {
        self.element("Region", &object_attributes(&region.ids), |w| {
            if let Some(bounds) = &region.lat_lon_alt_box {
                w.lat_lon_alt_box(bounds)?;
            }
            match &region.lod {
                Some(lod) => w.lod(lod),
                None => Ok(()),
            }
        })
    }

    fn lat_lon_alt_box(&mut self, bounds: &LatLonAltBox) -> Result<()> {
        self.element("LatLonAltBox", &object_attributes(&bounds.ids), |w| {
            w.number("north", bounds.north, 0.0)?;
            w.number("south", bounds.south, 0.0)?;
            w.number("east", bounds.east, 0.0)?;
            w.number("west", bounds.west, 0.0)?;
            w.number("minAltitude", bounds.min_altitude, 0.0)?;
            w.number("maxAltitude", bounds.max_altitude, 0.0)?;
            w.altitude_mode(bounds.altitude_mode)
        })
    }

    fn lod(&mut self, lod: &Lod) -> Result<()> {
        self.element("Lod", &object_attributes(&lod.ids), |w| {
            w.number("minLodPixels", lod.min_lod_pixels, 0.0)?;
            w.number("maxLodPixels", lod.max_lod_pixels, DEFAULT_MAX_LOD_PIXELS)?;
            w.number("minFadeExtent", lod.min_fade_extent, 0.0)?;
            w.number("maxFadeExtent", lod.max_fade_extent, 0.0)
        })
    }

    pub(crate) fn lat_lon_box(&mut self, bounds: &LatLonBox) -> Result<()> {
        self.element("LatLonBox", &object_attributes(&bounds.ids), |w| {
            w.number("north", bounds.north, 0.0)?;
            w.number("south", bounds.south, 0.0)?;
            w.number("east", bounds.east, 0.0)?;
            w.number("west", bounds.west, 0.0)?;
            w.number("rotation", bounds.rotation, 0.0)
        })
    }

    pub(crate) fn lat_lon_quad(&mut self, quad: &LatLonQuad) -> Result<()> {
        self.element("gx:LatLonQuad", &object_attributes(&quad.ids), |w| {
            w.coordinates(&quad.coordinates)
        })
    }

    /// Placement vectors always carry all four attributes.
    pub(crate) fn vec2(&mut self, name: &str, value: &Vec2) -> Result<()> {
        let x = value.x.to_string();
        let y = value.y.to_string();
        self.empty(
            name,
            &[
                ("x", x.as_str()),
                ("y", y.as_str()),
                ("xunits", value.x_units.as_token()),
                ("yunits", value.y_units.as_token()),
            ],
        )
    }

    pub(crate) fn view_volume(&mut self, volume: &ViewVolume) -> Result<()> {
        self.element("ViewVolume", &object_attributes(&volume.ids), |w| {
            w.number("leftFov", volume.left_fov, 0.0)?;
            w.number("rightFov", volume.right_fov, 0.0)?;
            w.number("bottomFov", volume.bottom_fov, 0.0)?;
            w.number("topFov", volume.top_fov, 0.0)?;
            w.number("near", volume.near, 0.0)
        })
    }

    pub(crate) fn image_pyramid(&mut self, pyramid: &ImagePyramid) -> Result<()> {
        self.element("ImagePyramid", &object_attributes(&pyramid.ids), |w| {
            w.integer("tileSize", pyramid.tile_size, DEFAULT_TILE_SIZE)?;
            w.integer("maxWidth", pyramid.max_width, 0)?;
            w.integer("maxHeight", pyramid.max_height, 0)?;
            w.token("gridOrigin", &pyramid.grid_origin)
        })
    }

    pub(crate) fn extended_data(&mut self, data: &ExtendedData) -> Result<()> {
        self.element("ExtendedData", &[], |w| {
            for entry in &data.data {
                w.data(entry)?;
            }
            for schema_data in &data.schema_data {
                w.schema_data(schema_data)?;
            }
            Ok(())
        })
    }

    fn data(&mut self, entry: &Data) -> Result<()> {
        let mut attributes = object_attributes(&entry.ids);
        if let Some(name) = entry.name.as_deref() {
            attributes.push(("name", name));
        }
        self.element("Data", &attributes, |w| {
            w.opt_text("displayName", entry.display_name.as_deref())?;
            w.opt_text("value", entry.value.as_deref())
        })
    }

    fn schema_data(&mut self, schema_data: &SchemaData) -> Result<()> {
        let mut attributes = object_attributes(&schema_data.ids);
        if let Some(url) = schema_data.schema_url.as_deref() {
            attributes.push(("schemaUrl", url));
        }
        self.element("SchemaData", &attributes, |w| {
            for (name, value) in schema_data.fields() {
                match value {
                    FieldValue::Text(text) => w.simple_data(name, text)?,
                    FieldValue::TextList(values) => w.simple_array_data(name, values)?,
                }
            }
            Ok(())
        })
    }

    fn simple_data(&mut self, name: &str, value: &str) -> Result<()> {
        self.text_element("SimpleData", &[("name", name)], value)
    }

    fn simple_array_data(&mut self, name: &str, values: &[String]) -> Result<()> {
        self.element("gx:SimpleArrayData", &[("name", name)], |w| {
            for value in values {
                w.text_element("gx:value", &[], value)?;
            }
            Ok(())
        })
    }

    pub(crate) fn schema(&mut self, schema: &Schema) -> Result<()> {
        let mut attributes = object_attributes(&schema.ids);
        if let Some(name) = schema.name.as_deref() {
            attributes.push(("name", name));
        }
        self.element("Schema", &attributes, |w| {
            for field in &schema.fields {
                w.simple_field(field)?;
            }
            Ok(())
        })
    }

    fn simple_field(&mut self, field: &SimpleField) -> Result<()> {
        let mut attributes = Vec::new();
        if let Some(field_type) = field.field_type.as_deref() {
            attributes.push(("type", field_type));
        }
        if let Some(name) = field.name.as_deref() {
            attributes.push(("name", name));
        }
        let tag = if field.array {
            "gx:SimpleArrayField"
        } else {
            "SimpleField"
        };
        self.element(tag, &attributes, |w| {
            w.opt_text("displayName", field.display_name.as_deref())
        })
    }

    pub(crate) fn network_link_control(&mut self, control: &NetworkLinkControl) -> Result<()> {
        self.element("NetworkLinkControl", &[], |w| {
            w.number("minRefreshPeriod", control.min_refresh_period, 0.0)?;
            w.number(
                "maxSessionLength",
                control.max_session_length,
                DEFAULT_MAX_SESSION_LENGTH,
            )?;
            w.opt_text("cookie", control.cookie.as_deref())?;
            w.opt_text("message", control.message.as_deref())?;
            w.opt_text("linkName", control.link_name.as_deref())?;
            w.opt_text("linkDescription", control.link_description.as_deref())?;
            if let Some(snippet) = &control.link_snippet {
                w.snippet("linkSnippet", snippet)?;
            }
            w.datetime("expires", control.expires.as_ref())?;
            if let Some(update) = &control.update {
                w.update(update)?;
            }
            match &control.view {
                Some(view) => w.view(view),
                None => Ok(()),
            }
        })
    }

    pub(crate) fn update(&mut self, update: &Update) -> Result<()> {
        self.element("Update", &[], |w| {
            w.opt_text("targetHref", update.target_href.as_deref())?;
            for operation in &update.operations {
                match operation {
                    UpdateOperation::Create(create) => w.targets("Create", &create.targets)?,
                    UpdateOperation::Delete(delete) => w.targets("Delete", &delete.targets)?,
                    UpdateOperation::Change(change) => w.change(change)?,
                }
            }
            Ok(())
        })
    }

    /// `Create` or `Delete`, children in document order.
    fn targets(&mut self, name: &str, targets: &[UpdateTarget]) -> Result<()> {
        self.element(name, &[], |w| {
            for target in targets {
                match target {
                    UpdateTarget::Feature(feature) => w.feature(feature)?,
                    UpdateTarget::Geometry(geometry) => w.geometry(geometry)?,
                }
            }
            Ok(())
        })
    }

    fn change(&mut self, change: &Change) -> Result<()> {
        self.element("Change", &[], |w| {
            for patch in &change.patches {
                w.patch(patch)?;
            }
            Ok(())
        })
    }

    pub(crate) fn playlist(&mut self, playlist: &Playlist) -> Result<()> {
        self.element("gx:Playlist", &object_attributes(&playlist.ids), |w| {
            for primitive in &playlist.primitives {
                w.tour_primitive(primitive)?;
            }
            Ok(())
        })
    }

    fn tour_primitive(&mut self, primitive: &TourPrimitive) -> Result<()> {
        match primitive {
            TourPrimitive::FlyTo(fly_to) => {
                self.element("gx:FlyTo", &object_attributes(&fly_to.ids), |w| {
                    w.number("gx:duration", fly_to.duration, 0.0)?;
                    w.token("gx:flyToMode", &fly_to.fly_to_mode)?;
                    match &fly_to.view {
                        Some(view) => w.view(view),
                        None => Ok(()),
                    }
                })
            }
            TourPrimitive::Wait(wait) => {
                self.element("gx:Wait", &object_attributes(&wait.ids), |w| {
                    w.number("gx:duration", wait.duration, 0.0)
                })
            }
            TourPrimitive::AnimatedUpdate(animated) => {
                self.element("gx:AnimatedUpdate", &object_attributes(&animated.ids), |w| {
                    w.number("gx:duration", animated.duration, 0.0)?;
                    w.number("gx:delayedStart", animated.delayed_start, 0.0)?;
                    match &animated.update {
                        Some(update) => w.update(update),
                        None => Ok(()),
                    }
                })
            }
            TourPrimitive::TourControl(control) => {
                self.element("gx:TourControl", &object_attributes(&control.ids), |w| {
                    w.token("gx:playMode", &control.play_mode)
                })
            }
            TourPrimitive::SoundCue(cue) => {
                self.element("gx:SoundCue", &object_attributes(&cue.ids), |w| {
                    w.opt_text("href", cue.href.as_deref())?;
                    w.number("gx:delayedStart", cue.delayed_start, 0.0)
                })
            }
        }
    }

    /// A `Change` child, under the name it was read with where the node
    /// alone does not determine it.
    fn patch(&mut self, patch: &Patch) -> Result<()> {
        let name = patch.element.as_str();
        match &patch.node {
            Node::Kml(kml) => self.kml(kml),
            Node::Feature(feature) => self.feature(feature),
            Node::Geometry(geometry) => self.geometry(geometry),
            Node::StyleSelector(selector) => self.style_selector(selector),
            Node::IconStyle(style) => self.icon_style(style),
            Node::LabelStyle(style) => self.label_style(style),
            Node::LineStyle(style) => self.line_style(style),
            Node::PolyStyle(style) => self.poly_style(style),
            Node::BalloonStyle(style) => self.balloon_style(style),
            Node::ListStyle(style) => self.list_style(style),
            Node::ItemIcon(icon) => self.item_icon(icon),
            Node::Pair(pair) => self.pair(pair),
            Node::Link(link) => self.link(name, link),
            Node::AtomLink(link) => self.atom_link(link),
            Node::Author(author) => self.author(author),
            Node::View(view) => self.view(view),
            Node::ViewerOptions(options) => self.viewer_options(options),
            Node::ViewerOption(option) => self.viewer_option(option),
            Node::Time(time) => self.time_primitive(time, false),
            Node::Region(region) => self.region(region),
            Node::LatLonAltBox(bounds) => self.lat_lon_alt_box(bounds),
            Node::Lod(lod) => self.lod(lod),
            Node::LatLonBox(bounds) => self.lat_lon_box(bounds),
            Node::LatLonQuad(quad) => self.lat_lon_quad(quad),
            Node::Vec2(value) => self.vec2(name, value),
            Node::ViewVolume(volume) => self.view_volume(volume),
            Node::ImagePyramid(pyramid) => self.image_pyramid(pyramid),
            Node::Boundary(boundary) => self.boundary(name, boundary),
            Node::Location(location) => self.location(location),
            Node::Orientation(orientation) => self.orientation(orientation),
            Node::Scale(scale) => self.scale(scale),
            Node::ResourceMap(map) => self.resource_map(map),
            Node::Alias(alias) => self.alias(alias),
            Node::ExtendedData(data) => self.extended_data(data),
            Node::Data(entry) => self.data(entry),
            Node::SchemaData(schema_data) => self.schema_data(schema_data),
            Node::SimpleData(simple) => self.simple_data(&simple.name, &simple.value),
            Node::SimpleArrayData(array) => self.simple_array_data(&array.name, &array.values),
            Node::Schema(schema) => self.schema(schema),
            Node::SimpleField(field) => self.simple_field(field),
            Node::NetworkLinkControl(control) => self.network_link_control(control),
            Node::Update(update) => self.update(update),
            Node::Create(create) => self.targets("Create", &create.targets),
            Node::Change(change) => self.change(change),
            Node::Delete(delete) => self.targets("Delete", &delete.targets),
            Node::Playlist(playlist) => self.playlist(playlist),
            Node::TourPrimitive(primitive) => self.tour_primitive(primitive),
            Node::Snippet(snippet) => self.snippet(name, snippet),
            Node::Address(element) => self.address_element(element),
        }
    }
}
