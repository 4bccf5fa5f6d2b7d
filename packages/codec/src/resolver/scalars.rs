//! Scalar field tables, one per element kind.

use crate::model::link::{DEFAULT_REFRESH_INTERVAL, DEFAULT_VIEW_BOUND_SCALE, DEFAULT_VIEW_REFRESH_TIME};
use crate::model::region::{DEFAULT_MAX_LOD_PIXELS, DEFAULT_TILE_SIZE};
use crate::model::style::{DEFAULT_LINE_WIDTH, DEFAULT_MAX_SNIPPET_LINES, DEFAULT_SCALE};
use crate::model::update::DEFAULT_MAX_SESSION_LENGTH;
use crate::model::{
    AbstractView, AltitudeMode, Angles, Feature, FeatureCommon, Geometry, ItemIconState, Link,
    Node, OverlayCommon, TimePrimitive, TourPrimitive,
};
use crate::scalar::{KmlToken, ScalarValue};

/// Set a scalar leaf on its parent. Returns `false` if the parent has no
/// field of that name.
pub(super) fn assign(parent: &mut Node, name: &str, value: &ScalarValue) -> bool {
    if let Some(style) = parent.as_color_style() {
        match name {
            "color" => {
                *style.color_mut() = value.color();
                return true;
            }
            "colorMode" => {
                *style.color_mode_mut() = value.token();
                return true;
            }
            _ => {}
        }
    }

    match parent {
        Node::Feature(feature) => feature_field(feature, name, value),
        Node::Geometry(geometry) => geometry_field(geometry, name, value),
        Node::IconStyle(style) => match name {
            "scale" => set(&mut style.scale, value.f64_or(DEFAULT_SCALE)),
            "heading" => set(&mut style.heading, value.f64_or(0.0)),
            _ => false,
        },
        Node::LabelStyle(style) => match name {
            "scale" => set(&mut style.scale, value.f64_or(DEFAULT_SCALE)),
            _ => false,
        },
        Node::LineStyle(style) => match name {
            "width" => set(&mut style.width, value.f64_or(DEFAULT_LINE_WIDTH)),
            "outerColor" => set(&mut style.outer_color, value.color()),
            "outerWidth" => set(&mut style.outer_width, value.f64_or(0.0)),
            "physicalWidth" => set(&mut style.physical_width, value.f64_or(0.0)),
            "labelVisibility" => set(&mut style.label_visibility, value.flag()),
            _ => false,
        },
        Node::PolyStyle(style) => match name {
            "fill" => set(&mut style.fill, value.flag()),
            "outline" => set(&mut style.outline, value.flag()),
            _ => false,
        },
        Node::BalloonStyle(style) => match name {
            // `color` is the KML 2.1 spelling of `bgColor`.
            "bgColor" | "color" => set(&mut style.bg_color, value.color()),
            "textColor" => set(&mut style.text_color, value.color()),
            "text" => set(&mut style.text, Some(value.text())),
            "displayMode" => set(&mut style.display_mode, value.token()),
            _ => false,
        },
        Node::ListStyle(style) => match name {
            "listItemType" => set(&mut style.list_item_type, value.token()),
            "bgColor" => set(&mut style.bg_color, value.color()),
            "maxSnippetLines" => set(
                &mut style.max_snippet_lines,
                value.i32_or(DEFAULT_MAX_SNIPPET_LINES),
            ),
            _ => false,
        },
        Node::ItemIcon(icon) => match name {
            "state" => set(
                &mut icon.states,
                value
                    .text()
                    .split_whitespace()
                    .map(ItemIconState::from_token)
                    .collect(),
            ),
            "href" => set(&mut icon.href, Some(value.text())),
            _ => false,
        },
        Node::Pair(pair) => match name {
            "key" => set(&mut pair.key, value.token()),
            "styleUrl" => set(&mut pair.style_url, Some(value.text())),
            _ => false,
        },
        Node::Link(link) => link_field(link, name, value),
        Node::Author(author) => match name {
            "name" => {
                author.names.push(value.text());
                true
            }
            "uri" => set(&mut author.uri, Some(value.text())),
            "email" => set(&mut author.email, Some(value.text())),
            _ => false,
        },
        Node::View(AbstractView::Camera(camera)) => match name {
            "longitude" => set(&mut camera.longitude, value.f64_or(0.0)),
            "latitude" => set(&mut camera.latitude, value.f64_or(0.0)),
            "altitude" => set(&mut camera.altitude, value.f64_or(0.0)),
            "heading" => set(&mut camera.heading, value.f64_or(0.0)),
            "tilt" => set(&mut camera.tilt, value.f64_or(0.0)),
            "roll" => set(&mut camera.roll, value.f64_or(0.0)),
            "horizFov" => set(&mut camera.horiz_fov, value.f64_or(0.0)),
            _ => altitude_mode(&mut camera.altitude_mode, name, value),
        },
        Node::View(AbstractView::LookAt(look_at)) => match name {
            "longitude" => set(&mut look_at.longitude, value.f64_or(0.0)),
            "latitude" => set(&mut look_at.latitude, value.f64_or(0.0)),
            "altitude" => set(&mut look_at.altitude, value.f64_or(0.0)),
            "heading" => set(&mut look_at.heading, value.f64_or(0.0)),
            "tilt" => set(&mut look_at.tilt, value.f64_or(0.0)),
            "range" => set(&mut look_at.range, value.f64_or(0.0)),
            "horizFov" => set(&mut look_at.horiz_fov, value.f64_or(0.0)),
            _ => altitude_mode(&mut look_at.altitude_mode, name, value),
        },
        Node::Time(TimePrimitive::TimeStamp(stamp)) => match name {
            "when" => set(&mut stamp.when, value.datetime()),
            _ => false,
        },
        Node::Time(TimePrimitive::TimeSpan(span)) => match name {
            "begin" => set(&mut span.begin, value.datetime()),
            "end" => set(&mut span.end, value.datetime()),
            _ => false,
        },
        Node::LatLonAltBox(bounds) => match name {
            "north" => set(&mut bounds.north, value.f64_or(0.0)),
            "south" => set(&mut bounds.south, value.f64_or(0.0)),
            "east" => set(&mut bounds.east, value.f64_or(0.0)),
            "west" => set(&mut bounds.west, value.f64_or(0.0)),
            "minAltitude" => set(&mut bounds.min_altitude, value.f64_or(0.0)),
            "maxAltitude" => set(&mut bounds.max_altitude, value.f64_or(0.0)),
            _ => altitude_mode(&mut bounds.altitude_mode, name, value),
        },
        Node::Lod(lod) => match name {
            "minLodPixels" => set(&mut lod.min_lod_pixels, value.f64_or(0.0)),
            "maxLodPixels" => set(&mut lod.max_lod_pixels, value.f64_or(DEFAULT_MAX_LOD_PIXELS)),
            "minFadeExtent" => set(&mut lod.min_fade_extent, value.f64_or(0.0)),
            "maxFadeExtent" => set(&mut lod.max_fade_extent, value.f64_or(0.0)),
            _ => false,
        },
        Node::LatLonBox(bounds) => match name {
            "north" => set(&mut bounds.north, value.f64_or(0.0)),
            "south" => set(&mut bounds.south, value.f64_or(0.0)),
            "east" => set(&mut bounds.east, value.f64_or(0.0)),
            "west" => set(&mut bounds.west, value.f64_or(0.0)),
            "rotation" => set(&mut bounds.rotation, value.f64_or(0.0)),
            _ => false,
        },
        Node::LatLonQuad(quad) => match name {
            "coordinates" => set(&mut quad.coordinates, value.coordinates()),
            _ => false,
        },
        Node::ViewVolume(volume) => match name {
            "leftFov" => set(&mut volume.left_fov, value.f64_or(0.0)),
            "rightFov" => set(&mut volume.right_fov, value.f64_or(0.0)),
            "bottomFov" => set(&mut volume.bottom_fov, value.f64_or(0.0)),
            "topFov" => set(&mut volume.top_fov, value.f64_or(0.0)),
            "near" => set(&mut volume.near, value.f64_or(0.0)),
            _ => false,
        },
        Node::ImagePyramid(pyramid) => match name {
            "tileSize" => set(&mut pyramid.tile_size, value.i32_or(DEFAULT_TILE_SIZE)),
            "maxWidth" => set(&mut pyramid.max_width, value.i32_or(0)),
            "maxHeight" => set(&mut pyramid.max_height, value.i32_or(0)),
            "gridOrigin" => set(&mut pyramid.grid_origin, value.token()),
            _ => false,
        },
        Node::Location(location) => match name {
            "longitude" => set(&mut location.longitude, value.f64_or(0.0)),
            "latitude" => set(&mut location.latitude, value.f64_or(0.0)),
            "altitude" => set(&mut location.altitude, value.f64_or(0.0)),
            _ => false,
        },
        Node::Orientation(orientation) => match name {
            "heading" => set(&mut orientation.heading, value.f64_or(0.0)),
            "tilt" => set(&mut orientation.tilt, value.f64_or(0.0)),
            "roll" => set(&mut orientation.roll, value.f64_or(0.0)),
            _ => false,
        },
        Node::Scale(scale) => match name {
            "x" => set(&mut scale.x, value.f64_or(1.0)),
            "y" => set(&mut scale.y, value.f64_or(1.0)),
            "z" => set(&mut scale.z, value.f64_or(1.0)),
            _ => false,
        },
        Node::Alias(alias) => match name {
            "targetHref" => set(&mut alias.target_href, Some(value.text())),
            "sourceHref" => set(&mut alias.source_href, Some(value.text())),
            _ => false,
        },
        Node::Data(data) => match name {
            "displayName" => set(&mut data.display_name, Some(value.text())),
            "value" => set(&mut data.value, Some(value.text())),
            _ => false,
        },
        Node::SimpleArrayData(array) => match name {
            "value" => {
                array.values.push(value.text());
                true
            }
            _ => false,
        },
        Node::SimpleField(field) => match name {
            "displayName" => set(&mut field.display_name, Some(value.text())),
            _ => false,
        },
        Node::NetworkLinkControl(control) => match name {
            "minRefreshPeriod" => set(&mut control.min_refresh_period, value.f64_or(0.0)),
            "maxSessionLength" => set(
                &mut control.max_session_length,
                value.f64_or(DEFAULT_MAX_SESSION_LENGTH),
            ),
            "cookie" => set(&mut control.cookie, Some(value.text())),
            "message" => set(&mut control.message, Some(value.text())),
            "linkName" => set(&mut control.link_name, Some(value.text())),
            "linkDescription" => set(&mut control.link_description, Some(value.text())),
            "expires" => set(&mut control.expires, value.datetime()),
            _ => false,
        },
        Node::Update(update) => match name {
            "targetHref" => set(&mut update.target_href, Some(value.text())),
            _ => false,
        },
        Node::TourPrimitive(primitive) => tour_field(primitive, name, value),
        _ => false,
    }
}

fn set<T>(field: &mut T, value: T) -> bool {
    *field = value;
    true
}

fn altitude_mode(field: &mut AltitudeMode, name: &str, value: &ScalarValue) -> bool {
    match name {
        "altitudeMode" | "seaFloorAltitudeMode" => set(field, value.token()),
        _ => false,
    }
}

fn common_field(common: &mut FeatureCommon, name: &str, value: &ScalarValue) -> bool {
    match name {
        "name" => set(&mut common.name, Some(value.text())),
        "visibility" => set(&mut common.visibility, value.flag()),
        "open" => set(&mut common.open, value.flag()),
        "balloonVisibility" => set(&mut common.balloon_visibility, value.flag()),
        "address" => set(&mut common.address, Some(value.text())),
        "phoneNumber" => set(&mut common.phone_number, Some(value.text())),
        "styleUrl" => set(&mut common.style_url, Some(value.text())),
        "description" => set(&mut common.description, Some(value.text())),
        _ => false,
    }
}

fn overlay_field(overlay: &mut OverlayCommon, name: &str, value: &ScalarValue) -> bool {
    match name {
        "color" => set(&mut overlay.color, value.color()),
        "drawOrder" => set(&mut overlay.draw_order, value.i32_or(0)),
        _ => false,
    }
}

fn feature_field(feature: &mut Feature, name: &str, value: &ScalarValue) -> bool {
    if common_field(feature.common_mut(), name, value) {
        return true;
    }

    match feature {
        Feature::NetworkLink(link) => match name {
            "refreshVisibility" => set(&mut link.refresh_visibility, value.flag()),
            "flyToView" => set(&mut link.fly_to_view, value.flag()),
            _ => false,
        },
        Feature::GroundOverlay(overlay) => match name {
            "altitude" => set(&mut overlay.altitude, value.f64_or(0.0)),
            _ => {
                overlay_field(&mut overlay.overlay, name, value)
                    || altitude_mode(&mut overlay.altitude_mode, name, value)
            }
        },
        Feature::ScreenOverlay(overlay) => match name {
            "rotation" => set(&mut overlay.rotation, value.f64_or(0.0)),
            _ => overlay_field(&mut overlay.overlay, name, value),
        },
        Feature::PhotoOverlay(overlay) => match name {
            "rotation" => set(&mut overlay.rotation, value.f64_or(0.0)),
            "shape" => set(&mut overlay.shape, value.token()),
            _ => overlay_field(&mut overlay.overlay, name, value),
        },
        Feature::Document(_) | Feature::Folder(_) | Feature::Placemark(_) | Feature::Tour(_) => {
            false
        }
    }
}

fn geometry_field(geometry: &mut Geometry, name: &str, value: &ScalarValue) -> bool {
    match geometry {
        Geometry::Point(point) => match name {
            "extrude" => set(&mut point.extrude, value.flag()),
            "coordinates" => set(&mut point.coordinates, value.coordinates().first().copied()),
            _ => altitude_mode(&mut point.altitude_mode, name, value),
        },
        Geometry::LineString(line) => match name {
            "extrude" => set(&mut line.extrude, value.flag()),
            "tessellate" => set(&mut line.tessellate, value.flag()),
            "coordinates" => set(&mut line.coordinates, value.coordinates()),
            "altitudeOffset" => set(&mut line.altitude_offset, value.f64_or(0.0)),
            "drawOrder" => set(&mut line.draw_order, value.i32_or(0)),
            _ => altitude_mode(&mut line.altitude_mode, name, value),
        },
        Geometry::LinearRing(ring) => match name {
            "extrude" => set(&mut ring.extrude, value.flag()),
            "tessellate" => set(&mut ring.tessellate, value.flag()),
            "coordinates" => set(&mut ring.coordinates, value.coordinates()),
            "altitudeOffset" => set(&mut ring.altitude_offset, value.f64_or(0.0)),
            _ => altitude_mode(&mut ring.altitude_mode, name, value),
        },
        Geometry::Polygon(polygon) => match name {
            "extrude" => set(&mut polygon.extrude, value.flag()),
            "tessellate" => set(&mut polygon.tessellate, value.flag()),
            _ => altitude_mode(&mut polygon.altitude_mode, name, value),
        },
        Geometry::MultiGeometry(_) => false,
        Geometry::Model(model) => altitude_mode(&mut model.altitude_mode, name, value),
        Geometry::Track(track) => match name {
            "when" => {
                // Unreadable samples are dropped; coerce() has already logged them.
                if let Some(when) = value.datetime() {
                    track.whens.push(when);
                }
                true
            }
            "coord" => {
                track.coords.extend(value.coordinates());
                true
            }
            "angles" => {
                track.angles.push(Angles::parse(&value.text()));
                true
            }
            _ => altitude_mode(&mut track.altitude_mode, name, value),
        },
        Geometry::MultiTrack(multi) => match name {
            "interpolate" => set(&mut multi.interpolate, value.flag()),
            _ => altitude_mode(&mut multi.altitude_mode, name, value),
        },
    }
}

fn link_field(link: &mut Link, name: &str, value: &ScalarValue) -> bool {
    match name {
        "href" => set(&mut link.href, Some(value.text())),
        "refreshMode" => set(&mut link.refresh_mode, value.token()),
        "refreshInterval" => set(
            &mut link.refresh_interval,
            value.f64_or(DEFAULT_REFRESH_INTERVAL),
        ),
        "viewRefreshMode" => set(&mut link.view_refresh_mode, value.token()),
        "viewRefreshTime" => set(
            &mut link.view_refresh_time,
            value.f64_or(DEFAULT_VIEW_REFRESH_TIME),
        ),
        "viewBoundScale" => set(
            &mut link.view_bound_scale,
            value.f64_or(DEFAULT_VIEW_BOUND_SCALE),
        ),
        "viewFormat" => set(&mut link.view_format, Some(value.text())),
        "httpQuery" => set(&mut link.http_query, Some(value.text())),
        "x" => set(&mut link.x, value.f64_or(0.0)),
        "y" => set(&mut link.y, value.f64_or(0.0)),
        "w" => set(&mut link.w, value.f64_or(0.0)),
        "h" => set(&mut link.h, value.f64_or(0.0)),
        _ => false,
    }
}

fn tour_field(primitive: &mut TourPrimitive, name: &str, value: &ScalarValue) -> bool {
    match primitive {
        TourPrimitive::FlyTo(fly_to) => match name {
            "duration" => set(&mut fly_to.duration, value.f64_or(0.0)),
            "flyToMode" => set(&mut fly_to.fly_to_mode, value.token()),
            _ => false,
        },
        TourPrimitive::Wait(wait) => match name {
            "duration" => set(&mut wait.duration, value.f64_or(0.0)),
            _ => false,
        },
        TourPrimitive::AnimatedUpdate(animated) => match name {
            "duration" => set(&mut animated.duration, value.f64_or(0.0)),
            "delayedStart" => set(&mut animated.delayed_start, value.f64_or(0.0)),
            _ => false,
        },
        TourPrimitive::TourControl(control) => match name {
            "playMode" => set(&mut control.play_mode, value.token()),
            _ => false,
        },
        TourPrimitive::SoundCue(cue) => match name {
            "href" => set(&mut cue.href, Some(value.text())),
            "delayedStart" => set(&mut cue.delayed_start, value.f64_or(0.0)),
            _ => false,
        },
    }
}
