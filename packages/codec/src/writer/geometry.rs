//! Geometry elements.

use std::io::Write;

use super::xml::{object_attributes, KmlWriter};
use crate::error::Result;
use crate::model::{
    Alias, Boundary, Geometry, LinearRing, Location, Model, Orientation, Point, ResourceMap, Scale,
    Track,
};
use crate::scalar::{format_coordinates, format_track_coord, Coordinate};

impl<W: Write> KmlWriter<W> {
    pub(crate) fn geometry(&mut self, geometry: &Geometry) -> Result<()> {
        match geometry {
            Geometry::Point(point) => self.point(point),
            Geometry::LineString(line) => {
                self.element("LineString", &object_attributes(&line.ids), |w| {
                    w.flag("extrude", line.extrude, false)?;
                    w.flag("tessellate", line.tessellate, false)?;
                    w.altitude_mode(line.altitude_mode)?;
                    w.coordinates(&line.coordinates)?;
                    w.number("gx:altitudeOffset", line.altitude_offset, 0.0)?;
                    w.integer("gx:drawOrder", line.draw_order, 0)
                })
            }
            Geometry::LinearRing(ring) => self.linear_ring(ring),
            Geometry::Polygon(polygon) => {
                self.element("Polygon", &object_attributes(&polygon.ids), |w| {
                    w.flag("extrude", polygon.extrude, false)?;
                    w.flag("tessellate", polygon.tessellate, false)?;
                    w.altitude_mode(polygon.altitude_mode)?;
                    if let Some(ring) = &polygon.outer_boundary {
                        w.element("outerBoundaryIs", &[], |w| w.linear_ring(ring))?;
                    }
                    for ring in &polygon.inner_boundaries {
                        w.element("innerBoundaryIs", &[], |w| w.linear_ring(ring))?;
                    }
                    Ok(())
                })
            }
            Geometry::MultiGeometry(multi) => {
                self.element("MultiGeometry", &object_attributes(&multi.ids), |w| {
                    for child in &multi.geometries {
                        w.geometry(child)?;
                    }
                    Ok(())
                })
            }
            Geometry::Model(model) => self.model(model),
            Geometry::Track(track) => self.track(track),
            Geometry::MultiTrack(multi) => {
                self.element("gx:MultiTrack", &object_attributes(&multi.ids), |w| {
                    w.altitude_mode(multi.altitude_mode)?;
                    w.flag("gx:interpolate", multi.interpolate, false)?;
                    for track in &multi.tracks {
                        w.track(track)?;
                    }
                    Ok(())
                })
            }
        }
    }

    pub(crate) fn point(&mut self, point: &Point) -> Result<()> {
        self.element("Point", &object_attributes(&point.ids), |w| {
            w.flag("extrude", point.extrude, false)?;
            w.altitude_mode(point.altitude_mode)?;
            match &point.coordinates {
                Some(coordinate) => w.coordinates(std::slice::from_ref(coordinate)),
                None => Ok(()),
            }
        })
    }

    pub(crate) fn linear_ring(&mut self, ring: &LinearRing) -> Result<()> {
        self.element("LinearRing", &object_attributes(&ring.ids), |w| {
            w.flag("extrude", ring.extrude, false)?;
            w.flag("tessellate", ring.tessellate, false)?;
            w.altitude_mode(ring.altitude_mode)?;
            w.coordinates(&ring.coordinates)?;
            w.number("gx:altitudeOffset", ring.altitude_offset, 0.0)
        })
    }

    pub(crate) fn coordinates(&mut self, coordinates: &[Coordinate]) -> Result<()> {
        if coordinates.is_empty() {
            return Ok(());
        }
        self.text_element("coordinates", &[], &format_coordinates(coordinates))
    }

    /// A boundary wrapper holding its rings.
    pub(crate) fn boundary(&mut self, name: &str, boundary: &Boundary) -> Result<()> {
        self.element(name, &[], |w| {
            for ring in &boundary.rings {
                w.linear_ring(ring)?;
            }
            Ok(())
        })
    }

    fn model(&mut self, model: &Model) -> Result<()> {
        self.element("Model", &object_attributes(&model.ids), |w| {
            w.altitude_mode(model.altitude_mode)?;
            if let Some(location) = &model.location {
                w.location(location)?;
            }
            if let Some(orientation) = &model.orientation {
                w.orientation(orientation)?;
            }
            if let Some(scale) = &model.scale {
                w.scale(scale)?;
            }
            if let Some(link) = &model.link {
                w.link("Link", link)?;
            }
            match &model.resource_map {
                Some(map) => w.resource_map(map),
                None => Ok(()),
            }
        })
    }

    pub(crate) fn location(&mut self, location: &Location) -> Result<()> {
        self.element("Location", &object_attributes(&location.ids), |w| {
            w.number("longitude", location.longitude, 0.0)?;
            w.number("latitude", location.latitude, 0.0)?;
            w.number("altitude", location.altitude, 0.0)
        })
    }

    pub(crate) fn orientation(&mut self, orientation: &Orientation) -> Result<()> {
        self.element("Orientation", &object_attributes(&orientation.ids), |w| {
            w.number("heading", orientation.heading, 0.0)?;
            w.number("tilt", orientation.tilt, 0.0)?;
            w.number("roll", orientation.roll, 0.0)
        })
    }

    pub(crate) fn scale(&mut self, scale: &Scale) -> Result<()> {
        self.element("Scale", &object_attributes(&scale.ids), |w| {
            w.number("x", scale.x, 1.0)?;
            w.number("y", scale.y, 1.0)?;
            w.number("z", scale.z, 1.0)
        })
    }

    pub(crate) fn resource_map(&mut self, map: &ResourceMap) -> Result<()> {
        self.element("ResourceMap", &object_attributes(&map.ids), |w| {
            for alias in &map.aliases {
                w.alias(alias)?;
            }
            Ok(())
        })
    }

    pub(crate) fn alias(&mut self, alias: &Alias) -> Result<()> {
        self.element("Alias", &object_attributes(&alias.ids), |w| {
            w.opt_text("targetHref", alias.target_href.as_deref())?;
            w.opt_text("sourceHref", alias.source_href.as_deref())
        })
    }

    fn track(&mut self, track: &Track) -> Result<()> {
        self.element("gx:Track", &object_attributes(&track.ids), |w| {
            w.altitude_mode(track.altitude_mode)?;
            for when in &track.whens {
                w.text_element("when", &[], &when.to_kml_string())?;
            }
            for coord in &track.coords {
                w.text_element("gx:coord", &[], &format_track_coord(coord))?;
            }
            for angles in &track.angles {
                w.text_element("gx:angles", &[], &angles.to_kml_string())?;
            }
            if let Some(model) = &track.model {
                w.model(model)?;
            }
            if let Some(data) = &track.extended_data {
                w.extended_data(data)?;
            }
            Ok(())
        })
    }
}
