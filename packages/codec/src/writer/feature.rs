//! Features, in KML schema element order.

use std::io::Write;

use super::xml::{object_attributes, KmlWriter};
use crate::error::Result;
use crate::model::feature::DEFAULT_SNIPPET_MAX_LINES;
use crate::model::{
    AddressElement, AtomLink, Author, Feature, FeatureCommon, OverlayCommon, Snippet,
};
use crate::scalar::Color;

impl<W: Write> KmlWriter<W> {
    pub(crate) fn feature(&mut self, feature: &Feature) -> Result<()> {
        let name = feature.element_name();
        let common = feature.common();
        self.element(name, &object_attributes(&common.ids), |w| {
            w.feature_common(common)?;
            match feature {
                Feature::Document(document) => {
                    for schema in &document.schemas {
                        w.schema(schema)?;
                    }
                    for child in &document.features {
                        w.feature(child)?;
                    }
                }
                Feature::Folder(folder) => {
                    for child in &folder.features {
                        w.feature(child)?;
                    }
                }
                Feature::Placemark(placemark) => {
                    if let Some(geometry) = &placemark.geometry {
                        w.geometry(geometry)?;
                    }
                }
                Feature::NetworkLink(link) => {
                    w.flag("refreshVisibility", link.refresh_visibility, false)?;
                    w.flag("flyToView", link.fly_to_view, false)?;
                    if let Some(value) = &link.link {
                        w.link("Link", value)?;
                    }
                }
                Feature::GroundOverlay(overlay) => {
                    w.overlay_common(&overlay.overlay)?;
                    w.number("altitude", overlay.altitude, 0.0)?;
                    w.altitude_mode(overlay.altitude_mode)?;
                    if let Some(bounds) = &overlay.lat_lon_box {
                        w.lat_lon_box(bounds)?;
                    }
                    if let Some(quad) = &overlay.lat_lon_quad {
                        w.lat_lon_quad(quad)?;
                    }
                }
                Feature::ScreenOverlay(overlay) => {
                    w.overlay_common(&overlay.overlay)?;
                    let placements = [
                        ("overlayXY", &overlay.overlay_xy),
                        ("screenXY", &overlay.screen_xy),
                        ("rotationXY", &overlay.rotation_xy),
                        ("size", &overlay.size),
                    ];
                    for (tag, value) in placements {
                        if let Some(value) = value {
                            w.vec2(tag, value)?;
                        }
                    }
                    w.number("rotation", overlay.rotation, 0.0)?;
                }
                Feature::PhotoOverlay(overlay) => {
                    w.overlay_common(&overlay.overlay)?;
                    w.number("rotation", overlay.rotation, 0.0)?;
                    if let Some(volume) = &overlay.view_volume {
                        w.view_volume(volume)?;
                    }
                    if let Some(pyramid) = &overlay.image_pyramid {
                        w.image_pyramid(pyramid)?;
                    }
                    if let Some(point) = &overlay.point {
                        w.point(point)?;
                    }
                    w.token("shape", &overlay.shape)?;
                }
                Feature::Tour(tour) => {
                    if let Some(playlist) = &tour.playlist {
                        w.playlist(playlist)?;
                    }
                }
            }
            Ok(())
        })
    }

    fn feature_common(&mut self, common: &FeatureCommon) -> Result<()> {
        self.opt_text("name", common.name.as_deref())?;
        self.flag("visibility", common.visibility, true)?;
        self.flag("open", common.open, false)?;
        if let Some(author) = &common.author {
            self.author(author)?;
        }
        if let Some(link) = &common.atom_link {
            self.atom_link(link)?;
        }
        self.opt_text("address", common.address.as_deref())?;
        if let Some(details) = &common.address_details {
            self.address_element(details)?;
        }
        self.opt_text("phoneNumber", common.phone_number.as_deref())?;
        for snippet in &common.snippets {
            self.snippet("Snippet", snippet)?;
        }
        self.opt_text("description", common.description.as_deref())?;
        if let Some(view) = &common.view {
            self.view(view)?;
        }
        if let Some(time) = &common.time {
            self.time_primitive(time, false)?;
        }
        self.opt_text("styleUrl", common.style_url.as_deref())?;
        for selector in &common.style_selectors {
            self.style_selector(selector)?;
        }
        if let Some(region) = &common.region {
            self.region(region)?;
        }
        if let Some(data) = &common.extended_data {
            self.extended_data(data)?;
        }
        self.flag("gx:balloonVisibility", common.balloon_visibility, true)
    }

    fn overlay_common(&mut self, overlay: &OverlayCommon) -> Result<()> {
        self.color("color", overlay.color, Color::WHITE)?;
        self.integer("drawOrder", overlay.draw_order, 0)?;
        match &overlay.icon {
            Some(icon) => self.link("Icon", icon),
            None => Ok(()),
        }
    }

    pub(crate) fn snippet(&mut self, name: &str, snippet: &Snippet) -> Result<()> {
        let max_lines = snippet.max_lines.to_string();
        if snippet.max_lines == DEFAULT_SNIPPET_MAX_LINES {
            self.text_element(name, &[], &snippet.text)
        } else {
            self.text_element(name, &[("maxLines", &max_lines)], &snippet.text)
        }
    }

    pub(crate) fn author(&mut self, author: &Author) -> Result<()> {
        self.element("atom:author", &[], |w| {
            for name in &author.names {
                w.text_element("atom:name", &[], name)?;
            }
            w.opt_text("atom:uri", author.uri.as_deref())?;
            w.opt_text("atom:email", author.email.as_deref())
        })
    }

    pub(crate) fn atom_link(&mut self, link: &AtomLink) -> Result<()> {
        let mut attributes = vec![("href", link.href.as_str())];
        let optional = [
            ("rel", &link.rel),
            ("type", &link.mime_type),
            ("hreflang", &link.hreflang),
            ("title", &link.title),
            ("length", &link.length),
        ];
        for (key, value) in optional {
            if let Some(value) = value {
                attributes.push((key, value.as_str()));
            }
        }
        self.empty("atom:link", &attributes)
    }

    pub(crate) fn address_element(&mut self, element: &AddressElement) -> Result<()> {
        let name = format!("xal:{}", element.name);
        let attributes: Vec<(&str, &str)> = element
            .attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
            .collect();

        if element.children.is_empty() {
            return self.text_element(&name, &attributes, element.text.as_deref().unwrap_or(""));
        }

        self.element(&name, &attributes, |w| {
            if let Some(text) = &element.text {
                w.text(text)?;
            }
            for child in &element.children {
                w.address_element(child)?;
            }
            Ok(())
        })
    }
}
