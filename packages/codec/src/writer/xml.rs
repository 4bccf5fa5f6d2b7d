//! Indenting XML writer with prefix scoping and default suppression.

use std::io::Write;

use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::config::XmlNamespace;
use crate::error::{KmlError, Result};
use crate::model::{AltitudeMode, ObjectIds};
use crate::scalar::{format_bool, BoolStyle, Color, KmlDateTime, KmlToken};

/// Writes KML elements, declaring `gx`, `atom` and `xal` where first used.
pub(crate) struct KmlWriter<W: Write> {
    writer: Writer<W>,
    /// Prefixes declared by each open element.
    scopes: Vec<Vec<&'static str>>,
}

impl<W: Write> KmlWriter<W> {
    pub(crate) fn new(sink: W) -> Self {
        Self {
            writer: Writer::new_with_indent(sink, b' ', 2),
            scopes: Vec::new(),
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    pub(crate) fn declaration(&mut self) -> Result<()> {
        self.event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
    }

    /// Open an element; attributes are written in the given order.
    pub(crate) fn start(&mut self, name: &str, attributes: &[(&str, &str)]) -> Result<()> {
        let start = self.start_tag(name, attributes);
        self.event(Event::Start(start))
    }

    pub(crate) fn end(&mut self, name: &str) -> Result<()> {
        self.scopes.pop();
        self.event(Event::End(BytesEnd::new(name)))
    }

    /// Element with attributes only.
    pub(crate) fn empty(&mut self, name: &str, attributes: &[(&str, &str)]) -> Result<()> {
        let start = self.start_tag(name, attributes);
        self.scopes.pop();
        self.event(Event::Empty(start))
    }

    /// Open `name`, write its body, close it.
    pub(crate) fn element<F>(&mut self, name: &str, attributes: &[(&str, &str)], body: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        self.start(name, attributes)?;
        body(self)?;
        self.end(name)
    }

    /// Element holding character data.
    pub(crate) fn text_element(
        &mut self,
        name: &str,
        attributes: &[(&str, &str)],
        text: &str,
    ) -> Result<()> {
        self.start(name, attributes)?;
        self.text(text)?;
        self.end(name)
    }

    /// Character data; markup-bearing text goes into CDATA sections.
    pub(crate) fn text(&mut self, text: &str) -> Result<()> {
        if !text.contains('<') {
            return self.event(Event::Text(BytesText::new(text)));
        }

        // A literal "]]>" cannot appear inside one section.
        let mut rest = text;
        while let Some(pos) = rest.find("]]>") {
            let (head, tail) = rest.split_at(pos + 2);
            self.event(Event::CData(BytesCData::new(head)))?;
            rest = tail;
        }
        self.event(Event::CData(BytesCData::new(rest)))
    }

    pub(crate) fn opt_text(&mut self, name: &str, value: Option<&str>) -> Result<()> {
        match value {
            Some(value) => self.text_element(name, &[], value),
            None => Ok(()),
        }
    }

    /// `1`/`0` flag, omitted when equal to its default.
    pub(crate) fn flag(&mut self, name: &str, value: bool, default: bool) -> Result<()> {
        if value == default {
            return Ok(());
        }
        self.text_element(name, &[], format_bool(value, BoolStyle::Numeric))
    }

    pub(crate) fn number(&mut self, name: &str, value: f64, default: f64) -> Result<()> {
        if value == default {
            return Ok(());
        }
        self.text_element(name, &[], &value.to_string())
    }

    pub(crate) fn integer(&mut self, name: &str, value: i32, default: i32) -> Result<()> {
        if value == default {
            return Ok(());
        }
        self.text_element(name, &[], &value.to_string())
    }

    pub(crate) fn token<T: KmlToken>(&mut self, name: &str, value: &T) -> Result<()> {
        if value.is_default() {
            return Ok(());
        }
        self.text_element(name, &[], value.as_token())
    }

    pub(crate) fn color(&mut self, name: &str, value: Color, default: Color) -> Result<()> {
        if value == default {
            return Ok(());
        }
        self.text_element(name, &[], &value.to_hex())
    }

    pub(crate) fn datetime(&mut self, name: &str, value: Option<&KmlDateTime>) -> Result<()> {
        match value {
            Some(value) => self.text_element(name, &[], &value.to_kml_string()),
            None => Ok(()),
        }
    }

    /// Seafloor modes only exist in the extension vocabulary.
    pub(crate) fn altitude_mode(&mut self, mode: AltitudeMode) -> Result<()> {
        let name = if mode.is_extension() {
            "gx:altitudeMode"
        } else {
            "altitudeMode"
        };
        self.token(name, &mode)
    }

    pub(crate) fn bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.writer.get_mut().write_all(bytes)?;
        Ok(())
    }

    fn start_tag<'a>(&mut self, name: &'a str, attributes: &[(&str, &str)]) -> BytesStart<'a> {
        let mut declared: Vec<&'static str> = Vec::new();
        for qualified in std::iter::once(name).chain(attributes.iter().map(|(key, _)| *key)) {
            let Some(prefix) = qualified
                .split_once(':')
                .and_then(|(prefix, _)| declarable(prefix))
            else {
                continue;
            };
            let in_scope = self.scopes.iter().flatten().any(|p| *p == prefix);
            if !in_scope && !declared.contains(&prefix) {
                declared.push(prefix);
            }
        }

        let mut start = BytesStart::new(name);
        for prefix in &declared {
            if let Some(uri) = XmlNamespace::uri_for_prefix(prefix) {
                start.push_attribute((format!("xmlns:{prefix}").as_str(), uri));
            }
        }
        for (key, value) in attributes {
            start.push_attribute((*key, *value));
        }
        self.scopes.push(declared);
        start
    }

    fn event(&mut self, event: Event<'_>) -> Result<()> {
        self.writer.write_event(event).map_err(KmlError::Serialize)
    }
}

/// Prefixes the writer declares itself.
fn declarable(prefix: &str) -> Option<&'static str> {
    ["gx", "atom", "xal"].into_iter().find(|known| *known == prefix)
}

/// `id` and `targetId` attributes, when set.
pub(crate) fn object_attributes(ids: &ObjectIds) -> Vec<(&'static str, &str)> {
    let mut attributes = Vec::new();
    if let Some(id) = ids.id.as_deref() {
        attributes.push(("id", id));
    }
    if let Some(target_id) = ids.target_id.as_deref() {
        attributes.push(("targetId", target_id));
    }
    attributes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written<F>(build: F) -> String
    where
        F: FnOnce(&mut KmlWriter<Vec<u8>>) -> Result<()>,
    {
        let mut writer = KmlWriter::new(Vec::new());
        build(&mut writer).unwrap();
        String::from_utf8(writer.into_inner()).unwrap()
    }

    #[test]
    fn test_prefix_declared_once_per_scope() {
        let out = written(|w| {
            w.element("Placemark", &[], |w| {
                w.element("gx:Track", &[], |w| w.text_element("gx:coord", &[], "1 2 3"))?;
                w.element("gx:MultiTrack", &[], |_| Ok(()))
            })
        });

        assert_eq!(out.matches("xmlns:gx=").count(), 2);
        assert!(out.contains(r#"<gx:Track xmlns:gx="http://www.google.com/kml/ext/2.2">"#));
        assert!(out.contains("<gx:coord>1 2 3</gx:coord>"));
    }

    #[test]
    fn test_cdata_for_markup() {
        let out = written(|w| w.text_element("description", &[], "<b>x</b>"));
        assert!(out.contains("<![CDATA[<b>x</b>]]>"));
        assert!(!out.contains("&lt;"));
    }

    #[test]
    fn test_cdata_terminator_is_split() {
        let out = written(|w| w.text_element("description", &[], "<p>a]]>b</p>"));
        assert!(out.contains("<![CDATA[<p>a]]]]><![CDATA[>b</p>]]>"));
    }

    #[test]
    fn test_plain_text_is_escaped() {
        let out = written(|w| w.text_element("name", &[], "A & B"));
        assert!(out.contains("<name>A &amp; B</name>"));
    }

    #[test]
    fn test_defaults_are_suppressed() {
        let out = written(|w| {
            w.element("Link", &[], |w| {
                w.number("refreshInterval", 4.0, 4.0)?;
                w.flag("visibility", true, true)?;
                w.color("color", Color::WHITE, Color::WHITE)?;
                w.altitude_mode(AltitudeMode::ClampToGround)?;
                w.number("viewBoundScale", 0.5, 1.0)
            })
        });
        assert!(!out.contains("refreshInterval"));
        assert!(!out.contains("visibility"));
        assert!(!out.contains("color"));
        assert!(!out.contains("altitudeMode"));
        assert!(out.contains("<viewBoundScale>0.5</viewBoundScale>"));
    }

    #[test]
    fn test_seafloor_mode_uses_extension_name() {
        let out = written(|w| w.altitude_mode(AltitudeMode::ClampToSeaFloor));
        assert!(out.contains("<gx:altitudeMode"));
        assert!(out.contains(">clampToSeaFloor</gx:altitudeMode>"));
    }
}
