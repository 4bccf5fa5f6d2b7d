//! Streaming parser: quick-xml events driving the parse stack engine.
//!
//! Unknown elements fail the parse in strict mode (the default) and are
//! skipped with their subtree in lenient mode. Elements bound to a namespace
//! outside the KML family are always skipped.

mod engine;
mod events;

use std::path::Path;

pub use engine::{ElementName, ParseEngine};

use crate::container::{extract_document, read_source};
use crate::error::Result;
use crate::model::Kml;
use crate::registry::KML_REGISTRY;

/// Parser configuration.
///
/// # Examples
/// ```
/// use kml_codec::KmlParser;
///
/// let kml = KmlParser::lenient()
///     .parse(b"<kml><Placemark><Bogus/><name>A</name></Placemark></kml>")
///     .unwrap();
/// assert_eq!(kml.feature.unwrap().name(), Some("A"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KmlParser {
    strict: bool,
}

impl Default for KmlParser {
    fn default() -> Self {
        Self { strict: true }
    }
}

impl KmlParser {
    /// Strict parser.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn lenient() -> Self {
        Self { strict: false }
    }

    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    #[must_use]
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Parse a KML document.
    ///
    /// # Errors
    /// Returns the first error the event source or the engine reports.
    pub fn parse(&self, xml: &[u8]) -> Result<Kml> {
        let mut engine = ParseEngine::new(&KML_REGISTRY, self.strict);
        events::drive(&mut engine, xml)?;
        engine.finish()
    }

    /// Parse a plain document or a KMZ archive.
    ///
    /// # Errors
    /// `FailedToReadSource` for an archive without a document, otherwise as
    /// [`KmlParser::parse`].
    pub fn parse_bytes(&self, bytes: &[u8], is_archive: bool) -> Result<Kml> {
        if is_archive {
            self.parse(&extract_document(bytes)?)
        } else {
            self.parse(bytes)
        }
    }

    /// Parse a `.kml` or `.kmz` file.
    ///
    /// # Errors
    /// `UnsupportedFormat` for other extensions, otherwise as
    /// [`KmlParser::parse_bytes`].
    pub fn parse_file(&self, path: &Path) -> Result<Kml> {
        let (bytes, format) = read_source(path)?;
        tracing::debug!(path = %path.display(), ?format, "Parsing source");
        self.parse_bytes(&bytes, format.is_archive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KmlError;
    use crate::model::{AbstractView, Feature, Geometry, StyleSelector};
    use crate::scalar::{Color, Coordinate};

    #[test]
    fn test_parse_namespaced_document() {
        let xml = br#"<?xml version="1.0" encoding="UTF-8"?>
<kml xmlns="http://www.opengis.net/kml/2.2" xmlns:gx="http://www.google.com/kml/ext/2.2">
  <Document id="root">
    <name>Trip</name>
    <Style id="red"><LineStyle><color>ff0000ff</color><gx:physicalWidth>3</gx:physicalWidth></LineStyle></Style>
    <Placemark>
      <styleUrl>#red</styleUrl>
      <LineString><coordinates>1,2 3,4,5</coordinates></LineString>
    </Placemark>
  </Document>
</kml>"#;

        let kml = KmlParser::new().parse(xml).unwrap();
        let Some(Feature::Document(document)) = &kml.feature else {
            panic!("expected a document");
        };
        assert_eq!(document.common.ids.id.as_deref(), Some("root"));
        assert_eq!(document.common.name.as_deref(), Some("Trip"));

        let Some(StyleSelector::Style(style)) = kml.find_style("#red") else {
            panic!("expected the shared style");
        };
        let line = style.line_style.as_ref().unwrap();
        assert_eq!(line.color, Color::new(0xff, 0x00, 0x00, 0xff));
        assert_eq!(line.physical_width, 3.0);

        let placemark = kml.placemarks()[0];
        let Some(Geometry::LineString(line)) = &placemark.geometry else {
            panic!("expected a line string");
        };
        assert_eq!(
            line.coordinates,
            vec![
                Coordinate::new(1.0, 2.0),
                Coordinate::with_altitude(3.0, 4.0, 5.0)
            ]
        );
    }

    #[test]
    fn test_parse_cdata_description() {
        let xml = br#"<kml><Placemark><description><![CDATA[<b>bold</b>]]></description></Placemark></kml>"#;
        let kml = KmlParser::new().parse(xml).unwrap();
        assert_eq!(
            kml.feature.unwrap().common().description.as_deref(),
            Some("<b>bold</b>")
        );
    }

    #[test]
    fn test_parse_escaped_description() {
        let xml = br#"<kml><Placemark><description>&lt;i&gt;x&lt;/i&gt; &amp; y</description></Placemark></kml>"#;
        let kml = KmlParser::new().parse(xml).unwrap();
        assert_eq!(
            kml.feature.unwrap().common().description.as_deref(),
            Some("<i>x</i> & y")
        );
    }

    #[test]
    fn test_strict_and_lenient_modes() {
        let xml = b"<kml><Folder><Bogus><name>x</name></Bogus><name>F</name></Folder></kml>";

        let err = KmlParser::new().parse(xml).unwrap_err();
        assert!(matches!(err, KmlError::UnsupportedElement { .. }));

        let kml = KmlParser::new().strict(false).parse(xml).unwrap();
        assert_eq!(kml.feature.unwrap().name(), Some("F"));
    }

    #[test]
    fn test_metadata_is_skipped() {
        let xml = b"<kml><Document><Metadata><anything/></Metadata></Document></kml>";
        assert!(KmlParser::new().parse(xml).is_ok());
    }

    #[test]
    fn test_missing_root() {
        let err = KmlParser::new().parse(b"").unwrap_err();
        assert!(matches!(err, KmlError::MissingElement(ref e) if e == "kml"));

        let err = KmlParser::new()
            .parse(b"<Placemark><name>x</name></Placemark>")
            .unwrap_err();
        assert!(matches!(err, KmlError::MissingElement(_)));
    }

    #[test]
    fn test_missing_required_attribute() {
        let xml = br#"<kml xmlns:atom="http://www.w3.org/2005/Atom"><Placemark><atom:link/></Placemark></kml>"#;
        let err = KmlParser::new().parse(xml).unwrap_err();
        assert!(matches!(
            err,
            KmlError::MissingAttribute { ref attribute, .. } if attribute == "href"
        ));
    }

    #[test]
    fn test_malformed_xml_is_internal_fault() {
        let err = KmlParser::new()
            .parse(b"<kml><Placemark></Folder></kml>")
            .unwrap_err();
        assert!(matches!(err, KmlError::InternalFault(_)));
    }

    #[test]
    fn test_tour_field_of_view_and_icon_frame() {
        let xml = br#"<kml xmlns:gx="http://www.google.com/kml/ext/2.2"><Document>
  <LookAt><range>500</range><gx:horizFov>85</gx:horizFov></LookAt>
  <Style><IconStyle><Icon>
    <href>palette.png</href><gx:x>32</gx:x><gx:y>64</gx:y><gx:w>32</gx:w><gx:h>16</gx:h>
  </Icon></IconStyle></Style>
  <Placemark><Camera><gx:horizFov>60</gx:horizFov></Camera></Placemark>
</Document></kml>"#;

        let kml = KmlParser::new().parse(xml).unwrap();
        let features = kml.features();
        let Some(AbstractView::LookAt(look_at)) = &features[0].common().view else {
            panic!("expected a look-at");
        };
        assert_eq!(look_at.horiz_fov, 85.0);
        let Some(AbstractView::Camera(camera)) = &features[1].common().view else {
            panic!("expected a camera");
        };
        assert_eq!(camera.horiz_fov, 60.0);

        let Some(StyleSelector::Style(style)) = features[0].common().style_selectors.first() else {
            panic!("expected an inline style");
        };
        let icon = style.icon_style.as_ref().unwrap().icon.as_ref().unwrap();
        assert_eq!((icon.x, icon.y, icon.w, icon.h), (32.0, 64.0, 32.0, 16.0));
    }

    #[test]
    fn test_self_closing_elements() {
        let kml = KmlParser::new()
            .parse(b"<kml><Document><Folder/><Placemark/></Document></kml>")
            .unwrap();
        assert_eq!(kml.features().len(), 3);
    }
}
