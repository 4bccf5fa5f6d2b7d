//! Parse stack engine: turns start/text/end events into a document tree.

use quick_xml::escape::escape;

use crate::config::XmlNamespace;
use crate::error::{KmlError, Result};
use crate::model::{AddressElement, Kml, Node, Patch};
use crate::registry::{Attributes, ElementRegistry};
use crate::resolver::{assign_scalar, attach};
use crate::scalar::{coerce, ScalarValue};

/// Element name as delivered by the event source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementName {
    pub namespace: XmlNamespace,
    /// Name without prefix; registry lookups use this.
    pub local: String,
    /// Name as written in the document.
    pub qualified: String,
}

impl ElementName {
    #[must_use]
    pub fn new(namespace: XmlNamespace, qualified: impl Into<String>) -> Self {
        let qualified = qualified.into();
        let local = qualified
            .rsplit_once(':')
            .map_or(qualified.as_str(), |(_, local)| local)
            .to_string();
        Self {
            namespace,
            local,
            qualified,
        }
    }

    /// Unprefixed name in the KML namespace.
    #[must_use]
    pub fn kml(local: &str) -> Self {
        Self::new(XmlNamespace::Kml, local)
    }
}

/// An open composite element.
#[derive(Debug)]
struct Frame {
    name: String,
    node: Node,
}

/// Open rich-text element whose markup is captured as text.
#[derive(Debug)]
struct Verbatim {
    name: String,
    /// Nested elements of the same name, still open.
    depth: usize,
}

/// Per-parse context.
///
/// One engine serves exactly one document: feed it events, then call
/// [`ParseEngine::finish`]. The first error is terminal.
#[derive(Debug)]
pub struct ParseEngine<'r> {
    registry: &'r ElementRegistry,
    strict: bool,
    stack: Vec<Frame>,
    buffer: String,
    verbatim: Option<Verbatim>,
    ignore_depth: usize,
    root: Option<Kml>,
}

impl<'r> ParseEngine<'r> {
    #[must_use]
    pub fn new(registry: &'r ElementRegistry, strict: bool) -> Self {
        Self {
            registry,
            strict,
            stack: Vec::new(),
            buffer: String::new(),
            verbatim: None,
            ignore_depth: 0,
            root: None,
        }
    }

    /// Handle a start tag.
    ///
    /// # Errors
    /// `UnsupportedElement` for an unknown element in strict mode, or the
    /// constructor's `MissingAttribute`.
    pub fn start(&mut self, name: &ElementName, attributes: &Attributes) -> Result<()> {
        if self.ignore_depth > 0 {
            self.ignore_depth += 1;
            return Ok(());
        }

        if let Some(verbatim) = self.verbatim.as_mut() {
            if verbatim.name == name.qualified {
                verbatim.depth += 1;
            }
            self.buffer.push('<');
            self.buffer.push_str(&name.qualified);
            for attribute in attributes.iter() {
                self.buffer.push(' ');
                self.buffer.push_str(&attribute.qualified);
                self.buffer.push_str("=\"");
                self.buffer.push_str(&escape(attribute.value.as_str()));
                self.buffer.push('"');
            }
            self.buffer.push('>');
            return Ok(());
        }

        self.buffer.clear();

        match &name.namespace {
            XmlNamespace::Foreign(uri) => {
                tracing::debug!(element = %name.qualified, namespace = %uri, "Skipping foreign element");
                self.ignore_depth = 1;
                return Ok(());
            }
            XmlNamespace::Xal => {
                self.stack.push(Frame {
                    name: name.qualified.clone(),
                    node: Node::Address(AddressElement {
                        name: name.local.clone(),
                        attributes: attributes
                            .iter()
                            .map(|a| (a.qualified.clone(), a.value.clone()))
                            .collect(),
                        ..AddressElement::default()
                    }),
                });
                return Ok(());
            }
            _ => {}
        }

        let local = name.local.as_str();
        if self.registry.should_skip(local) {
            tracing::debug!(element = %name.qualified, "Skipping element");
            self.ignore_depth = 1;
        } else if let Some(constructor) = self.registry.constructor(local) {
            tracing::trace!(element = %name.qualified, "Constructing node");
            let node = constructor(attributes)?;
            self.stack.push(Frame {
                name: name.qualified.clone(),
                node,
            });
        } else if self.registry.is_rich_text(local) {
            self.verbatim = Some(Verbatim {
                name: name.qualified.clone(),
                depth: 0,
            });
        } else if self.registry.scalar_kind(local).is_none() {
            if self.strict {
                return Err(KmlError::UnsupportedElement {
                    element: name.qualified.clone(),
                    context: self.stack.last().map(|frame| frame.name.clone()),
                });
            }
            tracing::debug!(element = %name.qualified, "Ignoring unsupported element");
            self.ignore_depth = 1;
        }

        Ok(())
    }

    /// Handle character data, including CDATA content.
    pub fn text(&mut self, text: &str) {
        if self.ignore_depth == 0 {
            self.buffer.push_str(text);
        }
    }

    /// Handle an end tag.
    ///
    /// # Errors
    /// `UnexpectedElement` when the tag does not close the open frame,
    /// `UnsupportedRelationship` when the parent refuses the element, and
    /// `MissingElement` when something other than `kml` is the root.
    pub fn end(&mut self, name: &ElementName) -> Result<()> {
        if self.ignore_depth > 0 {
            self.ignore_depth -= 1;
            return Ok(());
        }

        if let Some(verbatim) = self.verbatim.as_mut() {
            if verbatim.name == name.qualified {
                if verbatim.depth == 0 {
                    self.verbatim = None;
                    let text = ScalarValue::Text(self.buffer.trim().to_string());
                    self.buffer.clear();
                    return self.assign(name, &text);
                }
                verbatim.depth -= 1;
            }
            self.buffer.push_str("</");
            self.buffer.push_str(&name.qualified);
            self.buffer.push('>');
            return Ok(());
        }

        let local = name.local.as_str();
        let result = if name.namespace == XmlNamespace::Xal || self.registry.has_constructor(local)
        {
            self.close_composite(name)
        } else if let Some(kind) = self.registry.scalar_kind(local) {
            let value = coerce(kind, &self.buffer);
            self.assign(name, &value)
        } else {
            Err(KmlError::UnexpectedElement {
                expected: self.stack.last().map(|frame| frame.name.clone()),
                found: name.qualified.clone(),
            })
        };

        self.buffer.clear();
        result
    }

    /// Complete the parse.
    ///
    /// # Errors
    /// `MissingElement("kml")` unless a `kml` root was completed.
    pub fn finish(self) -> Result<Kml> {
        self.root
            .ok_or_else(|| KmlError::MissingElement("kml".to_string()))
    }

    fn close_composite(&mut self, name: &ElementName) -> Result<()> {
        let Some(mut frame) = self.stack.pop() else {
            return Err(KmlError::UnexpectedElement {
                expected: None,
                found: name.qualified.clone(),
            });
        };

        if frame.name != name.qualified {
            return Err(KmlError::UnexpectedElement {
                expected: Some(frame.name),
                found: name.qualified.clone(),
            });
        }

        frame.node.absorb_text(self.buffer.trim());

        let Some(parent) = self.stack.last_mut() else {
            return match frame.node {
                Node::Kml(kml) => {
                    self.root = Some(kml);
                    Ok(())
                }
                _ => Err(KmlError::MissingElement("kml".to_string())),
            };
        };

        match attach(&mut parent.node, &name.local, frame.node) {
            Ok(()) => Ok(()),
            Err(child) => match &mut parent.node {
                Node::Change(change) => {
                    tracing::debug!(element = %name.qualified, "Keeping element as a Change patch");
                    change.patches.push(Patch::new(name.local.clone(), child));
                    Ok(())
                }
                _ => Err(KmlError::UnsupportedRelationship {
                    parent: parent.name.clone(),
                    child: name.qualified.clone(),
                }),
            },
        }
    }

    fn assign(&mut self, name: &ElementName, value: &ScalarValue) -> Result<()> {
        let Some(parent) = self.stack.last_mut() else {
            return Err(KmlError::MissingElement("kml".to_string()));
        };

        if assign_scalar(&mut parent.node, &name.local, value) {
            Ok(())
        } else {
            Err(KmlError::UnsupportedRelationship {
                parent: parent.name.clone(),
                child: name.qualified.clone(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Feature, Geometry};
    use crate::registry::{Attribute, KML_REGISTRY};
    use crate::scalar::Coordinate;

    fn open(engine: &mut ParseEngine<'_>, name: &str) {
        engine
            .start(&ElementName::kml(name), &Attributes::new())
            .unwrap();
    }

    fn close(engine: &mut ParseEngine<'_>, name: &str) {
        engine.end(&ElementName::kml(name)).unwrap();
    }

    fn leaf(engine: &mut ParseEngine<'_>, name: &str, text: &str) {
        open(engine, name);
        engine.text(text);
        close(engine, name);
    }

    #[test]
    fn test_builds_placemark_with_point() {
        let mut engine = ParseEngine::new(&KML_REGISTRY, true);
        open(&mut engine, "kml");
        open(&mut engine, "Placemark");
        leaf(&mut engine, "name", "Home");
        open(&mut engine, "Point");
        leaf(&mut engine, "coordinates", " 4.9,52.3,0 ");
        close(&mut engine, "Point");
        close(&mut engine, "Placemark");
        close(&mut engine, "kml");

        let kml = engine.finish().unwrap();
        let Some(Feature::Placemark(placemark)) = kml.feature else {
            panic!("expected a placemark");
        };
        assert_eq!(placemark.common.name.as_deref(), Some("Home"));
        let Some(Geometry::Point(point)) = placemark.geometry else {
            panic!("expected a point");
        };
        assert_eq!(
            point.coordinates,
            Some(Coordinate::with_altitude(4.9, 52.3, 0.0))
        );
    }

    #[test]
    fn test_description_captures_nested_markup() {
        let mut engine = ParseEngine::new(&KML_REGISTRY, true);
        open(&mut engine, "kml");
        open(&mut engine, "Placemark");
        open(&mut engine, "description");
        engine.text(" Visit ");
        let attributes: Attributes = [Attribute::new("href", "a&b")].into_iter().collect();
        engine.start(&ElementName::kml("a"), &attributes).unwrap();
        engine.text("here");
        close(&mut engine, "a");
        close(&mut engine, "description");
        close(&mut engine, "Placemark");
        close(&mut engine, "kml");

        let kml = engine.finish().unwrap();
        let feature = kml.feature.unwrap();
        assert_eq!(
            feature.common().description.as_deref(),
            Some("Visit <a href=\"a&amp;b\">here</a>")
        );
    }

    #[test]
    fn test_strict_rejects_unknown_element() {
        let mut engine = ParseEngine::new(&KML_REGISTRY, true);
        open(&mut engine, "kml");
        open(&mut engine, "Placemark");
        let err = engine
            .start(&ElementName::kml("Bogus"), &Attributes::new())
            .unwrap_err();
        assert!(matches!(
            err,
            KmlError::UnsupportedElement { ref element, context: Some(ref ctx) }
                if element == "Bogus" && ctx == "Placemark"
        ));
    }

    #[test]
    fn test_lenient_skips_unknown_subtree() {
        let mut engine = ParseEngine::new(&KML_REGISTRY, false);
        open(&mut engine, "kml");
        open(&mut engine, "Placemark");
        open(&mut engine, "Bogus");
        leaf(&mut engine, "name", "ignored");
        close(&mut engine, "Bogus");
        leaf(&mut engine, "name", "kept");
        close(&mut engine, "Placemark");
        close(&mut engine, "kml");

        let kml = engine.finish().unwrap();
        assert_eq!(kml.feature.unwrap().name(), Some("kept"));
    }

    #[test]
    fn test_foreign_namespace_is_skipped_in_strict_mode() {
        let mut engine = ParseEngine::new(&KML_REGISTRY, true);
        open(&mut engine, "kml");
        open(&mut engine, "Document");
        let foreign = ElementName::new(XmlNamespace::Foreign("urn:x".to_string()), "x:thing");
        engine.start(&foreign, &Attributes::new()).unwrap();
        open(&mut engine, "Placemark");
        close(&mut engine, "Placemark");
        engine.end(&foreign).unwrap();
        close(&mut engine, "Document");
        close(&mut engine, "kml");

        let kml = engine.finish().unwrap();
        assert_eq!(kml.features().len(), 1);
    }

    #[test]
    fn test_mismatched_end_tag() {
        let mut engine = ParseEngine::new(&KML_REGISTRY, true);
        open(&mut engine, "kml");
        open(&mut engine, "Folder");
        let err = engine.end(&ElementName::kml("Document")).unwrap_err();
        assert!(matches!(
            err,
            KmlError::UnexpectedElement { expected: Some(ref e), ref found }
                if e == "Folder" && found == "Document"
        ));
    }

    #[test]
    fn test_unsupported_relationship() {
        let mut engine = ParseEngine::new(&KML_REGISTRY, false);
        open(&mut engine, "kml");
        open(&mut engine, "Folder");
        open(&mut engine, "Point");
        let err = engine.end(&ElementName::kml("Point")).unwrap_err();
        assert!(matches!(
            err,
            KmlError::UnsupportedRelationship { ref parent, ref child }
                if parent == "Folder" && child == "Point"
        ));
    }

    #[test]
    fn test_change_keeps_unattachable_children() {
        let mut engine = ParseEngine::new(&KML_REGISTRY, true);
        open(&mut engine, "kml");
        open(&mut engine, "NetworkLinkControl");
        open(&mut engine, "Update");
        open(&mut engine, "Change");
        let attributes: Attributes = [Attribute::new("targetId", "pm1")].into_iter().collect();
        engine
            .start(&ElementName::kml("Placemark"), &attributes)
            .unwrap();
        leaf(&mut engine, "name", "Renamed");
        close(&mut engine, "Placemark");
        close(&mut engine, "Change");
        close(&mut engine, "Update");
        close(&mut engine, "NetworkLinkControl");
        close(&mut engine, "kml");

        let kml = engine.finish().unwrap();
        let update = kml.network_link_control.unwrap().update.unwrap();
        let crate::model::UpdateOperation::Change(change) = &update.operations[0] else {
            panic!("expected a change");
        };
        assert_eq!(change.patches.len(), 1);
        assert_eq!(change.patches[0].element, "Placemark");
        let Node::Feature(patch) = &change.patches[0].node else {
            panic!("expected a feature patch");
        };
        assert_eq!(patch.common().ids.target_id.as_deref(), Some("pm1"));
    }

    #[test]
    fn test_root_must_be_kml() {
        let mut engine = ParseEngine::new(&KML_REGISTRY, true);
        open(&mut engine, "Placemark");
        let err = engine.end(&ElementName::kml("Placemark")).unwrap_err();
        assert!(matches!(err, KmlError::MissingElement(ref e) if e == "kml"));

        let engine = ParseEngine::new(&KML_REGISTRY, true);
        assert!(matches!(engine.finish(), Err(KmlError::MissingElement(_))));
    }

    #[test]
    fn test_xal_elements_build_address_tree() {
        let xal = |name: &str| ElementName::new(XmlNamespace::Xal, format!("xal:{name}"));
        let mut engine = ParseEngine::new(&KML_REGISTRY, true);
        open(&mut engine, "kml");
        open(&mut engine, "Placemark");
        engine
            .start(&xal("AddressDetails"), &Attributes::new())
            .unwrap();
        engine.start(&xal("Country"), &Attributes::new()).unwrap();
        engine
            .start(&xal("CountryName"), &Attributes::new())
            .unwrap();
        engine.text("Netherlands");
        engine.end(&xal("CountryName")).unwrap();
        engine.end(&xal("Country")).unwrap();
        engine.end(&xal("AddressDetails")).unwrap();
        close(&mut engine, "Placemark");
        close(&mut engine, "kml");

        let kml = engine.finish().unwrap();
        let feature = kml.feature.unwrap();
        let details = feature.common().address_details.as_ref().unwrap();
        assert_eq!(details.name, "AddressDetails");
        assert_eq!(details.text, None);
        let country_name = &details.children[0].children[0];
        assert_eq!(country_name.name, "CountryName");
        assert_eq!(country_name.text.as_deref(), Some("Netherlands"));
    }
}
