//! Namespace-aware event source over quick-xml.

use quick_xml::events::{BytesStart, Event};
use quick_xml::name::ResolveResult;
use quick_xml::NsReader;

use super::engine::{ElementName, ParseEngine};
use crate::config::XmlNamespace;
use crate::error::Result;
use crate::registry::{Attribute, Attributes};

/// Feed every event of `xml` to `engine`, stopping at the first error.
pub(super) fn drive(engine: &mut ParseEngine<'_>, xml: &[u8]) -> Result<()> {
    let mut reader = NsReader::from_reader(xml);
    reader.expand_empty_elements(true);

    let mut buf = Vec::new();
    loop {
        match reader.read_resolved_event_into(&mut buf)? {
            (namespace, Event::Start(start)) => {
                let name = ElementName::new(classify(&namespace), decode(start.name().as_ref()));
                let attributes = attributes(&start)?;
                engine.start(&name, &attributes)?;
            }
            (namespace, Event::End(end)) => {
                let name = ElementName::new(classify(&namespace), decode(end.name().as_ref()));
                engine.end(&name)?;
            }
            (_, Event::Text(text)) => engine.text(&text.unescape()?),
            (_, Event::CData(data)) => engine.text(&String::from_utf8_lossy(&data.into_inner())),
            (_, Event::Eof) => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}

fn classify(namespace: &ResolveResult<'_>) -> XmlNamespace {
    match namespace {
        ResolveResult::Bound(uri) => XmlNamespace::from_uri(&decode(uri.as_ref())),
        ResolveResult::Unbound => XmlNamespace::Kml,
        ResolveResult::Unknown(prefix) => XmlNamespace::from_prefix(&decode(prefix)),
    }
}

/// Attributes without namespace declarations.
fn attributes(start: &BytesStart<'_>) -> Result<Attributes> {
    let mut attributes = Attributes::new();
    for attribute in start.attributes() {
        let attribute = attribute.map_err(quick_xml::Error::from)?;
        if attribute.key.as_namespace_binding().is_some() {
            continue;
        }
        let value = attribute.unescape_value()?;
        attributes.push(Attribute::new(decode(attribute.key.as_ref()), value));
    }
    Ok(attributes)
}

fn decode(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
