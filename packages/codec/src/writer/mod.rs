//! Serializer: walks a document tree and emits pretty-printed KML.
//!
//! Elements are written in stored order. Fields equal to their documented
//! default are omitted, so parsing the output yields an equal tree.

mod feature;
mod geometry;
mod other;
mod style;
mod xml;

use std::io::Write;

use crate::config::KML_NAMESPACE;
use crate::error::Result;
use crate::model::Kml;
use xml::KmlWriter;

/// Serialize a document to bytes.
///
/// # Errors
/// Returns `Serialize` if the XML writer fails.
pub fn serialize(kml: &Kml) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    write_kml(kml, &mut out)?;
    Ok(out)
}

/// Serialize a document into any sink.
///
/// # Errors
/// Returns `Serialize` or `Io` when the sink fails.
pub fn write_kml<W: Write>(kml: &Kml, sink: W) -> Result<()> {
    let mut writer = KmlWriter::new(sink);
    writer.declaration()?;
    writer.kml(kml)?;
    writer.bytes(b"\n")?;

    tracing::debug!("Serialized KML document");
    Ok(())
}

impl<W: Write> KmlWriter<W> {
    pub(crate) fn kml(&mut self, kml: &Kml) -> Result<()> {
        let mut attributes = vec![("xmlns", KML_NAMESPACE)];
        if let Some(hint) = kml.hint.as_deref() {
            attributes.push(("hint", hint));
        }
        self.element("kml", &attributes, |w| {
            if let Some(control) = &kml.network_link_control {
                w.network_link_control(control)?;
            }
            match &kml.feature {
                Some(feature) => w.feature(feature),
                None => Ok(()),
            }
        })
    }
}
