//! Configuration constants and validation functions for the codec.

use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

use crate::error::{KmlError, Result};

/// Default namespace of KML 2.2 documents.
pub const KML_NAMESPACE: &str = "http://www.opengis.net/kml/2.2";

/// Google extension namespace, bound to the `gx` prefix on output.
pub const GX_NAMESPACE: &str = "http://www.google.com/kml/ext/2.2";

/// Atom namespace, bound to the `atom` prefix on output.
pub const ATOM_NAMESPACE: &str = "http://www.w3.org/2005/Atom";

/// xAL address namespace, bound to the `xal` prefix on output.
pub const XAL_NAMESPACE: &str = "urn:oasis:names:tc:ciq:xsdschema:xAL:2.0";

/// Archive entry name used when writing KMZ files.
pub const ARCHIVE_DOCUMENT_NAME: &str = "doc.kml";

/// Text wrap width for CLI output.
pub const TEXT_WRAP_WIDTH: usize = 100;

/// Older KML namespaces, still accepted as the default vocabulary.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static LEGACY_KML_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^http://(earth\.google\.com|www\.opengis\.net)/kml/2\.[012]$")
        .expect("valid regex")
});

/// Namespaces the parser understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNamespace {
    /// KML itself, or an unprefixed element with no default namespace.
    Kml,
    /// Google extensions (`gx:`).
    Gx,
    /// Atom author and link (`atom:`).
    Atom,
    /// xAL address details (`xal:`).
    Xal,
    /// Anything else; such subtrees are skipped.
    Foreign(String),
}

impl XmlNamespace {
    /// Classify a namespace URI.
    ///
    /// # Examples
    /// ```
    /// use kml_codec::config::XmlNamespace;
    ///
    /// assert_eq!(XmlNamespace::from_uri("http://www.google.com/kml/ext/2.2"), XmlNamespace::Gx);
    /// assert_eq!(XmlNamespace::from_uri("http://earth.google.com/kml/2.1"), XmlNamespace::Kml);
    /// ```
    #[must_use]
    pub fn from_uri(uri: &str) -> Self {
        match uri {
            KML_NAMESPACE => Self::Kml,
            GX_NAMESPACE => Self::Gx,
            ATOM_NAMESPACE => Self::Atom,
            XAL_NAMESPACE => Self::Xal,
            other if LEGACY_KML_PATTERN.is_match(other) => Self::Kml,
            other => Self::Foreign(other.to_string()),
        }
    }

    /// Classify an undeclared prefix by its conventional name.
    #[must_use]
    pub fn from_prefix(prefix: &str) -> Self {
        match prefix {
            "kml" => Self::Kml,
            "gx" => Self::Gx,
            "atom" => Self::Atom,
            "xal" => Self::Xal,
            other => Self::Foreign(other.to_string()),
        }
    }

    /// Namespace URI for a prefix used by the serializer.
    #[must_use]
    pub fn uri_for_prefix(prefix: &str) -> Option<&'static str> {
        match prefix {
            "gx" => Some(GX_NAMESPACE),
            "atom" => Some(ATOM_NAMESPACE),
            "xal" => Some(XAL_NAMESPACE),
            _ => None,
        }
    }
}

/// Container format of a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Plain KML document.
    Kml,
    /// Zip archive holding a KML document.
    Kmz,
}

impl SourceFormat {
    /// Select the format from a file extension (case-insensitive).
    ///
    /// # Returns
    /// * `Ok(SourceFormat)` for `.kml` and `.kmz`
    /// * `Err(KmlError::UnsupportedFormat)` otherwise
    ///
    /// # Examples
    /// ```
    /// use kml_codec::config::SourceFormat;
    /// use std::path::Path;
    ///
    /// assert_eq!(SourceFormat::from_path(Path::new("a.KMZ")).unwrap(), SourceFormat::Kmz);
    /// assert!(SourceFormat::from_path(Path::new("a.gpx")).is_err());
    /// ```
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();

        if extension.eq_ignore_ascii_case("kml") {
            Ok(Self::Kml)
        } else if extension.eq_ignore_ascii_case("kmz") {
            Ok(Self::Kmz)
        } else {
            Err(KmlError::UnsupportedFormat(extension.to_string()))
        }
    }

    /// Whether the source must be unzipped first.
    #[must_use]
    pub fn is_archive(self) -> bool {
        self == Self::Kmz
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespace_from_uri() {
        assert_eq!(XmlNamespace::from_uri(KML_NAMESPACE), XmlNamespace::Kml);
        assert_eq!(XmlNamespace::from_uri(ATOM_NAMESPACE), XmlNamespace::Atom);
        assert_eq!(XmlNamespace::from_uri(XAL_NAMESPACE), XmlNamespace::Xal);
        assert_eq!(
            XmlNamespace::from_uri("http://earth.google.com/kml/2.0"),
            XmlNamespace::Kml
        );
        assert_eq!(
            XmlNamespace::from_uri("http://example.com/other"),
            XmlNamespace::Foreign("http://example.com/other".to_string())
        );
    }

    #[test]
    fn test_namespace_from_prefix() {
        assert_eq!(XmlNamespace::from_prefix("gx"), XmlNamespace::Gx);
        assert!(matches!(
            XmlNamespace::from_prefix("foo"),
            XmlNamespace::Foreign(_)
        ));
    }

    #[test]
    fn test_source_format_from_path() {
        assert_eq!(
            SourceFormat::from_path(Path::new("doc.kml")).unwrap(),
            SourceFormat::Kml
        );
        assert_eq!(
            SourceFormat::from_path(Path::new("DOC.Kmz")).unwrap(),
            SourceFormat::Kmz
        );
        assert!(SourceFormat::Kmz.is_archive());
        assert!(!SourceFormat::Kml.is_archive());
    }

    #[test]
    fn test_source_format_rejects_unknown() {
        let err = SourceFormat::from_path(Path::new("track.gpx")).unwrap_err();
        assert!(matches!(err, KmlError::UnsupportedFormat(ref ext) if ext == "gpx"));

        let err = SourceFormat::from_path(Path::new("noextension")).unwrap_err();
        assert!(matches!(err, KmlError::UnsupportedFormat(ref ext) if ext.is_empty()));
    }
}
