//! Error types for the KML codec.
//!
//! Every parse step returns `Result`; the first error aborts the parse and no
//! partial document is handed back.

use thiserror::Error;

/// Main error type for the codec library.
#[derive(Debug, Error)]
pub enum KmlError {
    /// Source file extension is neither `.kml` nor `.kmz`.
    #[error("Unsupported file format: '{0}'. Expected .kml or .kmz")]
    UnsupportedFormat(String),

    /// Source could not be read, or an archive holds no readable document.
    #[error("Failed to read {source_name}: {reason}")]
    FailedToReadSource { source_name: String, reason: String },

    /// Element with no constructor, no scalar meaning and no rich-text role.
    #[error("Unsupported element <{element}>{}", .context.as_ref().map(|c| format!(" in <{c}>")).unwrap_or_default())]
    UnsupportedElement {
        element: String,
        context: Option<String>,
    },

    /// Parent refused the completed child.
    #[error("Element <{parent}> cannot hold <{child}>")]
    UnsupportedRelationship { parent: String, child: String },

    /// Closing tag does not match the open frame.
    #[error("Unexpected closing tag </{found}>{}", .expected.as_ref().map(|e| format!(", expected </{e}>")).unwrap_or_default())]
    UnexpectedElement {
        expected: Option<String>,
        found: String,
    },

    /// Required attribute absent on an element.
    #[error("Missing required attribute '{attribute}' on <{element}>")]
    MissingAttribute { element: String, attribute: String },

    /// Required element absent from the document.
    #[error("Missing required element <{0}>")]
    MissingElement(String),

    /// Failure inside the XML event source.
    #[error("XML event source failed: {0}")]
    InternalFault(#[from] quick_xml::Error),

    /// Output sink rejected serialized XML.
    #[error("Failed to write KML: {0}")]
    Serialize(#[source] quick_xml::Error),

    /// KMZ archive could not be created.
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON report encoding failed.
    #[error("JSON serialization failed: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    /// YAML report encoding failed.
    #[error("YAML serialization failed: {0}")]
    YamlSerialization(#[from] serde_yaml_ng::Error),

    /// One or more files did not survive a parse/serialize/parse cycle.
    #[error("{failed} of {total} file(s) failed the round-trip check")]
    CheckFailed { failed: usize, total: usize },
}

/// Result type alias for codec operations.
pub type Result<T> = std::result::Result<T, KmlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_format_display() {
        let err = KmlError::UnsupportedFormat("gpx".to_string());
        assert!(err.to_string().contains("'gpx'"));
        assert!(err.to_string().contains(".kmz"));
    }

    #[test]
    fn test_unsupported_element_with_context() {
        let err = KmlError::UnsupportedElement {
            element: "Bogus".to_string(),
            context: Some("Placemark".to_string()),
        };
        assert_eq!(err.to_string(), "Unsupported element <Bogus> in <Placemark>");
    }

    #[test]
    fn test_unsupported_element_without_context() {
        let err = KmlError::UnsupportedElement {
            element: "Bogus".to_string(),
            context: None,
        };
        assert_eq!(err.to_string(), "Unsupported element <Bogus>");
    }

    #[test]
    fn test_unexpected_element_display() {
        let err = KmlError::UnexpectedElement {
            expected: Some("Folder".to_string()),
            found: "Document".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unexpected closing tag </Document>, expected </Folder>"
        );
    }

    #[test]
    fn test_relationship_display() {
        let err = KmlError::UnsupportedRelationship {
            parent: "Point".to_string(),
            child: "Style".to_string(),
        };
        assert_eq!(err.to_string(), "Element <Point> cannot hold <Style>");
    }
}
