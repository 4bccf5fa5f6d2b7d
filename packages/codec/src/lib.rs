//! KML Codec - Read and write KML 2.2 documents as a typed document tree.
//!
//! This crate parses KML (and zipped KMZ) into a tree of typed features,
//! geometries and styles, and serializes such a tree back into KML that
//! parses to an equal tree.
//!
//! # Example
//!
//! ```
//! use kml_codec::{parse, serialize};
//!
//! let xml = br#"<kml xmlns="http://www.opengis.net/kml/2.2">
//!   <Placemark><name>Dam</name><Point><coordinates>4.89,52.37</coordinates></Point></Placemark>
//! </kml>"#;
//!
//! let kml = parse(xml).unwrap();
//! assert_eq!(kml.placemarks()[0].common.name.as_deref(), Some("Dam"));
//!
//! let again = parse(&serialize(&kml).unwrap()).unwrap();
//! assert_eq!(again, kml);
//! ```
//!
//! # Architecture
//!
//! The codec is organized into several modules:
//!
//! - [`config`]: Namespaces, file formats and other constants
//! - [`error`]: Error types and Result alias
//! - [`scalar`]: Text to typed value coercion (colors, coordinates, dates)
//! - [`model`]: The document tree
//! - [`registry`]: Element name dispatch tables
//! - [`resolver`]: Parent/child attachment and scalar field assignment
//! - [`parser`]: Streaming parse-stack engine over quick-xml events
//! - [`writer`]: Pretty-printing serializer
//! - [`container`]: KMZ archive reading and writing
//! - [`summary`]: Document statistics
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod container;
pub mod error;
pub mod model;
pub mod parser;
pub mod registry;
pub mod resolver;
pub mod scalar;
pub mod summary;
pub mod writer;

use std::path::Path;

// Re-export main functions
pub use writer::{serialize, write_kml};

// Re-export commonly used items
pub use error::{KmlError, Result};
pub use model::Kml;
pub use parser::KmlParser;

/// Parse a KML document with a strict parser.
///
/// # Errors
/// Returns the first error encountered; see [`KmlError`].
pub fn parse(xml: &[u8]) -> Result<Kml> {
    KmlParser::new().parse(xml)
}

/// Parse a `.kml` or `.kmz` file with a strict parser.
///
/// # Errors
/// See [`KmlParser::parse_file`].
pub fn parse_file(path: &Path) -> Result<Kml> {
    KmlParser::new().parse_file(path)
}
