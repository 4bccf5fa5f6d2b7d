//! Node registry: which element names are composites, scalar leaves,
//! rich text, or skipped.
//!
//! Adding an element type means adding a registry entry; the parse engine
//! itself never changes.

mod config;
mod core;
mod types;

pub use config::{create_kml_registry, KML_REGISTRY};
pub use core::ElementRegistry;
pub use types::{Attribute, Attributes, Constructor};
