//! Types for the node registry.

use crate::error::{KmlError, Result};
use crate::model::{Node, ObjectIds};
use crate::scalar::{parse_f64, parse_i64, KmlToken};

/// One attribute of a start tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Name as written, including any prefix.
    pub qualified: String,
    /// Name without prefix.
    pub local: String,
    /// Unescaped value.
    pub value: String,
}

impl Attribute {
    #[must_use]
    pub fn new(qualified: impl Into<String>, value: impl Into<String>) -> Self {
        let qualified = qualified.into();
        let local = qualified
            .rsplit_once(':')
            .map_or(qualified.as_str(), |(_, local)| local)
            .to_string();
        Self {
            qualified,
            local,
            value: value.into(),
        }
    }
}

/// Attributes of a start tag, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    items: Vec<Attribute>,
}

impl Attributes {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, attribute: Attribute) {
        self.items.push(attribute);
    }

    /// Value by local name.
    #[must_use]
    pub fn get(&self, local: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|a| a.local == local)
            .map(|a| a.value.as_str())
    }

    /// Owned value by local name.
    #[must_use]
    pub fn string(&self, local: &str) -> Option<String> {
        self.get(local).map(str::to_string)
    }

    /// Value that must be present.
    ///
    /// # Errors
    /// Returns `MissingAttribute` naming the element when absent.
    pub fn required(&self, element: &str, local: &str) -> Result<String> {
        self.string(local).ok_or_else(|| KmlError::MissingAttribute {
            element: element.to_string(),
            attribute: local.to_string(),
        })
    }

    /// Float value, or `fallback` when absent or unreadable.
    #[must_use]
    pub fn f64_or(&self, local: &str, fallback: f64) -> f64 {
        self.get(local).and_then(parse_f64).unwrap_or(fallback)
    }

    /// Integer value, or `fallback` when absent or unreadable.
    #[must_use]
    pub fn i32_or(&self, local: &str, fallback: i32) -> i32 {
        self.get(local)
            .and_then(parse_i64)
            .and_then(|v| i32::try_from(v).ok())
            .unwrap_or(fallback)
    }

    /// Keyword value, or the enum's default.
    #[must_use]
    pub fn token<T: KmlToken>(&self, local: &str) -> T {
        self.get(local).map(T::from_token).unwrap_or_default()
    }

    /// `id` and `targetId`.
    #[must_use]
    pub fn object_ids(&self) -> ObjectIds {
        ObjectIds {
            id: self.string("id"),
            target_id: self.string("targetId"),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.items.iter()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<Attribute> for Attributes {
    fn from_iter<I: IntoIterator<Item = Attribute>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

/// Builds the node for a start tag from its attributes.
///
/// Malformed attribute values are coerced to defaults; only a missing
/// required attribute is an error.
pub type Constructor = fn(&Attributes) -> Result<Node>;
