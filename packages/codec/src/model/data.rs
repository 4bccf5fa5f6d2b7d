//! Extended data and custom schemas.

use serde::Serialize;

use super::ObjectIds;

/// `<ExtendedData>`: untyped `<Data>` entries and typed `<SchemaData>` blocks.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExtendedData {
    pub data: Vec<Data>,
    pub schema_data: Vec<SchemaData>,
}

impl ExtendedData {
    /// Add an untyped entry. A named entry replaces an earlier one with the
    /// same name in place, as `SchemaData` fields do.
    pub fn insert_data(&mut self, data: Data) {
        let position = data.name.as_deref().and_then(|name| {
            self.data
                .iter()
                .position(|d| d.name.as_deref() == Some(name))
        });
        match position {
            Some(index) => self.data[index] = data,
            None => self.data.push(data),
        }
    }

    /// Look up an untyped entry by name.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&str> {
        self.data
            .iter()
            .find(|d| d.name.as_deref() == Some(name))
            .and_then(|d| d.value.as_deref())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty() && self.schema_data.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Data {
    #[serde(flatten)]
    pub ids: ObjectIds,
    pub name: Option<String>,
    pub display_name: Option<String>,
    pub value: Option<String>,
}

/// A value of a custom field: a single string or an array of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    TextList(Vec<String>),
}

impl FieldValue {
    /// Single value, or the first element of a list.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::TextList(values) => values.first().map(String::as_str),
        }
    }
}

/// `<SchemaData>`: values keyed by field name, unique within one instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SchemaData {
    #[serde(flatten)]
    pub ids: ObjectIds,
    pub schema_url: Option<String>,
    fields: Vec<(String, FieldValue)>,
}

impl SchemaData {
    #[must_use]
    pub fn new(ids: ObjectIds, schema_url: Option<String>) -> Self {
        Self {
            ids,
            schema_url,
            fields: Vec::new(),
        }
    }

    /// Set a field. An existing key keeps its position and gets the new value.
    pub fn insert(&mut self, key: impl Into<String>, value: FieldValue) {
        let key = key.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((key, value)),
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Fields in first-insertion order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// `<SimpleData name="..">` while it is being parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SimpleData {
    pub name: String,
    pub value: String,
}

/// `<gx:SimpleArrayData name="..">` while it is being parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SimpleArrayData {
    pub name: String,
    pub values: Vec<String>,
}

/// `<Schema>`: declares custom fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Schema {
    #[serde(flatten)]
    pub ids: ObjectIds,
    pub name: Option<String>,
    pub fields: Vec<SimpleField>,
}

/// `<SimpleField>`, or `<gx:SimpleArrayField>` when `array` is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SimpleField {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub field_type: Option<String>,
    pub display_name: Option<String>,
    pub array: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_data_insert_replaces_duplicate_key() {
        let mut data = SchemaData::default();
        data.insert("depth", FieldValue::Text("1".to_string()));
        data.insert("name", FieldValue::Text("a".to_string()));
        data.insert("depth", FieldValue::Text("2".to_string()));

        assert_eq!(data.len(), 2);
        assert_eq!(data.get("depth"), Some(&FieldValue::Text("2".to_string())));
        let keys: Vec<_> = data.fields().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["depth", "name"]);
    }

    #[test]
    fn test_field_value_as_text() {
        let list = FieldValue::TextList(vec!["x".to_string(), "y".to_string()]);
        assert_eq!(list.as_text(), Some("x"));
        assert_eq!(FieldValue::TextList(Vec::new()).as_text(), None);
    }

    #[test]
    fn test_extended_data_value_lookup() {
        let extended = ExtendedData {
            data: vec![Data {
                name: Some("holeNumber".to_string()),
                value: Some("1".to_string()),
                ..Data::default()
            }],
            schema_data: Vec::new(),
        };
        assert_eq!(extended.value("holeNumber"), Some("1"));
        assert_eq!(extended.value("par"), None);
    }

    #[test]
    fn test_insert_data_replaces_duplicate_name() {
        let entry = |name: Option<&str>, value: &str| Data {
            name: name.map(str::to_string),
            value: Some(value.to_string()),
            ..Data::default()
        };
        let mut extended = ExtendedData::default();
        extended.insert_data(entry(Some("par"), "3"));
        extended.insert_data(entry(Some("holeNumber"), "1"));
        extended.insert_data(entry(None, "a"));
        extended.insert_data(entry(None, "b"));
        extended.insert_data(entry(Some("par"), "4"));

        assert_eq!(extended.data.len(), 4);
        assert_eq!(extended.data[0].name.as_deref(), Some("par"));
        assert_eq!(extended.value("par"), Some("4"));
        assert_eq!(extended.value("holeNumber"), Some("1"));
    }
}
