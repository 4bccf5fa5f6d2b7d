//! Document statistics shown by the `inspect` command.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::sync::LazyLock;

use console::style;
use regex::Regex;
use serde::Serialize;
use textwrap::{fill, Options};

use crate::config::TEXT_WRAP_WIDTH;
use crate::error::Result;
use crate::model::{Feature, Kml};

/// Markup tags inside descriptions, removed for plain-text output.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static MARKUP_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));

/// Counts and names collected from a parsed document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocumentSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    /// Feature count per element name.
    pub features: BTreeMap<String, usize>,
    /// Leaf geometries, with collections expanded.
    pub geometries: usize,
    pub styles: usize,
    pub schemas: usize,
    pub network_link_control: bool,
    /// Names of the root feature, or of its children when it is a container.
    pub top_level: Vec<String>,
    pub descriptions: Vec<Description>,
}

/// A feature description with markup removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Description {
    pub feature: String,
    pub text: String,
}

impl DocumentSummary {
    /// Walk every feature of the document.
    #[must_use]
    pub fn from_kml(kml: &Kml) -> Self {
        let mut summary = Self {
            hint: kml.hint.clone(),
            network_link_control: kml.network_link_control.is_some(),
            ..Self::default()
        };

        for feature in kml.features() {
            let kind = feature.element_name().trim_start_matches("gx:");
            *summary.features.entry(kind.to_string()).or_default() += 1;

            let common = feature.common();
            summary.styles += common.style_selectors.len();

            match feature {
                Feature::Placemark(placemark) => {
                    summary.geometries += placemark.geometry.as_ref().map_or(0, |g| g.leaf_count());
                }
                Feature::Document(document) => summary.schemas += document.schemas.len(),
                _ => {}
            }

            if let Some(description) = common.description.as_deref() {
                let text = plain_text(description);
                if !text.is_empty() {
                    summary.descriptions.push(Description {
                        feature: display_name(feature),
                        text,
                    });
                }
            }
        }

        if let Some(root) = &kml.feature {
            summary.top_level = if root.is_container() {
                root.children().iter().map(display_name).collect()
            } else {
                vec![display_name(root)]
            };
        }

        summary
    }

    /// Total number of features.
    #[must_use]
    pub fn feature_count(&self) -> usize {
        self.features.values().sum()
    }

    /// Human-readable report.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "{}", style("Features").bold());
        if self.features.is_empty() {
            let _ = writeln!(out, "  (none)");
        }
        for (kind, count) in &self.features {
            let _ = writeln!(out, "  {kind}: {}", style(count).cyan());
        }
        let _ = writeln!(out, "{} {}", style("Geometries:").bold(), self.geometries);
        let _ = writeln!(out, "{} {}", style("Styles:").bold(), self.styles);
        if self.schemas > 0 {
            let _ = writeln!(out, "{} {}", style("Schemas:").bold(), self.schemas);
        }
        if self.network_link_control {
            let _ = writeln!(out, "{}", style("Has NetworkLinkControl").yellow());
        }

        if !self.top_level.is_empty() {
            let _ = writeln!(out, "{}", style("Top level").bold());
            for name in &self.top_level {
                let _ = writeln!(out, "  - {}", style(name).green());
            }
        }

        if !self.descriptions.is_empty() {
            let _ = writeln!(out, "{}", style("Descriptions").bold());
            let options = Options::new(TEXT_WRAP_WIDTH)
                .initial_indent("    ")
                .subsequent_indent("    ");
            for description in &self.descriptions {
                let _ = writeln!(out, "  {}", style(&description.feature).green());
                let _ = writeln!(out, "{}", fill(&description.text, &options));
            }
        }

        out
    }

    /// # Errors
    /// Returns `JsonSerialization` if encoding fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// # Errors
    /// Returns `YamlSerialization` if encoding fails.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }
}

fn display_name(feature: &Feature) -> String {
    match feature.name() {
        Some(name) => name.to_string(),
        None => format!("<{}>", feature.element_name()),
    }
}

/// Drop markup and collapse whitespace.
fn plain_text(description: &str) -> String {
    let stripped = MARKUP_PATTERN.replace_all(description, " ");
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::KmlParser;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<kml xmlns="http://www.opengis.net/kml/2.2">
  <Document>
    <name>Sample</name>
    <Style id="s"><LineStyle><width>2</width></LineStyle></Style>
    <Placemark>
      <name>Dam</name>
      <description><![CDATA[<p>Central <b>square</b></p>]]></description>
      <Point><coordinates>4.89,52.37</coordinates></Point>
    </Placemark>
    <Folder>
      <Placemark>
        <MultiGeometry>
          <Point><coordinates>1,2</coordinates></Point>
          <LineString><coordinates>1,2 3,4</coordinates></LineString>
        </MultiGeometry>
      </Placemark>
    </Folder>
  </Document>
</kml>"##;

    fn sample() -> DocumentSummary {
        let kml = KmlParser::new().parse(SAMPLE.as_bytes()).unwrap();
        DocumentSummary::from_kml(&kml)
    }

    #[test]
    fn test_counts() {
        let summary = sample();
        assert_eq!(summary.features.get("Document"), Some(&1));
        assert_eq!(summary.features.get("Folder"), Some(&1));
        assert_eq!(summary.features.get("Placemark"), Some(&2));
        assert_eq!(summary.feature_count(), 4);
        assert_eq!(summary.geometries, 3);
        assert_eq!(summary.styles, 1);
        assert!(!summary.network_link_control);
    }

    #[test]
    fn test_top_level_names() {
        let summary = sample();
        assert_eq!(summary.top_level, vec!["Dam", "<Folder>"]);
    }

    #[test]
    fn test_description_markup_removed() {
        let summary = sample();
        assert_eq!(
            summary.descriptions,
            vec![Description {
                feature: "Dam".to_string(),
                text: "Central square".to_string(),
            }]
        );
    }

    #[test]
    fn test_text_report() {
        let text = sample().to_text();
        assert!(text.contains("Placemark: "));
        assert!(text.contains("Central square"));
        assert!(text.contains("Dam"));
    }

    #[test]
    fn test_json_report() {
        let json = sample().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["geometries"], 3);
        assert_eq!(value["features"]["Placemark"], 2);
        assert!(value.get("hint").is_none());
    }

    #[test]
    fn test_yaml_report() {
        let yaml = sample().to_yaml().unwrap();
        assert!(yaml.contains("geometries: 3"));
        assert!(yaml.contains("- Dam"));
    }

    #[test]
    fn test_empty_document() {
        let summary = DocumentSummary::from_kml(&Kml::default());
        assert_eq!(summary.feature_count(), 0);
        assert!(summary.top_level.is_empty());
        assert!(summary.to_text().contains("(none)"));
    }
}
