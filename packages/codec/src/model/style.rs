//! Style selectors and sub-styles.

use serde::Serialize;

use super::enums::{ColorMode, DisplayMode, ItemIconState, ListItemType, StyleState};
use super::link::Link;
use super::region::Vec2;
use super::ObjectIds;
use crate::scalar::Color;

pub const DEFAULT_SCALE: f64 = 1.0;
pub const DEFAULT_LINE_WIDTH: f64 = 1.0;
pub const DEFAULT_MAX_SNIPPET_LINES: i32 = 2;

/// A `<Style>` or `<StyleMap>`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum StyleSelector {
    Style(Style),
    StyleMap(StyleMap),
}

impl StyleSelector {
    #[must_use]
    pub fn ids(&self) -> &ObjectIds {
        match self {
            Self::Style(style) => &style.ids,
            Self::StyleMap(map) => &map.ids,
        }
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.ids().id.as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Style {
    #[serde(flatten)]
    pub ids: ObjectIds,
    pub icon_style: Option<IconStyle>,
    pub label_style: Option<LabelStyle>,
    pub line_style: Option<LineStyle>,
    pub poly_style: Option<PolyStyle>,
    pub balloon_style: Option<BalloonStyle>,
    pub list_style: Option<ListStyle>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StyleMap {
    #[serde(flatten)]
    pub ids: ObjectIds,
    pub pairs: Vec<Pair>,
}

impl StyleMap {
    /// The pair for a given state, if present.
    #[must_use]
    pub fn pair(&self, key: StyleState) -> Option<&Pair> {
        self.pairs.iter().find(|p| p.key == key)
    }
}

/// One `<Pair>`: a state key and a style by reference or by value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Pair {
    #[serde(flatten)]
    pub ids: ObjectIds,
    pub key: StyleState,
    pub style_url: Option<String>,
    pub style: Option<Style>,
}

/// Sub-styles that carry `color` and `colorMode`.
pub trait HasColorAndMode {
    fn color_mut(&mut self) -> &mut Color;
    fn color_mode_mut(&mut self) -> &mut ColorMode;
}

macro_rules! color_style {
    ($($name:ident),+) => {
        $(
            impl HasColorAndMode for $name {
                fn color_mut(&mut self) -> &mut Color {
                    &mut self.color
                }

                fn color_mode_mut(&mut self) -> &mut ColorMode {
                    &mut self.color_mode
                }
            }
        )+
    };
}

color_style!(IconStyle, LabelStyle, LineStyle, PolyStyle);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IconStyle {
    #[serde(flatten)]
    pub ids: ObjectIds,
    pub color: Color,
    pub color_mode: ColorMode,
    pub scale: f64,
    pub heading: f64,
    pub icon: Option<Link>,
    pub hot_spot: Option<Vec2>,
}

impl Default for IconStyle {
    fn default() -> Self {
        Self {
            ids: ObjectIds::default(),
            color: Color::WHITE,
            color_mode: ColorMode::default(),
            scale: DEFAULT_SCALE,
            heading: 0.0,
            icon: None,
            hot_spot: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelStyle {
    #[serde(flatten)]
    pub ids: ObjectIds,
    pub color: Color,
    pub color_mode: ColorMode,
    pub scale: f64,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            ids: ObjectIds::default(),
            color: Color::WHITE,
            color_mode: ColorMode::default(),
            scale: DEFAULT_SCALE,
        }
    }
}

/// `<LineStyle>`; the `outer_*`, `physical_width` and `label_visibility`
/// fields are `gx` extensions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineStyle {
    #[serde(flatten)]
    pub ids: ObjectIds,
    pub color: Color,
    pub color_mode: ColorMode,
    pub width: f64,
    pub outer_color: Color,
    pub outer_width: f64,
    pub physical_width: f64,
    pub label_visibility: bool,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            ids: ObjectIds::default(),
            color: Color::WHITE,
            color_mode: ColorMode::default(),
            width: DEFAULT_LINE_WIDTH,
            outer_color: Color::WHITE,
            outer_width: 0.0,
            physical_width: 0.0,
            label_visibility: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolyStyle {
    #[serde(flatten)]
    pub ids: ObjectIds,
    pub color: Color,
    pub color_mode: ColorMode,
    pub fill: bool,
    pub outline: bool,
}

impl Default for PolyStyle {
    fn default() -> Self {
        Self {
            ids: ObjectIds::default(),
            color: Color::WHITE,
            color_mode: ColorMode::default(),
            fill: true,
            outline: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BalloonStyle {
    #[serde(flatten)]
    pub ids: ObjectIds,
    pub bg_color: Color,
    pub text_color: Color,
    pub text: Option<String>,
    pub display_mode: DisplayMode,
}

impl Default for BalloonStyle {
    fn default() -> Self {
        Self {
            ids: ObjectIds::default(),
            bg_color: Color::WHITE,
            text_color: Color::BLACK,
            text: None,
            display_mode: DisplayMode::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListStyle {
    #[serde(flatten)]
    pub ids: ObjectIds,
    pub list_item_type: ListItemType,
    pub bg_color: Color,
    pub item_icons: Vec<ItemIcon>,
    pub max_snippet_lines: i32,
}

impl Default for ListStyle {
    fn default() -> Self {
        Self {
            ids: ObjectIds::default(),
            list_item_type: ListItemType::default(),
            bg_color: Color::WHITE,
            item_icons: Vec::new(),
            max_snippet_lines: DEFAULT_MAX_SNIPPET_LINES,
        }
    }
}

/// `<ItemIcon>`; `state` is a space-separated list of keywords.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ItemIcon {
    #[serde(flatten)]
    pub ids: ObjectIds,
    pub states: Vec<ItemIconState>,
    pub href: Option<String>,
}
