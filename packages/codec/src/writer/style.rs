//! Style selectors and sub-styles.

use std::io::Write;

use super::xml::{object_attributes, KmlWriter};
use crate::error::Result;
use crate::model::style::{DEFAULT_LINE_WIDTH, DEFAULT_MAX_SNIPPET_LINES, DEFAULT_SCALE};
use crate::model::{
    BalloonStyle, ColorMode, IconStyle, ItemIcon, LabelStyle, LineStyle, ListStyle, Pair,
    PolyStyle, Style, StyleSelector,
};
use crate::scalar::{Color, KmlToken};

impl<W: Write> KmlWriter<W> {
    pub(crate) fn style_selector(&mut self, selector: &StyleSelector) -> Result<()> {
        match selector {
            StyleSelector::Style(style) => self.style(style),
            StyleSelector::StyleMap(map) => {
                self.element("StyleMap", &object_attributes(&map.ids), |w| {
                    for pair in &map.pairs {
                        w.pair(pair)?;
                    }
                    Ok(())
                })
            }
        }
    }

    pub(crate) fn style(&mut self, style: &Style) -> Result<()> {
        self.element("Style", &object_attributes(&style.ids), |w| {
            if let Some(s) = &style.icon_style {
                w.icon_style(s)?;
            }
            if let Some(s) = &style.label_style {
                w.label_style(s)?;
            }
            if let Some(s) = &style.line_style {
                w.line_style(s)?;
            }
            if let Some(s) = &style.poly_style {
                w.poly_style(s)?;
            }
            if let Some(s) = &style.balloon_style {
                w.balloon_style(s)?;
            }
            if let Some(s) = &style.list_style {
                w.list_style(s)?;
            }
            Ok(())
        })
    }

    pub(crate) fn pair(&mut self, pair: &Pair) -> Result<()> {
        self.element("Pair", &object_attributes(&pair.ids), |w| {
            w.text_element("key", &[], pair.key.as_token())?;
            w.opt_text("styleUrl", pair.style_url.as_deref())?;
            match &pair.style {
                Some(style) => w.style(style),
                None => Ok(()),
            }
        })
    }

    fn color_and_mode(&mut self, color: Color, mode: &ColorMode) -> Result<()> {
        self.color("color", color, Color::WHITE)?;
        self.token("colorMode", mode)
    }

    pub(crate) fn icon_style(&mut self, style: &IconStyle) -> Result<()> {
        self.element("IconStyle", &object_attributes(&style.ids), |w| {
            w.color_and_mode(style.color, &style.color_mode)?;
            w.number("scale", style.scale, DEFAULT_SCALE)?;
            w.number("heading", style.heading, 0.0)?;
            if let Some(icon) = &style.icon {
                w.link("Icon", icon)?;
            }
            match &style.hot_spot {
                Some(hot_spot) => w.vec2("hotSpot", hot_spot),
                None => Ok(()),
            }
        })
    }

    pub(crate) fn label_style(&mut self, style: &LabelStyle) -> Result<()> {
        self.element("LabelStyle", &object_attributes(&style.ids), |w| {
            w.color_and_mode(style.color, &style.color_mode)?;
            w.number("scale", style.scale, DEFAULT_SCALE)
        })
    }

    pub(crate) fn line_style(&mut self, style: &LineStyle) -> Result<()> {
        self.element("LineStyle", &object_attributes(&style.ids), |w| {
            w.color_and_mode(style.color, &style.color_mode)?;
            w.number("width", style.width, DEFAULT_LINE_WIDTH)?;
            w.color("gx:outerColor", style.outer_color, Color::WHITE)?;
            w.number("gx:outerWidth", style.outer_width, 0.0)?;
            w.number("gx:physicalWidth", style.physical_width, 0.0)?;
            w.flag("gx:labelVisibility", style.label_visibility, false)
        })
    }

    pub(crate) fn poly_style(&mut self, style: &PolyStyle) -> Result<()> {
        self.element("PolyStyle", &object_attributes(&style.ids), |w| {
            w.color_and_mode(style.color, &style.color_mode)?;
            w.flag("fill", style.fill, true)?;
            w.flag("outline", style.outline, true)
        })
    }

    pub(crate) fn balloon_style(&mut self, style: &BalloonStyle) -> Result<()> {
        self.element("BalloonStyle", &object_attributes(&style.ids), |w| {
            w.color("bgColor", style.bg_color, Color::WHITE)?;
            w.color("textColor", style.text_color, Color::BLACK)?;
            w.opt_text("text", style.text.as_deref())?;
            w.token("displayMode", &style.display_mode)
        })
    }

    pub(crate) fn list_style(&mut self, style: &ListStyle) -> Result<()> {
        self.element("ListStyle", &object_attributes(&style.ids), |w| {
            w.token("listItemType", &style.list_item_type)?;
            w.color("bgColor", style.bg_color, Color::WHITE)?;
            for icon in &style.item_icons {
                w.item_icon(icon)?;
            }
            w.integer(
                "maxSnippetLines",
                style.max_snippet_lines,
                DEFAULT_MAX_SNIPPET_LINES,
            )
        })
    }

    pub(crate) fn item_icon(&mut self, icon: &ItemIcon) -> Result<()> {
        self.element("ItemIcon", &object_attributes(&icon.ids), |w| {
            if !icon.states.is_empty() {
                let states: Vec<&str> = icon.states.iter().map(KmlToken::as_token).collect();
                w.text_element("state", &[], &states.join(" "))?;
            }
            w.opt_text("href", icon.href.as_deref())
        })
    }
}
