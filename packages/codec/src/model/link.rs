//! Links to external resources and Atom metadata.

use serde::Serialize;

use super::enums::{RefreshMode, ViewRefreshMode};
use super::ObjectIds;

pub const DEFAULT_REFRESH_INTERVAL: f64 = 4.0;
pub const DEFAULT_VIEW_REFRESH_TIME: f64 = 4.0;
pub const DEFAULT_VIEW_BOUND_SCALE: f64 = 1.0;

/// Shape shared by `<Link>`, `<Icon>` and the legacy `<Url>`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Link {
    #[serde(flatten)]
    pub ids: ObjectIds,
    pub href: Option<String>,
    pub refresh_mode: RefreshMode,
    pub refresh_interval: f64,
    pub view_refresh_mode: ViewRefreshMode,
    pub view_refresh_time: f64,
    pub view_bound_scale: f64,
    pub view_format: Option<String>,
    pub http_query: Option<String>,
    /// `gx:x`, `gx:y`, `gx:w` and `gx:h`: the sprite frame of an icon
    /// palette, in pixels.
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Link {
    #[must_use]
    pub fn new(ids: ObjectIds) -> Self {
        Self {
            ids,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_href(href: impl Into<String>) -> Self {
        Self {
            href: Some(href.into()),
            ..Self::default()
        }
    }
}

impl Default for Link {
    fn default() -> Self {
        Self {
            ids: ObjectIds::default(),
            href: None,
            refresh_mode: RefreshMode::default(),
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
            view_refresh_mode: ViewRefreshMode::default(),
            view_refresh_time: DEFAULT_VIEW_REFRESH_TIME,
            view_bound_scale: DEFAULT_VIEW_BOUND_SCALE,
            view_format: None,
            http_query: None,
            x: 0.0,
            y: 0.0,
            w: 0.0,
            h: 0.0,
        }
    }
}

/// `<atom:link>`; every field is an attribute and `href` is required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AtomLink {
    pub href: String,
    pub rel: Option<String>,
    #[serde(rename = "type")]
    pub mime_type: Option<String>,
    pub hreflang: Option<String>,
    pub title: Option<String>,
    pub length: Option<String>,
}

/// `<atom:author>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Author {
    pub names: Vec<String>,
    pub uri: Option<String>,
    pub email: Option<String>,
}
