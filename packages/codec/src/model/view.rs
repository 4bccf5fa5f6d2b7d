//! Viewpoints and time primitives.

use chrono::TimeDelta;
use serde::Serialize;

use super::enums::AltitudeMode;
use super::ObjectIds;
use crate::scalar::{span_between, KmlDateTime};

/// A `<Camera>` or `<LookAt>`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum AbstractView {
    Camera(Camera),
    LookAt(LookAt),
}

impl AbstractView {
    #[must_use]
    pub fn ids(&self) -> &ObjectIds {
        match self {
            Self::Camera(camera) => &camera.ids,
            Self::LookAt(look_at) => &look_at.ids,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Camera {
    #[serde(flatten)]
    pub ids: ObjectIds,
    pub time: Option<TimePrimitive>,
    pub viewer_options: Option<ViewerOptions>,
    pub longitude: f64,
    pub latitude: f64,
    pub altitude: f64,
    pub heading: f64,
    pub tilt: f64,
    pub roll: f64,
    pub altitude_mode: AltitudeMode,
    /// `gx:horizFov`, recorded by tours; 0 when unset.
    pub horiz_fov: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LookAt {
    #[serde(flatten)]
    pub ids: ObjectIds,
    pub time: Option<TimePrimitive>,
    pub viewer_options: Option<ViewerOptions>,
    pub longitude: f64,
    pub latitude: f64,
    pub altitude: f64,
    pub heading: f64,
    pub tilt: f64,
    pub range: f64,
    pub altitude_mode: AltitudeMode,
    pub horiz_fov: f64,
}

/// `<gx:ViewerOptions>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViewerOptions {
    pub options: Vec<ViewerOption>,
}

/// `<gx:option name=".." enabled="..">`; `enabled` is written as `true`/`false`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViewerOption {
    pub name: String,
    pub enabled: bool,
}

/// A `<TimeStamp>` or `<TimeSpan>`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum TimePrimitive {
    TimeStamp(TimeStamp),
    TimeSpan(TimeSpan),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TimeStamp {
    #[serde(flatten)]
    pub ids: ObjectIds,
    pub when: Option<KmlDateTime>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TimeSpan {
    #[serde(flatten)]
    pub ids: ObjectIds,
    pub begin: Option<KmlDateTime>,
    pub end: Option<KmlDateTime>,
}

impl TimeSpan {
    /// Time between `begin` and `end`, if both are set.
    #[must_use]
    pub fn duration(&self) -> Option<TimeDelta> {
        span_between(self.begin.as_ref(), self.end.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_span_duration() {
        let span = TimeSpan {
            ids: ObjectIds::default(),
            begin: KmlDateTime::parse("2007-01-14T21:05:02Z"),
            end: KmlDateTime::parse("2007-01-14T21:06:02Z"),
        };
        assert_eq!(span.duration().map(|d| d.num_seconds()), Some(60));
    }

    #[test]
    fn test_open_ended_span_has_no_duration() {
        let span = TimeSpan {
            begin: KmlDateTime::parse("2007"),
            ..TimeSpan::default()
        };
        assert!(span.duration().is_none());
    }
}
