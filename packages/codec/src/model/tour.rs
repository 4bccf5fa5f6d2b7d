//! `<gx:Tour>` playlists.

use serde::Serialize;

use super::enums::{FlyToMode, PlayMode};
use super::update::Update;
use super::view::AbstractView;
use super::ObjectIds;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Playlist {
    #[serde(flatten)]
    pub ids: ObjectIds,
    pub primitives: Vec<TourPrimitive>,
}

/// One step of a tour, played in order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum TourPrimitive {
    FlyTo(FlyTo),
    Wait(Wait),
    AnimatedUpdate(AnimatedUpdate),
    TourControl(TourControl),
    SoundCue(SoundCue),
}

impl TourPrimitive {
    /// Seconds this step takes, where it declares one.
    #[must_use]
    pub fn duration(&self) -> f64 {
        match self {
            Self::FlyTo(fly_to) => fly_to.duration,
            Self::Wait(wait) => wait.duration,
            Self::AnimatedUpdate(update) => update.duration,
            Self::TourControl(_) | Self::SoundCue(_) => 0.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FlyTo {
    #[serde(flatten)]
    pub ids: ObjectIds,
    pub duration: f64,
    pub fly_to_mode: FlyToMode,
    pub view: Option<AbstractView>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Wait {
    #[serde(flatten)]
    pub ids: ObjectIds,
    pub duration: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnimatedUpdate {
    #[serde(flatten)]
    pub ids: ObjectIds,
    pub duration: f64,
    pub delayed_start: f64,
    pub update: Option<Update>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TourControl {
    #[serde(flatten)]
    pub ids: ObjectIds,
    pub play_mode: PlayMode,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SoundCue {
    #[serde(flatten)]
    pub ids: ObjectIds,
    pub href: Option<String>,
    pub delayed_start: f64,
}
