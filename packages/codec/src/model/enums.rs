//! Keyword enums used across the document model.
//!
//! The first case of each enum is its KML default.

use crate::scalar::kml_enum;

kml_enum! {
    /// How altitude values are interpreted.
    pub enum AltitudeMode {
        ClampToGround => "clampToGround",
        RelativeToGround => "relativeToGround",
        Absolute => "absolute",
        ClampToSeaFloor => "clampToSeaFloor",
        RelativeToSeaFloor => "relativeToSeaFloor",
    }
}

impl AltitudeMode {
    /// Seafloor modes only exist in the `gx` vocabulary.
    #[must_use]
    pub fn is_extension(self) -> bool {
        matches!(self, Self::ClampToSeaFloor | Self::RelativeToSeaFloor)
    }
}

kml_enum! {
    pub enum ColorMode {
        Normal => "normal",
        Random => "random",
    }
}

kml_enum! {
    pub enum RefreshMode {
        OnChange => "onChange",
        OnInterval => "onInterval",
        OnExpire => "onExpire",
    }
}

kml_enum! {
    pub enum ViewRefreshMode {
        Never => "never",
        OnStop => "onStop",
        OnRequest => "onRequest",
        OnRegion => "onRegion",
    }
}

kml_enum! {
    pub enum DisplayMode {
        Standard => "default",
        Hide => "hide",
    }
}

kml_enum! {
    pub enum ListItemType {
        Check => "check",
        RadioFolder => "radioFolder",
        CheckOffOnly => "checkOffOnly",
        CheckHideChildren => "checkHideChildren",
    }
}

kml_enum! {
    pub enum ItemIconState {
        Open => "open",
        Closed => "closed",
        Error => "error",
        Fetching0 => "fetching0",
        Fetching1 => "fetching1",
        Fetching2 => "fetching2",
    }
}

kml_enum! {
    /// Key of a `StyleMap` pair.
    pub enum StyleState {
        Normal => "normal",
        Highlight => "highlight",
    }
}

kml_enum! {
    pub enum Units {
        Fraction => "fraction",
        Pixels => "pixels",
        InsetPixels => "insetPixels",
    }
}

kml_enum! {
    pub enum GridOrigin {
        LowerLeft => "lowerLeft",
        UpperLeft => "upperLeft",
    }
}

kml_enum! {
    pub enum Shape {
        Rectangle => "rectangle",
        Cylinder => "cylinder",
        Sphere => "sphere",
    }
}

kml_enum! {
    pub enum FlyToMode {
        Bounce => "bounce",
        Smooth => "smooth",
    }
}

kml_enum! {
    pub enum PlayMode {
        Pause => "pause",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::KmlToken;

    #[test]
    fn test_altitude_mode_tokens() {
        assert_eq!(
            AltitudeMode::from_token("relativeToSeaFloor"),
            AltitudeMode::RelativeToSeaFloor
        );
        assert!(AltitudeMode::RelativeToSeaFloor.is_extension());
        assert!(!AltitudeMode::Absolute.is_extension());
        assert_eq!(AltitudeMode::from_token("sideways"), AltitudeMode::ClampToGround);
    }

    #[test]
    fn test_defaults_are_first_case() {
        assert_eq!(RefreshMode::default(), RefreshMode::OnChange);
        assert_eq!(ListItemType::default(), ListItemType::Check);
        assert_eq!(Units::default().as_token(), "fraction");
    }
}
