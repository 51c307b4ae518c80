//! Responsive zoom selection.

use crate::params::DEFAULT_ZOOM;

/// Viewports narrower than this are treated as mobile.
pub const MOBILE_BREAKPOINT_PX: f64 = 640.0;

/// What mobile clients get instead of [`DEFAULT_ZOOM`].
pub const MOBILE_DEFAULT_ZOOM: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeviceClass {
    #[default]
    Desktop,
    Mobile,
}

impl DeviceClass {
    /// Classifies a viewport by its width in CSS pixels.
    pub fn from_width(width: f64) -> Self {
        if width < MOBILE_BREAKPOINT_PX {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }
}

/// The zoom to hand the map.
///
/// Mobile swaps in [`MOBILE_DEFAULT_ZOOM`] only for the generic default; an
/// explicit zoom such as a search's 20 is always honored.
pub fn effective_zoom(requested: f64, device: DeviceClass) -> f64 {
    match device {
        DeviceClass::Mobile if requested == DEFAULT_ZOOM => MOBILE_DEFAULT_ZOOM,
        _ => requested,
    }
}
