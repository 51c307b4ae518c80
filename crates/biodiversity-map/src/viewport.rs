//! Driving the map widget's viewport.

use tracing::trace;

use crate::geo::GeoPoint;

/// The parts of a map widget the view state drives.
pub trait MapHandle {
    /// Center the map and set its zoom, animating if the widget does.
    fn set_view(&mut self, center: GeoPoint, zoom: f64);
}

/// Forwards a center to the map only when its value changed.
///
/// Zoom rides along with a recenter but never causes one, so a zoom the
/// visitor adjusted by hand survives any update that keeps the center.
#[derive(Debug, Clone, Default)]
pub struct RecenterGate {
    last_center: Option<GeoPoint>,
}

impl RecenterGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls `set_view` if `center` differs from the last one sent.
    /// Returns whether the map was recentered.
    pub fn sync<M: MapHandle + ?Sized>(&mut self, map: &mut M, center: GeoPoint, zoom: f64) -> bool {
        if self.last_center == Some(center) {
            return false;
        }
        trace!(lat = center.lat, lng = center.lng, zoom, "Recentering map");
        self.last_center = Some(center);
        map.set_view(center, zoom);
        true
    }
}
