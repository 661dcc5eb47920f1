use foundation::geo::LngLat;

use crate::regions::region_center;

pub const ZOOM_MIN: f64 = 0.8;
pub const ZOOM_MAX: f64 = 8.0;
pub const DEFAULT_ZOOM: f64 = 1.0;
/// Continental center of the contiguous US.
pub const DEFAULT_CENTER: LngLat = LngLat::new(-98.5795, 39.8283);
/// Zoom applied when a region filter focuses one state.
pub const REGION_ZOOM: f64 = 3.5;

/// Source of the current viewport position.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ViewportMode {
    Default,
    RegionFocused,
    UserAdjusted,
}

/// Snapshot of the visible map region.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub zoom: f64,
    pub center: LngLat,
}

impl Viewport {
    pub const fn default_view() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            center: DEFAULT_CENTER,
        }
    }
}

/// Single writer of viewport state.
///
/// Everything else reads a `Viewport` snapshot per render pass; nothing
/// outside this type mutates zoom or center. Lives for the life of the view,
/// no terminal state.
#[derive(Debug)]
pub struct ViewportStateManager {
    viewport: Viewport,
    mode: ViewportMode,
}

impl Default for ViewportStateManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewportStateManager {
    pub fn new() -> Self {
        Self {
            viewport: Viewport::default_view(),
            mode: ViewportMode::Default,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn zoom(&self) -> f64 {
        self.viewport.zoom
    }

    pub fn mode(&self) -> ViewportMode {
        self.mode
    }

    /// Back to the continental overview. Always succeeds.
    pub fn reset_to_default(&mut self) {
        self.viewport = Viewport::default_view();
        self.mode = ViewportMode::Default;
    }

    /// Jump to a region's representative center at the region-view zoom.
    ///
    /// An unknown code is a no-op, not an error: the viewport keeps its
    /// pre-call value and mode.
    pub fn focus_region(&mut self, code: &str) {
        let Some(center) = region_center(code) else {
            tracing::debug!(code, "region focus miss, viewport unchanged");
            return;
        };
        self.viewport = Viewport {
            zoom: REGION_ZOOM,
            center,
        };
        self.mode = ViewportMode::RegionFocused;
    }

    /// Commit the final position of a completed pan/zoom gesture.
    ///
    /// Called once per gesture end, not per intermediate frame.
    pub fn apply_pan_zoom(&mut self, zoom: f64, center: LngLat) {
        self.viewport = Viewport {
            zoom: clamp_zoom(zoom),
            center,
        };
        self.mode = ViewportMode::UserAdjusted;
    }

    /// Discrete zoom step from the current level, e.g. from toolbar buttons
    /// or a captured wheel tick. Center is kept.
    pub fn step_zoom(&mut self, multiplier: f64) {
        self.viewport.zoom = clamp_zoom(self.viewport.zoom * multiplier);
        self.mode = ViewportMode::UserAdjusted;
    }
}

fn clamp_zoom(zoom: f64) -> f64 {
    zoom.clamp(ZOOM_MIN, ZOOM_MAX)
}
