use std::cell::Cell;
use std::rc::Rc;

use crate::state::ViewportStateManager;

/// Fraction of the map surface that must be on screen before page-global
/// input is captured.
pub const CAPTURE_VISIBILITY_THRESHOLD: f64 = 0.1;

/// Wheel multiplier for a zoom-out tick (`delta_y > 0`).
pub const WHEEL_ZOOM_OUT: f64 = 0.9;
/// Wheel multiplier for a zoom-in tick.
pub const WHEEL_ZOOM_IN: f64 = 1.1;

/// Keys the gate understands. Anything else passes through.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KeyInput {
    /// Fit key, bound to `0`: reset to the default view.
    Fit,
    /// Clear any point/cluster selection.
    Escape,
    Other,
}

impl KeyInput {
    pub fn from_name(name: &str) -> Self {
        match name {
            "0" => KeyInput::Fit,
            "Escape" => KeyInput::Escape,
            _ => KeyInput::Other,
        }
    }
}

/// What a captured event asks the owning view to do.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum GateAction {
    ZoomStep(f64),
    ResetView,
    ClearSelection,
}

/// Gate verdict for one page-global event.
///
/// `PassThrough` means the event must reach the page untouched (no
/// preventDefault equivalent); the caller does nothing with it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum GateOutcome {
    Captured(GateAction),
    PassThrough,
}

/// Shared count of installed page-global listeners.
///
/// One registry per page. The count exists so tests (and debug asserts) can
/// prove that no listener outlives its view and that two overlapping views
/// are visible as two installs.
#[derive(Debug, Default)]
pub struct ListenerRegistry {
    installed: Cell<usize>,
}

impl ListenerRegistry {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn installed(&self) -> usize {
        self.installed.get()
    }
}

/// Scoped handle for one view's page-global wheel/keyboard registration.
///
/// Acquired when the surface becomes visible enough to capture, released on
/// drop. Never cloned; a view owns at most one.
#[derive(Debug)]
struct ListenerHandle {
    registry: Rc<ListenerRegistry>,
}

impl ListenerHandle {
    fn acquire(registry: Rc<ListenerRegistry>) -> Self {
        registry.installed.set(registry.installed.get() + 1);
        Self { registry }
    }
}

impl Drop for ListenerHandle {
    fn drop(&mut self) {
        let n = self.registry.installed.get();
        debug_assert!(n > 0);
        self.registry.installed.set(n.saturating_sub(1));
    }
}

/// Decides whether page-global wheel/keyboard events belong to the map.
///
/// Driven by the surface's visibility signal (an intersection fraction).
/// While inactive every event passes through so the page scrolls normally;
/// while active, wheel ticks become zoom steps and the fit/escape keys are
/// intercepted. Dropping the gate releases its listener registration.
#[derive(Debug)]
pub struct InteractionGate {
    registry: Rc<ListenerRegistry>,
    handle: Option<ListenerHandle>,
    visible_fraction: f64,
}

impl InteractionGate {
    pub fn new(registry: Rc<ListenerRegistry>) -> Self {
        Self {
            registry,
            handle: None,
            visible_fraction: 0.0,
        }
    }

    /// Feed the latest intersection fraction for the map surface.
    ///
    /// Crossing the threshold acquires the listener handle; dropping below
    /// it releases the handle immediately.
    pub fn set_visible_fraction(&mut self, fraction: f64) {
        self.visible_fraction = fraction;
        let should_capture = fraction >= CAPTURE_VISIBILITY_THRESHOLD;
        if should_capture && self.handle.is_none() {
            tracing::debug!(fraction, "map surface visible, capturing input");
            self.handle = Some(ListenerHandle::acquire(Rc::clone(&self.registry)));
        } else if !should_capture && self.handle.is_some() {
            tracing::debug!(fraction, "map surface hidden, releasing input");
            self.handle = None;
        }
    }

    pub fn is_capture_active(&self) -> bool {
        self.handle.is_some()
    }

    /// Gate one wheel event. `delta_y > 0` zooms out, otherwise in.
    pub fn on_wheel(&self, delta_y: f64) -> GateOutcome {
        if !self.is_capture_active() {
            return GateOutcome::PassThrough;
        }
        let multiplier = if delta_y > 0.0 {
            WHEEL_ZOOM_OUT
        } else {
            WHEEL_ZOOM_IN
        };
        GateOutcome::Captured(GateAction::ZoomStep(multiplier))
    }

    /// Gate one key press.
    pub fn on_key(&self, key: KeyInput) -> GateOutcome {
        if !self.is_capture_active() {
            return GateOutcome::PassThrough;
        }
        match key {
            KeyInput::Fit => GateOutcome::Captured(GateAction::ResetView),
            KeyInput::Escape => GateOutcome::Captured(GateAction::ClearSelection),
            KeyInput::Other => GateOutcome::PassThrough,
        }
    }
}

/// Applies a captured zoom action to the single-writer viewport manager.
///
/// `ResetView` is handled here; `ClearSelection` belongs to whoever owns the
/// selection and is returned to the caller as `false` (not applied).
pub fn apply_gate_action(action: GateAction, manager: &mut ViewportStateManager) -> bool {
    match action {
        GateAction::ZoomStep(multiplier) => {
            manager.step_zoom(multiplier);
            true
        }
        GateAction::ResetView => {
            manager.reset_to_default();
            true
        }
        GateAction::ClearSelection => false,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        apply_gate_action, GateAction, GateOutcome, InteractionGate, KeyInput, ListenerRegistry,
        WHEEL_ZOOM_IN, WHEEL_ZOOM_OUT,
    };
    use crate::state::{ViewportStateManager, DEFAULT_ZOOM};

    #[test]
    fn inactive_gate_passes_everything_through() {
        let registry = ListenerRegistry::new();
        let gate = InteractionGate::new(registry);
        assert!(!gate.is_capture_active());
        assert_eq!(gate.on_wheel(120.0), GateOutcome::PassThrough);
        assert_eq!(gate.on_key(KeyInput::Fit), GateOutcome::PassThrough);
    }

    #[test]
    fn wheel_over_invisible_map_changes_no_zoom() {
        let registry = ListenerRegistry::new();
        let mut gate = InteractionGate::new(registry);
        gate.set_visible_fraction(0.05);
        let mut manager = ViewportStateManager::new();

        if let GateOutcome::Captured(action) = gate.on_wheel(120.0) {
            apply_gate_action(action, &mut manager);
        }
        assert_eq!(manager.viewport().zoom, DEFAULT_ZOOM);
    }

    #[test]
    fn visibility_threshold_toggles_capture() {
        let registry = ListenerRegistry::new();
        let mut gate = InteractionGate::new(registry.clone());
        gate.set_visible_fraction(0.09);
        assert!(!gate.is_capture_active());
        gate.set_visible_fraction(0.1);
        assert!(gate.is_capture_active());
        assert_eq!(registry.installed(), 1);
        gate.set_visible_fraction(0.0);
        assert!(!gate.is_capture_active());
        assert_eq!(registry.installed(), 0);
    }

    #[test]
    fn wheel_direction_maps_to_zoom_step() {
        let registry = ListenerRegistry::new();
        let mut gate = InteractionGate::new(registry);
        gate.set_visible_fraction(1.0);
        assert_eq!(
            gate.on_wheel(3.0),
            GateOutcome::Captured(GateAction::ZoomStep(WHEEL_ZOOM_OUT))
        );
        assert_eq!(
            gate.on_wheel(-3.0),
            GateOutcome::Captured(GateAction::ZoomStep(WHEEL_ZOOM_IN))
        );
    }

    #[test]
    fn fit_and_escape_are_the_only_captured_keys() {
        let registry = ListenerRegistry::new();
        let mut gate = InteractionGate::new(registry);
        gate.set_visible_fraction(1.0);
        assert_eq!(
            gate.on_key(KeyInput::from_name("0")),
            GateOutcome::Captured(GateAction::ResetView)
        );
        assert_eq!(
            gate.on_key(KeyInput::from_name("Escape")),
            GateOutcome::Captured(GateAction::ClearSelection)
        );
        assert_eq!(gate.on_key(KeyInput::from_name("a")), GateOutcome::PassThrough);
    }

    #[test]
    fn dropping_the_gate_releases_its_listener() {
        let registry = ListenerRegistry::new();
        {
            let mut gate = InteractionGate::new(registry.clone());
            gate.set_visible_fraction(0.5);
            assert_eq!(registry.installed(), 1);
        }
        assert_eq!(registry.installed(), 0);
    }

    #[test]
    fn overlapping_views_hold_independent_handles() {
        let registry = ListenerRegistry::new();
        let mut a = InteractionGate::new(registry.clone());
        let mut b = InteractionGate::new(registry.clone());
        a.set_visible_fraction(0.5);
        b.set_visible_fraction(0.5);
        assert_eq!(registry.installed(), 2);
        drop(a);
        assert_eq!(registry.installed(), 1);
        b.set_visible_fraction(0.0);
        assert_eq!(registry.installed(), 0);
    }
}
