use std::rc::Rc;

use cluster::group::{cluster as cluster_points, Cluster, ClusterId};
use cluster::params::ClusterParams;
use dataset::filter::FilterCriteria;
use dataset::point::GeoPoint;
use dataset::summary::Summary;
use foundation::geo::LngLat;
use viewport::gate::{
    apply_gate_action, GateOutcome, InteractionGate, KeyInput, ListenerRegistry, WHEEL_ZOOM_IN,
    WHEEL_ZOOM_OUT,
};
use viewport::state::{Viewport, ViewportMode, ViewportStateManager};

use crate::instructions::{marker_instructions, MarkerInstruction};

/// Everything one render pass hands to the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPass {
    pub viewport: Viewport,
    pub markers: Vec<MarkerInstruction>,
    pub summary: Summary,
}

#[derive(Debug)]
struct ClusterCache {
    revision: u64,
    filtered: Vec<GeoPoint>,
    clusters: Vec<Cluster>,
}

/// Owns the map's interactive state and runs the filter → cluster → LOD
/// pipeline.
///
/// Single-threaded and event-driven: every method runs synchronously in
/// response to one discrete event. Clustering is memoized by a revision
/// counter bumped on any input change, so repeated passes with unchanged
/// inputs reuse the previous partition.
#[derive(Debug)]
pub struct MapView {
    points: Vec<GeoPoint>,
    filter: FilterCriteria,
    params: ClusterParams,
    manager: ViewportStateManager,
    gate: InteractionGate,
    selected: Option<ClusterId>,
    revision: u64,
    cache: Option<ClusterCache>,
    recluster_passes: u64,
}

impl MapView {
    pub fn new(
        points: Vec<GeoPoint>,
        params: ClusterParams,
        registry: Rc<ListenerRegistry>,
    ) -> Self {
        Self {
            points,
            filter: FilterCriteria::default(),
            params,
            manager: ViewportStateManager::new(),
            gate: InteractionGate::new(registry),
            selected: None,
            revision: 0,
            cache: None,
            recluster_passes: 0,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.manager.viewport()
    }

    pub fn viewport_mode(&self) -> ViewportMode {
        self.manager.mode()
    }

    pub fn filter(&self) -> &FilterCriteria {
        &self.filter
    }

    pub fn selected(&self) -> Option<ClusterId> {
        self.selected
    }

    /// Recluster passes run so far; an instrumentation counter for tests and
    /// debugging.
    pub fn recluster_passes(&self) -> u64 {
        self.recluster_passes
    }

    /// Replace the active filter.
    ///
    /// Selecting a region code also focuses the viewport on that region;
    /// clearing a previously set code resets to the default view. Any other
    /// field change leaves the viewport alone.
    pub fn set_filter(&mut self, filter: FilterCriteria) {
        match (&self.filter.region_code, &filter.region_code) {
            (old, Some(new)) if old.as_deref() != Some(new.as_str()) => {
                self.manager.focus_region(new);
            }
            (Some(_), None) => self.manager.reset_to_default(),
            _ => {}
        }
        self.filter = filter;
        self.revision += 1;
    }

    pub fn set_points(&mut self, points: Vec<GeoPoint>) {
        self.points = points;
        self.revision += 1;
    }

    pub fn set_cluster_params(&mut self, params: ClusterParams) {
        self.params = params;
        self.revision += 1;
    }

    /// The current cluster partition, recomputing only if inputs changed.
    pub fn clusters(&mut self) -> &[Cluster] {
        self.ensure_cache();
        self.cache
            .as_ref()
            .map(|c| c.clusters.as_slice())
            .unwrap_or(&[])
    }

    /// One full render pass at the current zoom.
    ///
    /// An empty filtered set is a valid result: no markers, zero summary.
    pub fn render_pass(&mut self) -> RenderPass {
        self.ensure_cache();
        let viewport = self.manager.viewport();
        let Some(cache) = &self.cache else {
            return RenderPass {
                viewport,
                markers: Vec::new(),
                summary: Summary::default(),
            };
        };
        RenderPass {
            viewport,
            markers: marker_instructions(&cache.clusters, viewport.zoom),
            summary: Summary::of(&cache.filtered),
        }
    }

    /// Marker interaction: select a cluster and surface its member points to
    /// the detail-view collaborator. Unknown ids leave selection untouched.
    pub fn select_marker(&mut self, id: ClusterId) -> Option<Vec<GeoPoint>> {
        self.ensure_cache();
        let members = self
            .cache
            .as_ref()
            .and_then(|cache| cache.clusters.iter().find(|c| c.id == id))
            .map(|c| c.members.clone())?;
        self.selected = Some(id);
        Some(members)
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    // Toolbar callbacks.

    pub fn zoom_in(&mut self) {
        self.manager.step_zoom(WHEEL_ZOOM_IN);
    }

    pub fn zoom_out(&mut self) {
        self.manager.step_zoom(WHEEL_ZOOM_OUT);
    }

    pub fn reset_view(&mut self) {
        self.manager.reset_to_default();
    }

    /// Gesture-end commit from the map surface.
    pub fn commit_pan_zoom(&mut self, zoom: f64, center: LngLat) {
        self.manager.apply_pan_zoom(zoom, center);
    }

    // Page-global input, gated by surface visibility.

    pub fn set_visible_fraction(&mut self, fraction: f64) {
        self.gate.set_visible_fraction(fraction);
    }

    pub fn is_capture_active(&self) -> bool {
        self.gate.is_capture_active()
    }

    /// Returns true iff the event was captured (the page must not scroll).
    pub fn on_wheel(&mut self, delta_y: f64) -> bool {
        match self.gate.on_wheel(delta_y) {
            GateOutcome::Captured(action) => {
                if !apply_gate_action(action, &mut self.manager) {
                    self.selected = None;
                }
                true
            }
            GateOutcome::PassThrough => false,
        }
    }

    /// Returns true iff the key was captured.
    pub fn on_key(&mut self, key: KeyInput) -> bool {
        match self.gate.on_key(key) {
            GateOutcome::Captured(action) => {
                if !apply_gate_action(action, &mut self.manager) {
                    self.selected = None;
                }
                true
            }
            GateOutcome::PassThrough => false,
        }
    }

    fn ensure_cache(&mut self) {
        let fresh = matches!(&self.cache, Some(c) if c.revision == self.revision);
        if fresh {
            return;
        }
        let filtered = self.filter.apply(&self.points);
        let clusters = cluster_points(&filtered, &self.params);
        self.recluster_passes += 1;
        tracing::debug!(
            revision = self.revision,
            points = filtered.len(),
            clusters = clusters.len(),
            "recluster pass"
        );
        self.cache = Some(ClusterCache {
            revision: self.revision,
            filtered,
            clusters,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::MapView;
    use cluster::params::ClusterParams;
    use dataset::filter::FilterCriteria;
    use dataset::point::{GeoPoint, PointId};
    use dataset::summary::Summary;
    use foundation::geo::LngLat;
    use pretty_assertions::assert_eq;
    use viewport::gate::{KeyInput, ListenerRegistry};
    use viewport::state::{ViewportMode, DEFAULT_CENTER, DEFAULT_ZOOM, REGION_ZOOM};

    fn point(id: u64, lat: f64, lng: f64, region: &str, wage: f64) -> GeoPoint {
        GeoPoint {
            id: PointId(id),
            lat,
            lng,
            wage,
            member_count: 1_000,
            trade_code: "electrical".into(),
            region_code: region.into(),
            display_name: format!("p{id}"),
        }
    }

    fn fixture() -> Vec<GeoPoint> {
        vec![
            point(1, 40.7128, -74.0060, "NY", 65.5),
            point(2, 40.7133, -74.0065, "NY", 55.0),
            point(3, 41.8781, -87.6298, "IL", 58.75),
        ]
    }

    fn view() -> MapView {
        MapView::new(fixture(), ClusterParams::default(), ListenerRegistry::new())
    }

    fn region_filter(code: &str) -> FilterCriteria {
        FilterCriteria {
            region_code: Some(code.into()),
            ..Default::default()
        }
    }

    #[test]
    fn region_filter_focuses_and_clearing_resets() {
        let mut v = view();
        v.set_filter(region_filter("NY"));
        assert_eq!(v.viewport().zoom, REGION_ZOOM);

        v.set_filter(FilterCriteria::default());
        assert_eq!(v.viewport().zoom, DEFAULT_ZOOM);
        assert_eq!(v.viewport().center, DEFAULT_CENTER);
    }

    #[test]
    fn unknown_region_filter_keeps_the_viewport() {
        let mut v = view();
        let before = v.viewport();
        v.set_filter(region_filter("ZZ"));
        assert_eq!(v.viewport(), before);
        // The filter itself still applies: nothing matches region ZZ.
        assert!(v.render_pass().markers.is_empty());
    }

    #[test]
    fn render_pass_clusters_and_summarizes_the_filtered_set() {
        let mut v = view();
        v.set_filter(region_filter("NY"));
        let pass = v.render_pass();
        // The two NY points are within the default tolerance.
        assert_eq!(pass.markers.len(), 1);
        assert_eq!(pass.summary.point_count, 2);
        assert_eq!(pass.summary.average_wage, 60.25);
        assert_eq!(pass.summary.total_members, 2_000);
    }

    #[test]
    fn empty_result_is_valid_not_an_error() {
        let mut v = view();
        v.set_filter(FilterCriteria {
            min_wage: Some(500.0),
            ..Default::default()
        });
        let pass = v.render_pass();
        assert!(pass.markers.is_empty());
        assert_eq!(pass.summary, Summary::default());
    }

    #[test]
    fn clustering_is_memoized_per_revision() {
        let mut v = view();
        v.render_pass();
        v.render_pass();
        assert_eq!(v.recluster_passes(), 1);
        v.set_filter(region_filter("IL"));
        v.render_pass();
        assert_eq!(v.recluster_passes(), 2);
    }

    #[test]
    fn wheel_is_inert_while_the_surface_is_off_screen() {
        let mut v = view();
        assert!(!v.on_wheel(120.0));
        assert_eq!(v.viewport().zoom, DEFAULT_ZOOM);
    }

    #[test]
    fn wheel_zooms_once_the_surface_is_visible() {
        let mut v = view();
        v.set_visible_fraction(0.5);
        assert!(v.on_wheel(-120.0));
        assert!(v.viewport().zoom > DEFAULT_ZOOM);
        assert!(v.on_wheel(120.0));
        assert_eq!(v.viewport().zoom, DEFAULT_ZOOM * 1.1 * 0.9);
    }

    #[test]
    fn fit_key_resets_and_escape_clears_selection() {
        let mut v = view();
        v.set_visible_fraction(1.0);
        v.commit_pan_zoom(6.0, LngLat::new(-90.0, 38.0));

        let id = v.render_pass().markers[0].cluster_id;
        assert!(v.select_marker(id).is_some());
        assert_eq!(v.selected(), Some(id));

        assert!(v.on_key(KeyInput::Escape));
        assert_eq!(v.selected(), None);

        assert!(v.on_key(KeyInput::Fit));
        assert_eq!(v.viewport().zoom, DEFAULT_ZOOM);
        assert_eq!(v.viewport().center, DEFAULT_CENTER);
    }

    #[test]
    fn selecting_a_marker_surfaces_its_member_points() {
        let mut v = view();
        v.set_filter(region_filter("NY"));
        let id = v.render_pass().markers[0].cluster_id;
        let members = v.select_marker(id).unwrap();
        let ids: Vec<u64> = members.iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn pan_zoom_commit_marks_the_view_user_adjusted() {
        let mut v = view();
        v.commit_pan_zoom(2.5, LngLat::new(-100.0, 41.0));
        assert_eq!(v.viewport().zoom, 2.5);
        assert_eq!(v.viewport_mode(), ViewportMode::UserAdjusted);
        // A later reset still always wins.
        v.reset_view();
        assert_eq!(v.viewport().zoom, DEFAULT_ZOOM);
        assert_eq!(v.viewport_mode(), ViewportMode::Default);
    }
}
