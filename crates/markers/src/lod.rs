use cluster::group::Cluster;

/// Inverse-zoom factor for marker geometry, floored so markers never vanish
/// on deep zoom.
pub const ZOOM_FACTOR_FLOOR: f64 = 0.3;
/// Inverse-zoom factor for text, scaled 1.5x harder than geometry.
pub const TEXT_ZOOM_RATE: f64 = 1.5;
/// Minimum legible font scale.
pub const FONT_SCALE_FLOOR: f64 = 0.2;

pub const MIN_MARKER_RADIUS: f64 = 2.0;
pub const MAX_MARKER_RADIUS: f64 = 5.0;
/// Unscaled radius of a singleton marker.
pub const SINGLE_BASE_RADIUS: f64 = 3.0;
/// Unscaled base radius of a multi-member marker.
pub const CLUSTER_BASE_RADIUS: f64 = 4.0;
/// Per-member size bonus for multi-member markers, clamped with the rest.
pub const CLUSTER_MEMBER_BONUS: f64 = 0.2;

/// Wage labels appear strictly above this zoom.
pub const WAGE_LABEL_MIN_ZOOM: f64 = 3.0;
/// Place/member labels appear strictly above this zoom; always the later of
/// the two thresholds.
pub const NAME_LABEL_MIN_ZOOM: f64 = 4.0;

/// Per-marker rendering decisions for one zoom level.
///
/// Ephemeral: recomputed every render pass, never stored.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LodDecision {
    pub marker_radius: f64,
    pub wage_label_visible: bool,
    pub name_label_visible: bool,
    pub font_scale: f64,
}

/// Maps (zoom, cluster) to size and label decisions.
///
/// Pure over its inputs. Label visibility is monotonic in zoom: once a label
/// shows it stays shown for any higher zoom.
pub fn select_lod(zoom: f64, cluster: &Cluster) -> LodDecision {
    let zoom_factor = (1.0 / zoom).max(ZOOM_FACTOR_FLOOR);
    let base = if cluster.is_multi_member() {
        CLUSTER_BASE_RADIUS + CLUSTER_MEMBER_BONUS * cluster.members.len() as f64
    } else {
        SINGLE_BASE_RADIUS
    };
    LodDecision {
        marker_radius: (base * zoom_factor).clamp(MIN_MARKER_RADIUS, MAX_MARKER_RADIUS),
        wage_label_visible: zoom > WAGE_LABEL_MIN_ZOOM,
        name_label_visible: zoom > NAME_LABEL_MIN_ZOOM,
        font_scale: (1.0 / (TEXT_ZOOM_RATE * zoom)).max(FONT_SCALE_FLOOR),
    }
}
