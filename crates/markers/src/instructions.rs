use cluster::group::{Cluster, ClusterId};
use foundation::geo::LngLat;

use crate::lod::select_lod;
use crate::style::{format_wage_per_hour, WageBand};

/// Everything the presentation layer needs to draw one marker.
///
/// Labels are `None` when the current zoom hides them, so the consumer never
/// re-derives visibility.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerInstruction {
    pub cluster_id: ClusterId,
    pub position: LngLat,
    pub radius: f64,
    pub band: WageBand,
    pub wage_label: Option<String>,
    pub name_label: Option<String>,
    pub font_scale: f64,
}

/// Builds marker instructions for one cluster list at one zoom.
///
/// Output order follows cluster order. Pure; identical inputs yield
/// identical instructions.
pub fn marker_instructions(clusters: &[Cluster], zoom: f64) -> Vec<MarkerInstruction> {
    clusters
        .iter()
        .map(|c| {
            let lod = select_lod(zoom, c);
            let seed = &c.members[0];
            MarkerInstruction {
                cluster_id: c.id,
                position: c.centroid,
                radius: lod.marker_radius,
                band: WageBand::for_wage(c.average_wage),
                wage_label: lod
                    .wage_label_visible
                    .then(|| format_wage_per_hour(c.average_wage)),
                name_label: lod.name_label_visible.then(|| seed.display_name.clone()),
                font_scale: lod.font_scale,
            }
        })
        .collect()
}
