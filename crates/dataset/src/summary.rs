use crate::point::GeoPoint;

/// Aggregate figures over the filtered point set.
///
/// Shown alongside the map; an empty set is a valid input and yields the
/// zero summary, never an error.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Summary {
    pub point_count: usize,
    pub average_wage: f64,
    pub total_members: u64,
}

impl Summary {
    pub fn of(points: &[GeoPoint]) -> Self {
        if points.is_empty() {
            return Self::default();
        }
        let wage_sum: f64 = points.iter().map(|p| p.wage).sum();
        Self {
            point_count: points.len(),
            average_wage: wage_sum / points.len() as f64,
            total_members: points.iter().map(|p| p.member_count).sum(),
        }
    }
}
