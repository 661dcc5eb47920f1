/// Geographic position in degrees, longitude first.
///
/// Longitude is x-like and latitude is y-like, matching the (lng, lat)
/// ordering used by viewport centers throughout the workspace.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

impl LngLat {
    pub const fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    /// True iff both axis deltas to `other` are strictly under `eps` degrees.
    ///
    /// This is the clustering closeness test: a square window, not a great
    /// circle, and the bound is exclusive so `eps = 0` matches nothing (not
    /// even an identical coordinate via `< 0`), which callers special-case.
    pub fn delta_within(&self, other: LngLat, eps: f64) -> bool {
        (self.lat - other.lat).abs() < eps && (self.lng - other.lng).abs() < eps
    }

    /// True iff `other` has exactly the same coordinate pair.
    pub fn coincides(&self, other: LngLat) -> bool {
        self.lat == other.lat && self.lng == other.lng
    }
}
