use foundation::geo::LngLat;
use serde::{Deserialize, Serialize};

/// Stable unique id assigned by the ingestion collaborator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PointId(pub u64);

/// One geolocated wage record.
///
/// Owned by the ingestion collaborator; the core treats it as read-only
/// input. A record without real geocoding arrives as `(0, 0)` and is not an
/// error here, it simply clusters at the origin.
///
/// `member_count` (and any other figure the collaborator estimates) is an
/// opaque number: nothing downstream may assume it was derived
/// deterministically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoPoint {
    pub id: PointId,
    pub lat: f64,
    pub lng: f64,
    pub wage: f64,
    pub member_count: u64,
    pub trade_code: String,
    pub region_code: String,
    pub display_name: String,
}

impl GeoPoint {
    pub fn position(&self) -> LngLat {
        LngLat::new(self.lng, self.lat)
    }

    /// True for records the geocoder could not place.
    pub fn is_degenerate(&self) -> bool {
        self.lat == 0.0 && self.lng == 0.0
    }
}
