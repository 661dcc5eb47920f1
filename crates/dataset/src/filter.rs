use serde::{Deserialize, Serialize};

use crate::point::GeoPoint;

/// Active filter selection from the filter-UI collaborator.
///
/// Every field is optional; an absent field constrains nothing. A change to
/// `region_code` is the one field that also drives the viewport (see the
/// viewport crate's region focus).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    pub trade_code: Option<String>,
    pub region_code: Option<String>,
    pub min_wage: Option<f64>,
    pub max_wage: Option<f64>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self == &FilterCriteria::default()
    }

    pub fn matches(&self, point: &GeoPoint) -> bool {
        if let Some(trade) = &self.trade_code
            && &point.trade_code != trade
        {
            return false;
        }
        if let Some(region) = &self.region_code
            && &point.region_code != region
        {
            return false;
        }
        if let Some(min) = self.min_wage
            && point.wage < min
        {
            return false;
        }
        if let Some(max) = self.max_wage
            && point.wage > max
        {
            return false;
        }
        true
    }

    /// Points matching every present criterion, in input order.
    pub fn apply(&self, points: &[GeoPoint]) -> Vec<GeoPoint> {
        points.iter().filter(|p| self.matches(p)).cloned().collect()
    }
}
