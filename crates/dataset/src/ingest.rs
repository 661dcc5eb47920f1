use crate::point::GeoPoint;

/// Parses the ingestion collaborator's JSON array of wage records.
///
/// Validation beyond shape is deliberately absent: degenerate `(0, 0)`
/// coordinates are accepted (see `GeoPoint::is_degenerate`).
pub fn points_from_json(json: &str) -> Result<Vec<GeoPoint>, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::points_from_json;
    use crate::point::PointId;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_camel_case_records() {
        let json = r#"[
            {
                "id": 1,
                "lat": 40.7128,
                "lng": -74.006,
                "wage": 65.5,
                "memberCount": 27000,
                "tradeCode": "electrical",
                "regionCode": "NY",
                "displayName": "New York"
            }
        ]"#;
        let points = points_from_json(json).unwrap();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].id, PointId(1));
        assert_eq!(points[0].region_code, "NY");
    }

    #[test]
    fn degenerate_coordinates_parse_without_error() {
        let json = r#"[
            {
                "id": 9,
                "lat": 0.0,
                "lng": 0.0,
                "wage": 40.0,
                "memberCount": 500,
                "tradeCode": "laborers",
                "regionCode": "TX",
                "displayName": "Unplaced"
            }
        ]"#;
        let points = points_from_json(json).unwrap();
        assert!(points[0].is_degenerate());
    }

    #[test]
    fn malformed_input_is_a_parse_error() {
        assert!(points_from_json("not json").is_err());
    }
}
