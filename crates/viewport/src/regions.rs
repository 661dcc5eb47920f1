use foundation::geo::LngLat;

/// Representative center per region code, sorted by code for binary search.
///
/// Approximate state centers; immutable for the process lifetime.
const REGION_CENTERS: &[(&str, LngLat)] = &[
    ("AK", LngLat::new(-149.4937, 63.5887)),
    ("AL", LngLat::new(-86.7911, 32.8067)),
    ("AR", LngLat::new(-92.3731, 34.9697)),
    ("AZ", LngLat::new(-111.4312, 33.7298)),
    ("CA", LngLat::new(-119.6816, 36.7783)),
    ("CO", LngLat::new(-105.3111, 39.5501)),
    ("CT", LngLat::new(-72.7554, 41.6032)),
    ("DE", LngLat::new(-75.5071, 39.3185)),
    ("FL", LngLat::new(-81.6868, 27.6648)),
    ("GA", LngLat::new(-83.6431, 33.0406)),
    ("HI", LngLat::new(-157.4983, 19.8968)),
    ("IA", LngLat::new(-93.2105, 42.0329)),
    ("ID", LngLat::new(-114.4789, 44.2405)),
    ("IL", LngLat::new(-88.9861, 40.3495)),
    ("IN", LngLat::new(-86.1349, 39.8494)),
    ("KS", LngLat::new(-96.7265, 38.5266)),
    ("KY", LngLat::new(-84.6701, 37.6681)),
    ("LA", LngLat::new(-91.8678, 31.1695)),
    ("MA", LngLat::new(-71.5301, 42.2304)),
    ("MD", LngLat::new(-76.6413, 39.0639)),
    ("ME", LngLat::new(-69.3812, 44.6939)),
    ("MI", LngLat::new(-84.5363, 43.3266)),
    ("MN", LngLat::new(-93.9000, 46.7296)),
    ("MO", LngLat::new(-92.2884, 38.4561)),
    ("MS", LngLat::new(-89.6785, 32.7416)),
    ("MT", LngLat::new(-110.4544, 46.8797)),
    ("NC", LngLat::new(-79.0193, 35.7596)),
    ("ND", LngLat::new(-99.7840, 47.5515)),
    ("NE", LngLat::new(-99.9018, 41.4925)),
    ("NH", LngLat::new(-71.5639, 43.1939)),
    ("NJ", LngLat::new(-74.2179, 40.0583)),
    ("NM", LngLat::new(-106.0189, 34.5199)),
    ("NV", LngLat::new(-117.0554, 38.8026)),
    ("NY", LngLat::new(-74.2179, 42.1657)),
    ("OH", LngLat::new(-82.7937, 40.4173)),
    ("OK", LngLat::new(-96.9289, 35.0078)),
    ("OR", LngLat::new(-120.5542, 43.8041)),
    ("PA", LngLat::new(-77.7996, 40.5908)),
    ("RI", LngLat::new(-71.5118, 41.6809)),
    ("SC", LngLat::new(-80.9450, 33.8569)),
    ("SD", LngLat::new(-99.4388, 44.2998)),
    ("TN", LngLat::new(-86.6923, 35.7478)),
    ("TX", LngLat::new(-99.9018, 31.9686)),
    ("UT", LngLat::new(-111.8624, 39.3210)),
    ("VA", LngLat::new(-78.1697, 37.4316)),
    ("VT", LngLat::new(-72.7107, 44.0459)),
    ("WA", LngLat::new(-121.4904, 47.4009)),
    ("WI", LngLat::new(-89.6165, 44.2685)),
    ("WV", LngLat::new(-80.7939, 38.5976)),
    ("WY", LngLat::new(-107.3025, 42.7475)),
];

/// Representative center of a region, or `None` for an unknown code.
///
/// The only failure mode is not-found; callers treat that as a no-op.
pub fn region_center(code: &str) -> Option<LngLat> {
    REGION_CENTERS
        .binary_search_by_key(&code, |(c, _)| c)
        .ok()
        .map(|i| REGION_CENTERS[i].1)
}
