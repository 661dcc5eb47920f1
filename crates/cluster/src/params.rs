/// Closeness tolerance in coordinate degrees under which two points merge.
pub const DEFAULT_EPSILON_DEGREES: f64 = 0.001;

/// How a cluster's representative coordinate is chosen.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CentroidMode {
    /// Arithmetic mean of member coordinates.
    Mean,
    /// The seed (first) member's coordinate, the legacy behavior.
    Seed,
}

/// How closeness induces the partition.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Linkage {
    /// Greedy single pass: each unassigned point seeds a cluster and absorbs
    /// every still-unassigned point within epsilon of the seed.
    ///
    /// Order-dependent: when a chain a–b–c is pairwise close but a and c are
    /// not, the partition depends on which point seeds first. Kept as the
    /// legacy behavior; it is not connected components.
    SeedRadius,
    /// Union-find over the pairwise within-epsilon graph. The partition is
    /// independent of input order.
    Component,
}

/// Explicit clustering configuration.
///
/// Tolerance and determinism are deliberately configuration, not policy
/// baked into the pass: callers that must reproduce legacy output use
/// `ClusterParams::legacy()`, everything else the default.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ClusterParams {
    pub epsilon_degrees: f64,
    pub centroid: CentroidMode,
    pub linkage: Linkage,
}

impl Default for ClusterParams {
    fn default() -> Self {
        Self {
            epsilon_degrees: DEFAULT_EPSILON_DEGREES,
            centroid: CentroidMode::Mean,
            linkage: Linkage::Component,
        }
    }
}

impl ClusterParams {
    /// The legacy policy set: greedy grouping seeded in input order, cluster
    /// placed at the seed's coordinate.
    pub fn legacy() -> Self {
        Self {
            epsilon_degrees: DEFAULT_EPSILON_DEGREES,
            centroid: CentroidMode::Seed,
            linkage: Linkage::SeedRadius,
        }
    }

    pub fn with_epsilon(mut self, epsilon_degrees: f64) -> Self {
        self.epsilon_degrees = epsilon_degrees;
        self
    }
}
