use std::collections::HashMap;
use std::fmt;

use dataset::point::{GeoPoint, PointId};
use foundation::geo::LngLat;

use crate::params::{CentroidMode, ClusterParams, Linkage};

/// Derived cluster id: the seed member plus whether the cluster merged
/// anything. Stable for a given point set and params.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ClusterId {
    pub seed: PointId,
    pub multi: bool,
}

impl fmt::Display for ClusterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = if self.multi { "cluster" } else { "single" };
        write!(f, "{prefix}-{}", self.seed.0)
    }
}

/// A display group of one or more spatially close points.
///
/// Recomputed whenever the filtered set or params change, never mutated.
/// `members` is non-empty and keeps input order; the first member is the
/// seed.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    pub id: ClusterId,
    pub members: Vec<GeoPoint>,
    pub centroid: LngLat,
    pub average_wage: f64,
    pub total_members: u64,
}

impl Cluster {
    pub fn is_multi_member(&self) -> bool {
        self.members.len() > 1
    }

    fn assemble(members: Vec<GeoPoint>, centroid_mode: CentroidMode) -> Self {
        debug_assert!(!members.is_empty());
        let seed = &members[0];
        let centroid = match centroid_mode {
            CentroidMode::Seed => seed.position(),
            CentroidMode::Mean => {
                let n = members.len() as f64;
                let lng: f64 = members.iter().map(|p| p.lng).sum();
                let lat: f64 = members.iter().map(|p| p.lat).sum();
                LngLat::new(lng / n, lat / n)
            }
        };
        let wage_sum: f64 = members.iter().map(|p| p.wage).sum();
        Self {
            id: ClusterId {
                seed: seed.id,
                multi: members.len() > 1,
            },
            centroid,
            average_wage: wage_sum / members.len() as f64,
            total_members: members.iter().map(|p| p.member_count).sum(),
            members,
        }
    }
}

/// Partitions `points` into display clusters.
///
/// Contract: the union of all returned members is exactly `points`, with no
/// point in two clusters. Empty input yields empty output.
pub fn cluster(points: &[GeoPoint], params: &ClusterParams) -> Vec<Cluster> {
    match params.linkage {
        Linkage::SeedRadius => seed_radius(points, params),
        Linkage::Component => components(points, params),
    }
}

/// Closeness test. `epsilon = 0` degenerates to exact-coordinate grouping
/// rather than an always-false strict bound.
fn close(a: LngLat, b: LngLat, epsilon: f64) -> bool {
    if epsilon == 0.0 {
        a.coincides(b)
    } else {
        a.delta_within(b, epsilon)
    }
}

fn seed_radius(points: &[GeoPoint], params: &ClusterParams) -> Vec<Cluster> {
    let mut assigned = vec![false; points.len()];
    let mut out = Vec::new();

    for i in 0..points.len() {
        if assigned[i] {
            continue;
        }
        let seed = points[i].position();
        let mut members = Vec::new();
        for j in i..points.len() {
            if assigned[j] {
                continue;
            }
            if j == i || close(seed, points[j].position(), params.epsilon_degrees) {
                assigned[j] = true;
                members.push(points[j].clone());
            }
        }
        out.push(Cluster::assemble(members, params.centroid));
    }
    out
}

fn components(points: &[GeoPoint], params: &ClusterParams) -> Vec<Cluster> {
    let mut forest = UnionFind::new(points.len());
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            if close(
                points[i].position(),
                points[j].position(),
                params.epsilon_degrees,
            ) {
                forest.union(i, j);
            }
        }
    }

    // Group by root; groups appear in the input order of their first member.
    let mut slot_of_root: HashMap<usize, usize> = HashMap::new();
    let mut groups: Vec<Vec<GeoPoint>> = Vec::new();
    for (i, point) in points.iter().enumerate() {
        let root = forest.find(i);
        let slot = *slot_of_root.entry(root).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(point.clone());
    }

    groups
        .into_iter()
        .map(|members| Cluster::assemble(members, params.centroid))
        .collect()
}

struct UnionFind {
    parent: Vec<usize>,
}

impl UnionFind {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
        }
    }

    fn find(&mut self, mut i: usize) -> usize {
        while self.parent[i] != i {
            self.parent[i] = self.parent[self.parent[i]];
            i = self.parent[i];
        }
        i
    }

    fn union(&mut self, a: usize, b: usize) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra != rb {
            // Smaller root wins so components are rooted at their earliest
            // member.
            let (lo, hi) = if ra < rb { (ra, rb) } else { (rb, ra) };
            self.parent[hi] = lo;
        }
    }
}
