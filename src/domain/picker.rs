// Nearest-point picker over a bounded Voronoi partition
use delaunator::{Point, triangulate};

/// A record's position in plot (bounded) pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Spatial index resolving a pointer position to the nearest data point.
///
/// Built from the Delaunay triangulation of the point set; `locate` walks the
/// neighbor graph greedily, so lookup cost tracks local cell complexity
/// rather than the point count. Read-only after construction: rebuilding is
/// required whenever the record set or the scales change.
#[derive(Debug, Clone)]
pub struct PointPicker {
    sites: Vec<ScreenPoint>,
    // Site index -> owning record index. Coincident input points collapse
    // into one site owned by the lowest record index.
    site_record: Vec<usize>,
    neighbors: Vec<Vec<usize>>,
    width: f64,
    height: f64,
}

impl PointPicker {
    /// Builds the index over one snapshot of screen positions. Record ids are
    /// the positions' indices in `points`.
    pub fn build(points: &[ScreenPoint], width: f64, height: f64) -> Self {
        let mut sites: Vec<ScreenPoint> = Vec::new();
        let mut site_record: Vec<usize> = Vec::new();
        let mut seen = std::collections::HashSet::new();

        for (record_idx, p) in points.iter().enumerate() {
            if !seen.insert((p.x.to_bits(), p.y.to_bits())) {
                continue;
            }
            sites.push(*p);
            site_record.push(record_idx);
        }

        let neighbors = Self::delaunay_neighbors(&sites);
        tracing::debug!(
            "picker built: {} records, {} sites, triangulated={}",
            points.len(),
            sites.len(),
            !neighbors.is_empty()
        );

        Self {
            sites,
            site_record,
            neighbors,
            width,
            height,
        }
    }

    /// Delaunay adjacency per site, each list sorted for a deterministic
    /// walk. Empty when no triangulation exists (fewer than three distinct
    /// sites, or all collinear).
    fn delaunay_neighbors(sites: &[ScreenPoint]) -> Vec<Vec<usize>> {
        if sites.len() < 3 {
            return Vec::new();
        }
        let input: Vec<Point> = sites.iter().map(|p| Point { x: p.x, y: p.y }).collect();
        let triangulation = triangulate(&input);
        if triangulation.triangles.is_empty() {
            return Vec::new();
        }

        let mut neighbors = vec![Vec::new(); sites.len()];
        for edge in 0..triangulation.triangles.len() {
            let next = if edge % 3 == 2 { edge - 2 } else { edge + 1 };
            let a = triangulation.triangles[edge];
            let b = triangulation.triangles[next];
            neighbors[a].push(b);
            neighbors[b].push(a);
        }
        for list in &mut neighbors {
            list.sort_unstable();
            list.dedup();
        }
        neighbors
    }

    /// The record whose Voronoi cell contains `(px, py)`, or `None` when the
    /// query falls outside the plot bounds or no points are indexed.
    pub fn locate(&self, px: f64, py: f64) -> Option<usize> {
        if self.sites.is_empty() {
            return None;
        }
        if px < 0.0 || px > self.width || py < 0.0 || py > self.height {
            return None;
        }

        let site = if self.neighbors.is_empty() {
            self.nearest_by_scan(px, py)
        } else {
            self.nearest_by_walk(px, py)
        };
        Some(self.site_record[site])
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    fn dist2(&self, site: usize, px: f64, py: f64) -> f64 {
        let dx = self.sites[site].x - px;
        let dy = self.sites[site].y - py;
        dx * dx + dy * dy
    }

    // Greedy descent over the Delaunay neighbor graph: a local distance
    // minimum on a Delaunay triangulation is the global nearest site. The
    // fixed start site and strict-improvement rule make the result a pure
    // function of the build input, including exactly equidistant queries.
    fn nearest_by_walk(&self, px: f64, py: f64) -> usize {
        if self.neighbors[0].is_empty() {
            // Start site left out of the triangulation; scan keeps locate total.
            return self.nearest_by_scan(px, py);
        }
        let mut current = 0usize;
        let mut current_d = self.dist2(current, px, py);
        loop {
            let mut best = current;
            let mut best_d = current_d;
            for &nb in &self.neighbors[current] {
                let d = self.dist2(nb, px, py);
                if d < best_d {
                    best = nb;
                    best_d = d;
                }
            }
            if best == current {
                return current;
            }
            current = best;
            current_d = best_d;
        }
    }

    fn nearest_by_scan(&self, px: f64, py: f64) -> usize {
        let mut best = 0usize;
        let mut best_d = self.dist2(0, px, py);
        for site in 1..self.sites.len() {
            let d = self.dist2(site, px, py);
            if d < best_d {
                best = site;
                best_d = d;
            }
        }
        best
    }
}
