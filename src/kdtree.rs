use bbox::BBox;
use bbox::Union;
use ray::Ray;
use triangle::Triangle;

pub const MAX_DEPTH: usize = 32;
pub const MIN_PER_LEAF: usize = 4;

#[derive(Debug)]
pub enum Node {
    Leaf(Vec<usize>),
    Interior {
        axis: usize,
        split: f32,
        left: Box<Node>,
        right: Box<Node>
    }
}

/// A kd-tree over a fixed set of triangles, referenced by index so a
/// triangle straddling the split plane can live in both children without
/// being duplicated in storage.
#[derive(Debug)]
pub struct KdTree {
    pub bounds: BBox,
    pub triangles: Vec<Triangle>,
    root: Node
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum EdgeKind { Start, End }

#[derive(Clone, Copy, Debug)]
struct BoundEdge {
    t: f32,
    prim: usize,
    kind: EdgeKind
}

impl KdTree {
    pub fn build(triangles: Vec<Triangle>) -> KdTree {
        KdTree::build_with(triangles, MAX_DEPTH, MIN_PER_LEAF)
    }

    /// Same as `build`, but with the `kdtree.max_depth` /
    /// `kdtree.min_triangles_per_leaf` tunables (spec §6) threaded through to
    /// the recursive builder instead of the crate defaults.
    pub fn build_with(triangles: Vec<Triangle>, max_depth: usize, min_per_leaf: usize) -> KdTree {
        let bounds = triangles.iter().fold(BBox::new(), |b, t| b.unioned_with(&t.world_bound()));
        let prim_bounds: Vec<BBox> = triangles.iter().map(|t| t.world_bound()).collect();
        let all: Vec<usize> = (0..triangles.len()).collect();

        let root = build_node(&prim_bounds, &bounds, all, 0, max_depth, min_per_leaf);
        KdTree { bounds, triangles, root }
    }

    pub fn closest_hit(&self, ray: &Ray) -> Option<(f32, f32, f32, usize)> {
        let (t0, t1) = match self.bounds.intersect(ray) {
            Some(interval) => interval,
            None => return None
        };
        closest_hit_node(&self.root, &self.triangles, ray, t0, t1)
    }

    pub fn any_hit(&self, ray: &Ray) -> bool {
        let (t0, t1) = match self.bounds.intersect(ray) {
            Some(interval) => interval,
            None => return false
        };
        any_hit_node(&self.root, &self.triangles, ray, t0, t1)
    }
}

fn build_node(
    prim_bounds: &[BBox], bounds: &BBox, prims: Vec<usize>, depth: usize,
    max_depth: usize, min_per_leaf: usize) -> Node
{
    if depth >= max_depth || prims.len() <= min_per_leaf {
        return Node::Leaf(prims);
    }

    let axis = bounds.max_extent();
    let mut edges: Vec<BoundEdge> = Vec::with_capacity(prims.len() * 2);
    for &p in &prims {
        let b = &prim_bounds[p];
        edges.push(BoundEdge { t: b.p_min[axis as i32], prim: p, kind: EdgeKind::Start });
        edges.push(BoundEdge { t: b.p_max[axis as i32], prim: p, kind: EdgeKind::End });
    }
    edges.sort_by(|a, b| {
        a.t.partial_cmp(&b.t).unwrap().then_with(|| {
            // End before Start on an exact position tie, so a box that ends
            // exactly where another starts is not double-counted as open.
            (a.kind == EdgeKind::Start).cmp(&(b.kind == EdgeKind::Start))
        })
    });

    let n = prims.len();
    let mut best_cost = ::std::f32::INFINITY;
    let mut best_axis_split: Option<f32> = None;

    let mut left = 0usize;
    let mut right = n;

    // Sweep one edge at a time. Because End sorts before Start on a
    // position tie, a box ending exactly where another begins is removed
    // from `right` before the shared position is costed, and the
    // newly-opened box is only added to `left` afterwards — so a candidate
    // sitting exactly on another box's boundary is never double-counted on
    // either side.
    for e in edges.iter() {
        if e.kind == EdgeKind::End {
            right -= 1;
        }

        if e.t > bounds.p_min[axis as i32] && e.t < bounds.p_max[axis as i32] {
            let cost = sah_cost(bounds, axis, e.t, left, right, n);
            if cost < best_cost {
                best_cost = cost;
                best_axis_split = Some(e.t);
            }
        }

        if e.kind == EdgeKind::Start {
            left += 1;
        }
    }

    let (a, b) = other_extents(bounds, axis);
    let dont_split_cost = (bounds.extent(axis) * (a + b) + a * b) * n as f32;
    let split = match best_axis_split {
        Some(s) if best_cost < dont_split_cost => s,
        _ => {
            return Node::Leaf(prims);
        }
    };

    let mut left_prims = Vec::new();
    let mut right_prims = Vec::new();
    for &p in &prims {
        let b = &prim_bounds[p];
        if b.p_min[axis as i32] <= split {
            left_prims.push(p);
        }
        if b.p_max[axis as i32] > split || (b.p_min[axis as i32] == b.p_max[axis as i32] && b.p_min[axis as i32] == split) {
            right_prims.push(p);
        }
    }

    if left_prims.is_empty() || right_prims.is_empty() || left_prims.len() == prims.len() {
        return Node::Leaf(prims);
    }

    let mut left_bounds = bounds.clone();
    left_bounds.p_max[axis as i32] = split;
    let mut right_bounds = bounds.clone();
    right_bounds.p_min[axis as i32] = split;

    let left_node = build_node(prim_bounds, &left_bounds, left_prims, depth + 1, max_depth, min_per_leaf);
    let right_node = build_node(prim_bounds, &right_bounds, right_prims, depth + 1, max_depth, min_per_leaf);

    Node::Interior { axis, split, left: Box::new(left_node), right: Box::new(right_node) }
}

/// Extents of a node's AABB on the two axes other than `axis`, in the `(a, b)`
/// order spec §4.3 names them (used both by the SAH sweep and the "don't
/// split" cost).
fn other_extents(bounds: &BBox, axis: usize) -> (f32, f32) {
    let other0 = (axis + 1) % 3;
    let other1 = (axis + 2) % 3;
    (bounds.extent(other0), bounds.extent(other1))
}

/// Spec §4.3's literal SAH cost: `SAL = (pos − min)·(a+b) + a·b`,
/// `SAR = (max − pos)·(a+b) + a·b`, `cost = SAL·left + SAR·right`.
fn sah_cost(bounds: &BBox, axis: usize, pos: f32, left: usize, right: usize, _total: usize) -> f32 {
    let (a, b) = other_extents(bounds, axis);
    let perimeter = a + b;
    let cap_area = a * b;

    let below = pos - bounds.p_min[axis as i32];
    let above = bounds.p_max[axis as i32] - pos;
    let sal = below * perimeter + cap_area;
    let sar = above * perimeter + cap_area;

    sal * left as f32 + sar * right as f32
}

fn closest_hit_node(
    node: &Node, triangles: &[Triangle], ray: &Ray, t0: f32, t1: f32)
    -> Option<(f32, f32, f32, usize)>
{
    match *node {
        Node::Leaf(ref prims) => {
            let mut best: Option<(f32, f32, f32, usize)> = None;
            for &p in prims {
                if let Some((t, u, v)) = triangles[p].intersect(ray) {
                    if t >= t0 - 1e-4 && t <= t1 + 1e-4 {
                        if best.is_none() || t < best.unwrap().0 {
                            best = Some((t, u, v, p));
                        }
                    }
                }
            }
            best
        }
        Node::Interior { axis, split, ref left, ref right } => {
            let (near, far) = if ray.d[axis] >= 0.0 { (left, right) } else { (right, left) };
            let denom = ray.d[axis];
            if denom.abs() < 1e-12 {
                let side = if ray.o[axis as i32] <= split { left } else { right };
                return closest_hit_node(side, triangles, ray, t0, t1);
            }
            let t_split = (split - ray.o[axis as i32]) / denom;

            if t_split > t1 || t_split <= 0.0 {
                closest_hit_node(near, triangles, ray, t0, t1)
            } else if t_split < t0 {
                closest_hit_node(far, triangles, ray, t0, t1)
            } else {
                match closest_hit_node(near, triangles, ray, t0, t_split) {
                    Some(hit) => Some(hit),
                    None => closest_hit_node(far, triangles, ray, t_split, t1)
                }
            }
        }
    }
}

fn any_hit_node(node: &Node, triangles: &[Triangle], ray: &Ray, t0: f32, t1: f32) -> bool {
    match *node {
        Node::Leaf(ref prims) => {
            prims.iter().any(|&p| {
                triangles[p].intersect(ray)
                    .map_or(false, |(t, _, _)| t >= t0 - 1e-4 && t <= t1 + 1e-4)
            })
        }
        Node::Interior { axis, split, ref left, ref right } => {
            let (near, far) = if ray.d[axis] >= 0.0 { (left, right) } else { (right, left) };
            let denom = ray.d[axis];
            if denom.abs() < 1e-12 {
                let side = if ray.o[axis as i32] <= split { left } else { right };
                return any_hit_node(side, triangles, ray, t0, t1);
            }
            let t_split = (split - ray.o[axis as i32]) / denom;

            if t_split > t1 || t_split <= 0.0 {
                any_hit_node(near, triangles, ray, t0, t1)
            } else if t_split < t0 {
                any_hit_node(far, triangles, ray, t0, t1)
            } else {
                any_hit_node(near, triangles, ray, t0, t_split)
                    || any_hit_node(far, triangles, ray, t_split, t1)
            }
        }
    }
}
