use bbox::BBox;
use bbox::Union;
use kdtree::KdTree;
use light::Light;
use params::RenderOptions;
use triangle::Triangle;

/// Something an external loader attaches triangles to — an entity in the
/// Ogre sense. Narrowed down from `RendererPrivate::traverse`'s distinction
/// between entities (-> triangles) and lights to the single capability the
/// renderer actually needs from the (out-of-scope) scene-graph loader.
pub trait TriangleSource {
    fn is_visible(&self) -> bool { true }
    fn triangles(&self) -> Vec<Triangle>;
}

/// A node in an external scene graph. `traverse` walks it exactly the way
/// `RendererPrivate::traverse` does: skip invisible objects, collect
/// triangles from entities and lights from light nodes, recurse into
/// children.
pub trait SceneNode {
    fn is_visible(&self) -> bool { true }
    fn attached_triangles(&self) -> Option<&dyn TriangleSource> { None }
    fn attached_light(&self) -> Option<Light> { None }
    fn children(&self) -> Vec<&dyn SceneNode> { Vec::new() }
}

pub fn traverse(root: &dyn SceneNode, triangles: &mut Vec<Triangle>, lights: &mut Vec<Light>) {
    if !root.is_visible() {
        return;
    }
    if let Some(source) = root.attached_triangles() {
        if source.is_visible() {
            triangles.extend(source.triangles());
        }
    }
    if let Some(light) = root.attached_light() {
        lights.push(light);
    }
    for child in root.children() {
        traverse(child, triangles, lights);
    }
}

/// Everything the renderer needs to shade a frame: the accelerated geometry
/// and the lights that illuminate it.
pub struct Scene {
    pub tree: KdTree,
    pub lights: Vec<Light>
}

impl Scene {
    /// Walks the scene graph, gathers triangles and lights, and builds the
    /// kd-tree over the result. Mirrors `RendererPrivate::traverse` followed
    /// by `buildTree`.
    pub fn build(root: &dyn SceneNode) -> Scene {
        Scene::build_with_options(root, &RenderOptions::default())
    }

    pub fn build_with_options(root: &dyn SceneNode, options: &RenderOptions) -> Scene {
        let mut triangles = Vec::new();
        let mut lights = Vec::new();
        traverse(root, &mut triangles, &mut lights);
        let tree = KdTree::build_with(
            triangles, options.kdtree_max_depth, options.kdtree_min_triangles_per_leaf);
        Scene { tree, lights }
    }

    pub fn from_triangles(triangles: Vec<Triangle>, lights: Vec<Light>) -> Scene {
        Scene { tree: KdTree::build(triangles), lights }
    }

    pub fn world_bound(&self) -> BBox {
        self.tree.bounds.clone()
    }
}
