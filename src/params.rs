use colour::Colour;

/// Area-light sampling is a fixed 4x4 stratified jittered grid (spec §6);
/// changing it would require re-specifying the stratification, so unlike
/// the other tunables below it is not part of `RenderOptions`.
pub const AREA_LIGHT_SAMPLES: usize = 16;

/// Recognized tunables (spec §6). Unlike the teacher's `ParamSet` — a
/// dynamically-typed bag built to parse a scene-description file format —
/// this is a plain struct: scene import is an external collaborator here,
/// so there is no file format to parse values out of.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderOptions {
    pub max_depth: usize,
    pub ambient: Colour,
    pub background: Colour,
    pub kdtree_max_depth: usize,
    pub kdtree_min_triangles_per_leaf: usize
}

impl Default for RenderOptions {
    fn default() -> RenderOptions {
        RenderOptions {
            max_depth: 3,
            ambient: Colour::black(),
            background: Colour::black(),
            kdtree_max_depth: 32,
            kdtree_min_triangles_per_leaf: 4
        }
    }
}
