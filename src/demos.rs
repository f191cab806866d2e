//! Scene presets for the `kdtrace` binary. These stand in for the scene
//! importer the spec treats as an external collaborator (spec §1): each
//! preset builds a tiny, self-contained `SceneNode` tree directly out of
//! hand-placed triangles and lights instead of loading a mesh file.
use colour::Colour;
use geometry::point::Point;
use geometry::vector::Vector;
use light::Light;
use material::Material;
use scene::{SceneNode, TriangleSource};
use std::sync::Arc;
use triangle::Triangle;

struct Entity {
    triangles: Vec<Triangle>
}

impl TriangleSource for Entity {
    fn triangles(&self) -> Vec<Triangle> { self.triangles.clone() }
}

impl SceneNode for Entity {
    fn attached_triangles(&self) -> Option<&dyn TriangleSource> { Some(self) }
}

struct LightNode {
    light: Light
}

impl SceneNode for LightNode {
    fn attached_light(&self) -> Option<Light> { Some(self.light.clone()) }
}

/// A scene graph root holding a flat list of children (entities and lights).
/// Mirrors `RendererPrivate::traverse`'s expectation of an arbitrary tree —
/// flat here only because these demo scenes are small.
pub struct Group {
    children: Vec<Box<dyn SceneNode>>
}

impl SceneNode for Group {
    fn children(&self) -> Vec<&dyn SceneNode> {
        self.children.iter().map(|c| c.as_ref()).collect()
    }
}

fn quad(p0: Point, p1: Point, p2: Point, p3: Point, material: Arc<Material>) -> Vec<Triangle> {
    vec![
        Triangle::new(p0.clone(), p1, p2.clone(), material.clone()),
        Triangle::new(p0, p2, p3, material)
    ]
}

/// One triangle facing the camera, ambient light only, no reflection.
/// Exercises spec §8 scenario 1 (ambient-only shading, background on a miss).
pub fn single_triangle() -> Group {
    let material = Arc::new(Material { ambient: Colour::white(), reflectivity: 0.0, ..Material::default() });
    let tri = Triangle::new(
        Point::new_with(-1.0, -1.0, 0.0), Point::new_with(1.0, -1.0, 0.0), Point::new_with(-1.0, 1.0, 0.0),
        material.clone());
    let tri2 = Triangle::new(
        Point::new_with(1.0, -1.0, 0.0), Point::new_with(1.0, 1.0, 0.0), Point::new_with(-1.0, 1.0, 0.0),
        material);
    Group { children: vec![Box::new(Entity { triangles: vec![tri, tri2] })] }
}

/// The same quad lit by a point light: spec §8 scenario 2 (point light +
/// diffuse lambert).
pub fn point_lit() -> Group {
    let material = Arc::new(Material {
        ambient: Colour::black(), diffuse: Colour::white(), specular: Colour::rgb(0.3, 0.3, 0.3),
        shininess: 0.0, reflectivity: 0.0, texture: None
    });
    let tris = quad(
        Point::new_with(-2.0, -2.0, 0.0), Point::new_with(2.0, -2.0, 0.0),
        Point::new_with(2.0, 2.0, 0.0), Point::new_with(-2.0, 2.0, 0.0), material);
    let light = Light::Point {
        position: Point::new_with(0.0, 0.0, 5.0), diffuse: Colour::white(), specular: Colour::white()
    };
    Group {
        children: vec![
            Box::new(Entity { triangles: tris }),
            Box::new(LightNode { light })
        ]
    }
}

/// A floor quad with a second, nearer quad occluding the light: spec §8
/// scenario 3 (hard shadow).
pub fn shadowed() -> Group {
    let floor_material = Arc::new(Material {
        ambient: Colour::rgb(0.1, 0.1, 0.1), diffuse: Colour::white(),
        specular: Colour::black(), reflectivity: 0.0, ..Material::default()
    });
    let blocker_material = Arc::new(Material::default());

    let floor = quad(
        Point::new_with(-3.0, -3.0, 0.0), Point::new_with(3.0, -3.0, 0.0),
        Point::new_with(3.0, 3.0, 0.0), Point::new_with(-3.0, 3.0, 0.0), floor_material);
    let blocker = quad(
        Point::new_with(-1.0, -1.0, 1.0), Point::new_with(1.0, -1.0, 1.0),
        Point::new_with(1.0, 1.0, 1.0), Point::new_with(-1.0, 1.0, 1.0), blocker_material);

    let light = Light::Point {
        position: Point::new_with(0.0, 0.0, 5.0), diffuse: Colour::white(), specular: Colour::white()
    };

    let mut triangles = floor;
    triangles.extend(blocker);
    Group {
        children: vec![
            Box::new(Entity { triangles }),
            Box::new(LightNode { light })
        ]
    }
}

/// A mirror floor beneath a red ceiling quad: spec §8 scenario 4 (mirror
/// reflection).
pub fn mirror() -> Group {
    let floor_material = Arc::new(Material {
        ambient: Colour::black(), diffuse: Colour::black(),
        specular: Colour::black(), reflectivity: 1.0, ..Material::default()
    });
    let red_material = Arc::new(Material {
        ambient: Colour::rgb(1.0, 0.0, 0.0), diffuse: Colour::black(),
        specular: Colour::black(), reflectivity: 0.0, ..Material::default()
    });

    let floor = quad(
        Point::new_with(-10.0, 0.0, -10.0), Point::new_with(10.0, 0.0, -10.0),
        Point::new_with(10.0, 0.0, 10.0), Point::new_with(-10.0, 0.0, 10.0), floor_material);
    let ceiling = quad(
        Point::new_with(-10.0, 2.0, -10.0), Point::new_with(10.0, 2.0, -10.0),
        Point::new_with(10.0, 2.0, 10.0), Point::new_with(-10.0, 2.0, 10.0), red_material);

    let mut triangles = floor;
    triangles.extend(ceiling);
    Group { children: vec![Box::new(Entity { triangles })] }
}

/// A 100x100 area light above a narrow occluder: spec §8 scenario 6 (soft
/// shadow with a partially-occluded penumbra).
pub fn soft_shadow() -> Group {
    let floor_material = Arc::new(Material {
        ambient: Colour::black(), diffuse: Colour::white(),
        specular: Colour::black(), reflectivity: 0.0, ..Material::default()
    });
    let blocker_material = Arc::new(Material::default());

    let floor = quad(
        Point::new_with(-20.0, -20.0, 0.0), Point::new_with(20.0, -20.0, 0.0),
        Point::new_with(20.0, 20.0, 0.0), Point::new_with(-20.0, 20.0, 0.0), floor_material);
    let blocker = quad(
        Point::new_with(-25.0, 0.0, -2.0), Point::new_with(25.0, 0.0, -2.0),
        Point::new_with(25.0, 5.0, -2.0), Point::new_with(-25.0, 5.0, -2.0), blocker_material);

    let light = Light::Area {
        position: Point::new_with(0.0, 20.0, 0.0), direction: Vector::new_with(0.0, -1.0, 0.0),
        size: (100.0, 100.0), diffuse: Colour::white(), specular: Colour::black()
    };

    let mut triangles = floor;
    triangles.extend(blocker);
    Group {
        children: vec![
            Box::new(Entity { triangles }),
            Box::new(LightNode { light })
        ]
    }
}
