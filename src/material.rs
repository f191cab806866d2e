use colour::Colour;
use geometry::uv::Uv;
use std::sync::Arc;
use texture::Texture;

/// Surface appearance: Phong-style ambient/diffuse/specular terms plus an
/// optional texture and a mirror reflectivity coefficient. Defaults mirror
/// `AortMaterial`'s constructor.
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    pub name: String,
    pub ambient: Colour,
    pub diffuse: Colour,
    pub specular: Colour,
    pub shininess: f32,
    pub reflectivity: f32,
    pub texture: Option<Arc<Texture>>
}

impl Material {
    pub fn new(name: &str) -> Material {
        Material {
            name: name.to_string(),
            ..Material::default()
        }
    }

    /// The colour at a surface point: the bound texture if there is one,
    /// otherwise the flat diffuse colour.
    pub fn colour_at(&self, uv: &Uv) -> Colour {
        match self.texture {
            Some(ref tex) => tex.sample(uv),
            None => self.diffuse
        }
    }
}

impl Default for Material {
    fn default() -> Material {
        Material {
            name: String::new(),
            ambient: Colour::white(),
            diffuse: Colour::white(),
            specular: Colour::black(),
            shininess: 0.0,
            reflectivity: 0.25,
            texture: None
        }
    }
}
