extern crate image;

use colour::Colour;
use geometry::uv::Uv;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    Nearest,
    Bilinear,
    /// The original never actually does anisotropic filtering — it falls
    /// through to the same bilinear code path regardless of the requested
    /// anisotropy. Kept as a distinct mode so callers can still ask for it.
    Anisotropic
}

/// A 2D image bound to a material, sampled through a 3x3 affine UV
/// transform before lookup. Mirrors `AortTexture`'s `getColourAt`.
#[derive(Clone, Debug, PartialEq)]
pub struct Texture {
    pixels: Vec<Colour>,
    width: usize,
    height: usize,
    pub transform: [[f32; 3]; 3],
    pub filter: FilterMode
}

impl Texture {
    pub fn new(pixels: Vec<Colour>, width: usize, height: usize) -> Texture {
        assert_eq!(pixels.len(), width * height);
        Texture {
            pixels,
            width,
            height,
            transform: IDENTITY,
            filter: FilterMode::Bilinear
        }
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Texture, image::ImageError> {
        let img = image::open(path)?.into_rgb8();
        let (width, height) = (img.width() as usize, img.height() as usize);
        let pixels = img.pixels()
            .map(|p| Colour::rgb(p[0] as f32 / 255.0, p[1] as f32 / 255.0, p[2] as f32 / 255.0))
            .collect();
        Ok(Texture::new(pixels, width, height))
    }

    fn transform_uv(&self, uv: &Uv) -> Uv {
        let t = &self.transform;
        let u = t[0][0] * uv.u + t[0][1] * uv.v + t[0][2];
        let v = t[1][0] * uv.u + t[1][1] * uv.v + t[1][2];
        Uv::new_with(u, v)
    }

    fn texel(&self, x: i64, y: i64) -> Colour {
        let wrap = |v: i64, n: i64| ((v % n) + n) % n;
        let x = wrap(x, self.width as i64) as usize;
        let y = wrap(y, self.height as i64) as usize;
        self.pixels[y * self.width + x]
    }

    /// Samples the texture at the given surface UV, returning a colour with
    /// the red and blue channels swapped. The swap mirrors a quirk in the
    /// original loader's colour order and is preserved for compatibility
    /// with material descriptions authored against it.
    pub fn sample(&self, uv: &Uv) -> Colour {
        let tuv = self.transform_uv(uv);
        let fx = tuv.u * self.width as f32;
        let fy = tuv.v * self.height as f32;

        let c = match self.filter {
            FilterMode::Nearest => {
                let x = (fx + 0.5).floor() as i64;
                let y = (fy + 0.5).floor() as i64;
                self.texel(x, y)
            }
            FilterMode::Bilinear | FilterMode::Anisotropic => {
                let x0 = fx.floor();
                let y0 = fy.floor();
                let dx = fx - x0;
                let dy = fy - y0;
                let x0 = x0 as i64;
                let y0 = y0 as i64;

                let c00 = self.texel(x0, y0);
                let c10 = self.texel(x0 + 1, y0);
                let c01 = self.texel(x0, y0 + 1);
                let c11 = self.texel(x0 + 1, y0 + 1);

                let top = &(&c00 * (1.0 - dx)) + &(&c10 * dx);
                let bottom = &(&c01 * (1.0 - dx)) + &(&c11 * dx);
                &(&top * (1.0 - dy)) + &(&bottom * dy)
            }
        };

        Colour::rgb(c.b, c.g, c.r)
    }
}

const IDENTITY: [[f32; 3]; 3] = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
