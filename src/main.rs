//! `kdtrace` — a command-line front end for the renderer crate. Scene
//! import, the interactive viewport, and image-file encoding are all
//! external to the renderer itself (spec §1); this binary plays the role
//! of all three at once, at the smallest scale that is still useful: pick
//! one of a handful of hand-built scene presets, render it, and write the
//! result out as a binary PPM. No image-codec dependency is pulled in for
//! that — encoding is explicitly out of scope, so the binary writes the
//! simplest possible format itself.
extern crate clap;
extern crate kdtrace;

use clap::{Parser, ValueEnum};
use kdtrace::camera::PerspectiveCamera;
use kdtrace::colour::Colour;
use kdtrace::demos;
use kdtrace::geometry::point::Point;
use kdtrace::geometry::vector::Vector;
use kdtrace::params::RenderOptions;
use kdtrace::renderer::Renderer;
use kdtrace::scene::SceneNode;
use std::fs::File;
use std::io::{self, Write};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Preset {
    /// A single ambient-lit triangle against a black background.
    Triangle,
    /// The same geometry lit by a point light.
    Lit,
    /// A floor quad with a hard shadow cast across it.
    Shadow,
    /// A mirror floor reflecting a red ceiling.
    Mirror,
    /// A soft penumbra cast by a 100x100 area light.
    SoftShadow
}

/// kdtrace — an offline CPU ray tracer over a kd-tree-accelerated triangle scene
#[derive(Parser, Debug)]
#[command(name = "kdtrace", version, about)]
struct Cli {
    /// Scene preset to render
    #[arg(short, long, value_enum, default_value_t = Preset::Lit)]
    scene: Preset,

    /// Output image width in pixels
    #[arg(short = 'W', long, default_value_t = 512)]
    width: usize,

    /// Output image height in pixels
    #[arg(short = 'H', long, default_value_t = 512)]
    height: usize,

    /// Maximum mirror-reflection recursion depth
    #[arg(long, default_value_t = 3)]
    max_depth: usize,

    /// Where to write the rendered PPM
    #[arg(short, long, default_value = "out.ppm")]
    output: String
}

/// Writes a binary (P6) PPM: a 3-byte RGB header-then-pixel format needing
/// no external codec, dropping the render buffer's alpha byte along the way.
fn write_ppm(path: &str, width: usize, height: usize, rgba: &[u8]) -> io::Result<()> {
    let mut file = File::create(path)?;
    write!(file, "P6\n{} {}\n255\n", width, height)?;
    let mut rgb = Vec::with_capacity(width * height * 3);
    for px in rgba.chunks(4) {
        rgb.extend_from_slice(&px[0..3]);
    }
    file.write_all(&rgb)
}

fn build_scene(preset: Preset) -> (demos::Group, PerspectiveCamera) {
    let eye = Point::new_with(0.0, 1.0, 6.0);
    let look_at = Point::new();
    let up = Vector::new_with(0.0, 1.0, 0.0);
    let cam = PerspectiveCamera::new(eye, look_at, up, 60.0, 1.0);

    let group = match preset {
        Preset::Triangle => demos::single_triangle(),
        Preset::Lit => demos::point_lit(),
        Preset::Shadow => demos::shadowed(),
        Preset::Mirror => demos::mirror(),
        Preset::SoftShadow => demos::soft_shadow()
    };
    (group, cam)
}

fn main() {
    let cli = Cli::parse();
    let (scene_root, camera) = build_scene(cli.scene);

    let options = RenderOptions {
        max_depth: cli.max_depth,
        ambient: Colour::rgb(0.2, 0.2, 0.2),
        background: Colour::black(),
        ..RenderOptions::default()
    };
    let renderer = Renderer::new(options);

    let mut buffer = vec![0u8; cli.width * cli.height * 4];
    let root: &dyn SceneNode = &scene_root;
    let report = renderer.render_graph(root, &camera, cli.width, cli.height, &mut buffer);
    report.print_summary();

    match write_ppm(&cli.output, cli.width, cli.height, &buffer) {
        Ok(()) => eprintln!("Wrote {}", cli.output),
        Err(e) => eprintln!("Failed to write {}: {}", cli.output, e)
    }
}
