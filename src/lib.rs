pub mod bbox;
pub mod camera;
pub mod colour;
pub mod demos;
pub mod error;
pub mod geometry;
pub mod kdtree;
pub mod light;
pub mod material;
pub mod params;
pub mod ray;
pub mod renderer;
pub mod rng;
pub mod scene;
pub mod texture;
pub mod triangle;
pub mod utils;
