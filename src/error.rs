/// Non-fatal render diagnostics (spec §7). No error kind here is fatal to
/// the image: a `Renderer::render` call always finishes and returns a
/// buffer, collecting whichever of these were observed along the way.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RenderWarning {
    /// The scene had no triangles after ingest; the buffer was filled with
    /// the background colour and rendering was skipped.
    EmptyScene,
    /// A triangle with a zero-length face normal (collinear vertices) was
    /// present. It can never be hit; `Triangle::intersect` returns `None`
    /// unconditionally for it rather than dividing by zero.
    DegenerateTriangle,
    /// A camera produced a non-finite ray for a valid (u, v). The pixel was
    /// written as black and rendering continued.
    InvalidCamera
}
