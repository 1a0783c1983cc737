//! Scene geometry for a captured frame
//!
//! Produces coloured triangles in logical 640x480 coordinates. Text labels
//! stay in the `Frame`; the host draws them with its own font stack.

pub mod shapes;
pub mod vertex;

pub use vertex::{Vertex, colors};

use crate::sim::Stage;
use crate::ui::Frame;

/// Triangles for everything but text.
///
/// The menu is text only; every other stage shows the field, both paddles
/// and the ball.
pub fn build_scene(frame: &Frame) -> Vec<Vertex> {
    if frame.stage == Stage::Menu {
        return Vec::new();
    }

    let field = shapes::field_rects();
    let mut vertices = Vec::with_capacity((field.len() + 3) * 6);
    for r in field
        .iter()
        .chain(frame.paddles.iter())
        .chain(std::iter::once(&frame.ball))
    {
        vertices.extend(shapes::rect(r, colors::FOREGROUND));
    }
    vertices
}
