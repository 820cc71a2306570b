//! Isometric projection of calendar days onto the canvas.

pub mod iso;
pub mod transform;
