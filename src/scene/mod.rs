//! SVG scene graph, assembly and document framing.

pub mod assemble;
pub mod document;
pub mod node;
pub mod output;
pub mod raster;
