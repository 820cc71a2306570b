use std::path::Path;
use std::sync::Arc;

use anyhow::Context as _;

use crate::foundation::error::{ContribError, ContribResult};

/// Parse options with the system fonts loaded, so labels survive rasterization.
fn svg_options() -> usvg::Options<'static> {
    let mut db = usvg::fontdb::Database::new();
    db.load_system_fonts();
    usvg::Options {
        fontdb: Arc::new(db),
        ..Default::default()
    }
}

/// Parse rendered markup with `usvg`.
pub fn parse_svg(svg: &str) -> ContribResult<usvg::Tree> {
    let tree = usvg::Tree::from_str(svg, &svg_options()).context("parse svg tree")?;
    Ok(tree)
}

/// Rasterize the first frame of `tree` to straight-alpha RGBA8 at its natural size.
pub fn rasterize(tree: &usvg::Tree) -> ContribResult<(u32, u32, Vec<u8>)> {
    fn to_px(v: f32) -> ContribResult<u32> {
        if !v.is_finite() || v <= 0.0 {
            return Err(ContribError::geometry("svg has invalid width/height"));
        }
        Ok((v.ceil() as u32).max(1))
    }

    let size = tree.size();
    let (width, height) = (to_px(size.width())?, to_px(size.height())?);
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| ContribError::geometry("failed to allocate svg pixmap"))?;
    resvg::render(
        tree,
        resvg::tiny_skia::Transform::identity(),
        &mut pixmap.as_mut(),
    );

    let mut data = Vec::with_capacity(width as usize * height as usize * 4);
    for px in pixmap.pixels() {
        let c = px.demultiply();
        data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    Ok((width, height, data))
}

/// Write a PNG preview of `svg` to `path`. Animations are shown at their initial state.
#[tracing::instrument(skip(svg))]
pub fn rasterize_png(svg: &str, path: &Path) -> ContribResult<()> {
    let tree = parse_svg(svg)?;
    let (width, height, data) = rasterize(&tree)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ContribError::io(format!("create output dir '{}': {e}", parent.display()))
        })?;
    }
    image::save_buffer_with_format(
        path,
        &data,
        width,
        height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/scene/raster.rs"]
mod tests;
