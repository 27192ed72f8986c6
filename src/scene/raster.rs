use std::sync::{Arc, OnceLock};

use anyhow::Context as _;

use crate::{
    foundation::error::{BarmorphError, BarmorphResult},
    scene::retained::RetainedScene,
};

/// Rasterized scene: premultiplied RGBA8, row-major, `width * height * 4` bytes.
#[derive(Clone, Debug)]
pub struct FrameRgba {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel data.
    pub data: Vec<u8>,
}

fn system_fontdb() -> Arc<usvg::fontdb::Database> {
    static FONTDB: OnceLock<Arc<usvg::fontdb::Database>> = OnceLock::new();
    FONTDB
        .get_or_init(|| {
            let mut db = usvg::fontdb::Database::new();
            db.load_system_fonts();
            Arc::new(db)
        })
        .clone()
}

/// Render the scene to pixels at its own size, over an optional opaque background.
#[tracing::instrument(skip(scene))]
pub fn rasterize(scene: &RetainedScene, clear_rgb: Option<[u8; 3]>) -> BarmorphResult<FrameRgba> {
    let size = scene.size();
    let width = size.width.ceil() as u32;
    let height = size.height.ceil() as u32;

    let opts = usvg::Options {
        fontdb: system_fontdb(),
        ..Default::default()
    };
    let tree = usvg::Tree::from_str(&scene.to_svg(), &opts).context("parse scene svg")?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| BarmorphError::configuration("failed to allocate scene pixmap"))?;
    if let Some([r, g, b]) = clear_rgb {
        pixmap.fill(resvg::tiny_skia::Color::from_rgba8(r, g, b, 255));
    }
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::identity(),
        &mut pixmap.as_mut(),
    );

    Ok(FrameRgba {
        width,
        height,
        data: pixmap.data().to_vec(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/scene/raster.rs"]
mod tests;
