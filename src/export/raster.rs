//! Rasterization of a sketch into PNG bytes.

use super::types::ExportError;
use crate::draw::{self, Color, Sketch};

/// Renders `sketch` over `background` into a new ARGB32 image surface of the sketch size.
pub fn render_surface(sketch: &Sketch, background: Color) -> Result<cairo::ImageSurface, ExportError> {
    let width = i32::try_from(sketch.width()).map_err(|_| cairo::Error::InvalidSize)?;
    let height = i32::try_from(sketch.height()).map_err(|_| cairo::Error::InvalidSize)?;

    let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
    {
        let ctx = cairo::Context::new(&surface)?;
        ctx.set_antialias(cairo::Antialias::Best);
        draw::render_sketch(&ctx, sketch, background);
        ctx.status()?;
    }
    surface.flush();

    Ok(surface)
}

/// Snapshots `sketch` as PNG bytes at its native pixel size.
///
/// Rasterizing the same sketch twice yields byte-identical output.
pub fn rasterize(sketch: &Sketch, background: Color) -> Result<Vec<u8>, ExportError> {
    let surface = render_surface(sketch, background)?;

    let mut buffer = Vec::new();
    surface.write_to_png(&mut buffer)?;

    log::debug!(
        "Rasterized {}x{} sketch with {} strokes into {} PNG bytes",
        sketch.width(),
        sketch.height(),
        sketch.len(),
        buffer.len()
    );

    Ok(buffer)
}
