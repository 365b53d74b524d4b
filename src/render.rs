use image::{ImageFormat, Rgba, RgbaImage};
use std::fs;
use std::io::Cursor;
use std::path::Path;
use tracing::debug;

use crate::canvas::{rounded_rect_mask, Canvas};
use crate::constants::{layout::MIN_SIZE, palette};
use crate::error::{IconError, RenderError};
use crate::geometry::Layout;
use crate::stroke::{stroke_polyline, Stroke, StrokeMode};

/// Knobs that change how shapes are rasterized, never what is drawn
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub stroke_mode: StrokeMode,
}

/// Draws the icon at `size x size` pixels.
///
/// Paint order: gradient background, rounded-corner clip, checkmark, bars,
/// growth curve, depth overlay. The result depends only on `size` and
/// `options`.
pub fn render_icon(size: u32, options: &RenderOptions) -> Result<RgbaImage, RenderError> {
    if size < MIN_SIZE {
        return Err(RenderError::SizeTooSmall { size, min: MIN_SIZE });
    }

    let layout = Layout::for_size(size);
    debug!(size, ?layout, "computed layout");

    let foreground = Rgba(palette::FOREGROUND);
    let mut canvas = Canvas::new(size);

    canvas.fill_vertical_gradient(palette::GRADIENT_TOP, palette::GRADIENT_BOTTOM);
    canvas.clip_to(rounded_rect_mask(size, layout.corner_radius as u32));

    stroke_polyline(
        &mut canvas,
        &layout.checkmark,
        &Stroke::new(layout.check_width),
        foreground,
        options.stroke_mode,
    );

    for bar in &layout.bars {
        canvas.fill_rounded_rect(bar, foreground);
    }

    stroke_polyline(
        &mut canvas,
        &layout.curve_points(),
        &Stroke::new(layout.curve_width),
        foreground,
        options.stroke_mode,
    );

    canvas.fill_circle(layout.overlay_center, layout.overlay_radius, Rgba(palette::OVERLAY));

    Ok(canvas.into_image())
}

/// Renders the icon and writes it as PNG to `output_path`, creating missing
/// parent directories and replacing any existing file.
pub fn render(size: u32, output_path: &Path, options: &RenderOptions) -> Result<(), IconError> {
    let image = render_icon(size, options)?;
    let bytes = encode_png(&image, output_path)?;

    if let Some(dir) = output_path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|e| IconError::io(dir, e))?;
    }
    fs::write(output_path, &bytes).map_err(|e| IconError::io(output_path, e))?;

    debug!(size, path = %output_path.display(), bytes = bytes.len(), "wrote icon");
    Ok(())
}

fn encode_png(image: &RgbaImage, path: &Path) -> Result<Vec<u8>, IconError> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|source| IconError::Encode { path: path.to_path_buf(), source })?;
    Ok(bytes)
}
