use image::{GrayImage, Luma, Rgba, RgbaImage};

use crate::geometry::{Point, RoundedRect};
use crate::stroke::{segment_covers, Stroke, Surface};

/// Color of row `y` in a vertical two-stop gradient over `size` rows.
///
/// `t = y / size`, so row 0 is exactly `top` and the last row stops one step
/// short of `bottom`. Channels are truncated, not rounded.
pub fn gradient_color(y: u32, size: u32, top: [u8; 3], bottom: [u8; 3]) -> Rgba<u8> {
    let t = y as f64 / size.max(1) as f64;
    let mix = |a: u8, b: u8| (a as f64 * (1.0 - t) + b as f64 * t) as u8;
    Rgba([mix(top[0], bottom[0]), mix(top[1], bottom[1]), mix(top[2], bottom[2]), 255])
}

/// Source-over compositing of `src` onto `dst`, in integer math with rounding.
///
/// An opaque destination stays exactly opaque whatever `src` is.
pub fn composite_over(dst: Rgba<u8>, src: Rgba<u8>) -> Rgba<u8> {
    let sa = src[3] as u32;
    if sa == 255 {
        return src;
    }
    if sa == 0 {
        return dst;
    }

    let da = dst[3] as u32;
    // Resulting alpha scaled by 255
    let out_a = sa * 255 + da * (255 - sa);
    let channel = |s: u8, d: u8| {
        ((s as u32 * sa * 255 + d as u32 * da * (255 - sa) + out_a / 2) / out_a) as u8
    };
    Rgba([
        channel(src[0], dst[0]),
        channel(src[1], dst[1]),
        channel(src[2], dst[2]),
        ((out_a + 127) / 255) as u8,
    ])
}

/// Single-channel mask: 255 inside a rounded rectangle covering the whole
/// `size x size` area, 0 elsewhere
pub fn rounded_rect_mask(size: u32, radius: u32) -> GrayImage {
    let last = size as i32 - 1;
    let shape = RoundedRect::new(0, 0, last, last, radius as i32);
    GrayImage::from_fn(size, size, |x, y| {
        if shape.contains(x as i32, y as i32) {
            Luma([255])
        } else {
            Luma([0])
        }
    })
}

/// Square RGBA drawing surface for one icon
///
/// Once a clip mask is installed, paint only lands where the mask is set.
pub struct Canvas {
    image: RgbaImage,
    clip: Option<GrayImage>,
}

impl Canvas {
    /// Fully transparent canvas
    pub fn new(size: u32) -> Self {
        Canvas {
            image: RgbaImage::new(size, size),
            clip: None,
        }
    }

    pub fn size(&self) -> u32 {
        self.image.width()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Paints every row with its gradient color at full opacity
    pub fn fill_vertical_gradient(&mut self, top: [u8; 3], bottom: [u8; 3]) {
        let size = self.image.height();
        for (y, row) in self.image.enumerate_rows_mut() {
            let color = gradient_color(y, size, top, bottom);
            for (_, _, pixel) in row {
                *pixel = color;
            }
        }
    }

    /// Keeps the current pixels only where `mask` is set, scaling alpha by the
    /// mask value, then keeps the mask as the clip for everything painted later
    pub fn clip_to(&mut self, mask: GrayImage) {
        for (x, y, pixel) in self.image.enumerate_pixels_mut() {
            let coverage = mask.get_pixel_checked(x, y).map_or(0, |m| m[0]) as u32;
            if coverage == 0 {
                *pixel = Rgba([0, 0, 0, 0]);
            } else if coverage < 255 {
                pixel[3] = (pixel[3] as u32 * coverage / 255) as u8;
            }
        }
        self.clip = Some(mask);
    }

    /// Paints one pixel. Out-of-bounds and clipped pixels are ignored;
    /// translucent colors are composited source-over.
    pub fn paint(&mut self, x: i32, y: i32, color: Rgba<u8>) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        if x >= self.image.width() || y >= self.image.height() {
            return;
        }
        if let Some(clip) = &self.clip {
            if clip.get_pixel(x, y)[0] == 0 {
                return;
            }
        }

        let pixel = self.image.get_pixel_mut(x, y);
        *pixel = composite_over(*pixel, color);
    }

    pub fn fill_rounded_rect(&mut self, rect: &RoundedRect, color: Rgba<u8>) {
        let (x0, y0, x1, y1) = self.visible_span(rect.left, rect.top, rect.right, rect.bottom);
        for y in y0..=y1 {
            for x in x0..=x1 {
                if rect.contains(x, y) {
                    self.paint(x, y, color);
                }
            }
        }
    }

    pub fn fill_circle(&mut self, center: Point, radius: i32, color: Rgba<u8>) {
        let r = radius.max(0);
        let r_sq = (r as i64) * (r as i64);
        let (x0, y0, x1, y1) =
            self.visible_span(center.x - r, center.y - r, center.x + r, center.y + r);
        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = (x - center.x) as i64;
                let dy = (y - center.y) as i64;
                if dx * dx + dy * dy <= r_sq {
                    self.paint(x, y, color);
                }
            }
        }
    }

    /// Intersection of an inclusive box with the canvas; may be empty
    fn visible_span(&self, left: i32, top: i32, right: i32, bottom: i32) -> (i32, i32, i32, i32) {
        let last = self.size() as i32 - 1;
        (left.max(0), top.max(0), right.min(last), bottom.min(last))
    }
}

impl Surface for Canvas {
    /// Bresenham line; the pen extends `width` pixels across the minor axis
    fn line(&mut self, from: Point, to: Point, width: u32, color: Rgba<u8>) {
        let width = width.max(1) as i32;
        let dx = (to.x - from.x).abs();
        let dy = -(to.y - from.y).abs();
        let sx = if from.x < to.x { 1 } else { -1 };
        let sy = if from.y < to.y { 1 } else { -1 };
        let steep = -dy > dx;

        let (mut x, mut y) = (from.x, from.y);
        let mut err = dx + dy;
        loop {
            for k in 0..width {
                let offset = k - width / 2;
                if steep {
                    self.paint(x + offset, y, color);
                } else {
                    self.paint(x, y + offset, color);
                }
            }

            if x == to.x && y == to.y {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    fn supports_wide_strokes(&self) -> bool {
        true
    }

    fn stroke_segment(&mut self, from: Point, to: Point, stroke: &Stroke, color: Rgba<u8>) {
        let reach = (stroke.width / 2.0).ceil() as i32 + 1;
        let (x0, y0, x1, y1) = self.visible_span(
            from.x.min(to.x) - reach,
            from.y.min(to.y) - reach,
            from.x.max(to.x) + reach,
            from.y.max(to.y) + reach,
        );
        for y in y0..=y1 {
            for x in x0..=x1 {
                if segment_covers(from, to, stroke, x as f32, y as f32) {
                    self.paint(x, y, color);
                }
            }
        }
    }
}
