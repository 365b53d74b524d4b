/// Wide strokes over polylines
///
/// Surfaces that can rasterize a wide segment with proper caps report it via
/// [`Surface::supports_wide_strokes`]. Everything else gets the offset-line
/// fallback: the polyline is redrawn `width` times with a thin pen, each copy
/// shifted vertically by one pixel.
use image::Rgba;
use serde::{Deserialize, Serialize};

use crate::constants::stroke::HAIRLINE_WIDTH;
use crate::geometry::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    /// Ends flush with the endpoints
    Butt,
    #[default]
    Round,
    /// Extends past the endpoints by half the width
    Square,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub cap: LineCap,
}

impl Stroke {
    pub fn new(width: u32) -> Self {
        Stroke { width: width as f32, cap: LineCap::default() }
    }

    pub fn with_cap(mut self, cap: LineCap) -> Self {
        self.cap = cap;
        self
    }
}

/// How thick strokes are produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum StrokeMode {
    /// Wide-segment primitive when the surface has one, offset lines otherwise
    #[default]
    Native,
    /// Always stack thin offset lines, matching the legacy artwork pixel for pixel
    OffsetLines,
}

/// Something strokes can be drawn onto
pub trait Surface {
    /// Thin line with a pen `width` pixels wide across the minor axis
    fn line(&mut self, from: Point, to: Point, width: u32, color: Rgba<u8>);

    fn supports_wide_strokes(&self) -> bool {
        false
    }

    /// Only called when [`Surface::supports_wide_strokes`] is true
    fn stroke_segment(&mut self, from: Point, to: Point, stroke: &Stroke, color: Rgba<u8>) {
        let _ = (from, to, stroke, color);
    }
}

/// Strokes the polyline through `points` onto `surface`
pub fn stroke_polyline<S: Surface + ?Sized>(
    surface: &mut S,
    points: &[Point],
    stroke: &Stroke,
    color: Rgba<u8>,
    mode: StrokeMode,
) {
    if mode == StrokeMode::Native && surface.supports_wide_strokes() {
        for pair in points.windows(2) {
            surface.stroke_segment(pair[0], pair[1], stroke, color);
        }
        // A lone point still leaves a dot
        if let [only] = points {
            surface.stroke_segment(*only, *only, stroke, color);
        }
        return;
    }

    let thickness = stroke.width.max(1.0) as i32;
    for i in 0..thickness {
        let offset = i - thickness / 2;
        for pair in points.windows(2) {
            surface.line(pair[0].offset(0, offset), pair[1].offset(0, offset), HAIRLINE_WIDTH, color);
        }
    }
}

/// Whether `(px, py)` is covered by a wide segment from `a` to `b`
pub(crate) fn segment_covers(a: Point, b: Point, stroke: &Stroke, px: f32, py: f32) -> bool {
    let half = stroke.width / 2.0;
    let (ax, ay) = (a.x as f32, a.y as f32);
    let (dx, dy) = (b.x as f32 - ax, b.y as f32 - ay);
    let len_sq = dx * dx + dy * dy;
    let (rx, ry) = (px - ax, py - ay);

    if len_sq == 0.0 {
        return match stroke.cap {
            LineCap::Butt => false,
            LineCap::Round => rx * rx + ry * ry <= half * half,
            LineCap::Square => rx.abs() <= half && ry.abs() <= half,
        };
    }

    let len = len_sq.sqrt();
    // Position along the segment and signed distance across it, in pixels
    let along = (rx * dx + ry * dy) / len;
    let across = (rx * dy - ry * dx) / len;
    if across.abs() > half {
        return false;
    }

    match stroke.cap {
        LineCap::Butt => (0.0..=len).contains(&along),
        LineCap::Square => (-half..=len + half).contains(&along),
        LineCap::Round => {
            if (0.0..=len).contains(&along) {
                true
            } else {
                let end = if along < 0.0 { 0.0 } else { len };
                let from_end = along - end;
                from_end * from_end + across * across <= half * half
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records calls instead of drawing
    #[derive(Default)]
    struct Recorder {
        wide: bool,
        lines: Vec<(Point, Point, u32)>,
        segments: Vec<(Point, Point)>,
    }

    impl Surface for Recorder {
        fn line(&mut self, from: Point, to: Point, width: u32, _color: Rgba<u8>) {
            self.lines.push((from, to, width));
        }

        fn supports_wide_strokes(&self) -> bool {
            self.wide
        }

        fn stroke_segment(&mut self, from: Point, to: Point, _stroke: &Stroke, _color: Rgba<u8>) {
            self.segments.push((from, to));
        }
    }

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

    fn checkmark() -> Vec<Point> {
        vec![Point::new(10, 10), Point::new(20, 30), Point::new(40, 0)]
    }

    #[test]
    fn test_native_stroke_uses_segments() {
        let mut surface = Recorder { wide: true, ..Default::default() };
        stroke_polyline(&mut surface, &checkmark(), &Stroke::new(6), WHITE, StrokeMode::Native);
        assert_eq!(surface.segments.len(), 2);
        assert!(surface.lines.is_empty());
    }

    #[test]
    fn test_falls_back_without_capability() {
        let mut surface = Recorder::default();
        stroke_polyline(&mut surface, &checkmark(), &Stroke::new(6), WHITE, StrokeMode::Native);
        assert!(surface.segments.is_empty());
        // 6 offsets x 2 segments
        assert_eq!(surface.lines.len(), 12);
    }

    #[test]
    fn test_offset_lines_span_the_width() {
        let mut surface = Recorder { wide: true, ..Default::default() };
        let points = [Point::new(0, 50), Point::new(100, 50)];
        stroke_polyline(&mut surface, &points, &Stroke::new(5), WHITE, StrokeMode::OffsetLines);

        let ys: Vec<i32> = surface.lines.iter().map(|(from, _, _)| from.y).collect();
        assert_eq!(ys, vec![48, 49, 50, 51, 52]);
        assert!(surface.lines.iter().all(|(_, _, width)| *width == HAIRLINE_WIDTH));
    }

    #[test]
    fn test_round_cap_covers_past_the_end() {
        let stroke = Stroke::new(10);
        let a = Point::new(0, 0);
        let b = Point::new(20, 0);
        assert!(segment_covers(a, b, &stroke, 10.0, 4.0));
        assert!(!segment_covers(a, b, &stroke, 10.0, 6.0));
        assert!(segment_covers(a, b, &stroke, 23.0, 0.0));
        assert!(!segment_covers(a, b, &stroke, 23.0, 4.5));
    }

    #[test]
    fn test_butt_and_square_caps() {
        let a = Point::new(0, 0);
        let b = Point::new(20, 0);
        let butt = Stroke::new(10).with_cap(LineCap::Butt);
        let square = Stroke::new(10).with_cap(LineCap::Square);

        assert!(!segment_covers(a, b, &butt, 23.0, 0.0));
        assert!(segment_covers(a, b, &square, 23.0, 4.0));
        assert!(!segment_covers(a, b, &square, 26.0, 0.0));
    }

    #[test]
    fn test_degenerate_segment_is_a_dot() {
        let p = Point::new(5, 5);
        assert!(segment_covers(p, p, &Stroke::new(4), 6.0, 6.0));
        assert!(!segment_covers(p, p, &Stroke::new(4).with_cap(LineCap::Butt), 5.0, 5.0));
    }
}
