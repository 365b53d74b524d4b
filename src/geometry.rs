/// Icon geometry derived from the edge length
///
/// Every coordinate is a function of the icon size alone. Integer-valued
/// quantities use truncating division so that the same size always lands on
/// the same pixels; only the growth curve's control points are fractional.
use crate::constants::{layout, stroke};

/// A pixel position. May lie outside the canvas; painting clips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Point::new(self.x + dx, self.y + dy)
    }
}

/// Axis-aligned rectangle with inclusive bounds and uniformly rounded corners
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundedRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub radius: i32,
}

impl RoundedRect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32, radius: i32) -> Self {
        RoundedRect { left, top, right, bottom, radius }
    }

    /// Corner radius clamped so opposite corners never overlap
    pub fn effective_radius(&self) -> i32 {
        let half_w = (self.right - self.left) / 2;
        let half_h = (self.bottom - self.top) / 2;
        self.radius.clamp(0, half_w.min(half_h).max(0))
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        if x < self.left || x > self.right || y < self.top || y > self.bottom {
            return false;
        }

        let r = self.effective_radius();
        if r == 0 {
            return true;
        }

        // Outside the corner squares the rectangle is solid
        let corner_x = if x < self.left + r {
            self.left + r
        } else if x > self.right - r {
            self.right - r
        } else {
            return true;
        };
        let corner_y = if y < self.top + r {
            self.top + r
        } else if y > self.bottom - r {
            self.bottom - r
        } else {
            return true;
        };

        let dx = (x - corner_x) as i64;
        let dy = (y - corner_y) as i64;
        dx * dx + dy * dy <= (r as i64) * (r as i64)
    }
}

/// Cubic Bézier curve in continuous coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub start: (f64, f64),
    pub control1: (f64, f64),
    pub control2: (f64, f64),
    pub end: (f64, f64),
}

impl CubicBezier {
    pub fn point_at(&self, t: f64) -> (f64, f64) {
        let u = 1.0 - t;
        let w0 = u * u * u;
        let w1 = 3.0 * u * u * t;
        let w2 = 3.0 * u * t * t;
        let w3 = t * t * t;

        let x = w0 * self.start.0 + w1 * self.control1.0 + w2 * self.control2.0 + w3 * self.end.0;
        let y = w0 * self.start.1 + w1 * self.control1.1 + w2 * self.control2.1 + w3 * self.end.1;
        (x, y)
    }

    /// Flattens the curve into `segments + 1` evenly spaced samples,
    /// truncated toward zero onto the pixel grid.
    pub fn sample(&self, segments: u32) -> Vec<Point> {
        let segments = segments.max(1);
        (0..=segments)
            .map(|i| {
                let (x, y) = self.point_at(i as f64 / segments as f64);
                Point::new(x as i32, y as i32)
            })
            .collect()
    }
}

/// All shape positions for one icon size
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub size: u32,

    /// Radius of the background's rounded corners
    pub corner_radius: i32,

    /// Checkmark vertices: start of the short stroke, the bend, tip of the long stroke
    pub checkmark: [Point; 3],
    pub check_width: u32,

    pub bars: [RoundedRect; layout::BAR_COUNT],

    pub curve: CubicBezier,
    pub curve_width: u32,

    pub overlay_center: Point,
    pub overlay_radius: i32,
}

impl Layout {
    pub fn for_size(size: u32) -> Self {
        let s = size as i32;
        let center = s / 2;

        // Checkmark sits up and to the left of the center
        let span = (size as f64 * layout::CHECK_SPAN_RATIO) as i32;
        let check_cx = center - s / 8;
        let check_cy = center - s / 10;
        let checkmark = [
            Point::new(check_cx - span / 3, check_cy - span / 6),
            Point::new(check_cx - span / 10, check_cy + span / 4),
            Point::new(check_cx + span / 2, check_cy - span / 2),
        ];

        // Bars form one centered row with aligned bottoms
        let bar_width = s / 8;
        let bar_spacing = s / 15;
        let heights = [s / 5, s / 4, s / 3, (size as f64 * layout::TALLEST_BAR_RATIO) as i32];
        let count = layout::BAR_COUNT as i32;
        let row_width = count * bar_width + (count - 1) * bar_spacing;
        let bars_left = center - row_width / 2;
        let bars_bottom = s - s / 8;
        let bars = std::array::from_fn(|i| {
            let left = bars_left + i as i32 * (bar_width + bar_spacing);
            RoundedRect::new(
                left,
                bars_bottom - heights[i],
                left + bar_width,
                bars_bottom,
                bar_width / 4,
            )
        });

        // Curve runs from past the checkmark's bend to above the tallest bar
        let start = (
            (check_cx + span / 4) as f64,
            (check_cy + span / 6) as f64,
        );
        let end_x = bars_left + count * (bar_width + bar_spacing) - bar_spacing;
        let end_y = bars_bottom - heights[layout::BAR_COUNT - 1] - s / 12;
        let end = (end_x as f64, end_y as f64);
        let run = end.0 - start.0;
        let curve = CubicBezier {
            start,
            control1: (start.0 + run * layout::CURVE_CONTROL_1, (start.1 as i32 - s / 15) as f64),
            control2: (start.0 + run * layout::CURVE_CONTROL_2, (end_y + s / 20) as f64),
            end,
        };

        Layout {
            size,
            corner_radius: s / 5,
            checkmark,
            check_width: stroke::MIN_CHECK_WIDTH.max(size / 15),
            bars,
            curve,
            curve_width: stroke::MIN_CURVE_WIDTH.max(size / 20),
            overlay_center: Point::new(center + s / 6, center - s / 8),
            overlay_radius: s / 2,
        }
    }

    /// The growth curve flattened into the polyline that gets stroked
    pub fn curve_points(&self) -> Vec<Point> {
        self.curve.sample(layout::CURVE_SEGMENTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_192() {
        let layout = Layout::for_size(192);
        assert_eq!(layout.corner_radius, 38);
        assert_eq!(layout.check_width, 12);
        assert_eq!(layout.curve_width, 9);

        // center 96, check center (72, 77), span 86
        assert_eq!(layout.checkmark[0], Point::new(44, 63));
        assert_eq!(layout.checkmark[1], Point::new(64, 98));
        assert_eq!(layout.checkmark[2], Point::new(115, 34));

        assert_eq!(layout.overlay_center, Point::new(128, 72));
        assert_eq!(layout.overlay_radius, 96);
    }

    #[test]
    fn test_bars_ascend_and_share_bottom() {
        let layout = Layout::for_size(512);
        for pair in layout.bars.windows(2) {
            assert!(pair[0].top > pair[1].top);
            assert!(pair[0].right < pair[1].left);
            assert_eq!(pair[0].bottom, pair[1].bottom);
        }
        assert_eq!(layout.bars[0].bottom, 512 - 64);
        assert_eq!(layout.bars[0].radius, 16);
    }

    #[test]
    fn test_bar_row_is_centered() {
        let layout = Layout::for_size(192);
        let left_margin = layout.bars[0].left;
        let right_margin = 192 - layout.bars[3].right;
        assert!((left_margin - right_margin).abs() <= 2);
    }

    #[test]
    fn test_minimum_stroke_widths() {
        let layout = Layout::for_size(16);
        assert_eq!(layout.check_width, 6);
        assert_eq!(layout.curve_width, 5);
    }

    #[test]
    fn test_curve_endpoints() {
        let layout = Layout::for_size(192);
        let points = layout.curve_points();
        assert_eq!(points.len(), 31);
        assert_eq!(points[0], Point::new(93, 91));
        // end x = right edge of the bar row, end y = top of tallest bar - 16
        assert_eq!(points[30], Point::new(162, 76));
    }

    #[test]
    fn test_bezier_hits_endpoints() {
        let curve = CubicBezier {
            start: (0.0, 0.0),
            control1: (10.0, 50.0),
            control2: (20.0, -50.0),
            end: (30.0, 0.0),
        };
        assert_eq!(curve.point_at(0.0), (0.0, 0.0));
        assert_eq!(curve.point_at(1.0), (30.0, 0.0));
    }

    #[test]
    fn test_rounded_rect_corners() {
        let rect = RoundedRect::new(0, 0, 99, 99, 20);
        assert!(!rect.contains(0, 0));
        assert!(!rect.contains(99, 0));
        assert!(!rect.contains(0, 99));
        assert!(!rect.contains(99, 99));
        assert!(rect.contains(50, 0));
        assert!(rect.contains(0, 50));
        assert!(rect.contains(20, 20));
        assert!(!rect.contains(100, 50));
        assert!(!rect.contains(-1, 50));
    }

    #[test]
    fn test_rounded_rect_radius_is_clamped() {
        let rect = RoundedRect::new(0, 0, 9, 3, 50);
        assert_eq!(rect.effective_radius(), 1);
    }
}
