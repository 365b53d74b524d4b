/// Fixed design parameters shared by every icon size

pub mod palette {
    /// Gradient color at row 0 (purple)
    pub const GRADIENT_TOP: [u8; 3] = [138, 119, 255];

    /// Gradient color approached at the last row (blue)
    pub const GRADIENT_BOTTOM: [u8; 3] = [99, 102, 241];

    /// Foreground shapes: checkmark, bars and growth curve
    pub const FOREGROUND: [u8; 4] = [255, 255, 255, 255];

    /// Depth highlight, barely visible on purpose
    pub const OVERLAY: [u8; 4] = [255, 255, 255, 15];
}

pub mod layout {
    /// Smallest edge length whose geometry is still meaningful
    pub const MIN_SIZE: u32 = 8;

    /// Checkmark span as a fraction of the icon size (45%)
    pub const CHECK_SPAN_RATIO: f64 = 0.45;

    /// Height of the tallest bar as a fraction of the icon size
    pub const TALLEST_BAR_RATIO: f64 = 0.4;

    pub const BAR_COUNT: usize = 4;

    /// Number of segments the growth curve is flattened into (31 samples)
    pub const CURVE_SEGMENTS: u32 = 30;

    /// Horizontal position of the curve's control points along its run
    pub const CURVE_CONTROL_1: f64 = 0.4;
    pub const CURVE_CONTROL_2: f64 = 0.6;
}

pub mod stroke {
    /// Thinnest checkmark stroke in pixels, applied below 90px icons
    pub const MIN_CHECK_WIDTH: u32 = 6;

    /// Thinnest curve stroke in pixels, applied below 100px icons
    pub const MIN_CURVE_WIDTH: u32 = 5;

    /// Pen width of a single line in the offset-line fallback
    pub const HAIRLINE_WIDTH: u32 = 2;
}
