//! Screen geometry: display configuration, the border table and cursor
//! placement.

use embedded_graphics::{
    prelude::{Point, Size},
    primitives::Rectangle,
};

use stickscope::{AxisPair, BorderStyle};

// ── DisplayConfig ────────────────────────────────────────────────────────

/// Screen and cursor geometry.
///
/// [`DisplayConfig::default()`] matches the 128×64 panel with an 8-px
/// cursor and a 12-bit joystick (full-scale deviation span of 4096 counts).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    /// Drawable width in pixels. Default: 128.
    pub width: u32,
    /// Drawable height in pixels. Default: 64.
    pub height: u32,
    /// Side of the square cursor in pixels. Default: 8.
    pub cursor_size: u32,
    /// Deviation that moves the cursor across the whole free width.
    /// Default: 4096.
    pub deviation_span: i32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 128,
            height: 64,
            cursor_size: 8,
            deviation_span: 4096,
        }
    }
}

impl DisplayConfig {
    /// Horizontal room left for the cursor's top-left corner.
    fn free_width(&self) -> i32 {
        self.width.saturating_sub(self.cursor_size) as i32
    }

    fn free_height(&self) -> i32 {
        self.height.saturating_sub(self.cursor_size) as i32
    }

    /// Square covered by a cursor whose top-left corner is `top_left`.
    pub fn cursor_rect(&self, top_left: Point) -> Rectangle {
        Rectangle::new(top_left, Size::new_equal(self.cursor_size))
    }
}

// ── Cursor placement ─────────────────────────────────────────────────────

/// Top-left corner of the cursor for a calibrated deviation.
///
/// Zero deviation puts the cursor in the exact centre of the free area.
/// Positive X moves right, positive Y moves up. The offset is
/// `deviation * free / deviation_span`, truncated toward zero, and the
/// result is clamped so the cursor never leaves the screen.
///
/// ```
/// use embedded_graphics::prelude::Point;
/// use stickscope::AxisPair;
/// use stickscope_oled_display_rs::{cursor_position, DisplayConfig};
///
/// let config = DisplayConfig::default();
/// assert_eq!(cursor_position(AxisPair::new(0, 0), &config), Point::new(60, 28));
/// ```
pub fn cursor_position(deviation: AxisPair<i32>, config: &DisplayConfig) -> Point {
    let span = config.deviation_span.max(1);
    let free_w = config.free_width();
    let free_h = config.free_height();

    let x = (free_w / 2).saturating_add(scale(deviation.x, free_w, span));
    let y = (free_h / 2).saturating_add(scale(deviation.y.saturating_neg(), free_h, span));

    Point::new(x.clamp(0, free_w), y.clamp(0, free_h))
}

fn scale(deviation: i32, free: i32, span: i32) -> i32 {
    // i64 keeps the product exact for any i32 deviation.
    let scaled = i64::from(deviation) * i64::from(free) / i64::from(span);
    scaled.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

// ── Border table ─────────────────────────────────────────────────────────

/// The nested border rectangles, outermost first.
///
/// A style strokes the first [`BorderStyle::stroke_count`] entries and
/// clears the rest.
pub const BORDER_RECTS: [Rectangle; 3] = [
    Rectangle::new(Point::new(3, 3), Size::new(122, 60)),
    Rectangle::new(Point::new(4, 4), Size::new(120, 58)),
    Rectangle::new(Point::new(5, 5), Size::new(118, 56)),
];

/// Rectangles stroked (`true`) or cleared (`false`) for `style`.
pub fn border_plan(style: BorderStyle) -> impl Iterator<Item = (Rectangle, bool)> {
    let strokes = style.stroke_count();
    BORDER_RECTS
        .into_iter()
        .enumerate()
        .map(move |(i, rect)| (rect, i < strokes))
}

/// Whether painting over `area` would wipe any stroke `style` draws.
pub fn border_overlaps(style: BorderStyle, area: &Rectangle) -> bool {
    border_plan(style)
        .filter(|&(_, stroked)| stroked)
        .any(|(rect, _)| outline_overlaps(&rect, area))
}

/// `area` touches the 1-px outline of `rect`: it intersects the rectangle
/// but does not sit entirely inside its interior.
fn outline_overlaps(rect: &Rectangle, area: &Rectangle) -> bool {
    if area.is_zero_sized() || rect.intersection(area).is_zero_sized() {
        return false;
    }
    let interior = Rectangle::new(
        rect.top_left + Point::new(1, 1),
        Size::new(
            rect.size.width.saturating_sub(2),
            rect.size.height.saturating_sub(2),
        ),
    );
    !contains(&interior, area)
}

fn contains(outer: &Rectangle, inner: &Rectangle) -> bool {
    let (ox, oy) = (outer.top_left.x, outer.top_left.y);
    let (ix, iy) = (inner.top_left.x, inner.top_left.y);
    ix >= ox
        && iy >= oy
        && ix + inner.size.width as i32 <= ox + outer.size.width as i32
        && iy + inner.size.height as i32 <= oy + outer.size.height as i32
}

// ── Tests ────────────────────────────────────────────────────────────────
