//! Incremental frame renderer.
//!
//! The panel transfer is the most expensive step of a tick, so nothing is
//! cleared wholesale. Each [`Renderer::render`] call touches only:
//!
//! 1. the border rectangles, when the style changed since the last drawn
//!    frame or the previous cursor erase cut into a stroke;
//! 2. the cursor square at its previous position (painted background);
//! 3. the cursor square at its new position (painted foreground).
//!
//! The border always goes down before the cursor, so the cursor overlays it.
//! The caller sends the frame once afterwards.

use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, StrokeAlignment},
};

use stickscope::{AxisPair, BorderStyle};

use crate::layout::{border_overlaps, border_plan, cursor_position, DisplayConfig};

/// Outline (`fill == false`) or solid (`fill == true`) rectangle in `color`.
pub fn stroke_rect<D>(
    target: &mut D,
    rect: Rectangle,
    color: BinaryColor,
    fill: bool,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let style = if fill {
        PrimitiveStyle::with_fill(color)
    } else {
        PrimitiveStyleBuilder::new()
            .stroke_color(color)
            .stroke_width(1)
            .stroke_alignment(StrokeAlignment::Inside)
            .build()
    };
    rect.into_styled(style).draw(target)
}

/// Cursor and border state carried between frames.
pub struct Renderer {
    config: DisplayConfig,
    /// Style currently on the panel; `None` before the first frame.
    drawn_border: Option<BorderStyle>,
    /// The last cursor erase painted over a border stroke.
    border_damaged: bool,
    /// Cursor drawn by the previous frame.
    previous_cursor: Option<Point>,
}

impl Renderer {
    pub fn new(config: DisplayConfig) -> Self {
        Self {
            config,
            drawn_border: None,
            border_damaged: false,
            previous_cursor: None,
        }
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Top-left corner of the cursor drawn by the last frame.
    pub fn cursor(&self) -> Option<Point> {
        self.previous_cursor
    }

    /// Paint one frame into `target` and return the new cursor position.
    ///
    /// `deviation` is the calibrated (not dead-zoned) joystick deviation.
    pub fn render<D>(
        &mut self,
        target: &mut D,
        border: BorderStyle,
        deviation: AxisPair<i32>,
    ) -> Result<Point, D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        if self.drawn_border != Some(border) || self.border_damaged {
            Self::draw_border(target, border)?;
            self.drawn_border = Some(border);
            self.border_damaged = false;
        }

        let cursor = cursor_position(deviation, &self.config);

        // Erase strictly before drawing: when the positions coincide the new
        // square must be what remains.
        if let Some(previous) = self.previous_cursor {
            let erased = self.config.cursor_rect(previous);
            stroke_rect(target, erased, BinaryColor::Off, true)?;
            self.border_damaged = border_overlaps(border, &erased);
        }
        stroke_rect(target, self.config.cursor_rect(cursor), BinaryColor::On, true)?;

        self.previous_cursor = Some(cursor);
        Ok(cursor)
    }

    /// Stroke the rectangles `style` uses and clear the others.
    ///
    /// For [`BorderStyle::None`] this clears all three; it runs once when
    /// the style is entered and not again until something changes.
    fn draw_border<D>(target: &mut D, style: BorderStyle) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        #[cfg(feature = "defmt")]
        defmt::debug!("border -> {}", style);

        for (rect, stroked) in border_plan(style) {
            let color = if stroked {
                BinaryColor::On
            } else {
                BinaryColor::Off
            };
            stroke_rect(target, rect, color, false)?;
        }
        Ok(())
    }
}
