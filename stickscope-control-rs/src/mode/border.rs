/// Border drawn around the display edge.
///
/// Cycles `Single → Double → Triple → None → Single` on each mode event.
/// `None` means the three nested rectangles are cleared once and nothing is
/// stroked until the style changes again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum BorderStyle {
    /// One rectangle.
    #[default]
    Single = 0,
    /// Two nested rectangles.
    Double = 1,
    /// Three nested rectangles.
    Triple = 2,
    /// No border.
    None = 3,
}

impl BorderStyle {
    /// Number of styles in the cycle.
    pub const COUNT: usize = 4;

    /// The following style, wrapping `None` back to `Single`.
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Style for an arbitrary index, reduced modulo [`COUNT`](Self::COUNT).
    pub fn from_index(index: usize) -> Self {
        match index % Self::COUNT {
            0 => BorderStyle::Single,
            1 => BorderStyle::Double,
            2 => BorderStyle::Triple,
            _ => BorderStyle::None,
        }
    }

    /// Position in the cycle, `0..=3`.
    pub fn index(self) -> usize {
        self as usize
    }

    /// How many of the nested rectangles this style strokes.
    pub fn stroke_count(self) -> usize {
        match self {
            BorderStyle::Single => 1,
            BorderStyle::Double => 2,
            BorderStyle::Triple => 3,
            BorderStyle::None => 0,
        }
    }
}
