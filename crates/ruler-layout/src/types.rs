use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum RulerError {
    #[error("track source is not registered with this ruler")]
    UntrackedSource,
    #[error("track source is already registered with this ruler")]
    DuplicateSource,
}

pub type Result<T> = std::result::Result<T, RulerError>;

/// Which axis the ruler measures along
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Ruler runs left to right along the top or bottom of a view
    Horizontal,
    /// Ruler runs top to bottom along the side of a view
    Vertical,
}

/// Measurement unit; selects the metric table governing tick density
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Unit {
    /// Base-10 scale steps (1, 2, 5, 10, 25, ...)
    Decimal,
    /// Power-of-two scale steps (1, 2, 4, 8, ...)
    #[default]
    Inches,
    // Feet and yards existed historically but their tables were never wired up.
}

/// Value range covered by the ruler's visible extent
///
/// `max_size` is the value used to estimate the widest label the ruler will
/// ever have to draw; it is not necessarily equal to `upper`. There is no
/// ordering invariant: `lower > upper` is a reversed axis and
/// `lower == upper` is degenerate (no ticks are produced).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RulerRange {
    pub lower: f64,
    pub upper: f64,
    pub max_size: f64,
}

impl RulerRange {
    pub fn new(lower: f64, upper: f64, max_size: f64) -> Self {
        Self {
            lower,
            upper,
            max_size,
        }
    }

    /// True when the bounds coincide and no pixel mapping exists
    pub fn is_degenerate(&self) -> bool {
        self.upper == self.lower
    }

    /// Pixels per value unit over the given extent (negative for a
    /// reversed axis). Caller must check `is_degenerate` first.
    pub fn pixels_per_unit(&self, extent_px: f64) -> f64 {
        extent_px / (self.upper - self.lower)
    }
}

/// Border insets the host style contributes around the ruler face
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BorderInsets {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

impl BorderInsets {
    pub fn horizontal(&self) -> i32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> i32 {
        self.top + self.bottom
    }
}

/// Allocation the host has given the ruler widget
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RulerGeometry {
    /// Allocated width in pixels
    pub width: i32,
    /// Allocated height in pixels
    pub height: i32,
    /// Style border around the drawable face
    pub border: BorderInsets,
}

impl RulerGeometry {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            border: BorderInsets::default(),
        }
    }

    pub fn with_border(mut self, border: BorderInsets) -> Self {
        self.border = border;
        self
    }

    /// Pixel extent along the measurement axis
    pub fn extent(&self, orientation: Orientation) -> i32 {
        match orientation {
            Orientation::Horizontal => self.width,
            Orientation::Vertical => self.height,
        }
    }

    /// Pixel breadth across the measurement axis, inside the border
    pub fn breadth(&self, orientation: Orientation) -> i32 {
        match orientation {
            Orientation::Horizontal => self.height - self.border.vertical(),
            Orientation::Vertical => self.width - self.border.vertical(),
        }
    }
}

/// Pixel rectangle occupied by the position indicator
///
/// All-zero means "no indicator drawn". Width and height are kept odd so the
/// marker triangle renders symmetrically around its center line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IndicatorRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl IndicatorRect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Smallest rectangle covering both inputs; an empty side contributes
    /// nothing.
    pub fn union(&self, other: &IndicatorRect) -> IndicatorRect {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = (self.x + self.width).max(other.x + other.width);
        let bottom = (self.y + self.height).max(other.y + other.height);
        IndicatorRect::new(x, y, right - x, bottom - y)
    }
}

/// Digit glyph measurements the host text system provides
///
/// Measured once from shaping the run `"0123456789"` in the ruler's label
/// font.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    /// Ink height in pixels of the digit glyphs
    pub glyph_height: f64,
}

impl TextMetrics {
    pub fn new(glyph_height: f64) -> Self {
        Self { glyph_height }
    }

    /// Height of one label line: the glyph ink plus 2 px of breathing room
    pub fn digit_height(&self) -> f64 {
        self.glyph_height + 2.0
    }
}
