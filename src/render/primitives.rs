use crate::error::{ChartError, ChartResult};

/// Straight-alpha RGBA color, channels in `0..=1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
        )
    }

    /// Parses `#rrggbb`, `#rgb` or one of the few color names used by charts.
    pub fn from_css(value: &str) -> ChartResult<Self> {
        let trimmed = value.trim();
        if let Some(hex) = trimmed.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| {
                ChartError::InvalidData(format!("invalid hex color `{value}`"))
            });
        }

        match trimmed.to_ascii_lowercase().as_str() {
            "yellow" => Ok(Self::from_rgb8(255, 255, 0)),
            "black" => Ok(Self::BLACK),
            "white" => Ok(Self::WHITE),
            "red" => Ok(Self::from_rgb8(255, 0, 0)),
            "green" => Ok(Self::from_rgb8(0, 128, 0)),
            "blue" => Ok(Self::from_rgb8(0, 0, 255)),
            "gray" | "grey" => Ok(Self::from_rgb8(128, 128, 128)),
            "transparent" => Ok(Self::TRANSPARENT),
            _ => Err(ChartError::InvalidData(format!(
                "unsupported color name `{value}`"
            ))),
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        let channels = [self.red, self.green, self.blue, self.alpha];
        ensure(
            channels.iter().all(|value| (0.0..=1.0).contains(value)),
            "color channels must lie in [0, 1]",
        )
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.is_ascii() {
        return None;
    }
    let channel = |digits: &str| u8::from_str_radix(digits, 16).ok();
    match hex.len() {
        6 => Some(Color::from_rgb8(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        3 => {
            let expand = |index: usize| channel(&hex[index..=index]).map(|v| v * 17);
            Some(Color::from_rgb8(expand(0)?, expand(1)?, expand(2)?))
        }
        _ => None,
    }
}

/// Straight rule in pixel space, e.g. the zero line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        ensure(
            all_finite(&[self.x1, self.y1, self.x2, self.y2]),
            "line endpoints must be finite",
        )?;
        ensure(positive(self.stroke_width), "line width must be > 0")?;
        self.color.validate()
    }
}

/// Bar or legend swatch: a filled rectangle with an optional outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill_color: Color,
    pub border_width: f64,
    pub border_color: Color,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64, fill_color: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill_color,
            border_width: 0.0,
            border_color: Color::TRANSPARENT,
        }
    }

    #[must_use]
    pub const fn with_border(mut self, border_width: f64, border_color: Color) -> Self {
        self.border_width = border_width;
        self.border_color = border_color;
        self
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.x + self.width
    }

    /// Zero-height bars are valid; they draw as a bare border.
    pub fn validate(self) -> ChartResult<()> {
        ensure(all_finite(&[self.x, self.y]), "rect origin must be finite")?;
        ensure(
            [self.width, self.height, self.border_width]
                .iter()
                .all(|side| side.is_finite() && *side >= 0.0),
            "rect size and border must be finite and >= 0",
        )?;
        self.fill_color.validate()?;
        self.border_color.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Vertical text alignment relative to `TextPrimitive::y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextVAlign {
    #[default]
    Top,
    Middle,
    Bottom,
}

/// One label anchored at `(x, y)`.
///
/// Rotated labels turn counter-clockwise around their anchor, so a vertical
/// axis title uses `rotation_quarter_turns = 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
    pub v_align: TextVAlign,
    pub rotation_quarter_turns: u8,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
            v_align: TextVAlign::Top,
            rotation_quarter_turns: 0,
        }
    }

    #[must_use]
    pub fn with_v_align(mut self, v_align: TextVAlign) -> Self {
        self.v_align = v_align;
        self
    }

    #[must_use]
    pub fn rotated_quarter_turns(mut self, turns: u8) -> Self {
        self.rotation_quarter_turns = turns % 4;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        ensure(!self.text.is_empty(), "label text must not be empty")?;
        ensure(all_finite(&[self.x, self.y]), "label anchor must be finite")?;
        ensure(positive(self.font_size_px), "label font size must be > 0")?;
        self.color.validate()
    }
}

fn ensure(condition: bool, message: &str) -> ChartResult<()> {
    if condition {
        Ok(())
    } else {
        Err(ChartError::InvalidData(message.to_owned()))
    }
}

fn all_finite(values: &[f64]) -> bool {
    values.iter().all(|value| value.is_finite())
}

fn positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
