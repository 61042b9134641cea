use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};

pub const DEFAULT_HEIGHT_PX: u32 = 1440;
pub const DEFAULT_WIDTH_PX: u32 = 2560;
pub const DEFAULT_TITLE_FONT_SIZE: u32 = 60;
pub const DEFAULT_AXIS_FONT_SIZE: u32 = 60;
pub const DEFAULT_VALUE_FONT_SIZE: u32 = 40;
pub const DEFAULT_LEGEND_FONT_SIZE: u32 = 60;

/// Per-run rendering parameters shared by every chart of a workbook.
///
/// This type is serializable so hosts can keep a style next to their
/// workbooks; absent fields take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleConfig {
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_title_font_size")]
    pub title_font_size: u32,
    #[serde(default = "default_axis_font_size")]
    pub axis_font_size: u32,
    #[serde(default = "default_value_font_size")]
    pub value_font_size: u32,
    #[serde(default = "default_legend_font_size")]
    pub legend_font_size: u32,
    #[serde(default)]
    pub zero_line_on_y: bool,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            height: DEFAULT_HEIGHT_PX,
            width: DEFAULT_WIDTH_PX,
            title_font_size: DEFAULT_TITLE_FONT_SIZE,
            axis_font_size: DEFAULT_AXIS_FONT_SIZE,
            value_font_size: DEFAULT_VALUE_FONT_SIZE,
            legend_font_size: DEFAULT_LEGEND_FONT_SIZE,
            zero_line_on_y: false,
        }
    }
}

impl StyleConfig {
    /// Sets output image size in pixels.
    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_title_font_size(mut self, size: u32) -> Self {
        self.title_font_size = size;
        self
    }

    #[must_use]
    pub fn with_axis_font_size(mut self, size: u32) -> Self {
        self.axis_font_size = size;
        self
    }

    #[must_use]
    pub fn with_value_font_size(mut self, size: u32) -> Self {
        self.value_font_size = size;
        self
    }

    #[must_use]
    pub fn with_legend_font_size(mut self, size: u32) -> Self {
        self.legend_font_size = size;
        self
    }

    /// Toggles the horizontal line drawn at value zero.
    #[must_use]
    pub fn with_zero_line_on_y(mut self, enabled: bool) -> Self {
        self.zero_line_on_y = enabled;
        self
    }

    #[must_use]
    pub fn viewport(self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    /// Rejects zero sizes; every option must be strictly positive.
    pub fn validate(self) -> ChartResult<Self> {
        for field in StyleField::ALL {
            if self.get(field) == 0 {
                return Err(ChartError::Config {
                    field: field.name(),
                    reason: "must be > 0".to_owned(),
                });
            }
        }
        Ok(self)
    }

    #[must_use]
    pub fn get(self, field: StyleField) -> u32 {
        match field {
            StyleField::Height => self.height,
            StyleField::Width => self.width,
            StyleField::TitleFontSize => self.title_font_size,
            StyleField::AxisFontSize => self.axis_font_size,
            StyleField::ValueFontSize => self.value_font_size,
            StyleField::LegendFontSize => self.legend_font_size,
        }
    }

    pub fn set(&mut self, field: StyleField, value: u32) {
        match field {
            StyleField::Height => self.height = value,
            StyleField::Width => self.width = value,
            StyleField::TitleFontSize => self.title_font_size = value,
            StyleField::AxisFontSize => self.axis_font_size = value,
            StyleField::ValueFontSize => self.value_font_size = value,
            StyleField::LegendFontSize => self.legend_font_size = value,
        }
    }

    /// Serializes the style to pretty JSON.
    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self).map_err(|e| ChartError::Config {
            field: "style",
            reason: format!("failed to serialize style: {e}"),
        })
    }

    /// Deserializes and validates a style from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let style: Self = serde_json::from_str(input).map_err(|e| ChartError::Config {
            field: "style",
            reason: format!("failed to parse style: {e}"),
        })?;
        style.validate()
    }
}

/// Numeric options a host collects as free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleField {
    Height,
    Width,
    TitleFontSize,
    AxisFontSize,
    ValueFontSize,
    LegendFontSize,
}

impl StyleField {
    pub const ALL: [Self; 6] = [
        Self::Height,
        Self::Width,
        Self::TitleFontSize,
        Self::AxisFontSize,
        Self::ValueFontSize,
        Self::LegendFontSize,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Height => "height",
            Self::Width => "width",
            Self::TitleFontSize => "title_font_size",
            Self::AxisFontSize => "axis_font_size",
            Self::ValueFontSize => "value_font_size",
            Self::LegendFontSize => "legend_font_size",
        }
    }

    #[must_use]
    pub const fn default_value(self) -> u32 {
        match self {
            Self::Height => DEFAULT_HEIGHT_PX,
            Self::Width => DEFAULT_WIDTH_PX,
            Self::TitleFontSize => DEFAULT_TITLE_FONT_SIZE,
            Self::AxisFontSize => DEFAULT_AXIS_FONT_SIZE,
            Self::ValueFontSize => DEFAULT_VALUE_FONT_SIZE,
            Self::LegendFontSize => DEFAULT_LEGEND_FONT_SIZE,
        }
    }

    /// Parses one text field: blank means default, anything else must be a
    /// positive integer.
    pub fn parse(self, text: &str) -> ChartResult<u32> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(self.default_value());
        }
        match trimmed.parse::<u32>() {
            Ok(0) => Err(ChartError::Config {
                field: self.name(),
                reason: "must be > 0".to_owned(),
            }),
            Ok(value) => Ok(value),
            Err(err) => Err(ChartError::Config {
                field: self.name(),
                reason: format!("`{trimmed}` is not a positive integer: {err}"),
            }),
        }
    }
}

/// Raw form input: six optional integer fields and the zero-line checkbox.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleConfigText {
    pub height: String,
    pub width: String,
    pub title_font_size: String,
    pub axis_font_size: String,
    pub value_font_size: String,
    pub legend_font_size: String,
    pub zero_line_on_y: bool,
}

impl StyleConfigText {
    #[must_use]
    pub fn field(&self, field: StyleField) -> &str {
        match field {
            StyleField::Height => &self.height,
            StyleField::Width => &self.width,
            StyleField::TitleFontSize => &self.title_font_size,
            StyleField::AxisFontSize => &self.axis_font_size,
            StyleField::ValueFontSize => &self.value_font_size,
            StyleField::LegendFontSize => &self.legend_font_size,
        }
    }

    pub fn field_mut(&mut self, field: StyleField) -> &mut String {
        match field {
            StyleField::Height => &mut self.height,
            StyleField::Width => &mut self.width,
            StyleField::TitleFontSize => &mut self.title_font_size,
            StyleField::AxisFontSize => &mut self.axis_font_size,
            StyleField::ValueFontSize => &mut self.value_font_size,
            StyleField::LegendFontSize => &mut self.legend_font_size,
        }
    }

    /// Fails on the first field that is neither blank nor a positive integer.
    pub fn parse_strict(&self) -> ChartResult<StyleConfig> {
        let mut style = StyleConfig::default().with_zero_line_on_y(self.zero_line_on_y);
        for field in StyleField::ALL {
            style.set(field, field.parse(self.field(field))?);
        }
        Ok(style)
    }

    /// Keeps the default for every invalid field and reports what was replaced.
    #[must_use]
    pub fn parse_lenient(&self) -> (StyleConfig, Vec<ChartError>) {
        let mut style = StyleConfig::default().with_zero_line_on_y(self.zero_line_on_y);
        let mut issues = Vec::new();
        for field in StyleField::ALL {
            match field.parse(self.field(field)) {
                Ok(value) => style.set(field, value),
                Err(err) => issues.push(err),
            }
        }
        (style, issues)
    }
}

fn default_height() -> u32 {
    DEFAULT_HEIGHT_PX
}

fn default_width() -> u32 {
    DEFAULT_WIDTH_PX
}

fn default_title_font_size() -> u32 {
    DEFAULT_TITLE_FONT_SIZE
}

fn default_axis_font_size() -> u32 {
    DEFAULT_AXIS_FONT_SIZE
}

fn default_value_font_size() -> u32 {
    DEFAULT_VALUE_FONT_SIZE
}

fn default_legend_font_size() -> u32 {
    DEFAULT_LEGEND_FONT_SIZE
}
