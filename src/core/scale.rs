use ordered_float::OrderedFloat;

use crate::error::{ChartError, ChartResult};

/// Share of the value span added on the non-zero side(s) when autoranging.
pub const AUTORANGE_PADDING_RATIO: f64 = 0.05;

/// Linear map from a value domain onto a pixel interval.
///
/// `pixel_start` is where `domain_start` lands, so an inverted vertical axis
/// simply passes the bottom pixel first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    pixel_start: f64,
    pixel_end: f64,
}

impl LinearScale {
    pub fn new(
        domain_start: f64,
        domain_end: f64,
        pixel_start: f64,
        pixel_end: f64,
    ) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }
        if !pixel_start.is_finite() || !pixel_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale pixel range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            pixel_start,
            pixel_end,
        })
    }

    /// Builds a bar-chart value scale that always includes zero.
    pub fn autorange_with_zero(
        values: impl IntoIterator<Item = f64>,
        pixel_start: f64,
        pixel_end: f64,
    ) -> ChartResult<Self> {
        let (start, end) = autorange_with_zero(values);
        Self::new(start, end, pixel_start, pixel_end)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    pub fn domain_to_pixel(self, value: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        Ok(self.pixel_start + normalized * (self.pixel_end - self.pixel_start))
    }

    pub fn pixel_to_domain(self, pixel: f64) -> ChartResult<f64> {
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }
        if self.pixel_start == self.pixel_end {
            return Err(ChartError::InvalidData(
                "cannot invert a zero-length pixel range".to_owned(),
            ));
        }

        let normalized = (pixel - self.pixel_start) / (self.pixel_end - self.pixel_start);
        Ok(self.domain_start + normalized * (self.domain_end - self.domain_start))
    }
}

/// Value range `[min(0, lo), max(0, hi)]` padded on each non-zero side.
///
/// Non-finite values are ignored; an empty or all-zero input yields `[0, 1]`.
#[must_use]
pub fn autorange_with_zero(values: impl IntoIterator<Item = f64>) -> (f64, f64) {
    let finite: Vec<OrderedFloat<f64>> = values
        .into_iter()
        .filter(|value| value.is_finite())
        .map(OrderedFloat)
        .collect();
    let low = finite
        .iter()
        .min()
        .map_or(0.0, |value| value.into_inner())
        .min(0.0);
    let high = finite
        .iter()
        .max()
        .map_or(0.0, |value| value.into_inner())
        .max(0.0);

    let span = high - low;
    if span <= 0.0 {
        return (0.0, 1.0);
    }

    let padding = span * AUTORANGE_PADDING_RATIO;
    let start = if low < 0.0 { low - padding } else { 0.0 };
    let end = if high > 0.0 { high + padding } else { 0.0 };
    (start, end)
}
