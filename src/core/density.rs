use crate::error::{ChartError, ChartResult};

/// Dots-per-inch of the baseline screen where one dp equals one pixel.
pub const BASELINE_DPI: f64 = 160.0;

/// Conversion between density-independent units (dp) and device pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayDensity {
    scale: f64,
}

impl DisplayDensity {
    /// Builds a density from a dp-to-pixel scale factor (`2.0` for xhdpi).
    pub fn new(scale: f64) -> ChartResult<Self> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(ChartError::InvalidData(
                "display density scale must be finite and > 0".to_owned(),
            ));
        }
        Ok(Self { scale })
    }

    pub fn from_dpi(dpi: f64) -> ChartResult<Self> {
        Self::new(dpi / BASELINE_DPI)
    }

    #[must_use]
    pub const fn scale(self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn dpi(self) -> f64 {
        self.scale * BASELINE_DPI
    }

    #[must_use]
    pub fn dp_to_px(self, dp: f64) -> f64 {
        dp * self.scale
    }

    #[must_use]
    pub fn px_to_dp(self, px: f64) -> f64 {
        px / self.scale
    }
}

impl Default for DisplayDensity {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}
