use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

pub fn ensure_finite(value: f64, field_name: &str) -> ChartResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ChartError::InvalidData(format!("{field_name} must be finite")))
    }
}

/// Clamps a text size in density-independent units to the supported label
/// range.
#[must_use]
pub fn clamp_text_size_dp(size: f64) -> f64 {
    size.clamp(MIN_TEXT_SIZE_DP, MAX_TEXT_SIZE_DP)
}

pub const MIN_TEXT_SIZE_DP: f64 = 6.0;
pub const MAX_TEXT_SIZE_DP: f64 = 24.0;
