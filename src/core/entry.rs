use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{decimal_to_f64, ensure_finite};
use crate::error::{ChartError, ChartResult};

/// Point capability shared by every entry a data set can hold.
pub trait ChartEntry {
    /// Value plotted on the value axis.
    fn value(&self) -> f64;

    /// Position on the category (x) axis.
    fn x_index(&self) -> usize;

    /// Typed view of the concrete entry, for consumers that need the
    /// variant-specific fields (marker content, tooltips).
    fn kind(&self) -> EntryKind<'_>;
}

/// Closed set of entry shapes known to the chart families.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntryKind<'a> {
    Point(&'a Entry),
    Bar(&'a BarEntry),
    Candle(&'a CandleEntry),
}

/// Plain value at a category index, used by line and scatter series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    value: f64,
    x_index: usize,
}

impl Entry {
    pub fn new(value: f64, x_index: usize) -> ChartResult<Self> {
        Ok(Self {
            value: ensure_finite(value, "entry value")?,
            x_index,
        })
    }

    pub fn from_decimal(value: Decimal, x_index: usize) -> ChartResult<Self> {
        Self::new(decimal_to_f64(value, "entry value")?, x_index)
    }

    pub fn set_value(&mut self, value: f64) -> ChartResult<()> {
        self.value = ensure_finite(value, "entry value")?;
        Ok(())
    }
}

impl ChartEntry for Entry {
    fn value(&self) -> f64 {
        self.value
    }

    fn x_index(&self) -> usize {
        self.x_index
    }

    fn kind(&self) -> EntryKind<'_> {
        EntryKind::Point(self)
    }
}

/// Bar value, optionally split into stacked segments.
///
/// The plotted value of a stacked bar is the sum of its segments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarEntry {
    x_index: usize,
    value: f64,
    stack: Option<Vec<f64>>,
}

impl BarEntry {
    pub fn new(value: f64, x_index: usize) -> ChartResult<Self> {
        Ok(Self {
            x_index,
            value: ensure_finite(value, "bar value")?,
            stack: None,
        })
    }

    pub fn stacked(values: Vec<f64>, x_index: usize) -> ChartResult<Self> {
        if values.is_empty() {
            return Err(ChartError::InvalidData(
                "stacked bar requires at least one segment".to_owned(),
            ));
        }
        for value in &values {
            ensure_finite(*value, "stacked bar segment")?;
        }
        Ok(Self {
            x_index,
            value: values.iter().sum(),
            stack: Some(values),
        })
    }

    #[must_use]
    pub fn stack(&self) -> Option<&[f64]> {
        self.stack.as_deref()
    }

    #[must_use]
    pub fn is_stacked(&self) -> bool {
        self.stack.is_some()
    }
}

impl ChartEntry for BarEntry {
    fn value(&self) -> f64 {
        self.value
    }

    fn x_index(&self) -> usize {
        self.x_index
    }

    fn kind(&self) -> EntryKind<'_> {
        EntryKind::Bar(self)
    }
}

/// OHLC entry for candlestick series; plotted at its close.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandleEntry {
    pub x_index: usize,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl CandleEntry {
    /// Builds a validated candle.
    ///
    /// Invariants:
    /// - all prices are finite
    /// - `low <= high`
    /// - `open` and `close` are within `[low, high]`
    pub fn new(x_index: usize, open: f64, high: f64, low: f64, close: f64) -> ChartResult<Self> {
        if !open.is_finite() || !high.is_finite() || !low.is_finite() || !close.is_finite() {
            return Err(ChartError::InvalidData(
                "candle prices must be finite".to_owned(),
            ));
        }
        if low > high {
            return Err(ChartError::InvalidData(
                "candle low must be <= high".to_owned(),
            ));
        }
        if open < low || open > high || close < low || close > high {
            return Err(ChartError::InvalidData(
                "candle open/close must be within low/high range".to_owned(),
            ));
        }
        Ok(Self {
            x_index,
            open,
            high,
            low,
            close,
        })
    }

    pub fn from_decimal(
        x_index: usize,
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
    ) -> ChartResult<Self> {
        Self::new(
            x_index,
            decimal_to_f64(open, "open")?,
            decimal_to_f64(high, "high")?,
            decimal_to_f64(low, "low")?,
            decimal_to_f64(close, "close")?,
        )
    }

    #[must_use]
    pub fn is_bullish(&self) -> bool {
        self.close >= self.open
    }
}

impl ChartEntry for CandleEntry {
    fn value(&self) -> f64 {
        self.close
    }

    fn x_index(&self) -> usize {
        self.x_index
    }

    fn kind(&self) -> EntryKind<'_> {
        EntryKind::Candle(self)
    }
}
