//! Two-slice projection for the fee-split chart.
//!
//! The chart shows what the user reads on screen: slice values are the
//! rounded display strings parsed back to numbers, not the raw breakdown.

use crate::calc::RoundedBreakdown;

/// One slice of the fees-vs-profit pie.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartSlice {
    pub label: &'static str,
    /// Signed value; a loss makes the net-profit slice negative.
    pub value: f64,
}

impl ChartSlice {
    /// Area contributed to the pie.
    ///
    /// Negative values chart by magnitude (the legend carries the sign);
    /// non-finite values contribute nothing.
    pub fn area_weight(&self) -> f64 {
        if self.value.is_finite() {
            self.value.abs()
        } else {
            0.0
        }
    }
}

/// Project a rounded breakdown into the fixed fees/profit slice pair.
pub fn slices(rounded: &RoundedBreakdown) -> [ChartSlice; 2] {
    [
        ChartSlice {
            label: "Total Fees",
            value: reparse(&rounded.total_fees),
        },
        ChartSlice {
            label: "Net Profit",
            value: reparse(&rounded.net_profit),
        },
    ]
}

/// Sum of drawable slice area. Zero means the renderer should show its
/// empty state instead of a degenerate pie.
pub fn total_area(slices: &[ChartSlice]) -> f64 {
    slices.iter().map(ChartSlice::area_weight).sum()
}

fn reparse(display: &str) -> f64 {
    display.parse().unwrap_or(f64::NAN)
}
