//! UI models and metadata that should be available on both wasm and native.
//!
//! Keeping these out of the wasm-only `web` module allows us to unit-test
//! the output-row inventory and accent policy on the host.

use feewise::calc::RoundedBreakdown;

/// The five derived-output rows of the fee breakdown panel, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputLine {
    MarketplaceFee,
    PaymentFee,
    TotalFees,
    NetProfit,
    NetMargin,
}

/// Color accent applied to an output value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    /// Fee lines are always rendered in the "cost" color.
    Fee,
    Profit,
    Loss,
}

impl Accent {
    pub fn css_class(self) -> &'static str {
        match self {
            Accent::Fee => "accent-fee",
            Accent::Profit => "accent-profit",
            Accent::Loss => "accent-loss",
        }
    }
}

impl OutputLine {
    pub fn all() -> &'static [OutputLine] {
        &[
            OutputLine::MarketplaceFee,
            OutputLine::PaymentFee,
            OutputLine::TotalFees,
            OutputLine::NetProfit,
            OutputLine::NetMargin,
        ]
    }

    /// Base label; the marketplace and payment rows get the live fee terms
    /// appended by the shell.
    pub fn label(self) -> &'static str {
        match self {
            OutputLine::MarketplaceFee => "Marketplace Final Value Fee",
            OutputLine::PaymentFee => "Payment Fee",
            OutputLine::TotalFees => "Total Fees",
            OutputLine::NetProfit => "Net Profit",
            OutputLine::NetMargin => "Net Profit Margin",
        }
    }

    /// The summary rows are visually emphasized; the two intermediate fee
    /// lines are not.
    pub fn is_emphasis(self) -> bool {
        matches!(
            self,
            OutputLine::TotalFees | OutputLine::NetProfit | OutputLine::NetMargin
        )
    }

    /// Accent policy: fee lines always read as a cost; profit lines flip
    /// between profit and loss color on sign.
    pub fn accent(self, value_is_nonnegative: bool) -> Accent {
        match self {
            OutputLine::MarketplaceFee | OutputLine::PaymentFee | OutputLine::TotalFees => {
                Accent::Fee
            }
            OutputLine::NetProfit | OutputLine::NetMargin => {
                if value_is_nonnegative {
                    Accent::Profit
                } else {
                    Accent::Loss
                }
            }
        }
    }

    /// The display string for this row, without prefix/suffix decoration.
    pub fn value<'a>(self, rounded: &'a RoundedBreakdown) -> &'a str {
        match self {
            OutputLine::MarketplaceFee => &rounded.marketplace_fee,
            OutputLine::PaymentFee => &rounded.payment_fee,
            OutputLine::TotalFees => &rounded.total_fees,
            OutputLine::NetProfit => &rounded.net_profit,
            OutputLine::NetMargin => &rounded.net_margin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use feewise::calc::{compute, FeeInputs};

    #[test]
    fn output_line_inventory_is_stable() {
        let all = OutputLine::all();
        assert_eq!(all.len(), 5);

        let mut labels: Vec<&'static str> = all.iter().copied().map(OutputLine::label).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), 5);
    }

    #[test]
    fn summary_rows_are_emphasized() {
        assert!(!OutputLine::MarketplaceFee.is_emphasis());
        assert!(!OutputLine::PaymentFee.is_emphasis());
        assert!(OutputLine::TotalFees.is_emphasis());
        assert!(OutputLine::NetProfit.is_emphasis());
        assert!(OutputLine::NetMargin.is_emphasis());
    }

    #[test]
    fn accent_flips_only_on_profit_lines() {
        assert_eq!(OutputLine::TotalFees.accent(true), Accent::Fee);
        assert_eq!(OutputLine::TotalFees.accent(false), Accent::Fee);
        assert_eq!(OutputLine::NetProfit.accent(true), Accent::Profit);
        assert_eq!(OutputLine::NetProfit.accent(false), Accent::Loss);
        assert_eq!(OutputLine::NetMargin.accent(false), Accent::Loss);
    }

    #[test]
    fn values_map_to_their_rows() {
        let rounded = compute(&FeeInputs::default()).rounded();
        assert_eq!(OutputLine::MarketplaceFee.value(&rounded), "20.55");
        assert_eq!(OutputLine::PaymentFee.value(&rounded), "4.65");
        assert_eq!(OutputLine::TotalFees.value(&rounded), "25.20");
        assert_eq!(OutputLine::NetProfit.value(&rounded), "14.80");
        assert_eq!(OutputLine::NetMargin.value(&rounded), "9.87");
    }
}
