//! Input record, derived fee breakdown, and input coercion.
//!
//! [`compute`] is a total, side-effect-free function: identical inputs give
//! identical outputs, nothing panics, and every arithmetic path is defined
//! (a sale price of zero yields a non-finite margin, which the display
//! layer renders as a placeholder).

#[cfg(not(feature = "std"))]
use alloc::string::String;

use crate::fmt::{fmt_f64_fixed, NON_FINITE_PLACEHOLDER};

/// The eight numeric fields of the calculator form.
///
/// Every field is a plain `f64`; the input boundary coerces unparseable
/// text to `0.0` before it ever reaches this struct, so no variant state
/// is needed here.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeeInputs {
    pub sale_price: f64,
    pub cost_price: f64,
    pub listing_fee: f64,
    pub payment_fee_pct: f64,
    pub payment_fee_fixed: f64,
    pub marketplace_fee_pct: f64,
    pub shipping_cost: f64,
    pub additional_fees: f64,
}

impl Default for FeeInputs {
    fn default() -> Self {
        Self {
            sale_price: 150.0,
            cost_price: 100.0,
            listing_fee: 0.30,
            payment_fee_pct: 2.9,
            payment_fee_fixed: 0.30,
            marketplace_fee_pct: 13.5,
            shipping_cost: 10.0,
            additional_fees: 0.0,
        }
    }
}

/// Addressable handle for one [`FeeInputs`] field.
///
/// Lets the form iterate a schema instead of hand-writing eight rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    SalePrice,
    CostPrice,
    ListingFee,
    PaymentFeePct,
    PaymentFeeFixed,
    MarketplaceFeePct,
    ShippingCost,
    AdditionalFees,
}

impl InputField {
    pub fn all() -> &'static [InputField] {
        &[
            InputField::SalePrice,
            InputField::CostPrice,
            InputField::ListingFee,
            InputField::PaymentFeePct,
            InputField::PaymentFeeFixed,
            InputField::MarketplaceFeePct,
            InputField::ShippingCost,
            InputField::AdditionalFees,
        ]
    }

    pub fn key(self) -> &'static str {
        match self {
            InputField::SalePrice => "sale_price",
            InputField::CostPrice => "cost_price",
            InputField::ListingFee => "listing_fee",
            InputField::PaymentFeePct => "payment_fee_pct",
            InputField::PaymentFeeFixed => "payment_fee_fixed",
            InputField::MarketplaceFeePct => "marketplace_fee_pct",
            InputField::ShippingCost => "shipping_cost",
            InputField::AdditionalFees => "additional_fees",
        }
    }

    pub fn get(self, inputs: &FeeInputs) -> f64 {
        match self {
            InputField::SalePrice => inputs.sale_price,
            InputField::CostPrice => inputs.cost_price,
            InputField::ListingFee => inputs.listing_fee,
            InputField::PaymentFeePct => inputs.payment_fee_pct,
            InputField::PaymentFeeFixed => inputs.payment_fee_fixed,
            InputField::MarketplaceFeePct => inputs.marketplace_fee_pct,
            InputField::ShippingCost => inputs.shipping_cost,
            InputField::AdditionalFees => inputs.additional_fees,
        }
    }

    pub fn set(self, inputs: &mut FeeInputs, value: f64) {
        match self {
            InputField::SalePrice => inputs.sale_price = value,
            InputField::CostPrice => inputs.cost_price = value,
            InputField::ListingFee => inputs.listing_fee = value,
            InputField::PaymentFeePct => inputs.payment_fee_pct = value,
            InputField::PaymentFeeFixed => inputs.payment_fee_fixed = value,
            InputField::MarketplaceFeePct => inputs.marketplace_fee_pct = value,
            InputField::ShippingCost => inputs.shipping_cost = value,
            InputField::AdditionalFees => inputs.additional_fees = value,
        }
    }

    /// The value this field takes in [`FeeInputs::default`].
    pub fn default_value(self) -> f64 {
        self.get(&FeeInputs::default())
    }
}

/// Coerce raw text from an input box into a field value.
///
/// The only validation the calculator performs: parse as `f64`, and fall
/// back to `0.0` on anything unparseable or non-finite. No range checks;
/// negative values pass through.
pub fn coerce(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// The five derived values, recomputed whole on every input change.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeeBreakdown {
    /// Percentage-based marketplace fee with the flat listing fee folded in.
    /// This is the displayed "marketplace fee" line; [`FeeBreakdown::total_fees`]
    /// counts the listing fee once on its own, never twice.
    pub marketplace_fee: f64,
    pub payment_fee: f64,
    pub total_fees: f64,
    pub net_profit: f64,
    /// Net profit as a percentage of sale price. Non-finite when
    /// `sale_price == 0`.
    pub net_margin_pct: f64,
}

/// Derive the fee breakdown from the current inputs.
pub fn compute(inputs: &FeeInputs) -> FeeBreakdown {
    let marketplace_pct_fee = inputs.sale_price * (inputs.marketplace_fee_pct / 100.0);
    let payment_fee = inputs.sale_price * (inputs.payment_fee_pct / 100.0) + inputs.payment_fee_fixed;
    let total_fees =
        inputs.listing_fee + marketplace_pct_fee + payment_fee + inputs.additional_fees;
    let net_profit = inputs.sale_price - (total_fees + inputs.shipping_cost + inputs.cost_price);
    let net_margin_pct = net_profit / inputs.sale_price * 100.0;

    FeeBreakdown {
        marketplace_fee: marketplace_pct_fee + inputs.listing_fee,
        payment_fee,
        total_fees,
        net_profit,
        net_margin_pct,
    }
}

/// The breakdown as 2-decimal display strings.
///
/// The chart consumes these strings parsed back to numbers, not the raw
/// breakdown, so its proportions match what the user reads on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundedBreakdown {
    pub marketplace_fee: String,
    pub payment_fee: String,
    pub total_fees: String,
    pub net_profit: String,
    /// "—" when the margin is non-finite (sale price of zero).
    pub net_margin: String,
}

impl FeeBreakdown {
    pub fn rounded(&self) -> RoundedBreakdown {
        RoundedBreakdown {
            marketplace_fee: fmt_f64_fixed(self.marketplace_fee, 2),
            payment_fee: fmt_f64_fixed(self.payment_fee, 2),
            total_fees: fmt_f64_fixed(self.total_fees, 2),
            net_profit: fmt_f64_fixed(self.net_profit, 2),
            net_margin: if self.net_margin_pct.is_finite() {
                fmt_f64_fixed(self.net_margin_pct, 2)
            } else {
                String::from(NON_FINITE_PLACEHOLDER)
            },
        }
    }
}

impl RoundedBreakdown {
    /// True when the margin line should render the placeholder instead of a
    /// percentage.
    pub fn margin_is_placeholder(&self) -> bool {
        self.net_margin == NON_FINITE_PLACEHOLDER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scenario_matches_reference() {
        let b = compute(&FeeInputs::default());
        let r = b.rounded();
        assert_eq!(r.marketplace_fee, "20.55");
        assert_eq!(r.payment_fee, "4.65");
        assert_eq!(r.total_fees, "25.20");
        assert_eq!(r.net_profit, "14.80");
        assert_eq!(r.net_margin, "9.87");
    }

    #[test]
    fn compute_is_pure() {
        let inputs = FeeInputs {
            sale_price: 87.31,
            cost_price: 12.0,
            additional_fees: 3.5,
            ..FeeInputs::default()
        };
        let a = compute(&inputs);
        let b = compute(&inputs);
        assert_eq!(a, b);
    }

    #[test]
    fn listing_fee_counted_once() {
        // marketplace_fee already folds the listing fee in, so the total is
        // exactly marketplace + payment + additional.
        let inputs = FeeInputs {
            listing_fee: 2.75,
            additional_fees: 1.25,
            ..FeeInputs::default()
        };
        let b = compute(&inputs);
        let recombined = b.marketplace_fee + b.payment_fee + inputs.additional_fees;
        assert!((recombined - b.total_fees).abs() < 1e-9);
    }

    #[test]
    fn zero_sale_price_margin_is_placeholder() {
        let inputs = FeeInputs {
            sale_price: 0.0,
            ..FeeInputs::default()
        };
        let b = compute(&inputs);
        assert!(!b.net_margin_pct.is_finite());

        let r = b.rounded();
        assert!(r.margin_is_placeholder());
        assert_eq!(r.net_margin, "—");
    }

    #[test]
    fn negative_profit_is_representable() {
        let inputs = FeeInputs {
            sale_price: 10.0,
            cost_price: 100.0,
            ..FeeInputs::default()
        };
        let b = compute(&inputs);
        assert!(b.net_profit < 0.0);
        // Display still renders; nothing panics on a loss.
        assert!(b.rounded().net_profit.starts_with('-'));
    }

    #[test]
    fn coerce_falls_back_to_zero() {
        assert_eq!(coerce(""), 0.0);
        assert_eq!(coerce("abc"), 0.0);
        assert_eq!(coerce("12.5.3"), 0.0);
        assert_eq!(coerce("inf"), 0.0);
        assert_eq!(coerce("NaN"), 0.0);
    }

    #[test]
    fn coerce_parses_trimmed_numbers() {
        assert_eq!(coerce("  2.5 "), 2.5);
        assert_eq!(coerce("-3"), -3.0);
        assert_eq!(coerce("0.30"), 0.30);
    }

    #[test]
    fn input_field_inventory_is_stable() {
        let all = InputField::all();
        assert_eq!(all.len(), 8);

        let mut keys: Vec<&'static str> = all.iter().copied().map(InputField::key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), 8);
    }

    #[test]
    fn input_field_get_set_round_trips() {
        let mut inputs = FeeInputs::default();
        for &field in InputField::all() {
            field.set(&mut inputs, 42.5);
            assert_eq!(field.get(&inputs), 42.5);
        }
    }
}
