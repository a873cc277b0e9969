//! Field metadata that drives the input form.
//!
//! The form iterates [`field_specs`] instead of hand-writing one row per
//! field, so labels, units, and steps live in one place.

use crate::calc::InputField;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub field: InputField,
    pub label: &'static str,
    /// Display unit, shown after the label ("$" or "%").
    pub units: Option<&'static str>,
    /// Step attribute for the numeric input control.
    pub step: f64,
    pub description: &'static str,
}

impl FieldSpec {
    pub fn key(&self) -> &'static str {
        self.field.key()
    }

    pub fn default_value(&self) -> f64 {
        self.field.default_value()
    }
}

/// All form fields, in display order.
pub fn field_specs() -> [FieldSpec; 8] {
    [
        FieldSpec {
            field: InputField::SalePrice,
            label: "Item Sale Price",
            units: Some("$"),
            step: 0.01,
            description: "Price the item sells for on the marketplace.",
        },
        FieldSpec {
            field: InputField::CostPrice,
            label: "Item Cost Price",
            units: Some("$"),
            step: 0.01,
            description: "What the item cost you to acquire.",
        },
        FieldSpec {
            field: InputField::ListingFee,
            label: "Listing Fee",
            units: Some("$"),
            step: 0.01,
            description: "Flat fee charged for listing the item.",
        },
        FieldSpec {
            field: InputField::PaymentFeePct,
            label: "Payment Fee Percentage",
            units: Some("%"),
            step: 0.01,
            description: "Percentage the payment processor takes from the sale price.",
        },
        FieldSpec {
            field: InputField::PaymentFeeFixed,
            label: "Payment Fee Fixed",
            units: Some("$"),
            step: 0.01,
            description: "Flat per-transaction payment fee.",
        },
        FieldSpec {
            field: InputField::MarketplaceFeePct,
            label: "Marketplace Final Value Fee",
            units: Some("%"),
            step: 0.01,
            description: "Percentage the marketplace takes from the sale price.",
        },
        FieldSpec {
            field: InputField::ShippingCost,
            label: "Shipping Cost",
            units: Some("$"),
            step: 0.01,
            description: "Shipping paid by you as the seller.",
        },
        FieldSpec {
            field: InputField::AdditionalFees,
            label: "Additional Fees",
            units: Some("$"),
            step: 0.01,
            description: "Catch-all for anything else taken out of the sale.",
        },
    ]
}
