//! End-to-end checks of the compute → round → chart pipeline.

use feewise::calc::{coerce, compute, FeeInputs, InputField};
use feewise::chart;

#[test]
fn reference_scenario_end_to_end() {
    let breakdown = compute(&FeeInputs::default());
    let rounded = breakdown.rounded();

    assert_eq!(rounded.marketplace_fee, "20.55");
    assert_eq!(rounded.payment_fee, "4.65");
    assert_eq!(rounded.total_fees, "25.20");
    assert_eq!(rounded.net_profit, "14.80");
    assert_eq!(rounded.net_margin, "9.87");

    let slices = chart::slices(&rounded);
    assert_eq!(slices[0].value, 25.20);
    assert_eq!(slices[1].value, 14.80);
}

#[test]
fn single_counting_invariant_holds_across_inputs() {
    let scenarios = [
        FeeInputs::default(),
        FeeInputs {
            sale_price: 9.99,
            cost_price: 2.50,
            listing_fee: 0.0,
            additional_fees: 1.10,
            ..FeeInputs::default()
        },
        FeeInputs {
            sale_price: 1250.0,
            cost_price: 840.0,
            listing_fee: 5.0,
            payment_fee_pct: 3.49,
            payment_fee_fixed: 0.49,
            marketplace_fee_pct: 12.9,
            shipping_cost: 35.0,
            additional_fees: 12.0,
        },
        FeeInputs {
            sale_price: -20.0,
            ..FeeInputs::default()
        },
    ];

    for inputs in scenarios {
        let b = compute(&inputs);
        let recombined = b.marketplace_fee + b.payment_fee + inputs.additional_fees;
        assert!(
            (recombined - b.total_fees).abs() < 1e-9,
            "listing fee double-counted for {inputs:?}"
        );
    }
}

#[test]
fn typing_garbage_into_every_field_still_computes() {
    // Simulate the input boundary: each field fed unparseable text in turn.
    for &field in InputField::all() {
        let mut inputs = FeeInputs::default();
        field.set(&mut inputs, coerce("abc"));
        let b = compute(&inputs);
        // Zeroing one field must never produce NaN in the monetary outputs.
        assert!(b.total_fees.is_finite());
        assert!(b.net_profit.is_finite());
    }
}

#[test]
fn zeroed_sale_price_degrades_without_panicking() {
    let mut inputs = FeeInputs::default();
    InputField::SalePrice.set(&mut inputs, coerce(""));

    let rounded = compute(&inputs).rounded();
    assert!(rounded.margin_is_placeholder());

    // The chart still has drawable fee area even with no sale price.
    let slices = chart::slices(&rounded);
    assert!(chart::total_area(&slices) > 0.0);
}

#[cfg(feature = "serde")]
#[test]
fn inputs_round_trip_through_json() {
    let inputs = FeeInputs {
        sale_price: 74.25,
        ..FeeInputs::default()
    };
    let json = serde_json::to_string(&inputs).unwrap();
    let back: FeeInputs = serde_json::from_str(&json).unwrap();
    assert_eq!(back, inputs);
}
