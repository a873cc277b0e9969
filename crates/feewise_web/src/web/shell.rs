use feewise::calc::{FeeInputs, RoundedBreakdown};
use feewise::fmt::fmt_f64_fixed;
use leptos::prelude::*;

use crate::ui_model::OutputLine;

#[component]
pub(super) fn Topbar() -> impl IntoView {
    view! {
        <header class="app-header">
            <h1 class="brand">"Feewise"</h1>
            <p class="subtle">"Calculate marketplace selling fees and potential profit"</p>
        </header>
    }
}

#[component]
pub(super) fn OutputRow(
    line: OutputLine,
    inputs: RwSignal<FeeInputs>,
    rounded: Memo<RoundedBreakdown>,
) -> impl IntoView {
    // The two intermediate fee rows show the live fee terms in their label.
    let label = move || match line {
        OutputLine::MarketplaceFee => {
            let pct = inputs.with(|i| i.marketplace_fee_pct);
            format!("{} ({}%)", line.label(), fmt_f64_fixed(pct, 2))
        }
        OutputLine::PaymentFee => {
            let (pct, fixed) = inputs.with(|i| (i.payment_fee_pct, i.payment_fee_fixed));
            format!(
                "{} ({}% + ${})",
                line.label(),
                fmt_f64_fixed(pct, 2),
                fmt_f64_fixed(fixed, 2)
            )
        }
        _ => line.label().to_string(),
    };

    let value_text = move || {
        let r = rounded.get();
        match line {
            OutputLine::NetMargin => {
                if r.margin_is_placeholder() {
                    r.net_margin
                } else {
                    format!("{}%", r.net_margin)
                }
            }
            _ => format!("${}", line.value(&r)),
        }
    };

    let value_class = move || {
        let r = rounded.get();
        let mut class = String::from("output-value ");
        if line == OutputLine::NetMargin && r.margin_is_placeholder() {
            class.push_str("muted");
        } else {
            let nonneg = !line.value(&r).starts_with('-');
            class.push_str(line.accent(nonneg).css_class());
        }
        if line.is_emphasis() {
            class.push_str(" emphasis");
        }
        class
    };

    view! {
        <div class=move || {
            if line.is_emphasis() {
                "output-row emphasis"
            } else {
                "output-row"
            }
        }>
            <div class="output-label">{label}</div>
            <div class=value_class>{value_text}</div>
        </div>
    }
}
