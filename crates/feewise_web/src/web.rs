use feewise::calc::{compute, FeeInputs};
use feewise::chart;
use feewise::schema::field_specs;
use leptos::prelude::*;

use crate::ui_model::OutputLine;

mod charts;
mod parameter_field;
mod shell;

use parameter_field::InputRow;
use shell::{OutputRow, Topbar};

pub fn start() {
    mount_to_body(|| view! { <App /> });
}

#[component]
fn App() -> impl IntoView {
    // One session-scoped input record; everything else derives from it.
    let inputs = RwSignal::new(FeeInputs::default());

    // Every input mutation recomputes the whole breakdown synchronously
    // before the next render; there is no scheduling in between.
    let breakdown = Memo::new(move |_| compute(&inputs.get()));
    let rounded = Memo::new(move |_| breakdown.get().rounded());

    let (status, set_status) = signal(String::new());

    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    // Redraw the fee-split pie whenever the rounded breakdown changes.
    Effect::new(move |_| {
        let rounded = rounded.get();
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        let slices = chart::slices(&rounded);
        if let Err(e) = charts::draw_fee_split(&canvas, &slices) {
            set_status.set(format!("chart: {e}"));
        }
    });

    view! {
        <Topbar />

        <main class="layout">
            <section class="card">
                <h3 class="panel-title">"Input Parameters"</h3>
                {field_specs()
                    .into_iter()
                    .map(|spec| view! { <InputRow spec inputs /> })
                    .collect_view()}
            </section>

            <section class="card">
                <h3 class="panel-title">"Fee Breakdown"</h3>
                <div class="output-rows">
                    {OutputLine::all()
                        .iter()
                        .map(|&line| view! { <OutputRow line inputs rounded /> })
                        .collect_view()}
                </div>

                <h3 class="panel-title chart-title">"Fee Distribution"</h3>
                <div class="chart-wrap">
                    <canvas node_ref=canvas_ref width="380" height="320"></canvas>
                </div>

                <Show when=move || !status.get().is_empty()>
                    <div class="status">{move || status.get()}</div>
                </Show>
            </section>
        </main>
    }
}
