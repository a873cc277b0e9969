use feewise::calc::{coerce, FeeInputs};
use feewise::fmt::fmt_f64_fixed;
use feewise::schema::FieldSpec;
use leptos::prelude::*;

#[component]
pub(super) fn InputRow(spec: FieldSpec, inputs: RwSignal<FeeInputs>) -> impl IntoView {
    let field = spec.field;
    let input_id = format!("field-{}", spec.key());

    let editing = RwSignal::new(false);
    let text = RwSignal::new(fmt_f64_fixed(field.get(&inputs.get_untracked()), 2));

    // Keep text in sync when external changes happen (reset), but do not
    // clobber while the user is typing.
    Effect::new(move |_| {
        let v = inputs.with(|i| field.get(i));
        if !editing.get() {
            text.set(fmt_f64_fixed(v, 2));
        }
    });

    view! {
        <div class="param-field">
            <label class="param-label" for=input_id.clone() title=spec.description>
                {spec.label}
                {spec
                    .units
                    .map(|u| view! { <span class="param-units">{format!(" ({u})")}</span> })}
            </label>

            <div class="param-input-row">
                <input
                    id=input_id
                    class="input"
                    type="number"
                    inputmode="decimal"
                    step=spec.step
                    placeholder="Enter value"
                    prop:value=move || text.get()
                    on:focus=move |_| editing.set(true)
                    // Unparseable text is a value of 0.0; the breakdown
                    // recomputes on every keystroke either way.
                    on:input=move |ev| {
                        let raw = event_target_value(&ev);
                        text.set(raw.clone());
                        inputs.update(|i| field.set(i, coerce(&raw)));
                    }
                    // Normalize the box to the committed value on blur.
                    on:blur=move |_| {
                        editing.set(false);
                        let v = inputs.with_untracked(|i| field.get(i));
                        text.set(fmt_f64_fixed(v, 2));
                    }
                />

                <button
                    type="button"
                    class="btn link"
                    on:click=move |_| {
                        inputs.update(|i| field.set(i, spec.default_value()));
                        text.set(fmt_f64_fixed(spec.default_value(), 2));
                    }
                >
                    "Reset"
                </button>
            </div>
        </div>
    }
}
