use leptos::{ev, prelude::*};
use thaw::{Button, ButtonAppearance};

/// Parse user input and keep it inside `[min, max]`; None for non-numbers
pub fn parse_bounded(raw: &str, min: usize, max: usize) -> Option<usize> {
    raw.trim().parse::<usize>().ok().map(|n| n.clamp(min, max))
}

/// Bounded integer input with −/+ buttons
#[component]
pub fn NumberInput(
    #[prop(into)] label: String,
    min: usize,
    max: usize,
    #[prop(into)] value: Signal<usize>,
    on_change: Callback<usize>,
) -> impl IntoView {
    let decrement = move |_: ev::MouseEvent| {
        on_change.run(value.get_untracked().saturating_sub(1).max(min))
    };
    let increment = move |_: ev::MouseEvent| on_change.run((value.get_untracked() + 1).min(max));

    view! {
        <div class="form__group form__number">
            <label class="form__label">{label}</label>
            <div class="form__number-row">
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=Signal::derive(move || value.get() <= min)
                    on_click=decrement
                >
                    "−"
                </Button>
                <input
                    type="number"
                    class="form__input"
                    min=min
                    max=max
                    prop:value=move || value.get().to_string()
                    on:change=move |ev| {
                        if let Some(n) = parse_bounded(&event_target_value(&ev), min, max) {
                            on_change.run(n);
                        }
                    }
                />
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=Signal::derive(move || value.get() >= max)
                    on_click=increment
                >
                    "+"
                </Button>
            </div>
        </div>
    }
}
