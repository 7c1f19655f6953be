use leptos::prelude::*;

/// Integer slider between `min` and `max` (inclusive)
#[component]
pub fn RangeSlider(
    #[prop(into)] label: String,
    min: i32,
    max: i32,
    #[prop(into)] value: Signal<i32>,
    on_change: Callback<i32>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="form__group form__slider">
            <label class="form__label">
                {label} ": " <strong>{move || value.get()}</strong>
            </label>
            <input
                type="range"
                class="form__range"
                min=min
                max=max
                step="1"
                prop:value=move || value.get().to_string()
                disabled=move || disabled.get()
                on:input=move |ev| {
                    if let Ok(v) = event_target_value(&ev).parse::<i32>() {
                        on_change.run(v.clamp(min, max));
                    }
                }
            />
            <div class="form__range-bounds">
                <span>{min}</span>
                <span>{max}</span>
            </div>
        </div>
    }
}
