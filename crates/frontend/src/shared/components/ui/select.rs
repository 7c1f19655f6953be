use leptos::prelude::*;

/// Single-select with a label; options are (value, label) pairs
#[component]
pub fn Select(
    #[prop(into)] label: String,
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
    options: Vec<(String, String)>,
    /// ID for the select element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();

    let options_view = options
        .into_iter()
        .map(|(val, text)| {
            let val_clone = val.clone();
            let is_selected = move || value.get() == val_clone;
            view! {
                <option value=val selected=is_selected>
                    {text}
                </option>
            }
        })
        .collect_view();

    view! {
        <div class="form__group">
            <label class="form__label" for=select_id>
                {label}
            </label>
            <select
                id=select_id
                class="form__select"
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {options_view}
            </select>
        </div>
    }
}
