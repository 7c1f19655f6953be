use std::collections::HashSet;

use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, Checkbox, CheckboxGroup};

/// Selected items in `options` order; items missing from `options` are dropped
pub fn ordered_selection(selected: &HashSet<String>, options: &[String]) -> Vec<String> {
    options
        .iter()
        .filter(|o| selected.contains(*o))
        .cloned()
        .collect()
}

/// Checkbox list with removable chips for the current selection.
/// Empty selection means "everything".
#[component]
pub fn MultiSelect(
    #[prop(into)] label: String,
    #[prop(into)] options: Signal<Vec<String>>,
    selected: RwSignal<HashSet<String>>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
) -> impl IntoView {
    let chips = move || {
        let current = options.with(|opts| selected.with(|sel| ordered_selection(sel, opts)));
        if current.is_empty() {
            let text = placeholder.get().unwrap_or_default();
            return view! { <span class="multi-select__placeholder">{text}</span> }.into_any();
        }
        current
            .into_iter()
            .map(|item| {
                let removed = item.clone();
                view! {
                    <span class="filter-tag">
                        <span>{item}</span>
                        <span
                            class="filter-tag__remove"
                            on:click=move |_| selected.update(|s| {
                                s.remove(&removed);
                            })
                        >
                            "×"
                        </span>
                    </span>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="form__group multi-select">
            <label class="form__label">{label}</label>
            <div class="multi-select__chips">
                {chips}
                <Show when=move || !selected.with(|s| s.is_empty())>
                    <Button
                        appearance=ButtonAppearance::Transparent
                        on_click=move |_| selected.set(HashSet::new())
                    >
                        "Limpar"
                    </Button>
                </Show>
            </div>
            <CheckboxGroup value=selected>
                <div class="multi-select__options">
                    <For
                        each=move || options.get()
                        key=|item| item.clone()
                        children=move |item| {
                            view! { <Checkbox label=item.clone() value=item/> }
                        }
                    />
                </div>
            </CheckboxGroup>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_selection_follows_option_order() {
        let options = names(&["Ana", "Bruno", "Carla"]);
        let selected: HashSet<String> = names(&["Carla", "Ana"]).into_iter().collect();
        assert_eq!(ordered_selection(&selected, &options), names(&["Ana", "Carla"]));
    }

    #[test]
    fn test_selection_drops_unknown_items() {
        let options = names(&["Ana", "Bruno"]);
        let selected: HashSet<String> = names(&["Bruno", "Zé"]).into_iter().collect();
        assert_eq!(ordered_selection(&selected, &options), names(&["Bruno"]));
        assert!(ordered_selection(&HashSet::new(), &options).is_empty());
    }
}
