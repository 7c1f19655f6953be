use leptos::prelude::*;
use thaw::Card;

/// Headline metric: label above an already formatted value
#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    #[prop(into)] value: Signal<String>,
) -> impl IntoView {
    view! {
        <Card class="stat-card">
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{move || value.get()}</div>
            </div>
        </Card>
    }
}
