use leptos::prelude::*;
use thaw::Card;

/// SVG markup of a rendered chart
pub type ChartResult = Result<String, Box<dyn std::error::Error>>;

pub const CHART_SIZE: (u32, u32) = (640, 400);

/// Upper bound of the value axis, with room for the printed values
pub fn value_axis_max(values: impl Iterator<Item = f64>) -> f64 {
    let max = values.fold(0.0, f64::max);
    if max > 0.0 {
        max * 1.15
    } else {
        1.0
    }
}

/// Label for a categorical axis whose categories sit on whole positions
/// (0, 1, 2, ...); other positions get no label.
pub fn category_label(position: f64, labels: &[String]) -> String {
    let index = position.round();
    if index < 0.0 || (position - index).abs() > 1e-6 {
        return String::new();
    }
    labels.get(index as usize).cloned().unwrap_or_default()
}

/// Cut long labels to `max_chars`, marking the cut with "…"
pub fn short_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() <= max_chars {
        label.to_string()
    } else {
        let kept: String = label.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}

/// Rendered chart, "no data" placeholder or the drawing error
pub fn chart_body(rendered: Option<ChartResult>) -> AnyView {
    match rendered {
        None => view! { <div class="chart__empty">"Sem dados"</div> }.into_any(),
        Some(Ok(svg)) => view! { <div class="chart__svg" inner_html=svg></div> }.into_any(),
        Some(Err(e)) => {
            log::error!("Failed to draw chart: {}", e);
            view! { <div class="chart__empty">"Erro ao desenhar o gráfico"</div> }.into_any()
        }
    }
}

/// Card with a chart title
#[component]
pub fn ChartCard(#[prop(into)] title: Signal<String>, children: Children) -> impl IntoView {
    view! {
        <Card class="chart">
            <div class="chart__title">{move || title.get()}</div>
            {children()}
        </Card>
    }
}
