use leptos::prelude::*;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::svg::{
    category_label, chart_body, short_label, value_axis_max, ChartCard, ChartResult, CHART_SIZE,
};
use crate::shared::number_format::format_chart_value;

const BAR_COLOR: RGBColor = RGBColor(31, 119, 180);
const BAR_HALF_WIDTH: f64 = 0.35;

/// One bar: category label and its value
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

impl Bar {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Columns left to right in input order, value printed above each column
pub fn render_vertical_bars(bars: &[Bar], value_title: Option<&str>) -> ChartResult {
    let labels: Vec<String> = bars.iter().map(|b| short_label(&b.label, 14)).collect();
    let n = bars.len() as f64;

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(12)
            .x_label_area_size(36)
            .y_label_area_size(80)
            .build_cartesian_2d(
                -0.5f64..n - 0.5,
                0f64..value_axis_max(bars.iter().map(|b| b.value)),
            )?;

        let x_formatter = |x: &f64| category_label(*x, &labels);
        let y_formatter = |y: &f64| format_chart_value(*y);
        let mut mesh = chart.configure_mesh();
        mesh.disable_x_mesh()
            .x_labels(bars.len())
            .x_label_formatter(&x_formatter)
            .y_label_formatter(&y_formatter);
        if let Some(title) = value_title {
            mesh.y_desc(title);
        }
        mesh.draw()?;

        chart.draw_series(bars.iter().enumerate().map(|(i, bar)| {
            let x = i as f64;
            Rectangle::new(
                [(x - BAR_HALF_WIDTH, 0.0), (x + BAR_HALF_WIDTH, bar.value.max(0.0))],
                BAR_COLOR.filled(),
            )
        }))?;

        let value_style =
            TextStyle::from(("sans-serif", 12).into_font()).pos(Pos::new(HPos::Center, VPos::Bottom));
        chart.draw_series(bars.iter().enumerate().map(|(i, bar)| {
            Text::new(
                format_chart_value(bar.value),
                (i as f64, bar.value.max(0.0)),
                value_style.clone(),
            )
        }))?;

        root.present()?;
    }
    Ok(svg)
}

/// Row of bar `index` out of `count`: the first bar is drawn on top
fn row_of(index: usize, count: usize) -> f64 {
    (count - 1 - index) as f64
}

/// Bars top to bottom in input order, value printed after each bar
pub fn render_horizontal_bars(bars: &[Bar], value_title: Option<&str>) -> ChartResult {
    let count = bars.len();
    // axis position p shows the bar drawn on row p
    let labels: Vec<String> = bars.iter().rev().map(|b| short_label(&b.label, 20)).collect();

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(12)
            .x_label_area_size(36)
            .y_label_area_size(150)
            .build_cartesian_2d(
                0f64..value_axis_max(bars.iter().map(|b| b.value)),
                -0.5f64..count as f64 - 0.5,
            )?;

        let x_formatter = |x: &f64| format_chart_value(*x);
        let y_formatter = |y: &f64| category_label(*y, &labels);
        let mut mesh = chart.configure_mesh();
        mesh.disable_y_mesh()
            .y_labels(count)
            .y_label_formatter(&y_formatter)
            .x_label_formatter(&x_formatter);
        if let Some(title) = value_title {
            mesh.x_desc(title);
        }
        mesh.draw()?;

        chart.draw_series(bars.iter().enumerate().map(|(i, bar)| {
            let y = row_of(i, count);
            Rectangle::new(
                [(0.0, y - BAR_HALF_WIDTH), (bar.value.max(0.0), y + BAR_HALF_WIDTH)],
                BAR_COLOR.filled(),
            )
        }))?;

        let value_style =
            TextStyle::from(("sans-serif", 12).into_font()).pos(Pos::new(HPos::Left, VPos::Center));
        chart.draw_series(bars.iter().enumerate().map(|(i, bar)| {
            Text::new(
                format!(" {}", format_chart_value(bar.value)),
                (bar.value.max(0.0), row_of(i, count)),
                value_style.clone(),
            )
        }))?;

        root.present()?;
    }
    Ok(svg)
}

/// Bar chart with the value printed on every bar
#[component]
pub fn BarChart(
    #[prop(into)] title: Signal<String>,
    #[prop(into)] bars: Signal<Vec<Bar>>,
    /// Caption of the value axis
    #[prop(optional, into)]
    value_title: MaybeProp<String>,
    #[prop(optional)] horizontal: bool,
) -> impl IntoView {
    let rendered = move || {
        let value_title = value_title.get();
        bars.with(|bars| {
            if bars.is_empty() {
                None
            } else if horizontal {
                Some(render_horizontal_bars(bars, value_title.as_deref()))
            } else {
                Some(render_vertical_bars(bars, value_title.as_deref()))
            }
        })
    };

    view! {
        <ChartCard title=title>
            {move || chart_body(rendered())}
        </ChartCard>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bars() -> Vec<Bar> {
        vec![
            Bar::new("SP", 1500.0),
            Bar::new("RJ", 420.5),
            Bar::new("MG", 42.0),
        ]
    }

    #[test]
    fn test_vertical_bars_print_labels_and_values() {
        let svg = render_vertical_bars(&bars(), Some("Receita")).unwrap();
        assert!(svg.starts_with("<svg"));
        for text in ["SP", "RJ", "MG", "1 500", "420.50", "Receita"] {
            assert!(svg.contains(text), "missing {:?}", text);
        }
    }

    #[test]
    fn test_horizontal_bars_first_on_top() {
        assert_eq!(row_of(0, 3), 2.0);
        assert_eq!(row_of(2, 3), 0.0);

        let svg = render_horizontal_bars(&bars(), None).unwrap();
        for text in ["SP", "MG", "42"] {
            assert!(svg.contains(text), "missing {:?}", text);
        }
    }

    #[test]
    fn test_single_bar() {
        let svg = render_vertical_bars(&[Bar::new("moveis", 3.0)], None).unwrap();
        assert!(svg.contains("moveis"));
    }
}
