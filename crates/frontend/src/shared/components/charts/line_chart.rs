use leptos::prelude::*;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use plotters::style::{Palette, Palette99};

use super::svg::{category_label, chart_body, value_axis_max, ChartCard, ChartResult, CHART_SIZE};
use crate::shared::number_format::format_chart_value;

/// Dash length and gap (px) for the second, third, ... series
const DASHES: [(u32, u32); 3] = [(8, 4), (2, 4), (12, 6)];

/// One line: points are (category index, value)
#[derive(Debug, Clone, PartialEq)]
pub struct LineData {
    pub name: String,
    pub points: Vec<(usize, f64)>,
}

/// Axis label of a category: its first three letters
pub fn axis_abbrev(category: &str) -> String {
    category.chars().take(3).collect()
}

/// Lines over fixed categories; the first series is solid, the others
/// dashed, each with its own colour and point markers.
pub fn render_lines(
    categories: &[String],
    series: &[LineData],
    value_title: Option<&str>,
) -> ChartResult {
    let labels: Vec<String> = categories.iter().map(|c| axis_abbrev(c)).collect();
    let max = value_axis_max(
        series
            .iter()
            .flat_map(|s| s.points.iter().map(|(_, v)| *v)),
    );

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(12)
            .x_label_area_size(36)
            .y_label_area_size(80)
            .build_cartesian_2d(-0.5f64..categories.len() as f64 - 0.5, 0f64..max)?;

        let x_formatter = |x: &f64| category_label(*x, &labels);
        let y_formatter = |y: &f64| format_chart_value(*y);
        let mut mesh = chart.configure_mesh();
        mesh.disable_x_mesh()
            .x_labels(categories.len())
            .x_label_formatter(&x_formatter)
            .y_label_formatter(&y_formatter);
        if let Some(title) = value_title {
            mesh.y_desc(title);
        }
        mesh.draw()?;

        for (i, line) in series.iter().enumerate() {
            let color = Palette99::pick(i);
            let style = color.stroke_width(2);
            let points: Vec<(f64, f64)> = line
                .points
                .iter()
                .map(|(index, value)| (*index as f64, *value))
                .collect();

            let anno = if i == 0 {
                chart.draw_series(LineSeries::new(points.clone(), style))?
            } else {
                let (dash, gap) = DASHES[(i - 1) % DASHES.len()];
                chart.draw_series(DashedLineSeries::new(points.clone(), dash, gap, style))?
            };
            anno.label(line.name.clone())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));

            chart.draw_series(points.iter().map(|p| Circle::new(*p, 3, color.filled())))?;
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK.mix(0.3))
            .draw()?;

        root.present()?;
    }
    Ok(svg)
}

/// Line chart over fixed categories with a legend, value axis from 0
#[component]
pub fn LineChart(
    #[prop(into)] title: Signal<String>,
    /// X axis categories, in display order
    categories: Vec<String>,
    #[prop(into)] series: Signal<Vec<LineData>>,
    #[prop(optional, into)] value_title: MaybeProp<String>,
) -> impl IntoView {
    let categories = StoredValue::new(categories);

    let rendered = move || {
        let value_title = value_title.get();
        series.with(|series| {
            if series.iter().all(|s| s.points.is_empty()) {
                None
            } else {
                Some(categories.with_value(|c| render_lines(c, series, value_title.as_deref())))
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
    use contracts::dashboards::d402_sales_dashboard::MONTH_NAMES;
    use std::collections::HashSet;

    #[test]
    fn test_month_axis_labels_are_distinct() {
        let labels: Vec<String> = MONTH_NAMES.iter().map(|m| axis_abbrev(m)).collect();
        let distinct: HashSet<&String> = labels.iter().collect();
        assert_eq!(distinct.len(), 12, "labels = {:?}", labels);
        assert_eq!(labels[5], "Jun");
        assert_eq!(labels[6], "Jul");
    }

    #[test]
    fn test_render_lines_with_legend() {
        let categories: Vec<String> = MONTH_NAMES.iter().map(|m| m.to_string()).collect();
        let series = vec![
            LineData {
                name: "2021".to_string(),
                points: vec![(0, 100.0), (1, 250.0)],
            },
            LineData {
                name: "2022".to_string(),
                points: vec![(0, 80.0), (1, 120.0), (2, 300.0)],
            },
        ];

        let svg = render_lines(&categories, &series, Some("Receita")).unwrap();
        for text in ["Jan", "Feb", "2021", "2022", "Receita"] {
            assert!(svg.contains(text), "missing {:?}", text);
        }
    }
}
