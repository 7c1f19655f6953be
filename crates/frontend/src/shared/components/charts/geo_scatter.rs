use std::ops::Range;

use leptos::prelude::*;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::svg::{chart_body, ChartCard, ChartResult};

const MAP_SIZE: (u32, u32) = (440, 600);
const LON_RANGE: Range<f64> = -82.0..-34.0;
const LAT_RANGE: Range<f64> = -56.0..13.0;
const MAX_RADIUS: f64 = 28.0;
const MIN_RADIUS: f64 = 2.0;

const SEA: RGBColor = RGBColor(234, 242, 251);
const LAND: RGBColor = RGBColor(244, 241, 234);
const COAST: RGBColor = RGBColor(184, 178, 167);
const BUBBLE: RGBColor = RGBColor(31, 119, 180);

/// Coarse South America coastline (lat, lon), used as map backdrop
const SOUTH_AMERICA_OUTLINE: [(f64, f64); 36] = [
    (12.4, -71.7),
    (10.5, -66.0),
    (10.7, -61.6),
    (8.5, -60.0),
    (5.8, -55.2),
    (4.0, -51.6),
    (0.0, -50.0),
    (-2.5, -44.3),
    (-3.7, -38.5),
    (-5.2, -35.5),
    (-8.0, -34.9),
    (-13.0, -38.5),
    (-20.3, -40.3),
    (-23.0, -43.2),
    (-25.5, -48.5),
    (-30.0, -50.2),
    (-34.9, -56.2),
    (-38.0, -57.5),
    (-41.0, -63.0),
    (-46.0, -67.5),
    (-52.3, -68.4),
    (-54.9, -67.3),
    (-53.0, -74.0),
    (-46.0, -75.5),
    (-41.5, -73.8),
    (-33.0, -71.6),
    (-23.6, -70.4),
    (-18.5, -70.3),
    (-14.0, -76.2),
    (-5.1, -81.1),
    (-2.2, -80.9),
    (1.2, -78.9),
    (7.0, -77.8),
    (8.7, -77.4),
    (9.5, -75.6),
    (11.0, -74.8),
];

/// Point of the scatter map
#[derive(Debug, Clone, PartialEq)]
pub struct GeoPoint {
    pub label: String,
    pub lat: f64,
    pub lon: f64,
    pub value: f64,
}

/// Bubble radius in px; the area grows linearly with the value
pub fn bubble_radius(value: f64, max_value: f64) -> u32 {
    if max_value <= 0.0 || value <= 0.0 {
        return MIN_RADIUS as u32;
    }
    (MAX_RADIUS * (value / max_value).sqrt())
        .max(MIN_RADIUS)
        .round() as u32
}

/// Coastline as (lon, lat) chart coordinates, closed
fn coastline() -> Vec<(f64, f64)> {
    let mut points: Vec<(f64, f64)> = SOUTH_AMERICA_OUTLINE
        .iter()
        .map(|(lat, lon)| (*lon, *lat))
        .collect();
    if let Some(first) = points.first().copied() {
        points.push(first);
    }
    points
}

/// Bubble map on a lon/lat plane. Larger bubbles are drawn first so small
/// ones stay visible; every bubble is labelled with its location.
pub fn render_map(points: &[GeoPoint]) -> ChartResult {
    let max = points.iter().map(|p| p.value).fold(0.0, f64::max);
    let mut sorted: Vec<&GeoPoint> = points.iter().collect();
    sorted.sort_by(|a, b| b.value.total_cmp(&a.value));

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, MAP_SIZE).into_drawing_area();
        root.fill(&SEA)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(8)
            .build_cartesian_2d(LON_RANGE, LAT_RANGE)?;

        let coast = coastline();
        chart.draw_series(std::iter::once(Polygon::new(coast.clone(), LAND.filled())))?;
        chart.draw_series(std::iter::once(PathElement::new(coast, COAST.stroke_width(1))))?;

        chart.draw_series(sorted.iter().map(|p| {
            Circle::new(
                (p.lon, p.lat),
                bubble_radius(p.value, max),
                BUBBLE.mix(0.6).filled(),
            )
        }))?;

        let label_style =
            TextStyle::from(("sans-serif", 10).into_font()).pos(Pos::new(HPos::Center, VPos::Center));
        chart.draw_series(
            sorted
                .iter()
                .map(|p| Text::new(p.label.clone(), (p.lon, p.lat), label_style.clone())),
        )?;

        root.present()?;
    }
    Ok(svg)
}

/// Bubble map of values by location
#[component]
pub fn GeoScatter(
    #[prop(into)] title: Signal<String>,
    #[prop(into)] points: Signal<Vec<GeoPoint>>,
) -> impl IntoView {
    let rendered = move || {
        points.with(|points| {
            if points.is_empty() {
                None
            } else {
                Some(render_map(points))
            }
        })
    };

    view! {
        <ChartCard title=title>
            {move || chart_body(rendered())}
        </ChartCard>
    }
}
