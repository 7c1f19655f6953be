//! Conversions from dashboard aggregates to chart inputs

use std::collections::BTreeMap;

use contracts::dashboards::d402_sales_dashboard::{
    top_sellers, CategoryAggregate, LocationAggregate, MonthlyAggregate, SellerAggregate,
    SellerMeasure, MONTH_NAMES,
};

use crate::shared::components::charts::{Bar, GeoPoint, LineData};

/// X axis of the monthly charts
pub fn month_categories() -> Vec<String> {
    MONTH_NAMES.iter().map(|m| m.to_string()).collect()
}

pub fn geo_points(rows: &[LocationAggregate]) -> Vec<GeoPoint> {
    rows.iter()
        .map(|r| GeoPoint {
            label: r.location.clone(),
            lat: r.lat,
            lon: r.lon,
            value: r.value,
        })
        .collect()
}

pub fn location_bars(rows: &[LocationAggregate]) -> Vec<Bar> {
    rows.iter().map(|r| Bar::new(r.location.clone(), r.value)).collect()
}

pub fn category_bars(rows: &[CategoryAggregate]) -> Vec<Bar> {
    rows.iter().map(|r| Bar::new(r.category.clone(), r.value)).collect()
}

/// One series per year (ascending), points placed by calendar month
pub fn monthly_series(rows: &[MonthlyAggregate]) -> Vec<LineData> {
    let mut by_year: BTreeMap<i32, Vec<(usize, f64)>> = BTreeMap::new();
    for row in rows {
        if !(1..=12).contains(&row.month) {
            continue;
        }
        by_year
            .entry(row.year)
            .or_default()
            .push((row.month as usize - 1, row.value));
    }

    by_year
        .into_iter()
        .map(|(year, mut points)| {
            points.sort_by_key(|(index, _)| *index);
            LineData {
                name: year.to_string(),
                points,
            }
        })
        .collect()
}

/// Top `n` salespeople by `measure` as horizontal bars
pub fn seller_bars(rows: &[SellerAggregate], n: usize, measure: SellerMeasure) -> Vec<Bar> {
    top_sellers(rows, n, measure)
        .into_iter()
        .map(|s| {
            let value = match measure {
                SellerMeasure::Revenue => s.revenue,
                SellerMeasure::Sales => s.sales as f64,
            };
            Bar::new(s.seller, value)
        })
        .collect()
}
