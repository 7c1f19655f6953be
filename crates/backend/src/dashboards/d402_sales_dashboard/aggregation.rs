//! Grouped summaries of the (filtered) sales dataset.
//!
//! Every function here is pure: the same rows always give the same tables.
//! All descending sorts are stable, so equal measures keep grouping order
//! (first occurrence for locations, name order for categories).

use chrono::{Datelike, NaiveDate};
use contracts::dashboards::d402_sales_dashboard::{
    CategoryAggregate, LocationAggregate, MonthlyAggregate, SaleRecord, SellerAggregate,
    MONTH_NAMES,
};
use std::collections::{BTreeMap, BTreeSet, HashMap};

fn revenue(record: &SaleRecord) -> f64 {
    record.price
}

fn one(_: &SaleRecord) -> f64 {
    1.0
}

pub fn total_revenue(data: &[SaleRecord]) -> f64 {
    data.iter().map(revenue).sum()
}

// ---------------------------------------------------------------------------
// Location
// ---------------------------------------------------------------------------

pub fn revenue_by_location(data: &[SaleRecord]) -> Vec<LocationAggregate> {
    by_location(data, revenue)
}

pub fn sales_by_location(data: &[SaleRecord]) -> Vec<LocationAggregate> {
    by_location(data, one)
}

/// Coordinates come from the first sale seen at each location
fn by_location(data: &[SaleRecord], measure: fn(&SaleRecord) -> f64) -> Vec<LocationAggregate> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut rows: Vec<LocationAggregate> = Vec::new();

    for record in data {
        match index.get(record.location.as_str()) {
            Some(&i) => rows[i].value += measure(record),
            None => {
                index.insert(record.location.as_str(), rows.len());
                rows.push(LocationAggregate {
                    location: record.location.clone(),
                    lat: record.lat,
                    lon: record.lon,
                    value: measure(record),
                });
            }
        }
    }

    rows.sort_by(|a, b| b.value.total_cmp(&a.value));
    rows
}

/// First `n` rows of an already sorted location table
pub fn top_locations(rows: &[LocationAggregate], n: usize) -> Vec<LocationAggregate> {
    rows.iter().take(n).cloned().collect()
}

// ---------------------------------------------------------------------------
// Month
// ---------------------------------------------------------------------------

pub fn revenue_by_month(data: &[SaleRecord]) -> Vec<MonthlyAggregate> {
    by_month(data, revenue)
}

pub fn sales_by_month(data: &[SaleRecord]) -> Vec<MonthlyAggregate> {
    by_month(data, one)
}

/// Month-end buckets in chronological order; months without sales between
/// the first and the last bucket are present with 0.
fn by_month(data: &[SaleRecord], measure: fn(&SaleRecord) -> f64) -> Vec<MonthlyAggregate> {
    let mut buckets: BTreeMap<(i32, u32), f64> = BTreeMap::new();
    for record in data {
        let key = (record.purchase_date.year(), record.purchase_date.month());
        *buckets.entry(key).or_insert(0.0) += measure(record);
    }

    let (Some(&first), Some(&last)) = (buckets.keys().next(), buckets.keys().next_back()) else {
        return Vec::new();
    };

    let mut rows = Vec::new();
    let mut cursor = first;
    while cursor <= last {
        let (year, month) = cursor;
        if let Some(month_end) = month_end(year, month) {
            rows.push(MonthlyAggregate {
                month_end,
                year,
                month,
                month_name: MONTH_NAMES[(month - 1) as usize].to_string(),
                value: buckets.get(&cursor).copied().unwrap_or(0.0),
            });
        }
        cursor = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    }
    rows
}

/// Last day of the month
fn month_end(year: i32, month: u32) -> Option<NaiveDate> {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()
}

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

pub fn revenue_by_category(data: &[SaleRecord]) -> Vec<CategoryAggregate> {
    by_category(data, revenue)
}

pub fn sales_by_category(data: &[SaleRecord]) -> Vec<CategoryAggregate> {
    by_category(data, one)
}

fn by_category(data: &[SaleRecord], measure: fn(&SaleRecord) -> f64) -> Vec<CategoryAggregate> {
    let mut groups: BTreeMap<&str, f64> = BTreeMap::new();
    for record in data {
        *groups.entry(record.category.as_str()).or_insert(0.0) += measure(record);
    }

    let mut rows: Vec<CategoryAggregate> = groups
        .into_iter()
        .map(|(category, value)| CategoryAggregate {
            category: category.to_string(),
            value,
        })
        .collect();
    rows.sort_by(|a, b| b.value.total_cmp(&a.value));
    rows
}

// ---------------------------------------------------------------------------
// Salesperson
// ---------------------------------------------------------------------------

/// Revenue and count per salesperson, ascending by name
pub fn by_seller(data: &[SaleRecord]) -> Vec<SellerAggregate> {
    let mut groups: BTreeMap<&str, (f64, u64)> = BTreeMap::new();
    for record in data {
        let entry = groups.entry(record.seller.as_str()).or_insert((0.0, 0));
        entry.0 += record.price;
        entry.1 += 1;
    }

    groups
        .into_iter()
        .map(|(seller, (revenue, sales))| SellerAggregate {
            seller: seller.to_string(),
            revenue,
            sales,
        })
        .collect()
}

/// Distinct salespeople, sorted
pub fn seller_options(data: &[SaleRecord]) -> Vec<String> {
    data.iter()
        .map(|r| r.seller.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
