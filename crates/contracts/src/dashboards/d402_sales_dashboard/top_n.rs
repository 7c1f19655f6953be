use super::{SellerAggregate, TOP_SELLERS_MAX, TOP_SELLERS_MIN};

/// Measure used to rank salespeople
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SellerMeasure {
    Revenue,
    Sales,
}

/// First `n` salespeople by `measure`, descending.
///
/// The sort is stable: equal measures keep the order of the input table.
pub fn top_sellers(
    sellers: &[SellerAggregate],
    n: usize,
    measure: SellerMeasure,
) -> Vec<SellerAggregate> {
    let mut ranked = sellers.to_vec();
    match measure {
        SellerMeasure::Revenue => ranked.sort_by(|a, b| b.revenue.total_cmp(&a.revenue)),
        SellerMeasure::Sales => ranked.sort_by(|a, b| b.sales.cmp(&a.sales)),
    }
    ranked.truncate(n);
    ranked
}

/// Keep a user-entered N inside the allowed range
pub fn clamp_top_n(n: usize) -> usize {
    n.clamp(TOP_SELLERS_MIN, TOP_SELLERS_MAX)
}
