use std::collections::HashSet;

use super::loader::SalesDataset;

/// Keep the sales made by one of `sellers`, in original order.
/// An empty selection means no filtering.
pub fn filter_by_sellers(dataset: SalesDataset, sellers: &[String]) -> SalesDataset {
    if sellers.is_empty() {
        return dataset;
    }

    let selected: HashSet<&str> = sellers.iter().map(String::as_str).collect();
    dataset
        .into_iter()
        .filter(|record| selected.contains(record.seller.as_str()))
        .collect()
}
