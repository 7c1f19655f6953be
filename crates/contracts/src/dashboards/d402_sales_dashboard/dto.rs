use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Region;

/// Request for the sales dashboard
///
/// Sent as query string: `?region=nordeste&year=2022&sellers=Ana&sellers=Bruno`.
/// Every selected salesperson is its own `sellers` pair, so names may contain
/// commas.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesDashboardRequest {
    #[serde(default)]
    pub region: Region,
    /// None = all periods
    #[serde(default)]
    pub year: Option<i32>,
    /// Selected salesperson names, empty = no filtering
    #[serde(default)]
    pub sellers: Vec<String>,
}

impl SalesDashboardRequest {
    /// Key/value pairs of the query string; `year` is omitted for all periods
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("region", self.region.code().to_string())];
        if let Some(year) = self.year {
            pairs.push(("year", year.to_string()));
        }
        pairs.extend(self.sellers.iter().map(|s| ("sellers", s.clone())));
        pairs
    }

    /// Inverse of `query_pairs`. Unknown keys are ignored, blank names dropped.
    pub fn from_query_pairs<I, K, V>(pairs: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut request = Self::default();
        for (key, value) in pairs {
            let value = value.as_ref().trim();
            match key.as_ref() {
                "region" => {
                    request.region = Region::from_code(value)
                        .ok_or_else(|| format!("Unknown region: {}", value))?;
                }
                "year" if value.is_empty() => request.year = None,
                "year" => {
                    let year = value
                        .parse::<i32>()
                        .map_err(|_| format!("Invalid year: {}", value))?;
                    request.year = Some(year);
                }
                "sellers" if !value.is_empty() => request.sellers.push(value.to_string()),
                _ => {}
            }
        }
        Ok(request)
    }
}

/// One sale as used by the aggregation pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    pub product: String,
    pub category: String,
    pub price: f64,
    pub freight: f64,
    pub purchase_date: NaiveDate,
    pub seller: String,
    /// Purchase location (Brazilian state name)
    pub location: String,
    pub lat: f64,
    pub lon: f64,
}

/// Measure grouped by purchase location, with coordinates for the map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationAggregate {
    pub location: String,
    pub lat: f64,
    pub lon: f64,
    pub value: f64,
}

/// Measure bucketed by calendar month (bucket labelled by its last day)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyAggregate {
    pub month_end: NaiveDate,
    pub year: i32,
    /// 1..=12
    pub month: u32,
    /// English month name, e.g. "January"
    pub month_name: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryAggregate {
    pub category: String,
    pub value: f64,
}

/// Revenue and number of sales of one salesperson
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerAggregate {
    pub seller: String,
    pub revenue: f64,
    pub sales: u64,
}

/// Response for the sales dashboard
///
/// Counts in `*_by_location`, `*_by_month` and `*_by_category` are carried in
/// `value` as f64 so the charts handle both measures the same way.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesDashboardResponse {
    pub region: Region,
    pub year: Option<i32>,
    pub selected_sellers: Vec<String>,
    /// Distinct salespeople of the unfiltered dataset, sorted
    pub seller_options: Vec<String>,

    pub total_revenue: f64,
    pub total_sales: u64,

    pub revenue_by_location: Vec<LocationAggregate>,
    pub sales_by_location: Vec<LocationAggregate>,
    pub top_states_by_revenue: Vec<LocationAggregate>,
    pub top_states_by_sales: Vec<LocationAggregate>,

    pub revenue_by_month: Vec<MonthlyAggregate>,
    pub sales_by_month: Vec<MonthlyAggregate>,

    pub revenue_by_category: Vec<CategoryAggregate>,
    pub sales_by_category: Vec<CategoryAggregate>,

    /// Ascending by name; ranking is done on the client by `top_sellers`
    pub sellers: Vec<SellerAggregate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_from_query_pairs() {
        let request = SalesDashboardRequest::from_query_pairs(pairs(&[
            ("region", "nordeste"),
            ("year", "2022"),
            ("sellers", " Ana Duarte "),
            ("sellers", ""),
            ("sellers", "Bruno Rodrigues"),
            ("page", "3"),
        ]))
        .unwrap();

        assert_eq!(request.region, Region::Nordeste);
        assert_eq!(request.year, Some(2022));
        assert_eq!(request.sellers, vec!["Ana Duarte", "Bruno Rodrigues"]);
    }

    #[test]
    fn test_seller_name_with_comma_survives() {
        let request = SalesDashboardRequest {
            sellers: vec!["Silva, Ana".to_string(), "Bruno".to_string()],
            ..Default::default()
        };
        let parsed = SalesDashboardRequest::from_query_pairs(request.query_pairs()).unwrap();
        assert_eq!(parsed.sellers, vec!["Silva, Ana", "Bruno"]);
        assert_eq!(parsed, request);
    }

    #[test]
    fn test_query_pairs_omit_all_periods() {
        let request = SalesDashboardRequest::default();
        assert_eq!(request.query_pairs(), vec![("region", "brasil".to_string())]);
        assert_eq!(
            SalesDashboardRequest::from_query_pairs(pairs(&[("year", "")]))
                .unwrap()
                .year,
            None
        );
    }

    #[test]
    fn test_from_query_pairs_rejects_bad_values() {
        assert!(SalesDashboardRequest::from_query_pairs(pairs(&[("region", "europa")])).is_err());
        assert!(SalesDashboardRequest::from_query_pairs(pairs(&[("year", "20x2")])).is_err());
    }

    #[test]
    fn test_response_json_shape() {
        let response = SalesDashboardResponse {
            region: Region::CentroOeste,
            year: Some(2022),
            revenue_by_month: vec![MonthlyAggregate {
                month_end: NaiveDate::from_ymd_opt(2022, 1, 31).unwrap(),
                year: 2022,
                month: 1,
                month_name: "January".to_string(),
                value: 10.0,
            }],
            ..Default::default()
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["region"], "centro-oeste");
        assert_eq!(json["revenue_by_month"][0]["month_end"], "2022-01-31");
    }
}
