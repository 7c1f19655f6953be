use contracts::dashboards::d402_sales_dashboard::{
    SalesDashboardRequest, SalesDashboardResponse, TOP_STATES,
};

use super::aggregation;
use super::filter::filter_by_sellers;
use super::loader::{LoadError, SalesApiClient, SalesDataset};
use crate::shared::config::SalesApiConfig;

/// Load → filter → aggregate, from scratch on every call
pub async fn get_sales_dashboard(
    config: &SalesApiConfig,
    request: SalesDashboardRequest,
) -> Result<SalesDashboardResponse, LoadError> {
    let client = SalesApiClient::new(config)?;
    let dataset = client.fetch_sales(request.region, request.year).await?;
    Ok(build_dashboard(dataset, &request))
}

/// Build every aggregate table of the dashboard from a loaded dataset
pub fn build_dashboard(
    dataset: SalesDataset,
    request: &SalesDashboardRequest,
) -> SalesDashboardResponse {
    // Options come from the unfiltered data so deselected people stay pickable
    let seller_options = aggregation::seller_options(&dataset);
    let selected_sellers = request.sellers.clone();
    let data = filter_by_sellers(dataset, &selected_sellers);

    let revenue_by_location = aggregation::revenue_by_location(&data);
    let sales_by_location = aggregation::sales_by_location(&data);
    let top_states_by_revenue = aggregation::top_locations(&revenue_by_location, TOP_STATES);
    let top_states_by_sales = aggregation::top_locations(&sales_by_location, TOP_STATES);

    SalesDashboardResponse {
        region: request.region,
        year: request.year,
        selected_sellers,
        seller_options,
        total_revenue: aggregation::total_revenue(&data),
        total_sales: data.len() as u64,
        revenue_by_location,
        sales_by_location,
        top_states_by_revenue,
        top_states_by_sales,
        revenue_by_month: aggregation::revenue_by_month(&data),
        sales_by_month: aggregation::sales_by_month(&data),
        revenue_by_category: aggregation::revenue_by_category(&data),
        sales_by_category: aggregation::sales_by_category(&data),
        sellers: aggregation::by_seller(&data),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d402_sales_dashboard::loader::tests::spawn_mock_upstream;
    use contracts::dashboards::d402_sales_dashboard::{Region, YEAR_MAX, YEAR_MIN};
    use std::collections::BTreeMap;

    fn config_for(addr: std::net::SocketAddr) -> SalesApiConfig {
        SalesApiConfig {
            base_url: format!("http://{}/produtos", addr),
            timeout_secs: Some(5),
        }
    }

    fn revenue_per_location(response: &SalesDashboardResponse) -> BTreeMap<String, f64> {
        response
            .revenue_by_location
            .iter()
            .map(|r| (r.location.clone(), r.value))
            .collect()
    }

    #[tokio::test]
    async fn test_dashboard_from_upstream() {
        let addr = spawn_mock_upstream().await;
        let response = get_sales_dashboard(&config_for(addr), SalesDashboardRequest::default())
            .await
            .unwrap();

        assert_eq!(response.total_sales, 4);
        assert_eq!(response.total_revenue, 2430.5);
        assert_eq!(
            response.seller_options,
            vec!["Ana Duarte", "Bruno Rodrigues", "Larissa Alves"]
        );
        assert_eq!(response.revenue_by_location[0].location, "SP");
        assert_eq!(response.top_states_by_sales.len(), 2);
        assert_eq!(response.sellers.len(), 3);
    }

    #[tokio::test]
    async fn test_seller_filter_keeps_all_options() {
        let addr = spawn_mock_upstream().await;
        let request = SalesDashboardRequest {
            sellers: vec!["Larissa Alves".to_string()],
            ..Default::default()
        };
        let response = get_sales_dashboard(&config_for(addr), request).await.unwrap();

        assert_eq!(response.selected_sellers, vec!["Larissa Alves"]);
        assert_eq!(response.seller_options.len(), 3);
        assert_eq!(response.total_sales, 1);
        assert_eq!(response.total_revenue, 900.0);
        assert_eq!(response.revenue_by_category[0].category, "instrumentos musicais");
    }

    #[tokio::test]
    async fn test_all_periods_is_union_of_years() {
        let addr = spawn_mock_upstream().await;
        let config = config_for(addr);

        let all = get_sales_dashboard(&config, SalesDashboardRequest::default())
            .await
            .unwrap();

        let mut union: BTreeMap<String, f64> = BTreeMap::new();
        let mut total_sales = 0;
        let mut months = Vec::new();
        for year in YEAR_MIN..=YEAR_MAX {
            let request = SalesDashboardRequest {
                year: Some(year),
                ..Default::default()
            };
            let response = get_sales_dashboard(&config, request).await.unwrap();
            assert_eq!(response.year, Some(year));
            for (location, value) in revenue_per_location(&response) {
                *union.entry(location).or_insert(0.0) += value;
            }
            total_sales += response.total_sales;
            months.extend(
                response
                    .revenue_by_month
                    .into_iter()
                    .filter(|m| m.value > 0.0)
                    .map(|m| (m.month_end, m.value)),
            );
        }

        assert_eq!(revenue_per_location(&all), union);
        assert_eq!(all.total_sales, total_sales);

        let all_months: Vec<_> = all
            .revenue_by_month
            .into_iter()
            .filter(|m| m.value > 0.0)
            .map(|m| (m.month_end, m.value))
            .collect();
        assert_eq!(all_months, months);
    }

    #[tokio::test]
    async fn test_region_is_forwarded() {
        let addr = spawn_mock_upstream().await;
        let request = SalesDashboardRequest {
            region: Region::Nordeste,
            ..Default::default()
        };
        let response = get_sales_dashboard(&config_for(addr), request).await.unwrap();
        assert_eq!(response.region, Region::Nordeste);
        assert!(response.revenue_by_location.iter().all(|r| r.location == "BA"));
    }

    #[test]
    fn test_empty_dataset_builds_empty_dashboard() {
        let response = build_dashboard(Vec::new(), &SalesDashboardRequest::default());
        assert_eq!(response.total_sales, 0);
        assert_eq!(response.total_revenue, 0.0);
        assert!(response.revenue_by_month.is_empty());
        assert!(response.top_states_by_revenue.is_empty());
        assert!(response.seller_options.is_empty());
    }
}
