use contracts::dashboards::d402_sales_dashboard::{
    RegionOption, SalesDashboardRequest, SalesDashboardResponse,
};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, query_string};

const API_BASE: &str = "/api/d402";

/// Query string for the dashboard request; no `year` means all periods,
/// each seller travels as its own `sellers=` pair
pub fn dashboard_query(request: &SalesDashboardRequest) -> String {
    query_string(&request.query_pairs())
}

/// Получить список регионов для фильтра
pub async fn get_regions() -> Result<Vec<RegionOption>, String> {
    let url = api_url(&format!("{}/regions", API_BASE));

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Получить агрегаты дашборда для текущих фильтров
pub async fn get_sales_dashboard(
    request: &SalesDashboardRequest,
) -> Result<SalesDashboardResponse, String> {
    let query = dashboard_query(request);
    let url = if query.is_empty() {
        api_url(&format!("{}/sales_dashboard", API_BASE))
    } else {
        api_url(&format!("{}/sales_dashboard?{}", API_BASE, query))
    };

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(if body.is_empty() {
            format!("HTTP error: {}", status)
        } else {
            format!("HTTP error: {} ({})", status, body)
        });
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
