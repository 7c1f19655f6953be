use axum::{extract::Query, http::StatusCode, Json};
use contracts::dashboards::d402_sales_dashboard::{
    Region, RegionOption, SalesDashboardRequest, SalesDashboardResponse,
};

use crate::dashboards::d402_sales_dashboard::service;
use crate::shared::config::get_config;

/// GET /api/d402/sales_dashboard?region=nordeste&year=2022&sellers=Ana&sellers=Bruno
///
/// The query is read as raw pairs because `sellers` repeats.
pub async fn get_sales_dashboard(
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<SalesDashboardResponse>, (StatusCode, String)> {
    let request = SalesDashboardRequest::from_query_pairs(pairs).map_err(|e| {
        tracing::warn!("D402 Dashboard: bad query: {}", e);
        (StatusCode::BAD_REQUEST, e)
    })?;

    tracing::info!(
        "D402 Dashboard: region={}, year={:?}, sellers={:?}",
        request.region.label(),
        request.year,
        request.sellers
    );

    match service::get_sales_dashboard(&get_config().sales_api, request).await {
        Ok(response) => {
            tracing::info!(
                "D402 Dashboard: {} sales, {} locations, {} sellers",
                response.total_sales,
                response.revenue_by_location.len(),
                response.sellers.len()
            );
            Ok(Json(response))
        }
        Err(e) => {
            tracing::error!("D402 Dashboard: Failed to load sales: {}", e);
            Err((StatusCode::BAD_GATEWAY, e.to_string()))
        }
    }
}

/// GET /api/d402/regions
pub async fn get_regions() -> Json<Vec<RegionOption>> {
    Json(Region::ALL.into_iter().map(RegionOption::from).collect())
}
