use axum::{routing::get, Router};

use crate::api::handlers;

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // D402 Sales dashboard
        .route(
            "/api/d402/regions",
            get(handlers::d402_sales_dashboard::get_regions),
        )
        .route(
            "/api/d402/sales_dashboard",
            get(handlers::d402_sales_dashboard::get_sales_dashboard),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d402_sales_dashboard::RegionOption;
    use tokio::net::TcpListener;

    async fn spawn_app() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, configure_routes()).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_health_and_regions() {
        let base = spawn_app().await;

        let health = reqwest::get(format!("{}/health", base)).await.unwrap();
        assert_eq!(health.text().await.unwrap(), "ok");

        let regions: Vec<RegionOption> = reqwest::get(format!("{}/api/d402/regions", base))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(regions.len(), 6);
        assert_eq!(regions[0].label, "Brasil");
        assert_eq!(regions[1].code, "centro-oeste");
    }

    #[tokio::test]
    async fn test_unknown_region_is_rejected() {
        let base = spawn_app().await;
        let response = reqwest::get(format!("{}/api/d402/sales_dashboard?region=europa", base))
            .await
            .unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_year_is_rejected() {
        let base = spawn_app().await;
        let response = reqwest::get(format!(
            "{}/api/d402/sales_dashboard?region=sul&year=20x2&sellers=Silva%2C%20Ana",
            base
        ))
        .await
        .unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
        assert_eq!(response.text().await.unwrap(), "Invalid year: 20x2");
    }
}
