use chrono::NaiveDate;
use contracts::dashboards::d402_sales_dashboard::{Region, SaleRecord};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

use crate::shared::config::SalesApiConfig;

/// Format of `Data da Compra` in the upstream payload
pub const PURCHASE_DATE_FORMAT: &str = "%d/%m/%Y";

/// Ordered sales as returned by the upstream API
pub type SalesDataset = Vec<SaleRecord>;

/// Ошибки загрузки данных продаж
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Sales API request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Sales API returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed sales JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Row {row}: invalid purchase date {value:?}, expected DD/MM/YYYY")]
    Date { row: usize, value: String },
}

/// One object of the upstream JSON array
#[derive(Debug, Clone, Deserialize)]
pub struct RawSaleRecord {
    #[serde(rename = "Produto", default)]
    pub product: String,
    #[serde(rename = "Categoria do Produto")]
    pub category: String,
    #[serde(rename = "Preço")]
    pub price: f64,
    #[serde(rename = "Frete", default)]
    pub freight: f64,
    #[serde(rename = "Data da Compra")]
    pub purchase_date: String,
    #[serde(rename = "Vendedor")]
    pub seller: String,
    #[serde(rename = "Local da compra")]
    pub location: String,
    pub lat: f64,
    pub lon: f64,
}

impl RawSaleRecord {
    fn into_record(self, row: usize) -> Result<SaleRecord, LoadError> {
        let purchase_date =
            parse_purchase_date(&self.purchase_date).ok_or_else(|| LoadError::Date {
                row,
                value: self.purchase_date.clone(),
            })?;

        Ok(SaleRecord {
            product: self.product,
            category: self.category,
            price: self.price,
            freight: self.freight,
            purchase_date,
            seller: self.seller,
            location: self.location,
            lat: self.lat,
            lon: self.lon,
        })
    }
}

pub fn parse_purchase_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), PURCHASE_DATE_FORMAT).ok()
}

/// Parse the upstream body into the dataset, normalizing purchase dates
pub fn parse_sales(body: &str) -> Result<SalesDataset, LoadError> {
    let raw: Vec<RawSaleRecord> = serde_json::from_str(body)?;
    raw.into_iter()
        .enumerate()
        .map(|(row, record)| record.into_record(row))
        .collect()
}

/// HTTP-клиент для API продаж
pub struct SalesApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl SalesApiClient {
    pub fn new(config: &SalesApiConfig) -> Result<Self, LoadError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.clone(),
        })
    }

    /// Single GET `{base_url}?regiao=..&ano=..`. No retries.
    pub async fn fetch_sales(
        &self,
        region: Region,
        year: Option<i32>,
    ) -> Result<SalesDataset, LoadError> {
        let query = [
            ("regiao", region.api_value()),
            ("ano", year.map(|y| y.to_string()).unwrap_or_default()),
        ];

        tracing::info!("Sales API: GET {} {:?}", self.base_url, query);

        let response = self
            .client
            .get(&self.base_url)
            .header("Accept", "application/json")
            .query(&query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Sales API request failed with status {}: {}", status, body);
            return Err(LoadError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;

        let preview: String = body.chars().take(500).collect();
        tracing::debug!("Sales API response preview: {}", preview);

        let dataset = parse_sales(&body).inspect_err(|e| {
            tracing::error!("Failed to parse sales API response: {}", e);
        })?;

        tracing::info!("Sales API: loaded {} records", dataset.len());
        Ok(dataset)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use axum::{extract::Query, http::StatusCode, routing::get, Json, Router};
    use serde_json::{json, Value};
    use std::collections::HashMap;
    use std::net::SocketAddr;
    use tokio::net::TcpListener;

    /// Upstream fixture: four sales over three years and two regions
    pub(crate) fn upstream_rows() -> Vec<Value> {
        vec![
            json!({
                "Produto": "Cadeira de escritório", "Categoria do Produto": "moveis",
                "Preço": 250.5, "Frete": 12.0, "Data da Compra": "05/01/2020",
                "Vendedor": "Ana Duarte", "Local da compra": "SP",
                "lat": -22.19, "lon": -48.79,
                "Avaliação da compra": 5, "Tipo de pagamento": "boleto",
                "Quantidade de parcelas": 1
            }),
            json!({
                "Produto": "Bola de basquete", "Categoria do Produto": "esporte e lazer",
                "Preço": 80.0, "Frete": 5.5, "Data da Compra": "17/03/2021",
                "Vendedor": "Bruno Rodrigues", "Local da compra": "BA",
                "lat": -13.29, "lon": -41.71
            }),
            json!({
                "Produto": "Fogão", "Categoria do Produto": "eletrodomesticos",
                "Preço": 1200.0, "Frete": 60.0, "Data da Compra": "28/02/2021",
                "Vendedor": "Ana Duarte", "Local da compra": "SP",
                "lat": -22.19, "lon": -48.79
            }),
            json!({
                "Produto": "Guitarra", "Categoria do Produto": "instrumentos musicais",
                "Preço": 900.0, "Frete": 30.0, "Data da Compra": "11/11/2022",
                "Vendedor": "Larissa Alves", "Local da compra": "BA",
                "lat": -13.29, "lon": -41.71
            }),
        ]
    }

    fn region_of(location: &str) -> &'static str {
        match location {
            "BA" => "nordeste",
            _ => "sudeste",
        }
    }

    async fn produtos(Query(params): Query<HashMap<String, String>>) -> Json<Vec<Value>> {
        let regiao = params.get("regiao").cloned().unwrap_or_default();
        let ano = params.get("ano").cloned().unwrap_or_default();
        let rows = upstream_rows()
            .into_iter()
            .filter(|row| {
                let location = row["Local da compra"].as_str().unwrap_or_default();
                regiao.is_empty() || region_of(location) == regiao
            })
            .filter(|row| {
                let date = row["Data da Compra"].as_str().unwrap_or_default();
                ano.is_empty() || date.ends_with(&ano)
            })
            .collect();
        Json(rows)
    }

    /// Serve the fixture on an ephemeral port; returns the address
    pub(crate) async fn spawn_mock_upstream() -> SocketAddr {
        let app = Router::new()
            .route("/produtos", get(produtos))
            .route(
                "/broken",
                get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
            )
            .route("/garbage", get(|| async { "<html>not json</html>" }))
            .route(
                "/bad_date",
                get(|| async {
                    Json(json!([{
                        "Categoria do Produto": "livros", "Preço": 10.0,
                        "Data da Compra": "2021-03-17", "Vendedor": "Ana Duarte",
                        "Local da compra": "SP", "lat": -22.19, "lon": -48.79
                    }]))
                }),
            );

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        addr
    }

    pub(crate) fn client_for(addr: SocketAddr, path: &str) -> SalesApiClient {
        SalesApiClient::new(&SalesApiConfig {
            base_url: format!("http://{}{}", addr, path),
            timeout_secs: Some(5),
        })
        .unwrap()
    }

    #[test]
    fn test_parse_purchase_date() {
        assert_eq!(
            parse_purchase_date("17/03/2021"),
            NaiveDate::from_ymd_opt(2021, 3, 17)
        );
        assert_eq!(parse_purchase_date("2021-03-17"), None);
        assert_eq!(parse_purchase_date("31/02/2021"), None);
    }

    #[test]
    fn test_parse_sales_keeps_order_and_ignores_extra_fields() {
        let body = serde_json::to_string(&upstream_rows()).unwrap();
        let dataset = parse_sales(&body).unwrap();
        assert_eq!(dataset.len(), 4);
        assert_eq!(dataset[0].product, "Cadeira de escritório");
        assert_eq!(dataset[0].purchase_date, NaiveDate::from_ymd_opt(2020, 1, 5).unwrap());
        assert_eq!(dataset[1].seller, "Bruno Rodrigues");
        assert_eq!(dataset[3].location, "BA");
    }

    #[test]
    fn test_parse_sales_rejects_bad_date() {
        let body = r#"[{"Categoria do Produto": "livros", "Preço": 1.0,
            "Data da Compra": "5 de março", "Vendedor": "X",
            "Local da compra": "SP", "lat": 0.0, "lon": 0.0}]"#;
        match parse_sales(body) {
            Err(LoadError::Date { row, value }) => {
                assert_eq!(row, 0);
                assert_eq!(value, "5 de março");
            }
            other => panic!("expected date error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_sales_rejects_missing_field() {
        let body = r#"[{"Preço": 1.0}]"#;
        assert!(matches!(parse_sales(body), Err(LoadError::Json(_))));
    }

    #[tokio::test]
    async fn test_fetch_sends_region_and_year() {
        let addr = spawn_mock_upstream().await;
        let client = client_for(addr, "/produtos");

        let all = client.fetch_sales(Region::Brasil, None).await.unwrap();
        assert_eq!(all.len(), 4);

        let nordeste = client.fetch_sales(Region::Nordeste, None).await.unwrap();
        assert_eq!(nordeste.len(), 2);
        assert!(nordeste.iter().all(|r| r.location == "BA"));

        let sudeste_2021 = client
            .fetch_sales(Region::Sudeste, Some(2021))
            .await
            .unwrap();
        assert_eq!(sudeste_2021.len(), 1);
        assert_eq!(sudeste_2021[0].price, 1200.0);
    }

    #[tokio::test]
    async fn test_fetch_propagates_failures() {
        let addr = spawn_mock_upstream().await;

        let err = client_for(addr, "/broken")
            .fetch_sales(Region::Brasil, None)
            .await
            .unwrap_err();
        assert!(matches!(err, LoadError::Status { status: 500, .. }));

        let err = client_for(addr, "/garbage")
            .fetch_sales(Region::Brasil, None)
            .await
            .unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));

        let err = client_for(addr, "/bad_date")
            .fetch_sales(Region::Brasil, None)
            .await
            .unwrap_err();
        assert!(matches!(err, LoadError::Date { row: 0, .. }));
    }

    #[tokio::test]
    async fn test_fetch_unreachable_upstream() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client_for(addr, "/produtos")
            .fetch_sales(Region::Brasil, None)
            .await
            .unwrap_err();
        assert!(matches!(err, LoadError::Request(_)));
    }
}
