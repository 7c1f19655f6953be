pub mod api;
pub mod dashboards;
pub mod routes;
pub mod shared;

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::middleware::{self, Next};
use axum::response::Response;

use crate::shared::format::format_thousands;

/// Простой middleware для логирования запросов
async fn request_logger(req: Request<Body>, next: Next) -> Response {
    use axum::body::to_bytes;

    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // Читаем тело ответа, чтобы узнать реальный размер
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!("Failed to read response body for {}: {}", uri.path(), e);
            return Response::from_parts(parts, Body::default());
        }
    };

    let status = parts.status.as_u16();
    // Голубой для 2xx, коричневый для остальных
    let color_code = if parts.status.is_success() { "36" } else { "33" };

    println!(
        "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
        color_code,
        chrono::Local::now().format("%H:%M:%S"),
        start.elapsed().as_millis(),
        format_thousands(bytes.len() as u64),
        status,
        method,
        uri.path()
    );

    Response::from_parts(parts, Body::from(bytes))
}

fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let log_dir = std::path::Path::new("target").join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("backend.log"))?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,hyper=warn,reqwest=warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use std::net::SocketAddr;
    use tokio::net::TcpListener;
    use tower_http::cors::{Any, CorsLayer};
    use tower_http::services::ServeDir;

    init_logging()?;

    let config = shared::config::load_config()?;
    tracing::info!("Sales API endpoint: {}", config.sales_api.base_url);
    let port = config.server.port;
    let static_dir = config.server.static_dir.clone();
    shared::config::init_config(config)?;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let app = routes::configure_routes()
        .fallback_service(ServeDir::new(static_dir))
        .layer(middleware::from_fn(request_logger))
        .layer(cors);

    let addr: SocketAddr = ([0, 0, 0, 0], port).into();

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    port
                );
            } else {
                tracing::error!("Failed to bind to port {}. Error: {}", port, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
