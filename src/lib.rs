use std::net::SocketAddr;
use std::time::Instant;

use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    response::Json,
    routing::get,
    Router,
};
use dotenvy::dotenv;
use once_cell::sync::Lazy;
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, EnvFilter};

pub mod controllers;
pub mod db;
pub mod models;
pub mod routes;
pub mod state;
pub mod utils;

static START_TIME: Lazy<Instant> = Lazy::new(Instant::now);

pub async fn start_server() {
    dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let (store, backend) = match db::connection::init_storage().await {
        Ok(storage) => storage,
        Err(e) => {
            error!("Failed to initialize storage: {}", e);
            std::process::exit(1);
        }
    };
    info!("Storage backend: {}", backend.name());

    let app_state = state::AppState::new(store, backend);

    let cors = match std::env::var("CORS_ORIGIN") {
        Ok(cors_origin) => {
            let origin = cors_origin.parse::<HeaderValue>().unwrap_or_else(|_| {
                error!("Failed to parse CORS origin: {}", cors_origin);
                std::process::exit(1);
            });
            CorsLayer::new()
                .allow_origin(origin)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([CONTENT_TYPE])
        }
        Err(_) => {
            warn!("CORS_ORIGIN not set, allowing any origin");
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([CONTENT_TYPE])
        }
    };

    let app = Router::new()
        .route("/", get(root))
        .merge(routes::app(app_state))
        .layer(cors);

    let server_addr =
        std::env::var("SERVER_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

    let addr: SocketAddr = server_addr.parse().unwrap_or_else(|_| {
        error!("Failed to parse SERVER_ADDR: {}", server_addr);
        std::process::exit(1);
    });

    info!("Voting server running at http://{}", addr);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind to address {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}

async fn root() -> Json<serde_json::Value> {
    let elapsed = START_TIME.elapsed();
    let seconds = elapsed.as_secs();
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    let uptime_message = if days > 0 {
        format!("{}d {}h {}m {}s", days, hours % 24, minutes % 60, seconds % 60)
    } else if hours > 0 {
        format!("{}h {}m {}s", hours, minutes % 60, seconds % 60)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds % 60)
    } else {
        format!("{}s", seconds)
    };

    Json(json!({
        "status": "ok",
        "message": format!("Voting backend is running! Uptime: {}", uptime_message)
    }))
}
