mod db;
mod error;
mod handlers;
mod models;
mod rank;
mod rate_limit;
mod services;
mod validation;

use db::Db;
use ntex::web;
use ntex_cors::Cors;
use rate_limit::RateLimiter;
use std::sync::Arc;
use tracing::info;

#[ntex::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let db_path = std::env::var("DATABASE_PATH").unwrap_or_else(|_| "cards.db".into());
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);
    let rate_window: i64 = std::env::var("RATE_LIMIT_WINDOW_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(60);
    let rate_max: u32 = std::env::var("RATE_LIMIT_MAX")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(30);

    let db = Arc::new(Db::open(&db_path).expect("Failed to open database"));
    let gate = Arc::new(RateLimiter::new(rate_window, rate_max));

    info!("cardrank server starting on {}:{} (db: {})", host, port, db_path);

    web::HttpServer::new(move || {
        web::App::new()
            .state(db.clone())
            .state(gate.clone())
            .wrap(
                Cors::new()
                    .allowed_origin("*")
                    .allowed_methods(vec!["GET", "POST", "OPTIONS"])
                    .allowed_headers(vec!["Content-Type"])
                    .max_age(3600)
                    .finish(),
            )
            // Health check
            .route("/api/health", web::get().to(health))
            // Ranking candidates
            .route("/api/cards/random", web::get().to(handlers::cards::random_cards))
            // Score submissions
            .route("/api/rankings", web::post().to(handlers::rankings::submit_ranking))
            // Leaderboard
            .route("/api/leaderboard", web::get().to(handlers::leaderboard::get_leaderboard))
            // Aggregate activity
            .route("/api/stats", web::get().to(handlers::stats::get_stats))
    })
    .bind(format!("{}:{}", host, port))?
    .run()
    .await
}

async fn health() -> web::HttpResponse {
    web::HttpResponse::Ok().json(&serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
