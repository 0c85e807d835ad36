use crate::db::Db;
use crate::error::AppError;
use crate::models::ranking::RankingSubmission;
use crate::rate_limit::RateLimiter;
use crate::services::rankings as service;
use ntex::web::{self, HttpResponse};
use std::sync::Arc;

pub async fn submit_ranking(
    req: web::HttpRequest,
    db: web::types::State<Arc<Db>>,
    gate: web::types::State<Arc<RateLimiter>>,
    body: web::types::Json<RankingSubmission>,
) -> Result<HttpResponse, AppError> {
    let client = req
        .peer_addr()
        .map(|addr| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".into());
    gate.check(&client)?;

    let ack = service::submit_ranking(&db, &body.into_inner())?;
    Ok(HttpResponse::Ok().json(&ack))
}
