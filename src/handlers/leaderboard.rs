use crate::db::Db;
use crate::error::AppError;
use crate::models::leaderboard::LeaderboardQuery;
use crate::services::leaderboard as service;
use ntex::web::{self, HttpResponse};
use std::sync::Arc;

pub async fn get_leaderboard(
    db: web::types::State<Arc<Db>>,
    query: web::types::Query<LeaderboardQuery>,
) -> Result<HttpResponse, AppError> {
    let page = service::query_leaderboard(&db, &query.into_inner())?;
    Ok(HttpResponse::Ok().json(&page))
}
