use crate::db::Db;
use crate::error::AppError;
use crate::services::stats as service;
use ntex::web::{self, HttpResponse};
use std::sync::Arc;

pub async fn get_stats(db: web::types::State<Arc<Db>>) -> Result<HttpResponse, AppError> {
    let report = service::get_stats(&db)?;
    Ok(HttpResponse::Ok().json(&report))
}
