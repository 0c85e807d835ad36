use crate::db::Db;
use crate::error::AppError;
use crate::services::cards as service;
use ntex::web::{self, HttpResponse};
use std::sync::Arc;

pub async fn random_cards(db: web::types::State<Arc<Db>>) -> Result<HttpResponse, AppError> {
    let cards = service::random_cards(&db)?;
    Ok(HttpResponse::Ok().json(&cards))
}
