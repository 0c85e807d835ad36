use crate::db::Db;
use crate::error::AppError;
use crate::models::card::RandomCard;
use rand::seq::index;
use rusqlite::params;

pub const SAMPLE_SIZE: usize = 4;

const ELIGIBLE: &str = "active = 1 AND image IS NOT NULL AND image != ''";

/// Picks up to SAMPLE_SIZE distinct random cards among those eligible for
/// display. Random index sampling over a fixed ordering avoids sorting the
/// whole table per request.
pub fn random_cards(db: &Db) -> Result<Vec<RandomCard>, AppError> {
    let cards = db.with_conn(|conn| {
        let eligible: i64 = conn.query_row(
            &format!("SELECT COUNT(*) FROM cards WHERE {}", ELIGIBLE),
            [],
            |row| row.get(0),
        )?;
        if eligible == 0 {
            return Ok(Vec::new());
        }

        let count = eligible as usize;
        let picks = index::sample(&mut rand::thread_rng(), count, SAMPLE_SIZE.min(count));

        let mut stmt = conn.prepare(&format!(
            "SELECT id, name, image FROM cards WHERE {} ORDER BY id LIMIT 1 OFFSET ?1",
            ELIGIBLE
        ))?;
        let mut cards = Vec::with_capacity(picks.len());
        for idx in picks.iter() {
            let card = stmt.query_row(params![idx as i64], |row| {
                Ok(RandomCard {
                    id: row.get(0)?,
                    name: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
                    image: row.get(2)?,
                })
            })?;
            cards.push(card);
        }
        Ok(cards)
    })?;

    if cards.is_empty() {
        return Err(AppError::NotFound("No cards found in database".into()));
    }
    Ok(cards)
}
