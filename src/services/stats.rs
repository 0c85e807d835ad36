use crate::db::Db;
use crate::error::AppError;
use crate::models::stats::StatsReport;

pub fn get_stats(db: &Db) -> Result<StatsReport, AppError> {
    Ok(db.with_conn(|conn| {
        let rankings_submitted = conn.query_row(
            "SELECT value FROM meta WHERE key = 'rankings_submitted'",
            [],
            |row| row.get(0),
        )?;
        let total_cards =
            conn.query_row("SELECT COUNT(*) FROM cards", [], |row| row.get(0))?;
        let ranked_cards = conn.query_row(
            "SELECT COUNT(*) FROM cards
             WHERE active = 1 AND image IS NOT NULL AND image != '' AND points != 0",
            [],
            |row| row.get(0),
        )?;
        Ok(StatsReport {
            rankings_submitted,
            total_cards,
            ranked_cards,
        })
    })?)
}
