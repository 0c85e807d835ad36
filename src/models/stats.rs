use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct StatsReport {
    pub rankings_submitted: i64,
    pub total_cards: i64,
    /// Cards currently visible to the leaderboard: active, image-bearing,
    /// with a non-zero score.
    pub ranked_cards: i64,
}
