use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct RankingSubmission {
    pub ranking: Vec<RankingEntry>,
}

#[derive(Debug, Deserialize)]
pub struct RankingEntry {
    pub id: String,
    pub score: f64,
}

#[derive(Debug, Serialize)]
pub struct RankingAck {
    pub message: String,
}
