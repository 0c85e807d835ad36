use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct LeaderboardQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub name: Option<String>,
    pub color: Option<String>,
    #[serde(rename = "type")]
    pub card_type: Option<String>,
    pub sort: Option<String>,
}

/// One leaderboard row. Field names follow the wire format the presentation
/// layer expects.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedCard {
    pub card_id: String,
    pub card_name: String,
    pub card_image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_image_back: Option<String>,
    pub points: i64,
    pub rank: i64,
}

#[derive(Debug, Serialize)]
pub struct LeaderboardPage {
    pub total: i64,
    pub cards: Vec<RankedCard>,
}
