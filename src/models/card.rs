use serde::Serialize;

/// A card as served to the ranking UI by the random-sample endpoint.
#[derive(Debug, Serialize)]
pub struct RandomCard {
    pub id: String,
    pub name: String,
    pub image: String,
}
