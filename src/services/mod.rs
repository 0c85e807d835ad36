pub mod cards;
pub mod leaderboard;
pub mod rankings;
pub mod stats;
