//! JSON shapes exchanged with the host page

use serde::{Deserialize, Serialize};

use super::board::RankedEntry;

/// Body of `POST /ranking`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitRequest {
    pub username: String,
    /// Parsed as a [`Difficulty`](crate::Difficulty) by the store
    pub difficulty: String,
    pub score: f64,
}

/// Successful `POST /ranking` reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub status: String,
    pub ranking: Vec<RankedEntry>,
}

impl SubmitResponse {
    pub fn saved(ranking: Vec<RankedEntry>) -> Self {
        Self {
            status: "saved".to_string(),
            ranking,
        }
    }
}

/// Error body for any non-2xx reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
