use serde::{Deserialize, Serialize};

use crate::types::item::Item;

/// Public profile fields of an account.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)] // Use default values for missing fields
pub struct User {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponseUser {
    pub user: User,
}

/// Dashboard payload: a user's own reports, each with its candidate
/// matches from the matching pipeline.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct UserReports {
    pub lost_reports: Vec<ReportWithMatches>,
    pub found_reports: Vec<ReportWithMatches>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ReportWithMatches {
    #[serde(flatten)]
    pub item: Item,
    #[serde(default)]
    pub matches: Vec<MatchCandidate>,
}

/// A counterpart report scored against one of the user's own.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct MatchCandidate {
    #[serde(flatten)]
    pub item: Item,
    /// Similarity in `0.0..=1.0`; the backend only surfaces candidates
    /// above its own threshold.
    #[serde(default)]
    pub similarity: f64,
}

/// Answer of the moderator check.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ModeratorStatus {
    pub is_moderator: bool,
    pub role: Option<String>,
}
