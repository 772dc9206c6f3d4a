use serde::{Deserialize, Serialize};

/// One claim attempt on a found item, as listed for the finder.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ClaimAttempt {
    pub id: i64,
    pub found_item_id: i64,
    pub user_email: String,
    pub user_name: Option<String>,
    /// The claimant's answers to the item's security questions, stored by
    /// the backend as a JSON string.
    pub answers_json: Option<String>,
    pub success: Option<i64>,
    pub attempted_at: Option<String>,
    pub marked_as_potential_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ResponseClaimAttempts {
    pub attempts: Vec<ClaimAttempt>,
}

/// Mark (or unmark) a claim attempt as the potential claimer. Marking does
/// not finalize the claim; the item stays visible until
/// [`DataFinalizeClaim`] goes through after the waiting period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataUpdateClaimAttempt {
    pub found_item_id: i64,
    pub user_email: String,
    pub success: bool,
}

/// Finalize a claim: hand the item to `user_email`, recording why, and
/// retire the found report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataFinalizeClaim {
    pub found_item_id: i64,
    pub user_email: String,
    pub owner_email: String,
    /// Free-text justification; the backend rejects anything under 10
    /// characters.
    pub claim_reason: String,
}
