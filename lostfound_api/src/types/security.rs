use serde::{Deserialize, Serialize};

/// One ownership-verification question attached to a found item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityQuestion {
    pub question: String,
    /// `"multiple_choice"` or `"text"`.
    pub question_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<String>,
}

/// Bulk attach of a found item's questions. The backend wants 2 to 5 per
/// item and replaces whatever was there before.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSecurityQuestions {
    pub found_item_id: i64,
    pub questions: Vec<SecurityQuestion>,
}
