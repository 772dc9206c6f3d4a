use serde::{Deserialize, Serialize};

/// One row of the conversations overview: the newest message of the
/// thread, the counterpart's identity, and an unread tally. Deleted
/// accounts show up with a placeholder name.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Conversation {
    pub conversation_id: String,
    pub item_id: Option<i64>,
    pub item_type: Option<String>,
    pub item_title: Option<String>,
    pub other_user_id: Option<i64>,
    pub other_user_name: Option<String>,
    pub other_user_email: Option<String>,
    pub last_message: Option<String>,
    pub last_message_time: Option<String>,
    pub unread_count: Option<i64>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ResponseConversations {
    pub conversations: Vec<Conversation>,
}

/// A full message object as returned from the API.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Message {
    pub id: i64,
    pub conversation_id: String,
    pub sender_id: i64,
    pub receiver_id: i64,
    pub sender_name: Option<String>,
    pub receiver_name: Option<String>,
    pub message_text: String,
    pub is_read: Option<i64>,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ResponseMessages {
    pub messages: Vec<Message>,
}

/// For sending a message into an existing conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSendMessage {
    pub conversation_id: String,
    pub sender_id: i64,
    pub receiver_id: i64,
    pub message_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_title: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ResponseSendMessage {
    pub message: String,
    pub message_id: Option<i64>,
}

/// Open (or look up) the conversation between two users about an item.
/// The server mints an opaque secure id; clients never derive it locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataCreateConversation {
    pub user_id_1: i64,
    pub user_id_2: i64,
    pub item_id: i64,
    /// Must be one of the two participants or the server answers 403.
    pub requester_id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponseCreateConversation {
    pub conversation_id: String,
}

/// Participant/item metadata behind a secure conversation id.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ConversationDetails {
    pub conversation_id: String,
    pub user_id_1: i64,
    pub user_id_2: i64,
    pub item_id: Option<i64>,
    pub created_at: Option<String>,
}
