use crate::{
    client::{parse_json_if_ok, LostFoundClient},
    error::LostFoundError,
    types::message::{
        Conversation, ConversationDetails, DataCreateConversation, DataSendMessage, Message,
        ResponseConversations, ResponseCreateConversation, ResponseMessages, ResponseSendMessage,
    },
};
use async_trait::async_trait;

/// Trait that holds the methods for message endpoints.
#[async_trait]
pub trait MessagesApi {
    /// Fetch the conversations overview for a user.
    async fn conversations(&self, user_id: i64) -> Result<Vec<Conversation>, LostFoundError>;

    /// Fetch all messages of a conversation. The requesting user must be
    /// one of the participants.
    async fn fetch_messages(
        &self,
        conversation_id: &str,
        user_id: i64,
    ) -> Result<Vec<Message>, LostFoundError>;

    /// Send a message into an existing conversation.
    async fn send_message(
        &self,
        data: DataSendMessage,
    ) -> Result<ResponseSendMessage, LostFoundError>;

    /// Open (or look up) the conversation between two users about an item
    /// and return its server-minted secure id.
    async fn create_conversation(
        &self,
        data: DataCreateConversation,
    ) -> Result<String, LostFoundError>;

    /// Resolve a secure conversation id back to its participants and item.
    async fn conversation_details(
        &self,
        conversation_id: &str,
        user_id: i64,
    ) -> Result<ConversationDetails, LostFoundError>;
}

#[async_trait]
impl MessagesApi for LostFoundClient {
    async fn conversations(&self, user_id: i64) -> Result<Vec<Conversation>, LostFoundError> {
        let query = [("user_id", user_id.to_string())];
        let resp = self
            .authed_get_with_query(&self.config.messages.conversations, &query)
            .await?;
        let listed: ResponseConversations = parse_json_if_ok(resp).await?;
        Ok(listed.conversations)
    }

    async fn fetch_messages(
        &self,
        conversation_id: &str,
        user_id: i64,
    ) -> Result<Vec<Message>, LostFoundError> {
        let query = [
            ("conversation_id", conversation_id.to_string()),
            ("user_id", user_id.to_string()),
        ];
        let resp = self
            .authed_get_with_query(&self.config.messages.messages, &query)
            .await?;
        let listed: ResponseMessages = parse_json_if_ok(resp).await?;
        Ok(listed.messages)
    }

    async fn send_message(
        &self,
        data: DataSendMessage,
    ) -> Result<ResponseSendMessage, LostFoundError> {
        let resp = self.authed_post(&self.config.messages.messages, &data).await?;
        parse_json_if_ok(resp).await
    }

    async fn create_conversation(
        &self,
        data: DataCreateConversation,
    ) -> Result<String, LostFoundError> {
        let resp = self
            .authed_post(&self.config.messages.create_conversation, &data)
            .await?;
        let created: ResponseCreateConversation = parse_json_if_ok(resp).await?;
        Ok(created.conversation_id)
    }

    async fn conversation_details(
        &self,
        conversation_id: &str,
        user_id: i64,
    ) -> Result<ConversationDetails, LostFoundError> {
        let query = [
            ("conversation_id", conversation_id.to_string()),
            ("user_id", user_id.to_string()),
        ];
        let resp = self
            .authed_get_with_query(&self.config.messages.conversation_details, &query)
            .await?;
        parse_json_if_ok(resp).await
    }
}
