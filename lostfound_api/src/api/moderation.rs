use crate::{
    client::{parse_json_if_ok, LostFoundClient},
    error::LostFoundError,
    types::user::ModeratorStatus,
};

#[async_trait::async_trait]
pub trait ModerationApi {
    /// Ask whether an account has moderator access.
    async fn check_moderator(&self, email: &str) -> Result<ModeratorStatus, LostFoundError>;
}

#[async_trait::async_trait]
impl ModerationApi for LostFoundClient {
    async fn check_moderator(&self, email: &str) -> Result<ModeratorStatus, LostFoundError> {
        let query = [("email", email.to_string())];
        let resp = self
            .authed_get_with_query(&self.config.moderation.check, &query)
            .await?;
        parse_json_if_ok(resp).await
    }
}
