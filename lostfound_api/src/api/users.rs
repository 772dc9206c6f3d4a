use crate::{
    client::{parse_json_if_ok, LostFoundClient},
    error::LostFoundError,
    types::user::{ResponseUser, User, UserReports},
};

#[async_trait::async_trait]
pub trait UsersApi {
    /// Fetch the public profile of a user by id.
    async fn fetch_user(&self, user_id: &str) -> Result<User, LostFoundError>;

    /// Fetch a user's own reports together with their match candidates,
    /// as shown on the dashboard.
    async fn reports_with_matches(&self, user_id: &str) -> Result<UserReports, LostFoundError>;
}

#[async_trait::async_trait]
impl UsersApi for LostFoundClient {
    async fn fetch_user(&self, user_id: &str) -> Result<User, LostFoundError> {
        let url = self.config.user_profile(user_id);
        let resp = self.authed_get(&url).await?;
        let wrapped: ResponseUser = parse_json_if_ok(resp).await?;
        Ok(wrapped.user)
    }

    async fn reports_with_matches(&self, user_id: &str) -> Result<UserReports, LostFoundError> {
        let url = self.config.user_reports_with_matches(user_id);
        let resp = self.authed_get(&url).await?;
        parse_json_if_ok(resp).await
    }
}
