use crate::{
    client::{parse_json_if_ok, LostFoundClient},
    error::LostFoundError,
    types::auth::Acknowledgement,
    types::security::DataSecurityQuestions,
};

#[async_trait::async_trait]
pub trait SecurityApi {
    /// Attach ownership-verification questions to a found item in bulk,
    /// replacing any existing set. The backend accepts 2 to 5 questions.
    async fn submit_security_questions(
        &self,
        data: DataSecurityQuestions,
    ) -> Result<Acknowledgement, LostFoundError>;
}

#[async_trait::async_trait]
impl SecurityApi for LostFoundClient {
    async fn submit_security_questions(
        &self,
        data: DataSecurityQuestions,
    ) -> Result<Acknowledgement, LostFoundError> {
        let resp = self
            .authed_post(&self.config.security.questions_bulk, &data)
            .await?;
        parse_json_if_ok(resp).await
    }
}
