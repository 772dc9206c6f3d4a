use crate::{
    client::{parse_json_if_ok, LostFoundClient},
    error::LostFoundError,
    types::auth::Acknowledgement,
    types::claim::{ClaimAttempt, DataFinalizeClaim, DataUpdateClaimAttempt, ResponseClaimAttempts},
};

#[async_trait::async_trait]
pub trait ClaimsApi {
    /// List all claim attempts on a found item. Finder-only: the backend
    /// checks `finder_email` against the item before answering.
    async fn claim_attempts(
        &self,
        item_id: &str,
        finder_email: &str,
    ) -> Result<Vec<ClaimAttempt>, LostFoundError>;

    /// Mark or unmark an attempt as the potential claimer.
    async fn update_claim_attempt(
        &self,
        data: DataUpdateClaimAttempt,
    ) -> Result<Acknowledgement, LostFoundError>;

    /// Finalize a claim after the waiting period, retiring the found
    /// report.
    async fn finalize_claim(
        &self,
        data: DataFinalizeClaim,
    ) -> Result<Acknowledgement, LostFoundError>;
}

#[async_trait::async_trait]
impl ClaimsApi for LostFoundClient {
    async fn claim_attempts(
        &self,
        item_id: &str,
        finder_email: &str,
    ) -> Result<Vec<ClaimAttempt>, LostFoundError> {
        let url = self.config.claim_attempts(item_id);
        let query = [("finder_email", finder_email.to_string())];
        let resp = self.authed_get_with_query(&url, &query).await?;
        let listed: ResponseClaimAttempts = parse_json_if_ok(resp).await?;
        Ok(listed.attempts)
    }

    async fn update_claim_attempt(
        &self,
        data: DataUpdateClaimAttempt,
    ) -> Result<Acknowledgement, LostFoundError> {
        let resp = self.authed_post(&self.config.claims.update, &data).await?;
        parse_json_if_ok(resp).await
    }

    async fn finalize_claim(
        &self,
        data: DataFinalizeClaim,
    ) -> Result<Acknowledgement, LostFoundError> {
        let resp = self.authed_post(&self.config.claims.finalize, &data).await?;
        parse_json_if_ok(resp).await
    }
}
