use crate::{
    client::{parse_json_if_ok, LostFoundClient},
    error::LostFoundError,
    types::auth::{
        Acknowledgement, DataLogin, DataRequestPasswordReset, DataResetPassword, DataSignup,
        ResponseLogin,
    },
};

#[async_trait::async_trait]
pub trait AuthApi {
    /// Log in with campus credentials.
    ///
    /// On success the returned session token is stored on the client and
    /// sent as a bearer credential on subsequent requests.
    async fn login(&self, email: &str, password: &str) -> Result<ResponseLogin, LostFoundError>;

    /// Register a new account.
    async fn signup(&self, data: DataSignup) -> Result<Acknowledgement, LostFoundError>;

    /// Ask the backend to email a password-reset token.
    async fn request_password_reset(&self, email: &str)
        -> Result<Acknowledgement, LostFoundError>;

    /// Redeem a password-reset token against a new password.
    async fn reset_password(
        &self,
        token: &str,
        new_password: &str,
    ) -> Result<Acknowledgement, LostFoundError>;

    /// Forget the stored session token. Purely local: the endpoint table
    /// carries no logout URL, sessions just expire server-side.
    async fn logout(&self);
}

#[async_trait::async_trait]
impl AuthApi for LostFoundClient {
    async fn login(&self, email: &str, password: &str) -> Result<ResponseLogin, LostFoundError> {
        let body = DataLogin {
            email: email.to_string(),
            password: password.to_string(),
        };
        let resp = self
            .http
            .post(&self.config.auth.login)
            .json(&body)
            .send()
            .await
            .map_err(LostFoundError::ReqwestError)?;

        let login: ResponseLogin = parse_json_if_ok(resp).await?;
        self.set_token(Some(login.session_token.clone())).await;

        Ok(login)
    }

    async fn signup(&self, data: DataSignup) -> Result<Acknowledgement, LostFoundError> {
        let resp = self.authed_post(&self.config.auth.signup, &data).await?;
        parse_json_if_ok(resp).await
    }

    async fn request_password_reset(
        &self,
        email: &str,
    ) -> Result<Acknowledgement, LostFoundError> {
        let body = DataRequestPasswordReset {
            email: email.to_string(),
        };
        let resp = self
            .authed_post(&self.config.auth.request_password_reset, &body)
            .await?;
        parse_json_if_ok(resp).await
    }

    async fn reset_password(
        &self,
        token: &str,
        new_password: &str,
    ) -> Result<Acknowledgement, LostFoundError> {
        let body = DataResetPassword {
            token: token.to_string(),
            new_password: new_password.to_string(),
        };
        let resp = self.authed_post(&self.config.auth.reset_password, &body).await?;
        parse_json_if_ok(resp).await
    }

    async fn logout(&self) {
        self.set_token(None).await;
    }
}
