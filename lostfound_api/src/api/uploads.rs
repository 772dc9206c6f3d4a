use crate::{client::LostFoundClient, error::LostFoundError};

#[async_trait::async_trait]
pub trait UploadsApi {
    /// Download a stored upload (an item photo) by filename.
    async fn fetch_upload(&self, filename: &str) -> Result<Vec<u8>, LostFoundError>;
}

#[async_trait::async_trait]
impl UploadsApi for LostFoundClient {
    async fn fetch_upload(&self, filename: &str) -> Result<Vec<u8>, LostFoundError> {
        let url = self.config.upload(filename);
        let resp = self.authed_get(&url).await?;

        if !resp.status().is_success() {
            return Err(LostFoundError::HttpStatus {
                code: resp.status().as_u16(),
                body: resp.text().await.unwrap_or_default(),
            });
        }

        let bytes = resp.bytes().await.map_err(LostFoundError::ReqwestError)?;
        Ok(bytes.to_vec())
    }
}
