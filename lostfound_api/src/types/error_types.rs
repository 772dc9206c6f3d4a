use serde::{Deserialize, Serialize};

/// The backend's uniform error envelope.
///
/// Every failing endpoint responds with `{"error": "<human readable>"}`
/// plus a non-2xx status; there is no machine-readable error code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
