use serde::{Deserialize, Serialize};

/// Plain credential login. The backend only accepts campus addresses and
/// rejects everything else with a 400.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataLogin {
    pub email: String,
    pub password: String,
}

/// Account registration payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSignup {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataRequestPasswordReset {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataResetPassword {
    pub token: String,
    pub new_password: String,
}

/// Returned by a successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseLogin {
    pub message: String,
    pub session_token: String,
    pub user: SessionUser,
}

/// The account payload embedded in a login response.
///
/// Boolean-ish columns come back as sqlite integers (0/1) and timestamps as
/// plain strings; both are kept as the backend emits them.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SessionUser {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub verified: Option<i64>,
    pub profile_completed: Option<i64>,
    pub created_at: Option<String>,
}

/// Generic `{"message": ...}` acknowledgement shared by the write
/// endpoints that return no payload of their own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Acknowledgement {
    pub message: String,
}
