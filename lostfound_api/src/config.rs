//! Endpoint resolution for the lost-and-found REST API.
//!
//! The base URL is read once at process start from [`BASE_URL_ENV`],
//! falling back to the local development server when unset or empty, and
//! every endpoint is derived from it by plain string concatenation. Nothing
//! here validates, trims, or percent-encodes: a malformed base URL or
//! identifier is passed through unchanged, and the caller owns supplying
//! values the server will accept. Once built, an [`ApiConfig`] is never
//! mutated, so it can be shared freely across tasks.

use std::env;

/// Environment variable that selects the backend deployment.
pub const BASE_URL_ENV: &str = "LOSTFOUND_API_URL";

/// Fallback used when [`BASE_URL_ENV`] is unset or empty.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Authentication endpoints.
#[derive(Debug, Clone)]
pub struct AuthEndpoints {
    pub login: String,
    pub signup: String,
    pub request_password_reset: String,
    pub reset_password: String,
}

/// Item listing and report submission endpoints.
#[derive(Debug, Clone)]
pub struct ItemEndpoints {
    pub lost: String,
    pub found: String,
    pub report: String,
}

/// Claim lifecycle endpoints (the per-item attempts listing is a builder,
/// see [`ApiConfig::claim_attempts`]).
#[derive(Debug, Clone)]
pub struct ClaimEndpoints {
    pub update: String,
    pub finalize: String,
}

/// Messaging endpoints.
#[derive(Debug, Clone)]
pub struct MessageEndpoints {
    pub conversations: String,
    pub messages: String,
    pub create_conversation: String,
    pub conversation_details: String,
}

/// Security-question endpoints.
#[derive(Debug, Clone)]
pub struct SecurityEndpoints {
    pub questions_bulk: String,
}

/// Moderation endpoints.
#[derive(Debug, Clone)]
pub struct ModerationEndpoints {
    pub check: String,
}

/// The resolved endpoint table.
///
/// Constant endpoints are precomputed at construction; parameterized ones
/// are pure methods substituting a single identifier into a path. Tests and
/// embedders can inject an arbitrary base URL with [`ApiConfig::new`]
/// instead of going through the environment.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
    pub auth: AuthEndpoints,
    pub items: ItemEndpoints,
    pub claims: ClaimEndpoints,
    pub messages: MessageEndpoints,
    pub security: SecurityEndpoints,
    pub moderation: ModerationEndpoints,
}

impl ApiConfig {
    /// Build the endpoint table from an explicit base URL, used verbatim.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base = base_url.into();
        Self {
            auth: AuthEndpoints {
                login: format!("{base}/api/auth/login"),
                signup: format!("{base}/api/auth/signup"),
                request_password_reset: format!("{base}/api/auth/request-password-reset"),
                reset_password: format!("{base}/api/auth/reset-password"),
            },
            items: ItemEndpoints {
                lost: format!("{base}/api/lost-items"),
                found: format!("{base}/api/found-items"),
                report: format!("{base}/api/report"),
            },
            claims: ClaimEndpoints {
                update: format!("{base}/api/update-claim-attempt"),
                finalize: format!("{base}/api/finalize-claim"),
            },
            messages: MessageEndpoints {
                conversations: format!("{base}/api/messages/conversations"),
                messages: format!("{base}/api/messages"),
                create_conversation: format!("{base}/api/create-conversation"),
                conversation_details: format!("{base}/api/get-conversation-details"),
            },
            security: SecurityEndpoints {
                questions_bulk: format!("{base}/api/security-questions/bulk"),
            },
            moderation: ModerationEndpoints {
                check: format!("{base}/api/check-moderator"),
            },
            base_url: base,
        }
    }

    /// Build the endpoint table from [`BASE_URL_ENV`].
    ///
    /// Meant to be called once at startup; absence of configuration is not
    /// an error and silently selects [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Self {
        Self::new(resolve_base_url(env::var(BASE_URL_ENV).ok()))
    }

    /// The base URL every endpoint was derived from.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `/api/user/{user_id}` — a user's public profile.
    pub fn user_profile(&self, user_id: &str) -> String {
        format!("{}/api/user/{}", self.base_url, user_id)
    }

    /// `/api/user/{user_id}/reports-with-matches` — a user's reports plus
    /// their match candidates.
    pub fn user_reports_with_matches(&self, user_id: &str) -> String {
        format!("{}/api/user/{}/reports-with-matches", self.base_url, user_id)
    }

    /// `/api/claim-attempts/{item_id}` — claim attempts on a found item.
    pub fn claim_attempts(&self, item_id: &str) -> String {
        format!("{}/api/claim-attempts/{}", self.base_url, item_id)
    }

    /// `/api/uploads/{filename}` — a stored upload.
    pub fn upload(&self, filename: &str) -> String {
        format!("{}/api/uploads/{}", self.base_url, filename)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

fn resolve_base_url(raw: Option<String>) -> String {
    match raw {
        Some(url) if !url.is_empty() => url,
        _ => DEFAULT_BASE_URL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_value_is_used_verbatim() {
        assert_eq!(
            resolve_base_url(Some("https://example.edu".to_string())),
            "https://example.edu"
        );
        // A trailing slash is not cleaned up; the table will contain `//`.
        assert_eq!(
            resolve_base_url(Some("https://example.edu/".to_string())),
            "https://example.edu/"
        );
    }

    #[test]
    fn unset_or_empty_falls_back_to_default() {
        assert_eq!(resolve_base_url(None), DEFAULT_BASE_URL);
        assert_eq!(resolve_base_url(Some(String::new())), DEFAULT_BASE_URL);
    }

    #[test]
    fn from_env_prefers_environment_value() {
        // Keep this the only test that touches the process environment.
        env::set_var(BASE_URL_ENV, "https://lostfound.example.edu");
        let config = ApiConfig::from_env();
        env::remove_var(BASE_URL_ENV);

        assert_eq!(config.base_url(), "https://lostfound.example.edu");
        assert_eq!(
            config.auth.login,
            "https://lostfound.example.edu/api/auth/login"
        );
    }

    #[test]
    fn constant_endpoints_are_base_plus_suffix() {
        let config = ApiConfig::new("https://example.edu");

        assert_eq!(config.auth.login, "https://example.edu/api/auth/login");
        assert_eq!(config.auth.signup, "https://example.edu/api/auth/signup");
        assert_eq!(
            config.auth.request_password_reset,
            "https://example.edu/api/auth/request-password-reset"
        );
        assert_eq!(
            config.auth.reset_password,
            "https://example.edu/api/auth/reset-password"
        );
        assert_eq!(config.items.lost, "https://example.edu/api/lost-items");
        assert_eq!(config.items.found, "https://example.edu/api/found-items");
        assert_eq!(config.items.report, "https://example.edu/api/report");
        assert_eq!(
            config.claims.update,
            "https://example.edu/api/update-claim-attempt"
        );
        assert_eq!(
            config.claims.finalize,
            "https://example.edu/api/finalize-claim"
        );
        assert_eq!(
            config.messages.conversations,
            "https://example.edu/api/messages/conversations"
        );
        assert_eq!(config.messages.messages, "https://example.edu/api/messages");
        assert_eq!(
            config.messages.create_conversation,
            "https://example.edu/api/create-conversation"
        );
        assert_eq!(
            config.messages.conversation_details,
            "https://example.edu/api/get-conversation-details"
        );
        assert_eq!(
            config.security.questions_bulk,
            "https://example.edu/api/security-questions/bulk"
        );
        assert_eq!(
            config.moderation.check,
            "https://example.edu/api/check-moderator"
        );
    }

    #[test]
    fn builders_substitute_the_identifier() {
        let config = ApiConfig::new("https://example.edu");

        assert_eq!(config.user_profile("42"), "https://example.edu/api/user/42");
        assert_eq!(
            config.user_reports_with_matches("42"),
            "https://example.edu/api/user/42/reports-with-matches"
        );
        assert_eq!(
            config.upload("photo.png"),
            "https://example.edu/api/uploads/photo.png"
        );
    }

    #[test]
    fn default_base_matches_the_local_backend() {
        let config = ApiConfig::default();
        assert_eq!(
            config.claim_attempts("item-7"),
            "http://localhost:5000/api/claim-attempts/item-7"
        );
    }

    #[test]
    fn identifiers_are_not_sanitized() {
        let config = ApiConfig::new("https://example.edu");

        // Empty, slash-bearing, and non-ASCII identifiers all pass through
        // raw; no percent-encoding is ever applied.
        assert_eq!(config.user_profile(""), "https://example.edu/api/user/");
        assert_eq!(
            config.upload("a/b.png"),
            "https://example.edu/api/uploads/a/b.png"
        );
        assert_eq!(
            config.upload("фото интересное.png"),
            "https://example.edu/api/uploads/фото интересное.png"
        );
    }

    #[test]
    fn construction_is_deterministic() {
        let a = ApiConfig::new("https://example.edu");
        let b = ApiConfig::new("https://example.edu");

        assert_eq!(a.auth.login, b.auth.login);
        assert_eq!(a.claim_attempts("item-7"), a.claim_attempts("item-7"));
        assert_eq!(a.user_profile("42"), b.user_profile("42"));
    }
}
