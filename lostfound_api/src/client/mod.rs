mod client;

pub use client::parse_json_if_ok;
pub use client::LostFoundClient;

pub use crate::{
    api::{
        auth::AuthApi, claims::ClaimsApi, items::ItemsApi, messages::MessagesApi,
        moderation::ModerationApi, security::SecurityApi, uploads::UploadsApi, users::UsersApi,
    },
    error::{handle_api_error, LostFoundError},
};
