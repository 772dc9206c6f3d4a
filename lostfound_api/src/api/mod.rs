pub mod auth;
pub mod claims;
pub mod items;
pub mod messages;
pub mod moderation;
pub mod security;
pub mod uploads;
pub mod users;

pub use auth::AuthApi;
pub use claims::ClaimsApi;
pub use items::ItemsApi;
pub use messages::MessagesApi;
pub use moderation::ModerationApi;
pub use security::SecurityApi;
pub use uploads::UploadsApi;
pub use users::UsersApi;
