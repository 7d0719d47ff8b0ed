use crate::domain::user::User;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The authenticated account, returned with a freshly issued token.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub email: String,
    pub token: String,
    pub username: String,
    pub bio: Option<String>,
    pub image: Option<String>,
}

impl UserDto {
    pub fn from_parts(user: User, token: String) -> Self {
        Self {
            email: user.email.into_inner(),
            token,
            username: user.username.into_inner(),
            bio: user.bio,
            image: user.image,
        }
    }
}
