use crate::domain::user::User;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public view of a user as seen by a (possibly anonymous) viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProfileView {
    pub username: String,
    pub bio: Option<String>,
    pub image: Option<String>,
    pub following: bool,
}

impl ProfileView {
    pub fn from_user(user: User, following: bool) -> Self {
        Self {
            username: user.username.into_inner(),
            bio: user.bio,
            image: user.image,
            following,
        }
    }
}
