use std::sync::Arc;

use crate::{
    application::projection::Projector,
    domain::{follow::FollowRepository, user::UserRepository},
};

pub struct ProfileCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) follow_repo: Arc<dyn FollowRepository>,
    pub(super) projector: Arc<Projector>,
}

impl ProfileCommandService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        follow_repo: Arc<dyn FollowRepository>,
        projector: Arc<Projector>,
    ) -> Self {
        Self {
            user_repo,
            follow_repo,
            projector,
        }
    }
}
