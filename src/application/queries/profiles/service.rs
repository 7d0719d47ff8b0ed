use std::sync::Arc;

use crate::{application::projection::Projector, domain::user::UserRepository};

pub struct ProfileQueryService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) projector: Arc<Projector>,
}

impl ProfileQueryService {
    pub fn new(user_repo: Arc<dyn UserRepository>, projector: Arc<Projector>) -> Self {
        Self {
            user_repo,
            projector,
        }
    }
}
