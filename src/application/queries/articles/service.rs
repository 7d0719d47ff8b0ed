use std::sync::Arc;

use crate::{
    application::projection::Projector, domain::article::ArticleReadRepository,
};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) projector: Arc<Projector>,
}

impl ArticleQueryService {
    pub fn new(read_repo: Arc<dyn ArticleReadRepository>, projector: Arc<Projector>) -> Self {
        Self {
            read_repo,
            projector,
        }
    }
}
