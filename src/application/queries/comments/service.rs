use std::sync::Arc;

use crate::{
    application::projection::Projector,
    domain::{article::ArticleReadRepository, comment::CommentRepository},
};

pub struct CommentQueryService {
    pub(super) comment_repo: Arc<dyn CommentRepository>,
    pub(super) article_repo: Arc<dyn ArticleReadRepository>,
    pub(super) projector: Arc<Projector>,
}

impl CommentQueryService {
    pub fn new(
        comment_repo: Arc<dyn CommentRepository>,
        article_repo: Arc<dyn ArticleReadRepository>,
        projector: Arc<Projector>,
    ) -> Self {
        Self {
            comment_repo,
            article_repo,
            projector,
        }
    }
}
