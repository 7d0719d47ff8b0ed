// src/application/projection.rs
use std::sync::Arc;

use crate::{
    application::{
        context::RequestContext,
        dto::{ArticleView, CommentView, ProfileView},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::Article,
        comment::Comment,
        favorite::FavoriteRepository,
        follow::FollowRepository,
        tag::TagRepository,
        user::{User, UserId, UserRepository},
    },
};

/// Assembles viewer-relative views out of stored rows.
///
/// Every view is built per item: author lookup, tag names, favorite flag and
/// follow flag are separate storage calls.
pub struct Projector {
    user_repo: Arc<dyn UserRepository>,
    tag_repo: Arc<dyn TagRepository>,
    favorite_repo: Arc<dyn FavoriteRepository>,
    follow_repo: Arc<dyn FollowRepository>,
}

impl Projector {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        tag_repo: Arc<dyn TagRepository>,
        favorite_repo: Arc<dyn FavoriteRepository>,
        follow_repo: Arc<dyn FollowRepository>,
    ) -> Self {
        Self {
            user_repo,
            tag_repo,
            favorite_repo,
            follow_repo,
        }
    }

    /// `following` is false for anonymous viewers and for the user themself.
    pub async fn profile(
        &self,
        ctx: &RequestContext,
        user: User,
        viewer: Option<UserId>,
    ) -> ApplicationResult<ProfileView> {
        let following = match viewer {
            Some(viewer) if viewer != user.id => {
                ctx.run(self.follow_repo.is_following(viewer, user.id))
                    .await?
            }
            _ => false,
        };
        Ok(ProfileView::from_user(user, following))
    }

    pub async fn author(
        &self,
        ctx: &RequestContext,
        author_id: UserId,
        viewer: Option<UserId>,
    ) -> ApplicationResult<ProfileView> {
        let author = ctx
            .run(self.user_repo.find_by_id(author_id))
            .await?
            .ok_or_else(|| ApplicationError::infrastructure("author not found"))?;
        self.profile(ctx, author, viewer).await
    }

    pub async fn article(
        &self,
        ctx: &RequestContext,
        article: Article,
        viewer: Option<UserId>,
    ) -> ApplicationResult<ArticleView> {
        let author = self.author(ctx, article.author_id, viewer).await?;
        let mut tag_list = ctx.run(self.tag_repo.names_for_article(article.id)).await?;
        tag_list.sort();

        let favorited = match viewer {
            Some(viewer) => {
                ctx.run(self.favorite_repo.is_favorited(viewer, article.id))
                    .await?
            }
            None => false,
        };

        Ok(ArticleView {
            slug: article.slug.into_inner(),
            title: article.title.into_inner(),
            description: article.description.into_inner(),
            body: article.body.into_inner(),
            tag_list,
            created_at: article.created_at,
            updated_at: article.updated_at,
            favorited,
            favorites_count: article.favorites_count,
            author,
        })
    }

    pub async fn articles(
        &self,
        ctx: &RequestContext,
        articles: Vec<Article>,
        viewer: Option<UserId>,
    ) -> ApplicationResult<Vec<ArticleView>> {
        let mut views = Vec::with_capacity(articles.len());
        for article in articles {
            views.push(self.article(ctx, article, viewer).await?);
        }
        Ok(views)
    }

    pub async fn comment(
        &self,
        ctx: &RequestContext,
        comment: Comment,
        viewer: Option<UserId>,
    ) -> ApplicationResult<CommentView> {
        let author = self.author(ctx, comment.author_id, viewer).await?;
        Ok(CommentView {
            id: comment.id.into(),
            body: comment.body.into_inner(),
            created_at: comment.created_at,
            updated_at: comment.updated_at,
            author,
        })
    }
}
