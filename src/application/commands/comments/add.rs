use super::CommentCommandService;
use crate::{
    application::{
        context::RequestContext,
        dto::{AuthenticatedUser, CommentView},
        error::ApplicationResult,
    },
    domain::comment::{CommentBody, NewComment},
};

pub struct AddCommentCommand {
    pub slug: String,
    pub body: String,
}

impl CommentCommandService {
    pub async fn add_comment(
        &self,
        ctx: &RequestContext,
        actor: &AuthenticatedUser,
        command: AddCommentCommand,
    ) -> ApplicationResult<CommentView> {
        let article = self.find_article(ctx, command.slug).await?;
        let body = CommentBody::new(command.body)?;

        let comment = ctx
            .run(self.comment_repo.insert(NewComment {
                article_id: article.id,
                author_id: actor.id,
                body,
                created_at: self.clock.now(),
            }))
            .await?;

        self.projector.comment(ctx, comment, Some(actor.id)).await
    }
}
