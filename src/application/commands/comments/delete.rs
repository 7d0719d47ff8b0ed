use super::CommentCommandService;
use crate::{
    application::{
        context::RequestContext,
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::comment::CommentId,
};

pub struct DeleteCommentCommand {
    pub slug: String,
    pub comment_id: i64,
}

impl CommentCommandService {
    /// Only the comment's author may delete it; owning the article is not enough.
    pub async fn delete_comment(
        &self,
        ctx: &RequestContext,
        actor: &AuthenticatedUser,
        command: DeleteCommentCommand,
    ) -> ApplicationResult<()> {
        let article = self.find_article(ctx, command.slug).await?;
        let comment_id = CommentId::new(command.comment_id)
            .map_err(|_| ApplicationError::not_found("comment not found"))?;

        let comment = ctx
            .run(self.comment_repo.find_by_id(comment_id))
            .await?
            .filter(|comment| comment.belongs_to(article.id))
            .ok_or_else(|| ApplicationError::not_found("comment not found"))?;

        if !comment.is_authored_by(actor.id) {
            return Err(ApplicationError::forbidden("permission denied"));
        }

        ctx.run(self.comment_repo.delete(comment.id)).await
    }
}
