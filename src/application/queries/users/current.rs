use super::UserQueryService;
use crate::application::{
    context::RequestContext,
    dto::{AuthenticatedUser, TokenSubject, UserDto},
    error::{ApplicationError, ApplicationResult},
};

impl UserQueryService {
    /// The caller's own account, with a freshly issued token.
    pub async fn current_user(
        &self,
        ctx: &RequestContext,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<UserDto> {
        let user = ctx
            .run(self.user_repo.find_by_id(actor.id))
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        let token = self
            .token_manager
            .issue(TokenSubject::new(user.id, user.username.as_str()))
            .await?;
        Ok(UserDto::from_parts(user, token.token))
    }
}
