use std::sync::Arc;

use crate::application::{
    context::RequestContext,
    dto::{TokenSubject, UserDto},
    error::{ApplicationError, ApplicationResult},
    ports::{
        security::{PasswordHasher, TokenManager},
        time::Clock,
    },
};
use crate::domain::user::{Email, User, UserId, UserRepository, Username};

pub struct UserCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) token_manager: Arc<dyn TokenManager>,
    pub(super) clock: Arc<dyn Clock>,
}

impl UserCommandService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            user_repo,
            password_hasher,
            token_manager,
            clock,
        }
    }

    pub(super) async fn with_token(&self, user: User) -> ApplicationResult<UserDto> {
        let subject = TokenSubject::new(user.id, user.username.as_str());
        let token = self.token_manager.issue(subject).await?;
        Ok(UserDto::from_parts(user, token.token))
    }

    /// `owner` is the account allowed to already hold the address.
    pub(super) async fn ensure_email_free(
        &self,
        ctx: &RequestContext,
        email: &Email,
        owner: Option<UserId>,
    ) -> ApplicationResult<()> {
        match ctx.run(self.user_repo.find_by_email(email)).await? {
            Some(existing) if Some(existing.id) != owner => {
                Err(ApplicationError::conflict("email already exists"))
            }
            _ => Ok(()),
        }
    }

    pub(super) async fn ensure_username_free(
        &self,
        ctx: &RequestContext,
        username: &Username,
        owner: Option<UserId>,
    ) -> ApplicationResult<()> {
        match ctx.run(self.user_repo.find_by_username(username)).await? {
            Some(existing) if Some(existing.id) != owner => {
                Err(ApplicationError::conflict("username already exists"))
            }
            _ => Ok(()),
        }
    }
}
