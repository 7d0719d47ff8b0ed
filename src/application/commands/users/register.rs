use super::{UserCommandService, password::validate_password};
use crate::{
    application::{context::RequestContext, dto::UserDto, error::ApplicationResult},
    domain::user::{Email, NewUser, PasswordHash, Username},
};

pub struct RegisterUserCommand {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl UserCommandService {
    pub async fn register(
        &self,
        ctx: &RequestContext,
        command: RegisterUserCommand,
    ) -> ApplicationResult<UserDto> {
        let username = Username::new(command.username)?;
        let email = Email::new(command.email)?;
        validate_password(&command.password)?;

        self.ensure_email_free(ctx, &email, None).await?;
        self.ensure_username_free(ctx, &username, None).await?;

        let hashed = self.password_hasher.hash(&command.password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        let new_user = NewUser::new(username, email, password_hash, self.clock.now());
        let user = ctx.run(self.user_repo.insert(new_user)).await?;
        tracing::info!(user_id = %user.id, username = %user.username, "user registered");

        self.with_token(user).await
    }
}
