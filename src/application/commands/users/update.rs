use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        context::RequestContext,
        dto::{AuthenticatedUser, UserDto},
        error::ApplicationResult,
    },
    domain::user::{Email, PasswordHash, UserUpdate, Username},
};

#[derive(Debug, Default)]
pub struct UpdateUserCommand {
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub bio: Option<String>,
    pub image: Option<String>,
}

impl UserCommandService {
    pub async fn update_user(
        &self,
        ctx: &RequestContext,
        actor: &AuthenticatedUser,
        command: UpdateUserCommand,
    ) -> ApplicationResult<UserDto> {
        let mut update = UserUpdate::new(actor.id, self.clock.now());

        if let Some(email) = command.email {
            let email = Email::new(email)?;
            self.ensure_email_free(ctx, &email, Some(actor.id)).await?;
            update = update.with_email(email);
        }

        if let Some(username) = command.username {
            let username = Username::new(username)?;
            self.ensure_username_free(ctx, &username, Some(actor.id))
                .await?;
            update = update.with_username(username);
        }

        if let Some(password) = command.password {
            validate_password(&password)?;
            let hashed = self.password_hasher.hash(&password).await?;
            update = update.with_password_hash(PasswordHash::new(hashed)?);
        }

        if let Some(bio) = command.bio {
            update = update.with_bio(bio);
        }

        if let Some(image) = command.image {
            update = update.with_image(image);
        }

        let user = ctx.run(self.user_repo.update(update)).await?;
        self.with_token(user).await
    }
}
