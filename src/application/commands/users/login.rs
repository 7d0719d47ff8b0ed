use super::UserCommandService;
use crate::{
    application::{
        context::RequestContext,
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::Email,
};

pub struct LoginUserCommand {
    pub email: String,
    pub password: String,
}

const INVALID_CREDENTIALS: &str = "invalid email or password";

impl UserCommandService {
    pub async fn login(
        &self,
        ctx: &RequestContext,
        command: LoginUserCommand,
    ) -> ApplicationResult<UserDto> {
        let email = Email::new(command.email)
            .map_err(|_| ApplicationError::unauthorized(INVALID_CREDENTIALS))?;
        let user = ctx
            .run(self.user_repo.find_by_email(&email))
            .await?
            .ok_or_else(|| ApplicationError::unauthorized(INVALID_CREDENTIALS))?;

        self.password_hasher
            .verify(&command.password, user.password_hash.as_str())
            .await
            .map_err(|err| match err {
                ApplicationError::Unauthorized(_) => {
                    ApplicationError::unauthorized(INVALID_CREDENTIALS)
                }
                other => other,
            })?;

        self.with_token(user).await
    }
}
