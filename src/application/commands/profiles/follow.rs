use super::ProfileCommandService;
use crate::{
    application::{
        context::RequestContext,
        dto::{AuthenticatedUser, ProfileView},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{User, Username},
};

pub struct FollowProfileCommand {
    pub username: String,
}

impl ProfileCommandService {
    async fn find_user(&self, ctx: &RequestContext, username: String) -> ApplicationResult<User> {
        let username =
            Username::new(username).map_err(|_| ApplicationError::not_found("user not found"))?;
        ctx.run(self.user_repo.find_by_username(&username))
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))
    }

    pub async fn follow(
        &self,
        ctx: &RequestContext,
        actor: &AuthenticatedUser,
        command: FollowProfileCommand,
    ) -> ApplicationResult<ProfileView> {
        let target = self.find_user(ctx, command.username).await?;
        if target.id == actor.id {
            return Err(ApplicationError::validation("cannot follow yourself"));
        }

        ctx.run(self.follow_repo.follow(actor.id, target.id)).await?;
        self.projector.profile(ctx, target, Some(actor.id)).await
    }

    pub async fn unfollow(
        &self,
        ctx: &RequestContext,
        actor: &AuthenticatedUser,
        command: FollowProfileCommand,
    ) -> ApplicationResult<ProfileView> {
        let target = self.find_user(ctx, command.username).await?;
        ctx.run(self.follow_repo.unfollow(actor.id, target.id))
            .await?;
        self.projector.profile(ctx, target, Some(actor.id)).await
    }
}
