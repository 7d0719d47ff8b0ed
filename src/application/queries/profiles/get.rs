use super::ProfileQueryService;
use crate::{
    application::{
        context::RequestContext,
        dto::{AuthenticatedUser, ProfileView},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::Username,
};

pub struct GetProfileQuery {
    pub username: String,
}

impl ProfileQueryService {
    pub async fn get_profile(
        &self,
        ctx: &RequestContext,
        viewer: Option<&AuthenticatedUser>,
        query: GetProfileQuery,
    ) -> ApplicationResult<ProfileView> {
        let username = Username::new(query.username)
            .map_err(|_| ApplicationError::not_found("user not found"))?;
        let user = ctx
            .run(self.user_repo.find_by_username(&username))
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        self.projector
            .profile(ctx, user, viewer.map(|viewer| viewer.id))
            .await
    }
}
