//! User service

use forum_core::entities::User;
use forum_core::{DomainError, Id};
use tracing::instrument;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// The authenticated caller; a token for a deleted user is `UserNotFound`
    #[instrument(skip(self))]
    pub async fn get_current_user(&self, user_id: Id) -> ServiceResult<User> {
        Ok(self
            .ctx
            .reaction_repo()
            .find_user(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?)
    }
}
