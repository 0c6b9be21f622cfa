//! Notification service - the owner's activity feed

use forum_core::entities::Notification;
use forum_core::traits::NotificationQuery;
use forum_core::Id;
use tracing::instrument;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Notification service
pub struct NotificationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> NotificationService<'a> {
    /// Create a new NotificationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Notifications addressed to `owner`, newest first
    #[instrument(skip(self))]
    pub async fn list_for_owner(
        &self,
        owner: Id,
        query: NotificationQuery,
    ) -> ServiceResult<Vec<Notification>> {
        Ok(self
            .ctx
            .notification_repo()
            .list_for_owner(owner, query)
            .await?)
    }
}
