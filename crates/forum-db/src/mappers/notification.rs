//! Notification entity <-> model mapper

use forum_core::entities::{NewNotification, Notification};
use forum_core::error::DomainError;
use forum_core::value_objects::{Id, Target};

use super::target::{parse_polarity, parse_target_kind};
use crate::models::NotificationModel;

/// Convert NotificationModel to Notification entity
impl TryFrom<NotificationModel> for Notification {
    type Error = DomainError;

    fn try_from(model: NotificationModel) -> Result<Self, Self::Error> {
        Ok(Notification {
            id: Id::new(model.id),
            actor_id: Id::new(model.actor_id),
            actor_name: model.actor_name,
            owner_id: Id::new(model.owner_id),
            target: Target::new(parse_target_kind(&model.target_kind)?, Id::new(model.target_id)),
            post_id: Id::new(model.post_id),
            verb: parse_polarity(&model.verb)?,
            created_at: model.created_at,
        })
    }
}

/// Values of a pending notification, ready for binding
pub struct NotificationInsert<'a> {
    pub actor_id: i64,
    pub actor_name: &'a str,
    pub owner_id: i64,
    pub target_kind: &'static str,
    pub target_id: i64,
    pub post_id: i64,
    pub verb: &'static str,
}

impl<'a> NotificationInsert<'a> {
    pub fn new(notification: &'a NewNotification) -> Self {
        Self {
            actor_id: notification.actor_id.into_inner(),
            actor_name: &notification.actor_name,
            owner_id: notification.owner_id.into_inner(),
            target_kind: notification.target.kind.as_str(),
            target_id: notification.target.id.into_inner(),
            post_id: notification.post_id.into_inner(),
            verb: notification.verb.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use forum_core::value_objects::Polarity;

    #[test]
    fn test_model_to_entity() {
        let model = NotificationModel {
            id: 1,
            actor_id: 5,
            actor_name: "alice".to_string(),
            owner_id: 7,
            target_kind: "post".to_string(),
            target_id: 10,
            post_id: 10,
            verb: "like".to_string(),
            created_at: Utc::now(),
        };

        let notification = Notification::try_from(model).unwrap();
        assert_eq!(notification.target, Target::post(Id::new(10)));
        assert_eq!(notification.verb, Polarity::Like);
        assert_eq!(notification.message(), "alice liked your post");
    }
}
