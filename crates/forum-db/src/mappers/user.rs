//! User entity <-> model mapper

use forum_core::entities::User;
use forum_core::value_objects::Id;

use crate::models::UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User::new(Id::new(model.id), model.username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_to_entity() {
        let user = User::from(UserModel {
            id: 5,
            username: "alice".to_string(),
        });
        assert_eq!(user, User::new(Id::new(5), "alice"));
    }
}
