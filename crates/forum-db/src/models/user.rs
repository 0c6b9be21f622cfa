//! User database model

use sqlx::FromRow;

/// The `users` columns the reaction subsystem reads
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub username: String,
}
