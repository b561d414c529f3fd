use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Comment {
    pub id: Uuid,
    pub text: String,
    /// Parent post id
    #[cfg_attr(feature = "sqlx", sqlx(rename = "post_id"))]
    pub post: Uuid,
    /// Author id
    #[cfg_attr(feature = "sqlx", sqlx(rename = "user_id"))]
    pub user: Uuid,
    pub created_at: DateTime<Utc>,
}

/// A comment that has passed validation but has not been stored yet.
#[derive(Debug, Clone)]
pub struct NewComment {
    pub text: String,
    pub post: Uuid,
    pub user: Uuid,
}
