use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Post {
    pub id: Uuid,
    #[cfg_attr(feature = "sqlx", sqlx(rename = "user_id"))]
    pub user: Uuid,
    pub text: String,
    /// Comment ids, most recent first.
    #[cfg_attr(feature = "sqlx", sqlx(rename = "comment_ids"))]
    pub comments: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}
