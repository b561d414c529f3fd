use async_trait::async_trait;
use postboard_shared::{Comment, NewComment, Post, User};
use uuid::Uuid;

use super::CommentRepository;
use crate::db::DbPool;

/// PostgreSQL-backed repository.
#[derive(Clone)]
pub struct PgRepository {
    pool: DbPool,
}

impl PgRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgRepository {
    async fn find_post(&self, id: Uuid) -> anyhow::Result<Option<Post>> {
        let post = sqlx::query_as::<_, Post>(
            "SELECT id, user_id, text, comment_ids, created_at FROM posts WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }

    async fn find_user(&self, id: Uuid) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, email, created_at FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn create_comment(&self, comment: NewComment) -> anyhow::Result<Comment> {
        let mut tx = self.pool.begin().await?;

        let created = sqlx::query_as::<_, Comment>(
            r#"
            INSERT INTO comments (id, post_id, user_id, text)
            VALUES ($1, $2, $3, $4)
            RETURNING id, post_id, user_id, text, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(comment.post)
        .bind(comment.user)
        .bind(&comment.text)
        .fetch_one(&mut *tx)
        .await?;

        // Single-statement prepend: concurrent writers serialize on the row lock
        // instead of overwriting each other's list.
        let linked = sqlx::query(
            "UPDATE posts SET comment_ids = array_prepend($1, comment_ids) WHERE id = $2",
        )
        .bind(created.id)
        .bind(comment.post)
        .execute(&mut *tx)
        .await?;

        if linked.rows_affected() != 1 {
            anyhow::bail!("post {} disappeared while linking comment", comment.post);
        }

        tx.commit().await?;

        Ok(created)
    }

    async fn list_comments(&self, post_id: Uuid) -> anyhow::Result<Vec<Comment>> {
        let comments = sqlx::query_as::<_, Comment>(
            r#"
            SELECT c.id, c.post_id, c.user_id, c.text, c.created_at
            FROM posts p
            CROSS JOIN LATERAL unnest(p.comment_ids) WITH ORDINALITY AS l(comment_id, ord)
            JOIN comments c ON c.id = l.comment_id
            WHERE p.id = $1
            ORDER BY l.ord
            "#,
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(comments)
    }
}
