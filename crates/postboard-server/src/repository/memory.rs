use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use postboard_shared::{Comment, NewComment, Post, User};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::CommentRepository;

#[derive(Default)]
struct Tables {
    users: HashMap<Uuid, User>,
    posts: HashMap<Uuid, Post>,
    comments: HashMap<Uuid, Comment>,
}

/// In-process repository for tests and local fixtures.
///
/// All writes happen under a single lock, which gives `create_comment` the
/// same all-or-nothing behaviour as the database transaction.
#[derive(Default)]
pub struct MemoryRepository {
    tables: RwLock<Tables>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_user(&self, name: &str, email: &str) -> User {
        let user = User {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
            created_at: Utc::now(),
        };
        self.tables
            .write()
            .await
            .users
            .insert(user.id, user.clone());
        user
    }

    pub async fn remove_user(&self, id: Uuid) -> Option<User> {
        self.tables.write().await.users.remove(&id)
    }

    pub async fn insert_post(&self, author: Uuid, text: &str) -> Post {
        let post = Post {
            id: Uuid::new_v4(),
            user: author,
            text: text.to_string(),
            comments: Vec::new(),
            created_at: Utc::now(),
        };
        self.tables
            .write()
            .await
            .posts
            .insert(post.id, post.clone());
        post
    }

    pub async fn comment_count(&self) -> usize {
        self.tables.read().await.comments.len()
    }
}

#[async_trait]
impl CommentRepository for MemoryRepository {
    async fn find_post(&self, id: Uuid) -> anyhow::Result<Option<Post>> {
        Ok(self.tables.read().await.posts.get(&id).cloned())
    }

    async fn find_user(&self, id: Uuid) -> anyhow::Result<Option<User>> {
        Ok(self.tables.read().await.users.get(&id).cloned())
    }

    async fn create_comment(&self, comment: NewComment) -> anyhow::Result<Comment> {
        let mut tables = self.tables.write().await;

        let Some(post) = tables.posts.get_mut(&comment.post) else {
            anyhow::bail!("post {} disappeared while linking comment", comment.post);
        };

        let created = Comment {
            id: Uuid::new_v4(),
            text: comment.text,
            post: comment.post,
            user: comment.user,
            created_at: Utc::now(),
        };

        post.comments.insert(0, created.id);
        tables.comments.insert(created.id, created.clone());

        Ok(created)
    }

    async fn list_comments(&self, post_id: Uuid) -> anyhow::Result<Vec<Comment>> {
        let tables = self.tables.read().await;
        let Some(post) = tables.posts.get(&post_id) else {
            return Ok(Vec::new());
        };

        Ok(post
            .comments
            .iter()
            .filter_map(|id| tables.comments.get(id).cloned())
            .collect())
    }
}
