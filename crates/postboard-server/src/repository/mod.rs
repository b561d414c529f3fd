use async_trait::async_trait;
use postboard_shared::{Comment, NewComment, Post, User};
use uuid::Uuid;

mod memory;
mod postgres;

pub use memory::MemoryRepository;
pub use postgres::PgRepository;

/// Storage for posts, users and comments.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn find_post(&self, id: Uuid) -> anyhow::Result<Option<Post>>;

    async fn find_user(&self, id: Uuid) -> anyhow::Result<Option<User>>;

    /// Persists the comment and prepends its id to the parent post's comment
    /// list as one atomic operation. Either both writes land or neither does.
    async fn create_comment(&self, comment: NewComment) -> anyhow::Result<Comment>;

    /// Comments linked from the post, in the post's list order.
    async fn list_comments(&self, post_id: Uuid) -> anyhow::Result<Vec<Comment>>;
}
