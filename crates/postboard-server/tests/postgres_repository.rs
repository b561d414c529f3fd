//! Runs against a real database. Set `DATABASE_URL` and use
//! `cargo test -- --ignored`; each test gets a fresh migrated database.

use postboard_server::repository::{CommentRepository, PgRepository};
use postboard_shared::NewComment;
use sqlx::PgPool;
use uuid::Uuid;

async fn seed_user(pool: &PgPool) -> Uuid {
    let id = Uuid::new_v4();
    sqlx::query("INSERT INTO users (id, name, email) VALUES ($1, $2, $3)")
        .bind(id)
        .bind("ana")
        .bind(format!("{}@example.com", id))
        .execute(pool)
        .await
        .unwrap();
    id
}

async fn seed_post(pool: &PgPool, author: Uuid) -> Uuid {
    let id = Uuid::new_v4();
    sqlx::query("INSERT INTO posts (id, user_id, text) VALUES ($1, $2, $3)")
        .bind(id)
        .bind(author)
        .bind("first post")
        .execute(pool)
        .await
        .unwrap();
    id
}

async fn comment_rows(pool: &PgPool) -> i64 {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM comments")
        .fetch_one(pool)
        .await
        .unwrap();
    count
}

fn new_comment(text: &str, post: Uuid, user: Uuid) -> NewComment {
    NewComment {
        text: text.to_string(),
        post,
        user,
    }
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "Requires PostgreSQL database"]
async fn create_links_comment_at_front(pool: PgPool) {
    let repo = PgRepository::new(pool.clone());
    let user = seed_user(&pool).await;
    let post = seed_post(&pool, user).await;

    let first = repo.create_comment(new_comment("first", post, user)).await.unwrap();
    let second = repo.create_comment(new_comment("second", post, user)).await.unwrap();

    assert_eq!(second.text, "second");
    assert_eq!(second.post, post);
    assert_eq!(second.user, user);

    let stored = repo.find_post(post).await.unwrap().unwrap();
    assert_eq!(stored.user, user);
    assert_eq!(stored.comments, vec![second.id, first.id]);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "Requires PostgreSQL database"]
async fn list_returns_most_recent_first(pool: PgPool) {
    let repo = PgRepository::new(pool.clone());
    let user = seed_user(&pool).await;
    let post = seed_post(&pool, user).await;

    for text in ["older", "middle", "newer"] {
        repo.create_comment(new_comment(text, post, user)).await.unwrap();
    }

    let texts: Vec<String> = repo
        .list_comments(post)
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.text)
        .collect();
    assert_eq!(texts, vec!["newer", "middle", "older"]);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "Requires PostgreSQL database"]
async fn concurrent_creates_all_land(pool: PgPool) {
    let repo = PgRepository::new(pool.clone());
    let user = seed_user(&pool).await;
    let post = seed_post(&pool, user).await;

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let repo = repo.clone();
            tokio::spawn(async move {
                repo.create_comment(new_comment(&format!("comment {}", i), post, user))
                    .await
            })
        })
        .collect();

    let mut created = Vec::new();
    for handle in handles {
        created.push(handle.await.unwrap().unwrap().id);
    }

    let stored = repo.find_post(post).await.unwrap().unwrap();
    assert_eq!(stored.comments.len(), 16);
    for id in &created {
        assert!(stored.comments.contains(id));
    }
    assert_eq!(comment_rows(&pool).await, 16);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "Requires PostgreSQL database"]
async fn missing_post_leaves_no_comment(pool: PgPool) {
    let repo = PgRepository::new(pool.clone());
    let user = seed_user(&pool).await;

    let result = repo
        .create_comment(new_comment("orphan", Uuid::new_v4(), user))
        .await;

    assert!(result.is_err());
    assert_eq!(comment_rows(&pool).await, 0);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "Requires PostgreSQL database"]
async fn unknown_ids_are_none(pool: PgPool) {
    let repo = PgRepository::new(pool.clone());
    let user = seed_user(&pool).await;

    assert!(repo.find_post(Uuid::new_v4()).await.unwrap().is_none());
    assert!(repo.find_user(Uuid::new_v4()).await.unwrap().is_none());
    assert_eq!(repo.find_user(user).await.unwrap().unwrap().name, "ana");
}
