use axum::{
    extract::{Query, State},
    Extension, Json,
};
use postboard_shared::{
    api::{CreateCommentRequest, ListCommentsQuery},
    Comment, NewComment,
};
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::error::{AppError, POST_NOT_FOUND, USER_NOT_FOUND};
use crate::extract::ValidatedJson;
use crate::routes::AppState;

/// A post reference that is not a well-formed id cannot name a stored post.
fn parse_post_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw.trim()).map_err(|_| AppError::NotFound(POST_NOT_FOUND))
}

/// POST /api/comments
pub async fn create_comment(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    ValidatedJson(req): ValidatedJson<CreateCommentRequest>,
) -> Result<Json<Comment>, AppError> {
    let post_id = parse_post_id(&req.post)?;

    let post = state
        .repo
        .find_post(post_id)
        .await?
        .ok_or(AppError::NotFound(POST_NOT_FOUND))?;

    state
        .repo
        .find_user(user.id)
        .await?
        .ok_or(AppError::NotFound(USER_NOT_FOUND))?;

    let comment = state
        .repo
        .create_comment(NewComment {
            text: req.text,
            post: post.id,
            user: user.id,
        })
        .await?;

    tracing::info!(comment_id = %comment.id, post_id = %post.id, user_id = %user.id, "Comment created");

    Ok(Json(comment))
}

/// GET /api/comments?post=:id
pub async fn list_comments(
    State(state): State<AppState>,
    Query(query): Query<ListCommentsQuery>,
) -> Result<Json<Vec<Comment>>, AppError> {
    let raw = query.post.ok_or(AppError::NotFound(POST_NOT_FOUND))?;
    let post_id = parse_post_id(&raw)?;

    state
        .repo
        .find_post(post_id)
        .await?
        .ok_or(AppError::NotFound(POST_NOT_FOUND))?;

    let comments = state.repo.list_comments(post_id).await?;
    Ok(Json(comments))
}
