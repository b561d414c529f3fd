use std::sync::Arc;

use axum::{middleware, routing::get, Router};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::auth::auth_middleware;
use crate::handlers::comments as comment_handlers;
use crate::repository::CommentRepository;
use crate::Config;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn CommentRepository>,
    pub config: Config,
}

pub fn create_router(repo: Arc<dyn CommentRepository>, config: Config) -> Router {
    let state = AppState { repo, config };

    // Comment routes (all protected)
    let comment_routes = Router::new().route(
        "/",
        get(comment_handlers::list_comments).post(comment_handlers::create_comment),
    );

    let api_routes = Router::new()
        .nest("/comments", comment_routes)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
