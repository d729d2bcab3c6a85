mod data_formats;
mod db_helpers;
mod errors;
mod handlers;
mod models;

use anyhow::Context;
pub use anyhow::Result;
use axum::http::StatusCode;
use axum::{routing::*, Extension, Json, Router};
pub use data_formats::*;
use handlers::*;
pub use models::*;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::{
    net::{SocketAddr, TcpListener},
    str::FromStr,
    sync::Arc,
};
pub type JsonResponse<T> = (StatusCode, Json<T>);

pub async fn run_app(app: Router, address: SocketAddr, pool: SqlitePool) -> Result<()> {
    let app = app.layer(Extension(Arc::new(pool)));
    axum::Server::bind(&address)
        .serve(app.into_make_service())
        .await?;
    Ok(())
}

pub async fn init_db(db_url: &str) -> Result<SqlitePool> {
    // Foreign keys are off by default in SQLite; the comment author check
    // relies on the constraint firing at insert time.
    let options = SqliteConnectOptions::from_str(db_url)
        .context("DATABASE_URL is not a valid sqlite url")?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new().connect_with(options).await?;
    tracing::info!("Running migrations");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Migrations completed");
    Ok(pool)
}

pub fn get_random_free_port() -> (u16, SocketAddr) {
    let listener = TcpListener::bind("localhost:0").unwrap();
    match listener.local_addr() {
        Ok(addr) => (addr.port(), addr),
        Err(_) => panic!("Could not get a free port"),
    }
}

pub fn make_router() -> Router {
    Router::new()
        .route("/api/topics", get(get_topics))
        .route("/api/users", get(get_users))
        .route("/api/articles", get(get_articles))
        .route(
            "/api/articles/:article_id",
            get(get_article_by_id).patch(patch_article_votes),
        )
        .route(
            "/api/articles/:article_id/comments",
            get(get_comments_by_article_id).post(post_comment_by_article_id),
        )
        .route("/api/comments/:comment_id", delete(delete_comment_by_id))
        .fallback(not_found)
}
