use std::sync::Arc;

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Extension, Json,
};
use sqlx::SqlitePool;

use crate::{
    db_helpers::{
        add_comment_to_article_in_db, delete_comment_in_db, get_all_topics_in_db,
        get_all_users_in_db, get_article_by_id_in_db, get_comments_for_article_in_db,
        list_articles_in_db, update_article_votes_in_db,
    },
    errors::{ApiError, ErrorBody},
    models::{Article, Comment},
    ArticleQueryParams, ArticleWrapper, ArticlesWrapper, CommentWrapper, CommentsWrapper,
    JsonResponse, NewCommentRequest, TopicsWrapper, UpdateVotesRequest, UsersWrapper,
};

type JsonResult<T> = Result<Json<T>, JsonResponse<ErrorBody>>;

/// Path ids are taken as strings and validated here so that a malformed id
/// produces the same `Bad request` body as every other caller error.
fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse().map_err(|_| ApiError::BadRequest)
}

// ----------------- Helper Handlers -----------------

pub async fn not_found() -> JsonResponse<ErrorBody> {
    (StatusCode::NOT_FOUND, Json(ErrorBody::new("Route not found")))
}

// ----------------- Topic and User Handlers -----------------

pub async fn get_topics(Extension(pool): Extension<Arc<SqlitePool>>) -> JsonResult<TopicsWrapper> {
    let topics = get_all_topics_in_db(&pool)
        .await
        .map_err(|e| e.to_json_response())?;
    Ok(Json(TopicsWrapper { topics }))
}

pub async fn get_users(Extension(pool): Extension<Arc<SqlitePool>>) -> JsonResult<UsersWrapper> {
    let users = get_all_users_in_db(&pool)
        .await
        .map_err(|e| e.to_json_response())?;
    Ok(Json(UsersWrapper { users }))
}

// ----------------- Article Handlers -----------------

pub async fn get_articles(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Query(params): Query<ArticleQueryParams>,
) -> JsonResult<ArticlesWrapper> {
    let articles = list_articles_in_db(&pool, &params)
        .await
        .map_err(|e| e.to_json_response())?;
    Ok(Json(ArticlesWrapper { articles }))
}

pub async fn get_article_by_id(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Path(article_id): Path<String>,
) -> JsonResult<ArticleWrapper<Article>> {
    let article_id = parse_id(&article_id).map_err(|e| e.to_json_response())?;
    let article = get_article_by_id_in_db(&pool, article_id)
        .await
        .map_err(|e| e.to_json_response())?;
    Ok(Json(ArticleWrapper { article }))
}

pub async fn patch_article_votes(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Path(article_id): Path<String>,
    Json(request): Json<UpdateVotesRequest>,
) -> JsonResult<ArticleWrapper<Article>> {
    let article_id = parse_id(&article_id).map_err(|e| e.to_json_response())?;
    let inc_votes = request
        .inc_votes
        .as_ref()
        .and_then(serde_json::Value::as_i64)
        .ok_or_else(|| ApiError::BadRequest.to_json_response())?;
    let article = update_article_votes_in_db(&pool, article_id, inc_votes)
        .await
        .map_err(|e| e.to_json_response())?;
    Ok(Json(ArticleWrapper { article }))
}

// ----------------- Comment Handlers -----------------

pub async fn get_comments_by_article_id(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Path(article_id): Path<String>,
) -> JsonResult<CommentsWrapper> {
    let article_id = parse_id(&article_id).map_err(|e| e.to_json_response())?;
    let comments = get_comments_for_article_in_db(&pool, article_id)
        .await
        .map_err(|e| e.to_json_response())?;
    Ok(Json(CommentsWrapper { comments }))
}

pub async fn post_comment_by_article_id(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Path(article_id): Path<String>,
    Json(request): Json<NewCommentRequest>,
) -> Result<JsonResponse<CommentWrapper<Comment>>, JsonResponse<ErrorBody>> {
    let article_id = parse_id(&article_id).map_err(|e| e.to_json_response())?;
    let (username, body) = match (request.username, request.body) {
        (Some(username), Some(body)) => (username, body),
        _ => return Err(ApiError::BadRequest.to_json_response()),
    };
    let comment = add_comment_to_article_in_db(&pool, article_id, &username, &body)
        .await
        .map_err(|e| e.to_json_response())?;
    Ok((StatusCode::CREATED, Json(CommentWrapper { comment })))
}

pub async fn delete_comment_by_id(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Path(comment_id): Path<String>,
) -> Result<StatusCode, JsonResponse<ErrorBody>> {
    let comment_id = parse_id(&comment_id).map_err(|e| e.to_json_response())?;
    delete_comment_in_db(&pool, comment_id)
        .await
        .map_err(|e| e.to_json_response())?;
    Ok(StatusCode::NO_CONTENT)
}
