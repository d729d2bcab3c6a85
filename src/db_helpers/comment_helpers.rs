use sqlx::{Sqlite, SqlitePool};

use crate::errors::ApiError;
use crate::models::Comment;

use super::check_article_exists_in_db;

pub async fn get_comments_for_article_in_db(
    pool: &SqlitePool,
    article_id: i64,
) -> Result<Vec<Comment>, ApiError> {
    check_article_exists_in_db(pool, article_id).await?;

    let comments = sqlx::query_as::<Sqlite, Comment>(
        r#"
        SELECT comment_id,
               article_id,
               body,
               votes,
               author,
               created_at
        FROM comments
        WHERE article_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(article_id)
    .fetch_all(pool)
    .await?;

    Ok(comments)
}

pub async fn add_comment_to_article_in_db(
    pool: &SqlitePool,
    article_id: i64,
    username: &str,
    body: &str,
) -> Result<Comment, ApiError> {
    check_article_exists_in_db(pool, article_id).await?;

    let comment = sqlx::query_as::<Sqlite, Comment>(
        r#"
        INSERT INTO comments (article_id, author, body)
        VALUES ($1, $2, $3)
        RETURNING comment_id, article_id, body, votes, author, created_at
        "#,
    )
    .bind(article_id)
    .bind(username)
    .bind(body)
    .fetch_one(pool)
    .await
    .map_err(|e| {
        // The article was checked just above, so the only foreign key left
        // to fail is the author reference.
        if let sqlx::Error::Database(db_error) = &e {
            if db_error.message().contains("FOREIGN KEY constraint failed") {
                return ApiError::NotFound("User not found");
            }
        }
        ApiError::Database(e)
    })?;

    Ok(comment)
}

pub async fn delete_comment_in_db(pool: &SqlitePool, comment_id: i64) -> Result<(), ApiError> {
    let result = sqlx::query("DELETE FROM comments WHERE comment_id = $1")
        .bind(comment_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::NotFound("Comment not found"));
    }
    Ok(())
}
