use sqlx::{Sqlite, SqlitePool};

use crate::data_formats::ArticleQueryParams;
use crate::errors::ApiError;
use crate::models::{Article, ArticleSummary};

use super::{build_article_list_query, SortColumn, SortOrder};

const SINGLE_ARTICLE_QUERY: &str = "\
SELECT a.author,
       a.title,
       a.article_id,
       a.body,
       a.topic,
       a.created_at,
       a.votes,
       a.article_img_url,
       COUNT(c.comment_id) AS comment_count
FROM   articles a
       LEFT JOIN comments c
              ON c.article_id = a.article_id
WHERE  a.article_id = $1
GROUP  BY a.article_id";

pub async fn list_articles_in_db(
    pool: &SqlitePool,
    ArticleQueryParams {
        sort_by,
        order,
        topic,
    }: &ArticleQueryParams,
) -> Result<Vec<ArticleSummary>, ApiError> {
    let sort = SortColumn::from_param(sort_by.as_deref())?;
    let order = SortOrder::from_param(order.as_deref())?;
    let query = build_article_list_query(topic.is_some(), sort, order);

    let mut articles = sqlx::query_as::<Sqlite, ArticleSummary>(&query);
    if let Some(topic) = topic {
        articles = articles.bind(topic);
    }
    let articles = articles.fetch_all(pool).await?;

    // An empty result for a topic filter is only an error when the topic
    // itself does not exist.
    if let Some(topic) = topic {
        if articles.is_empty() {
            let known = sqlx::query("SELECT 1 FROM topics WHERE slug = $1")
                .bind(topic)
                .fetch_optional(pool)
                .await?;
            if known.is_none() {
                return Err(ApiError::NotFound("Topic not found"));
            }
        }
    }

    Ok(articles)
}

pub async fn get_article_by_id_in_db(
    pool: &SqlitePool,
    article_id: i64,
) -> Result<Article, ApiError> {
    let article = sqlx::query_as::<Sqlite, Article>(SINGLE_ARTICLE_QUERY)
        .bind(article_id)
        .fetch_optional(pool)
        .await?;
    match article {
        Some(article) => Ok(article),
        None => Err(ApiError::NotFound("Article not found")),
    }
}

pub async fn update_article_votes_in_db(
    pool: &SqlitePool,
    article_id: i64,
    inc_votes: i64,
) -> Result<Article, ApiError> {
    // The increment happens in the statement itself, so concurrent updates
    // to the same article never lose votes.
    let article = sqlx::query_as::<Sqlite, Article>(
        r#"
        UPDATE articles
        SET votes = votes + $1
        WHERE article_id = $2
        RETURNING author, title, article_id, body, topic, created_at, votes, article_img_url
        "#,
    )
    .bind(inc_votes)
    .bind(article_id)
    .fetch_optional(pool)
    .await?;
    match article {
        Some(article) => Ok(article),
        None => Err(ApiError::NotFound("Article not found")),
    }
}
