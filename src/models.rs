use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Topic {
    pub slug: String,
    pub description: String,
    pub img_url: String,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    pub username: String,
    pub name: String,
    pub avatar_url: String,
}

/// Article row as returned by the listing endpoint: no `body`, always a
/// `comment_count`.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ArticleSummary {
    pub author: String,
    pub title: String,
    pub article_id: i64,
    pub topic: String,
    pub created_at: NaiveDateTime,
    pub votes: i64,
    pub article_img_url: String,
    pub comment_count: i64,
}

/// Full article row. `comment_count` is only present when the row came from
/// the aggregated single-article query; the vote-update RETURNING clause does
/// not produce it.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Article {
    pub author: String,
    pub title: String,
    pub article_id: i64,
    pub body: String,
    pub topic: String,
    pub created_at: NaiveDateTime,
    pub votes: i64,
    pub article_img_url: String,
    #[sqlx(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_count: Option<i64>,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Comment {
    pub comment_id: i64,
    pub article_id: i64,
    pub body: String,
    pub votes: i64,
    pub author: String,
    pub created_at: NaiveDateTime,
}
