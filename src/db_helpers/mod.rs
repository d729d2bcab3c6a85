use sqlx::SqlitePool;

use crate::errors::ApiError;

mod article_helpers;
mod comment_helpers;
mod topic_helpers;
mod user_helpers;

pub use article_helpers::*;
pub use comment_helpers::*;
pub use topic_helpers::*;
pub use user_helpers::*;

const ARTICLE_SUMMARY_SELECT: &str = "\
SELECT a.author,
       a.title,
       a.article_id,
       a.topic,
       a.created_at,
       a.votes,
       a.article_img_url,
       COUNT(c.comment_id) AS comment_count
FROM   articles a
       LEFT JOIN comments c
              ON c.article_id = a.article_id";

/// Allow-list of columns the article listing may be sorted by. Anything the
/// client sends that is not one of these is a `Bad request`; only the fixed
/// identifiers below ever reach the query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SortColumn {
    Author,
    Title,
    ArticleId,
    Topic,
    CreatedAt,
    Votes,
    ArticleImgUrl,
    CommentCount,
}

impl SortColumn {
    fn from_param(param: Option<&str>) -> Result<Self, ApiError> {
        match param {
            None => Ok(SortColumn::CreatedAt),
            Some("author") => Ok(SortColumn::Author),
            Some("title") => Ok(SortColumn::Title),
            Some("article_id") => Ok(SortColumn::ArticleId),
            Some("topic") => Ok(SortColumn::Topic),
            Some("created_at") => Ok(SortColumn::CreatedAt),
            Some("votes") => Ok(SortColumn::Votes),
            Some("article_img_url") => Ok(SortColumn::ArticleImgUrl),
            Some("comment_count") => Ok(SortColumn::CommentCount),
            Some(_) => Err(ApiError::BadRequest),
        }
    }

    fn as_sql(self) -> &'static str {
        match self {
            // comment_count is the aggregate alias, the rest live on the
            // articles table.
            SortColumn::Author => "a.author",
            SortColumn::Title => "a.title",
            SortColumn::ArticleId => "a.article_id",
            SortColumn::Topic => "a.topic",
            SortColumn::CreatedAt => "a.created_at",
            SortColumn::Votes => "a.votes",
            SortColumn::ArticleImgUrl => "a.article_img_url",
            SortColumn::CommentCount => "comment_count",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    fn from_param(param: Option<&str>) -> Result<Self, ApiError> {
        match param {
            None => Ok(SortOrder::Desc),
            Some(value) => match value.to_ascii_lowercase().as_str() {
                "asc" => Ok(SortOrder::Asc),
                "desc" => Ok(SortOrder::Desc),
                _ => Err(ApiError::BadRequest),
            },
        }
    }

    fn as_sql(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

fn build_article_list_query(topic_filtered: bool, sort: SortColumn, order: SortOrder) -> String {
    let mut query = String::from(ARTICLE_SUMMARY_SELECT);
    if topic_filtered {
        query.push_str("\nWHERE  a.topic = $1");
    }
    query.push_str("\nGROUP  BY a.article_id\nORDER  BY ");
    query.push_str(sort.as_sql());
    query.push(' ');
    query.push_str(order.as_sql());
    query
}

// ----------------- Helper Functions -----------------

async fn check_article_exists_in_db(pool: &SqlitePool, article_id: i64) -> Result<(), ApiError> {
    let row = sqlx::query("SELECT 1 FROM articles WHERE article_id = $1")
        .bind(article_id)
        .fetch_optional(pool)
        .await?;
    match row {
        Some(_) => Ok(()),
        None => Err(ApiError::NotFound("Article not found")),
    }
}
