use sqlx::{Sqlite, SqlitePool};

use crate::errors::ApiError;
use crate::models::Topic;

pub async fn get_all_topics_in_db(pool: &SqlitePool) -> Result<Vec<Topic>, ApiError> {
    let topics = sqlx::query_as::<Sqlite, Topic>("SELECT slug, description, img_url FROM topics")
        .fetch_all(pool)
        .await?;
    Ok(topics)
}
