use sqlx::{Sqlite, SqlitePool};

use crate::errors::ApiError;
use crate::models::User;

pub async fn get_all_users_in_db(pool: &SqlitePool) -> Result<Vec<User>, ApiError> {
    let users = sqlx::query_as::<Sqlite, User>("SELECT username, name, avatar_url FROM users")
        .fetch_all(pool)
        .await?;
    Ok(users)
}
