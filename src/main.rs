use std::net::SocketAddr;

use nc_news::{init_db, make_router, run_app};
use tracing::Level;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let db_url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            tracing::error!("DATABASE_URL must be set");
            return;
        }
    };
    let pool = match init_db(&db_url).await {
        Ok(pool) => pool,
        Err(error) => {
            tracing::error!(%error, "Could not initialise the database");
            return;
        }
    };

    let addr = SocketAddr::from(([127, 0, 0, 1], 3001));
    let router = make_router();
    tracing::info!("Server started on {}", addr);
    if let Err(error) = run_app(router, addr, pool).await {
        tracing::error!(%error, "Server exited with an error");
    }
}
