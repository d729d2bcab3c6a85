use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use nc_news::{get_random_free_port, init_db, make_router, run_app};
use sqlx::SqlitePool;

static DB_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Starts the API on a random free port with its own freshly seeded
/// database and returns the base url to hit it on.
pub async fn spawn_app() -> String {
    let db_path = std::env::temp_dir().join(format!(
        "nc-news-test-{}-{}.sqlite",
        std::process::id(),
        DB_COUNTER.fetch_add(1, Ordering::SeqCst)
    ));
    let _ = std::fs::remove_file(&db_path);
    let db_url = format!("sqlite://{}", db_path.display());

    let pool = init_db(&db_url)
        .await
        .expect("Could not initialise the test database");
    seed(&pool).await;

    let (_, addr) = get_random_free_port();
    let router = make_router();
    tokio::spawn(async move {
        run_app(router, addr, pool)
            .await
            .expect("Server stopped unexpectedly");
    });
    wait_until_listening(addr).await;

    format!("http://{}", addr)
}

async fn wait_until_listening(addr: SocketAddr) {
    for _ in 0..50 {
        if tokio::net::TcpStream::connect(addr).await.is_ok() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("Server did not start listening on {}", addr);
}

const TOPICS: &[(&str, &str)] = &[
    ("mitch", "The man, the Mitch, the legend"),
    ("cats", "Not dogs"),
    ("paper", "what books are made of"),
];

const USERS: &[(&str, &str)] = &[
    ("butter_bridge", "jonny"),
    ("icellusedkars", "sam"),
    ("rogersop", "paul"),
    ("lurker", "do_nothing"),
];

// (article_id, title, topic, author, body, created_at, votes)
const ARTICLES: &[(i64, &str, &str, &str, &str, &str, i64)] = &[
    (
        1,
        "Living in the shadow of a great man",
        "mitch",
        "butter_bridge",
        "I find this existence challenging",
        "2020-07-09 20:11:00",
        100,
    ),
    (
        2,
        "Sony Vaio; or, The Laptop",
        "mitch",
        "icellusedkars",
        "Call me Mitchell. Some years ago I thought I would sail about a little.",
        "2020-10-16 05:03:00",
        0,
    ),
    (
        3,
        "Eight pug gifs that remind me of mitch",
        "mitch",
        "icellusedkars",
        "some gifs",
        "2020-11-03 09:12:00",
        0,
    ),
    (
        4,
        "UNCOVERED: catspiracy to bring down democracy",
        "cats",
        "rogersop",
        "Bastet walks amongst us, and the cats are taking arms!",
        "2020-08-03 13:14:00",
        0,
    ),
];

// (comment_id, article_id, body, votes, author, created_at)
const COMMENTS: &[(i64, i64, &str, i64, &str, &str)] = &[
    (
        1,
        1,
        "Oh, I've got compassion running out of my nose, pal!",
        16,
        "butter_bridge",
        "2020-04-06 12:17:00",
    ),
    (
        2,
        1,
        "The beautiful thing about treasure is that it exists.",
        14,
        "butter_bridge",
        "2020-10-31 03:03:00",
    ),
    (
        3,
        1,
        "Replacing the quiet elegance of the dark suit with the casual indifference of these muted earth tones.",
        100,
        "icellusedkars",
        "2020-01-01 03:08:00",
    ),
    (
        4,
        4,
        "What do you see? I have no idea where this will lead us.",
        16,
        "icellusedkars",
        "2020-10-11 15:23:00",
    ),
];

async fn seed(pool: &SqlitePool) {
    for (slug, description) in TOPICS {
        sqlx::query("INSERT INTO topics (slug, description, img_url) VALUES ($1, $2, $3)")
            .bind(slug)
            .bind(description)
            .bind(format!("https://images.example.com/topics/{}.jpg", slug))
            .execute(pool)
            .await
            .expect("Could not seed topics");
    }

    for (username, name) in USERS {
        sqlx::query("INSERT INTO users (username, name, avatar_url) VALUES ($1, $2, $3)")
            .bind(username)
            .bind(name)
            .bind(format!("https://avatars.example.com/{}.png", username))
            .execute(pool)
            .await
            .expect("Could not seed users");
    }

    for (article_id, title, topic, author, body, created_at, votes) in ARTICLES {
        sqlx::query(
            r#"
            INSERT INTO articles (article_id, title, topic, author, body, created_at, votes, article_img_url)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(article_id)
        .bind(title)
        .bind(topic)
        .bind(author)
        .bind(body)
        .bind(created_at)
        .bind(votes)
        .bind(format!("https://images.example.com/articles/{}.jpg", article_id))
        .execute(pool)
        .await
        .expect("Could not seed articles");
    }

    for (comment_id, article_id, body, votes, author, created_at) in COMMENTS {
        sqlx::query(
            r#"
            INSERT INTO comments (comment_id, article_id, body, votes, author, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(comment_id)
        .bind(article_id)
        .bind(body)
        .bind(votes)
        .bind(author)
        .bind(created_at)
        .execute(pool)
        .await
        .expect("Could not seed comments");
    }
}
