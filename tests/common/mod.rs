#![allow(dead_code)]

use camp_api::{api, Db};
use tempfile::TempDir;

/// Boot the real app on an ephemeral port against a fresh SQLite file.
/// Returns the base URL, a store handle for seeding/asserting rows, and the
/// temp dir guard that keeps the database file alive.
pub async fn spawn_app() -> (String, Db, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let database_url = format!("sqlite:{}", temp_dir.path().join("app.db").display());

    let db = Db::connect(&database_url).await.unwrap();
    db.migrate().await.unwrap();

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = api::router(db.clone());
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), db, temp_dir)
}

/// The API exposes no activity creation endpoint, so tests seed activities
/// directly through the store.
pub async fn seed_activity(db: &Db, name: &str, difficulty: i64) -> i64 {
    sqlx::query("INSERT INTO activities (name, difficulty) VALUES (?, ?)")
        .bind(name)
        .bind(difficulty)
        .execute(db.pool())
        .await
        .unwrap()
        .last_insert_rowid()
}

pub async fn count_rows(db: &Db, table: &str) -> i64 {
    let (count,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(db.pool())
        .await
        .unwrap();
    count
}
