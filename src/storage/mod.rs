// src/storage/mod.rs
//! Pool setup and schema migrations. Run `run_migrations` at startup to
//! guarantee schema compatibility; every statement is idempotent.

use crate::config::CONFIG;
use anyhow::Result;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Executor, SqlitePool};
use tracing::info;

const CREATE_CLOSET_ITEMS: &str = r#"
CREATE TABLE IF NOT EXISTS closet_items (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    category TEXT NOT NULL,
    colors TEXT NOT NULL,
    occasions TEXT NOT NULL,
    seasons TEXT NOT NULL,
    brand TEXT,
    size TEXT,
    created_at DATETIME NOT NULL
);
"#;

const CREATE_CLOSET_ITEMS_CATEGORY_IDX: &str =
    "CREATE INDEX IF NOT EXISTS idx_closet_items_category ON closet_items(category);";

/// Singleton row, pinned to id 1. The whole profile travels as one JSON
/// document; the season column exists for cheap filtering queries.
const CREATE_COLOR_PROFILE: &str = r#"
CREATE TABLE IF NOT EXISTS color_profile (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    recommended_season TEXT NOT NULL,
    profile TEXT NOT NULL,
    updated_at DATETIME NOT NULL
);
"#;

const CREATE_OUTFIT_RATINGS: &str = r#"
CREATE TABLE IF NOT EXISTS outfit_ratings (
    id TEXT PRIMARY KEY,
    outfit_id TEXT NOT NULL,
    direction TEXT NOT NULL CHECK (direction IN ('up', 'down')),
    item_ids TEXT NOT NULL,
    styling_tips TEXT,
    created_at DATETIME NOT NULL
);
"#;

const CREATE_PREFERENCE_STATS: &str = r#"
CREATE TABLE IF NOT EXISTS preference_stats (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    color_stats TEXT NOT NULL,
    item_stats TEXT NOT NULL,
    combo_stats TEXT NOT NULL,
    updated_at DATETIME
);
"#;

pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    pool.execute(CREATE_CLOSET_ITEMS).await?;
    pool.execute(CREATE_CLOSET_ITEMS_CATEGORY_IDX).await?;
    pool.execute(CREATE_COLOR_PROFILE).await?;
    pool.execute(CREATE_OUTFIT_RATINGS).await?;
    pool.execute(CREATE_PREFERENCE_STATS).await?;
    info!("database migrations complete");
    Ok(())
}

/// Connect to the configured database and bring the schema up to date.
pub async fn connect() -> Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(CONFIG.sqlite_max_connections)
        .connect(&CONFIG.database_url)
        .await?;
    run_migrations(&pool).await?;
    Ok(pool)
}
