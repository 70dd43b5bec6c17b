// src/closet/store.rs
//! SQLite store for the item collection. List-valued fields persist as JSON
//! text columns.

use super::ClothingItem;
use anyhow::Result;
use chrono::{NaiveDateTime, TimeZone, Utc};
use sqlx::{Row, SqlitePool};

#[derive(Clone)]
pub struct ClosetStore {
    pool: SqlitePool,
}

impl ClosetStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert an item, returning it with its new database id.
    pub async fn add(&self, item: &ClothingItem) -> Result<ClothingItem> {
        let row = sqlx::query(
            r#"
            INSERT INTO closet_items (category, colors, occasions, seasons, brand, size, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&item.category)
        .bind(serde_json::to_string(&item.colors)?)
        .bind(serde_json::to_string(&item.occasions)?)
        .bind(serde_json::to_string(&item.seasons)?)
        .bind(&item.brand)
        .bind(&item.size)
        .bind(item.created_at.naive_utc())
        .fetch_one(&self.pool)
        .await?;

        let mut saved = item.clone();
        saved.id = Some(row.get("id"));
        Ok(saved)
    }

    pub async fn update(&self, item: &ClothingItem) -> Result<()> {
        let id = item
            .id
            .ok_or_else(|| anyhow::anyhow!("cannot update an item without an id"))?;
        sqlx::query(
            r#"
            UPDATE closet_items
            SET category = ?, colors = ?, occasions = ?, seasons = ?, brand = ?, size = ?
            WHERE id = ?
            "#,
        )
        .bind(&item.category)
        .bind(serde_json::to_string(&item.colors)?)
        .bind(serde_json::to_string(&item.occasions)?)
        .bind(serde_json::to_string(&item.seasons)?)
        .bind(&item.brand)
        .bind(&item.size)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM closet_items WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn get(&self, id: i64) -> Result<Option<ClothingItem>> {
        let row = sqlx::query(
            "SELECT id, category, colors, occasions, seasons, brand, size, created_at FROM closet_items WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Self::row_to_item).transpose()
    }

    pub async fn list_all(&self) -> Result<Vec<ClothingItem>> {
        let rows = sqlx::query(
            "SELECT id, category, colors, occasions, seasons, brand, size, created_at FROM closet_items ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Self::row_to_item).collect()
    }

    fn row_to_item(row: sqlx::sqlite::SqliteRow) -> Result<ClothingItem> {
        let colors: String = row.get("colors");
        let occasions: String = row.get("occasions");
        let seasons: String = row.get("seasons");
        let created_at: NaiveDateTime = row.get("created_at");

        Ok(ClothingItem {
            id: Some(row.get("id")),
            category: row.get("category"),
            colors: serde_json::from_str(&colors)?,
            occasions: serde_json::from_str(&occasions)?,
            seasons: serde_json::from_str(&seasons)?,
            brand: row.get("brand"),
            size: row.get("size"),
            created_at: Utc.from_utc_datetime(&created_at),
        })
    }
}
