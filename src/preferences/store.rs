// src/preferences/store.rs
//! SQLite persistence for the rating log (append/list) and the statistics
//! singleton (atomic upsert at id 1).

use super::{OutfitRating, PreferenceStats, RatingDirection};
use anyhow::Result;
use chrono::{NaiveDateTime, TimeZone, Utc};
use sqlx::{Row, SqlitePool};

#[derive(Clone)]
pub struct PreferenceStore {
    pool: SqlitePool,
}

impl PreferenceStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn append_rating(&self, rating: &OutfitRating) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO outfit_ratings (id, outfit_id, direction, item_ids, styling_tips, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&rating.id)
        .bind(&rating.outfit_id)
        .bind(rating.direction.as_str())
        .bind(serde_json::to_string(&rating.item_ids)?)
        .bind(
            rating
                .styling_tips
                .as_ref()
                .map(serde_json::to_string)
                .transpose()?,
        )
        .bind(rating.created_at.naive_utc())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn list_ratings(&self) -> Result<Vec<OutfitRating>> {
        let rows = sqlx::query(
            "SELECT id, outfit_id, direction, item_ids, styling_tips, created_at
             FROM outfit_ratings ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Self::row_to_rating).collect()
    }

    pub async fn list_liked(&self) -> Result<Vec<OutfitRating>> {
        let rows = sqlx::query(
            "SELECT id, outfit_id, direction, item_ids, styling_tips, created_at
             FROM outfit_ratings WHERE direction = 'up' ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Self::row_to_rating).collect()
    }

    pub async fn delete_rating(&self, rating_id: &str) -> Result<()> {
        sqlx::query("DELETE FROM outfit_ratings WHERE id = ?")
            .bind(rating_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Load the stats singleton; a missing row is an empty record.
    pub async fn load_stats(&self) -> Result<PreferenceStats> {
        let row = sqlx::query(
            "SELECT color_stats, item_stats, combo_stats, updated_at FROM preference_stats WHERE id = 1",
        )
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => {
                let color_stats: String = row.get("color_stats");
                let item_stats: String = row.get("item_stats");
                let combo_stats: String = row.get("combo_stats");
                let updated_at: Option<NaiveDateTime> = row.get("updated_at");
                Ok(PreferenceStats {
                    color_stats: serde_json::from_str(&color_stats)?,
                    item_stats: serde_json::from_str(&item_stats)?,
                    combo_stats: serde_json::from_str(&combo_stats)?,
                    updated_at: updated_at.map(|t| Utc.from_utc_datetime(&t)),
                })
            }
            None => Ok(PreferenceStats::default()),
        }
    }

    /// Atomically replace the stats singleton.
    pub async fn replace_stats(&self, stats: &PreferenceStats) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO preference_stats (id, color_stats, item_stats, combo_stats, updated_at)
            VALUES (1, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                color_stats = excluded.color_stats,
                item_stats = excluded.item_stats,
                combo_stats = excluded.combo_stats,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(serde_json::to_string(&stats.color_stats)?)
        .bind(serde_json::to_string(&stats.item_stats)?)
        .bind(serde_json::to_string(&stats.combo_stats)?)
        .bind(stats.updated_at.map(|t| t.naive_utc()))
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    fn row_to_rating(row: sqlx::sqlite::SqliteRow) -> Result<OutfitRating> {
        let direction: String = row.get("direction");
        let item_ids: String = row.get("item_ids");
        let styling_tips: Option<String> = row.get("styling_tips");
        let created_at: NaiveDateTime = row.get("created_at");

        Ok(OutfitRating {
            id: row.get("id"),
            outfit_id: row.get("outfit_id"),
            direction: match direction.as_str() {
                "up" => RatingDirection::Up,
                _ => RatingDirection::Down,
            },
            item_ids: serde_json::from_str(&item_ids)?,
            styling_tips: styling_tips.map(|s| serde_json::from_str(&s)).transpose()?,
            created_at: Utc.from_utc_datetime(&created_at),
        })
    }
}
