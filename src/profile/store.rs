// src/profile/store.rs
//! Singleton persistence for the color profile.
//!
//! The profile row is pinned to id 1 and replaced with a single upsert, so a
//! crash mid-finalize can never leave the store empty (the old shipped
//! behavior was delete-then-insert).

use super::ColorProfile;
use anyhow::Result;
use sqlx::{Row, SqlitePool};

#[derive(Clone)]
pub struct ProfileStore {
    pool: SqlitePool,
}

impl ProfileStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Atomically replace the stored profile (full replace, no merge).
    pub async fn replace(&self, profile: &ColorProfile) -> Result<()> {
        let profile_json = serde_json::to_string(profile)?;
        sqlx::query(
            r#"
            INSERT INTO color_profile (id, recommended_season, profile, updated_at)
            VALUES (1, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                recommended_season = excluded.recommended_season,
                profile = excluded.profile,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(profile.recommended_season.as_str())
        .bind(profile_json)
        .bind(profile.updated_at.naive_utc())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn load(&self) -> Result<Option<ColorProfile>> {
        let row = sqlx::query("SELECT profile FROM color_profile WHERE id = 1")
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| {
            let json: String = r.get("profile");
            Ok(serde_json::from_str(&json)?)
        })
        .transpose()
    }

    pub async fn clear(&self) -> Result<()> {
        sqlx::query("DELETE FROM color_profile WHERE id = 1")
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
