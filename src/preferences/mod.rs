// src/preferences/mod.rs
//! Feedback-driven preference learning: thumbs up/down on proposed outfits
//! accumulate into signed counters over colors, items, and category pairs.
//!
//! The counters are unbounded and never decay; positive entries bias
//! recommendation prompts toward reuse, negative ones toward avoidance.
//! Removing a rating record does not retract its contribution (append-only
//! influence).

pub mod store;

pub use store::PreferenceStore;

use crate::closet::ClosetStore;
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use tokio::sync::Mutex;
use tracing::{debug, info};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatingDirection {
    Up,
    Down,
}

impl RatingDirection {
    pub fn weight(&self) -> i64 {
        match self {
            RatingDirection::Up => 1,
            RatingDirection::Down => -1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RatingDirection::Up => "up",
            RatingDirection::Down => "down",
        }
    }
}

/// One recorded piece of outfit feedback, with a snapshot of what was rated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutfitRating {
    pub id: String,
    pub outfit_id: String,
    pub direction: RatingDirection,
    pub item_ids: Vec<i64>,
    pub styling_tips: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
}

impl OutfitRating {
    pub fn new(outfit_id: impl Into<String>, direction: RatingDirection, item_ids: Vec<i64>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            outfit_id: outfit_id.into(),
            direction,
            item_ids,
            styling_tips: None,
            created_at: Utc::now(),
        }
    }
}

/// The cumulative counter singleton. Keys: lowercased color values, item ids,
/// and canonical `"A+B"` category pairs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreferenceStats {
    pub color_stats: HashMap<String, i64>,
    pub item_stats: HashMap<i64, i64>,
    pub combo_stats: HashMap<String, i64>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Canonical key for an unordered category pair: lexicographic order, joined
/// with `+`.
pub fn combo_key(a: &str, b: &str) -> String {
    if a <= b {
        format!("{a}+{b}")
    } else {
        format!("{b}+{a}")
    }
}

/// Applies outfit feedback to the stats singleton. All mutation funnels
/// through [`record_rating`](PreferenceLearner::record_rating), serialized by
/// an internal lock, so two near-simultaneous ratings cannot drop an update.
pub struct PreferenceLearner {
    store: PreferenceStore,
    closet: ClosetStore,
    write_lock: Mutex<()>,
}

impl PreferenceLearner {
    pub fn new(store: PreferenceStore, closet: ClosetStore) -> Self {
        Self {
            store,
            closet,
            write_lock: Mutex::new(()),
        }
    }

    /// Record a rating, persist it, and fold its weight into the counters.
    /// Returns the updated statistics.
    pub async fn record_rating(&self, rating: OutfitRating) -> Result<PreferenceStats> {
        let _guard = self.write_lock.lock().await;

        self.store.append_rating(&rating).await?;

        let weight = rating.direction.weight();
        let mut stats = self.store.load_stats().await?;
        let mut categories: BTreeSet<String> = BTreeSet::new();

        for &item_id in &rating.item_ids {
            *stats.item_stats.entry(item_id).or_default() += weight;

            // Colors come from the current item collection; items deleted
            // since the outfit was proposed just contribute nothing.
            let Some(item) = self.closet.get(item_id).await? else {
                debug!(item_id, "rated item no longer in closet, skipping color stats");
                continue;
            };
            for color in &item.colors {
                *stats.color_stats.entry(color.to_lowercase()).or_default() += weight;
            }
            categories.insert(item.category);
        }

        let categories: Vec<String> = categories.into_iter().collect();
        for i in 0..categories.len() {
            for j in (i + 1)..categories.len() {
                *stats
                    .combo_stats
                    .entry(combo_key(&categories[i], &categories[j]))
                    .or_default() += weight;
            }
        }

        stats.updated_at = Some(Utc::now());
        self.store.replace_stats(&stats).await?;

        info!(
            outfit_id = %rating.outfit_id,
            direction = rating.direction.as_str(),
            items = rating.item_ids.len(),
            "outfit rating recorded"
        );
        Ok(stats)
    }

    /// Ratings the user thumbed up, newest first (the "Liked Outfits" shelf).
    pub async fn liked_outfits(&self) -> Result<Vec<OutfitRating>> {
        self.store.list_liked().await
    }

    /// Delete a rating record. Deliberately does not subtract its prior
    /// contribution from the counters; see DESIGN.md on retraction.
    pub async fn remove_rating(&self, rating_id: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        self.store.delete_rating(rating_id).await
    }

    pub async fn stats(&self) -> Result<PreferenceStats> {
        self.store.load_stats().await
    }
}
