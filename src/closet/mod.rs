// src/closet/mod.rs
//! The clothing item collection: the record type, its SQLite store, and the
//! ephemeral snapshot aggregation used by gap analysis.

pub mod snapshot;
pub mod store;

pub use snapshot::{ClosetSnapshot, build_snapshot};
pub use store::ClosetStore;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One item in the closet. Created and edited by the UI layer; this engine
/// reads it for palette matching, preference learning, and snapshots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClothingItem {
    pub id: Option<i64>,
    pub category: String,
    /// Hex-like color strings, most prominent first.
    pub colors: Vec<String>,
    pub occasions: Vec<String>,
    pub seasons: Vec<String>,
    pub brand: Option<String>,
    pub size: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ClothingItem {
    pub fn new(category: impl Into<String>, colors: Vec<String>) -> Self {
        Self {
            id: None,
            category: category.into(),
            colors,
            occasions: Vec::new(),
            seasons: Vec::new(),
            brand: None,
            size: None,
            created_at: Utc::now(),
        }
    }
}
