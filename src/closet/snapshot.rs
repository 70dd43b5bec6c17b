// src/closet/snapshot.rs
//! Single-pass aggregation of the item collection. Derived fresh for each
//! gap-analysis request, never persisted.

use super::ClothingItem;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, Serialize)]
pub struct ClosetSnapshot {
    pub total_items: usize,
    pub category_counts: HashMap<String, usize>,
    /// Keyed by lowercased color value.
    pub color_distribution: HashMap<String, usize>,
    pub occasion_density: HashMap<String, usize>,
    pub season_distribution: HashMap<String, usize>,
}

/// Aggregate the collection into count maps. O(n) in items.
pub fn build_snapshot(items: &[ClothingItem]) -> ClosetSnapshot {
    let mut snapshot = ClosetSnapshot {
        total_items: items.len(),
        ..Default::default()
    };

    for item in items {
        *snapshot
            .category_counts
            .entry(item.category.clone())
            .or_default() += 1;

        for color in &item.colors {
            *snapshot
                .color_distribution
                .entry(color.to_lowercase())
                .or_default() += 1;
        }

        for occasion in &item.occasions {
            *snapshot
                .occasion_density
                .entry(occasion.clone())
                .or_default() += 1;
        }

        for season in &item.seasons {
            *snapshot
                .season_distribution
                .entry(season.clone())
                .or_default() += 1;
        }
    }

    snapshot
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(category: &str, colors: &[&str], occasions: &[&str], seasons: &[&str]) -> ClothingItem {
        let mut it = ClothingItem::new(category, colors.iter().map(|c| c.to_string()).collect());
        it.occasions = occasions.iter().map(|o| o.to_string()).collect();
        it.seasons = seasons.iter().map(|s| s.to_string()).collect();
        it
    }

    #[test]
    fn test_empty_collection() {
        let snapshot = build_snapshot(&[]);
        assert_eq!(snapshot.total_items, 0);
        assert!(snapshot.category_counts.is_empty());
        assert!(snapshot.color_distribution.is_empty());
        assert!(snapshot.occasion_density.is_empty());
        assert!(snapshot.season_distribution.is_empty());
    }

    #[test]
    fn test_category_counts_sum_to_total() {
        let items = vec![
            item("shirt", &["#FFFFFF"], &["casual"], &["summer"]),
            item("shirt", &["#000000"], &["business"], &["all-season"]),
            item("pants", &["#000080"], &["casual", "business"], &["winter"]),
        ];
        let snapshot = build_snapshot(&items);
        assert_eq!(snapshot.total_items, 3);
        assert_eq!(snapshot.category_counts.values().sum::<usize>(), 3);
        assert_eq!(snapshot.category_counts["shirt"], 2);
        assert_eq!(snapshot.occasion_density["casual"], 2);
    }

    #[test]
    fn test_colors_are_case_normalized() {
        let items = vec![
            item("shirt", &["#FFFFFF"], &[], &[]),
            item("dress", &["#ffffff"], &[], &[]),
        ];
        let snapshot = build_snapshot(&items);
        assert_eq!(snapshot.color_distribution["#ffffff"], 2);
    }
}
