//! Pre-generated dashboard snapshot, embedded at compile time.
//!
//! The export pipeline that maintains the review table also emits a
//! `frontend_data.json` with the exact `DashboardData` shape. Builds
//! with the `bundled-data` feature serve it instead of querying the
//! store, which keeps demo and offline builds working with no
//! credentials.

use super::error::DataError;
use super::model::DashboardData;

const FRONTEND_DATA: &str = include_str!("../../assets/data/frontend_data.json");

/// Decode the embedded snapshot.
pub fn bundled() -> Result<DashboardData, DataError> {
    serde_json::from_str(FRONTEND_DATA).map_err(|err| DataError::Snapshot(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_snapshot_decodes() {
        let data = bundled().expect("embedded frontend_data.json must parse");
        assert!(!data.ratings_by_period.is_empty());
        assert!(!data.multi_platform_timeline.is_empty());
        assert!(!data.review_volume_by_platform.is_empty());
    }

    #[test]
    fn bundled_snapshot_covers_all_three_phases() {
        let data = bundled().unwrap();
        let labels: Vec<&str> = data
            .ratings_by_period
            .iter()
            .map(|s| s.period.as_str())
            .collect();
        assert_eq!(
            labels,
            vec!["Pre-Construction", "During Construction", "Post-Construction"]
        );
        assert_eq!(data.total_reviews(), 620);
    }

    #[test]
    fn bundled_timeline_is_chronological() {
        let data = bundled().unwrap();
        let quarters: Vec<&str> = data
            .multi_platform_timeline
            .iter()
            .map(|p| p.quarter.as_str())
            .collect();
        let mut sorted = quarters.clone();
        sorted.sort();
        assert_eq!(quarters, sorted);
    }
}
