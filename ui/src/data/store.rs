//! The swappable read seam between aggregation logic and the row store.
//!
//! The live implementation is `SupabaseStore`; tests substitute an
//! in-memory fake. Futures are `?Send` because the wasm HTTP client's
//! are, and everything here runs on the UI task anyway.

use async_trait::async_trait;

use super::error::DataError;
use super::model::{DatedRating, Period, Review};

#[async_trait(?Send)]
pub trait ReviewStore {
    /// All rating values for one period, unordered.
    async fn ratings(&self, period: Period) -> Result<Vec<f64>, DataError>;

    /// `(date_of_experience, rating, period)` for every row except the
    /// `missing_date` bucket, ordered by experience date ascending.
    async fn dated_ratings(&self) -> Result<Vec<DatedRating>, DataError>;

    /// Exact row count, optionally restricted to one period
    /// (count-only query, no rows transferred).
    async fn review_count(&self, period: Option<Period>) -> Result<u64, DataError>;

    /// Most recent full rows, newest experience date first.
    async fn recent_reviews(&self, limit: u32) -> Result<Vec<Review>, DataError>;
}
