//! PostgREST-backed `ReviewStore` implementation.
//!
//! Four narrow read endpoints cover the whole dashboard:
//! - `GET  /reviews?select=rating&period=eq.{p}`
//! - `GET  /reviews?select=date_of_experience,rating,period&period=neq.missing_date&order=date_of_experience.asc`
//! - `HEAD /reviews?select=id[&period=eq.{p}]` with `Prefer: count=exact`
//! - `GET  /reviews?select=*&order=date_of_experience.desc&limit={n}`
//!
//! The anon key rides on every request (`apikey` + bearer). Row-level
//! security on the project keeps it read-only.

use async_trait::async_trait;
use serde::Deserialize;

use crate::core::config::SupabaseConfig;

use super::error::DataError;
use super::model::{DatedRating, Period, Review};
use super::store::ReviewStore;

const REVIEWS: &str = "reviews";

#[derive(Debug, Clone)]
pub struct SupabaseStore {
    client: reqwest::Client,
    config: SupabaseConfig,
}

#[derive(Debug, Deserialize)]
struct RatingRow {
    rating: f64,
}

impl SupabaseStore {
    pub fn new(config: SupabaseConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn table_url(&self, query: &str) -> String {
        format!("{}/{}?{}", self.config.rest_base(), REVIEWS, query)
    }

    fn authed(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        req.header("apikey", self.config.anon_key()).header(
            "Authorization",
            format!("Bearer {}", self.config.anon_key()),
        )
    }

    async fn get_rows<T: serde::de::DeserializeOwned>(
        &self,
        query: &str,
    ) -> Result<Vec<T>, DataError> {
        let url = self.table_url(query);
        let response = self.authed(self.client.get(&url)).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::error!(%url, status = status.as_u16(), "review query failed");
            return Err(DataError::Status {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<Vec<T>>()
            .await
            .map_err(|err| DataError::Decode(err.to_string()))
    }
}

#[async_trait(?Send)]
impl ReviewStore for SupabaseStore {
    async fn ratings(&self, period: Period) -> Result<Vec<f64>, DataError> {
        let query = format!("select=rating&period=eq.{}", period.as_str());
        let rows: Vec<RatingRow> = self.get_rows(&query).await?;
        Ok(rows.into_iter().map(|row| row.rating).collect())
    }

    async fn dated_ratings(&self) -> Result<Vec<DatedRating>, DataError> {
        let query = format!(
            "select=date_of_experience,rating,period&period=neq.{}&order=date_of_experience.asc",
            Period::MissingDate.as_str()
        );
        self.get_rows(&query).await
    }

    async fn review_count(&self, period: Option<Period>) -> Result<u64, DataError> {
        let query = match period {
            Some(period) => format!("select=id&period=eq.{}", period.as_str()),
            None => "select=id".to_string(),
        };
        let url = self.table_url(&query);
        let response = self
            .authed(self.client.head(&url))
            .header("Prefer", "count=exact")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(%url, status = status.as_u16(), "review count failed");
            return Err(DataError::Status {
                status: status.as_u16(),
                message: String::new(),
            });
        }

        let header = response
            .headers()
            .get("content-range")
            .and_then(|value| value.to_str().ok())
            .ok_or(DataError::MissingCount)?;

        parse_content_range_total(header).ok_or(DataError::MissingCount)
    }

    async fn recent_reviews(&self, limit: u32) -> Result<Vec<Review>, DataError> {
        let query = format!("select=*&order=date_of_experience.desc&limit={limit}");
        self.get_rows(&query).await
    }
}

/// Total from a PostgREST `Content-Range` header.
///
/// With `count=exact` the header looks like `0-24/412` (or `*/412` for
/// HEAD requests); the figure after the slash is the exact row count.
fn parse_content_range_total(header: &str) -> Option<u64> {
    let (_, total) = header.trim().rsplit_once('/')?;
    total.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_range_total_parses_both_forms() {
        assert_eq!(parse_content_range_total("*/412"), Some(412));
        assert_eq!(parse_content_range_total("0-24/412"), Some(412));
        assert_eq!(parse_content_range_total("*/0"), Some(0));
    }

    #[test]
    fn content_range_total_rejects_garbage() {
        assert_eq!(parse_content_range_total("*/"), None);
        assert_eq!(parse_content_range_total("0-24/many"), None);
        assert_eq!(parse_content_range_total("412"), None);
    }

    #[test]
    fn table_urls_carry_the_rest_base() {
        let store = SupabaseStore::new(SupabaseConfig::new("https://demo.supabase.co/", "anon"));
        assert_eq!(
            store.table_url("select=rating&period=eq.pre_construction"),
            "https://demo.supabase.co/rest/v1/reviews?select=rating&period=eq.pre_construction"
        );
    }
}
