//! The aggregation query layer: grouped averages, the quarterly
//! timeline, and per-platform volumes, computed fresh on every fetch.
//!
//! Only TripAdvisor rows exist in the store today. The Google and Yelp
//! series are placeholders derived from the real series via
//! `SynthesisPolicy` until those datasets are collected.

use std::collections::BTreeMap;

use futures::future::try_join_all;
use time::macros::format_description;
use time::Date;

use super::error::DataError;
use super::model::{DashboardData, Period, PeriodStat, Review, TimelinePoint, VolumeByPlatform};
use super::store::ReviewStore;

/// Deterministic placeholder offsets for the platforms without real
/// data. The constants are arbitrary "visually plausible" values carried
/// over from the published dashboard; swap or remove this policy once
/// real Google/Yelp rows land.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SynthesisPolicy {
    pub google_rating_offset: f64,
    pub yelp_rating_offset: f64,
    pub google_volume_factor: f64,
    pub yelp_volume_factor: f64,
}

impl Default for SynthesisPolicy {
    fn default() -> Self {
        Self {
            google_rating_offset: 0.3,
            yelp_rating_offset: -0.2,
            google_volume_factor: 1.2,
            yelp_volume_factor: 0.8,
        }
    }
}

impl SynthesisPolicy {
    fn synth_point(&self, quarter: String, real_avg: f64) -> TimelinePoint {
        TimelinePoint {
            quarter,
            tripadvisor_rating: round2(real_avg),
            google_rating: round2(real_avg + self.google_rating_offset),
            yelp_rating: round2(real_avg + self.yelp_rating_offset),
        }
    }

    fn synth_volume(&self, period: Period, real_count: u64) -> VolumeByPlatform {
        VolumeByPlatform {
            period: period.short_label().to_string(),
            tripadvisor: real_count,
            google: scale_count(real_count, self.google_volume_factor),
            yelp: scale_count(real_count, self.yelp_volume_factor),
        }
    }
}

/// Read-only query service over a `ReviewStore`.
///
/// Constructed explicitly and passed down (no process-wide singleton),
/// so tests can hand it an in-memory fake.
#[derive(Debug, Clone)]
pub struct ReviewService<S> {
    store: S,
    policy: SynthesisPolicy,
}

impl<S: ReviewStore> ReviewService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            policy: SynthesisPolicy::default(),
        }
    }

    pub fn with_policy(store: S, policy: SynthesisPolicy) -> Self {
        Self { store, policy }
    }

    /// Average rating and review count per construction phase.
    ///
    /// The three per-period fetches are independent and launched
    /// together; any failure propagates unchanged.
    pub async fn ratings_by_period(&self) -> Result<Vec<PeriodStat>, DataError> {
        let fetches = Period::CORE.map(|period| async move {
            let ratings = self.store.ratings(period).await?;
            Ok::<_, DataError>(PeriodStat {
                period: period.label().to_string(),
                avg_rating: round2(mean(&ratings)),
                reviews: ratings.len() as u64,
            })
        });
        try_join_all(fetches).await
    }

    /// Quarterly rating timeline with the two synthetic series attached.
    ///
    /// Rows tagged `missing_date` never reach this method (the store
    /// filters them); rows whose date is absent or unparseable are
    /// skipped here without error.
    pub async fn rating_timeline(&self) -> Result<Vec<TimelinePoint>, DataError> {
        let rows = self.store.dated_ratings().await?;

        let mut buckets: BTreeMap<(i32, u8), Vec<f64>> = BTreeMap::new();
        for row in &rows {
            // The store query filters the missing_date bucket; skip any
            // row that slips through.
            if row.period == Period::MissingDate {
                continue;
            }
            let Some(date) = row
                .date_of_experience
                .as_deref()
                .and_then(parse_experience_date)
            else {
                continue;
            };
            buckets
                .entry((date.year(), quarter_of(date)))
                .or_default()
                .push(row.rating);
        }

        Ok(buckets
            .into_iter()
            .map(|((year, quarter), ratings)| {
                self.policy
                    .synth_point(format!("{year}Q{quarter}"), mean(&ratings))
            })
            .collect())
    }

    /// Exact per-phase review counts plus the synthetic platform counts.
    pub async fn review_volume_by_platform(&self) -> Result<Vec<VolumeByPlatform>, DataError> {
        let fetches = Period::CORE.map(|period| async move {
            let count = self.store.review_count(Some(period)).await?;
            Ok::<_, DataError>(self.policy.synth_volume(period, count))
        });
        try_join_all(fetches).await
    }

    /// Newest reviews for display, most recent experience first.
    pub async fn recent_reviews(&self, limit: u32) -> Result<Vec<Review>, DataError> {
        self.store.recent_reviews(limit).await
    }

    /// Total row count across the whole table (all periods, borders and
    /// undated rows included).
    pub async fn total_review_count(&self) -> Result<u64, DataError> {
        self.store.review_count(None).await
    }

    /// Everything the dashboard renders, fetched concurrently.
    ///
    /// Fails atomically: if any one aggregation fails, no partial
    /// `DashboardData` is produced.
    pub async fn all_dashboard_data(&self) -> Result<DashboardData, DataError> {
        let (ratings_by_period, multi_platform_timeline, review_volume_by_platform) = futures::try_join!(
            self.ratings_by_period(),
            self.rating_timeline(),
            self.review_volume_by_platform(),
        )?;

        Ok(DashboardData {
            ratings_by_period,
            multi_platform_timeline,
            review_volume_by_platform,
        })
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        // 0/0 would be NaN; an empty phase renders as 0.00 with 0 reviews.
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn scale_count(count: u64, factor: f64) -> u64 {
    (count as f64 * factor).round() as u64
}

/// Parse the leading `YYYY-MM-DD` of a stored experience date. Longer
/// timestamp forms are tolerated by ignoring everything past the date.
fn parse_experience_date(raw: &str) -> Option<Date> {
    let head = raw.get(..10)?;
    Date::parse(head, format_description!("[year]-[month]-[day]")).ok()
}

fn quarter_of(date: Date) -> u8 {
    (date.month() as u8 - 1) / 3 + 1
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use futures::executor::block_on;

    use super::*;
    use crate::data::model::DatedRating;

    #[derive(Default)]
    struct FakeStore {
        pre: Vec<f64>,
        during: Vec<f64>,
        post: Vec<f64>,
        dated: Vec<(Option<&'static str>, f64)>,
        undated_extra: Vec<DatedRating>,
        counts: [u64; 3],
        fail_counts: bool,
    }

    #[async_trait(?Send)]
    impl ReviewStore for FakeStore {
        async fn ratings(&self, period: Period) -> Result<Vec<f64>, DataError> {
            Ok(match period {
                Period::PreConstruction => self.pre.clone(),
                Period::DuringConstruction => self.during.clone(),
                Period::PostConstruction => self.post.clone(),
                _ => Vec::new(),
            })
        }

        async fn dated_ratings(&self) -> Result<Vec<DatedRating>, DataError> {
            let mut rows: Vec<DatedRating> = self
                .dated
                .iter()
                .map(|(date, rating)| DatedRating {
                    date_of_experience: date.map(str::to_string),
                    rating: *rating,
                    period: Period::PreConstruction,
                })
                .collect();
            rows.extend(self.undated_extra.iter().cloned());
            Ok(rows)
        }

        async fn review_count(&self, period: Option<Period>) -> Result<u64, DataError> {
            if self.fail_counts {
                return Err(DataError::Status {
                    status: 500,
                    message: "boom".into(),
                });
            }
            Ok(match period {
                Some(Period::PreConstruction) => self.counts[0],
                Some(Period::DuringConstruction) => self.counts[1],
                Some(Period::PostConstruction) => self.counts[2],
                Some(_) => 0,
                None => self.counts.iter().sum::<u64>() + 3,
            })
        }

        async fn recent_reviews(&self, limit: u32) -> Result<Vec<Review>, DataError> {
            let review = |id: i64, date: &str| Review {
                id,
                review_id: format!("r-{id}"),
                user_name: Some("visitor".into()),
                rating: 4.0,
                title: None,
                text: None,
                date_of_experience: Some(date.into()),
                date_written: None,
                helpful_votes: 0,
                trip_type: None,
                period: Period::PostConstruction,
            };
            let all = vec![review(2, "2018-09-01"), review(1, "2018-08-15")];
            Ok(all.into_iter().take(limit as usize).collect())
        }
    }

    #[test]
    fn period_averages_round_to_two_decimals() {
        let service = ReviewService::new(FakeStore {
            pre: vec![3.0, 4.0, 4.0],
            during: vec![2.0, 5.0],
            post: vec![4.0],
            ..Default::default()
        });

        let stats = block_on(service.ratings_by_period()).unwrap();
        assert_eq!(stats.len(), 3);
        assert_eq!(stats[0].period, "Pre-Construction");
        assert_eq!(stats[0].avg_rating, 3.67);
        assert_eq!(stats[0].reviews, 3);
        assert_eq!(stats[1].avg_rating, 3.5);
        assert_eq!(stats[2].avg_rating, 4.0);
    }

    #[test]
    fn empty_phase_yields_zero_not_nan() {
        let service = ReviewService::new(FakeStore::default());
        let stats = block_on(service.ratings_by_period()).unwrap();
        assert_eq!(stats[0].avg_rating, 0.0);
        assert_eq!(stats[0].reviews, 0);
    }

    #[test]
    fn timeline_buckets_by_calendar_quarter() {
        let service = ReviewService::new(FakeStore {
            dated: vec![
                (Some("2017-03-31"), 3.0),
                (Some("2017-01-15"), 4.0),
                (Some("2017-04-01"), 5.0),
            ],
            ..Default::default()
        });

        let points = block_on(service.rating_timeline()).unwrap();
        assert_eq!(points.len(), 2);
        // March lands in Q1, April in Q2 of the same year.
        assert_eq!(points[0].quarter, "2017Q1");
        assert_eq!(points[0].tripadvisor_rating, 3.5);
        assert_eq!(points[1].quarter, "2017Q2");
        assert_eq!(points[1].tripadvisor_rating, 5.0);
    }

    #[test]
    fn timeline_applies_synthetic_offsets() {
        let service = ReviewService::new(FakeStore {
            dated: vec![(Some("2016-07-04"), 3.5)],
            ..Default::default()
        });

        let points = block_on(service.rating_timeline()).unwrap();
        assert_eq!(points[0].google_rating, 3.8);
        assert_eq!(points[0].yelp_rating, 3.3);
    }

    #[test]
    fn timeline_skips_unparseable_dates_silently() {
        let service = ReviewService::new(FakeStore {
            dated: vec![
                (Some("2016-02-10"), 2.0),
                (Some("not-a-date"), 1.0),
                (None, 1.0),
                (Some("2016-13-40"), 1.0),
            ],
            ..Default::default()
        });

        let points = block_on(service.rating_timeline()).unwrap();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].quarter, "2016Q1");
        assert_eq!(points[0].tripadvisor_rating, 2.0);
    }

    #[test]
    fn timeline_drops_missing_date_rows_even_with_a_date() {
        let service = ReviewService::new(FakeStore {
            dated: vec![(Some("2017-05-02"), 4.0)],
            undated_extra: vec![DatedRating {
                date_of_experience: Some("2017-05-09".into()),
                rating: 1.0,
                period: Period::MissingDate,
            }],
            ..Default::default()
        });

        let points = block_on(service.rating_timeline()).unwrap();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].tripadvisor_rating, 4.0);
    }

    #[test]
    fn timeline_orders_quarters_chronologically() {
        let service = ReviewService::new(FakeStore {
            dated: vec![
                (Some("2018-11-01"), 4.0),
                (Some("2011-05-20"), 3.0),
                (Some("2016-08-09"), 2.0),
            ],
            ..Default::default()
        });

        let quarters: Vec<String> = block_on(service.rating_timeline())
            .unwrap()
            .into_iter()
            .map(|p| p.quarter)
            .collect();
        assert_eq!(quarters, vec!["2011Q2", "2016Q3", "2018Q4"]);
    }

    #[test]
    fn volumes_scale_and_round_to_nearest() {
        let service = ReviewService::new(FakeStore {
            counts: [298, 142, 5],
            ..Default::default()
        });

        let volumes = block_on(service.review_volume_by_platform()).unwrap();
        assert_eq!(volumes[0].period, "Pre");
        assert_eq!(volumes[0].tripadvisor, 298);
        assert_eq!(volumes[0].google, 358); // 357.6 rounds up
        assert_eq!(volumes[0].yelp, 238); // 238.4 rounds down
        assert_eq!(volumes[2].google, 6);
        assert_eq!(volumes[2].yelp, 4);
    }

    #[test]
    fn dashboard_fetch_fails_atomically() {
        let service = ReviewService::new(FakeStore {
            pre: vec![4.0],
            during: vec![4.0],
            post: vec![4.0],
            dated: vec![(Some("2017-06-01"), 4.0)],
            fail_counts: true,
            ..Default::default()
        });

        let result = block_on(service.all_dashboard_data());
        assert!(matches!(
            result,
            Err(DataError::Status { status: 500, .. })
        ));
    }

    #[test]
    fn recent_reviews_respects_the_limit() {
        let service = ReviewService::new(FakeStore::default());
        let reviews = block_on(service.recent_reviews(1)).unwrap();
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].id, 2);
    }

    #[test]
    fn total_count_spans_all_periods() {
        let service = ReviewService::new(FakeStore {
            counts: [298, 142, 180],
            ..Default::default()
        });
        // Border and undated rows push the table total past the three
        // core phases.
        assert_eq!(block_on(service.total_review_count()).unwrap(), 623);
    }

    #[test]
    fn default_policy_matches_published_placeholders() {
        let policy = SynthesisPolicy::default();
        assert_eq!(policy.google_rating_offset, 0.3);
        assert_eq!(policy.yelp_rating_offset, -0.2);
        assert_eq!(policy.google_volume_factor, 1.2);
        assert_eq!(policy.yelp_volume_factor, 0.8);
    }
}
