//! Row and summary types for the LOVE Park review dataset.
//!
//! Rows live in a managed Supabase table with public read-only access;
//! nothing in the dashboard mutates them. The derived summary types
//! mirror the pre-generated `frontend_data.json` shape (camelCase on
//! the wire) so the live query path and the bundled snapshot are
//! interchangeable.

use serde::{Deserialize, Serialize};

/// Construction-phase classification attached to every review row.
///
/// The two border markers tag reviews written in the hand-off months at
/// either end of the construction window; they are excluded from the
/// per-period aggregates but kept in the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    PreConstruction,
    DuringConstruction,
    PostConstruction,
    BorderFeb2016,
    BorderMay2018,
    MissingDate,
}

impl Period {
    /// The three phases the grouped aggregates are computed over.
    pub const CORE: [Period; 3] = [
        Period::PreConstruction,
        Period::DuringConstruction,
        Period::PostConstruction,
    ];

    /// Column value in the reviews table.
    pub fn as_str(self) -> &'static str {
        match self {
            Period::PreConstruction => "pre_construction",
            Period::DuringConstruction => "during_construction",
            Period::PostConstruction => "post_construction",
            Period::BorderFeb2016 => "border_feb2016",
            Period::BorderMay2018 => "border_may2018",
            Period::MissingDate => "missing_date",
        }
    }

    /// Display label used by the ratings chart and stat tiles.
    pub fn label(self) -> &'static str {
        match self {
            Period::PreConstruction => "Pre-Construction",
            Period::DuringConstruction => "During Construction",
            Period::PostConstruction => "Post-Construction",
            Period::BorderFeb2016 => "Border (Feb 2016)",
            Period::BorderMay2018 => "Border (May 2018)",
            Period::MissingDate => "Missing Date",
        }
    }

    /// Compact label used by the volume chart's x-axis.
    pub fn short_label(self) -> &'static str {
        match self {
            Period::PreConstruction => "Pre",
            Period::DuringConstruction => "During",
            Period::PostConstruction => "Post",
            Period::BorderFeb2016 => "Feb '16",
            Period::BorderMay2018 => "May '18",
            Period::MissingDate => "Undated",
        }
    }
}

/// One review row as stored. Write access is external to this system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub review_id: String,
    #[serde(default)]
    pub user_name: Option<String>,
    pub rating: f64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub date_of_experience: Option<String>,
    #[serde(default)]
    pub date_written: Option<String>,
    #[serde(default)]
    pub helpful_votes: u32,
    #[serde(default)]
    pub trip_type: Option<String>,
    pub period: Period,
}

/// Slim projection used by the timeline query.
#[derive(Debug, Clone, Deserialize)]
pub struct DatedRating {
    #[serde(default)]
    pub date_of_experience: Option<String>,
    pub rating: f64,
    pub period: Period,
}

/// Average rating and review count for one construction phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodStat {
    pub period: String,
    pub avg_rating: f64,
    pub reviews: u64,
}

/// One quarterly point on the multi-platform rating timeline.
///
/// Only the TripAdvisor series is backed by real rows; the other two
/// are synthesized offsets (see `SynthesisPolicy`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelinePoint {
    /// Year-quarter key, e.g. `2017Q3`.
    pub quarter: String,
    pub tripadvisor_rating: f64,
    pub google_rating: f64,
    pub yelp_rating: f64,
}

/// Review counts per phase, per platform (two of them synthetic).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeByPlatform {
    pub period: String,
    pub tripadvisor: u64,
    pub google: u64,
    pub yelp: u64,
}

/// Everything the dashboard needs, fetched in one pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub ratings_by_period: Vec<PeriodStat>,
    pub multi_platform_timeline: Vec<TimelinePoint>,
    pub review_volume_by_platform: Vec<VolumeByPlatform>,
}

impl DashboardData {
    /// Total review count across the three core phases (real rows only).
    pub fn total_reviews(&self) -> u64 {
        self.ratings_by_period.iter().map(|s| s.reviews).sum()
    }

    /// Stat for a given core phase, if present.
    pub fn period_stat(&self, period: Period) -> Option<&PeriodStat> {
        self.ratings_by_period
            .iter()
            .find(|s| s.period == period.label())
    }
}
