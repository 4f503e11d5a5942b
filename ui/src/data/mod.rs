mod error;
pub use error::DataError;

pub mod model;
pub use model::{DashboardData, Period, PeriodStat, Review, TimelinePoint, VolumeByPlatform};

mod store;
pub use store::ReviewStore;

mod supabase;
pub use supabase::SupabaseStore;

mod service;
pub use service::{ReviewService, SynthesisPolicy};

pub mod snapshot;

use crate::core::config::{ConfigError, SupabaseConfig};
use crate::core::platform;

/// Where the dashboard gets its numbers: the live store, or the
/// embedded snapshot when built with `bundled-data`.
#[derive(Clone)]
pub enum DashboardSource {
    Live(ReviewService<SupabaseStore>),
    Bundled,
}

impl DashboardSource {
    /// Resolve the source once at startup.
    ///
    /// Live builds require both connection settings; a missing one is
    /// the fatal configuration error the launchers surface instead of
    /// rendering the app.
    pub fn initialize() -> Result<Self, ConfigError> {
        let platform = platform::platform_string();
        if cfg!(feature = "bundled-data") {
            tracing::info!(%platform, "dashboard data source: bundled snapshot");
            return Ok(Self::Bundled);
        }
        let config = SupabaseConfig::from_env()?;
        tracing::info!(%platform, url = config.url(), "dashboard data source: live store");
        Ok(Self::Live(ReviewService::new(SupabaseStore::new(config))))
    }

    async fn fetch(&self) -> Result<DashboardData, DataError> {
        match self {
            DashboardSource::Live(service) => service.all_dashboard_data().await,
            DashboardSource::Bundled => snapshot::bundled(),
        }
    }
}

/// Fetched-data-or-error holder for the dashboard view, mirroring the
/// one fetch it performs on first display. There is no refresh path.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub data: Option<DashboardData>,
    pub error: Option<String>,
}

impl DashboardState {
    pub async fn load(source: DashboardSource) -> Self {
        match source.fetch().await {
            Ok(data) => {
                tracing::info!(
                    periods = data.ratings_by_period.len(),
                    quarters = data.multi_platform_timeline.len(),
                    "dashboard data loaded"
                );
                Self {
                    data: Some(data),
                    error: None,
                }
            }
            Err(err) => {
                tracing::error!("dashboard data fetch failed: {err}");
                Self {
                    data: None,
                    error: Some(format!("Couldn't load review data: {err}")),
                }
            }
        }
    }
}
