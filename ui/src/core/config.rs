//! Connection settings for the managed review store.
//!
//! The dashboard talks to a Supabase project with row-level security
//! limiting the anon key to public reads. Both settings are required:
//! without them the app renders a configuration-error screen and nothing
//! else initializes.
//!
//! Sourcing differs per target:
//! - wasm: baked in at compile time via `option_env!` (there is no
//!   process environment in the browser).
//! - native: the process environment wins, falling back to any
//!   compile-time value. The desktop launcher loads `.env` first.

use thiserror::Error;

pub const URL_VAR: &str = "PARKPULSE_SUPABASE_URL";
pub const KEY_VAR: &str = "PARKPULSE_SUPABASE_KEY";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing {0}: set it in the environment (or .env) before building")]
    MissingSetting(&'static str),
}

/// Resolved connection settings for the Supabase REST endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupabaseConfig {
    url: String,
    anon_key: String,
}

impl SupabaseConfig {
    /// Build from explicit values. Trailing slashes on the URL are
    /// trimmed so endpoint paths can be joined with a single `/`.
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            url: url.trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
        }
    }

    /// Resolve from the environment. Missing either setting is the fatal
    /// startup error from the launcher's point of view.
    pub fn from_env() -> Result<Self, ConfigError> {
        let url = setting(URL_VAR, option_env!("PARKPULSE_SUPABASE_URL"))
            .ok_or(ConfigError::MissingSetting(URL_VAR))?;
        let anon_key = setting(KEY_VAR, option_env!("PARKPULSE_SUPABASE_KEY"))
            .ok_or(ConfigError::MissingSetting(KEY_VAR))?;
        Ok(Self::new(url, anon_key))
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn anon_key(&self) -> &str {
        &self.anon_key
    }

    /// Base of the PostgREST surface, e.g. `https://xyz.supabase.co/rest/v1`.
    pub fn rest_base(&self) -> String {
        format!("{}/rest/v1", self.url)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn setting(var: &str, baked: Option<&'static str>) -> Option<String> {
    std::env::var(var)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .or_else(|| baked.map(str::to_string))
}

#[cfg(target_arch = "wasm32")]
fn setting(_var: &str, baked: Option<&'static str>) -> Option<String> {
    baked.map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_trimmed() {
        let cfg = SupabaseConfig::new("https://demo.supabase.co/", "anon");
        assert_eq!(cfg.url(), "https://demo.supabase.co");
        assert_eq!(cfg.rest_base(), "https://demo.supabase.co/rest/v1");
    }

    #[test]
    fn missing_setting_names_the_variable() {
        let err = ConfigError::MissingSetting(URL_VAR);
        assert!(err.to_string().contains("PARKPULSE_SUPABASE_URL"));
    }
}
