//! Configuration model loaded from external sources.

use std::time::Duration;

use config::Config;
use serde::Deserialize;
use validator::Validate;

use crate::errors::SmartFetchResult;

pub const DEFAULT_DEBOUNCE_MS: u64 = 400;
pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const ENV_PREFIX: &str = "SMART_FETCH";

#[derive(Clone, Debug, Deserialize, Validate, PartialEq)]
/// Tuning shared by every coordinator built from it.
pub struct CoordinatorConfig {
    /// Settle delay for search text and filter changes.
    #[serde(default = "default_debounce_ms")]
    #[validate(range(max = 10000))]
    pub debounce_ms: u64,
    /// Page size used when static options don't pin a `limit`.
    #[serde(default = "default_page_size")]
    #[validate(range(min = 1, max = 1000))]
    pub default_page_size: usize,
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl CoordinatorConfig {
    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Loads `{base}.yaml`, then the optional `{base}-{profile}.yaml`, then
    /// `SMART_FETCH_*` environment variables, and validates the result.
    pub fn load(base: &str, profile: Option<&str>) -> SmartFetchResult<Self> {
        let mut builder = Config::builder().add_source(config::File::with_name(base));

        if let Some(profile) = profile {
            builder = builder
                .add_source(config::File::with_name(&format!("{base}-{profile}")).required(false));
        }

        let settings = builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .map_err(|err| {
                log::error!("Error loading settings: {err}");
                err
            })?;

        let loaded = settings.try_deserialize::<CoordinatorConfig>()?;
        loaded.validate()?;
        Ok(loaded)
    }
}
