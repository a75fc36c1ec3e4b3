use config::{Config, Environment, File, FileFormat};
use error_stack::{Report, ResultExt};
use serde::Deserialize;
use validator::Validate;

use crate::error::AdapterError;

/// Default endpoint the bidding server answers on.
pub const DEFAULT_ENDPOINT: &str = "https://prebid.bksn.se:445/prebid";

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BidderSettings {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Endpoint URL bid payloads are POSTed to by the host transport.
    #[serde(default = "default_endpoint")]
    #[validate(url)]
    pub endpoint: String,
    /// Verbose diagnostics for every adapter call.
    #[serde(default)]
    pub debug: bool,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PublisherSettings {
    /// Page host identity reported to the endpoint as `pub_id`.
    #[validate(length(min = 1))]
    pub domain: String,
    /// Page URL reported to the endpoint as `sys_href`.
    #[validate(url)]
    pub page_url: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct Settings {
    #[validate(nested)]
    pub bidder: BidderSettings,
    #[validate(nested)]
    pub publisher: PublisherSettings,
}

impl Settings {
    /// Load the embedded default configuration plus environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an [`AdapterError`] when the embedded TOML cannot be parsed
    /// or fails validation.
    pub fn new() -> Result<Self, Report<AdapterError>> {
        Self::from_toml(include_str!("../../../bucksense.toml"))
    }

    /// Build settings from a TOML document, with `BUCKSENSE__`-prefixed
    /// environment variables layered on top.
    ///
    /// # Errors
    ///
    /// Returns an [`AdapterError`] when a source cannot be read, a required
    /// field is missing, or a field fails validation.
    pub fn from_toml(toml_str: &str) -> Result<Self, Report<AdapterError>> {
        let environment = Environment::default().prefix("BUCKSENSE").separator("__");

        let toml = File::from_str(toml_str, FileFormat::Toml);
        let config = Config::builder()
            .add_source(toml)
            .add_source(environment)
            .build()
            .change_context(AdapterError::configuration("failed to read sources"))?;

        let settings: Self = config
            .try_deserialize()
            .change_context(AdapterError::configuration("failed to deserialize"))?;

        settings.validate().map_err(|err| {
            Report::new(AdapterError::configuration(format!("invalid settings: {err}")))
        })?;

        Ok(settings)
    }
}

fn default_enabled() -> bool {
    true
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}
