//! Bidder adapter registry.
//!
//! Adapters are discovered from settings through a static table of builder
//! functions, so the host framework never names a concrete adapter type.

use crate::adapter::BidderAdapter;
use crate::settings::Settings;

/// Type alias for adapter builder functions.
type AdapterBuilder = fn(&Settings) -> Option<Box<dyn BidderAdapter>>;

/// Returns the list of all available adapter builder functions.
///
/// Each builder checks the settings for its bidder's configuration and
/// returns the adapter when it is enabled.
fn adapter_builders() -> &'static [AdapterBuilder] {
    &[crate::bucksense::register]
}

/// Build every adapter enabled by the provided settings.
#[must_use]
pub fn enabled_adapters(settings: &Settings) -> Vec<Box<dyn BidderAdapter>> {
    let mut adapters = Vec::new();
    for builder in adapter_builders() {
        if let Some(adapter) = builder(settings) {
            log::info!("Registered bidder adapter: {}", adapter.bidder_code());
            adapters.push(adapter);
        }
    }
    adapters
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::tests::create_test_settings;

    #[test]
    fn registry_yields_bucksense_adapter() {
        let settings = create_test_settings();
        let adapters = enabled_adapters(&settings);
        assert_eq!(adapters.len(), 1);
        assert_eq!(adapters[0].bidder_code(), "bucksense");
    }

    #[test]
    fn disabled_bidder_is_not_registered() {
        let mut settings = create_test_settings();
        settings.bidder.enabled = false;
        assert!(enabled_adapters(&settings).is_empty());
    }
}
