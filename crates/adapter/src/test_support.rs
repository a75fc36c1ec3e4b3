#[cfg(test)]
pub mod tests {
    use crate::settings::Settings;
    use crate::types::{BidParams, BidRequest, PlacementId};

    pub fn test_settings_str() -> String {
        r#"
            [bidder]
            endpoint = "https://prebid.bksn.se:445/prebid"
            debug = false

            [publisher]
            domain = "test-publisher.com"
            page_url = "https://test-publisher.com/news/article.html"
            "#
        .to_string()
    }

    pub fn create_test_settings() -> Settings {
        let toml_str = test_settings_str();
        Settings::from_toml(&toml_str).expect("Invalid config")
    }

    pub fn test_bid(bid_id: &str, placement_id: PlacementId) -> BidRequest {
        BidRequest {
            bid_id: Some(bid_id.to_string()),
            params: Some(BidParams {
                placement_id: Some(placement_id),
                ..BidParams::default()
            }),
            ad_unit_code: None,
        }
    }
}
