//! Core types exchanged between the host auction framework and the adapter.

use http::Method;
use serde::{Deserialize, Serialize};

/// Media type enumeration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Banner,
    Video,
    Native,
}

/// Placement identifier as configured by the publisher.
///
/// Publishers supply this either as a number or as a numeric string; the
/// wire format preserves whichever representation was used.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum PlacementId {
    Number(i64),
    Text(String),
}

impl PlacementId {
    /// Returns the numeric value when the identifier is numeric-parseable.
    ///
    /// A `Text` identifier parses when its trimmed content is a finite
    /// float; the empty string does not qualify.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n as f64),
            Self::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        }
    }
}

/// Parameter bag attached to a [`BidRequest`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BidParams {
    /// Placement the bid is for. Must be numeric-parseable for the bid to
    /// pass validation.
    #[serde(default)]
    pub placement_id: Option<PlacementId>,
    /// Deterministic price override used by integrators for testing.
    #[serde(default)]
    pub testcpm: Option<f64>,
    /// Raise diagnostic verbosity for calls that see this bid.
    #[serde(default)]
    pub debug: bool,
}

/// An inbound candidate bid request.
///
/// Nothing about it is guaranteed well-formed until it has passed
/// validation; every field is optional on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BidRequest {
    #[serde(default)]
    pub bid_id: Option<String>,
    #[serde(default)]
    pub params: Option<BidParams>,
    /// Ad unit code, carried for diagnostics only.
    #[serde(default)]
    pub ad_unit_code: Option<String>,
}

/// JSON payload POSTed to the bidding endpoint by the host transport.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BidPayload {
    /// Page host identity of the publisher.
    pub pub_id: String,
    /// Placement id, copied verbatim from the bid request.
    pub pl_id: PlacementId,
    /// URI-encoded page URL.
    pub sys_href: String,
    /// Originating bid id, copied verbatim.
    pub sys_bid_id: String,
    /// Test-CPM override; omitted from the wire when the caller supplied
    /// none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_cpm: Option<f64>,
}

/// Outbound request descriptor, produced one-to-one from each valid bid
/// request.
///
/// The host transport performs the actual dispatch and must hand the same
/// descriptor back when the response is interpreted.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerRequest {
    pub method: Method,
    pub url: String,
    pub data: BidPayload,
}

/// Raw JSON body returned by the bidding endpoint. Every field is optional
/// with a defined default applied during interpretation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServerResponseBody {
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(default)]
    pub cpm: Option<f64>,
    #[serde(default)]
    pub width: Option<u64>,
    #[serde(default)]
    pub height: Option<u64>,
    #[serde(default)]
    pub ttl: Option<u64>,
    #[serde(default)]
    pub creative_id: Option<CreativeId>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub net_revenue: Option<bool>,
    #[serde(default)]
    pub ad: Option<String>,
}

impl ServerResponseBody {
    /// True when no field was set at all; such a body yields no bid.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Response envelope handed back by the transport layer.
#[derive(Debug, Clone, Default)]
pub struct ServerResponse {
    pub body: Option<ServerResponseBody>,
}

impl ServerResponse {
    /// Wrap an already-parsed body.
    #[must_use]
    pub fn with_body(body: ServerResponseBody) -> Self {
        Self { body: Some(body) }
    }

    /// Parse raw transport bytes into a response envelope.
    ///
    /// The transport owns failure handling; anything that is not a JSON
    /// object comes through as an envelope with no body.
    #[must_use]
    pub fn from_json_bytes(bytes: &[u8]) -> Self {
        match serde_json::from_slice::<ServerResponseBody>(bytes) {
            Ok(body) => Self { body: Some(body) },
            Err(err) => {
                log::debug!("Discarding unparseable response body: {err}");
                Self { body: None }
            }
        }
    }
}

/// Creative identifier; the endpoint returns either a string or a number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum CreativeId {
    Number(i64),
    Text(String),
}

impl Default for CreativeId {
    fn default() -> Self {
        Self::Number(0)
    }
}

/// Normalized bid returned to the host framework, with every default
/// applied and the request id reconciled against the originating
/// descriptor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bid {
    pub request_id: String,
    pub cpm: f64,
    pub width: u64,
    pub height: u64,
    pub ttl: u64,
    pub creative_id: CreativeId,
    pub currency: String,
    pub net_revenue: bool,
    pub ad: String,
}

/// Which user-sync mechanisms the host allows.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncOptions {
    #[serde(default)]
    pub iframe_enabled: bool,
    #[serde(default)]
    pub pixel_enabled: bool,
}

/// User-sync mechanism.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SyncType {
    Iframe,
    Image,
}

/// A sync pixel the host should drop after the auction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserSync {
    #[serde(rename = "type")]
    pub sync_type: SyncType,
    pub url: String,
}

/// Diagnostic payload delivered to the timeout hook.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeoutData {
    #[serde(default)]
    pub auction_id: Option<String>,
    #[serde(default)]
    pub bid_id: Option<String>,
    #[serde(default)]
    pub timeout: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn placement_id_numbers_are_parseable() {
        assert_eq!(PlacementId::Number(363).as_number(), Some(363.0));
        assert_eq!(PlacementId::Number(0).as_number(), Some(0.0));
    }

    #[test]
    fn placement_id_numeric_strings_are_parseable() {
        assert_eq!(PlacementId::Text("363".to_string()).as_number(), Some(363.0));
        assert_eq!(
            PlacementId::Text(" 12.5 ".to_string()).as_number(),
            Some(12.5)
        );
    }

    #[test]
    fn placement_id_garbage_is_not_parseable() {
        assert_eq!(PlacementId::Text("banner-1".to_string()).as_number(), None);
        assert_eq!(PlacementId::Text(String::new()).as_number(), None);
        assert_eq!(PlacementId::Text("NaN".to_string()).as_number(), None);
    }

    #[test]
    fn placement_id_preserves_wire_representation() {
        let from_number: PlacementId =
            serde_json::from_value(json!(363)).expect("number should deserialize");
        let from_string: PlacementId =
            serde_json::from_value(json!("363")).expect("string should deserialize");

        assert_eq!(serde_json::to_value(&from_number).expect("serialize"), json!(363));
        assert_eq!(
            serde_json::to_value(&from_string).expect("serialize"),
            json!("363")
        );
    }

    #[test]
    fn bid_request_deserializes_from_camel_case() {
        let bid: BidRequest = serde_json::from_value(json!({
            "bidId": "2a3b4c",
            "adUnitCode": "header-banner",
            "params": { "placementId": "363", "testcpm": 1.2, "debug": true }
        }))
        .expect("bid request should deserialize");

        assert_eq!(bid.bid_id.as_deref(), Some("2a3b4c"));
        let params = bid.params.expect("params should be present");
        assert_eq!(params.placement_id, Some(PlacementId::Text("363".to_string())));
        assert_eq!(params.testcpm, Some(1.2));
        assert!(params.debug);
    }

    #[test]
    fn bid_request_tolerates_missing_fields() {
        let bid: BidRequest = serde_json::from_value(json!({})).expect("empty object is fine");
        assert!(bid.bid_id.is_none());
        assert!(bid.params.is_none());
    }

    #[test]
    fn payload_omits_absent_test_cpm() {
        let payload = BidPayload {
            pub_id: "example-publisher.com".to_string(),
            pl_id: PlacementId::Number(363),
            sys_href: "https://example-publisher.com/".to_string(),
            sys_bid_id: "abc123".to_string(),
            test_cpm: None,
        };

        let value = serde_json::to_value(&payload).expect("payload should serialize");
        assert!(value.get("test_cpm").is_none());
        assert_eq!(value["pl_id"], json!(363));
    }

    #[test]
    fn payload_keeps_supplied_test_cpm() {
        let payload = BidPayload {
            pub_id: "example-publisher.com".to_string(),
            pl_id: PlacementId::Text("363".to_string()),
            sys_href: "https://example-publisher.com/".to_string(),
            sys_bid_id: "abc123".to_string(),
            test_cpm: Some(9.99),
        };

        let value = serde_json::to_value(&payload).expect("payload should serialize");
        assert_eq!(value["test_cpm"], json!(9.99));
        assert_eq!(value["pl_id"], json!("363"));
    }

    #[test]
    fn response_body_reads_camel_case_wire_fields() {
        let body: ServerResponseBody = serde_json::from_value(json!({
            "requestId": "xyz",
            "cpm": 1.5,
            "width": 300,
            "height": 250,
            "ttl": 300,
            "creativeId": "c1",
            "currency": "EUR",
            "netRevenue": false,
            "ad": "<div/>"
        }))
        .expect("body should deserialize");

        assert_eq!(body.request_id.as_deref(), Some("xyz"));
        assert_eq!(body.cpm, Some(1.5));
        assert_eq!(body.creative_id, Some(CreativeId::Text("c1".to_string())));
        assert_eq!(body.net_revenue, Some(false));
    }

    #[test]
    fn response_body_ignores_unknown_fields() {
        let body: ServerResponseBody =
            serde_json::from_value(json!({ "cpm": 2.0, "dealId": "d-1" }))
                .expect("unknown fields are ignored");
        assert_eq!(body.cpm, Some(2.0));
    }

    #[test]
    fn empty_body_object_is_empty() {
        let body: ServerResponseBody =
            serde_json::from_value(json!({})).expect("empty object is fine");
        assert!(body.is_empty());

        let nonempty: ServerResponseBody =
            serde_json::from_value(json!({ "cpm": 0.5 })).expect("body should deserialize");
        assert!(!nonempty.is_empty());
    }

    #[test]
    fn from_json_bytes_parses_well_formed_bodies() {
        let response = ServerResponse::from_json_bytes(br#"{"requestId":"xyz","cpm":2.0}"#);
        let body = response.body.expect("body should be present");
        assert_eq!(body.request_id.as_deref(), Some("xyz"));
        assert_eq!(body.cpm, Some(2.0));
    }

    #[test]
    fn from_json_bytes_degrades_to_no_body() {
        assert!(ServerResponse::from_json_bytes(b"").body.is_none());
        assert!(ServerResponse::from_json_bytes(b"not json").body.is_none());
        assert!(ServerResponse::from_json_bytes(b"null").body.is_none());
        assert!(ServerResponse::from_json_bytes(b"42").body.is_none());
    }

    #[test]
    fn creative_id_defaults_to_zero() {
        assert_eq!(CreativeId::default(), CreativeId::Number(0));
        assert_eq!(
            serde_json::to_value(CreativeId::default()).expect("serialize"),
            json!(0)
        );
    }
}
