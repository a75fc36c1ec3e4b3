//! Bidder adapter for the Bucksense bidding endpoint.

use http::Method;
use url::Url;

use crate::adapter::{AuctionContext, BidderAdapter};
use crate::fields;
use crate::settings::Settings;
use crate::sync;
use crate::types::{
    Bid, BidPayload, BidRequest, PlacementId, ServerRequest, ServerResponse, SyncOptions,
    TimeoutData, UserSync,
};

/// Tag prefixed to every diagnostic line, mirroring the endpoint's own
/// support tooling.
const WHOIS: &str = "BKSHBID-008";

const BIDDER_CODE: &str = "bucksense";

const DEFAULT_CURRENCY: &str = "USD";

/// The Bucksense adapter. Stateless: configuration arrives with every call
/// through the [`AuctionContext`].
#[derive(Debug, Default)]
pub struct BucksenseAdapter;

impl BucksenseAdapter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Verbose diagnostics are on when configured globally or when the bid
    /// at hand carries a truthy `debug` param.
    fn verbose(ctx: &AuctionContext<'_>, bid: Option<&BidRequest>) -> bool {
        ctx.settings.bidder.debug
            || bid
                .and_then(|b| b.params.as_ref())
                .is_some_and(|p| p.debug)
    }
}

/// Builder consulted by the adapter registry.
#[must_use]
pub fn register(settings: &Settings) -> Option<Box<dyn BidderAdapter>> {
    if !settings.bidder.enabled {
        return None;
    }
    Some(Box::new(BucksenseAdapter::new()))
}

/// URI-encode the page URL for the `sys_href` payload field.
///
/// A parseable URL is serialized through [`Url`], which percent-encodes it
/// the way browsers do; anything else is percent-encoded wholesale.
fn encode_page_url(raw: &str) -> String {
    match Url::parse(raw) {
        Ok(url) => url.to_string(),
        Err(_) => urlencoding::encode(raw).into_owned(),
    }
}

impl BidderAdapter for BucksenseAdapter {
    fn bidder_code(&self) -> &'static str {
        BIDDER_CODE
    }

    fn is_bid_request_valid(&self, bid: &BidRequest, ctx: &AuctionContext<'_>) -> bool {
        let verbose = Self::verbose(ctx, Some(bid));
        if verbose {
            log::debug!("{} is_bid_request_valid() - input bid: {:?}", WHOIS, bid);
        }

        let has_bid_id = bid.bid_id.as_deref().is_some_and(|id| !id.is_empty());
        let has_placement = bid
            .params
            .as_ref()
            .and_then(|p| p.placement_id.as_ref())
            .and_then(PlacementId::as_number)
            .is_some();

        let valid = has_bid_id && has_placement;
        if verbose {
            log::debug!("{} is_bid_request_valid() - valid: {}", WHOIS, valid);
        }
        valid
    }

    fn build_requests(
        &self,
        valid_bid_requests: &[BidRequest],
        ctx: &AuctionContext<'_>,
    ) -> Vec<ServerRequest> {
        let verbose = ctx.settings.bidder.debug
            || valid_bid_requests
                .iter()
                .any(|bid| bid.params.as_ref().is_some_and(|p| p.debug));
        if verbose {
            log::debug!(
                "{} build_requests() - input bids: {:?}, auction: {:?}",
                WHOIS,
                valid_bid_requests,
                ctx.auction_id
            );
        }

        let publisher = &ctx.settings.publisher;
        let sys_href = encode_page_url(&publisher.page_url);

        let mut requests = Vec::with_capacity(valid_bid_requests.len());
        for bid in valid_bid_requests {
            let params = bid.params.clone().unwrap_or_default();

            requests.push(ServerRequest {
                method: Method::POST,
                url: ctx.settings.bidder.endpoint.clone(),
                data: BidPayload {
                    pub_id: publisher.domain.clone(),
                    // Inputs have passed validation; the fallbacks below are
                    // unreachable through the host's validate -> build flow.
                    pl_id: params.placement_id.unwrap_or(PlacementId::Number(0)),
                    sys_href: sys_href.clone(),
                    sys_bid_id: bid.bid_id.clone().unwrap_or_default(),
                    test_cpm: params.testcpm,
                },
            });
        }

        if verbose {
            log::debug!("{} build_requests() - requests: {:?}", WHOIS, requests);
        }
        requests
    }

    fn interpret_response(
        &self,
        response: &ServerResponse,
        request: &ServerRequest,
        ctx: &AuctionContext<'_>,
    ) -> Vec<Bid> {
        let verbose = ctx.settings.bidder.debug;
        if verbose {
            log::debug!(
                "{} interpret_response() - input response: {:?}, request: {:?}",
                WHOIS,
                response,
                request
            );
        }

        let Some(body) = response.body.as_ref().filter(|b| !b.is_empty()) else {
            if verbose {
                log::debug!("{} interpret_response() - server response not valid", WHOIS);
            }
            return Vec::new();
        };

        let mut request_id = fields::non_empty_str(body.request_id.as_deref())
            .unwrap_or_default()
            .to_string();
        let mut cpm = fields::nonzero_f64(body.cpm).unwrap_or(0.0);
        let width = fields::nonzero_u64(body.width).unwrap_or(0);
        let height = fields::nonzero_u64(body.height).unwrap_or(0);
        let ttl = fields::nonzero_u64(body.ttl).unwrap_or(0);
        let creative_id = fields::truthy_creative_id(body.creative_id.as_ref())
            .cloned()
            .unwrap_or_default();
        let currency = fields::non_empty_str(body.currency.as_deref())
            .unwrap_or(DEFAULT_CURRENCY)
            .to_string();
        let net_revenue = fields::truthy_bool(body.net_revenue).unwrap_or(true);
        let ad = fields::non_empty_str(body.ad.as_deref())
            .unwrap_or_default()
            .to_string();

        if request_id.is_empty() {
            if verbose {
                log::debug!(
                    "{} interpret_response() - using request id from descriptor",
                    WHOIS
                );
            }
            request_id = request.data.sys_bid_id.clone();
        }

        if let Some(test_cpm) = fields::positive_f64(request.data.test_cpm) {
            if verbose {
                log::debug!("{} interpret_response() - using test cpm", WHOIS);
            }
            cpm = test_cpm;
        }

        let bid = Bid {
            request_id,
            cpm,
            width,
            height,
            ttl,
            creative_id,
            currency,
            net_revenue,
            ad,
        };
        if verbose {
            log::debug!("{} interpret_response() - return: {:?}", WHOIS, bid);
        }
        vec![bid]
    }

    fn user_syncs(
        &self,
        options: &SyncOptions,
        responses: &[ServerResponse],
        ctx: &AuctionContext<'_>,
    ) -> Vec<UserSync> {
        if ctx.settings.bidder.debug {
            log::debug!(
                "{} user_syncs() - options: {:?}, responses: {}",
                WHOIS,
                options,
                responses.len()
            );
        }

        let mut syncs = Vec::new();
        for strategy in sync::enabled_strategies() {
            if let Some(user_sync) = strategy(options, responses) {
                syncs.push(user_sync);
            }
        }
        syncs
    }

    fn on_set_targeting(&self, bid: &Bid, ctx: &AuctionContext<'_>) {
        if ctx.settings.bidder.debug {
            log::debug!("{} on_set_targeting() - input bid: {:?}", WHOIS, bid);
        }
    }

    fn on_bid_won(&self, bid: &Bid, ctx: &AuctionContext<'_>) {
        if ctx.settings.bidder.debug {
            log::debug!("{} on_bid_won() - input bid: {:?}", WHOIS, bid);
        }
    }

    fn on_timeout(&self, timeout: &TimeoutData, ctx: &AuctionContext<'_>) {
        if ctx.settings.bidder.debug {
            log::debug!("{} on_timeout() - input: {:?}", WHOIS, timeout);
        }
    }
}
