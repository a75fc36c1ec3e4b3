//! Trait definition for bidder adapters.

use crate::settings::Settings;
use crate::types::{
    Bid, BidRequest, MediaType, ServerRequest, ServerResponse, SyncOptions, TimeoutData, UserSync,
};

/// Auction-wide context threaded through every adapter call.
///
/// Settings travel explicitly so adapters stay free of global state. The
/// auction id is opaque to adapters and only used for diagnostics.
pub struct AuctionContext<'a> {
    pub settings: &'a Settings,
    pub auction_id: Option<&'a str>,
}

impl<'a> AuctionContext<'a> {
    #[must_use]
    pub fn new(settings: &'a Settings) -> Self {
        Self {
            settings,
            auction_id: None,
        }
    }

    #[must_use]
    pub fn with_auction_id(mut self, auction_id: &'a str) -> Self {
        self.auction_id = Some(auction_id);
        self
    }
}

/// Trait implemented by all bidder adapters.
///
/// The host framework drives an adapter through this seam, in order:
/// candidate bids are filtered through [`is_bid_request_valid`], survivors
/// go through [`build_requests`], the host performs the HTTP dispatch, and
/// each response is handed to [`interpret_response`] together with the
/// descriptor that produced it.
///
/// [`is_bid_request_valid`]: BidderAdapter::is_bid_request_valid
/// [`build_requests`]: BidderAdapter::build_requests
/// [`interpret_response`]: BidderAdapter::interpret_response
pub trait BidderAdapter: Send + Sync {
    /// Unique bidder code (e.g., "bucksense").
    fn bidder_code(&self) -> &'static str;

    /// Media types this adapter can bid on.
    fn supported_media_types(&self) -> &'static [MediaType] {
        &[MediaType::Banner]
    }

    /// Determine whether the given bid request is valid.
    ///
    /// Must never panic; malformed input yields `false`.
    fn is_bid_request_valid(&self, bid: &BidRequest, ctx: &AuctionContext<'_>) -> bool;

    /// Build one outbound request descriptor per valid bid request,
    /// preserving input order.
    ///
    /// No network I/O happens here; the host transport performs the actual
    /// dispatch. An empty input yields an empty output.
    fn build_requests(
        &self,
        valid_bid_requests: &[BidRequest],
        ctx: &AuctionContext<'_>,
    ) -> Vec<ServerRequest>;

    /// Unpack the transport's response into zero or one normalized bids.
    ///
    /// The host must pass back the same descriptor it dispatched; the
    /// descriptor supplies the fallback request id and the test-CPM
    /// override.
    fn interpret_response(
        &self,
        response: &ServerResponse,
        request: &ServerRequest,
        ctx: &AuctionContext<'_>,
    ) -> Vec<Bid>;

    /// User-sync pixels the host should drop after the auction.
    fn user_syncs(
        &self,
        options: &SyncOptions,
        responses: &[ServerResponse],
        ctx: &AuctionContext<'_>,
    ) -> Vec<UserSync>;

    /// Called when targeting has been set for one of this adapter's bids.
    /// Diagnostics only; never required for correctness.
    fn on_set_targeting(&self, _bid: &Bid, _ctx: &AuctionContext<'_>) {}

    /// Called when one of this adapter's bids has won. Diagnostics only.
    fn on_bid_won(&self, _bid: &Bid, _ctx: &AuctionContext<'_>) {}

    /// Called when the auction timed out waiting on this adapter.
    /// Diagnostics only.
    fn on_timeout(&self, _timeout: &TimeoutData, _ctx: &AuctionContext<'_>) {}
}
