//! User-sync strategies.
//!
//! A sync descriptor is produced by a per-type strategy function consulting
//! the host's sync options and the auction's responses. The table of
//! enabled strategies is currently empty: the endpoint does not yet serve a
//! sync pixel, so [`crate::bucksense::BucksenseAdapter`] returns no syncs.
//! Enabling a sync type means adding its builder to the table.

use crate::types::{ServerResponse, SyncOptions, UserSync};

/// Builder for one sync type. Returns `None` when the host options or the
/// responses don't allow that sync to be emitted.
pub type SyncStrategy = fn(&SyncOptions, &[ServerResponse]) -> Option<UserSync>;

/// Strategies currently enabled for the bidder.
#[must_use]
pub fn enabled_strategies() -> &'static [SyncStrategy] {
    &[]
}
