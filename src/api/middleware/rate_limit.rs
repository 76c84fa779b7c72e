//! Rate limiting middleware using token bucket algorithm.
//!
//! Limits are keyed per client IP. Direct deployments read the peer socket
//! address; deployments behind a trusted reverse proxy read forwarded
//! headers instead, selected by the `behind_proxy` flag. The two key
//! extractors produce differently-typed layers, so each limiter is applied
//! to the router here rather than returned as a layer value.

use std::sync::Arc;

use axum::Router;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

use crate::state::AppState;

/// Applies the public rate limit to a router.
///
/// # Limits
///
/// - **Rate**: 2 requests per second
/// - **Burst**: 100 requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// With `behind_proxy` the client IP comes from `X-Forwarded-For` /
/// `X-Real-IP` headers; otherwise from the socket peer address. Enable
/// the flag only behind a trusted reverse proxy, since the headers are
/// caller-controlled.
pub fn public(router: Router<AppState>, behind_proxy: bool) -> Router<AppState> {
    if behind_proxy {
        let governor_conf = Arc::new(
            GovernorConfigBuilder::default()
                .per_second(2)
                .burst_size(100)
                .key_extractor(SmartIpKeyExtractor)
                .finish()
                .unwrap(),
        );
        router.layer(GovernorLayer::new(governor_conf))
    } else {
        let governor_conf = Arc::new(
            GovernorConfigBuilder::default()
                .per_second(2)
                .burst_size(100)
                .finish()
                .unwrap(),
        );
        router.layer(GovernorLayer::new(governor_conf))
    }
}

/// Applies a stricter rate limit for write endpoints.
///
/// # Limits
///
/// - **Rate**: 1 request per second
/// - **Burst**: 10 requests
///
/// Key extraction follows the same `behind_proxy` rule as [`public`].
pub fn secure(router: Router<AppState>, behind_proxy: bool) -> Router<AppState> {
    if behind_proxy {
        let governor_conf = Arc::new(
            GovernorConfigBuilder::default()
                .per_second(1)
                .burst_size(10)
                .key_extractor(SmartIpKeyExtractor)
                .finish()
                .unwrap(),
        );
        router.layer(GovernorLayer::new(governor_conf))
    } else {
        let governor_conf = Arc::new(
            GovernorConfigBuilder::default()
                .per_second(1)
                .burst_size(10)
                .finish()
                .unwrap(),
        );
        router.layer(GovernorLayer::new(governor_conf))
    }
}
