use std::time::Duration;

use bon::Builder;
use smol_str::SmolStr;
use solidpod_common::TransportError;

/// Default bound on a whole request/response exchange.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default bound on establishing a connection.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Options for the default reqwest transport.
///
/// - `timeout`: upper bound on one round trip, so a hung pod cannot block an
///   operation forever. Expiry is reported like any other transport failure.
/// - `connect_timeout`: upper bound on connection setup.
/// - `user_agent`: sent with every request.
#[derive(Debug, Clone, Builder)]
#[builder(start_fn = new)]
pub struct PodOptions {
    /// Per-request timeout
    #[builder(default = DEFAULT_TIMEOUT)]
    pub timeout: Duration,
    /// Connection setup timeout
    #[builder(default = DEFAULT_CONNECT_TIMEOUT)]
    pub connect_timeout: Duration,
    /// `User-Agent` header value
    #[builder(into, default = SmolStr::new_static(concat!("solidpod/", env!("CARGO_PKG_VERSION"))))]
    pub user_agent: SmolStr,
}

impl Default for PodOptions {
    fn default() -> Self {
        Self::new().build()
    }
}

impl PodOptions {
    /// Build a reqwest client configured with these options.
    pub fn build_client(&self) -> Result<reqwest::Client, TransportError> {
        reqwest::Client::builder()
            .user_agent(self.user_agent.as_str())
            .timeout(self.timeout)
            .connect_timeout(self.connect_timeout)
            .build()
            .map_err(TransportError::from)
    }
}
