use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use tracing::debug;

use crate::error::AcclinkError;

pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Answers whether a constructed URL is currently serving. Implementations
/// never error: any transport failure counts as unreachable.
pub trait LinkProbe: Send + Sync {
    fn is_reachable(&self, url: &str) -> bool;
}

/// Probe issuing header-only requests against the mirror. Only a plain 200
/// counts as reachable; redirects, client and server errors, timeouts and
/// connection failures all report false.
#[derive(Clone)]
pub struct HttpLinkProbe {
    client: Client,
}

impl HttpLinkProbe {
    pub fn new(timeout: Duration) -> Result<Self, AcclinkError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&format!("acclink/{}", env!("CARGO_PKG_VERSION")))
                .map_err(|err| AcclinkError::HttpClient(err.to_string()))?,
        );
        let client = Client::builder()
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::none())
            .timeout(timeout)
            .build()
            .map_err(|err| AcclinkError::HttpClient(err.to_string()))?;
        Ok(Self { client })
    }
}

impl LinkProbe for HttpLinkProbe {
    fn is_reachable(&self, url: &str) -> bool {
        match self.client.head(url).send() {
            Ok(response) => {
                let status = response.status();
                debug!(url, status = %status, "probe response");
                status == StatusCode::OK
            }
            Err(err) => {
                debug!(url, error = %err, "probe failed");
                false
            }
        }
    }
}
