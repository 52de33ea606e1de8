//! HTTP liveness probe using the curl crate (libcurl).

use std::time::Duration;

use super::{LinkProber, ProbeOutcome};
use crate::config::ProbeConfig;
use crate::retry::{self, ErrorKind, ProbeError, RetryPolicy};

/// Probes with HEAD, falling back to GET when the server rejects HEAD with 405.
///
/// Redirects are followed for both HEAD and GET and the final status is what
/// gets classified: a URL that redirects to a missing page counts as 404 (and is
/// later repaired), while a plain HEAD client would have stopped at the 3xx and
/// reported it reachable.
#[derive(Debug, Clone)]
pub struct CurlProber {
    timeout: Duration,
    user_agent: String,
    retry: RetryPolicy,
}

impl CurlProber {
    pub fn new(timeout: Duration, user_agent: &str, retry: RetryPolicy) -> Self {
        Self {
            timeout,
            user_agent: user_agent.to_string(),
            retry,
        }
    }

    pub fn from_config(cfg: &ProbeConfig) -> Self {
        Self::new(cfg.timeout(), &cfg.user_agent, cfg.retry_policy())
    }

    /// One request; returns the final HTTP status. The body of a GET is discarded.
    fn request(&self, url: &str, head: bool) -> Result<u32, ProbeError> {
        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        if head {
            easy.nobody(true)?;
        }
        easy.follow_location(true)?;
        easy.connect_timeout(self.timeout)?;
        easy.timeout(self.timeout)?;
        easy.useragent(&self.user_agent)?;
        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| Ok(data.len()))?;
            transfer.perform()?;
        }
        Ok(easy.response_code()?)
    }

    /// Status of `url`; retryable statuses come back as `Err` so the retry loop sees them.
    fn status(&self, url: &str) -> Result<u32, ProbeError> {
        let mut code = self.request(url, true)?;
        if code == 405 {
            tracing::debug!("HEAD not allowed for {url}, retrying with GET");
            code = self.request(url, false)?;
        }
        if retry::classify_http_status(code) != ErrorKind::Other {
            return Err(ProbeError::Http(code));
        }
        Ok(code)
    }
}

impl LinkProber for CurlProber {
    fn probe(&self, url: &str) -> ProbeOutcome {
        match retry::run_with_retry(&self.retry, || self.status(url)) {
            Ok(404) => ProbeOutcome::NotFound,
            Ok(code) if (200..400).contains(&code) => ProbeOutcome::Reachable(code),
            Ok(code) | Err(ProbeError::Http(code)) => ProbeOutcome::OtherStatus(code),
            Err(ProbeError::Curl(e)) => ProbeOutcome::Failed(e.to_string()),
        }
    }
}
