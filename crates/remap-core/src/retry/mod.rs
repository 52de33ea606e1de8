//! Retry and backoff policy for liveness probes.
//!
//! Error classification (timeouts, throttling, connection failures) and
//! exponential backoff decisions live here so the verifier only has to say
//! what went wrong, not whether to try again.

mod classify;
mod error;
mod policy;
mod run;

pub use classify::{classify, classify_curl_error, classify_http_status};
pub use error::ProbeError;
pub use policy::{ErrorKind, RetryDecision, RetryPolicy};
pub use run::run_with_retry;
