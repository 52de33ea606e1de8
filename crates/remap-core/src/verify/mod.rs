//! Link verifier: classifies generated URLs as reachable or broken.
//!
//! Probing is synchronous and one URL at a time. A failed probe is data
//! ([`ProbeOutcome`]), never an error; the verifier only decides which entries
//! go into the error documents.

mod probe;
mod report;

pub use probe::CurlProber;
pub use report::{read_error_records, write_error_docs, ERRORS_CSV_HEADER};

use crate::inventory::InventoryEntry;

/// An inventory entry whose generated URL failed the liveness check.
pub type ErrorRecord = InventoryEntry;

/// Result of probing one URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// 2xx or 3xx after following redirects.
    Reachable(u32),
    /// Server answered 404.
    NotFound,
    /// Any other status (403, 500 after retries, ...). Logged, not flagged.
    OtherStatus(u32),
    /// No usable HTTP answer (DNS, connect, timeout, malformed URL).
    Failed(String),
}

impl ProbeOutcome {
    /// Whether this outcome marks the entry as needing repair.
    pub fn is_broken(&self, flag_transport_errors: bool) -> bool {
        match self {
            ProbeOutcome::NotFound => true,
            ProbeOutcome::Failed(_) => flag_transport_errors,
            ProbeOutcome::Reachable(_) | ProbeOutcome::OtherStatus(_) => false,
        }
    }
}

/// Something that can tell whether a URL is live.
pub trait LinkProber {
    fn probe(&self, url: &str) -> ProbeOutcome;
}

/// Summary of a verification run.
#[derive(Debug, Default)]
pub struct VerifyReport {
    pub checked: usize,
    /// Entries flagged as broken, in inventory order.
    pub broken: Vec<ErrorRecord>,
    /// Probes that failed at the transport level (flagged or not).
    pub transport_failures: usize,
}

/// Probes every entry's generated URL and collects the broken ones.
pub fn verify_inventory<P: LinkProber + ?Sized>(
    entries: &[InventoryEntry],
    prober: &P,
    flag_transport_errors: bool,
) -> VerifyReport {
    let mut report = VerifyReport::default();
    for entry in entries {
        let outcome = prober.probe(&entry.generated_url);
        report.checked += 1;
        match &outcome {
            ProbeOutcome::Reachable(code) => {
                tracing::debug!("{} -> {}", entry.generated_url, code);
            }
            ProbeOutcome::NotFound => {
                tracing::info!("404: {}", entry.generated_url);
            }
            ProbeOutcome::OtherStatus(code) => {
                tracing::warn!("unexpected HTTP {} for {}", code, entry.generated_url);
            }
            ProbeOutcome::Failed(reason) => {
                tracing::warn!("probe failed for {}: {}", entry.generated_url, reason);
                report.transport_failures += 1;
            }
        }
        if outcome.is_broken(flag_transport_errors) {
            report.broken.push(entry.clone());
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::build;
    use std::collections::HashMap;

    struct FakeProber(HashMap<String, ProbeOutcome>);

    impl LinkProber for FakeProber {
        fn probe(&self, url: &str) -> ProbeOutcome {
            self.0
                .get(url)
                .cloned()
                .unwrap_or(ProbeOutcome::Reachable(200))
        }
    }

    fn fake(pairs: &[(&str, ProbeOutcome)]) -> FakeProber {
        FakeProber(
            pairs
                .iter()
                .map(|(u, o)| (u.to_string(), o.clone()))
                .collect(),
        )
    }

    #[test]
    fn only_404_is_broken_by_default() {
        let inv = build(&["a.jpg", "b.jpg", "c.jpg", "d.jpg"], "http://n/", "");
        let prober = fake(&[
            ("http://n/b.jpg", ProbeOutcome::NotFound),
            ("http://n/c.jpg", ProbeOutcome::Failed("timeout".to_string())),
            ("http://n/d.jpg", ProbeOutcome::OtherStatus(403)),
        ]);
        let report = verify_inventory(&inv, &prober, false);
        assert_eq!(report.checked, 4);
        assert_eq!(report.transport_failures, 1);
        assert_eq!(report.broken.len(), 1);
        assert_eq!(report.broken[0].local_name, "b.jpg");
    }

    #[test]
    fn transport_errors_flagged_when_configured() {
        let inv = build(&["a.jpg", "c.jpg"], "http://n/", "");
        let prober = fake(&[("http://n/c.jpg", ProbeOutcome::Failed("dns".to_string()))]);
        let report = verify_inventory(&inv, &prober, true);
        assert_eq!(report.broken.len(), 1);
        assert_eq!(report.broken[0].local_name, "c.jpg");
    }

    #[test]
    fn outcome_broken_table() {
        assert!(ProbeOutcome::NotFound.is_broken(false));
        assert!(!ProbeOutcome::Reachable(200).is_broken(true));
        assert!(!ProbeOutcome::OtherStatus(500).is_broken(true));
        assert!(!ProbeOutcome::Failed("x".into()).is_broken(false));
        assert!(ProbeOutcome::Failed("x".into()).is_broken(true));
    }
}
