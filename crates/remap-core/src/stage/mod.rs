//! The five stages of a migration run, each re-runnable on its own.
//!
//! Every stage reads its inputs from the working directory, checks them before
//! writing anything, and returns a summary for the caller to print.

mod align;
mod map;
mod repair;
mod scan;
mod verify;

pub use align::{run_align, AlignOutcome};
pub use map::{run_map, MapOutcome};
pub use repair::{run_repair, RepairOutcome};
pub use scan::{run_scan, ScanOutcome};
pub use verify::{run_verify, VerifyOutcome};

const HINT_SCAN: &str = "run `remap scan` first";
const HINT_ALIGN: &str = "run `remap align` first";
const HINT_VERIFY: &str = "run `remap verify` first";
