//! CLI command handlers, one stage per file.

mod align;
mod map;
mod repair;
mod scan;
mod verify;

pub use align::run_align;
pub use map::run_map;
pub use repair::run_repair;
pub use scan::run_scan;
pub use verify::run_verify;
