//! Branch resolution
//!
//! Expands declared branch patterns against the remote branch inventory
//! and orders each expanded group by semantic version. Pure logic only;
//! no I/O happens here.

mod targets;
mod version;

pub use targets::resolve_targets;
pub use version::{Version, compare_versionish};
