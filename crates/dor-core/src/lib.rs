//! DOR core: checksum sidecar creation and verification.
//!
//! [`pipeline::create_checksums`] writes `<file>.<ext>` next to every data
//! file that lacks one; [`pipeline::verify_checksums`] recomputes digests and
//! compares them against those sidecars to catch silent corruption.

pub mod checksum;
pub mod config;
pub mod logging;
pub mod pipeline;
pub mod sidecar;
pub mod walker;
