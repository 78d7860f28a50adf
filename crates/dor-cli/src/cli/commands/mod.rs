//! CLI command handlers. Each command is in its own file.

mod create;
mod verify;

pub use create::run_create;
pub use verify::run_verify;
