//! CLI command handlers. Each command is in its own file.

mod check;
mod endpoints;
mod now;
mod watch;

pub use check::run_check;
pub use endpoints::run_endpoints;
pub use now::run_now;
pub use watch::run_watch;
