pub mod config;
pub mod logging;

pub mod clock;
pub mod endpoints;
pub mod fetch;
pub mod retry;
pub mod sample;
pub mod scheduler;
