//! CLI wiring.
//!
//! - [`logging`]: `tracing` subscriber installation
//! - [`run`]: builds the platform context and review source from
//!   configuration and drives a review session on the process's stdio

pub mod logging;
pub mod run;

#[cfg(test)]
pub mod test_utils;
