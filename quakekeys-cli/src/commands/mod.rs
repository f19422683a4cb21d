//! CLI command implementations.
//!
//! - [`config`] - Configuration management (path, show, init)
//! - [`lookup`] - Keys lookup over a location file

pub mod config;
pub mod lookup;
