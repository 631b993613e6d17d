//! Library components of the `longcare` command-line front end.

pub mod config;
pub mod logging;
pub mod query_args;
pub mod render;
