//! FibEngine application library: configuration, dispatch and exit codes.

pub mod app;
pub mod config;
pub mod errors;
pub mod verify;
