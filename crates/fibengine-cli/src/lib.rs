//! # fibengine-cli
//!
//! CLI output, result presentation, and shell completion.

pub mod completion;
pub mod interfaces;
pub mod output;
pub mod presenter;
pub mod ui;

pub use interfaces::{ClientResult, ResultPresenter};
pub use presenter::CLIResultPresenter;
