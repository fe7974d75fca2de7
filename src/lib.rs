pub mod cli;
pub mod domain;
pub mod engine;
pub mod error;
pub mod git;
pub mod logging;
pub mod notice;
pub mod settings;
pub mod store;
pub mod ui;

pub use error::{Result, VermanError};
