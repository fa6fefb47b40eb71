pub mod composer;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod manifest;
pub mod orchestrator;
pub mod registry;
pub mod ui;

pub use error::{ReleaseError, Result};
