//! # Reelstore Config
//!
//! Configuration management for Reelstore.
//! Supports layered configuration from files and environment variables,
//! validated up front and reloadable at runtime.

mod app_config;
mod loader;
mod validation;

pub use app_config::*;
pub use loader::*;
pub use validation::*;
