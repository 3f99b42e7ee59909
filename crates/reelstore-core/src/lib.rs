//! # Reelstore Core
//!
//! Core types, domain entities, and error definitions for Reelstore.
//! Every other crate in the workspace builds on the error taxonomy and
//! the `User`/`Session` entities defined here.

pub mod domain;
pub mod error;
pub mod result;
pub mod telemetry;

pub use domain::*;
pub use error::*;
pub use result::*;

// Re-export shaku for dependency injection
pub use shaku::{module, HasComponent, Interface};
