//! Domain entities and value objects.
//!
//! `User` and `Session` mirror the documents stored in the `users` and
//! `sessions` collections; `Email` is the user's natural key.

pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
