//! DAO implementations.
//!
//! Trait definitions live in the parent `dao/` module (e.g. `user_dao.rs`).
//! Implementations are organized by storage technology.

pub mod mongo;

pub use mongo::{MongoSessionDaoImpl, MongoUserDaoImpl};
