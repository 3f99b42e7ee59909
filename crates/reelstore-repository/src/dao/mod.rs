//! DAO (Data Access Object) layer.
//!
//! Each DAO owns exactly one collection and translates driver errors into
//! [`reelstore_core::ReelError`]. Coordination across collections happens
//! one level up, in the repository.
//!
//! Hierarchy:
//! ```text
//! Caller → Repository (interface + impl) → DAO (interface + impl) → MongoDB
//! ```

pub mod r#impl;
pub mod session_dao;
pub mod user_dao;

pub use r#impl::{MongoSessionDaoImpl, MongoUserDaoImpl};
pub use session_dao::SessionDao;
pub use user_dao::UserDao;
