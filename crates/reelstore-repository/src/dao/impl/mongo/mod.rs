//! MongoDB DAO implementations.

mod session_dao_impl;
mod user_dao_impl;

pub use session_dao_impl::MongoSessionDaoImpl;
pub use user_dao_impl::MongoUserDaoImpl;

/// Collection holding user documents.
pub const USERS_COLLECTION: &str = "users";

/// Collection holding session documents.
pub const SESSIONS_COLLECTION: &str = "sessions";
