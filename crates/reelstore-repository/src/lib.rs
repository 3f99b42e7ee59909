//! # Reelstore Repository
//!
//! User and session data access over MongoDB:
//!
//! ```text
//! Caller
//!   ↓  Arc<dyn UserRepository>  (repository interface)
//! UserRepositoryImpl            (coordinates DAOs)
//!   ↓  Arc<dyn UserDao>, Arc<dyn SessionDao>
//! MongoUserDaoImpl / MongoSessionDaoImpl
//!   ↓  Arc<dyn DatabaseClientInterface>
//! MongoDB ("users", "sessions")
//! ```
//!
//! ## Structure
//!
//! ```text
//! src/
//!   traits.rs                    ← UserRepository trait
//!   client.rs                    ← DatabaseClient
//!   di.rs                        ← RepositoryModule (shaku)
//!   impl/
//!     user_repository_impl.rs    ← UserRepositoryImpl
//!   dao/
//!     user_dao.rs                ← UserDao trait
//!     session_dao.rs             ← SessionDao trait
//!     impl/
//!       mongo/
//!         user_dao_impl.rs       ← MongoUserDaoImpl
//!         session_dao_impl.rs    ← MongoSessionDaoImpl
//! ```

pub mod client;
pub mod dao;
pub mod di;
pub mod r#impl;
pub mod traits;

pub use client::*;
pub use dao::{MongoSessionDaoImpl, MongoUserDaoImpl, SessionDao, UserDao};
pub use dao::r#impl::mongo::{SESSIONS_COLLECTION, USERS_COLLECTION};
pub use di::{build_repository_module, module_with_client, user_repository, RepositoryModule};
pub use r#impl::UserRepositoryImpl;
pub use traits::*;
