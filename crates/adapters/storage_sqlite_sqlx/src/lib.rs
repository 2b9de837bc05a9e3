//! # usercrud-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the `UserRepository` port defined in `usercrud-app::ports::storage`
//! - Manage the `SQLite` connection pool lifecycle (bounded size and lifetime)
//! - Ensure the `users` table exists on startup
//! - Map between domain types and database rows, binding every value
//!
//! ## Dependency rule
//! Depends on `usercrud-app` (for port traits) and `usercrud-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod error;
pub mod pool;
pub mod user_repo;

pub use error::StorageError;
pub use pool::{Config, Database};
pub use user_repo::SqliteUserRepository;
