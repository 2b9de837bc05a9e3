//! # usercrud-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `UserRepository`: CRUD for user records
//!   - `Clock`: source of "now" for write timestamps
//! - Define the **driving/inbound** use-case struct `UserService`
//!   (list, get, create, update, delete)
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `usercrud-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
