//! # usercrud-domain
//!
//! Pure domain model for the usercrud service.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define the **User** record and the **`UserParams`** input it is built from
//! - Contain all invariant enforcement (immutable id, creation timestamp set once)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod user;
