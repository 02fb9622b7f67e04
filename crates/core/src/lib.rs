//! Domain-level building blocks shared by the store and API layers.
//!
//! Everything in this crate is pure: no I/O, no database types. The
//! validation rule chains in particular are referentially transparent so
//! they can be unit-tested without a running database.

pub mod error;
pub mod types;
pub mod validation;
