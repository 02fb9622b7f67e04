//! HTTP handlers. Thin adapters: extract, call the service, map to JSON.

pub mod auth;
pub mod category;
pub mod product;
pub mod user;
