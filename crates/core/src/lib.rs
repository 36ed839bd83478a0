//! Core domain types and contracts for billsync.
//!
//! This crate holds the pure pieces of the system: billing entities and their
//! request/response projections, the repository contract over the relational
//! store, the cache backend contract with the generic cache-aside manager,
//! and the cache-aware entity service that ties them together. Backend
//! implementations (SQLite, Redis, in-memory) live in the `billsync` binary
//! crate and are selected there via feature flags.

pub mod billing;
pub mod cache;
pub mod service;
pub mod storage;
