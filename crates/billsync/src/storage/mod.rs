//! Storage backend implementations.
//!
//! This module provides concrete implementations of the
//! [`Repository`](billsync_core::storage::Repository) trait defined in
//! `billsync_core::storage`. The implementations are selected at compile time
//! via feature flags.
//!
//! # Feature Flags
//!
//! - `inmemory` (default): In-memory storage backend, used by tests
//! - `sqlite`: SQLite storage backend using `rusqlite` and `tokio-rusqlite`
//!
//! These features are mutually exclusive - only one storage backend can be
//! enabled at a time.

// Compile-time checks for mutual exclusivity
#[cfg(all(feature = "inmemory", feature = "sqlite"))]
compile_error!(
    "Features 'inmemory' and 'sqlite' are mutually exclusive. \
    Enable only one storage backend at a time."
);

#[cfg(not(any(feature = "inmemory", feature = "sqlite")))]
compile_error!(
    "No storage backend selected. Enable 'inmemory' or 'sqlite' feature. \
    Example: cargo build -p billsync --features sqlite"
);

#[cfg(feature = "inmemory")]
pub mod inmemory;

#[cfg(feature = "sqlite")]
pub mod sqlite;

// Re-export the active repository implementation
#[cfg(feature = "inmemory")]
#[allow(unused_imports)]
pub use inmemory::InMemoryRepository;

#[cfg(feature = "sqlite")]
#[allow(unused_imports)]
pub use sqlite::SqliteRepository;
