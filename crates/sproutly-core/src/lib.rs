//! Reactive client state between `sproutly-api` and view consumers.
//!
//! One state container per resource family, each independently
//! constructible around a shared [`ApiClient`](sproutly_api::ApiClient):
//!
//! - **[`AuthStore`]** — the signed-in user; register/login/logout,
//!   profile and password management, session restore.
//! - **[`ContentStore`]** — per-age-group article listings and the open
//!   item.
//! - **[`ForumStore`]** — forums, posts, comments, and voting.
//! - **[`ToolStore`]** — the tool catalog and its append-only data log.
//! - **[`NotificationStore`]** — the feed plus the derived unread
//!   counter.
//!
//! Every store holds its state in a `tokio::sync::watch` channel:
//! `state()` returns a snapshot, `subscribe()` a receiver for reactive
//! rendering. Actions follow one protocol -- flip `loading`, write the
//! fetched value verbatim on success, record a flat `error` string and
//! rethrow on failure -- and never clear held data when a fetch fails.

pub mod error;
pub mod store;

pub use error::CoreError;
pub use store::{
    AuthState, AuthStore, ContentState, ContentStore, ForumState, ForumStore, NotificationState,
    NotificationStore, ToolState, ToolStore,
};

// Re-export the api crate so consumers need a single dependency.
pub use sproutly_api as api;
