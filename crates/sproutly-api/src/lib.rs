//! Async Rust client for the Sproutly parenting platform REST API.
//!
//! The crate has three layers:
//!
//! - **[`ApiClient`]** — the HTTP wrapper: base-URL construction,
//!   `x-auth-token` injection from the [`SessionStore`], and error
//!   normalization. A 401 from any endpoint clears the stored session and
//!   fires the registered unauthorized hook before the error surfaces.
//! - **Services** — one endpoint module per resource family (auth,
//!   content, forum, tools, notifications), implemented as inherent
//!   methods on [`ApiClient`]. Requests are fire-once: no retry, no
//!   de-duplication, no timeout unless configured.
//! - **[`model`]** — plain serde records for everything on the wire.
//!
//! `sproutly-core` builds reactive state stores on top of this crate;
//! view layers can also call the services directly.

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod session;
mod services;

// ── Primary re-exports ──────────────────────────────────────────────
pub use client::{ApiClient, AUTH_HEADER};
pub use config::{ApiConfig, DEFAULT_BASE_URL};
pub use error::Error;
pub use session::{FileSessionStore, MemorySessionStore, Session, SessionStore};

// Re-export model types at the crate root for ergonomics.
pub use model::{
    AgeGroup,
    AuthSession,
    Comment,
    CommentQuery,
    ContentItem,
    ContentKind,
    ContentQuery,
    Credentials,
    EntityId,
    Forum,
    NewComment,
    NewContent,
    NewForum,
    NewPost,
    NewUser,
    Notification,
    Post,
    PostQuery,
    PostSort,
    ProfileUpdate,
    Tool,
    ToolData,
    User,
    VoteKind,
};
