//! Wire records for the Sproutly backend.
//!
//! Plain serde structs, camelCase on the wire, tolerant of the Mongo-style
//! `_id` spelling. Collections arrive in server order and are never
//! re-sorted by this client.

mod content;
mod entity_id;
mod forum;
mod notification;
mod query;
mod tool;
mod user;

pub use content::{AgeGroup, ContentItem, ContentKind, NewContent};
pub use entity_id::EntityId;
pub use forum::{Comment, Forum, NewComment, NewForum, NewPost, Post, VoteKind};
pub use notification::Notification;
pub use query::{CommentQuery, ContentQuery, PostQuery, PostSort};
pub use tool::{Tool, ToolData};
pub use user::{AuthSession, Credentials, NewUser, ProfileUpdate, User};
