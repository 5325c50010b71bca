// ── Notification records ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity_id::EntityId;

/// A per-user feed entry with a read/unread flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    #[serde(alias = "_id")]
    pub id: EntityId,
    #[serde(default)]
    pub message: String,
    /// Server-side classification ("reply", "vote", ...). Free-form.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub read: bool,
    /// In-app destination the notification points at.
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}
