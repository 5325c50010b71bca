// ── Editorial content records ──
//
// Articles, guides, and expert posts are read-only from the client.
// The admin create/update/delete endpoints exist in the contract but no
// in-scope consumer calls them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::entity_id::EntityId;

/// The age segments the platform organizes content around.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum AgeGroup {
    Expecting,
    Infant,
    Preschooler,
    SchoolAge,
    Teenager,
}

/// Editorial content type tag.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ContentKind {
    #[default]
    Article,
    Guide,
    Expert,
}

/// An article, guide, or expert post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    #[serde(alias = "_id")]
    pub id: EntityId,
    pub title: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default, rename = "type")]
    pub kind: ContentKind,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub body: String,
    /// Free-form category tags.
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub age_group: Option<AgeGroup>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Payload for the admin create/update endpoints.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContent {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ContentKind,
    pub summary: String,
    pub body: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_group: Option<AgeGroup>,
    pub featured: bool,
}
