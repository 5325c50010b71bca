// ── Tool catalog records ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::content::AgeGroup;
use super::entity_id::EntityId;

/// A catalog entry: growth tracker, feeding log, milestone checklist, etc.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    #[serde(alias = "_id")]
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
    /// Age segments the tool applies to.
    #[serde(default)]
    pub age_groups: Vec<AgeGroup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// A user-submitted data point for a tool. Append-only: entries are
/// saved, never edited in place.
///
/// The payload shape is tool-specific (a weight entry looks nothing like
/// a milestone tick), so it stays as raw JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolData {
    #[serde(alias = "_id")]
    pub id: EntityId,
    #[serde(default)]
    pub tool: Option<EntityId>,
    #[serde(default)]
    pub user: Option<EntityId>,
    #[serde(default)]
    pub data: serde_json::Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn tool_parses_with_age_groups() {
        let tool: Tool = serde_json::from_str(
            r#"{"_id":"t1","name":"Growth tracker","ageGroups":["infant","preschooler"]}"#,
        )
        .unwrap();
        assert_eq!(tool.age_groups.len(), 2);
        assert!(tool.category.is_none());
    }

    #[test]
    fn tool_data_keeps_payload_verbatim() {
        let entry: ToolData = serde_json::from_str(
            r#"{"_id":"d1","tool":"t1","data":{"weightKg":7.4}}"#,
        )
        .unwrap();
        assert_eq!(entry.data["weightKg"], 7.4);
    }
}
