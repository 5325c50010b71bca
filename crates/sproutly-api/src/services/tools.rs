// Tool catalog endpoints
//
// Catalog reads plus the append-only per-tool data log.

use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::model::{AgeGroup, EntityId, Tool, ToolData};

impl ApiClient {
    /// List the tool catalog.
    ///
    /// `GET tools`
    pub async fn list_tools(&self) -> Result<Vec<Tool>, Error> {
        debug!("listing tools");
        self.get("tools").await
    }

    /// Fetch a single tool.
    ///
    /// `GET tools/{id}`
    pub async fn tool_by_id(&self, id: &EntityId) -> Result<Tool, Error> {
        debug!(%id, "fetching tool");
        self.get(&format!("tools/{id}")).await
    }

    /// List tools in one category.
    ///
    /// `GET tools/category/{category}`
    pub async fn tools_by_category(&self, category: &str) -> Result<Vec<Tool>, Error> {
        if category.trim().is_empty() {
            return Err(Error::Validation {
                message: "category is required".into(),
            });
        }
        debug!(category, "listing tools by category");
        self.get(&format!("tools/category/{category}")).await
    }

    /// List tools applicable to one age segment.
    ///
    /// `GET tools/age/{ageGroup}`
    pub async fn tools_by_age_group(&self, age_group: AgeGroup) -> Result<Vec<Tool>, Error> {
        debug!(%age_group, "listing tools by age group");
        self.get(&format!("tools/age/{age_group}")).await
    }

    /// List the signed-in user's saved entries for a tool, in server order.
    ///
    /// `GET tools/{id}/data`
    pub async fn tool_data(&self, tool_id: &EntityId) -> Result<Vec<ToolData>, Error> {
        debug!(%tool_id, "fetching tool data");
        self.get(&format!("tools/{tool_id}/data")).await
    }

    /// Append a data entry for a tool. Entries are never edited in place.
    ///
    /// `POST tools/{id}/data` with `{"data": <payload>}`
    pub async fn save_tool_data(
        &self,
        tool_id: &EntityId,
        payload: &serde_json::Value,
    ) -> Result<ToolData, Error> {
        debug!(%tool_id, "saving tool data");
        self.post(
            &format!("tools/{tool_id}/data"),
            &serde_json::json!({ "data": payload }),
        )
        .await
    }
}
