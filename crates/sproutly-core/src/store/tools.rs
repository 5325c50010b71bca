// Tool store
//
// Catalog listing, the open tool, and its user-submitted data log.
// Saving appends to the in-memory log; entries are never edited in
// place. Category and age-group listings pass through without being
// cached, matching how the catalog views consume them.

use std::sync::Arc;

use tokio::sync::watch;

use sproutly_api::model::{AgeGroup, EntityId, Tool, ToolData};
use sproutly_api::{ApiClient, Error as ApiError};

use crate::error::CoreError;

/// Reactive tool state.
#[derive(Debug, Clone, Default)]
pub struct ToolState {
    pub tools: Vec<Tool>,
    pub current_tool: Option<Tool>,
    /// Saved entries for the current tool, in server order plus local
    /// appends.
    pub tool_data: Vec<ToolData>,
    pub loading: bool,
    pub error: Option<String>,
}

/// State container for the tool catalog.
pub struct ToolStore {
    client: Arc<ApiClient>,
    state: watch::Sender<ToolState>,
}

impl ToolStore {
    pub fn new(client: Arc<ApiClient>) -> Self {
        let (state, _) = watch::channel(ToolState::default());
        Self { client, state }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> ToolState {
        self.state.borrow().clone()
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<ToolState> {
        self.state.subscribe()
    }

    /// Fetch the full catalog.
    pub async fn load_tools(&self) -> Result<Vec<Tool>, CoreError> {
        self.begin();
        match self.client.list_tools().await {
            Ok(tools) => {
                self.state.send_modify(|s| {
                    s.tools = tools.clone();
                    s.loading = false;
                });
                Ok(tools)
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Fetch one tool and make it the current selection.
    pub async fn load_tool(&self, id: &EntityId) -> Result<Tool, CoreError> {
        self.begin();
        match self.client.tool_by_id(id).await {
            Ok(tool) => {
                self.state.send_modify(|s| {
                    s.current_tool = Some(tool.clone());
                    s.loading = false;
                });
                Ok(tool)
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Category listing. Results go to the caller, not into state.
    pub async fn tools_by_category(&self, category: &str) -> Result<Vec<Tool>, CoreError> {
        self.begin();
        match self.client.tools_by_category(category).await {
            Ok(tools) => {
                self.state.send_modify(|s| s.loading = false);
                Ok(tools)
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Age-group listing. Results go to the caller, not into state.
    pub async fn tools_by_age_group(&self, age_group: AgeGroup) -> Result<Vec<Tool>, CoreError> {
        self.begin();
        match self.client.tools_by_age_group(age_group).await {
            Ok(tools) => {
                self.state.send_modify(|s| s.loading = false);
                Ok(tools)
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Fetch the saved entries for a tool, replacing the held log.
    pub async fn load_tool_data(&self, tool_id: &EntityId) -> Result<Vec<ToolData>, CoreError> {
        self.begin();
        match self.client.tool_data(tool_id).await {
            Ok(entries) => {
                self.state.send_modify(|s| {
                    s.tool_data = entries.clone();
                    s.loading = false;
                });
                Ok(entries)
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Save a new entry and append it to the held log.
    pub async fn save_tool_data(
        &self,
        tool_id: &EntityId,
        payload: &serde_json::Value,
    ) -> Result<ToolData, CoreError> {
        self.begin();
        match self.client.save_tool_data(tool_id, payload).await {
            Ok(entry) => {
                self.state.send_modify(|s| {
                    s.tool_data.push(entry.clone());
                    s.loading = false;
                });
                Ok(entry)
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    fn begin(&self) {
        self.state.send_modify(|s| {
            s.loading = true;
            s.error = None;
        });
    }

    fn fail(&self, err: ApiError) -> CoreError {
        let err = CoreError::from(err);
        self.state.send_modify(|s| {
            s.loading = false;
            s.error = Some(err.message());
        });
        err
    }
}
