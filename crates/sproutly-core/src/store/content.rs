// Editorial content store
//
// Caches per-age-group listings and the currently open item. Search and
// featured listings pass through: they toggle the flags and hand the
// results to the caller without writing them into state.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::watch;

use sproutly_api::model::{AgeGroup, ContentItem, ContentQuery, EntityId};
use sproutly_api::{ApiClient, Error as ApiError};

use crate::error::CoreError;

/// Reactive content state.
#[derive(Debug, Clone, Default)]
pub struct ContentState {
    /// Listings keyed by age segment, in server order.
    pub age_group_content: HashMap<AgeGroup, Vec<ContentItem>>,
    pub current_content: Option<ContentItem>,
    pub loading: bool,
    pub error: Option<String>,
}

/// State container for articles, guides, and expert posts.
pub struct ContentStore {
    client: Arc<ApiClient>,
    state: watch::Sender<ContentState>,
}

impl ContentStore {
    pub fn new(client: Arc<ApiClient>) -> Self {
        let (state, _) = watch::channel(ContentState::default());
        Self { client, state }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> ContentState {
        self.state.borrow().clone()
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<ContentState> {
        self.state.subscribe()
    }

    /// Fetch one age segment's listing and cache it.
    pub async fn load_age_group(
        &self,
        age_group: AgeGroup,
        query: &ContentQuery,
    ) -> Result<Vec<ContentItem>, CoreError> {
        self.begin();
        match self.client.content_by_age_group(age_group, query).await {
            Ok(items) => {
                self.state.send_modify(|s| {
                    s.age_group_content.insert(age_group, items.clone());
                    s.loading = false;
                });
                Ok(items)
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Fetch one item and make it the current selection.
    pub async fn load_content(&self, id: &EntityId) -> Result<ContentItem, CoreError> {
        self.begin();
        match self.client.content_by_id(id).await {
            Ok(item) => {
                self.state.send_modify(|s| {
                    s.current_content = Some(item.clone());
                    s.loading = false;
                });
                Ok(item)
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Full-text search. Results go to the caller, not into state.
    pub async fn search(&self, query: &str) -> Result<Vec<ContentItem>, CoreError> {
        self.begin();
        match self.client.search_content(query).await {
            Ok(items) => {
                self.state.send_modify(|s| s.loading = false);
                Ok(items)
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Featured items. Results go to the caller, not into state.
    pub async fn featured(&self) -> Result<Vec<ContentItem>, CoreError> {
        self.begin();
        match self.client.featured_content().await {
            Ok(items) => {
                self.state.send_modify(|s| s.loading = false);
                Ok(items)
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
