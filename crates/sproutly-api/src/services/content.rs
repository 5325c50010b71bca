// Editorial content endpoints
//
// Read surface for articles, guides, and expert posts, plus the admin
// mutations (contract-complete; no in-scope store calls them).

use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::model::{AgeGroup, ContentItem, ContentQuery, EntityId, NewContent};

impl ApiClient {
    /// List content with optional filters.
    ///
    /// `GET content`
    pub async fn list_content(&self, query: &ContentQuery) -> Result<Vec<ContentItem>, Error> {
        query.validate()?;
        debug!("listing content");
        self.get_with("content", query).await
    }

    /// Fetch a single content item by id.
    ///
    /// `GET content/{id}`
    pub async fn content_by_id(&self, id: &EntityId) -> Result<ContentItem, Error> {
        debug!(%id, "fetching content");
        self.get(&format!("content/{id}")).await
    }

    /// Fetch a single content item by slug.
    ///
    /// `GET content/slug/{slug}`
    pub async fn content_by_slug(&self, slug: &str) -> Result<ContentItem, Error> {
        debug!(slug, "fetching content by slug");
        self.get(&format!("content/slug/{slug}")).await
    }

    /// List content for one age segment.
    ///
    /// `GET content/age/{ageGroup}`
    pub async fn content_by_age_group(
        &self,
        age_group: AgeGroup,
        query: &ContentQuery,
    ) -> Result<Vec<ContentItem>, Error> {
        query.validate()?;
        debug!(%age_group, "listing content by age group");
        self.get_with(&format!("content/age/{age_group}"), query).await
    }

    /// Full-text search over content.
    ///
    /// `GET content/search?q={query}`
    pub async fn search_content(&self, q: &str) -> Result<Vec<ContentItem>, Error> {
        if q.trim().is_empty() {
            return Err(Error::Validation {
                message: "search query is required".into(),
            });
        }
        debug!(q, "searching content");
        self.get_with("content/search", &[("q", q)]).await
    }

    /// List the editorially featured items.
    ///
    /// `GET content/featured`
    pub async fn featured_content(&self) -> Result<Vec<ContentItem>, Error> {
        debug!("listing featured content");
        self.get("content/featured").await
    }

    // ── Admin surface ────────────────────────────────────────────────

    /// Create a content item (admin only).
    ///
    /// `POST content`
    pub async fn create_content(&self, item: &NewContent) -> Result<ContentItem, Error> {
        debug!(title = %item.title, "creating content");
        self.post("content", item).await
    }

    /// Replace a content item (admin only).
    ///
    /// `PUT content/{id}`
    pub async fn update_content(
        &self,
        id: &EntityId,
        item: &NewContent,
    ) -> Result<ContentItem, Error> {
        debug!(%id, "updating content");
        self.put(&format!("content/{id}"), item).await
    }

    /// Delete a content item (admin only).
    ///
    /// `DELETE content/{id}`
    pub async fn delete_content(&self, id: &EntityId) -> Result<(), Error> {
        debug!(%id, "deleting content");
        let _: serde_json::Value = self.delete(&format!("content/{id}")).await?;
        Ok(())
    }
}
