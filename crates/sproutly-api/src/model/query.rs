// ── Typed list-call options ──
//
// Each list endpoint takes an explicit options struct instead of a loose
// parameter bag. Structs serialize straight into the query string;
// `validate()` runs before anything is transmitted.
//
// The sort grammar (`-createdAt` etc.) is the backend's, versioned with
// the server -- the enum below is the full set of values this client
// will emit.

use serde::Serialize;

use crate::error::Error;

/// Sort orders accepted by the post-listing endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PostSort {
    /// `-createdAt`: newest posts first. The backend default.
    #[serde(rename = "-createdAt")]
    NewestFirst,
    /// `createdAt`: oldest posts first.
    #[serde(rename = "createdAt")]
    OldestFirst,
    /// `-votes`: highest tally first.
    #[serde(rename = "-votes")]
    MostVotes,
}

/// Options for content listing endpoints.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentQuery {
    #[serde(skip_serializing_if = "Option::is_none", rename = "type")]
    pub kind: Option<super::content::ContentKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

/// Options for listing posts in a forum.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<PostSort>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

/// Options for listing comments on a post.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

fn check_positive(field: &str, value: Option<u32>) -> Result<(), Error> {
    match value {
        Some(0) => Err(Error::Validation {
            message: format!("{field} must be at least 1"),
        }),
        _ => Ok(()),
    }
}

impl ContentQuery {
    pub fn validate(&self) -> Result<(), Error> {
        check_positive("limit", self.limit)?;
        check_positive("page", self.page)
    }
}

impl PostQuery {
    pub fn validate(&self) -> Result<(), Error> {
        check_positive("limit", self.limit)?;
        check_positive("page", self.page)
    }
}

impl CommentQuery {
    pub fn validate(&self) -> Result<(), Error> {
        check_positive("limit", self.limit)?;
        check_positive("page", self.page)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn post_sort_emits_backend_grammar() {
        assert_eq!(
            serde_json::to_string(&PostSort::NewestFirst).unwrap(),
            "\"-createdAt\""
        );
        assert_eq!(
            serde_json::to_string(&PostSort::MostVotes).unwrap(),
            "\"-votes\""
        );
    }

    #[test]
    fn zero_limit_is_rejected_before_transmission() {
        let query = PostQuery {
            limit: Some(0),
            ..PostQuery::default()
        };
        assert!(matches!(query.validate(), Err(Error::Validation { .. })));
    }

    #[test]
    fn empty_query_serializes_to_nothing() {
        let query = ContentQuery::default();
        assert_eq!(serde_json::to_value(&query).unwrap(), serde_json::json!({}));
    }
}
