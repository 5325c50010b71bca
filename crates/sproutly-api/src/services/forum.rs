// Community forum endpoints
//
// Forums and posts are separate resource roots: posts are created under
// their forum (`forums/{id}/posts`) but addressed top-level afterwards
// (`posts/{id}`).

use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::model::{
    Comment, CommentQuery, EntityId, Forum, NewComment, NewForum, NewPost, Post, PostQuery,
    VoteKind,
};

impl ApiClient {
    /// List all forums.
    ///
    /// `GET forums`
    pub async fn list_forums(&self) -> Result<Vec<Forum>, Error> {
        debug!("listing forums");
        self.get("forums").await
    }

    /// Fetch a single forum.
    ///
    /// `GET forums/{id}`
    pub async fn forum_by_id(&self, id: &EntityId) -> Result<Forum, Error> {
        debug!(%id, "fetching forum");
        self.get(&format!("forums/{id}")).await
    }

    /// List posts in a forum, in server order.
    ///
    /// `GET forums/{id}/posts`
    pub async fn forum_posts(
        &self,
        forum_id: &EntityId,
        query: &PostQuery,
    ) -> Result<Vec<Post>, Error> {
        query.validate()?;
        debug!(%forum_id, "listing forum posts");
        self.get_with(&format!("forums/{forum_id}/posts"), query).await
    }

    /// Create a post in a forum.
    ///
    /// `POST forums/{id}/posts`
    pub async fn create_post(
        &self,
        forum_id: &EntityId,
        post: &NewPost,
    ) -> Result<Post, Error> {
        if post.title.trim().is_empty() {
            return Err(Error::Validation {
                message: "post title is required".into(),
            });
        }
        debug!(%forum_id, title = %post.title, "creating post");
        self.post(&format!("forums/{forum_id}/posts"), post).await
    }

    /// Fetch a single post.
    ///
    /// `GET posts/{id}`
    pub async fn post_by_id(&self, id: &EntityId) -> Result<Post, Error> {
        debug!(%id, "fetching post");
        self.get(&format!("posts/{id}")).await
    }

    /// List comments on a post, in server order.
    ///
    /// `GET posts/{id}/comments`
    pub async fn post_comments(
        &self,
        post_id: &EntityId,
        query: &CommentQuery,
    ) -> Result<Vec<Comment>, Error> {
        query.validate()?;
        debug!(%post_id, "listing comments");
        self.get_with(&format!("posts/{post_id}/comments"), query).await
    }

    /// Add a comment to a post.
    ///
    /// `POST posts/{id}/comments`
    pub async fn add_comment(
        &self,
        post_id: &EntityId,
        comment: &NewComment,
    ) -> Result<Comment, Error> {
        if comment.content.trim().is_empty() {
            return Err(Error::Validation {
                message: "comment text is required".into(),
            });
        }
        debug!(%post_id, "adding comment");
        self.post(&format!("posts/{post_id}/comments"), comment).await
    }

    /// Vote on a post. Returns the post with its updated tally.
    ///
    /// `PUT posts/{id}/vote` with `{"voteType": "up" | "down"}`
    pub async fn vote_post(&self, post_id: &EntityId, vote: VoteKind) -> Result<Post, Error> {
        debug!(%post_id, %vote, "voting on post");
        self.put(
            &format!("posts/{post_id}/vote"),
            &serde_json::json!({ "voteType": vote }),
        )
        .await
    }

    // ── Moderation surface ───────────────────────────────────────────
    // No in-scope store exposes these; they complete the backend contract.

    /// Create a forum (admin only).
    ///
    /// `POST forums`
    pub async fn create_forum(&self, forum: &NewForum) -> Result<Forum, Error> {
        debug!(name = %forum.name, "creating forum");
        self.post("forums", forum).await
    }

    /// Update a forum (admin only).
    ///
    /// `PUT forums/{id}`
    pub async fn update_forum(&self, id: &EntityId, forum: &NewForum) -> Result<Forum, Error> {
        debug!(%id, "updating forum");
        self.put(&format!("forums/{id}"), forum).await
    }

    /// Edit a post.
    ///
    /// `PUT posts/{id}`
    pub async fn update_post(&self, id: &EntityId, post: &NewPost) -> Result<Post, Error> {
        debug!(%id, "updating post");
        self.put(&format!("posts/{id}"), post).await
    }

    /// Delete a post.
    ///
    /// `DELETE posts/{id}`
    pub async fn delete_post(&self, id: &EntityId) -> Result<(), Error> {
        debug!(%id, "deleting post");
        let _: serde_json::Value = self.delete(&format!("posts/{id}")).await?;
        Ok(())
    }
}
