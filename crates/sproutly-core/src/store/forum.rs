// Forum store
//
// Holds the forum list, the open forum, its post listing, the open post,
// and that post's comments. Create-actions prepend to the in-memory
// collection instead of refetching; the vote action patches the updated
// post wherever it appears by id.

use std::sync::Arc;

use tokio::sync::watch;

use sproutly_api::model::{
    Comment, CommentQuery, EntityId, Forum, NewComment, NewPost, Post, PostQuery, VoteKind,
};
use sproutly_api::{ApiClient, Error as ApiError};

use crate::error::CoreError;

/// Reactive forum state.
#[derive(Debug, Clone, Default)]
pub struct ForumState {
    pub forums: Vec<Forum>,
    pub current_forum: Option<Forum>,
    pub posts: Vec<Post>,
    pub current_post: Option<Post>,
    pub comments: Vec<Comment>,
    pub loading: bool,
    pub error: Option<String>,
}

/// State container for the community discussion boards.
pub struct ForumStore {
    client: Arc<ApiClient>,
    state: watch::Sender<ForumState>,
}

impl ForumStore {
    pub fn new(client: Arc<ApiClient>) -> Self {
        let (state, _) = watch::channel(ForumState::default());
        Self { client, state }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> ForumState {
        self.state.borrow().clone()
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<ForumState> {
        self.state.subscribe()
    }

    /// Fetch all forums.
    pub async fn load_forums(&self) -> Result<Vec<Forum>, CoreError> {
        self.begin();
        match self.client.list_forums().await {
            Ok(forums) => {
                self.state.send_modify(|s| {
                    s.forums = forums.clone();
                    s.loading = false;
                });
                Ok(forums)
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Fetch one forum and make it the current selection.
    pub async fn load_forum(&self, id: &EntityId) -> Result<Forum, CoreError> {
        self.begin();
        match self.client.forum_by_id(id).await {
            Ok(forum) => {
                self.state.send_modify(|s| {
                    s.current_forum = Some(forum.clone());
                    s.loading = false;
                });
                Ok(forum)
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Fetch a forum's posts, replacing the held listing.
    pub async fn load_posts(
        &self,
        forum_id: &EntityId,
        query: &PostQuery,
    ) -> Result<Vec<Post>, CoreError> {
        self.begin();
        match self.client.forum_posts(forum_id, query).await {
            Ok(posts) => {
                self.state.send_modify(|s| {
                    s.posts = posts.clone();
                    s.loading = false;
                });
                Ok(posts)
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Create a post and prepend it to the held listing. The current
    /// post selection is left untouched.
    pub async fn create_post(
        &self,
        forum_id: &EntityId,
        post: &NewPost,
    ) -> Result<Post, CoreError> {
        self.begin();
        match self.client.create_post(forum_id, post).await {
            Ok(created) => {
                self.state.send_modify(|s| {
                    s.posts.insert(0, created.clone());
                    s.loading = false;
                });
                Ok(created)
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Fetch one post and make it the current selection.
    pub async fn load_post(&self, id: &EntityId) -> Result<Post, CoreError> {
        self.begin();
        match self.client.post_by_id(id).await {
            Ok(post) => {
                self.state.send_modify(|s| {
                    s.current_post = Some(post.clone());
                    s.loading = false;
                });
                Ok(post)
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Fetch a post's comments, replacing the held listing.
    pub async fn load_comments(
        &self,
        post_id: &EntityId,
        query: &CommentQuery,
    ) -> Result<Vec<Comment>, CoreError> {
        self.begin();
        match self.client.post_comments(post_id, query).await {
            Ok(comments) => {
                self.state.send_modify(|s| {
                    s.comments = comments.clone();
                    s.loading = false;
                });
                Ok(comments)
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Add a comment and prepend it to the held listing.
    pub async fn add_comment(
        &self,
        post_id: &EntityId,
        comment: &NewComment,
    ) -> Result<Comment, CoreError> {
        self.begin();
        match self.client.add_comment(post_id, comment).await {
            Ok(created) => {
                self.state.send_modify(|s| {
                    s.comments.insert(0, created.clone());
                    s.loading = false;
                });
                Ok(created)
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Vote on a post and patch the returned entity into every place it
    /// appears: the current selection (if it is this post) and the post
    /// listing (by id match). Does not toggle `loading` -- votes render
    /// inline, not behind a spinner.
    pub async fn vote(&self, post_id: &EntityId, vote: VoteKind) -> Result<Post, CoreError> {
        match self.client.vote_post(post_id, vote).await {
            Ok(updated) => {
                self.state.send_modify(|s| {
                    if s
                        .current_post
                        .as_ref()
                        .is_some_and(|p| p.id == updated.id)
                    {
                        s.current_post = Some(updated.clone());
                    }
                    for post in &mut s.posts {
                        if post.id == updated.id {
                            *post = updated.clone();
                        }
                    }
                });
                Ok(updated)
            }
            Err(e) => {
                let err = CoreError::from(e);
                self.state
                    .send_modify(|s| s.error = Some(err.message()));
                Err(err)
            }
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
