// Notification store
//
// Holds the feed plus a derived unread counter, adjusted incrementally
// on every mutation path instead of recomputed. The invariant: the
// counter always equals the number of held notifications with
// `read == false`. Deleting a read item must not decrement; deleting an
// unread one decrements, floored at zero.

use std::sync::Arc;

use tokio::sync::watch;

use sproutly_api::model::{EntityId, Notification};
use sproutly_api::{ApiClient, Error as ApiError};

use crate::error::CoreError;

/// Reactive notification state.
#[derive(Debug, Clone, Default)]
pub struct NotificationState {
    pub notifications: Vec<Notification>,
    /// Derived: count of held notifications with `read == false`.
    pub unread_count: usize,
    pub loading: bool,
    pub error: Option<String>,
}

/// State container for the per-user notification feed.
pub struct NotificationStore {
    client: Arc<ApiClient>,
    state: watch::Sender<NotificationState>,
}

impl NotificationStore {
    pub fn new(client: Arc<ApiClient>) -> Self {
        let (state, _) = watch::channel(NotificationState::default());
        Self { client, state }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> NotificationState {
        self.state.borrow().clone()
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<NotificationState> {
        self.state.subscribe()
    }

    /// Fetch the feed and recompute the unread counter from it.
    pub async fn refresh(&self) -> Result<Vec<Notification>, CoreError> {
        self.begin();
        match self.client.notifications().await {
            Ok(notifications) => {
                let unread = notifications.iter().filter(|n| !n.read).count();
                self.state.send_modify(|s| {
                    s.notifications = notifications.clone();
                    s.unread_count = unread;
                    s.loading = false;
                });
                Ok(notifications)
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Mark one notification as read. The counter drops only when the
    /// item actually transitions from unread to read.
    pub async fn mark_read(&self, id: &EntityId) -> Result<Notification, CoreError> {
        match self.client.mark_notification_read(id).await {
            Ok(updated) => {
                self.state.send_modify(|s| {
                    for n in &mut s.notifications {
                        if n.id == *id && !n.read {
                            n.read = true;
                            s.unread_count = s.unread_count.saturating_sub(1);
                        }
                    }
                });
                Ok(updated)
            }
            Err(e) => Err(self.fail_inline(e)),
        }
    }

    /// Mark everything as read. Idempotent: with nothing unread this is
    /// a no-op that leaves the counter at zero.
    pub async fn mark_all_read(&self) -> Result<(), CoreError> {
        match self.client.mark_all_notifications_read().await {
            Ok(()) => {
                self.state.send_modify(|s| {
                    for n in &mut s.notifications {
                        n.read = true;
                    }
                    s.unread_count = 0;
                });
                Ok(())
            }
            Err(e) => Err(self.fail_inline(e)),
        }
    }

    /// Delete a notification. Decrements the counter only when the
    /// removed item was unread.
    pub async fn delete(&self, id: &EntityId) -> Result<(), CoreError> {
        match self.client.delete_notification(id).await {
            Ok(()) => {
                self.state.send_modify(|s| {
                    let was_unread = s
                        .notifications
                        .iter()
                        .find(|n| n.id == *id)
                        .is_some_and(|n| !n.read);
                    s.notifications.retain(|n| n.id != *id);
                    if was_unread {
                        s.unread_count = s.unread_count.saturating_sub(1);
                    }
                });
                Ok(())
            }
            Err(e) => Err(self.fail_inline(e)),
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

    /// Mutation failure: record the message without touching `loading` --
    /// mark/delete render inline, not behind a spinner.
    fn fail_inline(&self, err: ApiError) -> CoreError {
        let err = CoreError::from(err);
        self.state
            .send_modify(|s| s.error = Some(err.message()));
        err
    }
}
