// Notification feed endpoints

use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::model::{EntityId, Notification};

impl ApiClient {
    /// List the signed-in user's notifications, in server order.
    ///
    /// `GET notifications`
    pub async fn notifications(&self) -> Result<Vec<Notification>, Error> {
        debug!("listing notifications");
        self.get("notifications").await
    }

    /// Mark one notification as read. Returns the updated record.
    ///
    /// `PUT notifications/{id}/read`
    pub async fn mark_notification_read(&self, id: &EntityId) -> Result<Notification, Error> {
        debug!(%id, "marking notification read");
        self.put(&format!("notifications/{id}/read"), &serde_json::json!({}))
            .await
    }

    /// Mark every notification as read. Safe to call with nothing unread.
    ///
    /// `PUT notifications/read-all`
    pub async fn mark_all_notifications_read(&self) -> Result<(), Error> {
        debug!("marking all notifications read");
        let _: serde_json::Value = self
            .put("notifications/read-all", &serde_json::json!({}))
            .await?;
        Ok(())
    }

    /// Delete a notification.
    ///
    /// `DELETE notifications/{id}`
    pub async fn delete_notification(&self, id: &EntityId) -> Result<(), Error> {
        debug!(%id, "deleting notification");
        let _: serde_json::Value = self.delete(&format!("notifications/{id}")).await?;
        Ok(())
    }
}
