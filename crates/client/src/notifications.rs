//! Notification operations.

use reqwest::Method;
use vrchat_types::{Notification, NotificationId, SuccessEnvelope};

use crate::client::Client;
use crate::error::Result;
use crate::query::Pagination;

impl Client {
    /// Lists the account's notifications.
    ///
    /// `GET /auth/user/notifications`
    pub async fn get_notifications(&self, page: Pagination) -> Result<Vec<Notification>> {
        self.request(Method::GET, "/auth/user/notifications", &page.to_query())
            .await
    }

    /// Accepts a friend request notification.
    ///
    /// `PUT /auth/user/notifications/{notificationId}/accept`
    pub async fn accept_friend_request(
        &self,
        notification_id: &NotificationId,
    ) -> Result<SuccessEnvelope> {
        self.request(
            Method::PUT,
            &format!("/auth/user/notifications/{notification_id}/accept"),
            &[],
        )
        .await
    }

    /// Marks a notification as read.
    ///
    /// `PUT /auth/user/notifications/{notificationId}/see`
    pub async fn mark_notification_as_read(
        &self,
        notification_id: &NotificationId,
    ) -> Result<Notification> {
        self.request(
            Method::PUT,
            &format!("/auth/user/notifications/{notification_id}/see"),
            &[],
        )
        .await
    }

    /// Hides a notification.
    ///
    /// `PUT /auth/user/notifications/{notificationId}/hide`
    pub async fn delete_notification(
        &self,
        notification_id: &NotificationId,
    ) -> Result<Notification> {
        self.request(
            Method::PUT,
            &format!("/auth/user/notifications/{notification_id}/hide"),
            &[],
        )
        .await
    }

    /// Clears all notifications.
    ///
    /// `PUT /auth/user/notifications/clear`
    pub async fn clear_notifications(&self) -> Result<SuccessEnvelope> {
        self.request(Method::PUT, "/auth/user/notifications/clear", &[])
            .await
    }
}
