//! Invite operations and the editable invite message slots.

use reqwest::Method;
use vrchat_types::{
    InviteMessage, InviteMessageType, Notification, NotificationId, SentNotification, UserId,
    WorldId,
};

use crate::client::Client;
use crate::error::Result;

impl Client {
    /// Invites a user to an instance.
    ///
    /// `POST /invite/{userId}`
    pub async fn invite_user(&self, user_id: &UserId) -> Result<SentNotification> {
        self.request(Method::POST, &format!("/invite/{user_id}"), &[])
            .await
    }

    /// Sends the caller an invite to an instance.
    ///
    /// `POST /invite/myself/to/{worldId}:{instanceId}`
    pub async fn invite_myself_to(
        &self,
        world_id: &WorldId,
        instance_id: &str,
    ) -> Result<SentNotification> {
        self.request(
            Method::POST,
            &format!("/invite/myself/to/{world_id}:{instance_id}"),
            &[],
        )
        .await
    }

    /// Asks a user for an invite to wherever they are.
    ///
    /// `POST /requestInvite/{userId}`
    pub async fn request_invite(&self, user_id: &UserId) -> Result<Notification> {
        self.request(Method::POST, &format!("/requestInvite/{user_id}"), &[])
            .await
    }

    /// Responds to an invite or invite request.
    ///
    /// `POST /invite/{notificationId}/response`
    pub async fn respond_invite(&self, notification_id: &NotificationId) -> Result<Notification> {
        self.request(
            Method::POST,
            &format!("/invite/{notification_id}/response"),
            &[],
        )
        .await
    }

    /// Lists a message slot table.
    ///
    /// `GET /message/{userId}/{messageType}`
    pub async fn get_invite_messages(
        &self,
        user_id: &UserId,
        message_type: InviteMessageType,
    ) -> Result<Vec<InviteMessage>> {
        self.request(Method::GET, &format!("/message/{user_id}/{message_type}"), &[])
            .await
    }

    /// Resets a message slot to its default text.
    ///
    /// `DELETE /message/{userId}/{messageType}/{slot}`
    pub async fn reset_invite_message(
        &self,
        user_id: &UserId,
        message_type: InviteMessageType,
        slot: i64,
    ) -> Result<Vec<InviteMessage>> {
        self.request(
            Method::DELETE,
            &format!("/message/{user_id}/{message_type}/{slot}"),
            &[],
        )
        .await
    }

    /// Fetches one message slot.
    ///
    /// `GET /message/{userId}/{messageType}/{slot}`
    pub async fn get_invite_message(
        &self,
        user_id: &UserId,
        message_type: InviteMessageType,
        slot: i64,
    ) -> Result<InviteMessage> {
        self.request(
            Method::GET,
            &format!("/message/{user_id}/{message_type}/{slot}"),
            &[],
        )
        .await
    }

    /// Edits one message slot. Slots can only be edited once per hour.
    ///
    /// `PUT /message/{userId}/{messageType}/{slot}`
    pub async fn update_invite_message(
        &self,
        user_id: &UserId,
        message_type: InviteMessageType,
        slot: i64,
    ) -> Result<Vec<InviteMessage>> {
        self.request(
            Method::PUT,
            &format!("/message/{user_id}/{message_type}/{slot}"),
            &[],
        )
        .await
    }
}
