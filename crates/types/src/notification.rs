//! Notification records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{NotificationId, UserId, WorldId};

/// Kind of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationType {
    /// Incoming friend request.
    #[serde(rename = "friendRequest")]
    FriendRequest,
    /// Invitation to an instance.
    #[serde(rename = "invite")]
    Invite,
    /// Response to an invitation.
    #[serde(rename = "inviteResponse")]
    InviteResponse,
    /// Plain message.
    #[serde(rename = "message")]
    Message,
    /// Request to be invited.
    #[serde(rename = "requestInvite")]
    RequestInvite,
    /// Response to an invite request.
    #[serde(rename = "requestInviteResponse")]
    RequestInviteResponse,
    /// Vote-to-kick ballot.
    #[serde(rename = "votetokick")]
    VoteToKick,
}

/// A received notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// When the notification was created.
    #[serde(rename = "created_at")]
    pub created_at: DateTime<Utc>,
    /// Type-dependent payload. Over REST this arrives as a JSON-encoded
    /// string that must be decoded a second time.
    pub details: String,
    /// Notification ID.
    pub id: String,
    /// Message text.
    pub message: String,
    /// Recipient's user ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiver_user_id: Option<UserId>,
    /// Whether the notification was seen. Absent over the websocket API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seen: Option<bool>,
    /// Sender's user ID.
    pub sender_user_id: UserId,
    /// Sender's login name. No longer returned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_username: Option<String>,
    /// Kind of notification.
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
}

/// A notification as seen by its sender.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentNotification {
    /// When the notification was created.
    #[serde(rename = "created_at")]
    pub created_at: DateTime<Utc>,
    /// Type-dependent payload.
    pub details: serde_json::Value,
    /// Notification ID.
    pub id: String,
    /// Message text.
    pub message: String,
    /// Recipient's user ID.
    pub receiver_user_id: UserId,
    /// Sender's user ID.
    pub sender_user_id: UserId,
    /// Sender's login name. No longer returned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_username: Option<String>,
    /// Kind of notification.
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
}

/// Decoded `details` of an `invite` notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationDetailInvite {
    /// Message attached to the invite.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invite_message: Option<String>,
    /// World being invited to.
    pub world_id: WorldId,
    /// Name of that world.
    pub world_name: String,
}

/// Decoded `details` of an `inviteResponse` notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationDetailInviteResponse {
    /// The invite being responded to.
    pub in_response_to: NotificationId,
    /// Response message.
    pub response_message: String,
}

/// Decoded `details` of a `requestInvite` notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationDetailRequestInvite {
    /// Requester's platform.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    /// Message chosen from the requester's message slots.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_message: Option<String>,
}

/// Decoded `details` of a `requestInviteResponse` notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationDetailRequestInviteResponse {
    /// The request being responded to.
    pub in_response_to: NotificationId,
    /// Message chosen from the responder's message slots.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_message: Option<String>,
}

/// Decoded `details` of a `votetokick` notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationDetailVoteToKick {
    /// Who started the vote.
    pub initiator_user_id: UserId,
    /// Who the vote targets.
    pub user_to_kick_id: UserId,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_notification_type_wire_strings() {
        assert_eq!(
            serde_json::to_string(&NotificationType::FriendRequest).unwrap(),
            "\"friendRequest\""
        );
        assert_eq!(
            serde_json::from_str::<NotificationType>("\"votetokick\"").unwrap(),
            NotificationType::VoteToKick
        );
    }

    #[test]
    fn test_notification_details_is_double_encoded() {
        let json = r#"{
            "created_at": "2023-04-01T12:00:00.000Z",
            "details": "{\"worldId\":\"wrld_1\",\"worldName\":\"Hangout\"}",
            "id": "not_1",
            "message": "invited you",
            "senderUserId": "usr_2",
            "type": "invite"
        }"#;
        let notification: Notification = serde_json::from_str(json).unwrap();
        let details: NotificationDetailInvite =
            serde_json::from_str(&notification.details).unwrap();
        assert_eq!(details.world_name, "Hangout");
    }
}
