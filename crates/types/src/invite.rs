//! Invites and the editable invite message slots.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::UnknownWireValue;
use crate::ids::{InstanceId, InviteMessageId};

/// Which of the four message slot tables an operation addresses. Appears as
/// a literal path segment in the `/message` endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InviteMessageType {
    /// Messages attached to outgoing invites.
    Message,
    /// Responses to incoming invites.
    Response,
    /// Messages attached to invite requests.
    Request,
    /// Responses to invite requests.
    RequestResponse,
}

impl InviteMessageType {
    /// Returns the wire string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Message => "message",
            Self::Response => "response",
            Self::Request => "request",
            Self::RequestResponse => "requestResponse",
        }
    }
}

impl fmt::Display for InviteMessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InviteMessageType {
    type Err = UnknownWireValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "message" => Ok(Self::Message),
            "response" => Ok(Self::Response),
            "request" => Ok(Self::Request),
            "requestResponse" => Ok(Self::RequestResponse),
            other => Err(UnknownWireValue::new("invite message type", other)),
        }
    }
}

/// One editable message slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InviteMessage {
    /// Whether the slot can currently be edited.
    pub can_be_updated: bool,
    /// Slot record ID.
    pub id: InviteMessageId,
    /// Message text.
    pub message: String,
    /// Which table the slot belongs to.
    pub message_type: InviteMessageType,
    /// Minutes until the slot may be edited again; 60 after an update.
    pub remaining_cooldown_minutes: i64,
    /// Slot index.
    pub slot: i64,
    /// When the slot was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Body for `POST /invite/{userId}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InviteRequest {
    /// Instance to invite the user to.
    pub instance_id: InstanceId,
    /// Message slot to attach.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_slot: Option<i64>,
}

/// Body for `POST /requestInvite/{userId}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RequestInviteRequest {
    /// Message slot to attach.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_slot: Option<i64>,
}

/// Body for `POST /invite/{notificationId}/response`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InviteResponse {
    /// Response message slot to attach.
    pub response_slot: i64,
}

/// Body for `PUT /message/{userId}/{messageType}/{slot}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateInviteMessageRequest {
    /// New message text.
    pub message: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_invite_message_type_path_segments() {
        assert_eq!(InviteMessageType::Message.to_string(), "message");
        assert_eq!(
            InviteMessageType::RequestResponse.to_string(),
            "requestResponse"
        );
    }

    #[test]
    fn test_invite_request_skips_unset_slot() {
        let body = InviteRequest {
            instance_id: "wrld_1:12345".into(),
            message_slot: None,
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"instanceId":"wrld_1:12345"}"#
        );
    }
}
