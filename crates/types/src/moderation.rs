//! Player moderation records (mute, block, interaction toggles).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{PlayerModerationId, UserId};

/// Kind of moderation applied to another player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerModerationType {
    /// Mute their voice.
    #[serde(rename = "mute")]
    Mute,
    /// Undo a mute.
    #[serde(rename = "unmute")]
    Unmute,
    /// Block them entirely.
    #[serde(rename = "block")]
    Block,
    /// Undo a block.
    #[serde(rename = "unblock")]
    Unblock,
    /// Enable avatar interactions from them.
    #[serde(rename = "interactOn")]
    InteractOn,
    /// Disable avatar interactions from them.
    #[serde(rename = "interactOff")]
    InteractOff,
}

/// One moderation the caller has applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerModeration {
    /// When the moderation was created.
    pub created: DateTime<Utc>,
    /// Moderation record ID.
    pub id: PlayerModerationId,
    /// Display name of the moderating user.
    pub source_display_name: String,
    /// ID of the moderating user.
    pub source_user_id: UserId,
    /// Display name of the moderated user.
    pub target_display_name: String,
    /// ID of the moderated user.
    pub target_user_id: UserId,
    /// Kind of moderation.
    #[serde(rename = "type")]
    pub moderation_type: PlayerModerationType,
}

/// Body for `POST /auth/user/playermoderations`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModerateUserRequest {
    /// User to moderate.
    pub moderated: UserId,
    /// Kind of moderation to apply.
    #[serde(rename = "type")]
    pub moderation_type: PlayerModerationType,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_moderation_type_camel_case_variants() {
        assert_eq!(
            serde_json::to_string(&PlayerModerationType::InteractOff).unwrap(),
            "\"interactOff\""
        );
        assert_eq!(
            serde_json::from_str::<PlayerModerationType>("\"unblock\"").unwrap(),
            PlayerModerationType::Unblock
        );
    }

    #[test]
    fn test_moderate_user_request_body() {
        let body = ModerateUserRequest {
            moderated: "usr_2".into(),
            moderation_type: PlayerModerationType::Mute,
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"moderated":"usr_2","type":"mute"}"#
        );
    }
}
