//! User records and account vocabularies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{AvatarId, InstanceId, UserId, WorldId};

/// Developer classification shown on a profile. Staff can hide theirs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeveloperType {
    /// Normal user.
    None,
    /// Meaning unknown; reserved by the platform.
    Trusted,
    /// Platform developer.
    Internal,
    /// Platform moderator.
    Moderator,
}

/// Coarse online state. Always `offline` when reading your own record
/// through `/auth/user`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserState {
    /// Logged out.
    Offline,
    /// Online on the website or API, but not in-game.
    Active,
    /// Online in-game.
    Online,
}

/// Self-chosen status, combining availability and privacy preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserStatus {
    /// Online and visible.
    #[serde(rename = "active")]
    Active,
    /// Anyone may join.
    #[serde(rename = "join me")]
    JoinMe,
    /// Joining requires asking first.
    #[serde(rename = "ask me")]
    AskMe,
    /// Do not disturb.
    #[serde(rename = "busy")]
    Busy,
    /// Appears offline.
    #[serde(rename = "offline")]
    Offline,
}

/// A profile badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    /// Only present on your own badges.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_at: Option<DateTime<Utc>>,
    /// Description text.
    pub badge_description: String,
    /// Badge ID, usually `bdg_<uuid>`.
    pub badge_id: String,
    /// Direct image URL.
    pub badge_image_url: String,
    /// Display name.
    pub badge_name: String,
    /// Only present on your own badges.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    /// Whether the badge is pinned to the profile.
    pub showcased: bool,
    /// Only present on your own badges.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A historical display name with the date it was replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PastDisplayName {
    /// The old display name.
    #[serde(rename = "displayName")]
    pub display_name: String,
    /// When the name changed.
    pub updated_at: DateTime<Utc>,
}

/// One entry of the account deletion request log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDeletionLog {
    /// When the request was made.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_time: Option<DateTime<Utc>>,
    /// When deletion will happen; standard is 14 days after the request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deletion_scheduled: Option<DateTime<Utc>>,
    /// Typically "Deletion requested" or "Deletion canceled".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Live presence block on your own user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUserPresence {
    /// Thumbnail of the avatar currently worn.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_thumbnail: Option<String>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Groups shown on the profile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<crate::ids::GroupId>>,
    /// Own user ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    /// Current instance name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
    /// An instance type, or an empty string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<String>,
    /// Whether the user is rejoining, as a string flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_rejoining: Option<String>,
    /// A platform identifier, or an empty string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    /// Profile picture override URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_pic_override: Option<String>,
    /// A user status, or an empty string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Instance currently being traveled to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub traveling_to_instance: Option<String>,
    /// World currently being traveled to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub traveling_to_world: Option<WorldId>,
    /// Current world.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub world: Option<WorldId>,
}

/// The authenticated account, as returned by `/auth/user`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    /// Version of the privacy agreement last accepted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accepted_privacy_version: Option<i64>,
    /// Version of the terms of service last accepted.
    #[serde(rename = "acceptedTOSVersion")]
    pub accepted_tos_version: i64,
    /// Scheduled deletion date, if a deletion was requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_deletion_date: Option<String>,
    /// History of deletion requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_deletion_log: Option<Vec<AccountDeletionLog>>,
    /// Friends currently active on the website.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_friends: Option<Vec<UserId>>,
    /// Whether others may clone this account's avatars.
    pub allow_avatar_copying: bool,
    /// Profile badges.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badges: Option<Vec<Badge>>,
    /// Profile bio text.
    pub bio: String,
    /// Profile links.
    pub bio_links: Vec<String>,
    /// Avatar currently worn.
    pub current_avatar: AvatarId,
    /// Asset URL of the current avatar.
    pub current_avatar_asset_url: String,
    /// Image URL of the current avatar; prefer `profile_pic_override` when set.
    pub current_avatar_image_url: String,
    /// Tags of the current avatar.
    pub current_avatar_tags: Vec<String>,
    /// Thumbnail URL of the current avatar.
    pub current_avatar_thumbnail_image_url: String,
    /// Account creation date (`YYYY-MM-DD`).
    #[serde(rename = "date_joined")]
    pub date_joined: String,
    /// Developer classification.
    pub developer_type: DeveloperType,
    /// Display name.
    pub display_name: String,
    /// Whether the account email is verified.
    pub email_verified: bool,
    /// Fallback avatar for incompatible platforms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_avatar: Option<AvatarId>,
    /// Always an empty array.
    pub friend_group_names: Vec<String>,
    /// Opaque friend key.
    pub friend_key: String,
    /// All friends' user IDs.
    pub friends: Vec<UserId>,
    /// Linked Google account details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_details: Option<serde_json::Value>,
    /// Linked Google account ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_id: Option<String>,
    /// Whether a birthday is set.
    pub has_birthday: bool,
    /// Whether an email is set.
    pub has_email: bool,
    /// Whether the game client was ever used.
    pub has_logged_in_from_client: bool,
    /// Whether an email change is pending confirmation.
    pub has_pending_email: bool,
    /// Whether content filter settings are hidden.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_content_filter_settings: Option<bool>,
    /// Home world.
    pub home_location: WorldId,
    /// Own user ID.
    pub id: UserId,
    /// Whether booping is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_booping_enabled: Option<bool>,
    /// Always false for the own record.
    pub is_friend: bool,
    /// Last website activity.
    #[serde(rename = "last_activity", default, skip_serializing_if = "Option::is_none")]
    pub last_activity: Option<DateTime<Utc>>,
    /// Last login time.
    #[serde(rename = "last_login")]
    pub last_login: DateTime<Utc>,
    /// Last mobile activity.
    #[serde(rename = "last_mobile")]
    pub last_mobile: DateTime<Utc>,
    /// Platform last used; can be any Unity build string.
    #[serde(rename = "last_platform")]
    pub last_platform: String,
    /// Obfuscated account email.
    pub obfuscated_email: String,
    /// Obfuscated pending email, if any.
    pub obfuscated_pending_email: String,
    /// Linked Oculus ID.
    pub oculus_id: String,
    /// Friends currently offline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offline_friends: Option<Vec<UserId>>,
    /// Friends currently online.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub online_friends: Option<Vec<UserId>>,
    /// Display name history.
    pub past_display_names: Vec<PastDisplayName>,
    /// Linked Pico ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pico_id: Option<String>,
    /// Live presence block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presence: Option<CurrentUserPresence>,
    /// Profile picture override URL.
    pub profile_pic_override: String,
    /// Thumbnail of the profile picture override.
    pub profile_pic_override_thumbnail: String,
    /// Self-chosen pronouns.
    pub pronouns: String,
    /// Coarse online state.
    pub state: UserState,
    /// Self-chosen status.
    pub status: UserStatus,
    /// Status message.
    pub status_description: String,
    /// Whether the status was never changed.
    pub status_first_time: bool,
    /// Recent status messages.
    pub status_history: Vec<String>,
    /// Linked Steam account details.
    pub steam_details: serde_json::Value,
    /// Linked Steam ID.
    pub steam_id: String,
    /// Account tags.
    pub tags: Vec<String>,
    /// Whether two-factor auth is enabled.
    pub two_factor_auth_enabled: bool,
    /// When two-factor auth was enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub two_factor_auth_enabled_date: Option<DateTime<Utc>>,
    /// Whether marketing mail is declined.
    pub unsubscribe: bool,
    /// Last record update.
    #[serde(rename = "updated_at", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Profile icon URL.
    pub user_icon: String,
    /// Preferred language name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_language: Option<String>,
    /// Preferred language code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_language_code: Option<String>,
    /// Login name. No longer returned for other users.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Linked Vive ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vive_id: Option<String>,
}

/// Another account's public record, as returned by `/users/{userId}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Whether others may clone this account's avatars.
    pub allow_avatar_copying: bool,
    /// Profile badges.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badges: Option<Vec<Badge>>,
    /// Profile bio text.
    pub bio: String,
    /// Profile links.
    pub bio_links: Vec<String>,
    /// Image URL of the current avatar; prefer `profile_pic_override` when set.
    pub current_avatar_image_url: String,
    /// Tags of the current avatar.
    pub current_avatar_tags: Vec<String>,
    /// Thumbnail URL of the current avatar.
    pub current_avatar_thumbnail_image_url: String,
    /// Account creation date (`YYYY-MM-DD`).
    #[serde(rename = "date_joined")]
    pub date_joined: String,
    /// Developer classification.
    pub developer_type: DeveloperType,
    /// Display name; changing it is cooldown-restricted.
    pub display_name: String,
    /// Their friend key, or empty when not friends.
    pub friend_key: String,
    /// Pending friend request direction, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friend_request_status: Option<String>,
    /// User ID.
    pub id: UserId,
    /// Current instance, `offline`, or `private`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<InstanceId>,
    /// Whether this user is a friend.
    pub is_friend: bool,
    /// A date-time or an empty string.
    #[serde(rename = "last_activity")]
    pub last_activity: String,
    /// A date-time or an empty string.
    #[serde(rename = "last_login")]
    pub last_login: String,
    /// Platform last used; can be any Unity build string.
    #[serde(rename = "last_platform")]
    pub last_platform: String,
    /// Current world, or `offline` for non-friends.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<WorldId>,
    /// Private note set on this user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Current platform.
    pub platform: String,
    /// Profile picture override URL.
    pub profile_pic_override: String,
    /// Thumbnail of the profile picture override.
    pub profile_pic_override_thumbnail: String,
    /// Self-chosen pronouns.
    pub pronouns: String,
    /// Coarse online state.
    pub state: UserState,
    /// Self-chosen status.
    pub status: UserStatus,
    /// Status message.
    pub status_description: String,
    /// Account tags.
    pub tags: Vec<String>,
    /// Instance currently being traveled to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub traveling_to_instance: Option<String>,
    /// Location currently being traveled to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub traveling_to_location: Option<String>,
    /// World currently being traveled to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub traveling_to_world: Option<String>,
    /// Profile icon URL.
    pub user_icon: String,
    /// Login name. No longer returned for other users.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Current world ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub world_id: Option<WorldId>,
}

/// Abbreviated user record used in lists (friends, search results).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitedUser {
    /// Profile bio text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Profile links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio_links: Option<Vec<String>>,
    /// Image URL of the current avatar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_avatar_image_url: Option<String>,
    /// Tags of the current avatar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_avatar_tags: Option<Vec<String>>,
    /// Thumbnail URL of the current avatar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_avatar_thumbnail_image_url: Option<String>,
    /// Developer classification.
    pub developer_type: DeveloperType,
    /// Display name.
    pub display_name: String,
    /// Fallback avatar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_avatar: Option<AvatarId>,
    /// Opaque friend key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friend_key: Option<String>,
    /// User ID.
    pub id: UserId,
    /// Whether this user is a friend.
    pub is_friend: bool,
    /// Platform last used; can be any Unity build string.
    #[serde(rename = "last_platform")]
    pub last_platform: String,
    /// Current location, if visible.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Profile picture override URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_pic_override: Option<String>,
    /// Self-chosen pronouns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronouns: Option<String>,
    /// Self-chosen status.
    pub status: UserStatus,
    /// Status message.
    pub status_description: String,
    /// Always empty in this shape.
    pub tags: Vec<String>,
    /// Profile icon URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_icon: Option<String>,
    /// Login name. No longer returned for other users.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

/// Whether a queried username or email is taken, from `/auth/exists`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserExists {
    /// Whether the username is valid and available.
    pub name_ok: bool,
    /// Whether a user already exists with that name or ID.
    pub user_exists: bool,
}

/// Friendship state between the caller and another user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendStatus {
    /// They sent the caller a friend request.
    pub incoming_request: bool,
    /// Already friends.
    pub is_friend: bool,
    /// The caller sent them a friend request.
    pub outgoing_request: bool,
}

/// Body of the TOTP verification request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwoFactorAuthCode {
    /// The six-digit one-time code.
    pub code: String,
}

/// Body of the email-OTP verification request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwoFactorEmailCode {
    /// The one-time code from the email.
    pub code: String,
}

/// Result of a TOTP or recovery-code verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verify2faResult {
    /// Whether the code was accepted.
    pub verified: bool,
}

/// Result of an email-OTP verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verify2faEmailResult {
    /// Whether the code was accepted.
    pub verified: bool,
}

/// Result of checking the current auth cookie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyAuthTokenResult {
    /// Whether the token is valid.
    pub ok: bool,
    /// The token that was checked.
    pub token: String,
}

/// Fields updatable on the own account via `PUT /users/{userId}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    /// Terms of service version being accepted.
    #[serde(
        rename = "acceptedTOSVersion",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub accepted_tos_version: Option<f64>,
    /// New bio text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// New profile links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio_links: Option<Vec<String>>,
    /// Birthday (`YYYY-MM-DD`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
    /// New account email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Toggle booping.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_booping_enabled: Option<bool>,
    /// New pronouns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronouns: Option<String>,
    /// New status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
    /// New status message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_description: Option<String>,
    /// New account tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Profile icon; must be a platform `/file/` URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_icon: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_user_status_wire_strings() {
        assert_eq!(
            serde_json::to_string(&UserStatus::JoinMe).unwrap(),
            "\"join me\""
        );
        assert_eq!(
            serde_json::from_str::<UserStatus>("\"ask me\"").unwrap(),
            UserStatus::AskMe
        );
    }

    #[test]
    fn test_developer_type_roundtrip() {
        for (variant, wire) in [
            (DeveloperType::None, "\"none\""),
            (DeveloperType::Trusted, "\"trusted\""),
            (DeveloperType::Internal, "\"internal\""),
            (DeveloperType::Moderator, "\"moderator\""),
        ] {
            assert_eq!(serde_json::to_string(&variant).unwrap(), wire);
            assert_eq!(serde_json::from_str::<DeveloperType>(wire).unwrap(), variant);
        }
    }

    #[test]
    fn test_user_exists_field_names() {
        let parsed: UserExists =
            serde_json::from_str(r#"{"nameOk":true,"userExists":false}"#).unwrap();
        assert!(parsed.name_ok);
        assert!(!parsed.user_exists);
    }

    #[test]
    fn test_update_user_request_skips_unset_fields() {
        let request = UpdateUserRequest {
            status_description: Some("exploring".to_string()),
            ..UpdateUserRequest::default()
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"statusDescription":"exploring"}"#);
    }
}
