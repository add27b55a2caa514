//! Instance records and the vocabularies describing their access rules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{GroupRoleId, InstanceId, UserId, WorldId};
use crate::user::LimitedUser;
use crate::world::World;

/// Access model of an instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstanceType {
    /// Open to everyone.
    Public,
    /// "Friends+": friends of anyone present may join.
    Hidden,
    /// Friends of the creator only.
    Friends,
    /// "Invite"/"Invite+": invitation required.
    Private,
    /// Owned by a group.
    Group,
}

/// Region an instance is hosted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstanceRegion {
    /// United States (west).
    Us,
    /// United States (east).
    Use,
    /// Europe.
    Eu,
    /// Japan.
    Jp,
    /// Region not reported.
    Unknown,
}

/// Networking (Photon) region; a superset of [`InstanceRegion`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    /// United States (west).
    Us,
    /// United States (east).
    Use,
    /// United States (west, secondary).
    Usw,
    /// Europe.
    Eu,
    /// Japan.
    Jp,
    /// Region not reported.
    Unknown,
}

/// Who may join a group-owned instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupAccessType {
    /// Anyone.
    Public,
    /// Group members plus their friends.
    Plus,
    /// Group members only.
    Members,
}

/// Occupant counts split by platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstancePlatforms {
    /// Players on Android.
    pub android: i64,
    /// Players on desktop.
    pub standalonewindows: i64,
}

/// A live instance of a world.
///
/// The `hidden`, `friends` and `private` fields are each present only when
/// the instance has the matching type, and hold the creator's user ID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instance {
    /// Whether the instance is currently active.
    pub active: bool,
    /// Whether invites may be requested.
    pub can_request_invite: bool,
    /// Hard player capacity.
    pub capacity: i64,
    /// Always the literal `unknown`.
    pub client_number: String,
    /// When the instance stops admitting players.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed_at: Option<DateTime<Utc>>,
    /// Creator ID on `friends` instances.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friends: Option<UserId>,
    /// Whether the instance is at capacity.
    pub full: bool,
    /// Access rule on group instances.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_access_type: Option<GroupAccessType>,
    /// Whether closing kicks remaining players.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hard_close: Option<bool>,
    /// Whether the caller would fit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_capacity_for_you: Option<bool>,
    /// Creator ID on `hidden` ("Friends+") instances.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<UserId>,
    /// Full instance ID (`worldId:instanceName`).
    pub id: InstanceId,
    /// Instance name portion of the ID.
    pub instance_id: String,
    /// Same as `id`.
    pub location: InstanceId,
    /// Current player count.
    #[serde(rename = "n_users")]
    pub n_users: i64,
    /// Instance name.
    pub name: String,
    /// Join nonce on non-public instances.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,
    /// Group ID for group instances, user ID otherwise, absent when public.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    /// Whether the instance persists while empty.
    pub permanent: bool,
    /// Networking region.
    pub photon_region: Region,
    /// Occupants by platform.
    pub platforms: InstancePlatforms,
    /// Creator ID on `private` ("Invite") instances.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private: Option<UserId>,
    /// Whether a join queue is enabled.
    pub queue_enabled: bool,
    /// Players currently queued.
    pub queue_size: i64,
    /// Soft player capacity.
    pub recommended_capacity: i64,
    /// Hosting region.
    pub region: InstanceRegion,
    /// Whether joining is restricted to certain group roles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_restricted: Option<bool>,
    /// Signed instance name for joining.
    pub secure_name: String,
    /// Short join code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
    /// Whether the strict join check is enabled.
    pub strict: bool,
    /// Usually the language tags of the people present.
    pub tags: Vec<String>,
    /// Access model.
    #[serde(rename = "type")]
    pub instance_type: InstanceType,
    /// Current player count.
    pub user_count: i64,
    /// Present on instances created by the caller.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<LimitedUser>>,
    /// The world this instance runs.
    pub world: World,
    /// World ID.
    pub world_id: WorldId,
}

/// Short and secure join names of an instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceShortName {
    /// Signed instance name.
    pub secure_name: String,
    /// Short join code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
}

/// Body for `POST /instances`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInstanceRequest {
    /// Makes invite instances "invite+".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_request_invite: Option<bool>,
    /// Stop admitting players after this time. Ignored for public instances.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed_at: Option<DateTime<Utc>>,
    /// Access rule for group instances.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_access_type: Option<GroupAccessType>,
    /// Whether closing should kick remaining players.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hard_close: Option<bool>,
    /// Restrict joining to invitees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invite_only: Option<bool>,
    /// Group ID for group instances, user ID otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    /// Enable the join queue.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub queue_enabled: Option<bool>,
    /// Hosting region.
    pub region: InstanceRegion,
    /// Roles allowed to join a members-only group instance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_ids: Option<Vec<GroupRoleId>>,
    /// Access model.
    #[serde(rename = "type")]
    pub instance_type: InstanceType,
    /// World to instantiate.
    pub world_id: WorldId,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_instance_type_wire_strings() {
        assert_eq!(
            serde_json::to_string(&InstanceType::Hidden).unwrap(),
            "\"hidden\""
        );
        assert_eq!(
            serde_json::from_str::<InstanceType>("\"group\"").unwrap(),
            InstanceType::Group
        );
    }

    #[test]
    fn test_create_instance_request_type_key() {
        let request = CreateInstanceRequest {
            can_request_invite: None,
            closed_at: None,
            group_access_type: None,
            hard_close: None,
            invite_only: None,
            owner_id: None,
            queue_enabled: None,
            region: InstanceRegion::Eu,
            role_ids: None,
            instance_type: InstanceType::Public,
            world_id: "wrld_1".into(),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"region":"eu","type":"public","worldId":"wrld_1"}"#);
    }

    #[test]
    fn test_instance_short_name_optional_short_name() {
        let parsed: InstanceShortName =
            serde_json::from_str(r#"{"secureName":"whatever-secure"}"#).unwrap();
        assert_eq!(parsed.short_name, None);
    }
}
