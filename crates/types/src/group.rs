//! Group records: membership, roles, galleries, posts, announcements and
//! audit logs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::UnknownWireValue;
use crate::ids::{
    FileId, GroupAnnouncementId, GroupAuditLogId, GroupGalleryId, GroupGalleryImageId, GroupId,
    GroupMemberId, GroupRoleId, InstanceId, NotificationId, UserId,
};
use crate::world::World;

/// The caller's relationship to a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupMemberStatus {
    /// No relationship.
    Inactive,
    /// Member.
    Member,
    /// Join request pending.
    Requested,
    /// Invited, not yet accepted.
    Invited,
    /// Banned from the group.
    Banned,
    /// The user blocked the group.
    Userblocked,
}

/// How new members get into a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupJoinState {
    /// Nobody can join.
    Closed,
    /// Invitation required.
    Invite,
    /// Join requests reviewed by moderators.
    Request,
    /// Anyone can join.
    Open,
}

/// Visibility of a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupPrivacy {
    /// Publicly listed.
    Default,
    /// Hidden from search and member lists.
    Private,
}

/// Preset role layout applied at group creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GroupRoleTemplate {
    /// Just a member role.
    Default,
    /// Managed roles, free joining.
    ManagedFree,
    /// Managed roles, invite-only.
    ManagedInvite,
    /// Managed roles, request-to-join.
    ManagedRequest,
}

/// Whether a membership is shown on the member's profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupUserVisibility {
    /// Shown to everyone.
    Visible,
    /// Hidden.
    Hidden,
    /// Shown to friends only.
    Friends,
}

/// Audience of a group post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupPostVisibility {
    /// Members only.
    Group,
    /// Everyone.
    Public,
}

/// Sort order for member listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupSearchSort {
    /// Oldest members first.
    #[serde(rename = "joinedAt:asc")]
    JoinedAtAsc,
    /// Newest members first.
    #[serde(rename = "joinedAt:desc")]
    JoinedAtDesc,
}

impl GroupSearchSort {
    /// Returns the wire string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::JoinedAtAsc => "joinedAt:asc",
            Self::JoinedAtDesc => "joinedAt:desc",
        }
    }
}

impl fmt::Display for GroupSearchSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GroupSearchSort {
    type Err = UnknownWireValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "joinedAt:asc" => Ok(Self::JoinedAtAsc),
            "joinedAt:desc" => Ok(Self::JoinedAtDesc),
            other => Err(UnknownWireValue::new("group member sort", other)),
        }
    }
}

/// Moderator decision on a join request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupJoinRequestAction {
    /// Admit the requester.
    Accept,
    /// Turn the requester away.
    Reject,
}

/// An image gallery belonging to a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GroupGallery {
    /// When the gallery was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Description text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Gallery ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<GroupGalleryId>,
    /// Whether only members may view it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub members_only: Option<bool>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Roles whose submissions are approved automatically.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_ids_to_auto_approve: Option<Vec<GroupRoleId>>,
    /// Roles allowed to manage the gallery.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_ids_to_manage: Option<Vec<GroupRoleId>>,
    /// Roles allowed to submit images.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_ids_to_submit: Option<Vec<GroupRoleId>>,
    /// Roles allowed to view the gallery.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_ids_to_view: Option<Vec<GroupRoleId>>,
    /// When the gallery was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// An image submitted to a group gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GroupGalleryImage {
    /// Whether the submission was approved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved: Option<bool>,
    /// When it was approved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_at: Option<DateTime<Utc>>,
    /// Who approved it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_by_user_id: Option<UserId>,
    /// When it was submitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Backing file ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_id: Option<FileId>,
    /// Gallery it belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gallery_id: Option<GroupGalleryId>,
    /// Group it belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<GroupId>,
    /// Image record ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<GroupGalleryImageId>,
    /// Direct image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Who submitted it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_by_user_id: Option<UserId>,
}

/// Abbreviated group record used in search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct LimitedGroup {
    /// Banner file ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner_id: Option<String>,
    /// Banner image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner_url: Option<String>,
    /// When the group was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Description text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Four-digit disambiguator shown after the short code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discriminator: Option<String>,
    /// Galleries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub galleries: Option<Vec<GroupGallery>>,
    /// Icon file ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_id: Option<String>,
    /// Icon image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    /// Group ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<GroupId>,
    /// Whether the group appears in search.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_searchable: Option<bool>,
    /// Member count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_count: Option<i64>,
    /// The caller's relationship to the group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub membership_status: Option<GroupMemberStatus>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Owner's user ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<UserId>,
    /// Group rules text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<String>,
    /// Six-character short code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_code: Option<String>,
    /// Group tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// The caller's own membership record embedded in a [`Group`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GroupMyMember {
    /// Display name of whoever accepted the join request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accepted_by_display_name: Option<String>,
    /// User ID of whoever accepted the join request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accepted_by_id: Option<UserId>,
    /// When the caller was banned, if ever.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banned_at: Option<String>,
    /// When the membership was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Group ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<GroupId>,
    /// Whether the caller has two-factor auth enabled.
    #[serde(rename = "has2FA", default, skip_serializing_if = "Option::is_none")]
    pub has_2fa: Option<bool>,
    /// Whether membership came from a purchase.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_joined_from_purchase: Option<bool>,
    /// Membership record ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<GroupMemberId>,
    /// Whether the caller represents the group in-game.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_representing: Option<bool>,
    /// Whether announcement notifications are on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_subscribed_to_announcements: Option<bool>,
    /// When the caller joined.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joined_at: Option<DateTime<Utc>>,
    /// When the caller last read a post.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_post_read_at: Option<DateTime<Utc>>,
    /// Management role IDs.
    #[serde(rename = "mRoleIds", default, skip_serializing_if = "Option::is_none")]
    pub m_role_ids: Option<Vec<String>>,
    /// Moderator notes about the caller.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager_notes: Option<String>,
    /// Membership status string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub membership_status: Option<String>,
    /// Permissions granted through roles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,
    /// Role IDs held.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_ids: Option<Vec<GroupRoleId>>,
    /// The caller's user ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    /// Profile visibility of the membership.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
}

/// A role within a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GroupRole {
    /// When the role was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Description text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Group the role belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<GroupId>,
    /// Role ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<GroupRoleId>,
    /// Whether the role grants management permissions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_management_role: Option<bool>,
    /// Whether members may assign the role to themselves.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_self_assignable: Option<bool>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Sort position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    /// Permissions the role grants.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,
    /// Whether the role is gated behind a purchase.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires_purchase: Option<bool>,
    /// Whether the role requires two-factor auth.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires_two_factor: Option<bool>,
    /// When the role was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A full group record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    /// Banner file ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner_id: Option<String>,
    /// Banner image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner_url: Option<String>,
    /// When the group was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Description text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Four-digit disambiguator shown after the short code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discriminator: Option<String>,
    /// Galleries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub galleries: Option<Vec<GroupGallery>>,
    /// Icon file ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_id: Option<String>,
    /// Icon image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    /// Group ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<GroupId>,
    /// Whether the group is verified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_verified: Option<bool>,
    /// How new members get in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub join_state: Option<GroupJoinState>,
    /// Languages spoken, as three-letter codes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<String>>,
    /// When the latest post was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_post_created_at: Option<DateTime<Utc>>,
    /// External links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<String>>,
    /// Member count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_count: Option<i64>,
    /// When the member count was last recomputed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_count_synced_at: Option<DateTime<Utc>>,
    /// The caller's relationship to the group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub membership_status: Option<GroupMemberStatus>,
    /// The caller's own membership record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub my_member: Option<GroupMyMember>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Members currently online.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub online_member_count: Option<i64>,
    /// Owner's user ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<UserId>,
    /// Visibility of the group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub privacy: Option<GroupPrivacy>,
    /// Roles; only returned when `includeRoles=true` is requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<GroupRole>>,
    /// Group rules text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<String>,
    /// Six-character short code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_code: Option<String>,
    /// Group tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Pending ownership transfer target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transfer_target_id: Option<UserId>,
    /// When the group was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Abbreviated user record embedded in member listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GroupMemberLimitedUser {
    /// Tags of the member's current avatar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_avatar_tags: Option<Vec<String>>,
    /// Thumbnail of the member's current avatar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_avatar_thumbnail_image_url: Option<String>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Profile icon URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    /// User ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    /// Profile picture override URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_pic_override: Option<String>,
    /// Thumbnail URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

/// A membership record from `/groups/{groupId}/members`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GroupMember {
    /// When the member was banned, if ever.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banned_at: Option<DateTime<Utc>>,
    /// When the membership was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Group ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<GroupId>,
    /// Whether membership came from a purchase.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_joined_from_purchase: Option<bool>,
    /// Membership record ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<GroupMemberId>,
    /// Whether the member shows the group above their name tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_representing: Option<bool>,
    /// Whether announcement notifications are on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_subscribed_to_announcements: Option<bool>,
    /// When the member joined.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joined_at: Option<DateTime<Utc>>,
    /// When the member last read a post.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_post_read_at: Option<DateTime<Utc>>,
    /// Management role IDs.
    #[serde(rename = "mRoleIds", default, skip_serializing_if = "Option::is_none")]
    pub m_role_ids: Option<Vec<GroupRoleId>>,
    /// Moderator notes about the member.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager_notes: Option<String>,
    /// The member's relationship to the group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub membership_status: Option<GroupMemberStatus>,
    /// Role IDs held.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_ids: Option<Vec<GroupRoleId>>,
    /// Embedded user record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<GroupMemberLimitedUser>,
    /// The member's user ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    /// Profile visibility of the membership.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
}

/// A membership record without the embedded user, from
/// `/groups/{groupId}/members/{userId}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GroupLimitedMember {
    /// When the member was banned, if ever.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banned_at: Option<DateTime<Utc>>,
    /// When the membership was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Group ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<GroupId>,
    /// Whether membership came from a purchase.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_joined_from_purchase: Option<bool>,
    /// Membership record ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<GroupMemberId>,
    /// Whether the member shows the group above their name tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_representing: Option<bool>,
    /// Whether announcement notifications are on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_subscribed_to_announcements: Option<bool>,
    /// When the member joined.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joined_at: Option<DateTime<Utc>>,
    /// When the member last read a post.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_post_read_at: Option<DateTime<Utc>>,
    /// Management role IDs.
    #[serde(rename = "mRoleIds", default, skip_serializing_if = "Option::is_none")]
    pub m_role_ids: Option<Vec<GroupRoleId>>,
    /// Moderator notes about the member.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager_notes: Option<String>,
    /// The member's relationship to the group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub membership_status: Option<GroupMemberStatus>,
    /// Role IDs held.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_ids: Option<Vec<GroupRoleId>>,
    /// The member's user ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    /// Profile visibility of the membership.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
}

/// A pinned group announcement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GroupAnnouncement {
    /// Author's user ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_id: Option<UserId>,
    /// When the announcement was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Group ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<GroupId>,
    /// Announcement ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<GroupAnnouncementId>,
    /// Attached image file ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_id: Option<FileId>,
    /// Attached image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Body text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// When the announcement was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A post on a group's feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GroupPost {
    /// Author's user ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_id: Option<UserId>,
    /// When the post was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last editor's user ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor_id: Option<UserId>,
    /// Group ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<GroupId>,
    /// Post ID; shares the notification ID space.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<NotificationId>,
    /// Attached image file ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_id: Option<FileId>,
    /// Attached image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Roles the post is addressed to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_id: Option<Vec<GroupRoleId>>,
    /// Body text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// When the post was last updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Audience.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<GroupPostVisibility>,
}

/// One entry of a group's audit log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GroupAuditLogEntry {
    /// Acting user's display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor_display_name: Option<String>,
    /// Acting user's ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor_id: Option<UserId>,
    /// When the event occurred.
    #[serde(rename = "created_at", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Event payload; shape depends on the event type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    /// Human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Event type, prefixed with the object kind (`group.role.update`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    /// Group ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<GroupId>,
    /// Entry ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<GroupAuditLogId>,
    /// ID of the object acted on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_id: Option<String>,
}

/// One page of audit log entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GroupAuditLogPage {
    /// Whether more results follow this page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_next: Option<bool>,
    /// Entries on this page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<GroupAuditLogEntry>>,
    /// Total result count ignoring pagination.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,
}

/// A permission grantable to a group role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GroupPermission {
    /// Whether the caller may add this permission to a role.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_to_add: Option<bool>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
    /// Whether this is a management permission.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_management_permission: Option<bool>,
    /// Permission name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A live instance owned by a group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupInstance {
    /// Instance name portion of the ID.
    pub instance_id: String,
    /// Full location string.
    pub location: InstanceId,
    /// Group members present.
    pub member_count: i64,
    /// The world the instance runs.
    pub world: World,
}

/// A group as listed on a user's profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct LimitedUserGroups {
    /// Banner file ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner_id: Option<String>,
    /// Banner image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner_url: Option<String>,
    /// Description text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Four-digit disambiguator shown after the short code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discriminator: Option<String>,
    /// Group ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<GroupId>,
    /// Icon file ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_id: Option<String>,
    /// Icon image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    /// Membership record ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<GroupMemberId>,
    /// Whether the user represents the group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_representing: Option<bool>,
    /// When the latest post was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_post_created_at: Option<DateTime<Utc>>,
    /// When the user last read a post.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_post_read_at: Option<DateTime<Utc>>,
    /// Member count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_count: Option<i64>,
    /// Profile visibility of the membership.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_visibility: Option<String>,
    /// Whether the caller shares the group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mutual_group: Option<bool>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Owner's user ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<UserId>,
    /// Visibility of the group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub privacy: Option<String>,
    /// Six-character short code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_code: Option<String>,
}

/// The group a user currently represents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RepresentedGroup {
    /// Banner file ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner_id: Option<String>,
    /// Banner image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner_url: Option<String>,
    /// Description text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Four-digit disambiguator shown after the short code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discriminator: Option<String>,
    /// Group ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<GroupId>,
    /// Icon file ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_id: Option<String>,
    /// Icon image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    /// Whether the user represents the group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_representing: Option<bool>,
    /// Member count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_count: Option<i64>,
    /// Profile visibility of the membership.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_visibility: Option<GroupUserVisibility>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Owner's user ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<UserId>,
    /// Visibility of the group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub privacy: Option<GroupPrivacy>,
    /// Six-character short code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_code: Option<String>,
}

/// Body for `POST /groups`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroupRequest {
    /// Banner file ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner_id: Option<String>,
    /// Description text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Icon file ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_id: Option<String>,
    /// How new members get in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub join_state: Option<GroupJoinState>,
    /// Display name.
    pub name: String,
    /// Visibility of the group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub privacy: Option<GroupPrivacy>,
    /// Preset role layout.
    pub role_template: GroupRoleTemplate,
    /// Six-character short code.
    pub short_code: String,
}

/// Body for `PUT /groups/{groupId}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGroupRequest {
    /// Banner file ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner_id: Option<String>,
    /// Description text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Icon file ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_id: Option<String>,
    /// How new members get in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub join_state: Option<GroupJoinState>,
    /// Languages spoken, as three-letter codes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<String>>,
    /// External links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<String>>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Group rules text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<String>,
    /// Six-character short code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_code: Option<String>,
    /// Group tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Body for `POST /groups/{groupId}/announcement`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroupAnnouncementRequest {
    /// Attached image file ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_id: Option<FileId>,
    /// Notify group members.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_notification: Option<bool>,
    /// Body text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Title.
    pub title: String,
}

/// Body for `POST /groups/{groupId}/bans`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BanGroupMemberRequest {
    /// User to ban.
    pub user_id: UserId,
}

/// Body for `POST /groups/{groupId}/galleries`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroupGalleryRequest {
    /// Description text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether only members may view it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub members_only: Option<bool>,
    /// Display name.
    pub name: String,
    /// Roles whose submissions are approved automatically.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_ids_to_auto_approve: Option<Vec<GroupRoleId>>,
    /// Roles allowed to manage the gallery.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_ids_to_manage: Option<Vec<GroupRoleId>>,
    /// Roles allowed to submit images.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_ids_to_submit: Option<Vec<GroupRoleId>>,
    /// Roles allowed to view the gallery.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_ids_to_view: Option<Vec<GroupRoleId>>,
}

/// Body for `PUT /groups/{groupId}/galleries/{groupGalleryId}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGroupGalleryRequest {
    /// Description text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether only members may view it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub members_only: Option<bool>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Roles whose submissions are approved automatically.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_ids_to_auto_approve: Option<Vec<GroupRoleId>>,
    /// Roles allowed to manage the gallery.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_ids_to_manage: Option<Vec<GroupRoleId>>,
    /// Roles allowed to submit images.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_ids_to_submit: Option<Vec<GroupRoleId>>,
    /// Roles allowed to view the gallery.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_ids_to_view: Option<Vec<GroupRoleId>>,
}

/// Body for `POST /groups/{groupId}/galleries/{groupGalleryId}/images`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddGroupGalleryImageRequest {
    /// File to submit.
    pub file_id: FileId,
}

/// Body for `POST /groups/{groupId}/invites`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroupInviteRequest {
    /// Invite even if the user blocked the group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirm_override_block: Option<bool>,
    /// User to invite.
    pub user_id: UserId,
}

/// Body for `PUT /groups/{groupId}/members/{userId}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGroupMemberRequest {
    /// Toggle announcement notifications.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_subscribed_to_announcements: Option<bool>,
    /// Moderator notes about the member.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager_notes: Option<String>,
    /// Profile visibility of the membership.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<GroupUserVisibility>,
}

/// Body for `PUT /groups/{groupId}/requests/{userId}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RespondGroupJoinRequest {
    /// The decision.
    pub action: GroupJoinRequestAction,
    /// Also block the user from requesting again.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block: Option<bool>,
}

/// Body for `POST /groups/{groupId}/roles`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroupRoleRequest {
    /// Description text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Explicit ID to assign.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Whether members may assign the role to themselves.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_self_assignable: Option<bool>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Permissions the role grants.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,
}

/// Body for `PUT /groups/{groupId}/roles/{groupRoleId}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGroupRoleRequest {
    /// Description text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether members may assign the role to themselves.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_self_assignable: Option<bool>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Sort position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    /// Permissions the role grants.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,
}

/// Body for `POST /groups/{groupId}/posts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroupPostRequest {
    /// Attached image file ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_id: Option<FileId>,
    /// Roles the post is addressed to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_ids: Option<Vec<GroupRoleId>>,
    /// Notify group members.
    pub send_notification: bool,
    /// Body text.
    pub text: String,
    /// Title.
    pub title: String,
    /// Audience.
    pub visibility: GroupPostVisibility,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_group_search_sort_wire_strings() {
        assert_eq!(GroupSearchSort::JoinedAtAsc.as_str(), "joinedAt:asc");
        assert_eq!(
            serde_json::to_string(&GroupSearchSort::JoinedAtDesc).unwrap(),
            "\"joinedAt:desc\""
        );
    }

    #[test]
    fn test_role_template_camel_case() {
        assert_eq!(
            serde_json::to_string(&GroupRoleTemplate::ManagedInvite).unwrap(),
            "\"managedInvite\""
        );
    }

    #[test]
    fn test_group_my_member_two_factor_field_name() {
        let member: GroupMyMember = serde_json::from_str(r#"{"has2FA":true}"#).unwrap();
        assert_eq!(member.has_2fa, Some(true));
    }

    #[test]
    fn test_respond_group_join_request_body() {
        let body = RespondGroupJoinRequest {
            action: GroupJoinRequestAction::Accept,
            block: None,
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"action":"accept"}"#
        );
    }

    #[test]
    fn test_group_membership_status_roundtrip() {
        let parsed: GroupMemberStatus = serde_json::from_str("\"userblocked\"").unwrap();
        assert_eq!(parsed, GroupMemberStatus::Userblocked);
    }
}
