//! Newtype wrappers for VRChat resource identifiers.
//!
//! The API addresses every resource by an opaque string ID with a
//! type-specific prefix (`usr_`, `wrld_`, `avtr_`, `grp_`, `file_`, ...).
//! Wrapping each in its own type keeps a world ID from being passed where a
//! user ID is expected; the wire representation stays a plain JSON string.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! id_type {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Returns the ID as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

id_type! {
    /// A user's unique ID, usually `usr_<uuid>`. Accounts predating the
    /// prefixed scheme carry short IDs like `8JoV9XEdpo`.
    UserId
}

id_type! {
    /// An avatar's unique ID, usually `avtr_<uuid>`.
    AvatarId
}

id_type! {
    /// A world's unique ID, usually `wrld_<uuid>`. Shows up as the literal
    /// string `offline` on profiles of non-friends.
    WorldId
}

id_type! {
    /// An instance identifier. Unlike most IDs this is a structured string
    /// (instance number plus access tags); it can also be the literal
    /// `offline` or `private` on user profiles.
    InstanceId
}

id_type! {
    /// A group's unique ID, usually `grp_<uuid>`.
    GroupId
}

id_type! {
    /// A group member record ID, usually `gmem_<uuid>`.
    GroupMemberId
}

id_type! {
    /// A group role ID, usually `grol_<uuid>`.
    GroupRoleId
}

id_type! {
    /// A group gallery ID, usually `ggal_<uuid>`.
    GroupGalleryId
}

id_type! {
    /// A group gallery image ID, usually `ggim_<uuid>`.
    GroupGalleryImageId
}

id_type! {
    /// A group announcement ID, usually `gano_<uuid>`.
    GroupAnnouncementId
}

id_type! {
    /// A group audit log entry ID, usually `gaud_<uuid>`.
    GroupAuditLogId
}

id_type! {
    /// A file's unique ID, usually `file_<uuid>`.
    FileId
}

id_type! {
    /// A favorite record ID, usually `fvrt_<uuid>`.
    FavoriteId
}

id_type! {
    /// A favorite group ID.
    FavoriteGroupId
}

id_type! {
    /// A notification's unique ID, usually `not_<uuid>`.
    NotificationId
}

id_type! {
    /// An invite message slot ID, usually `invm_<uuid>`.
    InviteMessageId
}

id_type! {
    /// A permission's unique ID, usually `prms_<uuid>`.
    PermissionId
}

id_type! {
    /// A player moderation record ID, usually `pmod_<uuid>`.
    PlayerModerationId
}

id_type! {
    /// A transaction's unique ID, usually `txn_<uuid>`.
    TransactionId
}

id_type! {
    /// A license group ID.
    LicenseGroupId
}

id_type! {
    /// A unity package ID, usually `unp_<uuid>`.
    UnityPackageId
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_id_serializes_as_bare_string() {
        let id = UserId::from("usr_c1644b5b-3ca4-45b4-97c6-a2a0de70d469");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"usr_c1644b5b-3ca4-45b4-97c6-a2a0de70d469\"");
    }

    #[test]
    fn test_id_deserializes_from_bare_string() {
        let id: WorldId = serde_json::from_str("\"wrld_deadbeef\"").unwrap();
        assert_eq!(id.as_str(), "wrld_deadbeef");
    }

    #[test]
    fn test_id_display() {
        let id = AvatarId::from("avtr_123");
        assert_eq!(id.to_string(), "avtr_123");
    }
}
