//! Account permission records.

use serde::{Deserialize, Serialize};

use crate::ids::{PermissionId, UserId};

/// A permission granted to the account, usually via a license.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Permission {
    /// Free-form permission payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    /// Permission ID.
    pub id: PermissionId,
    /// Permission name.
    pub name: String,
    /// Owner's display name.
    pub owner_display_name: String,
    /// Owner's user ID.
    pub owner_id: UserId,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_permission_deserializes_without_data() {
        let json = r#"{
            "id": "prms_1",
            "name": "permission-supporter",
            "ownerDisplayName": "someone",
            "ownerId": "usr_1"
        }"#;
        let permission: Permission = serde_json::from_str(json).unwrap();
        assert_eq!(permission.data, None);
        assert_eq!(permission.name, "permission-supporter");
    }
}
