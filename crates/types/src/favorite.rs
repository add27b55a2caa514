//! Favorites and favorite groups.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::UnknownWireValue;
use crate::ids::{FavoriteGroupId, FavoriteId, UserId};

/// What kind of resource a favorite points at. Doubles as the
/// `favoriteGroupType` path segment of the favorite-group endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FavoriteType {
    /// A favorited world.
    World,
    /// A favorited friend.
    Friend,
    /// A favorited avatar.
    Avatar,
}

impl FavoriteType {
    /// Returns the wire string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::World => "world",
            Self::Friend => "friend",
            Self::Avatar => "avatar",
        }
    }
}

impl fmt::Display for FavoriteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FavoriteType {
    type Err = UnknownWireValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "world" => Ok(Self::World),
            "friend" => Ok(Self::Friend),
            "avatar" => Ok(Self::Avatar),
            other => Err(UnknownWireValue::new("favorite type", other)),
        }
    }
}

/// Who can see a favorite group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FavoriteGroupVisibility {
    /// Owner only.
    Private,
    /// Owner's friends.
    Friends,
    /// Everyone.
    Public,
}

/// A favorite record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    /// ID of the favorited resource (avatar, user or world ID).
    pub favorite_id: String,
    /// ID of this favorite record.
    pub id: FavoriteId,
    /// Favorite groups this favorite belongs to.
    pub tags: Vec<String>,
    /// Kind of the favorited resource.
    #[serde(rename = "type")]
    pub favorite_type: FavoriteType,
}

/// Body for `POST /favorites`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddFavoriteRequest {
    /// ID of the resource to favorite (avatar, user or world ID).
    pub favorite_id: String,
    /// Favorite groups to add it to; listing several adds it to all.
    pub tags: Vec<String>,
    /// Kind of the resource.
    #[serde(rename = "type")]
    pub favorite_type: FavoriteType,
}

/// A named group of favorites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteGroup {
    /// Display name.
    pub display_name: String,
    /// Favorite group ID.
    pub id: FavoriteGroupId,
    /// Internal name.
    pub name: String,
    /// Owner's display name.
    pub owner_display_name: String,
    /// Owner's user ID.
    pub owner_id: UserId,
    /// Group tags; believed to do nothing.
    pub tags: Vec<String>,
    /// Kind of favorites the group holds.
    #[serde(rename = "type")]
    pub group_type: FavoriteType,
    /// Who can see the group.
    pub visibility: FavoriteGroupVisibility,
}

/// Body for updating a favorite group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFavoriteGroupRequest {
    /// New display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// New tags; believed to do nothing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// New visibility.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<FavoriteGroupVisibility>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_favorite_type_key_is_type() {
        let favorite = Favorite {
            favorite_id: "avtr_1".to_string(),
            id: "fvrt_1".into(),
            tags: vec!["avatars1".to_string()],
            favorite_type: FavoriteType::Avatar,
        };
        let json = serde_json::to_string(&favorite).unwrap();
        assert_eq!(
            json,
            r#"{"favoriteId":"avtr_1","id":"fvrt_1","tags":["avatars1"],"type":"avatar"}"#
        );
        let parsed: Favorite = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, favorite);
    }

    #[test]
    fn test_favorite_type_display() {
        assert_eq!(FavoriteType::Friend.to_string(), "friend");
    }
}
