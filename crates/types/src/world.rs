//! World records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::avatar::{ReleaseStatus, UnityPackage};
use crate::ids::{UserId, WorldId};

/// A world record, as returned by `/worlds/{worldId}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct World {
    /// Author's user ID.
    pub author_id: UserId,
    /// Author's display name.
    pub author_name: String,
    /// Hard player capacity.
    pub capacity: i64,
    /// When the world was created.
    #[serde(rename = "created_at")]
    pub created_at: DateTime<Utc>,
    /// Description text.
    pub description: String,
    /// Favorite count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorites: Option<i64>,
    /// Whether the world is platform-featured.
    pub featured: bool,
    /// Recent activity score.
    pub heat: i64,
    /// World ID.
    pub id: WorldId,
    /// Preview image URL.
    pub image_url: String,
    /// Public instances; always empty when unauthenticated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instances: Option<Vec<Vec<serde_json::Value>>>,
    /// Community-labs publication date, or `none`.
    pub labs_publication_date: String,
    /// Display name.
    pub name: String,
    /// Namespace label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// Current occupant count; `0` when unauthenticated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupants: Option<i64>,
    /// Publishing organization.
    pub organization: String,
    /// Popularity score.
    pub popularity: i64,
    /// Preview video YouTube ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_youtube_id: Option<String>,
    /// Occupants in private instances; `0` when unauthenticated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_occupants: Option<i64>,
    /// Occupants in public instances; `0` when unauthenticated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_occupants: Option<i64>,
    /// Publication date, or `none`.
    pub publication_date: String,
    /// Soft player capacity.
    pub recommended_capacity: i64,
    /// Publication state.
    pub release_status: ReleaseStatus,
    /// World tags.
    pub tags: Vec<String>,
    /// Preview thumbnail URL.
    pub thumbnail_image_url: String,
    /// Attached Udon product IDs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub udon_products: Option<Vec<String>>,
    /// Per-platform builds; empty when unauthenticated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unity_packages: Option<Vec<UnityPackage>>,
    /// When the world was last updated.
    #[serde(rename = "updated_at")]
    pub updated_at: DateTime<Utc>,
    /// Incrementing version counter.
    pub version: i64,
    /// Total visit count.
    pub visits: i64,
}

/// Unity build descriptor carried by list results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitedUnityPackage {
    /// Target platform; can be any Unity build string.
    pub platform: String,
    /// Unity editor version the build targets.
    pub unity_version: String,
}

/// Abbreviated world record used in search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitedWorld {
    /// Author's user ID.
    pub author_id: UserId,
    /// Author's display name.
    pub author_name: String,
    /// Hard player capacity.
    pub capacity: i64,
    /// When the world was created.
    #[serde(rename = "created_at")]
    pub created_at: DateTime<Utc>,
    /// Favorite count.
    pub favorites: i64,
    /// Recent activity score.
    pub heat: i64,
    /// World ID.
    pub id: WorldId,
    /// Preview image URL.
    pub image_url: String,
    /// Community-labs publication date, or `none`.
    pub labs_publication_date: String,
    /// Display name.
    pub name: String,
    /// Current occupant count.
    pub occupants: i64,
    /// Publishing organization.
    pub organization: String,
    /// Popularity score.
    pub popularity: i64,
    /// Preview video YouTube ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_youtube_id: Option<String>,
    /// Publication date, or `none`.
    pub publication_date: String,
    /// Soft player capacity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended_capacity: Option<i64>,
    /// Publication state.
    pub release_status: ReleaseStatus,
    /// World tags.
    pub tags: Vec<String>,
    /// Preview thumbnail URL.
    pub thumbnail_image_url: String,
    /// Attached Udon product IDs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub udon_products: Option<Vec<String>>,
    /// Per-platform builds.
    pub unity_packages: Vec<LimitedUnityPackage>,
    /// When the world was last updated.
    #[serde(rename = "updated_at")]
    pub updated_at: DateTime<Utc>,
    /// Total visit count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visits: Option<i64>,
}

/// Body for `POST /worlds`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorldRequest {
    /// Asset bundle URL.
    pub asset_url: String,
    /// Build number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_version: Option<i64>,
    /// Author's user ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_id: Option<UserId>,
    /// Author's display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    /// Hard player capacity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i64>,
    /// Description text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Explicit ID to assign.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<WorldId>,
    /// Preview image URL.
    pub image_url: String,
    /// Display name.
    pub name: String,
    /// Target platform.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    /// Publication state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_status: Option<ReleaseStatus>,
    /// World tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Unity package URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unity_package_url: Option<String>,
    /// Unity editor version of the build.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unity_version: Option<String>,
}

/// Body for `PUT /worlds/{worldId}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWorldRequest {
    /// Asset bundle URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_url: Option<String>,
    /// Build number, as a string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_version: Option<String>,
    /// Author's user ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_id: Option<UserId>,
    /// Author's display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    /// Hard player capacity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i64>,
    /// Description text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Preview image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Target platform.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    /// Publication state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_status: Option<ReleaseStatus>,
    /// World tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Unity package URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unity_package_url: Option<String>,
    /// Unity editor version of the build.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unity_version: Option<String>,
}

/// World ID plus its free-form metadata blob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldMetadata {
    /// World ID.
    pub id: WorldId,
    /// Arbitrary metadata attached to the world.
    pub metadata: serde_json::Value,
}

/// Whether the caller may publish the world to community labs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldPublishStatus {
    /// Whether publishing is currently allowed.
    pub can_publish: bool,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_limited_world_deserializes_snake_case_dates() {
        let json = r#"{
            "authorId": "usr_1",
            "authorName": "someone",
            "capacity": 32,
            "created_at": "2023-04-01T12:00:00.000Z",
            "favorites": 12,
            "heat": 3,
            "id": "wrld_1",
            "imageUrl": "https://files.example/w.png",
            "labsPublicationDate": "none",
            "name": "Hangout",
            "occupants": 5,
            "organization": "vrchat",
            "popularity": 4,
            "publicationDate": "none",
            "releaseStatus": "public",
            "tags": ["author_tag_chill"],
            "thumbnailImageUrl": "https://files.example/w_thumb.png",
            "unityPackages": [{"platform": "standalonewindows", "unityVersion": "2022.3.6f1"}],
            "updated_at": "2023-04-02T12:00:00.000Z"
        }"#;
        let world: LimitedWorld = serde_json::from_str(json).unwrap();
        assert_eq!(world.id.as_str(), "wrld_1");
        assert_eq!(world.release_status, ReleaseStatus::Public);
        assert_eq!(world.unity_packages[0].platform, "standalonewindows");
        assert_eq!(world.visits, None);
    }

    #[test]
    fn test_world_publish_status() {
        let status: WorldPublishStatus = serde_json::from_str(r#"{"canPublish":true}"#).unwrap();
        assert!(status.can_publish);
    }
}
