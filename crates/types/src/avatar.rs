//! Avatar records and the search vocabularies shared with worlds.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::UnknownWireValue;
use crate::ids::{AvatarId, UnityPackageId, UserId};

/// Publication state of an avatar or world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseStatus {
    /// Visible to everyone.
    Public,
    /// Visible to the author only.
    Private,
    /// Deleted content; shown to everyone as hidden.
    Hidden,
    /// Search filter value matching any status.
    All,
}

impl ReleaseStatus {
    /// Returns the wire string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
            Self::Hidden => "hidden",
            Self::All => "all",
        }
    }
}

impl fmt::Display for ReleaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReleaseStatus {
    type Err = UnknownWireValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "public" => Ok(Self::Public),
            "private" => Ok(Self::Private),
            "hidden" => Ok(Self::Hidden),
            "all" => Ok(Self::All),
            other => Err(UnknownWireValue::new("release status", other)),
        }
    }
}

/// Sort key accepted by the search endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOption {
    /// By popularity.
    #[serde(rename = "popularity")]
    Popularity,
    /// By recent activity volume.
    #[serde(rename = "heat")]
    Heat,
    /// By author trust rank.
    #[serde(rename = "trust")]
    Trust,
    /// Shuffled.
    #[serde(rename = "shuffle")]
    Shuffle,
    /// Random order.
    #[serde(rename = "random")]
    Random,
    /// By favorite count.
    #[serde(rename = "favorites")]
    Favorites,
    /// By report score.
    #[serde(rename = "reportScore")]
    ReportScore,
    /// By report count.
    #[serde(rename = "reportCount")]
    ReportCount,
    /// By publication date.
    #[serde(rename = "publicationDate")]
    PublicationDate,
    /// By community-labs publication date.
    #[serde(rename = "labsPublicationDate")]
    LabsPublicationDate,
    /// By creation, newest first.
    #[serde(rename = "created")]
    Created,
    /// By the raw `created_at` column.
    #[serde(rename = "_created_at")]
    CreatedAt,
    /// By last update, newest first.
    #[serde(rename = "updated")]
    Updated,
    /// By the raw `updated_at` column.
    #[serde(rename = "_updated_at")]
    UpdatedAt,
    /// By explicit ordering.
    #[serde(rename = "order")]
    Order,
    /// By query relevance.
    #[serde(rename = "relevance")]
    Relevance,
    /// Platform-curated ordering.
    #[serde(rename = "magic")]
    Magic,
    /// Alphabetical.
    #[serde(rename = "name")]
    Name,
}

impl SortOption {
    /// Returns the wire string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Popularity => "popularity",
            Self::Heat => "heat",
            Self::Trust => "trust",
            Self::Shuffle => "shuffle",
            Self::Random => "random",
            Self::Favorites => "favorites",
            Self::ReportScore => "reportScore",
            Self::ReportCount => "reportCount",
            Self::PublicationDate => "publicationDate",
            Self::LabsPublicationDate => "labsPublicationDate",
            Self::Created => "created",
            Self::CreatedAt => "_created_at",
            Self::Updated => "updated",
            Self::UpdatedAt => "_updated_at",
            Self::Order => "order",
            Self::Relevance => "relevance",
            Self::Magic => "magic",
            Self::Name => "name",
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOption {
    type Err = UnknownWireValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "popularity" => Ok(Self::Popularity),
            "heat" => Ok(Self::Heat),
            "trust" => Ok(Self::Trust),
            "shuffle" => Ok(Self::Shuffle),
            "random" => Ok(Self::Random),
            "favorites" => Ok(Self::Favorites),
            "reportScore" => Ok(Self::ReportScore),
            "reportCount" => Ok(Self::ReportCount),
            "publicationDate" => Ok(Self::PublicationDate),
            "labsPublicationDate" => Ok(Self::LabsPublicationDate),
            "created" => Ok(Self::Created),
            "_created_at" => Ok(Self::CreatedAt),
            "updated" => Ok(Self::Updated),
            "_updated_at" => Ok(Self::UpdatedAt),
            "order" => Ok(Self::Order),
            "relevance" => Ok(Self::Relevance),
            "magic" => Ok(Self::Magic),
            "name" => Ok(Self::Name),
            other => Err(UnknownWireValue::new("sort option", other)),
        }
    }
}

/// Sort direction accepted by the search endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderOption {
    /// Smallest first.
    Ascending,
    /// Largest first.
    Descending,
}

impl OrderOption {
    /// Returns the wire string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }
}

impl fmt::Display for OrderOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderOption {
    type Err = UnknownWireValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ascending" => Ok(Self::Ascending),
            "descending" => Ok(Self::Descending),
            other => Err(UnknownWireValue::new("order option", other)),
        }
    }
}

/// One platform-specific build of an avatar or world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnityPackage {
    /// Asset bundle URL; only on authorized single-resource requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_url: Option<String>,
    /// Deprecated; always empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_url_object: Option<serde_json::Value>,
    /// Incrementing build number.
    pub asset_version: i64,
    /// When the build was uploaded.
    #[serde(rename = "created_at", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Package ID.
    pub id: UnityPackageId,
    /// Impostor asset URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impostor_url: Option<String>,
    /// Target platform; can be any Unity build string.
    pub platform: String,
    /// Plugin URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plugin_url: Option<String>,
    /// Deprecated; always empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plugin_url_object: Option<serde_json::Value>,
    /// Security scan state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scan_status: Option<String>,
    /// Sort weight derived from the Unity version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unity_sort_number: Option<i64>,
    /// Unity editor version the build targets.
    pub unity_version: String,
    /// Build variant label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
}

/// Deprecated wrapper around a package URL; always empty in practice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UnityPackageUrlObject {
    /// The wrapped URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unity_package_url: Option<String>,
}

/// An avatar record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Avatar {
    /// Asset URL; absent from search results, present on single fetches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_url: Option<String>,
    /// Deprecated; always empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_url_object: Option<serde_json::Value>,
    /// Author's user ID.
    pub author_id: UserId,
    /// Author's display name.
    pub author_name: String,
    /// When the avatar was created.
    #[serde(rename = "created_at")]
    pub created_at: DateTime<Utc>,
    /// Description text.
    pub description: String,
    /// Whether the avatar is platform-featured.
    pub featured: bool,
    /// Avatar ID.
    pub id: AvatarId,
    /// Preview image URL.
    pub image_url: String,
    /// Display name.
    pub name: String,
    /// Publication state.
    pub release_status: ReleaseStatus,
    /// Avatar tags.
    pub tags: Vec<String>,
    /// Preview thumbnail URL.
    pub thumbnail_image_url: String,
    /// Unity package URL.
    pub unity_package_url: String,
    /// Deprecated wrapper; always empty.
    pub unity_package_url_object: UnityPackageUrlObject,
    /// Per-platform builds.
    pub unity_packages: Vec<UnityPackage>,
    /// When the avatar was last updated.
    #[serde(rename = "updated_at")]
    pub updated_at: DateTime<Utc>,
    /// Incrementing version counter.
    pub version: i64,
}

/// Body for `POST /avatars`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateAvatarRequest {
    /// Asset bundle URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_url: Option<String>,
    /// Description text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Explicit ID to assign.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<AvatarId>,
    /// Preview image URL.
    pub image_url: String,
    /// Display name.
    pub name: String,
    /// Publication state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_status: Option<ReleaseStatus>,
    /// Avatar tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Unity package URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unity_package_url: Option<String>,
    /// Unity editor version of the build.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unity_version: Option<String>,
    /// Version counter to start from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<f64>,
}

/// Body for `PUT /avatars/{avatarId}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAvatarRequest {
    /// Asset bundle URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_url: Option<String>,
    /// Description text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Avatar ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<AvatarId>,
    /// Preview image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Publication state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_status: Option<ReleaseStatus>,
    /// Avatar tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Unity package URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unity_package_url: Option<String>,
    /// Unity editor version of the build.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unity_version: Option<String>,
    /// Version counter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<f64>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_release_status_roundtrip() {
        let json = serde_json::to_string(&ReleaseStatus::Public).unwrap();
        assert_eq!(json, "\"public\"");
        let parsed: ReleaseStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, ReleaseStatus::Public);
    }

    #[test]
    fn test_sort_option_underscore_variants() {
        assert_eq!(SortOption::CreatedAt.as_str(), "_created_at");
        assert_eq!(
            serde_json::from_str::<SortOption>("\"_updated_at\"").unwrap(),
            SortOption::UpdatedAt
        );
    }

    #[test]
    fn test_order_option_display() {
        assert_eq!(OrderOption::Descending.to_string(), "descending");
    }

    #[test]
    fn test_release_status_from_str() {
        assert_eq!("public".parse::<ReleaseStatus>().unwrap(), ReleaseStatus::Public);
        let error = "open".parse::<ReleaseStatus>().unwrap_err();
        assert_eq!(error.to_string(), "unknown release status value: open");
    }

    #[test]
    fn test_create_avatar_request_required_fields_only() {
        let request = CreateAvatarRequest {
            name: "Robot".to_string(),
            image_url: "https://files.example/robot.png".to_string(),
            ..CreateAvatarRequest::default()
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(
            json,
            r#"{"imageUrl":"https://files.example/robot.png","name":"Robot"}"#
        );
    }
}
