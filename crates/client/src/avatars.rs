//! Avatar operations.

use reqwest::Method;
use vrchat_types::{
    Avatar, AvatarId, CurrentUser, OrderOption, ReleaseStatus, SortOption, UserId,
};

use crate::client::Client;
use crate::error::Result;
use crate::query::{Pagination, QueryPairs, push_param};

/// Query parameters for the avatar search endpoints.
///
/// `search` and `user_id` are honored by `/avatars/favorites` only;
/// `user_id` additionally filters `/avatars` (use the literal `me` to list
/// your own uploads).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AvatarSearchQuery {
    /// Only featured (or only non-featured) avatars.
    pub featured: Option<bool>,
    /// Sort key.
    pub sort: Option<SortOption>,
    /// Filter by uploader.
    pub user_id: Option<String>,
    /// Pagination window.
    pub page: Pagination,
    /// Sort direction.
    pub order: Option<OrderOption>,
    /// Free-text search.
    pub search: Option<String>,
    /// Require a tag.
    pub tag: Option<String>,
    /// Exclude a tag.
    pub notag: Option<String>,
    /// Filter by publication state.
    pub release_status: Option<ReleaseStatus>,
    /// Maximum supported Unity version.
    pub max_unity_version: Option<String>,
    /// Minimum supported Unity version.
    pub min_unity_version: Option<String>,
    /// Filter by build platform.
    pub platform: Option<String>,
}

impl AvatarSearchQuery {
    fn to_query(&self) -> QueryPairs {
        let mut query = QueryPairs::new();
        push_param(&mut query, "featured", self.featured.as_ref());
        push_param(&mut query, "sort", self.sort.as_ref());
        push_param(&mut query, "userId", self.user_id.as_ref());
        self.page.push_to(&mut query);
        push_param(&mut query, "order", self.order.as_ref());
        push_param(&mut query, "search", self.search.as_ref());
        push_param(&mut query, "tag", self.tag.as_ref());
        push_param(&mut query, "notag", self.notag.as_ref());
        push_param(&mut query, "releaseStatus", self.release_status.as_ref());
        push_param(&mut query, "maxUnityVersion", self.max_unity_version.as_ref());
        push_param(&mut query, "minUnityVersion", self.min_unity_version.as_ref());
        push_param(&mut query, "platform", self.platform.as_ref());
        query
    }
}

impl Client {
    /// Fetches the avatar a user currently wears.
    ///
    /// `GET /users/{userId}/avatar`
    pub async fn get_own_avatar(&self, user_id: &UserId) -> Result<Avatar> {
        self.request(Method::GET, &format!("/users/{user_id}/avatar"), &[])
            .await
    }

    /// Creates an avatar record.
    ///
    /// `POST /avatars`
    pub async fn create_avatar(&self) -> Result<Avatar> {
        self.request(Method::POST, "/avatars", &[]).await
    }

    /// Searches avatars.
    ///
    /// `GET /avatars`
    pub async fn search_avatars(&self, query: &AvatarSearchQuery) -> Result<Vec<Avatar>> {
        self.request(Method::GET, "/avatars", &query.to_query())
            .await
    }

    /// Deletes an avatar.
    ///
    /// `DELETE /avatars/{avatarId}`
    pub async fn delete_avatar(&self, avatar_id: &AvatarId) -> Result<Avatar> {
        self.request(Method::DELETE, &format!("/avatars/{avatar_id}"), &[])
            .await
    }

    /// Fetches an avatar.
    ///
    /// `GET /avatars/{avatarId}`
    pub async fn get_avatar(&self, avatar_id: &AvatarId) -> Result<Avatar> {
        self.request(Method::GET, &format!("/avatars/{avatar_id}"), &[])
            .await
    }

    /// Updates an avatar.
    ///
    /// `PUT /avatars/{avatarId}`
    pub async fn update_avatar(&self, avatar_id: &AvatarId) -> Result<Avatar> {
        self.request(Method::PUT, &format!("/avatars/{avatar_id}"), &[])
            .await
    }

    /// Switches the account into an avatar.
    ///
    /// `PUT /avatars/{avatarId}/select`
    pub async fn select_avatar(&self, avatar_id: &AvatarId) -> Result<CurrentUser> {
        self.request(Method::PUT, &format!("/avatars/{avatar_id}/select"), &[])
            .await
    }

    /// Sets an avatar as the cross-platform fallback.
    ///
    /// `PUT /avatars/{avatarId}/selectFallback`
    pub async fn select_fallback_avatar(&self, avatar_id: &AvatarId) -> Result<CurrentUser> {
        self.request(
            Method::PUT,
            &format!("/avatars/{avatar_id}/selectFallback"),
            &[],
        )
        .await
    }

    /// Lists the account's favorited avatars.
    ///
    /// `GET /avatars/favorites`
    pub async fn get_favorited_avatars(&self, query: &AvatarSearchQuery) -> Result<Vec<Avatar>> {
        self.request(Method::GET, "/avatars/favorites", &query.to_query())
            .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_search_query_enum_formatting() {
        let query = AvatarSearchQuery {
            sort: Some(SortOption::Popularity),
            order: Some(OrderOption::Descending),
            release_status: Some(ReleaseStatus::Public),
            ..AvatarSearchQuery::default()
        };
        assert_eq!(
            query.to_query(),
            vec![
                ("sort", "popularity".to_string()),
                ("order", "descending".to_string()),
                ("releaseStatus", "public".to_string()),
            ]
        );
    }

    #[test]
    fn test_search_query_false_is_sent() {
        let query = AvatarSearchQuery {
            featured: Some(false),
            ..AvatarSearchQuery::default()
        };
        assert_eq!(query.to_query(), vec![("featured", "false".to_string())]);
    }
}
