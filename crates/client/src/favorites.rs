//! Favorites and favorite groups.

use reqwest::Method;
use vrchat_types::{Favorite, FavoriteGroup, FavoriteId, FavoriteType, SuccessEnvelope, UserId};

use crate::client::Client;
use crate::error::Result;
use crate::query::{Pagination, QueryPairs, push_param};

/// Query parameters for [`Client::get_favorites`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoritesQuery {
    /// Pagination window.
    pub page: Pagination,
    /// Filter by favorite group tag.
    pub tag: Option<String>,
}

impl FavoritesQuery {
    fn to_query(&self) -> QueryPairs {
        let mut query = self.page.to_query();
        push_param(&mut query, "tag", self.tag.as_ref());
        query
    }
}

impl Client {
    /// Lists the account's favorites.
    ///
    /// `GET /favorites`
    pub async fn get_favorites(&self, query: &FavoritesQuery) -> Result<Vec<Favorite>> {
        self.request(Method::GET, "/favorites", &query.to_query())
            .await
    }

    /// Adds a favorite.
    ///
    /// `POST /favorites`
    pub async fn add_favorite(&self) -> Result<Favorite> {
        self.request(Method::POST, "/favorites", &[]).await
    }

    /// Removes a favorite.
    ///
    /// `DELETE /favorites/{favoriteId}`
    pub async fn remove_favorite(&self, favorite_id: &FavoriteId) -> Result<SuccessEnvelope> {
        self.request(Method::DELETE, &format!("/favorites/{favorite_id}"), &[])
            .await
    }

    /// Fetches one favorite.
    ///
    /// `GET /favorites/{favoriteId}`
    pub async fn get_favorite(&self, favorite_id: &FavoriteId) -> Result<Favorite> {
        self.request(Method::GET, &format!("/favorites/{favorite_id}"), &[])
            .await
    }

    /// Lists the account's favorite groups.
    ///
    /// `GET /favorite/groups`
    pub async fn get_favorite_groups(&self, page: Pagination) -> Result<Vec<FavoriteGroup>> {
        self.request(Method::GET, "/favorite/groups", &page.to_query())
            .await
    }

    /// Empties a favorite group.
    ///
    /// `DELETE /favorite/group/{favoriteGroupType}/{favoriteGroupName}/{userId}`
    pub async fn clear_favorite_group(
        &self,
        group_type: FavoriteType,
        group_name: &str,
        user_id: &UserId,
    ) -> Result<SuccessEnvelope> {
        self.request(
            Method::DELETE,
            &format!("/favorite/group/{group_type}/{group_name}/{user_id}"),
            &[],
        )
        .await
    }

    /// Fetches one favorite group.
    ///
    /// `GET /favorite/group/{favoriteGroupType}/{favoriteGroupName}/{userId}`
    pub async fn get_favorite_group(
        &self,
        group_type: FavoriteType,
        group_name: &str,
        user_id: &UserId,
    ) -> Result<FavoriteGroup> {
        self.request(
            Method::GET,
            &format!("/favorite/group/{group_type}/{group_name}/{user_id}"),
            &[],
        )
        .await
    }

    /// Updates a favorite group's metadata.
    ///
    /// `PUT /favorite/group/{favoriteGroupType}/{favoriteGroupName}/{userId}`
    pub async fn update_favorite_group(
        &self,
        group_type: FavoriteType,
        group_name: &str,
        user_id: &UserId,
    ) -> Result<()> {
        self.request_unit(
            Method::PUT,
            &format!("/favorite/group/{group_type}/{group_name}/{user_id}"),
            &[],
        )
        .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_favorites_query_tag() {
        let query = FavoritesQuery {
            page: Pagination::first(10),
            tag: Some("avatars1".to_string()),
        };
        assert_eq!(
            query.to_query(),
            vec![
                ("n", "10".to_string()),
                ("tag", "avatars1".to_string()),
            ]
        );
    }
}
