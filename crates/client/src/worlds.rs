//! World operations.

use reqwest::Method;
use vrchat_types::{
    Instance, LimitedWorld, OrderOption, ReleaseStatus, SortOption, World, WorldId, WorldMetadata,
    WorldPublishStatus,
};

use crate::client::Client;
use crate::error::Result;
use crate::query::{Pagination, QueryPairs, push_param};

/// Query parameters for the world search endpoints.
///
/// `fuzzy` is honored by `/worlds` only; `user_id` filters `/worlds` (use
/// the literal `me` for your own uploads), `/worlds/favorites` and
/// `/worlds/recent`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorldSearchQuery {
    /// Only featured (or only non-featured) worlds.
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
    /// Enable fuzzy matching on the search text.
    pub fuzzy: Option<bool>,
}

impl WorldSearchQuery {
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
        push_param(&mut query, "fuzzy", self.fuzzy.as_ref());
        query
    }
}

impl Client {
    /// Searches worlds.
    ///
    /// `GET /worlds`
    pub async fn search_worlds(&self, query: &WorldSearchQuery) -> Result<Vec<LimitedWorld>> {
        self.request(Method::GET, "/worlds", &query.to_query()).await
    }

    /// Creates a world record.
    ///
    /// `POST /worlds`
    pub async fn create_world(&self) -> Result<World> {
        self.request(Method::POST, "/worlds", &[]).await
    }

    /// Lists worlds with active public instances.
    ///
    /// `GET /worlds/active`
    pub async fn get_active_worlds(&self, query: &WorldSearchQuery) -> Result<Vec<LimitedWorld>> {
        self.request(Method::GET, "/worlds/active", &query.to_query())
            .await
    }

    /// Lists the account's favorited worlds.
    ///
    /// `GET /worlds/favorites`
    pub async fn get_favorited_worlds(
        &self,
        query: &WorldSearchQuery,
    ) -> Result<Vec<LimitedWorld>> {
        self.request(Method::GET, "/worlds/favorites", &query.to_query())
            .await
    }

    /// Lists the account's recently visited worlds.
    ///
    /// `GET /worlds/recent`
    pub async fn get_recent_worlds(&self, query: &WorldSearchQuery) -> Result<Vec<LimitedWorld>> {
        self.request(Method::GET, "/worlds/recent", &query.to_query())
            .await
    }

    /// Deletes a world.
    ///
    /// `DELETE /worlds/{worldId}`
    pub async fn delete_world(&self, world_id: &WorldId) -> Result<()> {
        self.request_unit(Method::DELETE, &format!("/worlds/{world_id}"), &[])
            .await
    }

    /// Fetches a world.
    ///
    /// `GET /worlds/{worldId}`
    pub async fn get_world(&self, world_id: &WorldId) -> Result<World> {
        self.request(Method::GET, &format!("/worlds/{world_id}"), &[])
            .await
    }

    /// Updates a world.
    ///
    /// `PUT /worlds/{worldId}`
    pub async fn update_world(&self, world_id: &WorldId) -> Result<World> {
        self.request(Method::PUT, &format!("/worlds/{world_id}"), &[])
            .await
    }

    /// Fetches a world's free-form metadata blob.
    ///
    /// `GET /worlds/{worldId}/metadata`
    pub async fn get_world_metadata(&self, world_id: &WorldId) -> Result<WorldMetadata> {
        self.request(Method::GET, &format!("/worlds/{world_id}/metadata"), &[])
            .await
    }

    /// Pulls a world out of community labs.
    ///
    /// `DELETE /worlds/{worldId}/publish`
    pub async fn unpublish_world(&self, world_id: &WorldId) -> Result<()> {
        self.request_unit(Method::DELETE, &format!("/worlds/{world_id}/publish"), &[])
            .await
    }

    /// Reports whether the caller may publish the world.
    ///
    /// `GET /worlds/{worldId}/publish`
    pub async fn get_world_publish_status(
        &self,
        world_id: &WorldId,
    ) -> Result<WorldPublishStatus> {
        self.request(Method::GET, &format!("/worlds/{world_id}/publish"), &[])
            .await
    }

    /// Publishes a world to community labs.
    ///
    /// `PUT /worlds/{worldId}/publish`
    pub async fn publish_world(&self, world_id: &WorldId) -> Result<()> {
        self.request_unit(Method::PUT, &format!("/worlds/{world_id}/publish"), &[])
            .await
    }

    /// Fetches an instance of a world.
    ///
    /// `GET /worlds/{worldId}/{instanceId}`
    pub async fn get_world_instance(
        &self,
        world_id: &WorldId,
        instance_id: &str,
    ) -> Result<Instance> {
        self.request(Method::GET, &format!("/worlds/{world_id}/{instance_id}"), &[])
            .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_world_search_query_full() {
        let query = WorldSearchQuery {
            featured: Some(true),
            sort: Some(SortOption::Heat),
            user_id: Some("me".to_string()),
            page: Pagination {
                n: Some(25),
                offset: Some(50),
            },
            order: Some(OrderOption::Ascending),
            search: Some("club".to_string()),
            tag: None,
            notag: None,
            release_status: Some(ReleaseStatus::All),
            max_unity_version: None,
            min_unity_version: None,
            platform: Some("standalonewindows".to_string()),
            fuzzy: Some(false),
        };
        assert_eq!(
            query.to_query(),
            vec![
                ("featured", "true".to_string()),
                ("sort", "heat".to_string()),
                ("userId", "me".to_string()),
                ("n", "25".to_string()),
                ("offset", "50".to_string()),
                ("order", "ascending".to_string()),
                ("search", "club".to_string()),
                ("releaseStatus", "all".to_string()),
                ("platform", "standalonewindows".to_string()),
                ("fuzzy", "false".to_string()),
            ]
        );
    }
}
