//! System endpoints: configuration, info pushes, health, metrics.

use chrono::{DateTime, Utc};
use reqwest::Method;
use vrchat_types::{ApiConfig, ApiHealth, InfoPush};

use crate::client::Client;
use crate::error::Result;
use crate::query::{QueryPairs, push_param};

/// Query parameters for [`Client::get_info_push`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InfoPushQuery {
    /// Tags the client requires.
    pub require: Option<String>,
    /// Tags to include.
    pub include: Option<String>,
}

impl InfoPushQuery {
    fn to_query(&self) -> QueryPairs {
        let mut query = QueryPairs::new();
        push_param(&mut query, "require", self.require.as_ref());
        push_param(&mut query, "include", self.include.as_ref());
        query
    }
}

/// Query parameters for the frontend asset endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontendAssetQuery {
    /// Asset variant; usually `public`.
    pub variant: Option<String>,
    /// Frontend branch; usually `main`.
    pub branch: Option<String>,
}

impl FrontendAssetQuery {
    fn to_query(&self) -> QueryPairs {
        let mut query = QueryPairs::new();
        push_param(&mut query, "variant", self.variant.as_ref());
        push_param(&mut query, "branch", self.branch.as_ref());
        query
    }
}

impl Client {
    /// Fetches the runtime configuration, including the client API key.
    ///
    /// `GET /config`
    pub async fn get_config(&self) -> Result<ApiConfig> {
        self.request(Method::GET, "/config", &[]).await
    }

    /// Lists targeted announcements.
    ///
    /// `GET /infoPush`
    pub async fn get_info_push(&self, query: &InfoPushQuery) -> Result<Vec<InfoPush>> {
        self.request(Method::GET, "/infoPush", &query.to_query())
            .await
    }

    /// Downloads the frontend stylesheet.
    ///
    /// `GET /css/app.css`
    pub async fn get_css(&self, query: &FrontendAssetQuery) -> Result<String> {
        self.request_text("/css/app.css", &query.to_query()).await
    }

    /// Downloads the frontend script bundle.
    ///
    /// `GET /js/app.js`
    pub async fn get_java_script(&self, query: &FrontendAssetQuery) -> Result<String> {
        self.request_text("/js/app.js", &query.to_query()).await
    }

    /// Fetches the API health report.
    ///
    /// `GET /health`
    pub async fn get_health(&self) -> Result<ApiHealth> {
        self.request(Method::GET, "/health", &[]).await
    }

    /// Reports how many users are online right now.
    ///
    /// `GET /visits`
    pub async fn get_current_online_users(&self) -> Result<i64> {
        self.request(Method::GET, "/visits", &[]).await
    }

    /// Reports the server's clock, in UTC with second precision.
    ///
    /// `GET /time`
    pub async fn get_system_time(&self) -> Result<DateTime<Utc>> {
        self.request(Method::GET, "/time", &[]).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_info_push_query_keys() {
        let query = InfoPushQuery {
            require: Some("quest".to_string()),
            include: None,
        };
        assert_eq!(query.to_query(), vec![("require", "quest".to_string())]);
    }
}
