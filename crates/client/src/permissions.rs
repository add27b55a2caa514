//! Account permission operations.

use reqwest::Method;
use vrchat_types::{Permission, PermissionId};

use crate::client::Client;
use crate::error::Result;

impl Client {
    /// Lists the permissions granted to the account.
    ///
    /// `GET /auth/permissions`
    pub async fn get_assigned_permissions(&self) -> Result<Vec<Permission>> {
        self.request(Method::GET, "/auth/permissions", &[]).await
    }

    /// Fetches one permission.
    ///
    /// `GET /permissions/{permissionId}`
    pub async fn get_permission(&self, permission_id: &PermissionId) -> Result<Permission> {
        self.request(Method::GET, &format!("/permissions/{permission_id}"), &[])
            .await
    }
}
