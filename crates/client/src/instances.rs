//! Instance operations.
//!
//! Instances are addressed by the composite key `{worldId}:{instanceId}`.

use reqwest::Method;
use vrchat_types::{Instance, InstanceShortName, SuccessEnvelope, WorldId};

use crate::client::Client;
use crate::error::Result;

impl Client {
    /// Creates an instance.
    ///
    /// `POST /instances`
    pub async fn create_instance(&self) -> Result<Instance> {
        self.request(Method::POST, "/instances", &[]).await
    }

    /// Closes an instance to new joiners.
    ///
    /// `DELETE /instances/{worldId}:{instanceId}`
    pub async fn close_instance(&self, world_id: &WorldId, instance_id: &str) -> Result<Instance> {
        self.request(
            Method::DELETE,
            &format!("/instances/{world_id}:{instance_id}"),
            &[],
        )
        .await
    }

    /// Fetches an instance.
    ///
    /// `GET /instances/{worldId}:{instanceId}`
    pub async fn get_instance(&self, world_id: &WorldId, instance_id: &str) -> Result<Instance> {
        self.request(
            Method::GET,
            &format!("/instances/{world_id}:{instance_id}"),
            &[],
        )
        .await
    }

    /// Fetches an instance's short and secure join names.
    ///
    /// `GET /instances/{worldId}:{instanceId}/shortName`
    pub async fn get_instance_short_name(
        &self,
        world_id: &WorldId,
        instance_id: &str,
    ) -> Result<InstanceShortName> {
        self.request(
            Method::GET,
            &format!("/instances/{world_id}:{instance_id}/shortName"),
            &[],
        )
        .await
    }

    /// Sends the caller an invite to the instance.
    ///
    /// `POST /instances/{worldId}:{instanceId}/invite`
    pub async fn send_self_invite(
        &self,
        world_id: &WorldId,
        instance_id: &str,
    ) -> Result<SuccessEnvelope> {
        self.request(
            Method::POST,
            &format!("/instances/{world_id}:{instance_id}/invite"),
            &[],
        )
        .await
    }

    /// Resolves an instance from its short join code.
    ///
    /// `GET /instances/s/{shortName}`
    pub async fn get_instance_by_short_name(&self, short_name: &str) -> Result<Instance> {
        self.request(Method::GET, &format!("/instances/s/{short_name}"), &[])
            .await
    }
}
