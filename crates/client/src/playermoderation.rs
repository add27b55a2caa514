//! Player moderation operations (mute, block, interaction toggles).

use reqwest::Method;
use vrchat_types::{PlayerModeration, PlayerModerationId, SuccessEnvelope};

use crate::client::Client;
use crate::error::Result;

impl Client {
    /// Removes every moderation the account has applied.
    ///
    /// `DELETE /auth/user/playermoderations`
    pub async fn clear_all_player_moderations(&self) -> Result<SuccessEnvelope> {
        self.request(Method::DELETE, "/auth/user/playermoderations", &[])
            .await
    }

    /// Lists the moderations the account has applied.
    ///
    /// `GET /auth/user/playermoderations`
    pub async fn get_player_moderations(&self) -> Result<Vec<PlayerModeration>> {
        self.request(Method::GET, "/auth/user/playermoderations", &[])
            .await
    }

    /// Applies a moderation to another player.
    ///
    /// `POST /auth/user/playermoderations`
    pub async fn moderate_user(&self) -> Result<PlayerModeration> {
        self.request(Method::POST, "/auth/user/playermoderations", &[])
            .await
    }

    /// Removes one moderation record.
    ///
    /// `DELETE /auth/user/playermoderations/{playerModerationId}`
    pub async fn delete_player_moderation(
        &self,
        moderation_id: &PlayerModerationId,
    ) -> Result<SuccessEnvelope> {
        self.request(
            Method::DELETE,
            &format!("/auth/user/playermoderations/{moderation_id}"),
            &[],
        )
        .await
    }

    /// Fetches one moderation record.
    ///
    /// `GET /auth/user/playermoderations/{playerModerationId}`
    pub async fn get_player_moderation(
        &self,
        moderation_id: &PlayerModerationId,
    ) -> Result<PlayerModeration> {
        self.request(
            Method::GET,
            &format!("/auth/user/playermoderations/{moderation_id}"),
            &[],
        )
        .await
    }

    /// Removes a moderation by target and type.
    ///
    /// `PUT /auth/user/unplayermoderate`
    pub async fn unmoderate_user(&self) -> Result<SuccessEnvelope> {
        self.request(Method::PUT, "/auth/user/unplayermoderate", &[])
            .await
    }
}
