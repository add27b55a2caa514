//! System endpoints: runtime configuration, info pushes, health.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::avatar::ReleaseStatus;
use crate::ids::{AvatarId, WorldId};

/// Which API deployment cluster is responding. `blue` and `green` are
/// production; `grape` and `cherry` are development.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentGroup {
    /// Production cluster.
    Blue,
    /// Production cluster.
    Green,
    /// Development cluster.
    Grape,
    /// Development cluster.
    Cherry,
}

/// A public announcement carried in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfigAnnouncement {
    /// Announcement name.
    pub name: String,
    /// Announcement text.
    pub text: String,
}

/// Download links for development assets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfigDownloadUrlList {
    /// Bootstrap download link.
    pub bootstrap: String,
    /// Legacy SDK2 download link.
    pub sdk2: String,
    /// SDK3 for avatars.
    #[serde(rename = "sdk3-avatars")]
    pub sdk3_avatars: String,
    /// SDK3 for worlds.
    #[serde(rename = "sdk3-worlds")]
    pub sdk3_worlds: String,
    /// Creator companion download link.
    pub vcc: String,
}

/// A curated content row shown by the game client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicContentRow {
    /// Row position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<i64>,
    /// Row name.
    pub name: String,
    /// Usually `ThisPlatformSupported`, sometimes `all` or a platform name.
    pub platform: String,
    /// Sort heading.
    pub sort_heading: String,
    /// Sort direction.
    pub sort_order: String,
    /// Ownership filter.
    pub sort_ownership: String,
    /// Tag the row filters on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// Content type; absent for world rows.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub row_type: Option<String>,
}

/// Undocumented event-networking tunables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiConfigEvents {
    /// Tunable.
    pub distance_close: i64,
    /// Tunable.
    pub distance_factor: i64,
    /// Tunable.
    pub distance_far: i64,
    /// Tunable.
    pub group_distance: i64,
    /// Tunable.
    pub maximum_bunch_size: i64,
    /// Tunable.
    pub not_visible_factor: i64,
    /// Tunable.
    pub player_order_bucket_size: i64,
    /// Tunable.
    pub player_order_factor: i64,
    /// Tunable.
    pub slow_update_factor_threshold: i64,
    /// Tunable.
    pub view_segment_length: i64,
}

/// Runtime configuration served at `/config`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiConfig {
    /// Operator's office address.
    pub address: String,
    /// Public announcements.
    pub announcements: Vec<ApiConfigAnnouncement>,
    /// Game name.
    pub app_name: String,
    /// Supported language codes.
    pub available_language_codes: Vec<String>,
    /// Supported languages.
    pub available_languages: Vec<String>,
    /// API server build tag.
    pub build_version_tag: String,
    /// API key expected on all other requests.
    pub client_api_key: String,
    /// Undocumented client tunable.
    #[serde(rename = "clientBPSCeiling")]
    pub client_bps_ceiling: i64,
    /// Undocumented client tunable.
    pub client_disconnect_timeout: i64,
    /// Undocumented client tunable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_net_dispatch_thread: Option<bool>,
    /// Undocumented client tunable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_net_in_thread: Option<bool>,
    /// Undocumented client tunable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_net_in_thread2: Option<bool>,
    /// Undocumented client tunable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_net_in_thread_mobile: Option<bool>,
    /// Undocumented client tunable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_net_in_thread_mobile2: Option<bool>,
    /// Undocumented client tunable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_net_out_thread: Option<bool>,
    /// Undocumented client tunable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_net_out_thread2: Option<bool>,
    /// Undocumented client tunable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_net_out_thread_mobile: Option<bool>,
    /// Undocumented client tunable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_net_out_thread_mobile2: Option<bool>,
    /// Undocumented client tunable.
    #[serde(rename = "clientQR", default, skip_serializing_if = "Option::is_none")]
    pub client_qr: Option<i64>,
    /// Undocumented client tunable.
    #[serde(rename = "clientReservedPlayerBPS")]
    pub client_reserved_player_bps: i64,
    /// Undocumented client tunable.
    pub client_sent_count_allowance: i64,
    /// Operator's contact email.
    pub contact_email: String,
    /// Operator's copyright-issues email.
    pub copyright_email: String,
    /// Current privacy agreement version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_privacy_version: Option<i64>,
    /// Current terms of service version.
    #[serde(rename = "currentTOSVersion")]
    pub current_tos_version: i64,
    /// Avatar assigned to new accounts.
    pub default_avatar: AvatarId,
    /// Which deployment cluster responded.
    pub deployment_group: DeploymentGroup,
    /// Development language codes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dev_language_codes: Option<Vec<String>>,
    /// Legacy SDK link; superseded by `download_urls`.
    pub dev_sdk_url: String,
    /// Version of the development SDK.
    pub dev_sdk_version: String,
    /// Undocumented countdown.
    #[serde(rename = "dis-countdown")]
    pub dis_countdown: DateTime<Utc>,
    /// Undocumented toggle.
    #[serde(
        rename = "disableAVProInProton",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub disable_av_pro_in_proton: Option<bool>,
    /// Whether avatar cloning is globally disabled.
    pub disable_avatar_copying: bool,
    /// Whether avatar upload gating is disabled.
    pub disable_avatar_gating: bool,
    /// Whether the captcha is disabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_captcha: Option<bool>,
    /// Whether community labs is disabled.
    pub disable_community_labs: bool,
    /// Whether promotion out of community labs is disabled.
    pub disable_community_labs_promotion: bool,
    /// Whether email features are disabled.
    pub disable_email: bool,
    /// Whether analytics are disabled.
    pub disable_event_stream: bool,
    /// Whether feedback gating is disabled.
    pub disable_feedback_gating: bool,
    /// Whether frontend web builds are disabled.
    pub disable_frontend_builds: bool,
    /// Undocumented toggle.
    pub disable_hello: bool,
    /// Whether Oculus subscription signup is disabled.
    pub disable_oculus_subs: bool,
    /// Whether new account registration is disabled.
    pub disable_registration: bool,
    /// Whether Steam networking is disabled.
    pub disable_steam_networking: bool,
    /// Whether two-factor auth is disabled.
    pub disable_two_factor_auth: bool,
    /// Whether Udon is disabled in-game.
    pub disable_udon: bool,
    /// Whether account upgrading is disabled.
    pub disable_upgrade_account: bool,
    /// Game download link for the Oculus Rift store.
    pub download_link_windows: String,
    /// Development asset download links.
    pub download_urls: ApiConfigDownloadUrlList,
    /// Curated world rows shown by the game client.
    pub dynamic_world_rows: Vec<DynamicContentRow>,
    /// Undocumented economy pause window end.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub economy_pause_end: Option<String>,
    /// Undocumented economy pause window start.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub economy_pause_start: Option<String>,
    /// Undocumented economy state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub economy_state: Option<i64>,
    /// Event-networking tunables.
    pub events: ApiConfigEvents,
    /// Default home world.
    pub home_world_id: WorldId,
    /// Redirect target when opening the API host in a browser.
    pub homepage_redirect_target: String,
    /// Hub world.
    pub hub_world_id: WorldId,
    /// Origins worlds may load images from.
    pub image_host_url_list: Vec<String>,
    /// Operator's job application email.
    pub jobs_email: String,
    /// Operator's moderation email.
    pub moderation_email: String,
    /// In-game message for avatar selection restrictions.
    pub not_allowed_to_select_avatar_in_private_world_message: String,
    /// SHA1 of the media URL resolver in use.
    #[serde(rename = "player-url-resolver-sha1")]
    pub player_url_resolver_sha1: String,
    /// Version of the media URL resolver in use.
    #[serde(rename = "player-url-resolver-version")]
    pub player_url_resolver_version: String,
    /// Developer FAQ link.
    pub sdk_developer_faq_url: String,
    /// Official Discord link.
    pub sdk_discord_url: String,
    /// SDK message for accounts not yet allowed to publish.
    pub sdk_not_allowed_to_publish_message: String,
    /// Unity version supported by the SDK.
    pub sdk_unity_version: String,
    /// Name of the API server that responded.
    pub server_name: String,
    /// Origins worlds may load strings from.
    pub string_host_url_list: Vec<String>,
    /// Operator's support email.
    pub support_email: String,
    /// World users are placed in when timed out.
    pub time_out_world_id: WorldId,
    /// Tutorial world.
    pub tutorial_world_id: WorldId,
    /// Maximum update rate, in milliseconds.
    pub update_rate_ms_maximum: i64,
    /// Minimum update rate, in milliseconds.
    pub update_rate_ms_minimum: i64,
    /// Normal update rate, in milliseconds.
    pub update_rate_ms_normal: i64,
    /// Update rate for manually-synced Udon, in milliseconds.
    pub update_rate_ms_udon_manual: i64,
    /// Percentage of uploads sent to analysis.
    pub upload_analysis_percent: i64,
    /// URLs that bypass the untrusted-URL setting.
    pub url_list: Vec<String>,
    /// Undocumented voice toggle.
    pub use_reliable_udp_for_voice: bool,
    /// Game download link for the Steam store.
    pub vive_windows_url: String,
    /// Undocumented voice toggle.
    #[serde(rename = "VoiceEnableDegradation")]
    pub voice_enable_degradation: bool,
    /// Undocumented voice toggle.
    #[serde(rename = "VoiceEnableReceiverLimiting")]
    pub voice_enable_receiver_limiting: bool,
    /// Origins allowed to host avatar assets.
    pub white_listed_asset_urls: Vec<String>,
}

/// Action bound to a clickable info push element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoPushDataClickable {
    /// Command to run.
    pub command: String,
    /// Command parameters; holds the link for `OpenURL`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<String>>,
}

/// Content of an info push article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoPushDataArticleContent {
    /// Illustration URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Action when pressed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_pressed: Option<InfoPushDataClickable>,
    /// Article text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// An info push article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoPushDataArticle {
    /// Article content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<InfoPushDataArticleContent>,
}

/// Payload of an info push.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoPushData {
    /// Article payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article: Option<InfoPushDataArticle>,
    /// Content row payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_list: Option<DynamicContentRow>,
    /// Description text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Illustration URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Action when pressed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_pressed: Option<InfoPushDataClickable>,
    /// Template the push renders with.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    /// Payload version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// A targeted announcement from `/infoPush`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoPush {
    /// When the push was created.
    pub created_at: DateTime<Utc>,
    /// Payload.
    pub data: InfoPushData,
    /// When the push stops showing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    /// Content MD5.
    pub hash: String,
    /// Push ID.
    pub id: String,
    /// Whether the push is enabled.
    pub is_enabled: bool,
    /// Display priority.
    pub priority: i64,
    /// Publication state.
    pub release_status: ReleaseStatus,
    /// When the push starts showing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    /// Audience tags.
    pub tags: Vec<String>,
    /// When the push was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Health report served at `/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// API server build tag.
    pub build_version_tag: String,
    /// Whether the server considers itself healthy.
    pub ok: bool,
    /// Name of the API server that responded.
    pub server_name: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_api_health_deserializes() {
        let json = r#"{"buildVersionTag":"build_1234","ok":true,"serverName":"api-blue-1"}"#;
        let health: ApiHealth = serde_json::from_str(json).unwrap();
        assert!(health.ok);
        assert_eq!(health.server_name, "api-blue-1");
    }

    #[test]
    fn test_deployment_group_roundtrip() {
        assert_eq!(
            serde_json::from_str::<DeploymentGroup>("\"cherry\"").unwrap(),
            DeploymentGroup::Cherry
        );
    }

    #[test]
    fn test_download_url_list_hyphenated_keys() {
        let json = r#"{
            "bootstrap": "https://example/bootstrap",
            "sdk2": "https://example/sdk2",
            "sdk3-avatars": "https://example/sdk3a",
            "sdk3-worlds": "https://example/sdk3w",
            "vcc": "https://example/vcc"
        }"#;
        let urls: ApiConfigDownloadUrlList = serde_json::from_str(json).unwrap();
        assert_eq!(urls.sdk3_avatars, "https://example/sdk3a");
    }
}
