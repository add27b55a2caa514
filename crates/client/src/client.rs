//! The API client and its request plumbing.

use reqwest::{Method, StatusCode, header};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use vrchat_types::{ErrorEnvelope, TwoFactorAuthCode};

use crate::config::Config;
use crate::error::{ClientError, Result};

/// A session-holding client for the VRChat REST API.
///
/// The client owns the HTTP transport and its cookie jar. Calling
/// [`Client::authenticate`] once stores the session cookies the server
/// issues; every later request replays them automatically, so credentials
/// are sent exactly once. Cloning the client shares the same jar, and a
/// client may be used from concurrent tasks after that single
/// authentication.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    config: Config,
}

impl Client {
    /// Creates a client against the production API host.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] if the underlying HTTP client
    /// cannot be constructed.
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Creates a client with explicit connection settings.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] if the underlying HTTP client
    /// cannot be constructed.
    pub fn with_config(config: Config) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(header::ACCEPT, header::HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .default_headers(headers)
            .cookie_store(true)
            .build()?;

        Ok(Self { http, config })
    }

    /// Returns the configuration the client was built with.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Verifies credentials and a one-time TOTP code, storing the session
    /// cookies the server issues for all subsequent calls.
    ///
    /// `POST /auth/twofactorauth/totp/verify` with HTTP basic auth and a
    /// JSON body carrying the code. There is no retry, token refresh or
    /// expiry tracking; authenticate again when the session lapses.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Auth`] with the raw response body on any
    /// non-200 answer, or [`ClientError::Transport`] if the request never
    /// completed.
    pub async fn authenticate(&self, username: &str, password: &str, totp: &str) -> Result<()> {
        let url = self.endpoint("/auth/twofactorauth/totp/verify");
        debug!(%url, "authenticating");

        let response = self
            .http
            .post(&url)
            .basic_auth(username, Some(password))
            .json(&TwoFactorAuthCode {
                code: totp.to_string(),
            })
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Auth(body));
        }

        // Session cookies land in the shared jar as a side effect.
        Ok(())
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}{}",
            self.config.base_url.as_str().trim_end_matches('/'),
            path
        )
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(&'static str, String)],
        body: Option<&(impl Serialize + ?Sized)>,
    ) -> Result<reqwest::Response> {
        let url = self.endpoint(path);
        debug!(%method, %url, "sending request");

        let mut builder = self.http.request(method, &url);
        if !query.is_empty() {
            builder = builder.query(query);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        debug!(%status, %url, "received response");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = ErrorEnvelope::message_from_body(&body);
            return Err(ClientError::Status {
                status,
                message,
                body,
            });
        }

        Ok(response)
    }

    /// Dispatches a request and decodes the 2xx JSON body into `T`.
    pub(crate) async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<T> {
        let response = self.send(method, path, query, None::<&()>).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Dispatches a request and discards the 2xx body.
    pub(crate) async fn request_unit(
        &self,
        method: Method,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<()> {
        self.send(method, path, query, None::<&()>).await?;
        Ok(())
    }

    /// Dispatches a GET and returns the 2xx body as text.
    pub(crate) async fn request_text(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<String> {
        let response = self.send(Method::GET, path, query, None::<&()>).await?;
        Ok(response.text().await?)
    }

    /// Dispatches a GET and returns the 2xx body as raw bytes.
    pub(crate) async fn request_bytes(&self, path: &str) -> Result<Vec<u8>> {
        let response = self.send(Method::GET, path, &[], None::<&()>).await?;
        Ok(response.bytes().await?.to_vec())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use url::Url;

    fn client_at(base: &str) -> Client {
        Client::with_config(Config::new(Url::parse(base).unwrap())).unwrap()
    }

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let client = client_at("https://api.vrchat.cloud/api/1");
        assert_eq!(
            client.endpoint("/avatars"),
            "https://api.vrchat.cloud/api/1/avatars"
        );
    }

    #[test]
    fn test_endpoint_handles_trailing_slash_base() {
        let client = client_at("http://127.0.0.1:9090/");
        assert_eq!(client.endpoint("/health"), "http://127.0.0.1:9090/health");
    }

    #[test]
    fn test_endpoint_substituted_path() {
        let client = client_at("https://api.vrchat.cloud/api/1");
        let user_id = "usr_c1644b5b-3ca4-45b4-97c6-a2a0de70d469";
        assert_eq!(
            client.endpoint(&format!("/users/{user_id}")),
            "https://api.vrchat.cloud/api/1/users/usr_c1644b5b-3ca4-45b4-97c6-a2a0de70d469"
        );
    }

    #[test]
    fn test_endpoint_composite_location_path() {
        let client = client_at("https://api.vrchat.cloud/api/1");
        let world_id = "wrld_1";
        let instance_id = "12345~region(eu)";
        assert_eq!(
            client.endpoint(&format!("/instances/{world_id}:{instance_id}")),
            "https://api.vrchat.cloud/api/1/instances/wrld_1:12345~region(eu)"
        );
    }
}
