//! Session and account operations.

use reqwest::Method;
use vrchat_types::{
    CurrentUser, SuccessEnvelope, UserExists, UserId, Verify2faEmailResult, Verify2faResult,
    VerifyAuthTokenResult,
};

use crate::client::Client;
use crate::error::Result;
use crate::query::{QueryPairs, push_param};

/// Query parameters for [`Client::check_user_exists`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckUserExistsQuery {
    /// Email address to check.
    pub email: Option<String>,
    /// Display name to check.
    pub display_name: Option<String>,
    /// Username to check.
    pub username: Option<String>,
    /// User to exclude from the check, for renames.
    pub exclude_user_id: Option<UserId>,
}

impl CheckUserExistsQuery {
    fn to_query(&self) -> QueryPairs {
        let mut query = QueryPairs::new();
        push_param(&mut query, "email", self.email.as_ref());
        push_param(&mut query, "displayName", self.display_name.as_ref());
        push_param(&mut query, "username", self.username.as_ref());
        push_param(&mut query, "excludeUserId", self.exclude_user_id.as_ref());
        query
    }
}

impl Client {
    /// Checks whether a username, display name or email is already taken.
    ///
    /// `GET /auth/exists`
    pub async fn check_user_exists(&self, query: &CheckUserExistsQuery) -> Result<UserExists> {
        self.request(Method::GET, "/auth/exists", &query.to_query())
            .await
    }

    /// Fetches the authenticated account.
    ///
    /// `GET /auth/user`
    pub async fn get_current_user(&self) -> Result<CurrentUser> {
        self.request(Method::GET, "/auth/user", &[]).await
    }

    /// Verifies a pending TOTP challenge on the current session.
    ///
    /// `POST /auth/twofactorauth/totp/verify`
    pub async fn verify_two_factor(&self) -> Result<Verify2faResult> {
        self.request(Method::POST, "/auth/twofactorauth/totp/verify", &[])
            .await
    }

    /// Verifies a recovery code on the current session.
    ///
    /// `POST /auth/twofactorauth/otp/verify`
    pub async fn verify_recovery_code(&self) -> Result<Verify2faResult> {
        self.request(Method::POST, "/auth/twofactorauth/otp/verify", &[])
            .await
    }

    /// Verifies an emailed one-time code on the current session.
    ///
    /// `POST /auth/twofactorauth/emailotp/verify`
    pub async fn verify_two_factor_email_code(&self) -> Result<Verify2faEmailResult> {
        self.request(Method::POST, "/auth/twofactorauth/emailotp/verify", &[])
            .await
    }

    /// Checks whether the stored session cookie is still valid.
    ///
    /// `GET /auth`
    pub async fn verify_auth_token(&self) -> Result<VerifyAuthTokenResult> {
        self.request(Method::GET, "/auth", &[]).await
    }

    /// Ends the current session.
    ///
    /// `PUT /logout`
    pub async fn logout(&self) -> Result<SuccessEnvelope> {
        self.request(Method::PUT, "/logout", &[]).await
    }

    /// Schedules the account for deletion.
    ///
    /// `PUT /users/{userId}/delete`
    pub async fn delete_user(&self, user_id: &UserId) -> Result<CurrentUser> {
        self.request(Method::PUT, &format!("/users/{user_id}/delete"), &[])
            .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_check_user_exists_query_keys() {
        let query = CheckUserExistsQuery {
            email: None,
            display_name: Some("tupper".to_string()),
            username: None,
            exclude_user_id: Some("usr_1".into()),
        };
        assert_eq!(
            query.to_query(),
            vec![
                ("displayName", "tupper".to_string()),
                ("excludeUserId", "usr_1".to_string()),
            ]
        );
    }
}
