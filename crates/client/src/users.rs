//! User lookup operations.

use reqwest::Method;
use vrchat_types::{
    CurrentUser, Group, LimitedUser, LimitedUserGroups, RepresentedGroup, User, UserId,
};

use crate::client::Client;
use crate::error::Result;
use crate::query::Pagination;

impl Client {
    /// Searches users.
    ///
    /// `GET /users`
    pub async fn search_users(&self, page: Pagination) -> Result<Vec<LimitedUser>> {
        self.request(Method::GET, "/users", &page.to_query()).await
    }

    /// Fetches a user by login name.
    ///
    /// `GET /users/{username}/name`
    pub async fn get_user_by_name(&self, username: &str) -> Result<User> {
        self.request(Method::GET, &format!("/users/{username}/name"), &[])
            .await
    }

    /// Fetches a user by ID.
    ///
    /// `GET /users/{userId}`
    pub async fn get_user(&self, user_id: &UserId) -> Result<User> {
        self.request(Method::GET, &format!("/users/{user_id}"), &[])
            .await
    }

    /// Updates the account's profile.
    ///
    /// `PUT /users/{userId}`
    pub async fn update_user(&self, user_id: &UserId) -> Result<CurrentUser> {
        self.request(Method::PUT, &format!("/users/{user_id}"), &[])
            .await
    }

    /// Lists the groups a user belongs to.
    ///
    /// `GET /users/{userId}/groups`
    pub async fn get_user_groups(&self, user_id: &UserId) -> Result<Vec<LimitedUserGroups>> {
        self.request(Method::GET, &format!("/users/{user_id}/groups"), &[])
            .await
    }

    /// Lists the groups a user has asked to join.
    ///
    /// `GET /users/{userId}/groups/requested`
    pub async fn get_user_group_requests(&self, user_id: &UserId) -> Result<Vec<Group>> {
        self.request(
            Method::GET,
            &format!("/users/{user_id}/groups/requested"),
            &[],
        )
        .await
    }

    /// Fetches the group a user currently represents.
    ///
    /// `GET /users/{userId}/groups/represented`
    pub async fn get_user_represented_group(&self, user_id: &UserId) -> Result<RepresentedGroup> {
        self.request(
            Method::GET,
            &format!("/users/{user_id}/groups/represented"),
            &[],
        )
        .await
    }
}
