//! Social-graph operations.

use reqwest::Method;
use vrchat_types::{FriendStatus, LimitedUser, Notification, SuccessEnvelope, UserId};

use crate::client::Client;
use crate::error::Result;
use crate::query::{Pagination, QueryPairs, push_param};

/// Query parameters for [`Client::get_friends`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FriendsQuery {
    /// Pagination window.
    pub page: Pagination,
    /// List offline friends instead of online ones.
    pub offline: Option<bool>,
}

impl FriendsQuery {
    fn to_query(self) -> QueryPairs {
        let mut query = QueryPairs::new();
        push_param(&mut query, "offset", self.page.offset.as_ref());
        push_param(&mut query, "n", self.page.n.as_ref());
        push_param(&mut query, "offline", self.offline.as_ref());
        query
    }
}

impl Client {
    /// Lists the account's friends.
    ///
    /// `GET /auth/user/friends`
    pub async fn get_friends(&self, query: FriendsQuery) -> Result<Vec<LimitedUser>> {
        self.request(Method::GET, "/auth/user/friends", &query.to_query())
            .await
    }

    /// Withdraws an outgoing friend request.
    ///
    /// `DELETE /user/{userId}/friendRequest`
    pub async fn delete_friend_request(&self, user_id: &UserId) -> Result<SuccessEnvelope> {
        self.request(
            Method::DELETE,
            &format!("/user/{user_id}/friendRequest"),
            &[],
        )
        .await
    }

    /// Sends a friend request.
    ///
    /// `POST /user/{userId}/friendRequest`
    pub async fn friend(&self, user_id: &UserId) -> Result<Notification> {
        self.request(Method::POST, &format!("/user/{user_id}/friendRequest"), &[])
            .await
    }

    /// Reports the friendship state between the caller and a user.
    ///
    /// `GET /user/{userId}/friendStatus`
    pub async fn get_friend_status(&self, user_id: &UserId) -> Result<FriendStatus> {
        self.request(Method::GET, &format!("/user/{user_id}/friendStatus"), &[])
            .await
    }

    /// Removes a friend.
    ///
    /// `DELETE /auth/user/friends/{userId}`
    pub async fn unfriend(&self, user_id: &UserId) -> Result<SuccessEnvelope> {
        self.request(
            Method::DELETE,
            &format!("/auth/user/friends/{user_id}"),
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
    fn test_friends_query_offline_flag() {
        let query = FriendsQuery {
            page: Pagination::default(),
            offline: Some(true),
        };
        assert_eq!(query.to_query(), vec![("offline", "true".to_string())]);
    }
}
