//! Group operations: lifecycle, membership, roles, bans, invites,
//! galleries, posts, announcements and audit logs.

use chrono::{DateTime, Utc};
use reqwest::Method;
use vrchat_types::{
    Group, GroupAnnouncement, GroupAuditLogPage, GroupGallery, GroupGalleryId, GroupGalleryImage,
    GroupGalleryImageId, GroupId, GroupInstance, GroupLimitedMember, GroupMember, GroupPermission,
    GroupPost, GroupRole, GroupRoleId, GroupSearchSort, LimitedGroup, NotificationId,
    SuccessEnvelope, UserId,
};

use crate::client::Client;
use crate::error::Result;
use crate::query::{Pagination, QueryPairs, push_param};

/// Query parameters for [`Client::get_group_audit_logs`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupAuditLogsQuery {
    /// Pagination window.
    pub page: Pagination,
    /// Only events at or after this time.
    pub start_date: Option<DateTime<Utc>>,
    /// Only events at or before this time.
    pub end_date: Option<DateTime<Utc>>,
}

impl GroupAuditLogsQuery {
    fn to_query(&self) -> QueryPairs {
        let mut query = self.page.to_query();
        if let Some(start) = self.start_date {
            query.push(("startDate", start.to_rfc3339()));
        }
        if let Some(end) = self.end_date {
            query.push(("endDate", end.to_rfc3339()));
        }
        query
    }
}

/// Query parameters for [`Client::get_group_members`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroupMembersQuery {
    /// Pagination window.
    pub page: Pagination,
    /// Sort order.
    pub sort: Option<GroupSearchSort>,
}

impl GroupMembersQuery {
    fn to_query(self) -> QueryPairs {
        let mut query = self.page.to_query();
        push_param(&mut query, "sort", self.sort.as_ref());
        query
    }
}

impl Client {
    /// Searches groups.
    ///
    /// `GET /groups`
    pub async fn search_groups(&self, page: Pagination) -> Result<Vec<LimitedGroup>> {
        let mut query = QueryPairs::new();
        push_param(&mut query, "offset", page.offset.as_ref());
        push_param(&mut query, "n", page.n.as_ref());
        self.request(Method::GET, "/groups", &query).await
    }

    /// Creates a group.
    ///
    /// `POST /groups`
    pub async fn create_group(&self) -> Result<Group> {
        self.request(Method::POST, "/groups", &[]).await
    }

    /// Updates a group.
    ///
    /// `PUT /groups/{groupId}`
    pub async fn update_group(&self, group_id: &GroupId) -> Result<Group> {
        self.request(Method::PUT, &format!("/groups/{group_id}"), &[])
            .await
    }

    /// Deletes a group.
    ///
    /// `DELETE /groups/{groupId}`
    pub async fn delete_group(&self, group_id: &GroupId) -> Result<SuccessEnvelope> {
        self.request(Method::DELETE, &format!("/groups/{group_id}"), &[])
            .await
    }

    /// Fetches a group.
    ///
    /// `GET /groups/{groupId}`
    pub async fn get_group(&self, group_id: &GroupId) -> Result<Group> {
        self.request(Method::GET, &format!("/groups/{group_id}"), &[])
            .await
    }

    /// Removes the group's announcement.
    ///
    /// `DELETE /groups/{groupId}/announcement`
    pub async fn delete_group_announcement(&self, group_id: &GroupId) -> Result<SuccessEnvelope> {
        self.request(
            Method::DELETE,
            &format!("/groups/{group_id}/announcement"),
            &[],
        )
        .await
    }

    /// Fetches the group's announcement.
    ///
    /// `GET /groups/{groupId}/announcement`
    pub async fn get_group_announcements(&self, group_id: &GroupId) -> Result<GroupAnnouncement> {
        self.request(Method::GET, &format!("/groups/{group_id}/announcement"), &[])
            .await
    }

    /// Posts a new announcement, replacing the current one.
    ///
    /// `POST /groups/{groupId}/announcement`
    pub async fn create_group_announcement(&self, group_id: &GroupId) -> Result<GroupAnnouncement> {
        self.request(
            Method::POST,
            &format!("/groups/{group_id}/announcement"),
            &[],
        )
        .await
    }

    /// Pages through the group's audit log.
    ///
    /// `GET /groups/{groupId}/auditLogs`
    pub async fn get_group_audit_logs(
        &self,
        group_id: &GroupId,
        query: &GroupAuditLogsQuery,
    ) -> Result<GroupAuditLogPage> {
        self.request(
            Method::GET,
            &format!("/groups/{group_id}/auditLogs"),
            &query.to_query(),
        )
        .await
    }

    /// Lists banned members.
    ///
    /// `GET /groups/{groupId}/bans`
    pub async fn get_group_bans(
        &self,
        group_id: &GroupId,
        page: Pagination,
    ) -> Result<Vec<GroupMember>> {
        self.request(
            Method::GET,
            &format!("/groups/{group_id}/bans"),
            &page.to_query(),
        )
        .await
    }

    /// Bans a member.
    ///
    /// `POST /groups/{groupId}/bans`
    pub async fn ban_group_member(&self, group_id: &GroupId) -> Result<GroupMember> {
        self.request(Method::POST, &format!("/groups/{group_id}/bans"), &[])
            .await
    }

    /// Lifts a ban.
    ///
    /// `DELETE /groups/{groupId}/bans/{userId}`
    pub async fn unban_group_member(
        &self,
        group_id: &GroupId,
        user_id: &UserId,
    ) -> Result<GroupMember> {
        self.request(
            Method::DELETE,
            &format!("/groups/{group_id}/bans/{user_id}"),
            &[],
        )
        .await
    }

    /// Creates a gallery.
    ///
    /// `POST /groups/{groupId}/galleries`
    pub async fn create_group_gallery(&self, group_id: &GroupId) -> Result<GroupGallery> {
        self.request(Method::POST, &format!("/groups/{group_id}/galleries"), &[])
            .await
    }

    /// Deletes a gallery.
    ///
    /// `DELETE /groups/{groupId}/galleries/{groupGalleryId}`
    pub async fn delete_group_gallery(
        &self,
        group_id: &GroupId,
        gallery_id: &GroupGalleryId,
    ) -> Result<SuccessEnvelope> {
        self.request(
            Method::DELETE,
            &format!("/groups/{group_id}/galleries/{gallery_id}"),
            &[],
        )
        .await
    }

    /// Lists the images in a gallery.
    ///
    /// `GET /groups/{groupId}/galleries/{groupGalleryId}`
    pub async fn get_group_gallery_images(
        &self,
        group_id: &GroupId,
        gallery_id: &GroupGalleryId,
        page: Pagination,
    ) -> Result<Vec<GroupGalleryImage>> {
        self.request(
            Method::GET,
            &format!("/groups/{group_id}/galleries/{gallery_id}"),
            &page.to_query(),
        )
        .await
    }

    /// Updates a gallery.
    ///
    /// `PUT /groups/{groupId}/galleries/{groupGalleryId}`
    pub async fn update_group_gallery(
        &self,
        group_id: &GroupId,
        gallery_id: &GroupGalleryId,
    ) -> Result<GroupGallery> {
        self.request(
            Method::PUT,
            &format!("/groups/{group_id}/galleries/{gallery_id}"),
            &[],
        )
        .await
    }

    /// Submits an image to a gallery.
    ///
    /// `POST /groups/{groupId}/galleries/{groupGalleryId}/images`
    pub async fn add_group_gallery_image(
        &self,
        group_id: &GroupId,
        gallery_id: &GroupGalleryId,
    ) -> Result<GroupGalleryImage> {
        self.request(
            Method::POST,
            &format!("/groups/{group_id}/galleries/{gallery_id}/images"),
            &[],
        )
        .await
    }

    /// Removes an image from a gallery.
    ///
    /// `DELETE /groups/{groupId}/galleries/{groupGalleryId}/images/{groupGalleryImageId}`
    pub async fn delete_group_gallery_image(
        &self,
        group_id: &GroupId,
        gallery_id: &GroupGalleryId,
        image_id: &GroupGalleryImageId,
    ) -> Result<SuccessEnvelope> {
        self.request(
            Method::DELETE,
            &format!("/groups/{group_id}/galleries/{gallery_id}/images/{image_id}"),
            &[],
        )
        .await
    }

    /// Lists the group's live instances.
    ///
    /// `GET /groups/{groupId}/instances`
    pub async fn get_group_instances(&self, group_id: &GroupId) -> Result<Vec<GroupInstance>> {
        self.request(Method::GET, &format!("/groups/{group_id}/instances"), &[])
            .await
    }

    /// Lists outstanding invites.
    ///
    /// `GET /groups/{groupId}/invites`
    pub async fn get_group_invites(
        &self,
        group_id: &GroupId,
        page: Pagination,
    ) -> Result<Vec<GroupMember>> {
        self.request(
            Method::GET,
            &format!("/groups/{group_id}/invites"),
            &page.to_query(),
        )
        .await
    }

    /// Invites a user to the group.
    ///
    /// `POST /groups/{groupId}/invites`
    pub async fn create_group_invite(&self, group_id: &GroupId) -> Result<()> {
        self.request_unit(Method::POST, &format!("/groups/{group_id}/invites"), &[])
            .await
    }

    /// Withdraws an invite.
    ///
    /// `DELETE /groups/{groupId}/invites/{userId}`
    pub async fn delete_group_invite(&self, group_id: &GroupId, user_id: &UserId) -> Result<()> {
        self.request_unit(
            Method::DELETE,
            &format!("/groups/{group_id}/invites/{user_id}"),
            &[],
        )
        .await
    }

    /// Joins the group.
    ///
    /// `POST /groups/{groupId}/join`
    pub async fn join_group(&self, group_id: &GroupId) -> Result<GroupMember> {
        self.request(Method::POST, &format!("/groups/{group_id}/join"), &[])
            .await
    }

    /// Leaves the group.
    ///
    /// `POST /groups/{groupId}/leave`
    pub async fn leave_group(&self, group_id: &GroupId) -> Result<()> {
        self.request_unit(Method::POST, &format!("/groups/{group_id}/leave"), &[])
            .await
    }

    /// Lists the group's members.
    ///
    /// `GET /groups/{groupId}/members`
    pub async fn get_group_members(
        &self,
        group_id: &GroupId,
        query: GroupMembersQuery,
    ) -> Result<Vec<GroupMember>> {
        self.request(
            Method::GET,
            &format!("/groups/{group_id}/members"),
            &query.to_query(),
        )
        .await
    }

    /// Kicks a member.
    ///
    /// `DELETE /groups/{groupId}/members/{userId}`
    pub async fn kick_group_member(&self, group_id: &GroupId, user_id: &UserId) -> Result<()> {
        self.request_unit(
            Method::DELETE,
            &format!("/groups/{group_id}/members/{user_id}"),
            &[],
        )
        .await
    }

    /// Fetches one membership record.
    ///
    /// `GET /groups/{groupId}/members/{userId}`
    pub async fn get_group_member(
        &self,
        group_id: &GroupId,
        user_id: &UserId,
    ) -> Result<GroupLimitedMember> {
        self.request(
            Method::GET,
            &format!("/groups/{group_id}/members/{user_id}"),
            &[],
        )
        .await
    }

    /// Updates a membership record.
    ///
    /// `PUT /groups/{groupId}/members/{userId}`
    pub async fn update_group_member(
        &self,
        group_id: &GroupId,
        user_id: &UserId,
    ) -> Result<GroupLimitedMember> {
        self.request(
            Method::PUT,
            &format!("/groups/{group_id}/members/{user_id}"),
            &[],
        )
        .await
    }

    /// Takes a role away from a member; returns their remaining role IDs.
    ///
    /// `DELETE /groups/{groupId}/members/{userId}/roles/{groupRoleId}`
    pub async fn remove_group_member_role(
        &self,
        group_id: &GroupId,
        user_id: &UserId,
        role_id: &GroupRoleId,
    ) -> Result<Vec<GroupRoleId>> {
        self.request(
            Method::DELETE,
            &format!("/groups/{group_id}/members/{user_id}/roles/{role_id}"),
            &[],
        )
        .await
    }

    /// Grants a role to a member; returns their resulting role IDs.
    ///
    /// `PUT /groups/{groupId}/members/{userId}/roles/{groupRoleId}`
    pub async fn add_group_member_role(
        &self,
        group_id: &GroupId,
        user_id: &UserId,
        role_id: &GroupRoleId,
    ) -> Result<Vec<GroupRoleId>> {
        self.request(
            Method::PUT,
            &format!("/groups/{group_id}/members/{user_id}/roles/{role_id}"),
            &[],
        )
        .await
    }

    /// Lists the permissions the caller holds in the group.
    ///
    /// `GET /groups/{groupId}/permissions`
    pub async fn get_group_permissions(&self, group_id: &GroupId) -> Result<Vec<GroupPermission>> {
        self.request(Method::GET, &format!("/groups/{group_id}/permissions"), &[])
            .await
    }

    /// Reads the group's feed.
    ///
    /// `GET /groups/{groupId}/posts`
    pub async fn get_group_posts(&self, group_id: &GroupId, page: Pagination) -> Result<GroupPost> {
        self.request(
            Method::GET,
            &format!("/groups/{group_id}/posts"),
            &page.to_query(),
        )
        .await
    }

    /// Adds a post to the group's feed.
    ///
    /// `POST /groups/{groupId}/posts`
    pub async fn add_group_post(&self, group_id: &GroupId) -> Result<GroupPost> {
        self.request(Method::POST, &format!("/groups/{group_id}/posts"), &[])
            .await
    }

    /// Deletes a post.
    ///
    /// `DELETE /groups/{groupId}/posts/{notificationId}`
    pub async fn delete_group_post(
        &self,
        group_id: &GroupId,
        post_id: &NotificationId,
    ) -> Result<SuccessEnvelope> {
        self.request(
            Method::DELETE,
            &format!("/groups/{group_id}/posts/{post_id}"),
            &[],
        )
        .await
    }

    /// Edits a post.
    ///
    /// `PUT /groups/{groupId}/posts/{notificationId}`
    pub async fn update_group_post(
        &self,
        group_id: &GroupId,
        post_id: &NotificationId,
    ) -> Result<GroupPost> {
        self.request(
            Method::PUT,
            &format!("/groups/{group_id}/posts/{post_id}"),
            &[],
        )
        .await
    }

    /// Withdraws the caller's join request.
    ///
    /// `DELETE /groups/{groupId}/requests`
    pub async fn cancel_group_request(&self, group_id: &GroupId) -> Result<()> {
        self.request_unit(Method::DELETE, &format!("/groups/{group_id}/requests"), &[])
            .await
    }

    /// Lists pending join requests.
    ///
    /// `GET /groups/{groupId}/requests`
    pub async fn get_group_requests(
        &self,
        group_id: &GroupId,
        page: Pagination,
    ) -> Result<Vec<GroupMember>> {
        self.request(
            Method::GET,
            &format!("/groups/{group_id}/requests"),
            &page.to_query(),
        )
        .await
    }

    /// Accepts or rejects a join request.
    ///
    /// `PUT /groups/{groupId}/requests/{userId}`
    pub async fn respond_group_join_request(
        &self,
        group_id: &GroupId,
        user_id: &UserId,
    ) -> Result<()> {
        self.request_unit(
            Method::PUT,
            &format!("/groups/{group_id}/requests/{user_id}"),
            &[],
        )
        .await
    }

    /// Lists the group's roles.
    ///
    /// `GET /groups/{groupId}/roles`
    pub async fn get_group_roles(&self, group_id: &GroupId) -> Result<Vec<GroupRole>> {
        self.request(Method::GET, &format!("/groups/{group_id}/roles"), &[])
            .await
    }

    /// Creates a role.
    ///
    /// `POST /groups/{groupId}/roles`
    pub async fn create_group_role(&self, group_id: &GroupId) -> Result<GroupRole> {
        self.request(Method::POST, &format!("/groups/{group_id}/roles"), &[])
            .await
    }

    /// Deletes a role; returns the remaining roles.
    ///
    /// `DELETE /groups/{groupId}/roles/{groupRoleId}`
    pub async fn delete_group_role(
        &self,
        group_id: &GroupId,
        role_id: &GroupRoleId,
    ) -> Result<Vec<GroupRole>> {
        self.request(
            Method::DELETE,
            &format!("/groups/{group_id}/roles/{role_id}"),
            &[],
        )
        .await
    }

    /// Updates a role; returns the resulting roles.
    ///
    /// `PUT /groups/{groupId}/roles/{groupRoleId}`
    pub async fn update_group_role(
        &self,
        group_id: &GroupId,
        role_id: &GroupRoleId,
    ) -> Result<Vec<GroupRole>> {
        self.request(
            Method::PUT,
            &format!("/groups/{group_id}/roles/{role_id}"),
            &[],
        )
        .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_audit_logs_query_dates_are_rfc3339() {
        let query = GroupAuditLogsQuery {
            page: Pagination::first(50),
            start_date: Some(Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()),
            end_date: None,
        };
        assert_eq!(
            query.to_query(),
            vec![
                ("n", "50".to_string()),
                ("startDate", "2024-01-02T03:04:05+00:00".to_string()),
            ]
        );
    }

    #[test]
    fn test_members_query_sort() {
        let query = GroupMembersQuery {
            page: Pagination::default(),
            sort: Some(GroupSearchSort::JoinedAtDesc),
        };
        assert_eq!(query.to_query(), vec![("sort", "joinedAt:desc".to_string())]);
    }
}
