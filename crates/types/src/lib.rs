//! VRChat API schema types.
//!
//! This crate defines the data model for the VRChat REST API client: passive
//! structures mirroring the JSON shapes the API returns or consumes, string
//! enums for the API's fixed vocabularies, and newtype wrappers for resource
//! IDs. All types here are pure Rust with no I/O dependencies.

pub mod avatar;
pub mod economy;
pub mod envelope;
pub mod error;
pub mod favorite;
pub mod file;
pub mod group;
pub mod ids;
pub mod instance;
pub mod invite;
pub mod moderation;
pub mod notification;
pub mod permission;
pub mod system;
pub mod user;
pub mod world;

pub use avatar::{
    Avatar, CreateAvatarRequest, OrderOption, ReleaseStatus, SortOption, UnityPackage,
    UnityPackageUrlObject, UpdateAvatarRequest,
};
pub use economy::{
    License, LicenseAction, LicenseGroup, LicenseType, Subscription, SubscriptionPeriod,
    Transaction, TransactionAgreement, TransactionStatus, TransactionSteamInfo,
    TransactionSteamWalletInfo, UserSubscription,
};
pub use envelope::{ErrorEnvelope, ResponseMessage, SuccessEnvelope};
pub use error::UnknownWireValue;
pub use favorite::{
    AddFavoriteRequest, Favorite, FavoriteGroup, FavoriteGroupVisibility, FavoriteType,
    UpdateFavoriteGroupRequest,
};
pub use file::{
    CreateFileRequest, CreateFileVersionRequest, File, FileData, FileStatus, FileUploadType,
    FileUploadUrl, FileVersion, FileVersionUploadStatus, FinishFileDataUploadRequest, MimeType,
};
pub use group::{
    AddGroupGalleryImageRequest, BanGroupMemberRequest, CreateGroupAnnouncementRequest,
    CreateGroupGalleryRequest, CreateGroupInviteRequest, CreateGroupPostRequest,
    CreateGroupRequest, CreateGroupRoleRequest, Group, GroupAnnouncement, GroupAuditLogEntry,
    GroupAuditLogPage, GroupGallery, GroupGalleryImage, GroupInstance, GroupJoinRequestAction,
    GroupJoinState, GroupLimitedMember, GroupMember, GroupMemberLimitedUser, GroupMemberStatus,
    GroupMyMember, GroupPermission, GroupPost, GroupPostVisibility, GroupPrivacy, GroupRole,
    GroupRoleTemplate, GroupSearchSort, GroupUserVisibility, LimitedGroup, LimitedUserGroups,
    RepresentedGroup, RespondGroupJoinRequest, UpdateGroupGalleryRequest, UpdateGroupMemberRequest,
    UpdateGroupRequest, UpdateGroupRoleRequest,
};
pub use ids::{
    AvatarId, FavoriteGroupId, FavoriteId, FileId, GroupAnnouncementId, GroupAuditLogId,
    GroupGalleryId, GroupGalleryImageId, GroupId, GroupMemberId, GroupRoleId, InstanceId,
    InviteMessageId, LicenseGroupId, NotificationId, PermissionId, PlayerModerationId,
    TransactionId, UnityPackageId, UserId, WorldId,
};
pub use instance::{
    CreateInstanceRequest, GroupAccessType, Instance, InstancePlatforms, InstanceRegion,
    InstanceShortName, InstanceType, Region,
};
pub use invite::{
    InviteMessage, InviteMessageType, InviteRequest, InviteResponse, RequestInviteRequest,
    UpdateInviteMessageRequest,
};
pub use moderation::{ModerateUserRequest, PlayerModeration, PlayerModerationType};
pub use notification::{
    Notification, NotificationDetailInvite, NotificationDetailInviteResponse,
    NotificationDetailRequestInvite, NotificationDetailRequestInviteResponse,
    NotificationDetailVoteToKick, NotificationType, SentNotification,
};
pub use permission::Permission;
pub use system::{
    ApiConfig, ApiConfigAnnouncement, ApiConfigDownloadUrlList, ApiConfigEvents, ApiHealth,
    DeploymentGroup, DynamicContentRow, InfoPush, InfoPushData, InfoPushDataArticle,
    InfoPushDataArticleContent, InfoPushDataClickable,
};
pub use user::{
    AccountDeletionLog, Badge, CurrentUser, CurrentUserPresence, DeveloperType, FriendStatus,
    LimitedUser, PastDisplayName, TwoFactorAuthCode, TwoFactorEmailCode, UpdateUserRequest, User,
    UserExists, UserState, UserStatus, Verify2faEmailResult, Verify2faResult,
    VerifyAuthTokenResult,
};
pub use world::{
    CreateWorldRequest, LimitedUnityPackage, LimitedWorld, UpdateWorldRequest, World,
    WorldMetadata, WorldPublishStatus,
};
