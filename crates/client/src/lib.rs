//! Typed async client for the VRChat REST API.
//!
//! One public method per remote endpoint: each call serializes its
//! parameters into path, query and body positions, performs a single
//! request round trip, and decodes the 2xx JSON body into the matching
//! type from [`vrchat_types`]. Any non-2xx answer becomes a
//! [`ClientError::Status`] carrying the code and the raw body; there is no
//! retry, caching or request coordination.
//!
//! ```no_run
//! use vrchat_client::Client;
//!
//! # async fn run() -> vrchat_client::Result<()> {
//! let client = Client::new()?;
//! client.authenticate("username", "password", "123456").await?;
//!
//! let me = client.get_current_user().await?;
//! let friends = client.get_friends(Default::default()).await?;
//! println!("{} has {} friends online", me.display_name, friends.len());
//! # Ok(())
//! # }
//! ```

mod auth;
mod avatars;
mod client;
mod config;
mod economy;
mod error;
mod favorites;
mod files;
mod friends;
mod groups;
mod instances;
mod invites;
mod notifications;
mod permissions;
mod playermoderation;
mod query;
mod system;
mod users;
mod worlds;

pub use auth::CheckUserExistsQuery;
pub use avatars::AvatarSearchQuery;
pub use client::Client;
pub use config::{Config, DEFAULT_BASE_URL};
pub use error::{ClientError, Result};
pub use favorites::FavoritesQuery;
pub use friends::FriendsQuery;
pub use groups::{GroupAuditLogsQuery, GroupMembersQuery};
pub use query::Pagination;
pub use system::{FrontendAssetQuery, InfoPushQuery};
pub use worlds::WorldSearchQuery;
