//! FancySpaces core types and utilities
//!
//! Holds everything a client needs that does not touch the network: the
//! session store and its token lifecycle, persistent session storage,
//! configuration, the notification queue and tracing setup.

pub mod config;
pub mod error;
pub mod notifications;
pub mod session;
pub mod storage;
pub mod token;
#[cfg(feature = "tracing")]
pub mod tracing;
pub mod user;

pub use config::ClientConfig;
pub use error::{CoreError, CoreResult};
pub use notifications::{Notification, NotificationQueue};
pub use session::{Clock, SessionState, SessionStore, SystemClock, TokenValidator};
pub use storage::{FileStorage, MemoryStorage, SessionStorage};
pub use token::{Claims, decode_claims, token_ttl};
pub use user::UserProfile;
