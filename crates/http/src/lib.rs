//! FancySpaces HTTP client
//!
//! Typed accessors for the platform APIs (core, identity provider,
//! analytics and storage), sharing one [`SessionStore`] for the
//! authentication-token lifecycle.
//!
//! ```no_run
//! use std::sync::Arc;
//! use fancyspaces_core::{ClientConfig, FileStorage, SessionStore};
//! use fancyspaces_http::FancySpacesClient;
//!
//! # async fn run() -> Result<(), fancyspaces_http::ClientError> {
//! let config = ClientConfig::default();
//! let session = Arc::new(SessionStore::restore(FileStorage::from_config(&config)));
//! let client = FancySpacesClient::new(config, session)?;
//!
//! if !client.is_authenticated().await {
//!     client.login("dev@example.com", "hunter2").await?;
//! }
//! let spaces = client.get_all_spaces().await?;
//! # Ok(())
//! # }
//! ```
//!
//! [`SessionStore`]: fancyspaces_core::SessionStore

pub mod client;
pub mod types;

pub use client::{ClientError, FancySpacesClient, FancySpacesClientBuilder};
