//! Async REST client for the medical clinics booking service.
//!
//! The crate owns the authenticated session for one running client (the
//! analog of a browser tab), guards access to role-protected screens, and
//! funnels every request through a single pipeline that injects the bearer
//! token and reacts to error status codes.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use clinics_client::{ClinicsClient, Config, LoginRequest};
//!
//! let config = Config::from_env()?;
//! let client = ClinicsClient::new(&config, navigator);
//!
//! let user = client
//!     .login(&LoginRequest {
//!         email: "example@example.com".into(),
//!         password: "1Abcdef?".into(),
//!     })
//!     .await?;
//! println!("logged in as {:?}", user.role);
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod error_feed;
pub mod guard;
pub mod pipeline;
pub mod routes;
pub mod session;
pub mod types;
pub mod validate;

#[cfg(test)]
pub(crate) mod test_util;

pub use client::ClinicsClient;
pub use config::Config;
pub use error::{ClientError, Result};
pub use error_feed::ErrorFeed;
pub use guard::{admin_guard, auth_guard, credentials_guard};
pub use routes::{Navigate, Route};
pub use session::{MemoryStorage, Session, TokenStorage};
pub use types::{LoginRequest, RegisterRequest, Role, UserData};
