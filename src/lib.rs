//! Typed Rust client for the SMSPortal REST API.
//!
//! The crate is split into a domain layer of validated values, a transport
//! layer for wire-format details, and a small client layer orchestrating
//! requests. Every privileged call re-authenticates first; HTTP error statuses
//! are returned to the caller as [`ApiResponse`] values rather than errors.
//!
//! ```rust,no_run
//! use smsportal::{BulkMessages, Credentials, SmsPortalClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), smsportal::SmsPortalError> {
//!     let mut client = SmsPortalClient::new(Credentials::from_env()?);
//!     let bulk = BulkMessages::broadcast(["27830000000"], "hello")?;
//!     let response = client.message().send(bulk.into()).await?;
//!     println!("{} {:?}", response.status, response.body);
//!     println!("balance: {:?}", client.balance().await?);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{DEFAULT_BASE_URI, SmsPortalClient, SmsPortalClientBuilder, SmsPortalError};
pub use domain::{
    ApiId, ApiResponse, ApiSecret, BulkMessages, Credentials, Destination, Message,
    MessageContent, Options, ValidationError,
};
