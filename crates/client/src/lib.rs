//! # Memoraid Client
//!
//! The backend is the single authority for every record the console shows. This crate
//! defines the [`AdminApi`] seam the console views talk to and [`HttpAdminApi`], its REST
//! implementation over `reqwest`.
//!
//! Handles:
//! - endpoint paths under the `users/` base path
//! - bearer authentication and request timeouts
//! - status and body decoding errors
//!
//! There are no retries. A failed call is returned to the caller as-is.

#![warn(rust_2018_idioms)]

pub mod api;
pub mod endpoints;
pub mod error;
pub mod http;

pub use api::AdminApi;
pub use error::{ClientError, ClientResult};
pub use http::HttpAdminApi;
