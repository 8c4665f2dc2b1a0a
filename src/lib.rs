//! # freshkit
//!
//! Typed async client for the Freshdesk and Freshservice REST APIs.
//!
//! Both products share one set of API conventions: Basic auth with an API
//! key, JSON or multipart bodies, `Link`-header pagination and structured
//! error bodies. [`Client`] implements those conventions once; the
//! [`freshdesk`] and [`freshservice`] wrappers map each endpoint onto it.
//!
//! ## Features
//!
//! - **Five primitives**: `get`, `list`, `post`, `put` and `delete`, plus
//!   file downloads, all behind one retry loop
//! - **Uploads**: payloads with files switch to multipart/form-data
//! - **Pagination**: page-at-a-time listing and callback iteration across
//!   every page
//! - **Retries**: 429 and 5xx responses are retried after `Retry-After` or
//!   the configured wait
//! - **Cancellation**: every request and retry wait observes a
//!   `CancellationToken`
//! - **Security**: credentials are redacted from debug output and logs
//!
//! ## Architecture
//!
//! - [`config`] - Configuration and credentials, loadable from environment
//! - [`error`] - Error types, including the structured API error
//! - [`client`] - Authenticated transport and the request primitives
//! - [`retry`] - Retry engine and retry policies
//! - [`body`] - Request bodies: JSON, multipart and custom
//! - [`pagination`] - List options and page cursors
//! - [`datetime`] - Wire formats for dates, timestamps and time spent
//! - [`models`] - Resource types for both products
//! - [`freshdesk`], [`freshservice`] - Product endpoint wrappers
//!
//! ## Configuration
//!
//! [`Config::from_env`] reads:
//!
//! - `FRESH_DOMAIN`: account domain, e.g. `acme.freshdesk.com`
//! - `FRESH_API_KEY`, or `FRESH_USERNAME` and `FRESH_PASSWORD`
//! - `FRESH_TIMEOUT_SECS`, `FRESH_MAX_RETRIES`, `FRESH_RETRY_AFTER_SECS`
//!
//! ## Example
//!
//! ```ignore
//! use freshkit::freshdesk::{Freshdesk, PageOption};
//! use freshkit::Config;
//!
//! async fn example() -> Result<(), freshkit::FreshError> {
//!     let fd = Freshdesk::new(&Config::from_env()?)?;
//!
//!     let page = fd.list_companies(Some(&PageOption::new(1, 10))).await?;
//!     for company in page.data {
//!         println!("#{}: {}", company.id, company.name);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod body;
pub mod client;
pub mod config;
pub mod datetime;
pub mod error;
pub mod freshdesk;
pub mod freshservice;
pub mod models;
pub mod pagination;
pub mod permalink;
pub mod retry;

mod response;

pub use body::{File, Files, Payload, Values, WithFiles};
pub use client::Client;
pub use config::{Config, Credentials};
pub use datetime::{Date, Time, TimeSpent};
pub use error::{FieldError, FreshError, ResultError};
pub use pagination::{FilterOption, ListOption, Page, PageOption, Pageable};
pub use retry::{DefaultRetryPolicy, Retrier, RetryPolicy};
