//! Freshdesk API wrapper.
//!
//! [`Freshdesk`] adds the Freshdesk endpoint table on top of the shared
//! [`Client`]. Every method is a thin mapping from arguments to a path and
//! one of the client primitives.
//!
//! # Example
//!
//! ```ignore
//! use freshkit::config::Config;
//! use freshkit::freshdesk::{Freshdesk, PageOption};
//!
//! async fn example() -> Result<(), freshkit::error::FreshError> {
//!     let fd = Freshdesk::new(&Config::from_env()?)?;
//!
//!     fd.iter_companies(None::<PageOption>, |c| {
//!         println!("{}: {}", c.id, c.name);
//!         Ok::<_, freshkit::error::FreshError>(())
//!     })
//!     .await
//! }
//! ```

mod admin;
mod agents;
mod companies;
mod contacts;
mod solutions;

use tokio_util::sync::CancellationToken;

use crate::client::Client;
use crate::config::Config;
use crate::error::FreshError;
use crate::permalink;

pub use crate::body::{File, Files, Payload, Values, WithFiles};
pub use crate::models::freshdesk::*;
pub use crate::models::{Attachment, CustomFields};
pub use crate::pagination::{FilterOption, ListOption, Page, PageOption, Pageable};
pub use contacts::ListContactsOption;

/// Client for the Freshdesk API.
#[derive(Debug, Clone)]
pub struct Freshdesk {
    client: Client,
}

impl Freshdesk {
    /// Creates a Freshdesk client from configuration.
    ///
    /// # Errors
    ///
    /// Returns `FreshError::HttpClient` if the HTTP client fails to initialize.
    pub fn new(config: &Config) -> Result<Self, FreshError> {
        Ok(Self::from_client(Client::new(config)?))
    }

    /// Wraps an existing client.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    /// The underlying client, for endpoints without a wrapper.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Returns a clone bound to `token`; see [`Client::with_cancellation`].
    pub fn with_cancellation(&self, token: CancellationToken) -> Self {
        Self::from_client(self.client.with_cancellation(token))
    }

    fn endpoint(&self, path: &str) -> String {
        self.client.endpoint(path)
    }

    /// Deletes an attachment from a ticket, conversation or article.
    pub async fn delete_attachment(&self, attachment_id: i64) -> Result<(), FreshError> {
        let url = self.endpoint(&format!("/attachments/{}", attachment_id));
        self.client.delete(&url).await
    }

    /// Gets a background job.
    pub async fn get_job(&self, job_id: &str) -> Result<Job, FreshError> {
        let url = self.endpoint(&format!("/jobs/{}", urlencoding::encode(job_id)));
        self.client.get(&url).await
    }

    /// Agent view of a ticket.
    pub fn agent_ticket_url(&self, ticket_id: i64) -> String {
        permalink::agent_ticket_url(self.client.domain(), ticket_id)
    }

    /// Customer portal view of a solution article.
    pub fn solution_article_url(&self, article_id: i64) -> String {
        permalink::solution_article_url(self.client.domain(), article_id)
    }

    /// Helpdesk download link for an attachment or avatar.
    pub fn helpdesk_attachment_url(&self, attachment_id: i64) -> String {
        permalink::helpdesk_attachment_url(self.client.domain(), attachment_id)
    }
}
