//! Freshservice API wrapper.
//!
//! Freshservice wraps every response in a named envelope. The methods here
//! unwrap it, so `get_agent_role` returns an [`AgentRole`] rather than
//! `{"role": {...}}`.
//!
//! # Example
//!
//! ```ignore
//! use freshkit::config::Config;
//! use freshkit::freshservice::Freshservice;
//!
//! async fn example() -> Result<(), freshkit::error::FreshError> {
//!     let fs = Freshservice::new(&Config::from_env()?)?;
//!     fs.save_attachment(1001, "downloads/report.pdf").await
//! }
//! ```

mod agents;
mod solutions;
mod workspaces;

use std::path::Path;

use bytes::Bytes;
use tokio::io::AsyncWrite;
use tokio_util::sync::CancellationToken;

use crate::client::Client;
use crate::config::Config;
use crate::error::FreshError;
use crate::permalink;

pub use crate::body::{File, Files, Payload, Values, WithFiles};
pub use crate::models::freshservice::*;
pub use crate::models::{Attachment, CustomFields};
pub use crate::pagination::{FilterOption, ListOption, Page, PageOption, Pageable};
pub use solutions::{ListArticlesOption, ListFoldersOption, SearchArticlesOption};

/// Client for the Freshservice API.
#[derive(Debug, Clone)]
pub struct Freshservice {
    client: Client,
}

impl Freshservice {
    /// Creates a Freshservice client from configuration.
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

    /// Downloads an attachment into memory.
    pub async fn read_attachment(&self, attachment_id: i64) -> Result<Bytes, FreshError> {
        let url = self.endpoint(&format!("/attachments/{}", attachment_id));
        self.client.read_file(&url).await
    }

    /// Downloads an attachment to `path`.
    pub async fn save_attachment(
        &self,
        attachment_id: i64,
        path: impl AsRef<Path>,
    ) -> Result<(), FreshError> {
        let url = self.endpoint(&format!("/attachments/{}", attachment_id));
        self.client.save_file(&url, path).await
    }

    /// Downloads an attachment into `writer`, returning the byte count.
    pub async fn copy_attachment<W>(&self, attachment_id: i64, writer: &mut W) -> Result<u64, FreshError>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        let url = self.endpoint(&format!("/attachments/{}", attachment_id));
        self.client.copy_file(&url, writer).await
    }

    /// Agent view of a ticket.
    pub fn agent_ticket_url(&self, ticket_id: i64) -> String {
        permalink::agent_ticket_url(self.client.domain(), ticket_id)
    }

    /// Portal view of a solution article.
    pub fn solution_article_url(&self, article_id: i64) -> String {
        permalink::solution_article_url(self.client.domain(), article_id)
    }

    /// Helpdesk download link for an attachment or avatar.
    pub fn helpdesk_attachment_url(&self, attachment_id: i64) -> String {
        permalink::helpdesk_attachment_url(self.client.domain(), attachment_id)
    }
}
