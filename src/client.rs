//! HTTP client shared by the Freshdesk and Freshservice wrappers.
//!
//! This module handles all communication with the vendor REST API:
//! authentication, body encoding, response decoding, retries and
//! `Link`-header pagination.
//!
//! # Retry Policy
//!
//! Every primitive (`get`, `list`, `post`, `put`, `delete` and the file
//! downloads) runs inside the same retry loop. By default it retries:
//! - transport failures (connect, DNS, timeout), after the configured wait
//! - HTTP 429 and 5xx, after `Retry-After` seconds or the configured wait
//!
//! Request bodies are re-encoded for every attempt.
//!
//! # Cancellation
//!
//! A client carries a [`CancellationToken`]. Cancelling it aborts the
//! in-flight request or retry wait of every operation started through that
//! client with [`FreshError::Cancelled`].

use std::path::Path;

use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::body::{Payload, CONTENT_TYPE_JSON};
use crate::config::{Config, Credentials};
use crate::error::FreshError;
use crate::pagination::{ListOption, Page, PageOption, Pageable};
use crate::response::RawResponse;
use crate::retry::{Retrier, RetryPolicy};

/// Client for one Freshdesk or Freshservice account.
///
/// Cloning is cheap: clones share the connection pool and retry policy.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    domain: String,
    credentials: Credentials,
    retry: Retrier,
    cancel: CancellationToken,
}

impl Client {
    /// Creates a new client from configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Domain, credentials, timeout and retry settings
    ///
    /// # Errors
    ///
    /// Returns `FreshError::HttpClient` if the HTTP client fails to initialize.
    pub fn new(config: &Config) -> Result<Self, FreshError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(FreshError::HttpClient)?;

        Ok(Self::with_http_client(config, http))
    }

    /// Creates a client that sends requests through a caller-supplied
    /// `reqwest::Client`.
    ///
    /// The configured timeout is not applied; set it on `http` instead.
    pub fn with_http_client(config: &Config, http: reqwest::Client) -> Self {
        let retry = Retrier::new(config.max_retries, config.retry_after)
            .with_redaction(config.credentials.secret());

        Self {
            http,
            base_url: config.base_url(),
            domain: config.domain.clone(),
            credentials: config.credentials.clone(),
            retry,
            cancel: CancellationToken::new(),
        }
    }

    /// Replaces the retry policy.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let client = Client::new(&config)?
    ///     .with_retry_policy(|e: &FreshError| e.status() == Some(StatusCode::SERVICE_UNAVAILABLE));
    /// ```
    pub fn with_retry_policy(mut self, policy: impl RetryPolicy + 'static) -> Self {
        self.retry = self.retry.with_policy(policy);
        self
    }

    /// Returns a clone of this client bound to `token`.
    ///
    /// Operations started on the returned client end with
    /// `FreshError::Cancelled` as soon as `token` is cancelled.
    pub fn with_cancellation(&self, token: CancellationToken) -> Self {
        Self {
            cancel: token,
            ..self.clone()
        }
    }

    /// The account domain as configured.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// The API base URL, ending in `/api/v2`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The retry settings in effect.
    pub fn retrier(&self) -> &Retrier {
        &self.retry
    }

    /// Returns the full URL for an API path such as `/tickets/1`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Tests connectivity and credentials.
    ///
    /// Lists a single role, which every agent account may read on both
    /// products.
    ///
    /// # Errors
    ///
    /// Returns `FreshError::ConnectionTest` with details about the failure
    /// reason, or `FreshError::Cancelled`.
    pub async fn test_connection(&self) -> Result<(), FreshError> {
        tracing::debug!(domain = %self.domain, "Testing connection");

        let url = self.endpoint("/roles");
        let result = self
            .list::<IgnoredAny, _>(&url, Some(&PageOption::new(1, 1)))
            .await;

        match result {
            Ok(_) => {
                tracing::info!("Connection test successful");
                Ok(())
            }
            Err(FreshError::Cancelled) => Err(FreshError::Cancelled),
            Err(e) if matches!(e.status(), Some(StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)) => {
                Err(FreshError::connection_test(
                    "Authentication failed - verify FRESH_API_KEY or FRESH_USERNAME/FRESH_PASSWORD",
                ))
            }
            Err(FreshError::Transport(e)) if e.is_timeout() => {
                Err(FreshError::connection_test(format!(
                    "Connection timed out - verify FRESH_DOMAIN ({}) is reachable",
                    self.domain
                )))
            }
            Err(e) => {
                let message =
                    FreshError::sanitize_message(&e.to_string(), self.credentials.secret());
                Err(FreshError::connection_test(message))
            }
        }
    }

    /// Fetches `url` and decodes the JSON response.
    ///
    /// A blank 200, 201 or 204 body leaves `T` at its zero value: `None`,
    /// `()`, `Value::Null`, or the `Default` of a struct whose fields are all
    /// `#[serde(default)]`. [`post`](Self::post) and [`put`](Self::put)
    /// decode the same way.
    ///
    /// # Errors
    ///
    /// Returns `FreshError::Api` for a non-success status, or the transport,
    /// decoding or cancellation failure.
    pub async fn get<T>(&self, url: &str) -> Result<T, FreshError>
    where
        T: DeserializeOwned,
    {
        let operation = operation(&Method::GET, url);
        self.retry
            .run(&operation, &self.cancel, || self.get_once(url))
            .await
    }

    async fn get_once<T>(&self, url: &str) -> Result<T, FreshError>
    where
        T: DeserializeOwned,
    {
        self.send(self.http.get(url), true)
            .await?
            .decode(&self.retry)
    }

    /// Fetches one page of a list endpoint.
    ///
    /// A present and non-empty `opts` replaces the query string of `url`.
    /// [`Page::has_next`] reports whether the response carried a `Link`
    /// header.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get), plus `FreshError::Validation` if `url`
    /// does not parse.
    pub async fn list<T, L>(&self, url: &str, opts: Option<&L>) -> Result<Page<T>, FreshError>
    where
        T: DeserializeOwned,
        L: ListOption + ?Sized,
    {
        let url = match opts {
            Some(lo) if !lo.is_empty() => with_query(url, lo)?,
            _ => url.to_string(),
        };

        let operation = operation(&Method::GET, &url);
        self.retry
            .run(&operation, &self.cancel, || self.list_once(&url))
            .await
    }

    async fn list_once<T>(&self, url: &str) -> Result<Page<T>, FreshError>
    where
        T: DeserializeOwned,
    {
        let raw = self.send(self.http.get(url), true).await?;
        let has_next = raw.has_next_page();
        let data = raw.decode(&self.retry)?;
        Ok(Page { data, has_next })
    }

    /// Walks every page of a list endpoint whose body is a JSON array,
    /// calling `each` once per item in page order.
    ///
    /// Missing options are synthesized; the page is clamped to at least 1
    /// and a missing page size becomes 100. Iteration stops at the first
    /// page without a `Link` header, or at the first error from `each`.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let mut names = Vec::new();
    /// client
    ///     .iterate(&client.endpoint("/groups"), None::<PageOption>, |g: Group| {
    ///         names.push(g.name);
    ///         Ok::<_, FreshError>(())
    ///     })
    ///     .await?;
    /// ```
    pub async fn iterate<T, L, E, F>(&self, url: &str, opts: Option<L>, each: F) -> Result<(), E>
    where
        T: DeserializeOwned,
        L: Pageable,
        E: From<FreshError>,
        F: FnMut(T) -> Result<(), E>,
    {
        self.iterate_with(url, opts, |items: Vec<T>| items, each)
            .await
    }

    /// Like [`iterate`](Self::iterate), for endpoints that wrap each page in
    /// an envelope. `extract` pulls the items out of a decoded page.
    pub async fn iterate_with<P, T, L, E, X, F>(
        &self,
        url: &str,
        opts: Option<L>,
        extract: X,
        mut each: F,
    ) -> Result<(), E>
    where
        P: DeserializeOwned,
        L: Pageable,
        E: From<FreshError>,
        X: Fn(P) -> Vec<T>,
        F: FnMut(T) -> Result<(), E>,
    {
        let mut lo = opts.unwrap_or_default();
        lo.normalize();

        loop {
            let page: Page<P> = self.list(url, Some(&lo)).await?;
            for item in extract(page.data) {
                each(item)?;
            }
            if !page.has_next {
                return Ok(());
            }
            lo.set_page(lo.page() + 1);
        }
    }

    /// Sends a POST with the given payload and decodes the response.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get), plus `FreshError::Encode` or
    /// `FreshError::Attachment` if the payload cannot be built. Those are
    /// never retried.
    pub async fn post<B, T>(&self, url: &str, payload: &Payload<'_, B>) -> Result<T, FreshError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let operation = operation(&Method::POST, url);
        self.retry
            .run(&operation, &self.cancel, || {
                self.send_payload_once(Method::POST, url, payload)
            })
            .await
    }

    /// Sends a PUT with the given payload and decodes the response.
    ///
    /// # Errors
    ///
    /// Same as [`post`](Self::post).
    pub async fn put<B, T>(&self, url: &str, payload: &Payload<'_, B>) -> Result<T, FreshError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let operation = operation(&Method::PUT, url);
        self.retry
            .run(&operation, &self.cancel, || {
                self.send_payload_once(Method::PUT, url, payload)
            })
            .await
    }

    async fn send_payload_once<B, T>(
        &self,
        method: Method,
        url: &str,
        payload: &Payload<'_, B>,
    ) -> Result<T, FreshError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let mut builder = self.http.request(method, url);
        if let Some(encoded) = payload.encode().await? {
            builder = builder
                .header(CONTENT_TYPE, encoded.content_type)
                .body(encoded.body);
        }

        self.send(builder, true).await?.decode(&self.retry)
    }

    /// Sends a DELETE. Any success body is discarded.
    pub async fn delete(&self, url: &str) -> Result<(), FreshError> {
        let operation = operation(&Method::DELETE, url);
        self.retry
            .run(&operation, &self.cancel, || async move {
                let _: IgnoredAny = self
                    .send(self.http.delete(url), true)
                    .await?
                    .decode(&self.retry)?;
                Ok(())
            })
            .await
    }

    /// Downloads `url` into memory.
    ///
    /// Any status other than 200 is an error; its body is not parsed.
    pub async fn read_file(&self, url: &str) -> Result<Bytes, FreshError> {
        self.fetch(url, true).await
    }

    /// Downloads a pre-signed `url` without sending credentials.
    pub async fn read_file_no_auth(&self, url: &str) -> Result<Bytes, FreshError> {
        self.fetch(url, false).await
    }

    /// Downloads `url` to `path`, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Same as [`read_file`](Self::read_file), plus `FreshError::Io` if the
    /// file cannot be written.
    pub async fn save_file(&self, url: &str, path: impl AsRef<Path>) -> Result<(), FreshError> {
        let data = self.fetch(url, true).await?;
        write_file(path.as_ref(), &data).await
    }

    /// Like [`save_file`](Self::save_file), without sending credentials.
    pub async fn save_file_no_auth(
        &self,
        url: &str,
        path: impl AsRef<Path>,
    ) -> Result<(), FreshError> {
        let data = self.fetch(url, false).await?;
        write_file(path.as_ref(), &data).await
    }

    /// Downloads `url` and writes it to `writer`, returning the byte count.
    ///
    /// Nothing is written unless the download succeeds, so a retried
    /// download never leaves partial output behind.
    pub async fn copy_file<W>(&self, url: &str, writer: &mut W) -> Result<u64, FreshError>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        let data = self.fetch(url, true).await?;
        copy_to(writer, &data).await
    }

    /// Like [`copy_file`](Self::copy_file), without sending credentials.
    pub async fn copy_file_no_auth<W>(&self, url: &str, writer: &mut W) -> Result<u64, FreshError>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        let data = self.fetch(url, false).await?;
        copy_to(writer, &data).await
    }

    async fn fetch(&self, url: &str, authenticate: bool) -> Result<Bytes, FreshError> {
        let operation = operation(&Method::GET, url);
        self.retry
            .run(&operation, &self.cancel, || self.fetch_once(url, authenticate))
            .await
    }

    async fn fetch_once(&self, url: &str, authenticate: bool) -> Result<Bytes, FreshError> {
        let raw = self.send(self.http.get(url), authenticate).await?;
        if raw.status != StatusCode::OK {
            return Err(raw.into_error(false, &self.retry));
        }
        Ok(raw.body)
    }

    /// Executes one physical roundtrip and drains the response.
    ///
    /// Authenticated calls get Basic credentials and a JSON content type
    /// when the request has none. Transport failures come back wrapped as
    /// retryable when the policy allows it.
    async fn send(
        &self,
        builder: RequestBuilder,
        authenticate: bool,
    ) -> Result<RawResponse, FreshError> {
        let builder = if authenticate {
            match &self.credentials {
                Credentials::ApiKey(key) => builder.basic_auth(key, Some("X")),
                Credentials::Basic { username, password } => {
                    builder.basic_auth(username, Some(password))
                }
            }
        } else {
            builder
        };

        let mut request = builder
            .build()
            .map_err(|e| FreshError::validation(format!("invalid request: {}", e)))?;

        if authenticate {
            request
                .headers_mut()
                .entry(CONTENT_TYPE)
                .or_insert(HeaderValue::from_static(CONTENT_TYPE_JSON));
        }

        tracing::debug!(
            method = %request.method(),
            url = %request.url(),
            headers = ?redacted_headers(request.headers()),
            "Sending request"
        );

        let roundtrip = async {
            let response = self
                .http
                .execute(request)
                .await
                .map_err(FreshError::Transport)?;
            RawResponse::read(response).await
        };

        let result = tokio::select! {
            biased;
            _ = self.cancel.cancelled() => return Err(FreshError::Cancelled),
            result = roundtrip => result,
        };

        match result {
            Ok(raw) => {
                tracing::debug!(
                    status = %raw.status,
                    headers = ?raw.headers,
                    "Received response"
                );
                Ok(raw)
            }
            Err(err) if self.retry.should_retry(&err) => {
                Err(FreshError::retryable(err, self.retry.retry_after()))
            }
            Err(err) => Err(err),
        }
    }
}

fn operation(method: &Method, url: &str) -> String {
    format!("{} {}", method, url)
}

/// Replaces the query string of `url` with the rendered list option.
fn with_query<L: ListOption + ?Sized>(url: &str, lo: &L) -> Result<String, FreshError> {
    let mut parsed = Url::parse(url)
        .map_err(|e| FreshError::validation(format!("invalid URL {:?}: {}", url, e)))?;
    parsed
        .query_pairs_mut()
        .clear()
        .extend_pairs(lo.values().iter());
    Ok(parsed.into())
}

fn redacted_headers(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| {
            let value = if name == AUTHORIZATION {
                "[REDACTED]".to_string()
            } else {
                value.to_str().unwrap_or("<binary>").to_string()
            };
            (name.as_str().to_string(), value)
        })
        .collect()
}

async fn write_file(path: &Path, data: &[u8]) -> Result<(), FreshError> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(dir).await?;
    }
    tokio::fs::write(path, data).await?;
    Ok(())
}

async fn copy_to<W>(writer: &mut W, data: &[u8]) -> Result<u64, FreshError>
where
    W: AsyncWrite + Unpin + ?Sized,
{
    writer.write_all(data).await?;
    writer.flush().await?;
    Ok(data.len() as u64)
}
