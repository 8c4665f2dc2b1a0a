//! Request body construction.
//!
//! A request body is chosen explicitly at the call site through [`Payload`]:
//! nothing, a JSON document, a multipart form with file attachments, or a
//! pre-built custom body. Encoding happens once per attempt so a retried
//! upload always sends a fresh body.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use bytes::{BufMut, Bytes, BytesMut};
use serde::Serialize;

use crate::datetime::Time;
use crate::error::FreshError;

/// Content type for JSON request bodies.
pub const CONTENT_TYPE_JSON: &str = "application/json; charset=\"utf-8\"";

/// An ordered map of form or query keys to one or more values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Values(BTreeMap<String, Vec<String>>);

impl Values {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the values for `key` with a single value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), vec![value.into()]);
    }

    /// Appends a value for `key`.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.entry(key.into()).or_default().push(value.into());
    }

    /// Sets `key` unless `value` is empty.
    pub fn set_string(&mut self, key: &str, value: &str) {
        if !value.is_empty() {
            self.set(key, value);
        }
    }

    /// Sets `key` unless `value` is zero.
    pub fn set_int(&mut self, key: &str, value: i64) {
        if value != 0 {
            self.set(key, value.to_string());
        }
    }

    /// Sets `key` to `true` when `value` is set.
    pub fn set_bool(&mut self, key: &str, value: bool) {
        if value {
            self.set(key, "true");
        }
    }

    /// Sets `key` to the RFC 3339 form of `value`, if present.
    pub fn set_time(&mut self, key: &str, value: Option<&Time>) {
        if let Some(t) = value {
            self.set(key, t.to_string());
        }
    }

    /// Replaces the values for `key` with every non-empty entry of `values`.
    pub fn set_strings<S: AsRef<str>>(&mut self, key: &str, values: &[S]) {
        self.0.remove(key);
        for v in values.iter().map(AsRef::as_ref).filter(|v| !v.is_empty()) {
            self.add(key, v);
        }
    }

    /// Returns the first value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|vs| vs.first()).map(String::as_str)
    }

    /// Returns every value for `key`.
    pub fn get_all(&self, key: &str) -> &[String] {
        self.0.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    /// Returns true if no key is set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates `(key, value)` pairs, repeating the key for multi-valued entries.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .flat_map(|(k, vs)| vs.iter().map(move |v| (k.as_str(), v.as_str())))
    }
}

#[derive(Debug, Clone)]
enum FileSource {
    Data(Bytes),
    Path(PathBuf),
}

/// A file attachment for a multipart upload.
///
/// The content is either held in memory or read from disk when the body is
/// encoded.
#[derive(Debug, Clone)]
pub struct File {
    field: String,
    name: String,
    source: FileSource,
}

impl File {
    /// An attachment read from `path` at encode time.
    pub fn from_path(field: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            field: field.into(),
            name,
            source: FileSource::Path(path),
        }
    }

    /// An in-memory attachment.
    pub fn from_bytes(
        field: impl Into<String>,
        name: impl Into<String>,
        data: impl Into<Bytes>,
    ) -> Self {
        Self {
            field: field.into(),
            name: name.into(),
            source: FileSource::Data(data.into()),
        }
    }

    /// The form field this file is sent under.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The file name sent to the server.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The on-disk path, for attachments read at encode time.
    pub fn path(&self) -> Option<&Path> {
        match &self.source {
            FileSource::Path(p) => Some(p),
            FileSource::Data(_) => None,
        }
    }

    async fn read(&self) -> Result<Bytes, FreshError> {
        match &self.source {
            FileSource::Data(data) => Ok(data.clone()),
            FileSource::Path(path) => tokio::fs::read(path)
                .await
                .map(Bytes::from)
                .map_err(|source| FreshError::Attachment {
                    path: path.clone(),
                    source,
                }),
        }
    }
}

/// A list of file attachments.
pub type Files = Vec<File>;

/// Payload types that may carry file attachments.
///
/// When [`files`](WithFiles::files) is non-empty the payload is sent as
/// multipart form data built from [`values`](WithFiles::values) and the files;
/// otherwise it is sent as JSON.
pub trait WithFiles {
    /// Attachments to upload.
    fn files(&self) -> Files;

    /// Ordinary form fields sent alongside the files.
    fn values(&self) -> Values;
}

/// The body of a POST or PUT request.
#[derive(Debug)]
pub enum Payload<'a, T: ?Sized = ()> {
    /// No body at all, for parameterless actions.
    Empty,
    /// A value encoded as JSON.
    Json(&'a T),
    /// Form fields and attachments encoded as `multipart/form-data`.
    Multipart {
        /// Ordinary fields, written first.
        values: Values,
        /// Attachments, written after the fields.
        files: Files,
    },
    /// A pre-built body sent verbatim.
    Custom {
        /// Raw body bytes.
        body: Bytes,
        /// Content type announced for the body.
        content_type: String,
    },
}

impl Payload<'static, ()> {
    /// A request without a body.
    pub fn empty() -> Self {
        Payload::Empty
    }

    /// A multipart form.
    pub fn multipart(values: Values, files: Files) -> Self {
        Payload::Multipart { values, files }
    }

    /// A pre-built body, e.g. a raw binary upload.
    pub fn custom(body: impl Into<Bytes>, content_type: impl Into<String>) -> Self {
        Payload::Custom {
            body: body.into(),
            content_type: content_type.into(),
        }
    }
}

impl<'a, T: ?Sized> Payload<'a, T> {
    /// A JSON body.
    pub fn json(value: &'a T) -> Self {
        Payload::Json(value)
    }
}

impl<'a, T: WithFiles> Payload<'a, T> {
    /// Multipart when `value` carries attachments, JSON otherwise.
    pub fn from_form(value: &'a T) -> Self {
        let files = value.files();
        if files.is_empty() {
            Payload::Json(value)
        } else {
            Payload::Multipart {
                values: value.values(),
                files,
            }
        }
    }
}

/// An encoded body and its content type.
#[derive(Debug, Clone)]
pub struct EncodedBody {
    /// Body bytes.
    pub body: Bytes,
    /// Value for the `Content-Type` header.
    pub content_type: String,
}

impl<T: Serialize + ?Sized> Payload<'_, T> {
    /// Encodes the payload.
    ///
    /// Returns `None` for [`Payload::Empty`].
    ///
    /// # Errors
    ///
    /// Returns `FreshError::Encode` if JSON serialization fails, or
    /// `FreshError::Attachment` if an on-disk attachment cannot be read. Any
    /// failure aborts the whole build.
    pub async fn encode(&self) -> Result<Option<EncodedBody>, FreshError> {
        match self {
            Payload::Empty => Ok(None),
            Payload::Json(value) => {
                let body = serde_json::to_vec(value).map_err(FreshError::Encode)?;
                Ok(Some(EncodedBody {
                    body: Bytes::from(body),
                    content_type: CONTENT_TYPE_JSON.to_string(),
                }))
            }
            Payload::Multipart { values, files } => {
                let mut mw = MultipartWriter::new();
                mw.write_fields(values);
                for file in files {
                    let data = file.read().await?;
                    mw.write_file(file.field(), file.name(), &data);
                }
                let content_type = mw.content_type();
                Ok(Some(EncodedBody {
                    body: mw.finish(),
                    content_type,
                }))
            }
            Payload::Custom { body, content_type } => Ok(Some(EncodedBody {
                body: body.clone(),
                content_type: content_type.clone(),
            })),
        }
    }
}

/// Incremental `multipart/form-data` encoder.
#[derive(Debug)]
pub struct MultipartWriter {
    boundary: String,
    buf: BytesMut,
}

impl Default for MultipartWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl MultipartWriter {
    /// Creates a writer with a fresh boundary.
    pub fn new() -> Self {
        Self::with_boundary(generate_boundary())
    }

    /// Creates a writer with a fixed boundary.
    ///
    /// The boundary must not appear in any part data.
    pub fn with_boundary(boundary: impl Into<String>) -> Self {
        Self {
            boundary: boundary.into(),
            buf: BytesMut::new(),
        }
    }

    /// The boundary string.
    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    /// Returns `multipart/form-data; boundary=<boundary>`.
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    /// Writes a plain form field.
    pub fn write_field(&mut self, name: &str, value: &str) {
        self.write_part_header(name, None);
        self.buf.put_slice(b"\r\n");
        self.buf.put_slice(value.as_bytes());
        self.buf.put_slice(b"\r\n");
    }

    /// Writes every value of every key.
    pub fn write_fields(&mut self, values: &Values) {
        for (name, value) in values.iter() {
            self.write_field(name, value);
        }
    }

    /// Writes a file part.
    pub fn write_file(&mut self, name: &str, filename: &str, data: &[u8]) {
        self.write_part_header(name, Some(filename));
        self.buf
            .put_slice(b"Content-Type: application/octet-stream\r\n\r\n");
        self.buf.put_slice(data);
        self.buf.put_slice(b"\r\n");
    }

    /// Appends the closing boundary and returns the body.
    pub fn finish(mut self) -> Bytes {
        self.buf.put_slice(b"--");
        self.buf.put_slice(self.boundary.as_bytes());
        self.buf.put_slice(b"--\r\n");
        self.buf.freeze()
    }

    fn write_part_header(&mut self, name: &str, filename: Option<&str>) {
        self.buf.put_slice(b"--");
        self.buf.put_slice(self.boundary.as_bytes());
        self.buf.put_slice(b"\r\n");

        self.buf
            .put_slice(b"Content-Disposition: form-data; name=\"");
        self.buf.put_slice(escape_quotes(name).as_bytes());
        self.buf.put_slice(b"\"");
        if let Some(filename) = filename {
            self.buf.put_slice(b"; filename=\"");
            self.buf.put_slice(escape_quotes(filename).as_bytes());
            self.buf.put_slice(b"\"");
        }
        self.buf.put_slice(b"\r\n");
    }
}

fn escape_quotes(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Generates a boundary unique within this process.
fn generate_boundary() -> String {
    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    let seq = COUNTER.fetch_add(1, Ordering::Relaxed);

    format!("----FreshkitBoundary{:x}{:04x}", timestamp, seq)
}
