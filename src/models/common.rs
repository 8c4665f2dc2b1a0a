//! Types shared by both products.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::datetime::Time;

/// Free-form custom field values keyed by field name.
pub type CustomFields = BTreeMap<String, serde_json::Value>;

/// A file attached to a ticket, article or contact avatar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attachment {
    /// Unique attachment ID.
    pub id: i64,

    /// File name.
    pub name: String,

    /// MIME type reported by the server.
    pub content_type: String,

    /// Size in bytes.
    pub size: i64,

    /// Download URL. Usually pre-signed, so fetch it with the `_no_auth`
    /// download variants.
    pub attachment_url: String,

    /// Creation timestamp.
    pub created_at: Option<Time>,

    /// Last update timestamp.
    pub updated_at: Option<Time>,
}
