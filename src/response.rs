//! Response decoding and error mapping.
//!
//! Every response is read to the end before it is classified, so the
//! connection can go back to the pool whatever the outcome.

use std::time::Duration;

use bytes::Bytes;
use reqwest::header::{HeaderMap, LINK, RETRY_AFTER};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{FieldError, FreshError, ResultError};
use crate::retry::Retrier;

/// JSON error body sent with most non-success responses.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    description: String,
    #[serde(default)]
    errors: Vec<FieldError>,
}

/// A fully drained response.
#[derive(Debug, Clone)]
pub(crate) struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl RawResponse {
    /// Reads the whole body.
    pub(crate) async fn read(response: reqwest::Response) -> Result<Self, FreshError> {
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(FreshError::Transport)?;
        Ok(Self {
            status,
            headers,
            body,
        })
    }

    /// True if the server sent a `Link` header. Its content is not inspected.
    pub(crate) fn has_next_page(&self) -> bool {
        self.headers.contains_key(LINK)
    }

    /// Decodes a 200, 201 or 204 response into `T`; maps anything else to an
    /// error.
    ///
    /// An empty body leaves the destination at its zero value. It decodes
    /// as JSON `null` when the type accepts that (`()`, `Option<_>`,
    /// `serde_json::Value`), and as `{}` otherwise, so a struct whose fields
    /// all have defaults comes back as its default. A struct with required
    /// fields still fails with `FreshError::Decode`.
    pub(crate) fn decode<T>(self, retrier: &Retrier) -> Result<T, FreshError>
    where
        T: DeserializeOwned,
    {
        match self.status {
            StatusCode::OK | StatusCode::CREATED | StatusCode::NO_CONTENT => {
                decode_body(&self.body)
            }
            _ => Err(self.into_error(true, retrier)),
        }
    }

    /// Builds the structured error for a failed response.
    ///
    /// The body is parsed for a description and field errors only when
    /// `parse_body` is set and the status is not 404. When the retry policy
    /// accepts the error, `retry_after` is filled from the `Retry-After`
    /// header, or from the retrier's default.
    pub(crate) fn into_error(self, parse_body: bool, retrier: &Retrier) -> FreshError {
        let mut re = ResultError::new(self.status);

        if parse_body && self.status != StatusCode::NOT_FOUND && !is_blank(&self.body) {
            // Best effort: a malformed error body must not hide the status.
            if let Ok(eb) = serde_json::from_slice::<ErrorBody>(&self.body) {
                re.description = eb.description;
                re.errors = eb.errors;
            }
        }

        let mut err = FreshError::Api(re);
        if retrier.should_retry(&err) {
            let after = retry_after_header(&self.headers).unwrap_or_else(|| retrier.retry_after());
            if self.status == StatusCode::TOO_MANY_REQUESTS {
                tracing::warn!(
                    retry_after_secs = after.as_secs_f64(),
                    "Rate limited by server"
                );
            }
            if let FreshError::Api(re) = &mut err {
                re.retry_after = Some(after);
            }
        }
        err
    }
}

/// Parses `Retry-After` as a positive number of seconds.
fn retry_after_header(headers: &HeaderMap) -> Option<Duration> {
    headers
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.trim().parse::<u64>().ok())
        .filter(|&secs| secs > 0)
        .map(Duration::from_secs)
}

fn is_blank(body: &[u8]) -> bool {
    body.iter().all(u8::is_ascii_whitespace)
}

fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, FreshError> {
    if is_blank(body) {
        return T::deserialize(serde_json::Value::Null)
            .or_else(|_| T::deserialize(serde_json::Value::Object(serde_json::Map::new())))
            .map_err(FreshError::Decode);
    }
    serde_json::from_slice(body).map_err(FreshError::Decode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;
    use serde_json::json;

    fn response(status: u16, headers: &[(&'static str, &str)], body: &str) -> RawResponse {
        let mut map = HeaderMap::new();
        for (name, value) in headers {
            map.insert(*name, HeaderValue::from_str(value).unwrap());
        }
        RawResponse {
            status: StatusCode::from_u16(status).unwrap(),
            headers: map,
            body: Bytes::from(body.to_string()),
        }
    }

    fn retrier() -> Retrier {
        Retrier::new(3, Duration::from_secs(3))
    }

    #[test]
    fn test_decode_success_body() {
        let value: serde_json::Value = response(201, &[], r#"{"id":7}"#)
            .decode(&retrier())
            .unwrap();
        assert_eq!(value, json!({"id": 7}));
    }

    #[test]
    fn test_empty_no_content_is_a_no_op() {
        response(204, &[], "").decode::<()>(&retrier()).unwrap();
        let v: Option<serde_json::Value> = response(204, &[], "  ").decode(&retrier()).unwrap();
        assert!(v.is_none());
    }

    #[test]
    fn test_empty_body_into_struct_is_default() {
        #[derive(Debug, Default, PartialEq, Deserialize)]
        #[serde(default)]
        struct Ack {
            id: i64,
            name: String,
        }

        let ack: Ack = response(204, &[], "").decode(&retrier()).unwrap();
        assert_eq!(ack, Ack::default());
        let ack: Ack = response(200, &[], "\n").decode(&retrier()).unwrap();
        assert_eq!(ack, Ack::default());
    }

    #[test]
    fn test_empty_body_into_required_fields_is_decode_error() {
        #[derive(Debug, Deserialize)]
        #[allow(dead_code)]
        struct Strict {
            id: i64,
        }

        let err = response(204, &[], "").decode::<Strict>(&retrier()).unwrap_err();
        assert!(matches!(err, FreshError::Decode(_)));
    }

    #[test]
    fn test_malformed_success_body_is_decode_error() {
        let err = response(200, &[], "{not json")
            .decode::<serde_json::Value>(&retrier())
            .unwrap_err();
        assert!(matches!(err, FreshError::Decode(_)));
    }

    #[test]
    fn test_error_body_is_parsed() {
        let body = r#"{"description":"Validation failed","errors":[{"field":"email","message":"It should be a valid email","code":"invalid_value"}]}"#;
        let err = response(400, &[], body)
            .decode::<serde_json::Value>(&retrier())
            .unwrap_err();
        let FreshError::Api(re) = err else {
            panic!("expected api error");
        };
        assert_eq!(re.status, StatusCode::BAD_REQUEST);
        assert_eq!(re.description, "Validation failed");
        assert_eq!(re.errors.len(), 1);
        assert_eq!(re.errors[0].field, "email");
        assert_eq!(re.errors[0].code, "invalid_value");
        assert_eq!(re.retry_after, None);
    }

    #[test]
    fn test_not_found_body_is_ignored() {
        let body = r#"{"description":"Record not found","errors":[{"field":"id"}]}"#;
        let err = response(404, &[], body)
            .decode::<serde_json::Value>(&retrier())
            .unwrap_err();
        let FreshError::Api(re) = err else {
            panic!("expected api error");
        };
        assert_eq!(re.status, StatusCode::NOT_FOUND);
        assert!(re.description.is_empty());
        assert!(re.errors.is_empty());
    }

    #[test]
    fn test_garbage_error_body_keeps_status() {
        let err = response(422, &[], "<html>oops</html>").into_error(true, &retrier());
        assert_eq!(err.status(), Some(StatusCode::UNPROCESSABLE_ENTITY));
    }

    #[test]
    fn test_rate_limit_uses_retry_after_header() {
        let err = response(429, &[("retry-after", "5")], "").into_error(true, &retrier());
        assert_eq!(err.retry_after(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_rate_limit_without_header_uses_default() {
        let err = response(429, &[], "").into_error(true, &retrier());
        assert_eq!(err.retry_after(), Some(Duration::from_secs(3)));

        let err = response(503, &[("retry-after", "soon")], "").into_error(true, &retrier());
        assert_eq!(err.retry_after(), Some(Duration::from_secs(3)));
    }

    #[test]
    fn test_permanent_error_has_no_wait() {
        let err = response(400, &[("retry-after", "5")], "").into_error(true, &retrier());
        assert_eq!(err.retry_after(), None);
    }

    #[test]
    fn test_unparsed_error_for_downloads() {
        let err = response(403, &[], r#"{"description":"denied"}"#).into_error(false, &retrier());
        let FreshError::Api(re) = err else {
            panic!("expected api error");
        };
        assert!(re.description.is_empty());
    }

    #[test]
    fn test_has_next_page() {
        assert!(response(200, &[("link", "<https://x/api/v2/groups?page=2>; rel=\"next\"")], "[]")
            .has_next_page());
        assert!(!response(200, &[], "[]").has_next_page());
    }
}
