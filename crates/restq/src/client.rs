//! REST operations against the hosted queue service.

use crate::RestqError;
use log::{debug, info};
use reqwest::{StatusCode, Url, header::CONTENT_TYPE};

pub const DEFAULT_BASE_URL: &str = "http://restq.io/rest_api/";

/// Output of a Get that found the queue empty (HTTP 204).
pub const EMPTY_QUEUE_MARKER: &str = "Empty queue";

pub const MAX_QUEUE_ID_LENGTH: usize = 255;

/// Successful operation result: response text plus the status to report.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub body: String,
    pub status: i32,
}

impl Reply {
    fn new(body: String, status: i32) -> Self {
        Self { body, status }
    }
}

// =============================================================================
// ADDRESSING
// =============================================================================

/// Checks that a queue id can stand as a single path segment under the
/// service root.
///
/// Rejected: empty or longer than 255 bytes, `.` and `..`, path or query
/// delimiters (`/ \ ? #`), whitespace and control characters. Anything else
/// is percent-encoded as needed when the address is built.
pub fn validate_queue_id(queue: &str) -> Result<(), RestqError> {
    let invalid = |reason: &str| RestqError::Address {
        queue: queue.to_string(),
        reason: reason.to_string(),
    };

    if queue.is_empty() || queue.len() > MAX_QUEUE_ID_LENGTH {
        return Err(invalid("queue id must be between 1 and 255 bytes"));
    }
    if queue == "." || queue == ".." {
        return Err(invalid("queue id must not be a relative path segment"));
    }
    let breaks_address =
        |ch: char| matches!(ch, '/' | '\\' | '?' | '#') || ch.is_whitespace() || ch.is_control();
    if let Some(ch) = queue.chars().find(|&ch| breaks_address(ch)) {
        return Err(invalid(&format!("queue id must not contain {ch:?}")));
    }
    Ok(())
}

// =============================================================================
// CLIENT
// =============================================================================

#[derive(Debug, Clone)]
pub struct RestqClient {
    http: reqwest::Client,
    base_url: Url,
}

impl RestqClient {
    pub fn new() -> Self {
        Self::with_http_client(reqwest::Client::new(), default_base_url())
    }

    /// Client targeting another service root. A trailing `/` is added when
    /// missing so queue ids join as the last path segment.
    pub fn with_base_url(base_url: &str) -> Result<Self, RestqError> {
        Ok(Self::with_http_client(
            reqwest::Client::new(),
            parse_base_url(base_url)?,
        ))
    }

    pub fn with_http_client(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn queue_url(&self, queue: &str) -> Result<Url, RestqError> {
        validate_queue_id(queue)?;
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| RestqError::Address {
                queue: queue.to_string(),
                reason: format!("base url '{}' cannot carry a path", self.base_url),
            })?
            .pop_if_empty()
            .push(queue);
        Ok(url)
    }

    /// Creates a queue. The reply body is the service's JSON document naming
    /// the new queue; the reported status is 0.
    pub async fn create(&self) -> Result<Reply, RestqError> {
        debug!("POST {}", self.base_url);
        let response = self
            .http
            .post(self.base_url.clone())
            .send()
            .await
            .map_err(|e| RestqError::from_transport_error(e, "create"))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(RestqError::service("create", status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| RestqError::from_transport_error(e, "create response body"))?;
        info!("Created queue: {}", body.trim());
        Ok(Reply::new(body, 0))
    }

    /// Pops one item. 200 returns the item, 204 returns [`EMPTY_QUEUE_MARKER`].
    pub async fn get(&self, queue: &str) -> Result<Reply, RestqError> {
        let url = self.queue_url(queue)?;
        debug!("GET {url}");
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| RestqError::from_transport_error(e, "get"))?;

        let status = response.status();
        match status {
            StatusCode::OK => {
                let body = response
                    .text()
                    .await
                    .map_err(|e| RestqError::from_transport_error(e, "get response body"))?;
                Ok(Reply::new(body, i32::from(status.as_u16())))
            }
            StatusCode::NO_CONTENT => {
                debug!("Queue '{queue}' is empty");
                Ok(Reply::new(
                    EMPTY_QUEUE_MARKER.to_string(),
                    i32::from(status.as_u16()),
                ))
            }
            _ => Err(RestqError::service("get", status.as_u16())),
        }
    }

    /// Pushes `message` onto `queue` as a JSON body.
    pub async fn put(&self, message: &str, queue: &str) -> Result<(), RestqError> {
        let url = self.queue_url(queue)?;
        debug!("PUT {url} ({} bytes)", message.len());
        let response = self
            .http
            .put(url)
            .header(CONTENT_TYPE, "application/json")
            .body(message.to_string())
            .send()
            .await
            .map_err(|e| RestqError::from_transport_error(e, "put"))?;

        match response.status() {
            StatusCode::OK => Ok(()),
            status => Err(RestqError::service("put", status.as_u16())),
        }
    }
}

impl Default for RestqClient {
    fn default() -> Self {
        Self::new()
    }
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("default base url is valid")
}

fn parse_base_url(base_url: &str) -> Result<Url, RestqError> {
    let normalized = if base_url.ends_with('/') {
        base_url.to_string()
    } else {
        format!("{base_url}/")
    };
    Url::parse(&normalized).map_err(|e| RestqError::Address {
        queue: String::new(),
        reason: format!("invalid base url '{base_url}': {e}"),
    })
}
