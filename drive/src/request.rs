//! Transport-neutral request construction.
//!
//! DESIGN
//! ======
//! Requests are plain data built by [`build_request`] before any I/O happens,
//! so header and body rules are checked without a network. Transports only
//! translate an [`ApiRequest`] into their HTTP library's builder.

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

/// Multipart form field the backend reads the uploaded file from.
pub const UPLOAD_FIELD: &str = "file";

pub const JSON_CONTENT_TYPE: &str = "application/json";
pub const AUTHORIZATION: &str = "Authorization";
pub const CONTENT_TYPE: &str = "Content-Type";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// A local file picked for upload, fully read into memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadFile {
    pub file_name: String,
    /// MIME type if the picker or caller knows it.
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    #[must_use]
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self { file_name: file_name.into(), content_type: None, bytes }
    }

    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    /// Left for the transport to encode so it controls the boundary.
    Multipart { field: String, file: UploadFile },
}

/// A fully resolved HTTP request.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
}

impl ApiRequest {
    /// Case-insensitive header lookup.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Resolve `path` against `base_url` and attach headers.
///
/// JSON bodies get `Content-Type: application/json`; multipart and empty
/// bodies get no content type. `Authorization: Bearer <token>` is added iff
/// `token` is `Some`.
#[must_use]
pub fn build_request(
    base_url: &str,
    path: &str,
    method: Method,
    body: RequestBody,
    token: Option<&str>,
) -> ApiRequest {
    let mut headers = Vec::new();
    if matches!(body, RequestBody::Json(_)) {
        headers.push((CONTENT_TYPE.to_owned(), JSON_CONTENT_TYPE.to_owned()));
    }
    if let Some(token) = token {
        headers.push((AUTHORIZATION.to_owned(), bearer(token)));
    }
    ApiRequest { method, url: format!("{base_url}{path}"), headers, body }
}
