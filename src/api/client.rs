//! Blocking HTTP client for the budgeting API
//!
//! Every successful response wraps its payload as `{"data": ...}`; every
//! failure carries `{"error": {"id", "name", "detail"}}`. The client unwraps
//! the first and turns the second into [`ClinabError::Api`].

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use zeroize::Zeroize;

use crate::config::ApiToken;
use crate::error::{ClinabError, ClinabResult};

/// Default base URL of the API
pub const DEFAULT_BASE_URL: &str = "https://api.ynab.com/v1";

/// Default timeout for API requests
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Query parameters; `None` values are left out of the URL
pub type QueryParams<'a> = [(&'a str, Option<String>)];

#[derive(Debug, Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    id: String,
    name: String,
    detail: String,
}

/// HTTP client for the budgeting API
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    auth_header: HeaderValue,
}

impl ApiClient {
    /// Create a new API client.
    ///
    /// # Errors
    ///
    /// Returns an error if the token contains characters that cannot appear
    /// in a header, or the HTTP client cannot be initialized.
    pub fn new(base_url: &str, token: &ApiToken) -> ClinabResult<Self> {
        let mut raw = format!("Bearer {}", token.expose());
        let header = HeaderValue::from_str(&raw);
        raw.zeroize();

        let mut auth_header = header
            .map_err(|e| ClinabError::Config(format!("Invalid API token format: {}", e)))?;
        auth_header.set_sensitive(true);

        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .user_agent(concat!("clinab/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ClinabError::Http(format!("Failed to initialize HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth_header,
        })
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, self.auth_header.clone());
        headers
    }

    /// Build the full URL for `path`, appending the present query parameters
    pub(crate) fn url(&self, path: &str, query: &QueryParams) -> ClinabResult<Url> {
        let raw = format!("{}{}", self.base_url, path);
        let mut url = Url::parse(&raw)
            .map_err(|e| ClinabError::Config(format!("Invalid API URL '{}': {}", raw, e)))?;

        let present: Vec<(&str, &str)> = query
            .iter()
            .filter_map(|(key, value)| value.as_deref().map(|v| (*key, v)))
            .collect();
        if !present.is_empty() {
            url.query_pairs_mut().extend_pairs(present);
        }

        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        debug!("{} {}", method, url);
        self.client.request(method, url).headers(self.headers())
    }

    /// Make a GET request and unwrap the response data
    pub(crate) fn get<T: DeserializeOwned>(&self, path: &str, query: &QueryParams) -> ClinabResult<T> {
        let url = self.url(path, query)?;
        let response = self.request(Method::GET, url).send()?;
        parse_response(response)
    }

    /// Make a POST request with a JSON body
    pub(crate) fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ClinabResult<T> {
        self.send_json(Method::POST, path, body)
    }

    /// Make a PUT request with a JSON body
    pub(crate) fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ClinabResult<T> {
        self.send_json(Method::PUT, path, body)
    }

    /// Make a PATCH request with a JSON body
    pub(crate) fn patch<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ClinabResult<T> {
        self.send_json(Method::PATCH, path, body)
    }

    /// Make a DELETE request; the service answers with the deleted resource
    pub(crate) fn delete<T: DeserializeOwned>(&self, path: &str) -> ClinabResult<T> {
        let url = self.url(path, &[])?;
        let response = self.request(Method::DELETE, url).send()?;
        parse_response(response)
    }

    fn send_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> ClinabResult<T> {
        let url = self.url(path, &[])?;
        let payload = serde_json::to_string(body)?;
        trace!("request body: {}", payload);
        let response = self.request(method, url).body(payload).send()?;
        parse_response(response)
    }
}

/// Parse an HTTP response, turning error statuses into API errors
fn parse_response<T: DeserializeOwned>(response: Response) -> ClinabResult<T> {
    let status = response.status();
    let body = response
        .text()
        .map_err(|e| ClinabError::Http(format!("Failed to read response: {}", e)))?;
    trace!("response {}: {}", status, body);

    if !status.is_success() {
        return Err(api_error(status, &body));
    }

    decode_data(&body)
}

/// Unwrap the `data` member of a success body
fn decode_data<T: DeserializeOwned>(body: &str) -> ClinabResult<T> {
    let envelope: DataEnvelope<T> = serde_json::from_str(body)
        .map_err(|e| ClinabError::Json(format!("Failed to parse response: {}", e)))?;
    Ok(envelope.data)
}

/// Build the error for a non-success response
fn api_error(status: StatusCode, body: &str) -> ClinabError {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => ClinabError::Api {
            status: status.as_u16(),
            id: envelope.error.id,
            name: envelope.error.name,
            detail: envelope.error.detail,
        },
        Err(_) => ClinabError::Api {
            status: status.as_u16(),
            id: "unknown".to_string(),
            name: "unknown".to_string(),
            detail: format!(
                "HTTP {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            ),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> ApiClient {
        ApiClient::new(base_url, &ApiToken::new("test-token")).unwrap()
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = client("https://api.example.com/v1///");
        assert_eq!(client.base_url(), "https://api.example.com/v1");
    }

    #[test]
    fn test_url_without_query() {
        let client = client(DEFAULT_BASE_URL);
        let url = client.url("/budgets", &[]).unwrap();
        assert_eq!(url.as_str(), "https://api.ynab.com/v1/budgets");
    }

    #[test]
    fn test_url_drops_absent_params() {
        let client = client(DEFAULT_BASE_URL);
        let url = client
            .url(
                "/budgets/b1/transactions",
                &[
                    ("since_date", Some("2026-01-01".to_string())),
                    ("type", None),
                ],
            )
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.ynab.com/v1/budgets/b1/transactions?since_date=2026-01-01"
        );
    }

    #[test]
    fn test_url_all_params_absent() {
        let client = client(DEFAULT_BASE_URL);
        let url = client.url("/budgets", &[("include_accounts", None)]).unwrap();
        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_url_encodes_values() {
        let client = client(DEFAULT_BASE_URL);
        let url = client
            .url("/x", &[("q", Some("a&b=c".to_string()))])
            .unwrap();
        assert_eq!(url.query(), Some("q=a%26b%3Dc"));
    }

    #[test]
    fn test_invalid_token_rejected() {
        let result = ApiClient::new(DEFAULT_BASE_URL, &ApiToken::new("bad\ntoken"));
        assert!(matches!(result, Err(ClinabError::Config(_))));
    }

    #[test]
    fn test_auth_header_is_sensitive() {
        let client = client(DEFAULT_BASE_URL);
        let headers = client.headers();
        let auth = headers.get(AUTHORIZATION).unwrap();
        assert!(auth.is_sensitive());
        assert_eq!(auth.to_str().unwrap(), "Bearer test-token");
    }

    #[test]
    fn test_decode_data_unwraps_envelope() {
        #[derive(Deserialize)]
        struct UserData {
            user: crate::models::User,
        }
        let body = r#"{"data": {"user": {"id": "u-1"}}}"#;
        let data: UserData = decode_data(body).unwrap();
        assert_eq!(data.user.id, "u-1");
    }

    #[test]
    fn test_decode_data_rejects_missing_envelope() {
        let result: ClinabResult<serde_json::Value> = decode_data(r#"{"user": {}}"#);
        assert!(matches!(result, Err(ClinabError::Json(_))));
    }

    #[test]
    fn test_api_error_from_error_body() {
        let body = r#"{"error": {"id": "404.2", "name": "resource_not_found", "detail": "Resource not found"}}"#;
        let err = api_error(StatusCode::NOT_FOUND, body);

        match &err {
            ClinabError::Api { status, id, name, detail } => {
                assert_eq!(*status, 404);
                assert_eq!(id, "404.2");
                assert_eq!(name, "resource_not_found");
                assert_eq!(detail, "Resource not found");
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(err.to_string(), "API Error (404): Resource not found");
    }

    #[test]
    fn test_api_error_from_unparseable_body() {
        let err = api_error(StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>");

        match &err {
            ClinabError::Api { status, id, name, detail } => {
                assert_eq!(*status, 500);
                assert_eq!(id, "unknown");
                assert_eq!(name, "unknown");
                assert_eq!(detail, "HTTP 500: Internal Server Error");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
