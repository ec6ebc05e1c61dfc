use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Client as HttpClient;
use tracing::warn;

use super::models::{
    ApiError, ErrorResponse, LedgerSnapshot, LoginRequest, LoginResponse, NewTransaction,
    RegisterRequest, RegisterResponse,
};

/// Header carrying the session token on authenticated calls
const AUTH_HEADER: &str = "x-auth-token";
/// Header carrying the client-generated idempotency key on submissions
const REQUEST_ID_HEADER: &str = "x-request-id";

/// The remote ledger API as the rest of the application sees it.
/// The sync loop and services talk to this port, so tests can substitute
/// an in-memory fake for the HTTP adapter.
#[async_trait]
pub trait LedgerApi: Send + Sync {
    /// POST /auth/register
    async fn register(&self, req: &RegisterRequest) -> Result<RegisterResponse, ApiError>;

    /// POST /auth/login
    async fn login(&self, req: &LoginRequest) -> Result<LoginResponse, ApiError>;

    /// GET /ledger/data
    async fn fetch_data(&self, token: &str) -> Result<LedgerSnapshot, ApiError>;

    /// POST /ledger/add
    async fn add_transaction(
        &self,
        token: &str,
        request_id: &str,
        tx: &NewTransaction,
    ) -> Result<(), ApiError>;
}

/// HTTP client for the shared savings ledger API
pub struct LedgerClient {
    http_client: HttpClient,
    base_url: String,
}

impl LedgerClient {
    /// Create a new ledger API client against the given base URL
    pub fn new(base_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create default headers, with the session token when given
    fn create_headers(&self, token: Option<&str>) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(token) = token {
            let auth_value = HeaderValue::from_str(token).map_err(|e| {
                ApiError::RequestError(format!("Failed to create auth header: {}", e))
            })?;
            headers.insert(AUTH_HEADER, auth_value);
        }

        Ok(headers)
    }

    /// Parse error response based on HTTP status code; the API reports
    /// failures as `{msg}` bodies
    async fn handle_error_response(
        status: reqwest::StatusCode,
        response: reqwest::Response,
    ) -> ApiError {
        let status_code = status.as_u16();
        let body_text = response.text().await.unwrap_or_default();

        let msg = serde_json::from_str::<ErrorResponse>(&body_text)
            .ok()
            .and_then(|e| e.msg)
            .unwrap_or_else(|| body_text.clone());

        match status_code {
            400 => ApiError::BadRequest(msg),
            401 => ApiError::Unauthorized(msg),
            404 => ApiError::NotFound(msg),
            500..=599 => {
                warn!("Server error {}: {}", status_code, body_text);
                ApiError::ServerError(status_code, msg)
            }
            _ => ApiError::HttpError(status_code, msg),
        }
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        if !response.status().is_success() {
            let status = response.status();
            return Err(Self::handle_error_response(status, response).await);
        }
        Ok(response)
    }
}

#[async_trait]
impl LedgerApi for LedgerClient {
    async fn register(&self, req: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
        let url = format!("{}/auth/register", self.base_url);
        let headers = self.create_headers(None)?;

        let response = self
            .http_client
            .post(&url)
            .headers(headers)
            .json(req)
            .send()
            .await
            .map_err(|e| ApiError::RequestError(format!("Request failed: {}", e)))?;

        let response = Self::check_status(response).await?;
        response
            .json::<RegisterResponse>()
            .await
            .map_err(|e| ApiError::Decode(format!("Failed to parse response: {}", e)))
    }

    async fn login(&self, req: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let url = format!("{}/auth/login", self.base_url);
        let headers = self.create_headers(None)?;

        let response = self
            .http_client
            .post(&url)
            .headers(headers)
            .json(req)
            .send()
            .await
            .map_err(|e| ApiError::RequestError(format!("Request failed: {}", e)))?;

        let response = Self::check_status(response).await?;
        response
            .json::<LoginResponse>()
            .await
            .map_err(|e| ApiError::Decode(format!("Failed to parse response: {}", e)))
    }

    async fn fetch_data(&self, token: &str) -> Result<LedgerSnapshot, ApiError> {
        let url = format!("{}/ledger/data", self.base_url);
        let headers = self.create_headers(Some(token))?;

        let response = self
            .http_client
            .get(&url)
            .headers(headers)
            .send()
            .await
            .map_err(|e| ApiError::RequestError(format!("Request failed: {}", e)))?;

        let response = Self::check_status(response).await?;
        response
            .json::<LedgerSnapshot>()
            .await
            .map_err(|e| ApiError::Decode(format!("Failed to parse response: {}", e)))
    }

    async fn add_transaction(
        &self,
        token: &str,
        request_id: &str,
        tx: &NewTransaction,
    ) -> Result<(), ApiError> {
        let url = format!("{}/ledger/add", self.base_url);
        let mut headers = self.create_headers(Some(token))?;

        // Idempotency key per submission; the server may use it to dedupe
        // a double-tapped form, the client assumes nothing
        let id_value = HeaderValue::from_str(request_id).map_err(|e| {
            ApiError::RequestError(format!("Failed to create request id header: {}", e))
        })?;
        headers.insert(REQUEST_ID_HEADER, id_value);

        let response = self
            .http_client
            .post(&url)
            .headers(headers)
            .json(tx)
            .send()
            .await
            .map_err(|e| ApiError::RequestError(format!("Request failed: {}", e)))?;

        Self::check_status(response).await?;
        Ok(())
    }
}
