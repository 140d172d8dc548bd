//! # REST API client
//!
//! Thin wrapper over reqwest that every view goes through. The base endpoint
//! is fixed at build time: debug builds talk to the local dev server, release
//! builds to production. Two literals, no runtime override.
//!
//! A client built from an authenticated [`Session`] attaches
//! `Authorization: Bearer <token>` to every request; otherwise the header is
//! omitted. Failures come back as [`ClientError`], carrying the server's JSON
//! `{message}` when there is one so forms can show it inline.

use serde::de::DeserializeOwned;
use serde::Serialize;

use api::MessageResponse;

use crate::Session;

const DEV_BASE_URL: &str = "http://localhost:8080/api";
const PROD_BASE_URL: &str = "https://tasknet.onrender.com/api";

/// Error from an API call.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The server answered with a non-success status.
    #[error("{}", message.as_deref().unwrap_or("An error occurred"))]
    Api {
        status: u16,
        message: Option<String>,
    },

    /// The server answered 2xx but the body was not the expected JSON.
    #[error("Unexpected response from the server")]
    Decode(String),

    /// The request never produced a response.
    #[error("Unable to reach the server")]
    Transport(#[source] reqwest::Error),
}

/// HTTP client bound to the API base endpoint and, optionally, a token.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(token: Option<String>) -> Self {
        let base_url = if cfg!(debug_assertions) {
            DEV_BASE_URL
        } else {
            PROD_BASE_URL
        };
        Self {
            base_url: base_url.to_string(),
            token,
            http: reqwest::Client::new(),
        }
    }

    /// Client carrying the session's current token, if any.
    pub fn for_session(session: &Session) -> Self {
        Self::new(session.token())
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.send(self.http.get(self.url(path))).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        self.send(self.http.post(self.url(path)).json(body)).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        self.send(self.http.put(self.url(path)).json(body)).await
    }

    /// `PUT` with no body — the completion-toggle contract.
    pub async fn put_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.send(self.http.put(self.url(path))).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.send(self.http.delete(self.url(path))).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        mut request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(ClientError::Transport)?;
        let status = response.status();

        if status.is_success() {
            return response
                .json()
                .await
                .map_err(|e| ClientError::Decode(e.to_string()));
        }

        let message = response
            .json::<MessageResponse>()
            .await
            .ok()
            .map(|m| m.message);
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_shows_server_message() {
        let err = ClientError::Api {
            status: 401,
            message: Some("Invalid email or password".to_string()),
        };
        assert_eq!(err.to_string(), "Invalid email or password");
    }

    #[test]
    fn api_error_without_body_falls_back_to_default() {
        let err = ClientError::Api {
            status: 500,
            message: None,
        };
        assert_eq!(err.to_string(), "An error occurred");
    }

    #[test]
    fn decode_error_is_not_reported_as_unreachable() {
        let err = ClientError::Decode("expected value at line 1 column 1".to_string());
        assert_eq!(err.to_string(), "Unexpected response from the server");
    }
}
