// ABOUTME: In-process HTTP request builder for router integration tests
// ABOUTME: Sends requests with caller identity and JSON bodies, captures status, headers and body
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use axum::body::{to_bytes, Body};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, Method, Request, StatusCode};
use axum::Router;
use nutrifind::constants::headers::USER_ID;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tower::ServiceExt;

/// Request against a router, built up fluently and sent with [`Self::send`]
pub struct AxumTestRequest {
    method: Method,
    uri: String,
    headers: Vec<(String, String)>,
    body: Body,
}

impl AxumTestRequest {
    fn new(method: Method, uri: &str) -> Self {
        Self {
            method,
            uri: uri.to_owned(),
            headers: Vec::new(),
            body: Body::empty(),
        }
    }

    pub fn get(uri: &str) -> Self {
        Self::new(Method::GET, uri)
    }

    pub fn post(uri: &str) -> Self {
        Self::new(Method::POST, uri)
    }

    pub fn put(uri: &str) -> Self {
        Self::new(Method::PUT, uri)
    }

    pub fn delete(uri: &str) -> Self {
        Self::new(Method::DELETE, uri)
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_owned(), value.to_owned()));
        self
    }

    /// Identify the caller the way an upstream gateway would
    pub fn user(self, user_id: &str) -> Self {
        self.header(USER_ID, user_id)
    }

    /// Send `payload` as a JSON body
    pub fn json<T: Serialize>(mut self, payload: &T) -> Self {
        self.body = Body::from(serde_json::to_vec(payload).unwrap());
        self.header(CONTENT_TYPE.as_str(), "application/json")
    }

    /// Run the request through `app` and read the whole response
    pub async fn send(self, app: Router) -> AxumTestResponse {
        let request = self
            .headers
            .iter()
            .fold(
                Request::builder().method(self.method).uri(&self.uri),
                |builder, (name, value)| builder.header(name, value),
            )
            .body(self.body)
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec();

        AxumTestResponse {
            status,
            headers,
            body,
        }
    }
}

/// Fully buffered response
pub struct AxumTestResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl AxumTestResponse {
    pub const fn status(&self) -> u16 {
        self.status.as_u16()
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn json<T: DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).unwrap_or_else(|e| {
            panic!(
                "Response ({}) is not the expected JSON: {e}: {}",
                self.status,
                String::from_utf8_lossy(&self.body)
            )
        })
    }

    /// Panic unless the status is `expected`, then hand the response back
    pub fn assert_status(self, expected: StatusCode) -> Self {
        assert_eq!(
            self.status,
            expected,
            "Unexpected status, body: {}",
            String::from_utf8_lossy(&self.body)
        );
        self
    }
}

#[cfg(test)]
mod tests {
    use axum::routing::get;

    use super::*;

    fn echo_caller() -> Router {
        Router::new().route(
            "/whoami",
            get(|headers: HeaderMap| async move {
                let caller = headers
                    .get(USER_ID)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("anonymous")
                    .to_owned();
                ([("x-caller", caller.clone())], caller)
            }),
        )
    }

    #[tokio::test]
    async fn test_user_sets_caller_header() {
        let response = AxumTestRequest::get("/whoami")
            .user("alice")
            .send(echo_caller())
            .await;
        assert_eq!(response.status(), 200);
        assert_eq!(response.header("x-caller"), Some("alice"));
    }

    #[tokio::test]
    async fn test_missing_header_reads_as_none() {
        let response = AxumTestRequest::get("/whoami").send(echo_caller()).await;
        assert_eq!(response.header("x-caller"), Some("anonymous"));
        assert_eq!(response.header("x-not-there"), None);
    }
}
