use async_trait::async_trait;
use gloo_net::http::Request;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// A fully resolved request: absolute URL, optional bearer token and JSON body
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub bearer: Option<String>,
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum TransportError {
    #[error("Failed to build request: {0}")]
    Build(String),

    #[error("Connection error: {0}")]
    Send(String),

    #[error("Failed to read response: {0}")]
    Read(String),
}

/// Sends one request and hands back the raw status and body.
/// Status codes are not interpreted here.
#[async_trait(?Send)]
pub trait HttpClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Browser `fetch` through gloo-net
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GlooHttpClient;

#[async_trait(?Send)]
impl HttpClient for GlooHttpClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
        }
        .header("Content-Type", "application/json");

        if let Some(token) = &request.bearer {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }

        let response = match request.body {
            Some(body) => builder
                .body(body)
                .map_err(|e| TransportError::Build(e.to_string()))?
                .send()
                .await,
            None => builder.send().await,
        }
        .map_err(|e| TransportError::Send(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Read(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}
