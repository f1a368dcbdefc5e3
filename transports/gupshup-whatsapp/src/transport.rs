//! HTTP seam of the client.
//!
//! [`GupshupClient`](crate::GupshupClient) never talks to the network itself:
//! it asks a [`RequestBuilder`] for a request and hands it to an
//! [`HttpSender`]. Production code uses [`DefaultRequestBuilder`] and
//! [`ReqwestSender`], tests plug in canned implementations.

use crate::config::HttpConfig;
use crate::error::Result;
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use url::Url;

#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: String,
}

/// Response with the body already read to the end.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

pub trait RequestBuilder: Send + Sync {
    fn build_request(&self, method: Method, url: &str, body: String) -> Result<HttpRequest>;
}

#[async_trait]
pub trait HttpSender: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultRequestBuilder;

impl RequestBuilder for DefaultRequestBuilder {
    fn build_request(&self, method: Method, url: &str, body: String) -> Result<HttpRequest> {
        Ok(HttpRequest {
            method,
            url: Url::parse(url)?,
            headers: HeaderMap::new(),
            body,
        })
    }
}

#[derive(Debug, Clone)]
pub struct ReqwestSender {
    client: reqwest::Client,
}

impl ReqwestSender {
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.effective_timeout())
            .user_agent(config.effective_user_agent())
            .build()?;

        Ok(Self { client })
    }

    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpSender for ReqwestSender {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let response = self
            .client
            .request(request.method, request.url)
            .headers(request.headers)
            .body(request.body)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?.to_vec();

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GupshupError;

    #[test]
    fn test_default_builder() {
        let request = DefaultRequestBuilder
            .build_request(Method::POST, crate::MESSAGE_URL, "a=b".to_string())
            .unwrap();

        assert_eq!(request.method, Method::POST);
        assert_eq!(request.url.as_str(), crate::MESSAGE_URL);
        assert!(request.headers.is_empty());
        assert_eq!(request.body, "a=b");
    }

    #[test]
    fn test_default_builder_rejects_bad_url() {
        let result = DefaultRequestBuilder.build_request(Method::POST, "not a url", String::new());
        assert!(matches!(result, Err(GupshupError::InvalidUrl(_))));
    }

    #[test]
    fn test_reqwest_sender_from_config() {
        let config = HttpConfig::default().with_timeout(5);
        assert!(ReqwestSender::new(&config).is_ok());
    }
}
