use crate::error::TransportError;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// One JSON POST. `authorization` is sent verbatim as the `Authorization`
/// header; no scheme prefix is added.
#[async_trait]
pub trait JsonTransport: Send + Sync {
    async fn post_json(
        &self,
        url: &str,
        authorization: Option<&str>,
        body: &Value,
    ) -> Result<HttpReply, TransportError>;
}

pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl JsonTransport for ReqwestTransport {
    async fn post_json(
        &self,
        url: &str,
        authorization: Option<&str>,
        body: &Value,
    ) -> Result<HttpReply, TransportError> {
        let mut request = self.client.post(url).json(body);
        if let Some(token) = authorization {
            request = request.header(reqwest::header::AUTHORIZATION, token);
        }
        let resp = request.send().await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;
        Ok(HttpReply { status, body })
    }
}
