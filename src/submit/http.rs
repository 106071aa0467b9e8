//! HTTP 传输
//!
//! 提交流程使用的 HTTP 客户端接口及其 reqwest 实现。

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

use crate::error::InjectError;

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// 已完成请求的状态码与原始响应文本
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// 最小客户端能力：POST 一个 JSON 文档
///
/// 非 2xx 响应也返回 `Ok`；`Err` 只用于没有拿到响应的请求。
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn post_json(&self, url: &str, body: String) -> Result<HttpResponse, InjectError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    pub fn new() -> Result<Self, InjectError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("pktinject-rs/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|err| InjectError::Client(err.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn post_json(&self, url: &str, body: String) -> Result<HttpResponse, InjectError> {
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(body)
            .send()
            .await
            .map_err(|err| InjectError::InjectionFailed(err.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|err| InjectError::InjectionFailed(err.to_string()))?;
        Ok(HttpResponse { status, body })
    }
}
