//! 客户端配置
//!
//! 注入请求发往何处。

/// Analyzer 上注入接口的路径
pub const INJECT_PATH: &str = "/api/injectpacket";

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8082";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn endpoint_url(&self) -> String {
        format!("{}{INJECT_PATH}", self.base_url.trim_end_matches('/'))
    }
}
