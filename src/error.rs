//! 错误类型
//!
//! 注入流程中可能出现的全部错误。

use thiserror::Error;

/// 报文注入错误
#[derive(Debug, Error)]
pub enum InjectError {
    /// 源或目的节点未选择（客户端校验，不会发出请求）
    #[error("Source and destination interfaces must be selected")]
    MissingEndpoint,

    /// 服务端拒绝或网络失败，携带原始响应文本
    #[error("Packet injection error: {0}")]
    InjectionFailed(String),

    /// payload 长度超过上限（客户端拒绝，不会发出请求）
    #[error("Payload length {len} exceeds the maximum of {max}")]
    PayloadTooLong { len: usize, max: usize },

    #[error("unknown injection type: {0}")]
    UnknownType(String),

    #[error("failed to encode injection request: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to initialize HTTP client: {0}")]
    Client(String),
}
