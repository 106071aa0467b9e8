//! 注入请求构造
//!
//! 把通过校验的表单状态转换为服务端接受的 JSON 请求体。

mod builder;

pub use builder::{InjectionRequest, MAX_PAYLOAD_LENGTH, build, filler_payload, vertex_query};
