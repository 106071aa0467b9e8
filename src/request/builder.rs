//! 注入请求体
//!
//! 定义线上 JSON 格式，以及从表单状态到请求的映射。

use serde::{Deserialize, Serialize};

use crate::error::InjectError;
use crate::form::{FormState, InjectionType, NodeRef};

/// 允许的最大 payload 长度（IP 数据报上限）
pub const MAX_PAYLOAD_LENGTH: usize = 65_535;

/// `POST /api/injectpacket` 的请求体
///
/// 字段顺序与注入接口期望的线上布局一致。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InjectionRequest {
    /// 选中源节点的 Gremlin 表达式
    pub src: String,
    /// 选中目的节点的 Gremlin 表达式
    pub dst: String,
    pub src_port: i64,
    pub dst_port: i64,
    #[serde(rename = "Type")]
    pub kind: InjectionType,
    pub count: i64,
    #[serde(rename = "ID")]
    pub id: i64,
    /// 两个报文之间的间隔（毫秒）
    pub interval: i64,
    pub payload: String,
}

/// 按 id 选中单个节点；id 原样插入
pub fn vertex_query(id: &str) -> String {
    format!("G.V('{id}')")
}

/// 请求长度为 `len` 时的填充 payload
///
/// 实际长度为 `len - 1`（0 和 1 都得到空串）：注入接口一直比操作员要求的少收一个字节。
/// 超过 [`MAX_PAYLOAD_LENGTH`] 时返回 `PayloadTooLong`。
pub fn filler_payload(len: usize) -> Result<String, InjectError> {
    if len > MAX_PAYLOAD_LENGTH {
        return Err(InjectError::PayloadTooLong {
            len,
            max: MAX_PAYLOAD_LENGTH,
        });
    }
    Ok("x".repeat(len.saturating_sub(1)))
}

/// 把通过校验的表单映射为请求
///
/// 端口、ICMP id 与 payload 对所有类型都发送，服务端忽略不适用的字段。
pub fn build(state: &FormState) -> Result<InjectionRequest, InjectError> {
    let endpoint = |node: Option<&NodeRef>| vertex_query(node.map(NodeRef::as_str).unwrap_or_default());
    Ok(InjectionRequest {
        src: endpoint(state.node1.as_ref()),
        dst: endpoint(state.node2.as_ref()),
        src_port: state.port1,
        dst_port: state.port2,
        kind: state.kind,
        count: state.count,
        id: state.id,
        interval: state.interval,
        payload: filler_payload(state.payload_length)?,
    })
}
