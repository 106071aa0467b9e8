//! 表单状态
//!
//! 操作员编辑的全部字段。

use super::kind::InjectionType;
use super::node_ref::NodeRef;

/// 注入表单的字段集合
///
/// 数值字段不做客户端校验，原样发往服务端（负数也会被发送）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    /// 源节点（"From"）
    pub node1: Option<NodeRef>,
    /// 目的节点（"To"）
    pub node2: Option<NodeRef>,
    pub count: i64,
    pub kind: InjectionType,
    /// ICMP identifier
    pub id: i64,
    /// 两个报文之间的间隔（毫秒）
    pub interval: i64,
    pub port1: i64,
    pub port2: i64,
    pub payload_length: usize,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            node1: None,
            node2: None,
            count: 1,
            kind: InjectionType::Icmp4,
            id: 0,
            interval: 0,
            port1: 0,
            port2: 0,
            payload_length: 0,
        }
    }
}

impl FormState {
    /// 两个端点都已选择时返回 `(node1, node2)`
    pub fn endpoints(&self) -> Option<(&NodeRef, &NodeRef)> {
        Some((self.node1.as_ref()?, self.node2.as_ref()?))
    }

    /// 恢复 count / kind / payload_length 的默认值
    ///
    /// id、interval 与端口保持不变；端点由 `InjectForm::reset` 经高亮协调器清空。
    pub(crate) fn reset_counters(&mut self) {
        let defaults = FormState::default();
        self.count = defaults.count;
        self.kind = defaults.kind;
        self.payload_length = defaults.payload_length;
    }
}
