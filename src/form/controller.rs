//! 注入表单控制器
//!
//! 持有表单状态与高亮协调器；端点字段的每次赋值都经过协调器。

use tracing::debug;

use super::field::{FormField, visible_fields};
use super::kind::InjectionType;
use super::node_ref::NodeRef;
use super::state::FormState;
use super::validate::validate;
use crate::error::InjectError;
use crate::highlight::{HighlightCoordinator, Highlighter};
use crate::request::{InjectionRequest, build};

/// 报文注入表单
///
/// 销毁（drop）时取消两个端点的高亮。
#[derive(Debug)]
pub struct InjectForm<H: Highlighter> {
    state: FormState,
    highlights: HighlightCoordinator<H>,
}

impl<H: Highlighter> InjectForm<H> {
    /// 创建表单；`current_node` 为当前聚焦的节点时预填到 node1
    pub fn new(highlighter: H, current_node: Option<&NodeRef>) -> Self {
        let mut form = Self {
            state: FormState::default(),
            highlights: HighlightCoordinator::new(highlighter),
        };
        if let Some(node) = current_node {
            debug!(node = %node, "使用当前节点预填 node1");
            form.set_node1(Some(node.clone()));
        }
        form
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn highlighter(&self) -> &H {
        self.highlights.highlighter()
    }

    pub fn set_node1(&mut self, node: Option<NodeRef>) {
        self.highlights
            .transition(self.state.node1.as_ref(), node.as_ref(), self.state.node2.as_ref());
        self.state.node1 = node;
    }

    pub fn set_node2(&mut self, node: Option<NodeRef>) {
        self.highlights
            .transition(self.state.node2.as_ref(), node.as_ref(), self.state.node1.as_ref());
        self.state.node2 = node;
    }

    pub fn set_kind(&mut self, kind: InjectionType) {
        self.state.kind = kind;
    }

    pub fn set_count(&mut self, count: i64) {
        self.state.count = count;
    }

    pub fn set_id(&mut self, id: i64) {
        self.state.id = id;
    }

    pub fn set_interval(&mut self, interval_ms: i64) {
        self.state.interval = interval_ms;
    }

    pub fn set_port1(&mut self, port: i64) {
        self.state.port1 = port;
    }

    pub fn set_port2(&mut self, port: i64) {
        self.state.port2 = port;
    }

    pub fn set_payload_length(&mut self, len: usize) {
        self.state.payload_length = len;
    }

    /// 清空端点并恢复 count / type / payload length
    ///
    /// id、interval、端口保持不变，方便用相同端口与节奏重复注入。
    pub fn reset(&mut self) {
        debug!("重置表单");
        self.set_node1(None);
        self.set_node2(None);
        self.state.reset_counters();
    }

    /// 当前类型下可见的字段
    pub fn visible_fields(&self) -> Vec<FormField> {
        visible_fields(self.state.kind)
    }

    pub fn validate(&self) -> Result<(), InjectError> {
        validate(&self.state)
    }

    /// 校验通过后构造请求
    pub fn request(&self) -> Result<InjectionRequest, InjectError> {
        self.validate()?;
        build(&self.state)
    }

    /// 显式销毁表单（等价于 drop）
    pub fn teardown(self) {}
}

impl<H: Highlighter> Drop for InjectForm<H> {
    fn drop(&mut self) {
        self.highlights
            .release(self.state.node1.as_ref(), self.state.node2.as_ref());
    }
}
