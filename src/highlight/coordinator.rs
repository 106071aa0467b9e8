//! 高亮协调器
//!
//! 保证本组件高亮的节点恰好等于当前选中的两个端点。

use tracing::{debug, trace};

use super::set::Highlighter;
use crate::form::NodeRef;

/// 端点变化与表单销毁时维护高亮集合
#[derive(Debug)]
pub struct HighlightCoordinator<H> {
    highlighter: H,
}

impl<H: Highlighter> HighlightCoordinator<H> {
    pub fn new(highlighter: H) -> Self {
        Self { highlighter }
    }

    pub fn highlighter(&self) -> &H {
        &self.highlighter
    }

    /// 单个端点字段从 `old` 变为 `new`
    ///
    /// `other` 是另一个端点字段的当前值：两个端点选中同一节点时，
    /// 只移走其中一个不能取消该节点的高亮。
    pub fn transition(&self, old: Option<&NodeRef>, new: Option<&NodeRef>, other: Option<&NodeRef>) {
        if old == new {
            trace!("端点未变化，跳过");
            return;
        }
        if let Some(old) = old {
            if other == Some(old) {
                debug!(node = %old, "另一端点仍选中该节点，保留高亮");
            } else {
                debug!(node = %old, "取消高亮");
                self.highlighter.unhighlight(old);
            }
        }
        if let Some(new) = new {
            debug!(node = %new, "高亮节点");
            self.highlighter.highlight(new);
        }
    }

    /// 表单销毁时的清理：只移除，不添加
    ///
    /// 直接调用，不依赖任何字段变化通知。
    pub fn release(&self, node1: Option<&NodeRef>, node2: Option<&NodeRef>) {
        for node in [node1, node2].into_iter().flatten() {
            debug!(node = %node, "🧹 销毁表单，取消高亮");
            self.highlighter.unhighlight(node);
        }
    }
}
