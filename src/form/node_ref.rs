//! 节点引用
//!
//! 拓扑图中节点的不透明标识符。

use std::fmt;

/// 节点标识符（保证非空；“未选择”用 `Option::None` 表示）
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeRef(String);

impl NodeRef {
    /// 创建节点引用；空字符串表示未选择，返回 `None`
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        if id.is_empty() { None } else { Some(Self(id)) }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NodeRef {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
