//! 节点高亮模块
//!
//! 共享高亮集合以及让它与表单端点保持一致的协调器。

mod coordinator;
mod set;

pub use coordinator::HighlightCoordinator;
pub use set::{HighlightSet, Highlighter};
