//! 高亮集合
//!
//! 进程内共享的可视化状态：哪些拓扑节点当前处于高亮。

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::form::NodeRef;

/// 高亮存储接口
///
/// 两个操作都是幂等的：重复高亮或移除不存在的节点都不是错误。
pub trait Highlighter {
    fn highlight(&self, id: &NodeRef);
    fn unhighlight(&self, id: &NodeRef);
}

impl<T: Highlighter + ?Sized> Highlighter for &T {
    fn highlight(&self, id: &NodeRef) {
        (**self).highlight(id)
    }

    fn unhighlight(&self, id: &NodeRef) {
        (**self).unhighlight(id)
    }
}

impl<T: Highlighter + ?Sized> Highlighter for Arc<T> {
    fn highlight(&self, id: &NodeRef) {
        (**self).highlight(id)
    }

    fn unhighlight(&self, id: &NodeRef) {
        (**self).unhighlight(id)
    }
}

/// 共享高亮集合；clone 得到的是同一集合的另一个句柄
#[derive(Debug, Clone, Default)]
pub struct HighlightSet {
    inner: Arc<Mutex<HashSet<NodeRef>>>,
}

impl HighlightSet {
    fn guard(&self) -> MutexGuard<'_, HashSet<NodeRef>> {
        // 持锁期间不会 panic，中毒的锁里数据仍然一致
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn contains(&self, id: &NodeRef) -> bool {
        self.guard().contains(id)
    }

    pub fn len(&self) -> usize {
        self.guard().len()
    }

    pub fn is_empty(&self) -> bool {
        self.guard().is_empty()
    }

    /// 当前高亮节点（排序后返回，便于输出）
    pub fn snapshot(&self) -> Vec<NodeRef> {
        let mut ids = self.guard().iter().cloned().collect::<Vec<_>>();
        ids.sort();
        ids
    }
}

impl Highlighter for HighlightSet {
    fn highlight(&self, id: &NodeRef) {
        self.guard().insert(id.clone());
    }

    fn unhighlight(&self, id: &NodeRef) {
        self.guard().remove(id);
    }
}
