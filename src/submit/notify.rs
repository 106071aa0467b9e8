//! 操作员通知
//!
//! 提交结果的通知类型与接收端接口。

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Success(String),
    Error(String),
}

impl Notification {
    pub fn message(&self) -> &str {
        match self {
            Notification::Success(msg) | Notification::Error(msg) => msg,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notification::Error(_))
    }
}

/// 提交结果的接收端（UI 中的提示框，命令行中的 stdout/stderr）
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}
