//! 提交前校验

use super::state::FormState;
use crate::error::InjectError;

/// 校验表单：只要求两个端点都已选择
///
/// 其余字段（负数 count、端口等）不在客户端校验，原样转发。
pub fn validate(state: &FormState) -> Result<(), InjectError> {
    match state.endpoints() {
        Some(_) => Ok(()),
        None => Err(InjectError::MissingEndpoint),
    }
}
