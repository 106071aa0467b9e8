//! 注入表单模块
//!
//! 此模块包含表单状态、字段可见性规则、校验以及表单控制器。

// 子模块声明
mod controller;
mod field;
mod kind;
mod node_ref;
mod state;
mod validate;

// 重新导出公共接口
pub use controller::InjectForm;
pub use field::{FormField, visible_fields};
pub use kind::{Family, InjectionType};
pub use node_ref::NodeRef;
pub use state::FormState;
pub use validate::validate;
