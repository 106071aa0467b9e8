//! 表单字段
//!
//! 表单有哪些字段，以及操作员在什么类型下能看到它们。

use super::kind::{Family, InjectionType};

/// 可编辑字段（按显示顺序）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Type,
    Node1,
    Node2,
    Count,
    Id,
    PayloadLength,
    Port1,
    Port2,
    Interval,
}

impl FormField {
    pub const ALL: [FormField; 9] = [
        FormField::Type,
        FormField::Node1,
        FormField::Node2,
        FormField::Count,
        FormField::Id,
        FormField::PayloadLength,
        FormField::Port1,
        FormField::Port2,
        FormField::Interval,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Type => "Type",
            FormField::Node1 => "From",
            FormField::Node2 => "To",
            FormField::Count => "Nb. of packets",
            FormField::Id => "ICMP Identifier",
            FormField::PayloadLength => "Payload length",
            FormField::Port1 => "Src Port",
            FormField::Port2 => "Dst Port",
            FormField::Interval => "Interval in milliseconds",
        }
    }

    /// 输入框提供的下限；提交时不强制
    pub fn min(self) -> Option<i64> {
        match self {
            FormField::Type | FormField::Node1 | FormField::Node2 => None,
            FormField::Count => Some(1),
            FormField::Id
            | FormField::PayloadLength
            | FormField::Port1
            | FormField::Port2
            | FormField::Interval => Some(0),
        }
    }

    pub fn is_visible(self, kind: InjectionType) -> bool {
        match self {
            FormField::Id | FormField::PayloadLength => kind.family() == Family::Icmp,
            FormField::Port1 | FormField::Port2 => kind.family() == Family::Port,
            _ => true,
        }
    }
}

/// `kind` 下可见的字段（按显示顺序）
pub fn visible_fields(kind: InjectionType) -> Vec<FormField> {
    FormField::ALL
        .into_iter()
        .filter(|field| field.is_visible(kind))
        .collect()
}
