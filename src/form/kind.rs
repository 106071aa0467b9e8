//! 注入类型
//!
//! 定义可注入的报文类型及其所属族。

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InjectError;

/// 报文注入类型（线上格式为小写名称）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InjectionType {
    #[default]
    Icmp4,
    Icmp6,
    Tcp4,
    Tcp6,
    Udp4,
    Udp6,
}

/// 类型族：决定哪些可选字段对操作员可见
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    /// ICMP echo request（icmp4 / icmp6）
    Icmp,
    /// 带端口的传输层协议（tcp4 / tcp6 / udp4 / udp6）
    Port,
}

impl InjectionType {
    /// 下拉框中的显示顺序
    pub const ALL: [InjectionType; 6] = [
        InjectionType::Icmp4,
        InjectionType::Icmp6,
        InjectionType::Tcp4,
        InjectionType::Tcp6,
        InjectionType::Udp4,
        InjectionType::Udp6,
    ];

    /// 线上使用的名称
    pub fn as_str(self) -> &'static str {
        match self {
            InjectionType::Icmp4 => "icmp4",
            InjectionType::Icmp6 => "icmp6",
            InjectionType::Tcp4 => "tcp4",
            InjectionType::Tcp6 => "tcp6",
            InjectionType::Udp4 => "udp4",
            InjectionType::Udp6 => "udp6",
        }
    }

    /// 面向操作员的选项文本
    pub fn label(self) -> &'static str {
        match self {
            InjectionType::Icmp4 => "ICMPv4/Echo request",
            InjectionType::Icmp6 => "ICMPv6/Echo request",
            InjectionType::Tcp4 => "TCP/IPv4",
            InjectionType::Tcp6 => "TCP/IPv6",
            InjectionType::Udp4 => "UDP/IPv4",
            InjectionType::Udp6 => "UDP/IPv6",
        }
    }

    pub fn family(self) -> Family {
        match self {
            InjectionType::Icmp4 | InjectionType::Icmp6 => Family::Icmp,
            InjectionType::Tcp4 | InjectionType::Tcp6 | InjectionType::Udp4 | InjectionType::Udp6 => {
                Family::Port
            }
        }
    }
}

impl fmt::Display for InjectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InjectionType {
    type Err = InjectError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        InjectionType::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(raw))
            .ok_or_else(|| InjectError::UnknownType(raw.to_string()))
    }
}
