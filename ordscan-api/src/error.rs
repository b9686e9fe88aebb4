//! API 错误类型
//!
//! 提供统一的错误类型和结构化错误报告。

use serde::Serialize;
use thiserror::Error;

use crate::types::ValueKind;

/// API 结果类型
pub type Result<T> = std::result::Result<T, OrdscanError>;

/// ordscan 错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OrdscanError {
    /// 无法识别的输入片段
    #[error("invalid token {token:?} at index {index}: {reason}")]
    Parse {
        index: usize,
        token: String,
        reason: String,
    },

    /// 序列中混入了不兼容的元素类型
    #[error("type mismatch at index {index}: expected {expected}, found {found}")]
    TypeMismatch {
        index: usize,
        expected: ValueKind,
        found: ValueKind,
    },

    /// 投影不适用于该元素类型
    #[error("key '{key}' cannot be applied to {kind} values")]
    KeyMismatch { key: &'static str, kind: ValueKind },

    /// 输入超过元素数量上限
    #[error("input exceeds the limit of {limit} elements")]
    LimitExceeded { limit: usize },

    /// IO 错误
    #[error("IO error: {0}")]
    Io(String),

    /// 配置错误
    #[error("Config error: {0}")]
    Config(String),
}

impl From<std::io::Error> for OrdscanError {
    fn from(err: std::io::Error) -> Self {
        OrdscanError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for OrdscanError {
    fn from(err: serde_json::Error) -> Self {
        OrdscanError::Config(err.to_string())
    }
}

impl OrdscanError {
    /// 出错元素的下标（如果有）
    pub fn index(&self) -> Option<usize> {
        match self {
            OrdscanError::Parse { index, .. } | OrdscanError::TypeMismatch { index, .. } => {
                Some(*index)
            }
            _ => None,
        }
    }

    /// 获取错误阶段名称
    pub fn phase(&self) -> &'static str {
        match self {
            OrdscanError::Parse { .. }
            | OrdscanError::TypeMismatch { .. }
            | OrdscanError::LimitExceeded { .. } => "parse",
            OrdscanError::KeyMismatch { .. } => "scan",
            OrdscanError::Io(_) => "io",
            OrdscanError::Config(_) => "config",
        }
    }

    fn kind_name(&self) -> &'static str {
        match self {
            OrdscanError::Parse { .. } => "InvalidToken",
            OrdscanError::TypeMismatch { .. } => "TypeMismatch",
            OrdscanError::KeyMismatch { .. } => "KeyMismatch",
            OrdscanError::LimitExceeded { .. } => "LimitExceeded",
            OrdscanError::Io(_) => "IoError",
            OrdscanError::Config(_) => "ConfigError",
        }
    }

    /// 转换为结构化错误报告
    ///
    /// CLI 可以直接打印，上层应用可以序列化为 JSON。
    pub fn to_report(&self) -> ErrorReport {
        ErrorReport {
            phase: self.phase(),
            index: self.index(),
            error_kind: self.kind_name().to_string(),
            message: self.to_string(),
        }
    }
}

/// 结构化错误报告
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorReport {
    /// 错误阶段: parse, scan, io, config
    pub phase: &'static str,
    /// 出错元素下标（0-based，如果有）
    pub index: Option<usize>,
    /// 错误类型（可用于程序化处理）
    pub error_kind: String,
    /// 人类可读的错误消息
    pub message: String,
}

impl std::fmt::Display for ErrorReport {
    /// 默认的 CLI 友好格式
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.index {
            Some(index) => write!(f, "[#{}] {} error: {}", index, self.phase, self.message),
            None => write!(f, "[{}] {} error: {}", self.phase, self.phase, self.message),
        }
    }
}

impl ErrorReport {
    /// 转换为 JSON 格式
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            format!(r#"{{"phase":"{}","error_kind":"{}"}}"#, self.phase, self.error_kind)
        })
    }

    /// 简洁格式（适合终端）
    pub fn to_short(&self) -> String {
        format!("{}: {}", self.phase, self.message)
    }
}
