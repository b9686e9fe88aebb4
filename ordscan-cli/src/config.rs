//! CLI 配置
//!
//! 项目配置文件（ordscan.json）和日志配置

use std::path::Path;

use ordscan_api::{KeyKind, OrdscanError, Order, Phase, RunConfig};
use serde::Deserialize;
use tracing::level_filters::LevelFilter;

/// 默认项目配置文件名
pub const DEFAULT_PROJECT_FILE: &str = "ordscan.json";

/// ordscan.json 结构
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectFile {
    /// 期望的顺序: "ascending" / "descending"
    pub order: Option<Order>,
    /// 比较键: "identity" / "abs" / "length" / "lowercase"
    pub key: Option<KeyKind>,
    /// 元素数量上限
    pub max_elements: Option<usize>,
    /// 单个片段长度上限
    pub max_token_len: Option<usize>,
    /// 日志级别: "off", "error", "warn", "info", "debug", "trace"
    pub log_level: Option<String>,
}

/// 读取并解析项目配置文件
pub fn read_project_file(path: &Path) -> Result<ProjectFile, OrdscanError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        OrdscanError::Config(format!("cannot read '{}': {}", path.display(), e))
    })?;
    let project: ProjectFile = serde_json::from_str(&content).map_err(|e| {
        OrdscanError::Config(format!("cannot parse '{}': {}", path.display(), e))
    })?;
    Ok(project)
}

/// 查找项目配置文件
///
/// 显式指定的路径必须存在；未指定时只在当前目录存在 ordscan.json 时使用它。
pub fn load_project(explicit: Option<&Path>) -> Result<ProjectFile, OrdscanError> {
    match explicit {
        Some(path) => read_project_file(path),
        None => {
            let default = Path::new(DEFAULT_PROJECT_FILE);
            if default.is_file() {
                read_project_file(default)
            } else {
                Ok(ProjectFile::default())
            }
        }
    }
}

impl ProjectFile {
    /// 合并命令行参数（命令行优先）
    pub fn into_run_config(
        self,
        order: Option<Order>,
        key: Option<KeyKind>,
        max_elements: Option<usize>,
    ) -> RunConfig {
        let mut cfg = RunConfig::from_options(
            order.or(self.order),
            key.or(self.key),
            max_elements.or(self.max_elements),
        );
        if let Some(max_token_len) = self.max_token_len {
            cfg.limits.max_token_len = max_token_len;
        }
        cfg
    }
}

/// CLI 日志配置
#[derive(Debug, Clone, PartialEq)]
pub struct LogConfig {
    pub global: LevelFilter,
    pub parse: Option<LevelFilter>,
    pub scan: Option<LevelFilter>,
    pub report: Option<LevelFilter>,
    pub cli: Option<LevelFilter>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            global: LevelFilter::WARN,
            parse: None,
            scan: None,
            report: None,
            cli: None,
        }
    }
}

impl LogConfig {
    /// Get log level for a specific phase
    pub fn level_for(&self, phase: Phase) -> LevelFilter {
        let specific = match phase {
            Phase::Parse => self.parse,
            Phase::Scan => self.scan,
            Phase::Report => self.report,
            Phase::Cli => self.cli,
        };
        specific.unwrap_or(self.global)
    }
}

/// Parse log level string
pub fn parse_log_level(s: &str) -> Option<LevelFilter> {
    match s.to_lowercase().as_str() {
        "off" | "silent" => Some(LevelFilter::OFF),
        "error" => Some(LevelFilter::ERROR),
        "warn" => Some(LevelFilter::WARN),
        "info" => Some(LevelFilter::INFO),
        "debug" => Some(LevelFilter::DEBUG),
        "trace" => Some(LevelFilter::TRACE),
        _ => None,
    }
}
