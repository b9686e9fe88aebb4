//! API 层配置
//!
//! 包含运行配置 RunConfig 和全局单例（供 CLI 使用）

use once_cell::sync::OnceCell;
use ordscan_config::{KeyKind, LimitConfig, Order, ScanConfig};

/// Run configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunConfig {
    /// Order and key used for the scan
    pub scan: ScanConfig,
    /// Input limits
    pub limits: LimitConfig,
}

impl RunConfig {
    /// Build from optional overrides, falling back to defaults
    pub fn from_options(
        order: Option<Order>,
        key: Option<KeyKind>,
        max_elements: Option<usize>,
    ) -> Self {
        let mut cfg = Self::default();
        if let Some(order) = order {
            cfg.scan.order = order;
        }
        if let Some(key) = key {
            cfg.scan.key = key;
        }
        if let Some(max_elements) = max_elements {
            cfg.limits.max_elements = max_elements;
        }
        cfg
    }
}

// Global config singleton for CLI convenience
static GLOBAL_CONFIG: OnceCell<RunConfig> = OnceCell::new();

/// Initialize global configuration (must be called once before any operation)
///
/// # Panics
/// If config is already initialized
pub fn init(config: RunConfig) {
    GLOBAL_CONFIG
        .set(config)
        .expect("Config already initialized");
}

/// Initialize global configuration unless it already is.
///
/// Returns `false` when an earlier configuration was kept.
pub fn try_init(config: RunConfig) -> bool {
    GLOBAL_CONFIG.set(config).is_ok()
}

/// Get global config reference
///
/// # Panics
/// If config is not initialized
pub fn config() -> &'static RunConfig {
    GLOBAL_CONFIG.get().expect("Config not initialized")
}

/// Check if config is initialized
pub fn is_initialized() -> bool {
    GLOBAL_CONFIG.get().is_some()
}
