//! ordscan - find where a sequence stops being sorted
//!
//! Given a sequence, a strict-weak-order relation and a key projection,
//! ordscan returns the first position whose key is "less" than its
//! predecessor's, or the end position when the whole sequence is sorted.
//!
//! # Architecture
//!
//! ```text
//! ordscan-config  - Pure data (Order, KeyKind, limits, phases)
//! ordscan-core    - Generic scan over forward cursors (no IO)
//! ordscan-api     - Parsing, typed keys, reports and errors
//! ordscan-cli     - Command line front end
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use ordscan::{check, RunConfig};
//!
//! let report = check("1 2 0 4", &RunConfig::default()).unwrap();
//! assert_eq!(report.position, Some(2));
//! assert_eq!(report.to_string(), "unsorted at index 2: 0");
//! ```

// 泛型核心
pub use ordscan_core::{
    is_sorted, is_sorted_until, is_sorted_until_range, sorted_prefix_len,
    sorted_prefix_len_by_key, Counted, ForwardCursor, ForwardRange, Greater, Identity,
    IsSortedUntil, IterCursor, IterEnd, IterRange, Less, Projection, Relation, Sentinel,
    SliceCursor, Unbounded, IS_SORTED_UNTIL,
};

// 动态类型 API
pub use ordscan_api::{
    check, check_global, parse_sequence, scan_with_config, ErrorReport, Key, KeyKind,
    KeyProjection, LimitConfig, Order, OrdscanError, Phase, Result, RunConfig, ScanConfig,
    ScanReport, Sequence, Value, ValueKind,
};
pub use ordscan_api::{get_config, init_config, is_initialized};

/// 初始化全局配置（使用 `check_global` 前调用）
///
/// 重复调用时保留第一次的配置，返回 `false`。
///
/// # Example
/// ```rust
/// use ordscan::{init, RunConfig};
///
/// init(RunConfig::default());
/// assert!(ordscan::is_initialized());
/// ```
pub fn init(config: RunConfig) -> bool {
    ordscan_api::try_init(config)
}

/// 快速检查（使用全局配置，未初始化时使用默认配置）
///
/// # Example
/// ```rust
/// let report = ordscan::quick_check("c b a").unwrap();
/// assert_eq!(report.position, Some(1));
/// ```
pub fn quick_check(input: &str) -> Result<ScanReport> {
    if !is_initialized() {
        init(RunConfig::default());
    }
    check_global(input)
}
