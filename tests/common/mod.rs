//! 测试辅助工具
//!
//! 提供端到端测试的辅助函数

#![allow(dead_code)]

use ordscan::{check, KeyKind, Order, Result, RunConfig, ScanReport};

/// 按指定顺序和键检查输入
///
/// # Example
/// ```ignore
/// let report = run_check("1 2 0", Order::Ascending, KeyKind::Identity);
/// assert_eq!(report.unwrap().position, Some(2));
/// ```
pub fn run_check(input: &str, order: Order, key: KeyKind) -> Result<ScanReport> {
    check(input, &RunConfig::from_options(Some(order), Some(key), None))
}

/// 默认配置（升序、原值）检查
pub fn check_default(input: &str) -> Result<ScanReport> {
    run_check(input, Order::Ascending, KeyKind::Identity)
}

/// 断言输入有序
pub fn assert_sorted(report: &ScanReport) {
    assert!(report.sorted, "expected sorted, got {}", report);
    assert_eq!(report.position, None);
    assert_eq!(report.to_string(), format!("sorted ({} elements)", report.len));
}

/// 断言在指定下标发现乱序
pub fn assert_unsorted_at(report: &ScanReport, index: usize) {
    assert!(!report.sorted, "expected violation at {}, got {}", index, report);
    assert_eq!(report.position, Some(index));
    // 找到违例前恰好比较了 index 次
    assert_eq!(report.comparisons, index);
}
