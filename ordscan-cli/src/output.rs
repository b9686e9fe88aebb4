//! CLI 格式化输出

use ordscan_api::{ErrorReport, ScanReport};

/// 退出码：序列有序
pub const EXIT_SORTED: i32 = 0;
/// 退出码：序列乱序
pub const EXIT_UNSORTED: i32 = 1;
/// 退出码：出错
pub const EXIT_ERROR: i32 = 2;

/// 渲染扫描结果
pub fn render_report(report: &ScanReport, json: bool) -> String {
    if json {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| report.to_string())
    } else {
        report.to_string()
    }
}

/// 渲染错误
pub fn render_error(report: &ErrorReport, json: bool) -> String {
    if json {
        report.to_json()
    } else {
        format!("❌ {}", report)
    }
}

/// 扫描结果对应的退出码
pub fn exit_code(report: &ScanReport) -> i32 {
    if report.sorted {
        EXIT_SORTED
    } else {
        EXIT_UNSORTED
    }
}
