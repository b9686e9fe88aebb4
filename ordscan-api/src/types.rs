//! API 类型定义
//!
//! 动态类型的元素、序列和扫描报告。

use std::fmt;

use ordscan_core::{ForwardRange, SliceCursor};
use serde::Serialize;

use crate::error::{OrdscanError, Result};

/// 单个元素
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Float(f64),
    Text(String),
}

/// 元素类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Int,
    Float,
    Text,
}

impl ValueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::Text => "text",
        }
    }

    /// 是否为数值类型
    pub fn is_numeric(&self) -> bool {
        matches!(self, ValueKind::Int | ValueKind::Float)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Text(_) => ValueKind::Text,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Text(s) => write!(f, "{:?}", s),
        }
    }
}

/// 同类型元素序列
///
/// 整数与浮点数混合时序列类型为 float，但整数保留原值（比较键按精确值比较）；
/// 数值与文本混合则报错。
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sequence {
    values: Vec<Value>,
    kind: Option<ValueKind>,
}

impl Sequence {
    /// 校验并构建序列
    pub fn new(values: Vec<Value>) -> Result<Self> {
        let first = match values.first() {
            Some(v) => v.kind(),
            None => return Ok(Self::default()),
        };

        let mut saw_float = false;
        for (index, value) in values.iter().enumerate() {
            let found = value.kind();
            if found.is_numeric() != first.is_numeric() {
                return Err(OrdscanError::TypeMismatch {
                    index,
                    expected: first,
                    found,
                });
            }
            saw_float |= found == ValueKind::Float;
        }

        let kind = if first.is_numeric() && saw_float {
            ValueKind::Float
        } else {
            first
        };

        Ok(Self {
            values,
            kind: Some(kind),
        })
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// 元素类型（空序列为 None）
    pub fn kind(&self) -> Option<ValueKind> {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }
}

impl ForwardRange for Sequence {
    type Cursor<'a> = SliceCursor<'a, Value> where Self: 'a;
    type End<'a> = SliceCursor<'a, Value> where Self: 'a;

    fn begin(&self) -> SliceCursor<'_, Value> {
        SliceCursor::new(&self.values)
    }

    fn end(&self) -> SliceCursor<'_, Value> {
        SliceCursor::end_of(&self.values)
    }
}

/// 扫描报告
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanReport {
    /// 元素个数
    pub len: usize,
    /// 第一个乱序元素的下标（None 表示整个序列有序）
    pub position: Option<usize>,
    /// 乱序元素本身
    pub value: Option<Value>,
    /// 比较次数
    pub comparisons: usize,
    /// 是否整体有序
    pub sorted: bool,
    pub order: &'static str,
    pub key: &'static str,
}

impl fmt::Display for ScanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.position, &self.value) {
            (Some(index), Some(value)) => write!(f, "unsorted at index {}: {}", index, value),
            _ => write!(f, "sorted ({} elements)", self.len),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sequence_has_no_kind() {
        let seq = Sequence::new(Vec::new()).unwrap();
        assert!(seq.is_empty());
        assert_eq!(seq.kind(), None);
    }

    #[test]
    fn test_int_float_mix_keeps_ints() {
        let seq = Sequence::new(vec![Value::Int(1), Value::Float(1.5), Value::Int(2)]).unwrap();
        assert_eq!(seq.kind(), Some(ValueKind::Float));
        assert_eq!(seq.get(0), Some(&Value::Int(1)));
        assert_eq!(seq.get(2).and_then(Value::as_int), Some(2));

        // 大于 2^53 的整数不能经过 f64 转换
        let big = 9_007_199_254_740_993;
        let seq = Sequence::new(vec![Value::Int(big), Value::Float(0.5)]).unwrap();
        assert_eq!(seq.get(0), Some(&Value::Int(big)));
    }

    #[test]
    fn test_ints_stay_ints() {
        let seq = Sequence::new(vec![Value::Int(3), Value::Int(-1)]).unwrap();
        assert_eq!(seq.kind(), Some(ValueKind::Int));
        assert_eq!(seq.get(1).and_then(Value::as_int), Some(-1));
    }

    #[test]
    fn test_text_number_mix_is_rejected() {
        let err = Sequence::new(vec![
            Value::Text("a".to_string()),
            Value::Text("b".to_string()),
            Value::Int(3),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            OrdscanError::TypeMismatch {
                index: 2,
                expected: ValueKind::Text,
                found: ValueKind::Int,
            }
        );
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Int(-4).to_string(), "-4");
        assert_eq!(Value::Float(0.5).to_string(), "0.5");
        assert_eq!(Value::Text("hi".to_string()).to_string(), "\"hi\"");
    }

    #[test]
    fn test_report_display() {
        let report = ScanReport {
            len: 4,
            position: Some(2),
            value: Some(Value::Int(0)),
            comparisons: 2,
            sorted: false,
            order: "ascending",
            key: "identity",
        };
        assert_eq!(report.to_string(), "unsorted at index 2: 0");

        let sorted = ScanReport {
            position: None,
            value: None,
            sorted: true,
            ..report
        };
        assert_eq!(sorted.to_string(), "sorted (4 elements)");
    }

    #[test]
    fn test_report_serializes() {
        let report = ScanReport {
            len: 2,
            position: Some(1),
            value: Some(Value::Text("b".to_string())),
            comparisons: 1,
            sorted: false,
            order: "descending",
            key: "length",
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["position"], 1);
        assert_eq!(json["value"], "b");
        assert_eq!(json["order"], "descending");
    }
}
