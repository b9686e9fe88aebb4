//! 运行时选择的投影
//!
//! 把 [`KeyKind`] 映射为 `ordscan_core` 的 [`Projection`]。

use std::borrow::Cow;
use std::cmp::Ordering;

use ordscan_config::KeyKind;
use ordscan_core::Projection;

use crate::error::{OrdscanError, Result};
use crate::types::{Value, ValueKind};

/// 比较键
///
/// 整数键和浮点键可以互相比较，且按精确值比较（不经过 `as f64`）；
/// 其余不同变体之间不可比较。
#[derive(Debug, Clone)]
pub enum Key<'a> {
    Int(i64),
    Magnitude(u64),
    Float(f64),
    Length(usize),
    Text(Cow<'a, str>),
}

impl PartialEq for Key<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Key<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Key::Int(a), Key::Int(b)) => a.partial_cmp(b),
            (Key::Magnitude(a), Key::Magnitude(b)) => a.partial_cmp(b),
            (Key::Float(a), Key::Float(b)) => a.partial_cmp(b),
            (Key::Length(a), Key::Length(b)) => a.partial_cmp(b),
            (Key::Text(a), Key::Text(b)) => a.partial_cmp(b),
            (Key::Int(a), Key::Magnitude(b)) => i128::from(*a).partial_cmp(&i128::from(*b)),
            (Key::Magnitude(a), Key::Int(b)) => i128::from(*a).partial_cmp(&i128::from(*b)),
            (Key::Int(a), Key::Float(b)) => cmp_int_float(i128::from(*a), *b),
            (Key::Magnitude(a), Key::Float(b)) => cmp_int_float(i128::from(*a), *b),
            (Key::Float(a), Key::Int(b)) => cmp_int_float(i128::from(*b), *a).map(Ordering::reverse),
            (Key::Float(a), Key::Magnitude(b)) => {
                cmp_int_float(i128::from(*b), *a).map(Ordering::reverse)
            }
            _ => None,
        }
    }
}

/// 精确比较整数与浮点数；NaN 不可比较
///
/// `int` 的绝对值小于 2^64，超出该范围的浮点数直接决定结果，
/// 范围内的浮点数取整后转为 i128 是精确的。
fn cmp_int_float(int: i128, float: f64) -> Option<Ordering> {
    const TWO_POW_64: f64 = 18_446_744_073_709_551_616.0;
    if float.is_nan() {
        return None;
    }
    if float >= TWO_POW_64 {
        return Some(Ordering::Less);
    }
    if float < -TWO_POW_64 {
        return Some(Ordering::Greater);
    }
    let floor = float.floor();
    match int.cmp(&(floor as i128)) {
        Ordering::Equal if float > floor => Some(Ordering::Less),
        ordering => Some(ordering),
    }
}

impl<'a> From<&'a Value> for Key<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::Int(i) => Key::Int(*i),
            Value::Float(f) => Key::Float(*f),
            Value::Text(s) => Key::Text(Cow::Borrowed(s)),
        }
    }
}

/// 检查投影能否作用于该类型的元素
pub fn validate(key: KeyKind, kind: Option<ValueKind>) -> Result<()> {
    match (key, kind) {
        (_, None) | (KeyKind::Identity, _) => Ok(()),
        (KeyKind::Abs, Some(kind)) if kind.is_numeric() => Ok(()),
        (KeyKind::Length | KeyKind::Lowercase, Some(ValueKind::Text)) => Ok(()),
        (key, Some(kind)) => Err(OrdscanError::KeyMismatch {
            key: key.as_str(),
            kind,
        }),
    }
}

/// 按 [`KeyKind`] 提取比较键
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyProjection {
    kind: KeyKind,
}

impl KeyProjection {
    pub fn new(kind: KeyKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> KeyKind {
        self.kind
    }
}

impl<'a> Projection<&'a Value> for KeyProjection {
    type Key = Key<'a>;

    fn project(&self, value: &'a Value) -> Key<'a> {
        match (self.kind, value) {
            (KeyKind::Abs, Value::Int(i)) => Key::Magnitude(i.unsigned_abs()),
            (KeyKind::Abs, Value::Float(f)) => Key::Float(f.abs()),
            (KeyKind::Length, Value::Text(s)) => Key::Length(s.chars().count()),
            (KeyKind::Lowercase, Value::Text(s)) => Key::Text(Cow::Owned(s.to_lowercase())),
            // validate() rules out the remaining pairs for non-identity keys
            (_, value) => Key::from(value),
        }
    }
}
