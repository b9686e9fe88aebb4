//! ordscan Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It serves as the shared configuration vocabulary across all ordscan crates.

use serde::Deserialize;

/// Direction a sequence is expected to be sorted in
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    /// Non-decreasing; an element smaller than its predecessor is a violation
    #[default]
    #[serde(alias = "asc")]
    Ascending,
    /// Non-increasing; an element greater than its predecessor is a violation
    #[serde(alias = "desc")]
    Descending,
}

impl Order {
    pub fn as_str(&self) -> &'static str {
        match self {
            Order::Ascending => "ascending",
            Order::Descending => "descending",
        }
    }

    /// Parse a user supplied name (`asc`, `ascending`, `desc`, `descending`)
    pub fn parse(s: &str) -> Option<Order> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Some(Order::Ascending),
            "desc" | "descending" => Some(Order::Descending),
            _ => None,
        }
    }
}

/// Key extracted from each element before comparison
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyKind {
    /// Compare elements as they are
    #[default]
    Identity,
    /// Absolute value of a number
    Abs,
    /// Character count of a text element
    Length,
    /// Lowercased text
    Lowercase,
}

impl KeyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyKind::Identity => "identity",
            KeyKind::Abs => "abs",
            KeyKind::Length => "length",
            KeyKind::Lowercase => "lowercase",
        }
    }

    pub fn parse(s: &str) -> Option<KeyKind> {
        match s.to_lowercase().as_str() {
            "identity" | "id" => Some(KeyKind::Identity),
            "abs" => Some(KeyKind::Abs),
            "length" | "len" => Some(KeyKind::Length),
            "lowercase" | "lower" => Some(KeyKind::Lowercase),
            _ => None,
        }
    }
}

/// Configuration for a single scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Expected order
    pub order: Order,
    /// Projection applied before comparing
    pub key: KeyKind,
}

/// Configuration for input limits
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LimitConfig {
    /// Maximum number of elements accepted from one input
    pub max_elements: usize,
    /// Maximum length of a single token in bytes
    pub max_token_len: usize,
}

/// Processing phase enum for phase-specific log configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Parse,
    Scan,
    Report,
    Cli,
}

impl Phase {
    /// All phases, in processing order
    pub const ALL: [Phase; 4] = [Phase::Parse, Phase::Scan, Phase::Report, Phase::Cli];

    /// Get the string name of the phase
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Parse => "parse",
            Phase::Scan => "scan",
            Phase::Report => "report",
            Phase::Cli => "cli",
        }
    }

    /// Get the log target name for this phase
    pub fn target(&self) -> String {
        format!("ordscan::{}", self.as_str())
    }
}

impl Default for LimitConfig {
    fn default() -> Self {
        Self {
            max_elements: 1_000_000,
            max_token_len: 4096,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scan_config() {
        let cfg = ScanConfig::default();
        assert_eq!(cfg.order, Order::Ascending);
        assert_eq!(cfg.key, KeyKind::Identity);
    }

    #[test]
    fn test_default_limit_config() {
        let cfg = LimitConfig::default();
        assert_eq!(cfg.max_elements, 1_000_000);
        assert_eq!(cfg.max_token_len, 4096);
    }

    #[test]
    fn test_phase_as_str() {
        assert_eq!(Phase::Parse.as_str(), "parse");
        assert_eq!(Phase::Scan.target(), "ordscan::scan");
        assert_eq!(Phase::ALL.len(), 4);
    }

    #[test]
    fn test_order_parse() {
        assert_eq!(Order::parse("asc"), Some(Order::Ascending));
        assert_eq!(Order::parse("DESC"), Some(Order::Descending));
        assert_eq!(Order::parse("descending"), Some(Order::Descending));
        assert_eq!(Order::parse("sideways"), None);
    }

    #[test]
    fn test_key_parse() {
        assert_eq!(KeyKind::parse("len"), Some(KeyKind::Length));
        assert_eq!(KeyKind::parse("Abs"), Some(KeyKind::Abs));
        assert_eq!(KeyKind::parse("lower"), Some(KeyKind::Lowercase));
        assert_eq!(KeyKind::parse("sha256"), None);
        assert_eq!(KeyKind::Lowercase.as_str(), "lowercase");
    }

    #[test]
    fn test_deserialize_scan_config() {
        let cfg: ScanConfig =
            serde_json::from_str(r#"{ "order": "desc", "key": "length" }"#).unwrap();
        assert_eq!(cfg.order, Order::Descending);
        assert_eq!(cfg.key, KeyKind::Length);

        let partial: ScanConfig = serde_json::from_str(r#"{ "key": "abs" }"#).unwrap();
        assert_eq!(partial.order, Order::Ascending);
        assert_eq!(partial.key, KeyKind::Abs);
    }

    #[test]
    fn test_deserialize_limit_config_defaults() {
        let cfg: LimitConfig = serde_json::from_str(r#"{ "max_elements": 10 }"#).unwrap();
        assert_eq!(cfg.max_elements, 10);
        assert_eq!(cfg.max_token_len, 4096);
    }
}
