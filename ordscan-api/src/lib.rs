//! ordscan API - Scan orchestration layer
//!
//! Provides the dynamically typed entry points on top of `ordscan-core`:
//! - Input parsing into a homogeneous [`Sequence`]
//! - Runtime choice of order and key ([`ScanConfig`])
//! - Configuration abstraction ([`RunConfig`])
//! - Unified error handling ([`OrdscanError`])
//!
//! For CLI convenience, this crate provides a global singleton API.
//! For library use, prefer the explicit `check(input, &config)` API.

use ordscan_core::{Counted, Greater, Less, Relation, IS_SORTED_UNTIL};
use tracing::{debug, info, info_span};

// Re-export config
pub mod config;
pub use config::{config as get_config, init as init_config, is_initialized, try_init, RunConfig};

// Re-export config types from ordscan_config
pub use ordscan_config::{KeyKind, LimitConfig, Order, Phase, ScanConfig};

pub mod error;
pub mod key;
pub mod parse;
pub mod types;

pub use error::{ErrorReport, OrdscanError, Result};
pub use key::{Key, KeyProjection};
pub use parse::parse_sequence;
pub use types::{ScanReport, Sequence, Value, ValueKind};

pub use ordscan_config;
pub use ordscan_core;

/// Parse and scan with explicit configuration
///
/// This is the recommended API for library users.
pub fn check(input: &str, config: &RunConfig) -> Result<ScanReport> {
    let sequence = parse_sequence(input, &config.limits)?;
    scan_with_config(&sequence, &config.scan)
}

/// Scan an already parsed sequence
pub fn scan_with_config(sequence: &Sequence, config: &ScanConfig) -> Result<ScanReport> {
    let span = info_span!(
        target: "ordscan::scan",
        "scan",
        order = config.order.as_str(),
        key = config.key.as_str()
    );
    span.in_scope(|| scan_in_span(sequence, config))
}

fn scan_in_span(sequence: &Sequence, config: &ScanConfig) -> Result<ScanReport> {
    key::validate(config.key, sequence.kind())?;

    let projection = KeyProjection::new(config.key);
    let (position, comparisons) = match config.order {
        Order::Ascending => run(sequence, Less, projection),
        Order::Descending => run(sequence, Greater, projection),
    };

    let report = ScanReport {
        len: sequence.len(),
        position,
        value: position.and_then(|i| sequence.get(i)).cloned(),
        comparisons,
        sorted: position.is_none(),
        order: config.order.as_str(),
        key: config.key.as_str(),
    };

    match report.position {
        Some(index) => info!(target: "ordscan::report", index, comparisons, "sequence is unsorted"),
        None => info!(target: "ordscan::report", len = report.len, comparisons, "sequence is sorted"),
    }
    Ok(report)
}

/// Run the core scanner, returning the violation index and comparison count
fn run<'s, R>(sequence: &'s Sequence, relation: R, projection: KeyProjection) -> (Option<usize>, usize)
where
    R: Relation<Key<'s>>,
{
    let scanner = IS_SORTED_UNTIL.by(Counted::new(relation)).by_key(projection);
    let cursor = scanner.scan_range(sequence);
    let comparisons = scanner.relation().calls();
    debug!(
        target: "ordscan::scan",
        stopped_at = cursor.index(),
        comparisons,
        "scan finished"
    );
    (cursor.get().map(|_| cursor.index()), comparisons)
}

// ==================== Legacy API (using global config) ====================

/// Parse and scan (uses global config)
///
/// # Panics
/// If global config is not initialized
pub fn check_global(input: &str) -> Result<ScanReport> {
    check(input, get_config())
}
