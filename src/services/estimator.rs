//! Salary estimation from a normalized salary record
//!
//! Both APIs publish open-ended salary ranges, so a single point estimate
//! is derived per vacancy: the midpoint when both bounds are known, +20%
//! on a bare lower bound, -20% on a bare upper bound.

use crate::types::SalaryRecord;

/// Currency the statistics are computed in; records quoting any other
/// currency are excluded entirely
pub const TARGET_CURRENCY: &str = "RUB";

/// Derive a point estimate from a salary record, or `None` when the record
/// is unusable (foreign/missing currency, no positive bounds).
///
/// SuperJob reports unset bounds as 0, so non-positive bounds are treated
/// as absent before the arithmetic, and a computed estimate of 0 is
/// likewise reported as unusable.
pub fn estimate(record: &SalaryRecord, target_currency: &str) -> Option<u64> {
    if record.currency.as_deref() != Some(target_currency) {
        return None;
    }

    let from = record.from.filter(|v| *v > 0);
    let to = record.to.filter(|v| *v > 0);

    // Integer arithmetic keeps floor(from * 1.2) and floor(to * 0.8) exact
    let estimate = match (from, to) {
        (Some(from), Some(to)) => (from + to) / 2,
        (Some(from), None) => from * 12 / 10,
        (None, Some(to)) => to * 8 / 10,
        (None, None) => return None,
    };

    (estimate > 0).then_some(estimate)
}
