use crate::units::error::ConversionError;
use crate::units::parens::{is_well_formed, nesting_depth};
use crate::units::splitter::{
    is_base_operand, split_on_operators, strip_trailing_operator, Fragment, Operator,
};
use crate::units::table;

/// Deepest parenthesis nesting the evaluator accepts
pub const MAX_NESTING_DEPTH: usize = 256;

/// Compute the SI scale factor of an expression whose parentheses are already
/// known to balance.
///
/// Sibling operands fold strictly left to right, so `a/b*c` is `(a/b)*c`.
/// Parenthesized groups are evaluated recursively and are otherwise
/// transparent. Nesting deeper than `MAX_NESTING_DEPTH` is rejected.
pub fn evaluate(units: &str) -> Result<f64, ConversionError> {
    let depth = nesting_depth(units);
    if depth > MAX_NESTING_DEPTH {
        log::warn!("nesting depth {} exceeds {}", depth, MAX_NESTING_DEPTH);
        return Err(ConversionError::malformed_unit(units));
    }

    evaluate_nested(units)
}

fn evaluate_nested(mut units: &str) -> Result<f64, ConversionError> {
    // Redundant outer groups, e.g. "((min*h))/"
    while let Some(inner) = enclosed_group(units) {
        units = inner;
    }

    if units.is_empty() {
        return Ok(1.0);
    }

    if is_base_operand(units) {
        return lookup_factor(units);
    }

    let mut accumulator = 1.0;
    let mut pending: Option<Operator> = None;

    for fragment in split_on_operators(units) {
        let value = operand_value(&fragment)?;
        accumulator = match pending {
            Some(operator) => operator.apply(accumulator, value),
            None => value,
        };
        log::trace!(
            "folded '{}' into '{}' -> {}",
            fragment.as_str(),
            units,
            accumulator
        );
        pending = fragment.trailing_operator();
    }

    Ok(accumulator)
}

fn operand_value(fragment: &Fragment<'_>) -> Result<f64, ConversionError> {
    match enclosed_group(fragment.as_str()) {
        Some(inner) => evaluate_nested(inner),
        None => lookup_factor(fragment.operand()),
    }
}

fn lookup_factor(token: &str) -> Result<f64, ConversionError> {
    table::lookup(token)
        .map(|entry| entry.factor)
        .ok_or_else(|| ConversionError::malformed_unit(token))
}

/// Inner text when the whole string (minus one trailing operator) is a single
/// parenthesized group: `"(min*h)/"` gives `"min*h"`, `"(min)*(h)"` gives `None`.
pub fn enclosed_group(units: &str) -> Option<&str> {
    let inner = strip_trailing_operator(units)
        .strip_prefix('(')?
        .strip_suffix(')')?;

    is_well_formed(inner).then_some(inner)
}
