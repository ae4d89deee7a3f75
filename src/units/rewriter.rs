use crate::units::table;
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::borrow::Cow;

lazy_static! {
    /// A token is a maximal run of anything except parentheses and operators
    static ref TOKEN: Regex = Regex::new(r"[^()*/]+").unwrap();
}

/// Replace every whole token that is a table key with its SI symbol.
///
/// Parentheses, operators and unknown tokens are copied through unchanged,
/// and tokens only match in full, so `ha` is never rewritten inside `hectare`.
pub fn rewrite_unit_name(units: &str) -> Cow<'_, str> {
    TOKEN.replace_all(units, |caps: &Captures| {
        let token = &caps[0];
        match table::lookup(token) {
            Some(entry) => entry.si_symbol.to_string(),
            None => token.to_string(),
        }
    })
}
