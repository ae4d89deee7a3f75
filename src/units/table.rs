use lazy_static::lazy_static;
use serde::Serialize;
use std::collections::HashMap;
use std::f64::consts::PI;

/// Scale factor and SI symbol for one source unit token
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UnitEntry {
    /// Multiplier taking one source unit to one SI unit
    pub factor: f64,
    /// SI symbol the token is rewritten to (e.g. "rad", "s", "kg")
    pub si_symbol: &'static str,
}

// Listed in display order; keys must already be lowercase.
static CONVERSIONS: [(&str, f64, &str); 17] = [
    ("minute", 60.0, "s"),
    ("min", 60.0, "s"),
    ("hour", 3600.0, "s"),
    ("h", 3600.0, "s"),
    ("day", 86400.0, "s"),
    ("d", 86400.0, "s"),
    ("degree", PI / 180.0, "rad"),
    ("°", PI / 180.0, "rad"),
    ("‘", PI / 10800.0, "rad"),
    ("second", PI / 648000.0, "rad"),
    ("“", PI / 648000.0, "rad"),
    ("hectare", 10000.0, "m2"),
    ("ha", 10000.0, "m2"),
    ("litre", 0.001, "m3"),
    ("l", 0.001, "m3"),
    ("tonne", 1000.0, "kg"),
    ("t", 1000.0, "kg"),
];

lazy_static! {
    static ref TABLE: HashMap<&'static str, UnitEntry> = CONVERSIONS
        .iter()
        .map(|&(token, factor, si_symbol)| (token, UnitEntry { factor, si_symbol }))
        .collect();
}

/// Look up a bare unit token. Only exact, lowercase keys match.
pub fn lookup(token: &str) -> Option<UnitEntry> {
    TABLE.get(token).copied()
}

/// All table rows in their fixed order
pub fn entries() -> impl Iterator<Item = (&'static str, UnitEntry)> {
    CONVERSIONS
        .iter()
        .map(|&(token, factor, si_symbol)| (token, UnitEntry { factor, si_symbol }))
}
