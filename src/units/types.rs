use serde::{Deserialize, Serialize};

/// Result of converting a unit expression to SI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    /// Input expression with every known unit replaced by its SI symbol
    pub unit_name: String,
    /// Multiplier taking a quantity in the input units to SI units
    #[serde(rename = "multiplication_factor")]
    pub mult_factor: f64,
}
