use crate::units::error::ConversionError;
use crate::units::evaluator::evaluate;
use crate::units::parens::find_unbalanced;
use crate::units::rewriter::rewrite_unit_name;
use crate::units::types::ConversionResult;

/// A unit expression resolved to its SI name and multiplication factor
#[derive(Debug, Clone, PartialEq)]
pub struct Converter {
    units: String,
    unit_name: String,
    mult_factor: f64,
}

impl Converter {
    /// Normalize `raw` (trim, lowercase) and convert it.
    ///
    /// Fails with `MalformedParentheses` before anything else is attempted,
    /// then with `MalformedUnit` if any operand is not a known unit, and with
    /// `NonFiniteFactor` if the factor overflows `f64`.
    pub fn new(raw: &str) -> Result<Self, ConversionError> {
        let units = raw.trim().to_lowercase();

        if let Some(position) = find_unbalanced(&units) {
            log::warn!("rejected '{}': unbalanced parenthesis at byte {}", units, position);
            return Err(ConversionError::MalformedParentheses { position });
        }

        let unit_name = rewrite_unit_name(&units).into_owned();
        let mult_factor = evaluate(&units).inspect_err(|e| {
            log::warn!("rejected '{}': {}", units, e);
        })?;

        if !mult_factor.is_finite() {
            log::warn!("rejected '{}': factor {} is not finite", units, mult_factor);
            return Err(ConversionError::NonFiniteFactor { units });
        }

        log::debug!("converted '{}' to '{}' x {}", units, unit_name, mult_factor);

        Ok(Self {
            units,
            unit_name,
            mult_factor,
        })
    }

    /// Normalized input expression
    pub fn units(&self) -> &str {
        &self.units
    }

    pub fn unit_name(&self) -> &str {
        &self.unit_name
    }

    pub fn mult_factor(&self) -> f64 {
        self.mult_factor
    }

    pub fn to_result(&self) -> ConversionResult {
        ConversionResult {
            unit_name: self.unit_name.clone(),
            mult_factor: self.mult_factor,
        }
    }
}

impl From<Converter> for ConversionResult {
    fn from(converter: Converter) -> Self {
        ConversionResult {
            unit_name: converter.unit_name,
            mult_factor: converter.mult_factor,
        }
    }
}

/// Convert a possibly absent expression; absent behaves like an empty one
pub fn convert(units: Option<&str>) -> Result<ConversionResult, ConversionError> {
    Converter::new(units.unwrap_or_default()).map(ConversionResult::from)
}
