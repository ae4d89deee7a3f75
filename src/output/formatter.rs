use crate::output::config::OutputConfig;
use crate::units::table::UnitEntry;
use crate::units::ConversionResult;
use serde::Serialize;

/// Round half away from zero to `digits` decimal places.
/// At 17 or more places an f64 has nothing left to round, and values too large
/// to scale have no fractional part, so both are returned as is.
pub fn round_to(value: f64, digits: u32) -> f64 {
    if digits >= 17 {
        return value;
    }
    let scale = 10f64.powi(digits as i32);
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / scale
}

/// JSON body for a successful conversion, factor rounded per `config`
pub fn format_conversion(
    result: &ConversionResult,
    config: &OutputConfig,
) -> Result<String, serde_json::Error> {
    let rounded = ConversionResult {
        unit_name: result.unit_name.clone(),
        mult_factor: round_to(result.mult_factor, config.precision),
    };
    to_json(&rounded, config.pretty)
}

#[derive(Serialize)]
struct TableRow<'a> {
    unit: &'a str,
    #[serde(flatten)]
    entry: UnitEntry,
}

/// JSON array of conversion table rows
pub fn format_table<'a>(
    entries: impl IntoIterator<Item = (&'a str, UnitEntry)>,
    pretty: bool,
) -> Result<String, serde_json::Error> {
    let rows: Vec<TableRow<'a>> = entries
        .into_iter()
        .map(|(unit, entry)| TableRow { unit, entry })
        .collect();
    to_json(&rows, pretty)
}

fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String, serde_json::Error> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}
