// WebAssembly bindings for the SI unit converter
use crate::output::{self, OutputConfig};
use crate::units::{self, table};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct SiUnitsWasm {
    config: OutputConfig,
}

impl Default for SiUnitsWasm {
    fn default() -> Self {
        Self::new()
    }
}

fn js_error(message: &str) -> JsValue {
    js_sys::Error::new(message).into()
}

#[wasm_bindgen]
impl SiUnitsWasm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            config: OutputConfig::default(),
        }
    }

    /// Build a converter from TOML config content (same format as the CLI config file)
    #[wasm_bindgen]
    pub fn with_config(config_content: &str) -> Result<SiUnitsWasm, JsValue> {
        let config = output::Config::load_from_str(config_content)
            .map_err(|e| js_error(&format!("Failed to load config: {}", e)))?;

        Ok(Self {
            config: config.output,
        })
    }

    /// Convert a unit expression
    /// Returns JSON string: {"unit_name": ..., "multiplication_factor": ...}
    /// Throws an Error carrying the bad request message on malformed input,
    /// or an empty Error on any other failure
    #[wasm_bindgen]
    pub fn convert(&self, units: Option<String>) -> Result<String, JsValue> {
        let result = units::convert(units.as_deref())
            .map_err(|e| js_error(e.bad_request_message().unwrap_or_default()))?;

        output::format_conversion(&result, &self.config)
            .map_err(|e| js_error(&format!("Failed to serialize result: {}", e)))
    }

    /// Get the conversion table
    /// Returns JSON string array of {"unit", "factor", "si_symbol"}
    #[wasm_bindgen]
    pub fn table(&self) -> Result<String, JsValue> {
        output::format_table(table::entries(), self.config.pretty)
            .map_err(|e| js_error(&format!("Failed to serialize table: {}", e)))
    }
}
