// Unit expression conversion: `(second*ha)/(litre*tonne*h)` -> SI name and factor

pub mod converter;
pub mod error;
pub mod evaluator;
pub mod parens;
pub mod rewriter;
pub mod splitter;
pub mod table;
pub mod types;

#[cfg(test)]
mod tests;

pub use converter::{convert, Converter};
pub use error::ConversionError;
pub use rewriter::rewrite_unit_name;
pub use table::UnitEntry;
pub use types::ConversionResult;
