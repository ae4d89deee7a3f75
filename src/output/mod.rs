pub mod config;
pub mod formatter;

pub use config::*;
pub use formatter::*;
