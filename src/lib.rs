pub mod output;
pub mod units;

#[cfg(target_arch = "wasm32")]
pub mod wasm;
