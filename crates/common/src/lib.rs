//! Shared identifier types used across the cart ledger crates.

mod types;

pub use types::{CartId, Sku};
