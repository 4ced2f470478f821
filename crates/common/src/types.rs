use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity of one cart, minted at construction.
///
/// Only tags log lines and tracing spans so events from different carts can
/// be told apart. It never takes part in snapshots, totals or equality of
/// cart contents, and there is no lookup by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartId(Uuid);

impl CartId {
    /// Mints a fresh random identity.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CartId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CartId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stock-keeping unit: the opaque key identifying a cart line.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sku(String);

impl Sku {
    /// Creates a SKU from any string-like value.
    pub fn new(sku: impl Into<String>) -> Self {
        Self(sku.into())
    }

    /// Returns the SKU as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Sku {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Sku {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Sku {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cart_id_new_creates_unique_ids() {
        assert_ne!(CartId::new(), CartId::new());
    }

    #[test]
    fn cart_id_displays_as_hyphenated_uuid() {
        let rendered = CartId::new().to_string();
        assert_eq!(rendered.len(), 36);
        assert!(Uuid::parse_str(&rendered).is_ok());
    }

    #[test]
    fn sku_conversions_agree() {
        let owned: Sku = String::from("BK-001").into();
        let borrowed: Sku = "BK-001".into();
        assert_eq!(owned, borrowed);
        assert_eq!(borrowed.as_str(), "BK-001");
        assert_eq!(borrowed.to_string(), "BK-001");
    }

    #[test]
    fn sku_serializes_as_plain_string() {
        let json = serde_json::to_string(&Sku::new("USB-16G")).unwrap();
        assert_eq!(json, "\"USB-16G\"");

        let back: Sku = serde_json::from_str(&json).unwrap();
        assert_eq!(back.as_str(), "USB-16G");
    }
}
