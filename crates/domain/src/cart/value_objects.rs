//! Value objects for the cart domain.

use common::Sku;
use serde::{Deserialize, Serialize};

/// Money amount in minor currency units (e.g. cents).
///
/// All arithmetic is integer-only; there is no currency attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money {
    minor_units: i64,
}

impl Money {
    /// Creates a new Money amount from minor units.
    pub fn from_minor(minor_units: i64) -> Self {
        Self { minor_units }
    }

    /// Returns zero money.
    pub fn zero() -> Self {
        Self { minor_units: 0 }
    }

    /// Returns the amount in minor units.
    pub fn minor_units(&self) -> i64 {
        self.minor_units
    }

    /// Returns the major portion (whole number).
    pub fn major(&self) -> i64 {
        self.minor_units / 100
    }

    /// Returns the minor portion (remainder after major units).
    pub fn minor_part(&self) -> i64 {
        self.minor_units.abs() % 100
    }

    /// Returns true if the amount is positive.
    pub fn is_positive(&self) -> bool {
        self.minor_units > 0
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.minor_units < 0 {
            write!(f, "-{}.{:02}", self.major().abs(), self.minor_part())
        } else {
            write!(f, "{}.{:02}", self.major(), self.minor_part())
        }
    }
}

/// A line in the cart.
///
/// The unit price is fixed when the SKU is first added; later additions of
/// the same SKU only change the quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// The SKU this line is keyed by.
    pub sku: Sku,

    /// Quantity in the cart, always greater than 0.
    pub quantity: u32,

    /// Price per unit, always positive.
    pub unit_price: Money,
}

impl LineItem {
    /// Creates a new line item.
    pub fn new(sku: impl Into<Sku>, quantity: u32, unit_price: Money) -> Self {
        Self {
            sku: sku.into(),
            quantity,
            unit_price,
        }
    }

    /// Returns quantity × unit price in minor units, widened so it cannot overflow.
    pub fn line_total(&self) -> i128 {
        i128::from(self.quantity) * i128::from(self.unit_price.minor_units())
    }
}
