//! Cart aggregate implementation.

use std::cell::RefCell;
use std::fmt::Write as _;
use std::rc::Rc;

use common::{CartId, Sku};
use serde::{Deserialize, Serialize};

use crate::aggregate::Aggregate;

use super::{CartError, LineItem, Money, SharedCart};

/// Cart aggregate root.
///
/// Holds line items in insertion order and an optional percentage discount.
/// Mutated only through [`add_item`](Cart::add_item),
/// [`remove_item`](Cart::remove_item) and [`apply_coupon`](Cart::apply_coupon);
/// each either applies fully or fails without changing anything.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    /// Identity used in logs; not part of snapshots.
    id: CartId,

    /// Lines keyed by SKU, in insertion order.
    items: Vec<LineItem>,

    /// Discount in percent, `None` when no coupon is applied.
    discount_percent: Option<u8>,
}

/// Immutable copy of a cart's items and discount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSnapshot {
    items: Vec<LineItem>,
    discount_percent: Option<u8>,
}

impl CartSnapshot {
    /// Returns the captured items.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Returns the captured discount.
    pub fn discount_percent(&self) -> Option<u8> {
        self.discount_percent
    }
}

impl Aggregate for Cart {
    type Id = CartId;
    type Snapshot = CartSnapshot;

    fn aggregate_type() -> &'static str {
        "Cart"
    }

    fn id(&self) -> CartId {
        self.id
    }

    fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            items: self.items.clone(),
            discount_percent: self.discount_percent,
        }
    }

    fn restore(&mut self, snapshot: &CartSnapshot) {
        self.items = snapshot.items.clone();
        self.discount_percent = snapshot.discount_percent;
    }
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty cart with the given identity.
    pub fn with_id(id: CartId) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// Wraps the cart so it can be shared with commands.
    pub fn into_shared(self) -> SharedCart {
        Rc::new(RefCell::new(self))
    }
}

// Query methods
impl Cart {
    /// Returns all items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Returns an item by SKU.
    pub fn get_item(&self, sku: &Sku) -> Option<&LineItem> {
        self.items.iter().find(|item| &item.sku == sku)
    }

    /// Returns the number of distinct lines.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity across all lines.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Returns true if the cart has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the applied discount, if any.
    pub fn discount_percent(&self) -> Option<u8> {
        self.discount_percent
    }

    /// Returns the sum of all lines before any discount.
    pub fn subtotal(&self) -> Money {
        to_money(self.raw_total())
    }

    /// Returns the amount due in minor units.
    ///
    /// With a discount `p` applied to the raw sum `s`, the total is
    /// `(s × (100 − p) + 50) / 100` in integer arithmetic, i.e. rounded to the
    /// nearest minor unit with ties rounding up.
    pub fn total(&self) -> Money {
        let raw = self.raw_total();

        let total = match self.discount_percent {
            Some(percent) => (raw * (100 - i128::from(percent)) + 50) / 100,
            None => raw,
        };

        to_money(total)
    }

    /// Renders the cart for display.
    pub fn describe(&self) -> String {
        let mut out = String::new();

        for item in &self.items {
            let _ = writeln!(
                out,
                "- {} ×{} @ {}",
                item.sku, item.quantity, item.unit_price
            );
        }

        match self.discount_percent {
            Some(percent) => {
                let _ = writeln!(out, "Coupon: {percent}%");
            }
            None => out.push_str("Coupon: -\n"),
        }

        let _ = write!(out, "Total:  {}", self.total());
        out
    }

    fn raw_total(&self) -> i128 {
        self.items.iter().map(LineItem::line_total).sum()
    }

    fn position(&self, sku: &Sku) -> Option<usize> {
        self.items.iter().position(|item| &item.sku == sku)
    }
}

// Mutators
impl Cart {
    /// Adds `quantity` units of `sku`.
    ///
    /// A new SKU is inserted at `unit_price`. For a SKU already in the cart
    /// only the quantity grows; the original unit price is kept and the given
    /// one is ignored. The addition is rejected if the line quantity would
    /// overflow `u32` or the cart's undiscounted sum would exceed `i64`.
    pub fn add_item(
        &mut self,
        sku: &Sku,
        quantity: u32,
        unit_price: Money,
    ) -> Result<(), CartError> {
        if quantity == 0 {
            return Err(CartError::InvalidQuantity { quantity });
        }

        if !unit_price.is_positive() {
            return Err(CartError::InvalidPrice {
                price: unit_price.minor_units(),
            });
        }

        let (index, price) = match self.position(sku) {
            Some(index) => (Some(index), self.items[index].unit_price),
            None => (None, unit_price),
        };

        if let Some(index) = index {
            let current = self.items[index].quantity;
            if current.checked_add(quantity).is_none() {
                return Err(CartError::QuantityOverflow {
                    sku: sku.clone(),
                    current,
                    quantity,
                });
            }
        }

        let added = i128::from(quantity) * i128::from(price.minor_units());
        if self.raw_total() + added > i128::from(i64::MAX) {
            return Err(CartError::TotalOverflow {
                sku: sku.clone(),
                quantity,
            });
        }

        match index {
            Some(index) => self.items[index].quantity += quantity,
            None => self.items.push(LineItem::new(sku.clone(), quantity, unit_price)),
        }

        tracing::debug!(cart_id = %self.id, %sku, quantity, "item added");
        Ok(())
    }

    /// Removes `quantity` units of `sku`.
    ///
    /// When the quantity would drop to zero or below, the whole line is
    /// removed; removing more than present is allowed.
    pub fn remove_item(&mut self, sku: &Sku, quantity: u32) -> Result<(), CartError> {
        let index = self
            .position(sku)
            .ok_or_else(|| CartError::ItemNotFound { sku: sku.clone() })?;

        if quantity == 0 {
            return Err(CartError::InvalidQuantity { quantity });
        }

        let item = &mut self.items[index];
        if item.quantity > quantity {
            item.quantity -= quantity;
        } else {
            self.items.remove(index);
        }

        tracing::debug!(cart_id = %self.id, %sku, quantity, "item removed");
        Ok(())
    }

    /// Applies a percentage discount, replacing any previous one.
    pub fn apply_coupon(&mut self, percent: u8) -> Result<(), CartError> {
        if percent > 100 {
            return Err(CartError::InvalidDiscount { percent });
        }

        self.discount_percent = Some(percent);

        tracing::debug!(cart_id = %self.id, percent, "coupon applied");
        Ok(())
    }
}

impl std::fmt::Display for Cart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.describe())
    }
}

// `add_item` keeps the raw sum within `i64`, and a discount only shrinks it.
fn to_money(minor_units: i128) -> Money {
    Money::from_minor(minor_units as i64)
}
