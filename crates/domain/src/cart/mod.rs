//! Cart aggregate and related types.

mod aggregate;
mod commands;
mod session;
mod value_objects;

use std::cell::RefCell;
use std::rc::Rc;

pub use aggregate::{Cart, CartSnapshot};
pub use commands::{AddItem, ApplyCoupon, CartCommand, RemoveItem};
pub use session::CartSession;
pub use value_objects::{LineItem, Money};

use common::Sku;
use thiserror::Error;

/// A cart shared between the caller and every command that targets it.
pub type SharedCart = Rc<RefCell<Cart>>;

/// Broad classification of cart errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A quantity, price or percentage was malformed.
    InvalidArgument,

    /// The operation targeted a SKU absent from the cart.
    NotFound,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::InvalidArgument => write!(f, "invalid argument"),
            ErrorKind::NotFound => write!(f, "not found"),
        }
    }
}

/// Errors that can occur during cart operations.
///
/// A rejected operation never partially applies.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// Quantity must be greater than 0.
    #[error("Invalid quantity: {quantity} (must be greater than 0)")]
    InvalidQuantity { quantity: u32 },

    /// Unit price must be greater than 0.
    #[error("Invalid price: {price} (must be greater than 0)")]
    InvalidPrice { price: i64 },

    /// Discount must lie within 0..=100.
    #[error("Invalid discount: {percent}% (must be between 0 and 100)")]
    InvalidDiscount { percent: u8 },

    /// Adding the quantity would overflow the line's quantity.
    #[error("Quantity overflow for {sku}: cannot add {quantity} to {current}")]
    QuantityOverflow { sku: Sku, current: u32, quantity: u32 },

    /// Adding the units would push the cart's sum past the largest amount.
    #[error("Total overflow: adding {quantity} of {sku} exceeds the maximum cart total")]
    TotalOverflow { sku: Sku, quantity: u32 },

    /// Item not found in cart.
    #[error("Item not found: {sku}")]
    ItemNotFound { sku: Sku },
}

impl CartError {
    /// Returns the broad kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CartError::InvalidQuantity { .. }
            | CartError::InvalidPrice { .. }
            | CartError::InvalidDiscount { .. }
            | CartError::QuantityOverflow { .. }
            | CartError::TotalOverflow { .. } => ErrorKind::InvalidArgument,
            CartError::ItemNotFound { .. } => ErrorKind::NotFound,
        }
    }
}
