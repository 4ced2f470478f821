//! Cart session wiring a cart to its command history.

use std::cell::Ref;

use common::{CartId, Sku};

use crate::aggregate::Aggregate;
use crate::events::HistoryEvent;
use crate::history::History;

use super::{AddItem, ApplyCoupon, Cart, CartCommand, CartError, Money, RemoveItem, SharedCart};

/// A cart together with the undo/redo history of its commands.
///
/// Provides a high-level API that builds the matching command for each cart
/// mutation and runs it through the history. Callers construct one session
/// per cart; nothing is global.
#[derive(Debug)]
pub struct CartSession {
    cart_id: CartId,
    cart: SharedCart,
    history: History<CartCommand>,
}

impl CartSession {
    /// Creates a session over a new, empty cart.
    pub fn new() -> Self {
        Self::with_cart(Cart::new().into_shared())
    }

    /// Creates a session over an existing shared cart.
    pub fn with_cart(cart: SharedCart) -> Self {
        let cart_id = cart.borrow().id();
        Self {
            cart_id,
            cart,
            history: History::new(),
        }
    }

    /// Returns the cart's identity.
    pub fn cart_id(&self) -> CartId {
        self.cart_id
    }

    /// Borrows the cart for reading.
    pub fn cart(&self) -> Ref<'_, Cart> {
        self.cart.borrow()
    }

    /// Returns the shared cart handle, e.g. to build commands by hand.
    pub fn shared_cart(&self) -> &SharedCart {
        &self.cart
    }

    /// Returns the command history.
    pub fn history(&self) -> &History<CartCommand> {
        &self.history
    }

    /// Returns the command history for subscribing listeners.
    pub fn history_mut(&mut self) -> &mut History<CartCommand> {
        &mut self.history
    }

    /// Performs an arbitrary cart command.
    #[tracing::instrument(skip_all, fields(cart_id = %self.cart_id))]
    pub fn perform(&mut self, command: impl Into<CartCommand>) -> Result<HistoryEvent, CartError> {
        self.history.perform(command.into())
    }

    /// Adds units of a SKU to the cart.
    pub fn add_item(
        &mut self,
        sku: impl Into<Sku>,
        quantity: u32,
        unit_price: Money,
    ) -> Result<HistoryEvent, CartError> {
        let command = AddItem::new(&self.cart, sku, quantity, unit_price);
        self.perform(command)
    }

    /// Removes units of a SKU from the cart.
    pub fn remove_item(
        &mut self,
        sku: impl Into<Sku>,
        quantity: u32,
    ) -> Result<HistoryEvent, CartError> {
        let command = RemoveItem::new(&self.cart, sku, quantity);
        self.perform(command)
    }

    /// Applies a percentage coupon to the cart.
    pub fn apply_coupon(&mut self, percent: u8) -> Result<HistoryEvent, CartError> {
        let command = ApplyCoupon::new(&self.cart, percent);
        self.perform(command)
    }

    /// Reverts the most recent command, if any.
    #[tracing::instrument(skip_all, fields(cart_id = %self.cart_id))]
    pub fn undo(&mut self) -> Option<HistoryEvent> {
        self.history.undo()
    }

    /// Re-executes the most recently undone command, if any.
    #[tracing::instrument(skip_all, fields(cart_id = %self.cart_id))]
    pub fn redo(&mut self) -> Option<HistoryEvent> {
        self.history.redo()
    }

    /// Returns the cart total.
    pub fn total(&self) -> Money {
        self.cart.borrow().total()
    }

    /// Renders the cart for display.
    pub fn describe(&self) -> String {
        self.cart.borrow().describe()
    }
}

impl Default for CartSession {
    fn default() -> Self {
        Self::new()
    }
}
