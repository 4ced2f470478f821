//! Cart commands.
//!
//! Every command captures a snapshot of the cart right before it executes,
//! so undo is always "restore the prior snapshot" rather than an inverse
//! operation per command.

use common::Sku;

use crate::aggregate::Checkpoint;
use crate::command::Command;

use super::{Cart, CartError, CartSnapshot, Money, SharedCart};

/// Command to add units of a SKU to the cart.
#[derive(Debug)]
pub struct AddItem {
    checkpoint: Checkpoint<Cart>,

    /// The SKU to add.
    pub sku: Sku,

    /// Units to add.
    pub quantity: u32,

    /// Price per unit, used only if the SKU is new to the cart.
    pub unit_price: Money,
}

impl AddItem {
    /// Creates a new AddItem command.
    pub fn new(cart: &SharedCart, sku: impl Into<Sku>, quantity: u32, unit_price: Money) -> Self {
        Self {
            checkpoint: Checkpoint::new(cart),
            sku: sku.into(),
            quantity,
            unit_price,
        }
    }

    /// Returns the state captured before the latest execution.
    pub fn before(&self) -> Option<&CartSnapshot> {
        self.checkpoint.before()
    }
}

impl Command for AddItem {
    type Error = CartError;

    fn execute(&mut self) -> Result<(), CartError> {
        self.checkpoint
            .capture()
            .add_item(&self.sku, self.quantity, self.unit_price)
    }

    fn undo(&mut self) {
        self.checkpoint.rollback();
    }

    fn name(&self) -> String {
        format!("AddItem({} ×{})", self.sku, self.quantity)
    }
}

/// Command to remove units of a SKU from the cart.
#[derive(Debug)]
pub struct RemoveItem {
    checkpoint: Checkpoint<Cart>,

    /// The SKU to remove.
    pub sku: Sku,

    /// Units to remove.
    pub quantity: u32,
}

impl RemoveItem {
    /// Creates a new RemoveItem command.
    pub fn new(cart: &SharedCart, sku: impl Into<Sku>, quantity: u32) -> Self {
        Self {
            checkpoint: Checkpoint::new(cart),
            sku: sku.into(),
            quantity,
        }
    }

    /// Returns the state captured before the latest execution.
    pub fn before(&self) -> Option<&CartSnapshot> {
        self.checkpoint.before()
    }
}

impl Command for RemoveItem {
    type Error = CartError;

    fn execute(&mut self) -> Result<(), CartError> {
        self.checkpoint
            .capture()
            .remove_item(&self.sku, self.quantity)
    }

    fn undo(&mut self) {
        self.checkpoint.rollback();
    }

    fn name(&self) -> String {
        format!("RemoveItem({} ×{})", self.sku, self.quantity)
    }
}

/// Command to apply a percentage coupon to the cart.
#[derive(Debug)]
pub struct ApplyCoupon {
    checkpoint: Checkpoint<Cart>,

    /// Discount in percent.
    pub percent: u8,
}

impl ApplyCoupon {
    /// Creates a new ApplyCoupon command.
    pub fn new(cart: &SharedCart, percent: u8) -> Self {
        Self {
            checkpoint: Checkpoint::new(cart),
            percent,
        }
    }

    /// Returns the state captured before the latest execution.
    pub fn before(&self) -> Option<&CartSnapshot> {
        self.checkpoint.before()
    }
}

impl Command for ApplyCoupon {
    type Error = CartError;

    fn execute(&mut self) -> Result<(), CartError> {
        self.checkpoint.capture().apply_coupon(self.percent)
    }

    fn undo(&mut self) {
        self.checkpoint.rollback();
    }

    fn name(&self) -> String {
        format!("ApplyCoupon({}%)", self.percent)
    }
}

/// Any command that targets a cart.
#[derive(Debug)]
pub enum CartCommand {
    /// See [`AddItem`].
    AddItem(AddItem),

    /// See [`RemoveItem`].
    RemoveItem(RemoveItem),

    /// See [`ApplyCoupon`].
    ApplyCoupon(ApplyCoupon),
}

impl CartCommand {
    /// Returns the state captured before the latest execution.
    pub fn before(&self) -> Option<&CartSnapshot> {
        match self {
            CartCommand::AddItem(cmd) => cmd.before(),
            CartCommand::RemoveItem(cmd) => cmd.before(),
            CartCommand::ApplyCoupon(cmd) => cmd.before(),
        }
    }
}

impl Command for CartCommand {
    type Error = CartError;

    fn execute(&mut self) -> Result<(), CartError> {
        match self {
            CartCommand::AddItem(cmd) => cmd.execute(),
            CartCommand::RemoveItem(cmd) => cmd.execute(),
            CartCommand::ApplyCoupon(cmd) => cmd.execute(),
        }
    }

    fn undo(&mut self) {
        match self {
            CartCommand::AddItem(cmd) => cmd.undo(),
            CartCommand::RemoveItem(cmd) => cmd.undo(),
            CartCommand::ApplyCoupon(cmd) => cmd.undo(),
        }
    }

    fn name(&self) -> String {
        match self {
            CartCommand::AddItem(cmd) => cmd.name(),
            CartCommand::RemoveItem(cmd) => cmd.name(),
            CartCommand::ApplyCoupon(cmd) => cmd.name(),
        }
    }
}

impl From<AddItem> for CartCommand {
    fn from(cmd: AddItem) -> Self {
        CartCommand::AddItem(cmd)
    }
}

impl From<RemoveItem> for CartCommand {
    fn from(cmd: RemoveItem) -> Self {
        CartCommand::RemoveItem(cmd)
    }
}

impl From<ApplyCoupon> for CartCommand {
    fn from(cmd: ApplyCoupon) -> Self {
        CartCommand::ApplyCoupon(cmd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shared_cart() -> SharedCart {
        Cart::new().into_shared()
    }

    #[test]
    fn test_names() {
        let cart = shared_cart();

        assert_eq!(
            AddItem::new(&cart, "BK-001", 2, Money::from_minor(1299)).name(),
            "AddItem(BK-001 ×2)"
        );
        assert_eq!(
            RemoveItem::new(&cart, "BK-001", 1).name(),
            "RemoveItem(BK-001 ×1)"
        );
        assert_eq!(ApplyCoupon::new(&cart, 10).name(), "ApplyCoupon(10%)");
    }

    #[test]
    fn test_execute_captures_state_before_mutation() {
        let cart = shared_cart();
        let mut cmd = AddItem::new(&cart, "A", 2, Money::from_minor(100));
        assert!(cmd.before().is_none());

        cmd.execute().unwrap();

        let before = cmd.before().unwrap();
        assert!(before.items().is_empty());
        assert_eq!(cart.borrow().total().minor_units(), 200);
    }

    #[test]
    fn test_undo_restores_prior_snapshot() {
        let cart = shared_cart();
        AddItem::new(&cart, "A", 3, Money::from_minor(100))
            .execute()
            .unwrap();

        let mut cmd = RemoveItem::new(&cart, "A", 3);
        cmd.execute().unwrap();
        assert!(cart.borrow().is_empty());

        cmd.undo();
        assert_eq!(cart.borrow().total().minor_units(), 300);
    }

    #[test]
    fn test_undo_before_execute_is_noop() {
        let cart = shared_cart();
        cart.borrow_mut().apply_coupon(15).unwrap();

        let mut cmd = ApplyCoupon::new(&cart, 50);
        cmd.undo();

        assert_eq!(cart.borrow().discount_percent(), Some(15));
    }

    #[test]
    fn test_failed_execute_still_captures_and_leaves_cart_unchanged() {
        let cart = shared_cart();
        let mut cmd = RemoveItem::new(&cart, "missing", 1);

        let result = cmd.execute();

        assert_eq!(
            result,
            Err(CartError::ItemNotFound {
                sku: "missing".into()
            })
        );
        assert!(cmd.before().is_some());
        assert!(cart.borrow().is_empty());
    }

    #[test]
    fn test_re_execute_recaptures_against_current_state() {
        let cart = shared_cart();
        let mut cmd = ApplyCoupon::new(&cart, 10);

        cmd.execute().unwrap();
        assert_eq!(cmd.before().unwrap().discount_percent(), None);

        cart.borrow_mut().apply_coupon(30).unwrap();
        cmd.execute().unwrap();
        assert_eq!(cmd.before().unwrap().discount_percent(), Some(30));

        cmd.undo();
        assert_eq!(cart.borrow().discount_percent(), Some(30));
    }

    #[test]
    fn test_cart_command_delegates() {
        let cart = shared_cart();
        let mut cmd: CartCommand = AddItem::new(&cart, "A", 1, Money::from_minor(500)).into();

        assert_eq!(cmd.name(), "AddItem(A ×1)");
        cmd.execute().unwrap();
        assert!(cmd.before().is_some());
        cmd.undo();
        assert!(cart.borrow().is_empty());
    }

    #[test]
    fn test_construction_does_not_validate() {
        let cart = shared_cart();
        let mut cmd = AddItem::new(&cart, "A", 0, Money::from_minor(100));

        assert_eq!(
            cmd.execute(),
            Err(CartError::InvalidQuantity { quantity: 0 })
        );
    }
}
