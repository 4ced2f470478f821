//! Domain layer for the cart command ledger.
//!
//! This crate provides the core abstractions including:
//! - Aggregate trait with snapshot/restore, and the `Checkpoint` commands use to undo
//! - Command trait for reversible operations
//! - History manager keeping undo/redo stacks with branch invalidation
//! - Cart aggregate, its commands, and a session wiring cart and history together

pub mod aggregate;
pub mod cart;
pub mod command;
pub mod events;
pub mod history;

pub use aggregate::{Aggregate, Checkpoint};
pub use cart::{
    AddItem, ApplyCoupon, Cart, CartCommand, CartError, CartSession, CartSnapshot, ErrorKind,
    LineItem, Money, RemoveItem, SharedCart,
};
pub use command::Command;
pub use common::{CartId, Sku};
pub use events::{HistoryAction, HistoryEvent};
pub use history::History;
