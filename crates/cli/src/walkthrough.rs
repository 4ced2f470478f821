//! Scripted cart session printed step by step.

use std::io::Write;

use domain::{CartSession, Money};

use crate::error::CliError;

/// One step of a scripted session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Perform an add-item command.
    Add {
        sku: &'static str,
        quantity: u32,
        unit_price: i64,
    },

    /// Perform a remove-item command.
    Remove { sku: &'static str, quantity: u32 },

    /// Perform an apply-coupon command.
    Coupon(u8),

    /// Undo the most recent command.
    Undo,

    /// Redo the most recently undone command.
    Redo,

    /// Print the cart followed by a blank line.
    Show,
}

/// The default walkthrough: two items, a coupon that gets undone, a removal
/// that invalidates the redo branch, and a final undo of the removal.
pub const WALKTHROUGH: &[Step] = &[
    Step::Add {
        sku: "BK-001",
        quantity: 2,
        unit_price: 1299,
    },
    Step::Add {
        sku: "USB-16G",
        quantity: 1,
        unit_price: 799,
    },
    Step::Coupon(10),
    Step::Show,
    Step::Undo,
    Step::Show,
    Step::Remove {
        sku: "BK-001",
        quantity: 1,
    },
    Step::Show,
    Step::Redo,
    Step::Undo,
    Step::Show,
];

/// Summary of a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub total: Money,
    pub undo_depth: usize,
    pub redo_depth: usize,
}

/// Runs the steps against the session, writing every `Show` to `out`.
///
/// A rejected command stops the run with [`CliError::Cart`]. Undo and redo
/// with nothing to do are logged and skipped.
pub fn run(
    session: &mut CartSession,
    steps: &[Step],
    out: &mut impl Write,
) -> Result<Report, CliError> {
    for step in steps {
        match *step {
            Step::Add {
                sku,
                quantity,
                unit_price,
            } => {
                session.add_item(sku, quantity, Money::from_minor(unit_price))?;
            }
            Step::Remove { sku, quantity } => {
                session.remove_item(sku, quantity)?;
            }
            Step::Coupon(percent) => {
                session.apply_coupon(percent)?;
            }
            Step::Undo => {
                if session.undo().is_none() {
                    tracing::info!("nothing to undo");
                }
            }
            Step::Redo => {
                if session.redo().is_none() {
                    tracing::info!("nothing to redo");
                }
            }
            Step::Show => {
                writeln!(out, "{}\n", session.describe())?;
            }
        }
    }

    Ok(Report {
        total: session.total(),
        undo_depth: session.history().undo_len(),
        redo_depth: session.history().redo_len(),
    })
}
