//! Reversible command contract.

/// Trait for reversible operations driven by a [`History`](crate::History).
///
/// A command binds its target and arguments at construction and performs no
/// validation there; validation happens when it executes. The history only
/// ever talks to a command through this trait.
pub trait Command {
    /// Error raised when execution is rejected.
    type Error: std::error::Error;

    /// Runs the forward operation.
    ///
    /// May be called again after [`undo`](Command::undo) when the command is
    /// redone. A rejected execution must leave the target unchanged.
    fn execute(&mut self) -> Result<(), Self::Error>;

    /// Reverts the most recent successful execution.
    ///
    /// Does nothing if the command was never executed. Never fails.
    fn undo(&mut self);

    /// Stable, human-readable label used in logs and notifications.
    fn name(&self) -> String;
}

impl<C: Command + ?Sized> Command for Box<C> {
    type Error = C::Error;

    fn execute(&mut self) -> Result<(), Self::Error> {
        (**self).execute()
    }

    fn undo(&mut self) {
        (**self).undo();
    }

    fn name(&self) -> String {
        (**self).name()
    }
}
