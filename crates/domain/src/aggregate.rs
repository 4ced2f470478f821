//! Core aggregate trait and the snapshot checkpoint shared by commands.

use std::cell::{RefCell, RefMut};
use std::fmt::{Debug, Display};
use std::rc::Rc;

/// Trait for aggregates whose state can be captured and restored wholesale.
///
/// An aggregate is a cluster of domain objects treated as a single unit.
/// Undo is implemented by restoring a snapshot taken before a mutation, so an
/// aggregate only has to know how to copy its state out and back in:
/// - `snapshot` must be a pure deep copy with no side effects
/// - `restore` must fully replace the current state, never merge
/// - identity (`id`) is not part of the snapshot and survives a restore
pub trait Aggregate: Debug {
    /// Identifier type used for log and metric correlation.
    type Id: Display + Copy;

    /// Immutable point-in-time copy of the aggregate's state.
    type Snapshot: Clone + Debug;

    /// Returns the aggregate type name.
    fn aggregate_type() -> &'static str;

    /// Returns the aggregate's identifier.
    fn id(&self) -> Self::Id;

    /// Captures the current state.
    fn snapshot(&self) -> Self::Snapshot;

    /// Replaces the current state with a previously captured snapshot.
    fn restore(&mut self, snapshot: &Self::Snapshot);
}

/// Snapshot slot held by a command against a shared aggregate.
///
/// `capture` records the aggregate's state immediately before a mutation and
/// hands back the mutable borrow to perform it; `rollback` puts that state
/// back. Every capture overwrites the previous one, so a re-executed command
/// always restores to the state observed right before its latest execution.
#[derive(Debug)]
pub struct Checkpoint<A: Aggregate> {
    target: Rc<RefCell<A>>,
    before: Option<A::Snapshot>,
}

impl<A: Aggregate> Checkpoint<A> {
    /// Creates an empty checkpoint bound to the given aggregate.
    pub fn new(target: &Rc<RefCell<A>>) -> Self {
        Self {
            target: Rc::clone(target),
            before: None,
        }
    }

    /// Records the current state and returns the aggregate for mutation.
    pub fn capture(&mut self) -> RefMut<'_, A> {
        let target = self.target.borrow_mut();
        self.before = Some(target.snapshot());
        target
    }

    /// Restores the captured state, if any.
    ///
    /// Returns `false` when nothing was captured yet; the aggregate is left
    /// untouched in that case.
    pub fn rollback(&self) -> bool {
        match &self.before {
            Some(before) => {
                let mut target = self.target.borrow_mut();
                target.restore(before);
                tracing::trace!(
                    aggregate_type = A::aggregate_type(),
                    aggregate_id = %target.id(),
                    "restored snapshot"
                );
                true
            }
            None => false,
        }
    }

    /// Returns the captured snapshot, if any.
    pub fn before(&self) -> Option<&A::Snapshot> {
        self.before.as_ref()
    }

    /// Returns the aggregate this checkpoint is bound to.
    pub fn target(&self) -> &Rc<RefCell<A>> {
        &self.target
    }
}
