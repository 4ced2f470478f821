//! Undo/redo history over reversible commands.

use crate::command::Command;
use crate::events::{HistoryAction, HistoryEvent};

type Listener = Box<dyn FnMut(&HistoryEvent)>;

/// Invoker that performs commands and keeps their undo/redo history.
///
/// The history owns two stacks, most recent last:
/// ```text
///            perform(C)                      undo()
///   undo: [A, B] ──────► [A, B, C]   undo: [A, B, C] ──────► [A, B]
///   redo: [X]    ──────► []          redo: []        ──────► [C]
/// ```
/// Performing a new command always discards the redo stack, and a command
/// lives in exactly one of the two stacks. Undo and redo on an empty stack
/// are silent no-ops. Stacks grow without bound.
///
/// Every successful perform/undo/redo emits exactly one [`HistoryEvent`]:
/// it is logged, counted in `cart_history_actions_total`, passed to each
/// subscribed listener, and returned to the caller.
pub struct History<C: Command> {
    undo_stack: Vec<C>,
    redo_stack: Vec<C>,
    listeners: Vec<Listener>,
}

impl<C: Command> History<C> {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            listeners: Vec::new(),
        }
    }

    /// Registers a listener called for every emitted event.
    pub fn subscribe(&mut self, listener: impl FnMut(&HistoryEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Executes a command and records it for undo.
    ///
    /// On error the command is dropped, both stacks are left untouched and
    /// the error is returned as raised by the command.
    pub fn perform(&mut self, mut command: C) -> Result<HistoryEvent, C::Error> {
        let name = command.name();

        if let Err(error) = command.execute() {
            tracing::debug!(command = %name, %error, "command rejected");
            return Err(error);
        }

        self.undo_stack.push(command);
        self.redo_stack.clear();

        Ok(self.notify(HistoryAction::Done, name))
    }

    /// Reverts the most recent command.
    ///
    /// Returns `None` without doing anything when there is nothing to undo.
    pub fn undo(&mut self) -> Option<HistoryEvent> {
        let mut command = self.undo_stack.pop()?;
        command.undo();

        let name = command.name();
        self.redo_stack.push(command);

        Some(self.notify(HistoryAction::Undone, name))
    }

    /// Re-executes the most recently undone command.
    ///
    /// Returns `None` without doing anything when there is nothing to redo.
    /// If re-execution is rejected (the target was changed outside this
    /// history) the command stays on the redo stack and `None` is returned.
    pub fn redo(&mut self) -> Option<HistoryEvent> {
        let mut command = self.redo_stack.pop()?;
        let name = command.name();

        if let Err(error) = command.execute() {
            tracing::warn!(command = %name, %error, "redo rejected, command kept on redo stack");
            self.redo_stack.push(command);
            return None;
        }

        self.undo_stack.push(command);

        Some(self.notify(HistoryAction::Redone, name))
    }

    /// Returns true if there is a command to undo.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Returns true if there is a command to redo.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Returns the number of undoable commands.
    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    /// Returns the number of redoable commands.
    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// Returns the command the next `undo` would revert.
    pub fn peek_undo(&self) -> Option<&C> {
        self.undo_stack.last()
    }

    /// Returns the command the next `redo` would execute.
    pub fn peek_redo(&self) -> Option<&C> {
        self.redo_stack.last()
    }

    /// Labels of undoable commands, most recent first.
    pub fn undo_names(&self) -> Vec<String> {
        self.undo_stack.iter().rev().map(Command::name).collect()
    }

    /// Labels of redoable commands, most recent first.
    pub fn redo_names(&self) -> Vec<String> {
        self.redo_stack.iter().rev().map(Command::name).collect()
    }

    /// Drops both stacks. The target is not touched and no event is emitted.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    fn notify(&mut self, action: HistoryAction, name: String) -> HistoryEvent {
        let event = HistoryEvent::new(action, name);

        tracing::info!(
            action = action.as_str(),
            command = %event.command,
            undo_depth = self.undo_stack.len(),
            redo_depth = self.redo_stack.len(),
            "{event}"
        );
        metrics::counter!("cart_history_actions_total", "action" => action.as_str()).increment(1);

        for listener in &mut self.listeners {
            listener(&event);
        }

        event
    }
}

impl<C: Command> Default for History<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Command> std::fmt::Debug for History<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("History")
            .field("undo", &self.undo_names())
            .field("redo", &self.redo_names())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
