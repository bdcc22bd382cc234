// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Event System
//!
//! Rendering callbacks. The controller never draws anything itself; it emits
//! events and the front end decides how to show them.

use std::fmt;
use std::sync::Arc;

use super::sync_controller::SyncOutcome;
use crate::user::{User, UserId};
use crate::validation::FormErrors;

/// User-facing status line shown after an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusMessage {
    /// Initial or full reload succeeded.
    Loaded { count: usize },
    /// Initial or full reload failed; the list is empty.
    LoadFailed,
    Added(SyncOutcome),
    Updated(SyncOutcome),
    Deleted(SyncOutcome),
}

impl StatusMessage {
    /// Returns true for messages that report a remote failure.
    pub fn is_error(&self) -> bool {
        match self {
            StatusMessage::Loaded { .. } => false,
            StatusMessage::LoadFailed => true,
            StatusMessage::Added(outcome)
            | StatusMessage::Updated(outcome)
            | StatusMessage::Deleted(outcome) => *outcome == SyncOutcome::LocalOnly,
        }
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use SyncOutcome::{LocalOnly, Synced};

        match self {
            StatusMessage::Loaded { count: 1 } => f.write_str("Loaded 1 user"),
            StatusMessage::Loaded { count } => write!(f, "Loaded {} users", count),
            StatusMessage::LoadFailed => f.write_str("Failed to load users"),
            StatusMessage::Added(Synced) => f.write_str("User added successfully"),
            StatusMessage::Added(LocalOnly) => f.write_str("User added locally (API failed)"),
            StatusMessage::Updated(Synced) => f.write_str("User updated successfully"),
            StatusMessage::Updated(LocalOnly) => {
                f.write_str("User updated locally (API failed)")
            }
            StatusMessage::Deleted(Synced) => f.write_str("User deleted successfully"),
            StatusMessage::Deleted(LocalOnly) => {
                f.write_str("User deleted locally (API failed)")
            }
        }
    }
}

/// Events emitted by the directory controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryEvent {
    /// The list changed; redraw it from scratch.
    UsersRendered {
        /// Full list in display order.
        users: Vec<User>,
    },

    /// Show a transient status message.
    Status {
        /// The message to show.
        message: StatusMessage,
    },

    /// Submission was blocked; write every slot into the form.
    ValidationFailed {
        /// All five slots, empty ones included.
        errors: FormErrors,
    },

    /// The form switched between add and edit mode.
    FormChanged {
        /// Id being edited, `None` in add mode.
        editing: Option<UserId>,
        /// Submit button label.
        submit_label: &'static str,
    },
}

/// Event handler trait.
///
/// Implement this trait to render directory state.
pub trait EventHandler: Send + Sync {
    /// Called when an event occurs.
    fn on_event(&self, event: DirectoryEvent);
}

/// Simple callback-based event handler.
///
/// Wraps a closure for easy event handling.
pub struct CallbackHandler<F>
where
    F: Fn(DirectoryEvent) + Send + Sync,
{
    callback: F,
}

impl<F> CallbackHandler<F>
where
    F: Fn(DirectoryEvent) + Send + Sync,
{
    /// Creates a new callback handler.
    pub fn new(callback: F) -> Self {
        CallbackHandler { callback }
    }
}

impl<F> EventHandler for CallbackHandler<F>
where
    F: Fn(DirectoryEvent) + Send + Sync,
{
    fn on_event(&self, event: DirectoryEvent) {
        (self.callback)(event);
    }
}

/// Event dispatcher for managing multiple handlers.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn EventHandler>>,
}

impl EventDispatcher {
    /// Creates a new event dispatcher.
    pub fn new() -> Self {
        EventDispatcher {
            handlers: Vec::new(),
        }
    }

    /// Creates a dispatcher with a single handler.
    pub fn with_handler(handler: Arc<dyn EventHandler>) -> Self {
        EventDispatcher {
            handlers: vec![handler],
        }
    }

    /// Adds an event handler.
    pub fn add_handler(&mut self, handler: Arc<dyn EventHandler>) {
        self.handlers.push(handler);
    }

    /// Removes all handlers.
    pub fn clear_handlers(&mut self) {
        self.handlers.clear();
    }

    /// Returns the number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Dispatches an event to all handlers.
    pub fn dispatch(&self, event: DirectoryEvent) {
        for handler in &self.handlers {
            handler.on_event(event.clone());
        }
    }
}
