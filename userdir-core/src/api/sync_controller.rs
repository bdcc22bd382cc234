// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Directory Sync Controller
//!
//! Applies create, update and delete to the local list whether or not the
//! remote call succeeds.

use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::client::DirectoryClient;
use crate::form::UserForm;
use crate::store::{MemoryUserStore, UserStore};
use crate::user::{User, UserData, UserId};

use super::error::{DirectoryError, DirectoryResult};
use super::events::{DirectoryEvent, EventDispatcher, StatusMessage};

/// Whether a mutation reached the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The remote call succeeded.
    Synced,
    /// The remote call failed; only the local list changed.
    LocalOnly,
}

impl SyncOutcome {
    pub fn is_synced(&self) -> bool {
        *self == SyncOutcome::Synced
    }
}

/// Result of submitting the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent or changed.
    Invalid,
    /// A new user was appended.
    Created(SyncOutcome),
    /// The edited user was replaced.
    Updated(SyncOutcome),
}

/// Owns the directory list and keeps it in step with the remote API.
///
/// The controller coordinates:
/// - Loading the full list
/// - Optimistic create, update and delete
/// - Form submission and edit mode
/// - Re-rendering through the event dispatcher after every operation
pub struct DirectorySyncController<C: DirectoryClient, S: UserStore = MemoryUserStore> {
    client: C,
    store: S,
    events: Arc<EventDispatcher>,
}

impl<C: DirectoryClient> DirectorySyncController<C, MemoryUserStore> {
    /// Creates a controller with an empty in-memory store.
    pub fn new(client: C, events: Arc<EventDispatcher>) -> Self {
        Self::with_store(client, MemoryUserStore::new(), events)
    }
}

impl<C: DirectoryClient, S: UserStore> DirectorySyncController<C, S> {
    /// Creates a controller over an injected store.
    pub fn with_store(client: C, store: S, events: Arc<EventDispatcher>) -> Self {
        DirectorySyncController {
            client,
            store,
            events,
        }
    }

    /// Replaces the local list with the server's.
    ///
    /// On failure the list is emptied, an error status is shown, and the
    /// error is returned.
    pub fn load(&mut self) -> DirectoryResult<usize> {
        match self.client.list() {
            Ok(users) => {
                let count = users.len();
                debug!("Loaded {} users", count);
                self.store.replace_all(users);
                self.render();
                self.report(StatusMessage::Loaded { count });
                Ok(count)
            }
            Err(e) => {
                error!("Error fetching users: {}", e);
                self.store.clear();
                self.render();
                self.report(StatusMessage::LoadFailed);
                Err(DirectoryError::Client(e))
            }
        }
    }

    /// Creates a user remotely and appends it locally.
    ///
    /// If the call fails the user is appended anyway with the next local id.
    pub fn create(&mut self, data: UserData) -> SyncOutcome {
        let outcome = match self.client.create(&data) {
            Ok(mut user) => {
                if self.store.contains(user.id) {
                    let local_id = self.store.next_id();
                    warn!(
                        "Server assigned id {} which is already listed, using {}",
                        user.id, local_id
                    );
                    user.id = local_id;
                }
                self.store.push(user);
                SyncOutcome::Synced
            }
            Err(e) => {
                warn!("Error adding user: {}", e);
                let id = self.store.next_id();
                self.store.push(User::from_data(id, data));
                SyncOutcome::LocalOnly
            }
        };

        self.render();
        self.report(StatusMessage::Added(outcome));
        outcome
    }

    /// Updates a user remotely and replaces the local record with `id`.
    ///
    /// The local record is replaced whatever the server answers.
    pub fn update(&mut self, id: UserId, data: UserData) -> SyncOutcome {
        let outcome = match self.client.update(id, &data) {
            Ok(()) => SyncOutcome::Synced,
            Err(e) => {
                warn!("Error updating user {}: {}", id, e);
                SyncOutcome::LocalOnly
            }
        };

        if !self.store.replace(id, User::from_data(id, data)) {
            debug!("User {} not in local list, nothing replaced", id);
        }

        self.render();
        self.report(StatusMessage::Updated(outcome));
        outcome
    }

    /// Deletes a user remotely and removes it from the local list.
    ///
    /// The local record is removed whatever the server answers.
    pub fn delete(&mut self, id: UserId) -> SyncOutcome {
        let outcome = match self.client.delete(id) {
            Ok(()) => SyncOutcome::Synced,
            Err(e) => {
                warn!("Error deleting user {}: {}", id, e);
                SyncOutcome::LocalOnly
            }
        };

        self.store.remove(id);

        self.render();
        self.report(StatusMessage::Deleted(outcome));
        outcome
    }

    /// Validates the form and creates or updates accordingly.
    ///
    /// Invalid input leaves the list untouched and makes no remote call.
    /// After a mutation the form is reset to add mode.
    pub fn submit(&mut self, form: &mut UserForm) -> SubmitOutcome {
        if !form.validate() {
            self.events.dispatch(DirectoryEvent::ValidationFailed {
                errors: *form.errors(),
            });
            return SubmitOutcome::Invalid;
        }

        let data = form.to_data();
        let outcome = match form.editing() {
            Some(id) => SubmitOutcome::Updated(self.update(id, data)),
            None => SubmitOutcome::Created(self.create(data)),
        };

        form.reset();
        self.form_changed(form);
        outcome
    }

    /// Loads the user with `id` into the form for editing.
    ///
    /// Returns false and leaves the form alone if the id is not listed.
    pub fn edit(&self, id: UserId, form: &mut UserForm) -> bool {
        let Some(user) = self.store.get(id) else {
            return false;
        };
        form.populate(user);
        self.form_changed(form);
        true
    }

    /// Abandons an edit and returns the form to add mode.
    pub fn cancel_edit(&self, form: &mut UserForm) {
        form.reset();
        self.form_changed(form);
    }

    /// The local list in display order.
    pub fn users(&self) -> &[User] {
        self.store.all()
    }

    /// Looks up a listed user.
    pub fn get(&self, id: UserId) -> Option<&User> {
        self.store.get(id)
    }

    /// Looks up a listed user, returning an error if absent.
    pub fn get_required(&self, id: UserId) -> DirectoryResult<&User> {
        self.store.get(id).ok_or(DirectoryError::UserNotFound(id))
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Returns a reference to the underlying client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Returns a mutable reference to the underlying client.
    pub fn client_mut(&mut self) -> &mut C {
        &mut self.client
    }

    /// Returns a reference to the store.
    pub fn store(&self) -> &S {
        &self.store
    }

    fn render(&self) {
        self.events.dispatch(DirectoryEvent::UsersRendered {
            users: self.store.all().to_vec(),
        });
    }

    fn report(&self, message: StatusMessage) {
        self.events.dispatch(DirectoryEvent::Status { message });
    }

    fn form_changed(&self, form: &UserForm) {
        self.events.dispatch(DirectoryEvent::FormChanged {
            editing: form.editing(),
            submit_label: form.submit_label(),
        });
    }
}
