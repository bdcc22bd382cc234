// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! User Store
//!
//! Ordered, in-memory list of user records owned by the sync controller.

use crate::user::{User, UserId};

/// Storage for the directory list.
///
/// Order follows fetch and insertion order.
pub trait UserStore: Send {
    /// All records in list order.
    fn all(&self) -> &[User];

    /// Replaces the whole list.
    fn replace_all(&mut self, users: Vec<User>);

    /// Appends a record.
    fn push(&mut self, user: User);

    /// Replaces the first record with `id` in place. Returns false if none matched.
    fn replace(&mut self, id: UserId, user: User) -> bool;

    /// Removes every record with `id`. Returns false if none matched.
    fn remove(&mut self, id: UserId) -> bool;

    /// Looks up a record by id.
    fn get(&self, id: UserId) -> Option<&User> {
        self.all().iter().find(|u| u.id == id)
    }

    /// Returns true if a record with `id` exists.
    fn contains(&self, id: UserId) -> bool {
        self.get(id).is_some()
    }

    /// Next local id: the largest existing id plus one, or 1 for an empty list.
    ///
    /// If the largest id is `UserId::MAX` the smallest unused id is returned.
    fn next_id(&self) -> UserId {
        match self.all().iter().map(|u| u.id).max() {
            None => 1,
            Some(max) => max.checked_add(1).unwrap_or_else(|| lowest_free_id(self.all())),
        }
    }

    fn len(&self) -> usize {
        self.all().len()
    }

    fn is_empty(&self) -> bool {
        self.all().is_empty()
    }

    fn clear(&mut self) {
        self.replace_all(Vec::new());
    }
}

fn lowest_free_id(users: &[User]) -> UserId {
    let mut ids: Vec<UserId> = users.iter().map(|u| u.id).collect();
    ids.sort_unstable();
    ids.dedup();

    let mut candidate: UserId = 1;
    for id in ids {
        if id > candidate {
            break;
        }
        if id == candidate {
            candidate = candidate.saturating_add(1);
        }
    }
    candidate
}

/// `Vec`-backed store.
#[derive(Debug, Clone, Default)]
pub struct MemoryUserStore {
    users: Vec<User>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-filled with `users`.
    pub fn with_users(users: Vec<User>) -> Self {
        MemoryUserStore { users }
    }
}

impl UserStore for MemoryUserStore {
    fn all(&self) -> &[User] {
        &self.users
    }

    fn replace_all(&mut self, users: Vec<User>) {
        self.users = users;
    }

    fn push(&mut self, user: User) {
        self.users.push(user);
    }

    fn replace(&mut self, id: UserId, user: User) -> bool {
        match self.users.iter_mut().find(|u| u.id == id) {
            Some(slot) => {
                *slot = user;
                true
            }
            None => false,
        }
    }

    fn remove(&mut self, id: UserId) -> bool {
        let before = self.users.len();
        self.users.retain(|u| u.id != id);
        self.users.len() != before
    }
}
