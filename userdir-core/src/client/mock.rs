// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Mock Directory Client
//!
//! In-process stand-in for the remote API with a switchable failure mode.

use super::error::{ClientError, ClientResult};
use super::DirectoryClient;
use crate::user::{User, UserData, UserId};

/// How the mock answers calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MockMode {
    /// Calls succeed against the mock's own user list.
    #[default]
    Online,
    /// Every call fails with a transport error.
    Offline,
    /// Every call gets this HTTP status.
    HttpError(u16),
}

/// A call received by the mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    List,
    Create(UserData),
    Update(UserId, UserData),
    Delete(UserId),
}

/// Scriptable directory server.
#[derive(Debug, Default)]
pub struct MockDirectoryClient {
    mode: MockMode,
    users: Vec<User>,
    assigned_id: Option<UserId>,
    calls: Vec<MockCall>,
}

impl MockDirectoryClient {
    /// Creates an online mock with no users.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an online mock serving `users`.
    pub fn with_users(users: Vec<User>) -> Self {
        MockDirectoryClient {
            users,
            ..Self::default()
        }
    }

    /// Makes every create return this id, the way a fake API that never
    /// persists writes would.
    pub fn with_assigned_id(mut self, id: UserId) -> Self {
        self.assigned_id = Some(id);
        self
    }

    pub fn with_mode(mut self, mode: MockMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn set_mode(&mut self, mode: MockMode) {
        self.mode = mode;
    }

    pub fn mode(&self) -> MockMode {
        self.mode
    }

    /// Server-side list.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Calls received so far, oldest first.
    pub fn calls(&self) -> &[MockCall] {
        &self.calls
    }

    fn check_mode(&self) -> ClientResult<()> {
        match self.mode {
            MockMode::Online => Ok(()),
            MockMode::Offline => Err(ClientError::Transport("mock offline".into())),
            MockMode::HttpError(status) => Err(ClientError::HttpStatus(status)),
        }
    }
}

impl DirectoryClient for MockDirectoryClient {
    fn list(&mut self) -> ClientResult<Vec<User>> {
        self.calls.push(MockCall::List);
        self.check_mode()?;
        Ok(self.users.clone())
    }

    fn create(&mut self, data: &UserData) -> ClientResult<User> {
        self.calls.push(MockCall::Create(data.clone()));
        self.check_mode()?;

        let id = self.assigned_id.unwrap_or_else(|| {
            self.users.iter().map(|u| u.id).max().map_or(1, |max| max + 1)
        });
        let user = User::from_data(id, data.clone());
        self.users.push(user.clone());
        Ok(user)
    }

    fn update(&mut self, id: UserId, data: &UserData) -> ClientResult<()> {
        self.calls.push(MockCall::Update(id, data.clone()));
        self.check_mode()?;

        match self.users.iter_mut().find(|u| u.id == id) {
            Some(slot) => {
                *slot = User::from_data(id, data.clone());
                Ok(())
            }
            None => Err(ClientError::HttpStatus(404)),
        }
    }

    fn delete(&mut self, id: UserId) -> ClientResult<()> {
        self.calls.push(MockCall::Delete(id));
        self.check_mode()?;
        self.users.retain(|u| u.id != id);
        Ok(())
    }
}
