// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Directory Client
//!
//! Transport seam between the sync controller and the remote user API.
//!
//! # Architecture
//!
//! - **DirectoryClient trait**: one blocking call per user action
//! - **HttpDirectoryClient**: `reqwest` implementation against a REST base URL
//! - **MockDirectoryClient**: scriptable in-process server for tests and offline use
//!
//! # Example
//!
//! ```ignore
//! use userdir_core::client::{DirectoryClient, MockDirectoryClient, MockMode};
//!
//! let mut client = MockDirectoryClient::new();
//! client.set_mode(MockMode::Offline);
//! assert!(client.list().is_err());
//! ```

mod error;
mod http;
mod mock;

pub use error::{ClientError, ClientResult};
pub use http::HttpDirectoryClient;
pub use mock::{MockCall, MockDirectoryClient, MockMode};

use crate::user::{User, UserData, UserId};

/// Remote user-directory API.
///
/// Any non-2xx response is reported as [`ClientError::HttpStatus`], so callers
/// see HTTP failures and transport failures through the same `Err` path.
pub trait DirectoryClient: Send {
    /// `GET /`: fetches the full list.
    fn list(&mut self) -> ClientResult<Vec<User>>;

    /// `POST /`: creates a user and returns the server's record.
    fn create(&mut self, data: &UserData) -> ClientResult<User>;

    /// `PUT /{id}`: replaces a user.
    fn update(&mut self, id: UserId, data: &UserData) -> ClientResult<()>;

    /// `DELETE /{id}`: removes a user.
    fn delete(&mut self, id: UserId) -> ClientResult<()>;
}

impl<T: DirectoryClient + ?Sized> DirectoryClient for Box<T> {
    fn list(&mut self) -> ClientResult<Vec<User>> {
        (**self).list()
    }

    fn create(&mut self, data: &UserData) -> ClientResult<User> {
        (**self).create(data)
    }

    fn update(&mut self, id: UserId, data: &UserData) -> ClientResult<()> {
        (**self).update(id, data)
    }

    fn delete(&mut self, id: UserId) -> ClientResult<()> {
        (**self).delete(id)
    }
}
