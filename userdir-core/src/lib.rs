// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Userdir Core Library
//!
//! Validated CRUD against a remote user-directory REST API.
//! Every mutation is applied to the local list even when the remote call
//! fails, so the directory stays usable offline.

pub mod api;
pub mod client;
pub mod form;
pub mod store;
pub mod user;
pub mod validation;

pub use api::{
    CallbackHandler, DirectoryConfig, DirectoryError, DirectoryEvent, DirectoryResult,
    DirectorySyncController, EventDispatcher, EventHandler, StatusMessage, SubmitOutcome,
    SyncOutcome,
};
pub use client::{
    ClientError, ClientResult, DirectoryClient, HttpDirectoryClient, MockCall,
    MockDirectoryClient, MockMode,
};
pub use form::{UserForm, ADD_LABEL, UPDATE_LABEL};
pub use store::{MemoryUserStore, UserStore};
pub use user::{User, UserData, UserId};
pub use validation::{
    validate_email, validate_form, validate_name, validate_phone, validate_username,
    validate_website, Field, FormErrors,
};
