// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Userdir API Layer
//!
//! High-level interface that ties the form, the local list, and the remote
//! directory together.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use userdir_core::api::{DirectoryConfig, DirectorySyncController, EventDispatcher};
//! use userdir_core::client::HttpDirectoryClient;
//!
//! let client = HttpDirectoryClient::new(&DirectoryConfig::default())?;
//! let mut controller = DirectorySyncController::new(client, Arc::new(EventDispatcher::new()));
//!
//! controller.load()?;
//! println!("{} users", controller.len());
//! ```
//!
//! # Module Structure
//!
//! - [`error`] - Error types for the API layer
//! - [`config`] - Configuration types
//! - [`events`] - Rendering callbacks and status messages
//! - [`sync_controller`] - Optimistic CRUD against the remote directory

pub mod config;
pub mod error;
pub mod events;
pub mod sync_controller;

// Error types
pub use error::{DirectoryError, DirectoryResult};

// Configuration
pub use config::DirectoryConfig;

// Events
pub use events::{CallbackHandler, DirectoryEvent, EventDispatcher, EventHandler, StatusMessage};

// Sync Controller
pub use sync_controller::{DirectorySyncController, SubmitOutcome, SyncOutcome};
