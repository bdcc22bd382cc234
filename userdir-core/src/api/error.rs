// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! API Error Types
//!
//! Unified error type for the directory API layer.

use thiserror::Error;

use crate::client::ClientError;
use crate::user::UserId;

/// Unified error type for directory operations.
///
/// Create, update and delete never fail: remote errors there are absorbed by
/// the local fallback. Only loading and configuration surface errors.
#[derive(Error, Debug)]
pub enum DirectoryError {
    /// Remote call failed.
    #[error("client error: {0}")]
    Client(#[from] ClientError),

    /// User not found in the local list.
    #[error("user not found: {0}")]
    UserNotFound(UserId),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Configuration(String),
}

/// Result type for directory operations.
pub type DirectoryResult<T> = Result<T, DirectoryError>;
