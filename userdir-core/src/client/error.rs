// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Client Error Types

use thiserror::Error;

/// Errors raised by a [`super::DirectoryClient`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The request never completed (DNS, connect, TLS, reset).
    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    #[error("HTTP error: {0}")]
    HttpStatus(u16),

    /// The response body was not the expected JSON.
    #[error("decode error: {0}")]
    Decode(String),

    /// The configured base URL is unusable.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ClientError::HttpStatus(status.as_u16())
        } else {
            ClientError::Transport(err.to_string())
        }
    }
}

/// Result type for client calls.
pub type ClientResult<T> = Result<T, ClientError>;
