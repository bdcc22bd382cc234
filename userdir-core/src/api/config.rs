// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration for the directory API connection

use url::Url;

use super::error::{DirectoryError, DirectoryResult};

/// Default collection URL of the public demo API.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com/users";

/// Configuration for the directory client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryConfig {
    /// Collection URL; users live at `{base_url}/{id}`
    pub base_url: String,

    /// User-Agent header sent with every request
    pub user_agent: String,

    /// Proxy URL applied to all requests
    pub proxy_url: Option<String>,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: format!(
                "userdir/{}",
                option_env!("CARGO_PKG_VERSION").unwrap_or("0.1.0")
            ),
            proxy_url: None,
        }
    }
}

impl DirectoryConfig {
    /// Configure with a custom collection URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Configure with custom proxy
    pub fn with_proxy(mut self, proxy_url: impl Into<String>) -> Self {
        self.proxy_url = Some(proxy_url.into());
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Parses the base URL.
    pub fn parsed_base_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.base_url)
    }

    /// Checks that the base URL is an absolute http(s) URL.
    pub fn validate(&self) -> DirectoryResult<()> {
        let url = self
            .parsed_base_url()
            .map_err(|e| DirectoryError::Configuration(format!("{}: {}", self.base_url, e)))?;
        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(DirectoryError::Configuration(format!(
                "unsupported scheme '{}' in {}",
                other, self.base_url
            ))),
        }
    }
}
