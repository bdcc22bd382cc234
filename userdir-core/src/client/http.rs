// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! HTTP Directory Client
//!
//! REST/JSON client for a user collection rooted at a fixed base URL.

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use tracing::debug;

use super::error::{ClientError, ClientResult};
use super::DirectoryClient;
use crate::api::{DirectoryConfig, DirectoryError};
use crate::user::{User, UserData, UserId};

/// Blocking HTTP client for the directory API.
///
/// Requests carry no timeout and are never retried.
pub struct HttpDirectoryClient {
    client: Client,
    base_url: String,
}

impl HttpDirectoryClient {
    /// Creates a client from config.
    pub fn new(config: &DirectoryConfig) -> ClientResult<Self> {
        config.validate().map_err(|e| match e {
            DirectoryError::Configuration(msg) => ClientError::InvalidUrl(msg),
            other => ClientError::InvalidUrl(other.to_string()),
        })?;

        let mut builder = Client::builder()
            .timeout(None::<Duration>)
            .user_agent(config.user_agent.clone());

        if let Some(proxy_url) = &config.proxy_url {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Collection URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn user_url(&self, id: UserId) -> String {
        format!("{}/{}", self.base_url, id)
    }
}

impl DirectoryClient for HttpDirectoryClient {
    fn list(&mut self) -> ClientResult<Vec<User>> {
        debug!("GET {}", self.base_url);
        let response = check_status(self.client.get(&self.base_url).send()?)?;
        Ok(response.json()?)
    }

    fn create(&mut self, data: &UserData) -> ClientResult<User> {
        debug!("POST {}", self.base_url);
        let response = check_status(self.client.post(&self.base_url).json(data).send()?)?;
        Ok(response.json()?)
    }

    fn update(&mut self, id: UserId, data: &UserData) -> ClientResult<()> {
        let url = self.user_url(id);
        debug!("PUT {}", url);
        let response = self.client.put(&url).json(data).send()?;
        debug!("PUT {} -> {}", url, response.status());
        check_status(response)?;
        Ok(())
    }

    fn delete(&mut self, id: UserId) -> ClientResult<()> {
        let url = self.user_url(id);
        debug!("DELETE {}", url);
        check_status(self.client.delete(&url).send()?)?;
        Ok(())
    }
}

fn check_status(response: Response) -> ClientResult<Response> {
    let status = response.status();
    if !status.is_success() {
        return Err(ClientError::HttpStatus(status.as_u16()));
    }
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_http_scheme() {
        let config = DirectoryConfig::default().with_base_url("ftp://example.com/users");
        let err = HttpDirectoryClient::new(&config).err().unwrap();
        assert!(
            matches!(&err, ClientError::InvalidUrl(msg) if msg.contains("unsupported scheme 'ftp'"))
        );
    }

    #[test]
    fn test_rejects_unparseable_url() {
        let config = DirectoryConfig::default().with_base_url("not a url");
        let result = HttpDirectoryClient::new(&config);
        assert!(matches!(result, Err(ClientError::InvalidUrl(_))));
    }

    #[test]
    fn test_user_url_strips_trailing_slash() {
        let config = DirectoryConfig::default().with_base_url("http://127.0.0.1:9/users/");
        let client = HttpDirectoryClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:9/users");
        assert_eq!(client.user_url(4), "http://127.0.0.1:9/users/4");
    }
}
