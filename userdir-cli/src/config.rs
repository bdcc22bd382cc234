// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI Configuration

use std::sync::Arc;

use anyhow::{Context, Result};
use userdir_core::{
    DirectoryClient, DirectoryConfig, DirectorySyncController, EventDispatcher,
    HttpDirectoryClient, MockDirectoryClient, MockMode,
};

use crate::display::TerminalRenderer;

/// Controller type used by every command.
pub type Controller = DirectorySyncController<Box<dyn DirectoryClient>>;

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// User collection URL.
    pub api_url: String,
    /// Optional proxy URL.
    pub proxy: Option<String>,
    /// Never touch the network.
    pub offline: bool,
}

impl CliConfig {
    /// Directory client configuration derived from the flags.
    pub fn directory_config(&self) -> DirectoryConfig {
        let config = DirectoryConfig::default().with_base_url(&self.api_url);
        match &self.proxy {
            Some(proxy) => config.with_proxy(proxy),
            None => config,
        }
    }

    /// Builds the client: HTTP normally, an always-failing mock when offline.
    pub fn client(&self) -> Result<Box<dyn DirectoryClient>> {
        if self.offline {
            return Ok(Box::new(
                MockDirectoryClient::new().with_mode(MockMode::Offline),
            ));
        }

        let config = self.directory_config();
        config.validate()?;
        let client = HttpDirectoryClient::new(&config)
            .with_context(|| format!("Failed to create client for {}", config.base_url))?;
        Ok(Box::new(client))
    }

    /// Opens a controller wired to a terminal renderer.
    pub fn open(&self) -> Result<(Controller, Arc<TerminalRenderer>)> {
        let renderer = Arc::new(TerminalRenderer::new());
        let events = Arc::new(EventDispatcher::with_handler(renderer.clone()));
        Ok((Controller::new(self.client()?, events), renderer))
    }
}
