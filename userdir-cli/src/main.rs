// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Userdir CLI
//!
//! Command-line interface for a remote user directory.

mod commands;
mod config;
mod display;

use std::io;

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use tracing_subscriber::EnvFilter;

use config::CliConfig;
use userdir_core::api::config::DEFAULT_BASE_URL;
use userdir_core::UserId;

#[derive(Parser)]
#[command(name = "userdir")]
#[command(version, about = "Manage a remote user directory")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// User collection URL
    #[arg(
        long,
        global = true,
        env = "USERDIR_API_URL",
        default_value = DEFAULT_BASE_URL
    )]
    api_url: String,

    /// Proxy for API requests
    #[arg(long, global = true, env = "USERDIR_PROXY")]
    proxy: Option<String>,

    /// Skip the network; every change stays local
    #[arg(long, global = true)]
    offline: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List all users
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Add a user
    Add(AddArgs),

    /// Edit a user
    Update {
        /// User ID
        id: UserId,

        #[command(flatten)]
        fields: UpdateArgs,
    },

    /// Delete a user
    Delete {
        /// User ID
        id: UserId,
    },

    /// Interactive form session
    Shell,

    /// Generate shell completions
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args)]
struct AddArgs {
    /// Full name
    #[arg(long, default_value = "")]
    name: String,

    /// Username (letters, numbers, underscores)
    #[arg(long, default_value = "")]
    username: String,

    /// Email address
    #[arg(long, default_value = "")]
    email: String,

    /// Phone number
    #[arg(long, default_value = "")]
    phone: String,

    /// Website (http or https)
    #[arg(long, default_value = "")]
    website: String,
}

#[derive(Args)]
struct UpdateArgs {
    /// New full name
    #[arg(long)]
    name: Option<String>,

    /// New username
    #[arg(long)]
    username: Option<String>,

    /// New email address
    #[arg(long)]
    email: Option<String>,

    /// New phone number ("" clears it)
    #[arg(long)]
    phone: Option<String>,

    /// New website ("" clears it)
    #[arg(long)]
    website: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("userdir=info".parse()?)
                .add_directive("userdir_core=warn".parse()?),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = CliConfig {
        api_url: cli.api_url,
        proxy: cli.proxy,
        offline: cli.offline,
    };

    match cli.command {
        Commands::List { json } => commands::users::list(&config, json)?,
        Commands::Add(args) => {
            commands::users::add(
                &config,
                commands::users::NewUser {
                    name: args.name,
                    username: args.username,
                    email: args.email,
                    phone: args.phone,
                    website: args.website,
                },
            )?;
        }
        Commands::Update { id, fields } => {
            commands::users::update(
                &config,
                id,
                commands::users::UserChanges {
                    name: fields.name,
                    username: fields.username,
                    email: fields.email,
                    phone: fields.phone,
                    website: fields.website,
                },
            )?;
        }
        Commands::Delete { id } => commands::users::delete(&config, id)?,
        Commands::Shell => commands::shell::run(&config)?,
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "userdir", &mut io::stdout());
        }
    }

    Ok(())
}
