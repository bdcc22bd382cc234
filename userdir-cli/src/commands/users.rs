// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! User Commands
//!
//! Each command loads the directory, performs one action, and prints the
//! resulting list.

use std::sync::Arc;

use anyhow::{bail, Result};
use tracing::debug;
use userdir_core::{Field, SubmitOutcome, UserForm, UserId};

use crate::config::{CliConfig, Controller};
use crate::display::TerminalRenderer;

/// Values for a new user.
pub struct NewUser {
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub website: String,
}

/// Fields to change on an existing user. `None` keeps the current value.
pub struct UserChanges {
    pub name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
}

impl UserChanges {
    fn apply(self, form: &mut UserForm) {
        let changes = [
            (Field::Name, self.name),
            (Field::Username, self.username),
            (Field::Email, self.email),
            (Field::Phone, self.phone),
            (Field::Website, self.website),
        ];
        for (field, value) in changes {
            if let Some(value) = value {
                form.set(field, value);
            }
        }
    }
}

/// Opens the controller and loads the list. A failed load leaves it empty.
fn open_loaded(config: &CliConfig) -> Result<(Controller, Arc<TerminalRenderer>)> {
    let (mut controller, renderer) = config.open()?;
    if let Err(e) = controller.load() {
        debug!("Continuing with an empty list: {}", e);
    }
    Ok((controller, renderer))
}

/// Lists all users.
pub fn list(config: &CliConfig, json: bool) -> Result<()> {
    let (controller, renderer) = open_loaded(config)?;

    if json {
        renderer.discard();
        println!("{}", serde_json::to_string_pretty(controller.users())?);
    } else {
        renderer.flush();
    }

    Ok(())
}

/// Validates and adds a user.
pub fn add(config: &CliConfig, user: NewUser) -> Result<()> {
    let (mut controller, renderer) = open_loaded(config)?;
    renderer.discard();

    let mut form = UserForm::new()
        .with(Field::Name, user.name)
        .with(Field::Username, user.username)
        .with(Field::Email, user.email)
        .with(Field::Phone, user.phone)
        .with(Field::Website, user.website);

    submit(&mut controller, &renderer, &mut form)
}

/// Edits an existing user.
pub fn update(config: &CliConfig, id: UserId, changes: UserChanges) -> Result<()> {
    let (mut controller, renderer) = open_loaded(config)?;
    renderer.discard();

    controller.get_required(id)?;

    let mut form = UserForm::new();
    controller.edit(id, &mut form);
    changes.apply(&mut form);

    submit(&mut controller, &renderer, &mut form)
}

/// Deletes a user.
pub fn delete(config: &CliConfig, id: UserId) -> Result<()> {
    let (mut controller, renderer) = open_loaded(config)?;
    renderer.discard();

    controller.delete(id);
    renderer.flush();

    Ok(())
}

fn submit(
    controller: &mut Controller,
    renderer: &TerminalRenderer,
    form: &mut UserForm,
) -> Result<()> {
    match controller.submit(form) {
        SubmitOutcome::Invalid => {
            bail!(
                "Submission aborted: {} invalid field(s)",
                form.errors().count()
            );
        }
        SubmitOutcome::Created(_) | SubmitOutcome::Updated(_) => {
            renderer.flush();
            Ok(())
        }
    }
}
