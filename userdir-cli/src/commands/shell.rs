// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Interactive Form Session
//!
//! Keeps one in-memory list alive across several actions, like a page
//! session in a browser.

use anyhow::Result;
use dialoguer::{Confirm, Input, Select};
use tracing::debug;
use userdir_core::{Field, SubmitOutcome, UserForm, UserId};

use crate::config::{CliConfig, Controller};
use crate::display;

enum Action {
    Submit,
    Edit,
    CancelEdit,
    Delete,
    Reload,
    Quit,
}

/// Runs the interactive session until the user quits.
pub fn run(config: &CliConfig) -> Result<()> {
    let (mut controller, renderer) = config.open()?;
    if let Err(e) = controller.load() {
        debug!("Continuing with an empty list: {}", e);
    }
    renderer.flush();

    let mut form = UserForm::new();

    loop {
        match choose_action(&form)? {
            Action::Submit => {
                prompt_fields(&mut form)?;
                if controller.submit(&mut form) == SubmitOutcome::Invalid {
                    display::info("Fix the fields above and submit again.");
                }
            }
            Action::Edit => {
                if let Some(id) = pick_user(&controller, "Edit which user?")? {
                    controller.edit(id, &mut form);
                }
            }
            Action::CancelEdit => controller.cancel_edit(&mut form),
            Action::Delete => {
                if let Some(id) = pick_user(&controller, "Delete which user?")? {
                    let confirmed = Confirm::new()
                        .with_prompt(format!("Delete user {}?", id))
                        .default(false)
                        .interact()?;
                    if confirmed {
                        controller.delete(id);
                    }
                }
            }
            Action::Reload => {
                if let Err(e) = controller.load() {
                    debug!("Reload failed: {}", e);
                }
            }
            Action::Quit => break,
        }

        renderer.flush();
    }

    Ok(())
}

fn choose_action(form: &UserForm) -> Result<Action> {
    let mut actions = vec![(form.submit_label().to_string(), Action::Submit)];
    if form.editing().is_some() {
        actions.push(("Cancel edit".into(), Action::CancelEdit));
    }
    actions.push(("Edit user".into(), Action::Edit));
    actions.push(("Delete user".into(), Action::Delete));
    actions.push(("Reload".into(), Action::Reload));
    actions.push(("Quit".into(), Action::Quit));

    let labels: Vec<&str> = actions.iter().map(|(label, _)| label.as_str()).collect();
    let selection = Select::new()
        .with_prompt("Action")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(actions.swap_remove(selection).1)
}

/// Prompts for each field, starting from the form's current values.
fn prompt_fields(form: &mut UserForm) -> Result<()> {
    for field in Field::ALL {
        let prompt = if field.is_optional() {
            format!("{} (optional)", field.label())
        } else {
            field.label().to_string()
        };
        let value: String = Input::new()
            .with_prompt(prompt)
            .with_initial_text(form.value(field))
            .allow_empty(true)
            .interact_text()?;
        form.set(field, value);
    }
    Ok(())
}

fn pick_user(controller: &Controller, prompt: &str) -> Result<Option<UserId>> {
    if controller.is_empty() {
        display::info("No users.");
        return Ok(None);
    }

    let items: Vec<String> = controller
        .users()
        .iter()
        .map(|u| format!("{:>4}  {} ({})", u.id, u.name, u.username))
        .collect();

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(0)
        .interact_opt()?;

    Ok(selection.map(|i| controller.users()[i].id))
}
