// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Terminal Output
//!
//! Styled messages, the user table, and the event handler that turns
//! controller events into terminal output.

use std::sync::Mutex;

use console::style;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use userdir_core::{DirectoryEvent, EventHandler, FormErrors, StatusMessage, User};

pub fn success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

pub fn info(msg: &str) {
    println!("{} {}", style("→").cyan(), msg);
}

pub fn warning(msg: &str) {
    println!("{} {}", style("!").yellow().bold(), msg);
}

pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red().bold(), msg);
}

/// One table row. The ID column is the key used by `update` and `delete`.
#[derive(Tabled)]
struct UserRow<'a> {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Name")]
    name: &'a str,
    #[tabled(rename = "Username")]
    username: &'a str,
    #[tabled(rename = "Email")]
    email: &'a str,
    #[tabled(rename = "Phone")]
    phone: &'a str,
    #[tabled(rename = "Website")]
    website: &'a str,
}

impl<'a> From<&'a User> for UserRow<'a> {
    fn from(user: &'a User) -> Self {
        UserRow {
            id: user.id,
            name: &user.name,
            username: &user.username,
            email: &user.email,
            phone: user.phone_or_empty(),
            website: user.website_or_empty(),
        }
    }
}

/// Prints the full user table.
pub fn display_users_table(users: &[User]) {
    if users.is_empty() {
        info("No users.");
        return;
    }

    let rows: Vec<UserRow<'_>> = users.iter().map(UserRow::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
}

/// Prints every non-empty error slot next to its field.
pub fn display_form_errors(errors: &FormErrors) {
    for (field, message) in errors.iter().filter(|(_, m)| !m.is_empty()) {
        error(&format!("{}: {}", style(field.label()).bold(), message));
    }
}

fn display_status(message: &StatusMessage) {
    let text = message.to_string();
    match message {
        StatusMessage::LoadFailed => error(&text),
        StatusMessage::Loaded { .. } => info(&text),
        _ if message.is_error() => warning(&text),
        _ => success(&text),
    }
}

/// Renders controller events.
///
/// Status lines and validation errors print immediately. List renders are
/// held until [`TerminalRenderer::flush`] so a command draws one table.
#[derive(Default)]
pub struct TerminalRenderer {
    pending: Mutex<Option<Vec<User>>>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws the latest list if it changed since the last flush.
    pub fn flush(&self) {
        let pending = self
            .pending
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take();
        if let Some(users) = pending {
            println!();
            display_users_table(&users);
            println!();
        }
    }

    /// Drops any pending list without drawing it.
    pub fn discard(&self) {
        self.pending
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take();
    }
}

impl EventHandler for TerminalRenderer {
    fn on_event(&self, event: DirectoryEvent) {
        match event {
            DirectoryEvent::UsersRendered { users } => {
                *self
                    .pending
                    .lock()
                    .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(users);
            }
            DirectoryEvent::Status { message } => display_status(&message),
            DirectoryEvent::ValidationFailed { errors } => display_form_errors(&errors),
            DirectoryEvent::FormChanged {
                editing: Some(id),
                submit_label,
            } => info(&format!("Editing user {} ({})", id, submit_label)),
            DirectoryEvent::FormChanged { editing: None, .. } => {}
        }
    }
}
