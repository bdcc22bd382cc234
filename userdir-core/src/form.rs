// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! User Form
//!
//! Input state behind the add/edit form: five raw field values, the id of
//! the record being edited (if any), and the inline error slots.

use crate::user::{User, UserData, UserId};
use crate::validation::{validate_form, Field, FormErrors};

/// Submit button label when the form creates a new user.
pub const ADD_LABEL: &str = "Add User";

/// Submit button label when the form edits an existing user.
pub const UPDATE_LABEL: &str = "Update User";

/// Raw form values plus edit state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserForm {
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    editing: Option<UserId>,
    errors: FormErrors,
}

impl UserForm {
    /// Creates an empty form in "add" mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the raw value of `field`.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Username => &self.username,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Website => &self.website,
        }
    }

    /// Sets the raw value of `field`.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Username => self.username = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Website => self.website = value,
        }
    }

    /// Builder-style setter.
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Id of the record being edited, `None` in add mode.
    pub fn editing(&self) -> Option<UserId> {
        self.editing
    }

    /// Current submit button label.
    pub fn submit_label(&self) -> &'static str {
        if self.editing.is_some() {
            UPDATE_LABEL
        } else {
            ADD_LABEL
        }
    }

    /// Current inline error slots.
    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    /// Clears the error slots, runs every check, and stores the results.
    ///
    /// Returns true if all fields are valid.
    pub fn validate(&mut self) -> bool {
        self.errors.clear();
        self.errors = validate_form(self);
        self.errors.is_valid()
    }

    /// Request body built from the current values.
    pub fn to_data(&self) -> UserData {
        UserData::new(
            &self.name,
            &self.username,
            &self.email,
            &self.phone,
            &self.website,
        )
    }

    /// Loads `user` into the form and switches to edit mode.
    pub fn populate(&mut self, user: &User) {
        self.name = user.name.clone();
        self.username = user.username.clone();
        self.email = user.email.clone();
        self.phone = user.phone_or_empty().to_string();
        self.website = user.website_or_empty().to_string();
        self.editing = Some(user.id);
    }

    /// Clears all values and returns to add mode.
    ///
    /// Error slots are left as they are.
    pub fn reset(&mut self) {
        let errors = self.errors;
        *self = UserForm {
            errors,
            ..UserForm::default()
        };
    }
}
