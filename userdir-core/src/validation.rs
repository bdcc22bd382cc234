// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Field Validation
//!
//! One check per form field. Each returns an empty string when the value is
//! valid, or a message suitable for the field's inline error slot.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::form::UserForm;

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_]+$").expect("valid username pattern"));
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9\s\-()]+$").expect("valid phone pattern"));
// Second host character may be anything but a line terminator.
static WEBSITE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://[^\s$.?#][^\n\r\u{2028}\u{2029}][^\s]*$")
        .expect("valid website pattern")
});

/// Validates a display name.
pub fn validate_name(name: &str) -> &'static str {
    if name.trim().is_empty() {
        return "Name is required";
    }
    if name.chars().count() < 2 {
        return "Name must be at least 2 characters";
    }
    ""
}

/// Validates a username: at least 3 word characters.
pub fn validate_username(username: &str) -> &'static str {
    if username.trim().is_empty() {
        return "Username is required";
    }
    if username.chars().count() < 3 {
        return "Username must be at least 3 characters";
    }
    if !USERNAME_RE.is_match(username) {
        return "Username can only contain letters, numbers, and underscores";
    }
    ""
}

/// Validates an email address against a permissive `local@domain.tld` shape.
pub fn validate_email(email: &str) -> &'static str {
    if email.trim().is_empty() {
        return "Email is required";
    }
    if !EMAIL_RE.is_match(email) {
        return "Invalid email format";
    }
    ""
}

/// Validates an optional phone number.
pub fn validate_phone(phone: &str) -> &'static str {
    if !phone.is_empty() && !PHONE_RE.is_match(phone) {
        return "Invalid phone number format";
    }
    ""
}

/// Validates an optional website URL.
pub fn validate_website(website: &str) -> &'static str {
    if !website.is_empty() && !WEBSITE_RE.is_match(website) {
        return "Invalid website URL";
    }
    ""
}

/// A field of the user form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Username,
    Email,
    Phone,
    Website,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Username,
        Field::Email,
        Field::Phone,
        Field::Website,
    ];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Username => "Username",
            Field::Email => "Email",
            Field::Phone => "Phone",
            Field::Website => "Website",
        }
    }

    /// Returns true for fields that may be left blank.
    pub fn is_optional(&self) -> bool {
        matches!(self, Field::Phone | Field::Website)
    }

    /// Runs this field's check against `value`.
    pub fn validate(&self, value: &str) -> &'static str {
        match self {
            Field::Name => validate_name(value),
            Field::Username => validate_username(value),
            Field::Email => validate_email(value),
            Field::Phone => validate_phone(value),
            Field::Website => validate_website(value),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Inline error slots, one per field. An empty slot means the field is valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub name: &'static str,
    pub username: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub website: &'static str,
}

impl FormErrors {
    /// Returns the message in the slot for `field`.
    pub fn get(&self, field: Field) -> &'static str {
        match field {
            Field::Name => self.name,
            Field::Username => self.username,
            Field::Email => self.email,
            Field::Phone => self.phone,
            Field::Website => self.website,
        }
    }

    /// Writes `message` into the slot for `field`.
    pub fn set(&mut self, field: Field, message: &'static str) {
        match field {
            Field::Name => self.name = message,
            Field::Username => self.username = message,
            Field::Email => self.email = message,
            Field::Phone => self.phone = message,
            Field::Website => self.website = message,
        }
    }

    /// Empties every slot.
    pub fn clear(&mut self) {
        *self = FormErrors::default();
    }

    /// Returns true if every slot is empty.
    pub fn is_valid(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Number of fields with a message.
    pub fn count(&self) -> usize {
        Field::ALL
            .iter()
            .filter(|f| !self.get(**f).is_empty())
            .count()
    }

    /// Iterates over every slot in form order, empty ones included.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        Field::ALL.iter().map(move |f| (*f, self.get(*f)))
    }
}

/// Runs all five checks against the form's current values.
///
/// Every check runs regardless of earlier failures.
pub fn validate_form(form: &UserForm) -> FormErrors {
    let mut errors = FormErrors::default();
    for field in Field::ALL {
        errors.set(field, field.validate(form.value(field)));
    }
    errors
}
