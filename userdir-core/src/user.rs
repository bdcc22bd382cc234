// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! User Records
//!
//! The record kept in the local list and the body sent to the API.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Identifier of a user record, assigned by the server or synthesized locally.
pub type UserId = u64;

/// A user record as held in the directory list.
///
/// Unknown fields returned by the server (addresses, companies) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        serialize_with = "none_as_empty"
    )]
    pub phone: Option<String>,
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        serialize_with = "none_as_empty"
    )]
    pub website: Option<String>,
}

impl User {
    /// Builds a record from submitted data, with the id coerced to `id`.
    pub fn from_data(id: UserId, data: UserData) -> Self {
        User {
            id,
            name: data.name,
            username: data.username,
            email: data.email,
            phone: data.phone,
            website: data.website,
        }
    }

    /// Returns the editable part of this record.
    pub fn data(&self) -> UserData {
        UserData {
            name: self.name.clone(),
            username: self.username.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            website: self.website.clone(),
        }
    }

    /// Phone number, or an empty string when absent.
    pub fn phone_or_empty(&self) -> &str {
        self.phone.as_deref().unwrap_or("")
    }

    /// Website, or an empty string when absent.
    pub fn website_or_empty(&self) -> &str {
        self.website.as_deref().unwrap_or("")
    }
}

/// Request body for create and update calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserData {
    pub name: String,
    pub username: String,
    pub email: String,
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        serialize_with = "none_as_empty"
    )]
    pub phone: Option<String>,
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        serialize_with = "none_as_empty"
    )]
    pub website: Option<String>,
}

impl UserData {
    /// Builds request data from raw form values. Empty optional values become `None`.
    pub fn new(name: &str, username: &str, email: &str, phone: &str, website: &str) -> Self {
        UserData {
            name: name.to_string(),
            username: username.to_string(),
            email: email.to_string(),
            phone: non_empty(phone),
            website: non_empty(website),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.is_empty()))
}

// The API round-trips plain strings, so an absent value goes out as "".
fn none_as_empty<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(value.as_deref().unwrap_or(""))
}
