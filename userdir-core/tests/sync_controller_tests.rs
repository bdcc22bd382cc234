// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for api::sync_controller

use std::sync::{Arc, Mutex};
use userdir_core::*;

/// Records every event for later inspection.
#[derive(Default)]
struct RecordingHandler {
    events: Mutex<Vec<DirectoryEvent>>,
}

impl EventHandler for RecordingHandler {
    fn on_event(&self, event: DirectoryEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl RecordingHandler {
    fn events(&self) -> Vec<DirectoryEvent> {
        self.events.lock().unwrap().clone()
    }

    fn statuses(&self) -> Vec<StatusMessage> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                DirectoryEvent::Status { message } => Some(message),
                _ => None,
            })
            .collect()
    }

    fn render_count(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, DirectoryEvent::UsersRendered { .. }))
            .count()
    }
}

fn user(id: UserId, name: &str) -> User {
    let username = name.to_lowercase();
    User::from_data(
        id,
        UserData::new(name, &username, &format!("{}@example.com", username), "", ""),
    )
}

fn sample_data() -> UserData {
    UserData::new(
        "Grace Hopper",
        "grace_h",
        "grace@example.com",
        "+1 555-0100",
        "https://grace.dev",
    )
}

fn create_controller(
    users: Vec<User>,
    mode: MockMode,
) -> (
    DirectorySyncController<MockDirectoryClient>,
    Arc<RecordingHandler>,
) {
    let handler = Arc::new(RecordingHandler::default());
    let events = Arc::new(EventDispatcher::with_handler(handler.clone()));
    let client = MockDirectoryClient::with_users(users);
    let mut controller = DirectorySyncController::new(client, events);
    controller.load().unwrap();
    controller.client_mut().set_mode(mode);
    (controller, handler)
}

fn ids(controller: &DirectorySyncController<MockDirectoryClient>) -> Vec<UserId> {
    controller.users().iter().map(|u| u.id).collect()
}

// === Load ===

#[test]
fn test_load_populates_in_server_order() {
    let (controller, handler) = create_controller(
        vec![user(3, "Carol"), user(1, "Alice"), user(2, "Bob")],
        MockMode::Online,
    );

    assert_eq!(ids(&controller), vec![3, 1, 2]);
    assert_eq!(handler.statuses(), vec![StatusMessage::Loaded { count: 3 }]);
    assert_eq!(handler.render_count(), 1);
}

#[test]
fn test_failed_load_leaves_list_empty() {
    let (mut controller, handler) =
        create_controller(vec![user(1, "Alice")], MockMode::Offline);
    assert_eq!(controller.len(), 1);

    let result = controller.load();

    assert!(matches!(result, Err(DirectoryError::Client(_))));
    assert!(controller.is_empty());
    assert_eq!(handler.statuses().last(), Some(&StatusMessage::LoadFailed));
    assert_eq!(
        handler.events().iter().rev().nth(1),
        Some(&DirectoryEvent::UsersRendered { users: vec![] })
    );
}

#[test]
fn test_load_http_error_is_a_failure() {
    let (mut controller, _) =
        create_controller(vec![user(1, "Alice")], MockMode::HttpError(503));

    let result = controller.load();

    assert!(matches!(
        result,
        Err(DirectoryError::Client(ClientError::HttpStatus(503)))
    ));
    assert!(controller.is_empty());
}

// === Create ===

#[test]
fn test_create_synced_appends_server_record() {
    let (mut controller, handler) =
        create_controller(vec![user(1, "Alice"), user(2, "Bob")], MockMode::Online);

    let outcome = controller.create(sample_data());

    assert_eq!(outcome, SyncOutcome::Synced);
    assert_eq!(ids(&controller), vec![1, 2, 3]);
    assert_eq!(controller.get(3).unwrap().username, "grace_h");
    assert_eq!(
        handler.statuses().last().unwrap().to_string(),
        "User added successfully"
    );
}

#[test]
fn test_failed_create_assigns_max_plus_one() {
    let (mut controller, handler) =
        create_controller(vec![user(1, "Alice"), user(3, "Carol")], MockMode::Offline);

    let outcome = controller.create(sample_data());

    assert_eq!(outcome, SyncOutcome::LocalOnly);
    assert_eq!(ids(&controller), vec![1, 3, 4]);
    assert_eq!(controller.get(4).unwrap().data(), sample_data());
    assert_eq!(
        handler.statuses().last().unwrap().to_string(),
        "User added locally (API failed)"
    );
}

#[test]
fn test_failed_create_with_max_id_listed_picks_free_id() {
    let (mut controller, _) = create_controller(
        vec![user(1, "Alice"), user(UserId::MAX, "Max")],
        MockMode::Offline,
    );

    let outcome = controller.create(sample_data());

    assert!(!outcome.is_synced());
    assert_eq!(ids(&controller), vec![1, UserId::MAX, 2]);
}

#[test]
fn test_failed_create_on_empty_list_starts_at_one() {
    let (mut controller, _) = create_controller(vec![], MockMode::Offline);

    controller.create(sample_data());

    assert_eq!(ids(&controller), vec![1]);
}

#[test]
fn test_create_http_error_falls_back_locally() {
    let (mut controller, _) =
        create_controller(vec![user(5, "Eve")], MockMode::HttpError(500));

    let outcome = controller.create(sample_data());

    assert_eq!(outcome, SyncOutcome::LocalOnly);
    assert_eq!(ids(&controller), vec![5, 6]);
}

#[test]
fn test_create_reassigns_colliding_server_id() {
    let handler = Arc::new(RecordingHandler::default());
    let events = Arc::new(EventDispatcher::with_handler(handler.clone()));
    let client = MockDirectoryClient::with_users(vec![user(1, "Alice"), user(2, "Bob")])
        .with_assigned_id(2);
    let mut controller = DirectorySyncController::new(client, events);
    controller.load().unwrap();

    controller.create(sample_data());
    let outcome = controller.create(sample_data());

    assert_eq!(outcome, SyncOutcome::Synced);
    assert_eq!(ids(&controller), vec![1, 2, 3, 4]);
}

// === Update ===

#[test]
fn test_update_replaces_in_place_when_synced() {
    let (mut controller, handler) = create_controller(
        vec![user(1, "Alice"), user(2, "Bob"), user(3, "Carol")],
        MockMode::Online,
    );

    let outcome = controller.update(2, sample_data());

    assert_eq!(outcome, SyncOutcome::Synced);
    assert_eq!(controller.users()[1], User::from_data(2, sample_data()));
    assert_eq!(ids(&controller), vec![1, 2, 3]);
    assert_eq!(
        handler.statuses().last().unwrap().to_string(),
        "User updated successfully"
    );
}

#[test]
fn test_update_replaces_in_place_when_offline() {
    let (mut controller, handler) = create_controller(
        vec![user(1, "Alice"), user(2, "Bob"), user(3, "Carol")],
        MockMode::Offline,
    );

    let outcome = controller.update(2, sample_data());

    assert_eq!(outcome, SyncOutcome::LocalOnly);
    assert_eq!(controller.users()[1], User::from_data(2, sample_data()));
    assert_eq!(
        handler.statuses().last().unwrap().to_string(),
        "User updated locally (API failed)"
    );
}

#[test]
fn test_update_replaces_in_place_on_http_error() {
    let (mut controller, _) =
        create_controller(vec![user(1, "Alice"), user(2, "Bob")], MockMode::HttpError(500));

    let outcome = controller.update(2, sample_data());

    assert_eq!(outcome, SyncOutcome::LocalOnly);
    assert_eq!(controller.users()[1].name, "Grace Hopper");
    assert_eq!(controller.users()[1].id, 2);
}

#[test]
fn test_update_unknown_id_changes_nothing_but_rerenders() {
    let (mut controller, handler) = create_controller(vec![user(1, "Alice")], MockMode::Online);
    let before = controller.users().to_vec();

    controller.update(9, sample_data());

    assert_eq!(controller.users(), before.as_slice());
    assert_eq!(handler.render_count(), 2);
    assert!(handler.statuses().last().unwrap().is_error());
}

// === Delete ===

#[test]
fn test_delete_removes_when_synced() {
    let (mut controller, handler) = create_controller(
        vec![user(1, "Alice"), user(2, "Bob"), user(3, "Carol")],
        MockMode::Online,
    );

    let outcome = controller.delete(2);

    assert_eq!(outcome, SyncOutcome::Synced);
    assert_eq!(ids(&controller), vec![1, 3]);
    assert!(controller.client().users().iter().all(|u| u.id != 2));
    assert_eq!(
        handler.statuses().last().unwrap().to_string(),
        "User deleted successfully"
    );
}

#[test]
fn test_delete_removes_when_offline() {
    let (mut controller, handler) = create_controller(
        vec![user(1, "Alice"), user(2, "Bob"), user(3, "Carol")],
        MockMode::Offline,
    );

    let outcome = controller.delete(2);

    assert_eq!(outcome, SyncOutcome::LocalOnly);
    assert!(controller.get(2).is_none());
    assert_eq!(
        handler.statuses().last().unwrap().to_string(),
        "User deleted locally (API failed)"
    );
}

#[test]
fn test_delete_http_error_still_removes() {
    let (mut controller, _) =
        create_controller(vec![user(1, "Alice"), user(2, "Bob")], MockMode::HttpError(404));

    controller.delete(2);

    assert_eq!(ids(&controller), vec![1]);
}

// === Submit and edit ===

#[test]
fn test_blank_submit_reports_all_slots_and_mutates_nothing() {
    let (mut controller, handler) =
        create_controller(vec![user(1, "Alice")], MockMode::Online);
    let calls_before = controller.client().calls().len();
    let mut form = UserForm::new();

    let outcome = controller.submit(&mut form);

    assert_eq!(outcome, SubmitOutcome::Invalid);
    assert_eq!(ids(&controller), vec![1]);
    assert_eq!(controller.client().calls().len(), calls_before);
    assert_eq!(form.errors().count(), 3);

    let Some(DirectoryEvent::ValidationFailed { errors }) = handler.events().last().cloned()
    else {
        panic!("expected a validation event");
    };
    assert_eq!(errors, *form.errors());
}

#[test]
fn test_submit_with_five_invalid_fields_reports_five_messages() {
    let (mut controller, _) = create_controller(vec![], MockMode::Online);
    let mut form = UserForm::new()
        .with(Field::Name, " ")
        .with(Field::Username, " ")
        .with(Field::Email, " ")
        .with(Field::Phone, "phone")
        .with(Field::Website, "site");

    let outcome = controller.submit(&mut form);

    assert_eq!(outcome, SubmitOutcome::Invalid);
    assert_eq!(form.errors().count(), 5);
    assert!(controller.is_empty());
    assert!(controller.client().calls().iter().all(|c| *c == MockCall::List));
}

#[test]
fn test_submit_creates_and_resets_form() {
    let (mut controller, handler) = create_controller(vec![user(1, "Alice")], MockMode::Online);
    let mut form = UserForm::new()
        .with(Field::Name, "Grace Hopper")
        .with(Field::Username, "grace_h")
        .with(Field::Email, "grace@example.com");

    let outcome = controller.submit(&mut form);

    assert_eq!(outcome, SubmitOutcome::Created(SyncOutcome::Synced));
    assert_eq!(ids(&controller), vec![1, 2]);
    assert!(form.name.is_empty());
    assert_eq!(form.submit_label(), ADD_LABEL);
    assert_eq!(
        handler.events().last(),
        Some(&DirectoryEvent::FormChanged {
            editing: None,
            submit_label: ADD_LABEL,
        })
    );
}

#[test]
fn test_edit_then_submit_updates() {
    let (mut controller, handler) =
        create_controller(vec![user(1, "Alice"), user(2, "Bob")], MockMode::Offline);
    let mut form = UserForm::new();

    assert!(controller.edit(2, &mut form));
    assert_eq!(form.username, "bob");
    assert_eq!(form.submit_label(), UPDATE_LABEL);
    assert!(handler.events().contains(&DirectoryEvent::FormChanged {
        editing: Some(2),
        submit_label: UPDATE_LABEL,
    }));

    form.set(Field::Name, "Robert");
    let outcome = controller.submit(&mut form);

    assert_eq!(outcome, SubmitOutcome::Updated(SyncOutcome::LocalOnly));
    assert_eq!(controller.get(2).unwrap().name, "Robert");
    assert_eq!(form.editing(), None);
    assert_eq!(
        controller.client().calls().last(),
        Some(&MockCall::Update(2, controller.get(2).unwrap().data()))
    );
}

#[test]
fn test_invalid_submit_in_edit_mode_keeps_editing() {
    let (mut controller, handler) =
        create_controller(vec![user(1, "Alice"), user(2, "Bob")], MockMode::Online);
    let before = controller.users().to_vec();
    let calls_before = controller.client().calls().len();
    let mut form = UserForm::new();
    assert!(controller.edit(2, &mut form));

    form.set(Field::Email, "not-an-email");
    let outcome = controller.submit(&mut form);

    assert_eq!(outcome, SubmitOutcome::Invalid);
    assert_eq!(form.editing(), Some(2));
    assert_eq!(form.submit_label(), UPDATE_LABEL);
    assert_eq!(form.email, "not-an-email");
    assert_eq!(form.errors().get(Field::Email), "Invalid email format");
    assert_eq!(controller.users(), before.as_slice());
    assert_eq!(controller.client().calls().len(), calls_before);
    assert!(matches!(
        handler.events().last(),
        Some(DirectoryEvent::ValidationFailed { .. })
    ));
}

#[test]
fn test_edit_unknown_id_leaves_form_alone() {
    let (controller, _) = create_controller(vec![user(1, "Alice")], MockMode::Online);
    let mut form = UserForm::new().with(Field::Name, "Draft");

    assert!(!controller.edit(7, &mut form));
    assert_eq!(form.name, "Draft");
    assert_eq!(form.editing(), None);
}

#[test]
fn test_cancel_edit_returns_to_add_mode() {
    let (controller, _) = create_controller(vec![user(1, "Alice")], MockMode::Online);
    let mut form = UserForm::new();
    controller.edit(1, &mut form);

    controller.cancel_edit(&mut form);

    assert_eq!(form.editing(), None);
    assert!(form.username.is_empty());
}

#[test]
fn test_get_required_unknown_user() {
    let (controller, _) = create_controller(vec![user(1, "Alice")], MockMode::Online);

    assert!(controller.get_required(1).is_ok());
    assert!(matches!(
        controller.get_required(2),
        Err(DirectoryError::UserNotFound(2))
    ));
}

#[test]
fn test_injected_store_is_used() {
    let store = MemoryUserStore::with_users(vec![user(4, "Dora")]);
    let events = Arc::new(EventDispatcher::new());
    let client = MockDirectoryClient::new().with_mode(MockMode::Offline);
    let mut controller = DirectorySyncController::with_store(client, store, events);

    controller.create(sample_data());

    assert_eq!(controller.store().len(), 2);
    assert_eq!(controller.users()[1].id, 5);
}
