//! Behaviour tests for per-user contact ownership.
//!
//! Scenarios drive the contact use-cases directly over the in-memory store
//! and confirm that one user can neither see nor change another user's
//! contacts.
#![allow(
    non_snake_case,
    reason = "rstest-bdd generates guard variables with double underscores"
)]

use std::cell::RefCell;
use std::sync::Arc;

use contacts_backend::domain::ports::{ContactsCommand, ContactsQuery};
use contacts_backend::domain::{
    Contact, ContactId, ContactPatch, ContactsService, Error, ErrorCode, NewContact, UserId,
};
use contacts_backend::outbound::memory::InMemoryContactRepository;
use mockable::DefaultClock;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use tokio::runtime::Runtime;

struct OwnershipWorld {
    runtime: Runtime,
    service: ContactsService<InMemoryContactRepository>,
    ann: UserId,
    bob: UserId,
    last_contact: RefCell<Option<ContactId>>,
    listing: RefCell<Vec<Contact>>,
    outcome: RefCell<Option<Result<(), Error>>>,
}

impl OwnershipWorld {
    fn new() -> Self {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("runtime");
        Self {
            runtime,
            service: ContactsService::new(
                Arc::new(InMemoryContactRepository::default()),
                Arc::new(DefaultClock),
            ),
            ann: UserId::random(),
            bob: UserId::random(),
            last_contact: RefCell::new(None),
            listing: RefCell::new(Vec::new()),
            outcome: RefCell::new(None),
        }
    }

    fn user(&self, name: &str) -> &UserId {
        match name {
            "ann" => &self.ann,
            "bob" => &self.bob,
            other => panic!("unknown user {other}"),
        }
    }

    fn contact_id(&self) -> ContactId {
        (*self.last_contact.borrow()).expect("a stored contact")
    }

    fn store(&self, owner: &str, name: &str) {
        let input = NewContact::try_from_parts(Some(name.to_owned()), None, None, None)
            .expect("valid contact");
        let created = self
            .runtime
            .block_on(self.service.create_contact(self.user(owner), input))
            .expect("create contact");
        self.last_contact.replace(Some(created.id));
    }

    fn record(&self, outcome: Result<(), Error>) {
        self.outcome.replace(Some(outcome));
    }

    fn owner_names(&self) -> Vec<String> {
        self.runtime
            .block_on(self.service.list_contacts(&self.ann))
            .expect("list contacts")
            .into_iter()
            .map(|contact| contact.name.to_string())
            .collect()
    }

    fn failure_code(&self) -> ErrorCode {
        match self.outcome.borrow().as_ref().expect("an outcome") {
            Ok(()) => panic!("expected the request to fail"),
            Err(err) => err.code(),
        }
    }
}

#[fixture]
fn world() -> OwnershipWorld {
    OwnershipWorld::new()
}

#[given("{user} has stored a contact named {name}")]
fn user_has_stored_a_contact(world: &OwnershipWorld, user: String, name: String) {
    world.store(&user, &name);
}

#[when("ann lists her contacts")]
fn ann_lists_her_contacts(world: &OwnershipWorld) {
    let listing = world
        .runtime
        .block_on(world.service.list_contacts(&world.ann))
        .expect("list contacts");
    world.listing.replace(listing);
}

#[when("bob renames the contact to {name}")]
fn bob_renames_the_contact(world: &OwnershipWorld, name: String) {
    let patch =
        ContactPatch::try_from_parts(Some(name), None, None, None).expect("valid patch");
    let id = world.contact_id();
    let outcome = world
        .runtime
        .block_on(world.service.update_contact(&world.bob, &id, patch))
        .map(drop);
    world.record(outcome);
}

#[when("{user} deletes the contact")]
fn user_deletes_the_contact(world: &OwnershipWorld, user: String) {
    let id = world.contact_id();
    let outcome = world
        .runtime
        .block_on(world.service.delete_contact(world.user(&user), &id))
        .map(drop);
    world.record(outcome);
}

#[then("the listing contains only {name}")]
fn the_listing_contains_only(world: &OwnershipWorld, name: String) {
    let listing = world.listing.borrow();
    let names: Vec<String> = listing.iter().map(|c| c.name.to_string()).collect();
    assert_eq!(names, vec![name]);
    assert!(listing.iter().all(|contact| contact.owner == world.ann));
}

#[then("the request is rejected as unauthorised")]
fn the_request_is_rejected_as_unauthorised(world: &OwnershipWorld) {
    assert_eq!(world.failure_code(), ErrorCode::Unauthorized);
}

#[then("the stored contact is still named {name}")]
fn the_stored_contact_is_still_named(world: &OwnershipWorld, name: String) {
    assert_eq!(world.owner_names(), vec![name]);
}

#[then("the contact is removed")]
fn the_contact_is_removed(world: &OwnershipWorld) {
    assert!(matches!(world.outcome.borrow().as_ref(), Some(Ok(()))));
    assert!(world.owner_names().is_empty());
}

#[then("deleting it again reports not found")]
fn deleting_it_again_reports_not_found(world: &OwnershipWorld) {
    let id = world.contact_id();
    let err = world
        .runtime
        .block_on(world.service.delete_contact(&world.ann, &id))
        .expect_err("second delete");
    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[scenario(path = "tests/features/contact_ownership.feature")]
fn contact_ownership_scenarios(world: OwnershipWorld) {
    drop(world);
}
