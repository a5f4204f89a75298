//! Builders wiring repositories into the HTTP state.

use std::sync::Arc;

use actix_web::web;
use mockable::{Clock, DefaultClock};
use tracing::info;

use contacts_backend::domain::ContactsService;
use contacts_backend::domain::ports::{
    ContactRepository, ContactsCommand, ContactsQuery, FixtureLoginService,
};
use contacts_backend::inbound::http::state::HttpState;
use contacts_backend::outbound::memory::InMemoryContactRepository;
use contacts_backend::outbound::persistence::DieselContactRepository;

use super::ServerConfig;

type ContactPorts = (Arc<dyn ContactsCommand>, Arc<dyn ContactsQuery>);

/// Pick the repository: the pool-backed one when a pool exists, otherwise an
/// in-memory store.
fn build_contact_ports_with_pool<P, R>(
    pool: &Option<P>,
    make_repo: impl FnOnce(&P) -> R,
    clock: Arc<dyn Clock>,
) -> ContactPorts
where
    R: ContactRepository + 'static,
{
    let repo: Arc<dyn ContactRepository> = match pool {
        Some(pool) => Arc::new(make_repo(pool)),
        None => {
            info!("no database configured; contacts are kept in memory");
            Arc::new(InMemoryContactRepository::default())
        }
    };
    let service = Arc::new(ContactsService::new(repo, clock));
    let command: Arc<dyn ContactsCommand> = service.clone();
    let query: Arc<dyn ContactsQuery> = service;
    (command, query)
}

/// Build the shared HTTP state for `config`.
pub(crate) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let (contacts, contacts_query) = build_contact_ports_with_pool(
        &config.db_pool,
        |pool| DieselContactRepository::new(pool.clone()),
        Arc::new(DefaultClock),
    );
    web::Data::new(HttpState::new(
        Arc::new(FixtureLoginService),
        contacts,
        contacts_query,
    ))
}
