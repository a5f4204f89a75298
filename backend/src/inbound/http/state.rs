//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{ContactsCommand, ContactsQuery, LoginService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Credential check used by `POST /login`.
    pub login: Arc<dyn LoginService>,
    /// Contact mutations.
    pub contacts: Arc<dyn ContactsCommand>,
    /// Contact reads.
    pub contacts_query: Arc<dyn ContactsQuery>,
}

impl HttpState {
    /// Construct state from port implementations.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use contacts_backend::domain::ContactsService;
    /// use contacts_backend::domain::ports::FixtureLoginService;
    /// use contacts_backend::inbound::http::state::HttpState;
    /// use contacts_backend::outbound::memory::InMemoryContactRepository;
    /// use mockable::DefaultClock;
    ///
    /// let service = Arc::new(ContactsService::new(
    ///     Arc::new(InMemoryContactRepository::default()),
    ///     Arc::new(DefaultClock),
    /// ));
    /// let state = HttpState::new(Arc::new(FixtureLoginService), service.clone(), service);
    /// let _login = state.login.clone();
    /// ```
    pub fn new(
        login: Arc<dyn LoginService>,
        contacts: Arc<dyn ContactsCommand>,
        contacts_query: Arc<dyn ContactsQuery>,
    ) -> Self {
        Self {
            login,
            contacts,
            contacts_query,
        }
    }
}
