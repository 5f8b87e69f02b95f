//! Authenticated-customer state.

use crate::client::ClientError;
use crate::resources::{AuthApi, Credentials, Customer, Registration};

use super::Observable;

/// Authentication state of the current visitor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CustomerState {
    /// No session token is present.
    #[default]
    LoggedOut,
    /// A token exists and the profile fetch is in flight.
    Loading,
    /// A valid session, normally with the loaded profile.
    LoggedIn(Option<Customer>),
}

impl CustomerState {
    /// Whether the visitor holds a session.
    #[must_use]
    pub const fn is_logged_in(&self) -> bool {
        matches!(self, Self::LoggedIn(_))
    }

    /// The profile, when loaded.
    #[must_use]
    pub const fn customer(&self) -> Option<&Customer> {
        match self {
            Self::LoggedIn(customer) => customer.as_ref(),
            Self::LoggedOut | Self::Loading => None,
        }
    }
}

/// Tracks who is logged in and keeps the profile fresh.
///
/// All transitions go through the authentication endpoints; the store
/// never fabricates a logged-in state from a token alone without
/// validating it (see [`fetch`](Self::fetch)).
#[derive(Debug)]
pub struct CustomerStore {
    auth: AuthApi,
    state: Observable<CustomerState>,
}

impl CustomerStore {
    pub(crate) fn new(auth: AuthApi) -> Self {
        Self {
            auth,
            state: Observable::new(CustomerState::LoggedOut),
        }
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> CustomerState {
        self.state.get()
    }

    /// Registers a subscriber invoked on every state transition.
    pub fn subscribe(&self, listener: impl Fn(&CustomerState) + Send + Sync + 'static) {
        self.state.subscribe(listener);
    }

    /// Validates any persisted token and loads the profile.
    ///
    /// Without a token this is a no-op leaving the state logged out.
    /// With one, the state passes through [`CustomerState::Loading`];
    /// a rejected token is cleared and the state returns to logged out,
    /// so a stale token can never present as a session.
    pub async fn fetch(&self) {
        if !self.auth.is_logged_in() {
            self.state.set(CustomerState::LoggedOut);
            return;
        }

        self.state.set(CustomerState::Loading);
        match self.auth.me().await {
            Ok(customer) => self.state.set(CustomerState::LoggedIn(Some(customer))),
            Err(err) => {
                tracing::warn!("session token rejected, logging out: {err}");
                self.auth.clear_token();
                self.state.set(CustomerState::LoggedOut);
            }
        }
    }

    /// Logs in and transitions to [`CustomerState::LoggedIn`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on invalid credentials or transport
    /// failure; the state is left logged out and no token persists, so
    /// the returned result and the observable state always agree.
    pub async fn login(&self, credentials: &Credentials) -> Result<Customer, ClientError> {
        let payload = self.auth.login(credentials).await?;
        self.complete_sign_in(payload.customer).await
    }

    /// Registers an account and transitions to [`CustomerState::LoggedIn`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on validation or transport failure; the
    /// state is left logged out and no token persists.
    pub async fn register(&self, registration: &Registration) -> Result<Customer, ClientError> {
        let payload = self.auth.register(registration).await?;
        self.complete_sign_in(payload.customer).await
    }

    /// Settles the state after a token-granting call. A payload without
    /// an embedded profile is resolved through the profile endpoint;
    /// when that fails the fresh token is discarded and the state stays
    /// logged out rather than reporting failure from a logged-in store.
    async fn complete_sign_in(
        &self,
        customer: Option<Customer>,
    ) -> Result<Customer, ClientError> {
        if let Some(customer) = customer {
            self.state
                .set(CustomerState::LoggedIn(Some(customer.clone())));
            return Ok(customer);
        }
        match self.auth.me().await {
            Ok(customer) => {
                self.state
                    .set(CustomerState::LoggedIn(Some(customer.clone())));
                Ok(customer)
            }
            Err(err) => {
                tracing::warn!("profile fetch after sign-in failed, discarding token: {err}");
                self.auth.clear_token();
                self.state.set(CustomerState::LoggedOut);
                Err(err)
            }
        }
    }

    /// Ends the session and transitions to [`CustomerState::LoggedOut`].
    ///
    /// The backend call is best-effort; the local state always ends up
    /// logged out.
    pub async fn logout(&self) {
        self.auth.logout().await;
        self.state.set(CustomerState::LoggedOut);
    }
}
