//! Process-wide authentication state.
//!
//! The session store is the single owner of the current user, the opaque
//! bearer token, and the derived authenticated/loading flags. It is the only
//! module that reads or writes the persisted session record in local
//! storage; everything else observes it through yewdux subscriptions.

use gloo_storage::{LocalStorage, Storage};
use shared::models::{LoginRequest, Role, User};
use yew_router::navigator::Navigator;
use yewdux::prelude::*;

use crate::api::ApiClient;
use crate::routes::MainRoute;

/// Local storage key holding the serialized user record.
pub const USER_KEY: &str = "user";

/// Local storage key holding the opaque bearer token.
pub const TOKEN_KEY: &str = "token";

/// Outcome of a login attempt. `Success` and `ForceReset` are mutually
/// exclusive; every transport or credential failure collapses to `Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginStatus {
    /// Credentials accepted; the session is now authenticated.
    Success,
    /// The account must set a new password before normal use. The issued
    /// token is persisted for the reset flow, but the session stays
    /// unauthenticated.
    ForceReset,
    /// Invalid credentials or any request failure. No state was mutated.
    Error,
}

/// Authentication state for the running client.
#[derive(Debug, Clone, PartialEq, Store)]
pub struct Session {
    /// The signed-in user, absent when unauthenticated.
    pub user: Option<User>,
    /// Opaque bearer credential attached to authenticated requests.
    pub token: Option<String>,
    /// True only from store creation until hydration completes.
    pub loading: bool,
    /// Generation counter, bumped whenever the session is cleared so an
    /// in-flight login completion can detect it is no longer current.
    pub epoch: u32,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            user: None,
            token: None,
            loading: true,
            epoch: 0,
        }
    }
}

impl Session {
    /// True iff both a user and a token are present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }

    /// True iff the session is authenticated and the user's role is a member
    /// of `required`. An empty required set never grants access.
    #[must_use]
    pub fn has_permission(&self, required: &[Role]) -> bool {
        match &self.user {
            Some(user) if self.is_authenticated() => required.contains(&user.role),
            _ => false,
        }
    }

    /// Transition applied when hydration finds a valid persisted session,
    /// and when a login succeeds.
    pub fn authenticated(&mut self, user: User, token: String) {
        self.user = Some(user);
        self.token = Some(token);
        self.loading = false;
    }

    /// Transition applied when a login response demands a password reset:
    /// the token is kept so the reset flow can authenticate its follow-up
    /// call, but the session stays unauthenticated.
    pub fn pending_reset(&mut self, token: String) {
        self.user = None;
        self.token = Some(token);
        self.loading = false;
    }

    /// Transition applied when hydration finds nothing usable, and by
    /// logout. Bumps the epoch so stale completions are discarded.
    pub fn cleared(&mut self) {
        self.user = None;
        self.token = None;
        self.loading = false;
        self.epoch = self.epoch.wrapping_add(1);
    }
}

/// Restore the session from local storage. Runs exactly once at application
/// start; `loading` flips to false when it finishes and never re-enters
/// true. Corrupt or partial persisted data is self-healing: both keys are
/// removed and the session stays unauthenticated.
pub fn hydrate(dispatch: &Dispatch<Session>) {
    let token: Option<String> = LocalStorage::get(TOKEN_KEY).ok();
    let user: Option<User> = LocalStorage::get(USER_KEY).ok();

    match (user, token) {
        (Some(user), Some(token)) => dispatch.reduce_mut(|session| {
            session.authenticated(user, token);
        }),
        _ => {
            LocalStorage::delete(USER_KEY);
            LocalStorage::delete(TOKEN_KEY);
            dispatch.reduce_mut(Session::cleared);
        }
    }
}

/// Authenticate against the external auth service.
///
/// All transport failures and non-2xx responses collapse to
/// [`LoginStatus::Error`] with no state mutation. A completion that arrives
/// after the session was cleared in the meantime (the user logged out while
/// the request was in flight) is discarded rather than applied.
pub async fn login(dispatch: Dispatch<Session>, email: String, password: String) -> LoginStatus {
    let started_epoch = dispatch.get().epoch;
    let request = LoginRequest { email, password };

    let Ok(response) = ApiClient::shared().login(&request).await else {
        return LoginStatus::Error;
    };

    // The session changed underneath us; do not re-authenticate.
    if dispatch.get().epoch != started_epoch {
        return LoginStatus::Error;
    }

    if response.force_reset {
        persist_reset_token(&response.token);
        dispatch.reduce_mut(move |session| session.pending_reset(response.token));
        return LoginStatus::ForceReset;
    }

    match response.user {
        Some(user) => {
            let _ = LocalStorage::set(USER_KEY, &user);
            let _ = LocalStorage::set(TOKEN_KEY, &response.token);
            dispatch.reduce_mut(move |session| {
                session.authenticated(user, response.token);
            });
            LoginStatus::Success
        }
        // A 2xx body with neither a user nor a reset flag is malformed.
        None => LoginStatus::Error,
    }
}

/// Persist the reset-scoped token and drop any previously persisted user so
/// a reload cannot hydrate a stale identity against the new token.
fn persist_reset_token(token: &str) {
    LocalStorage::delete(USER_KEY);
    let _ = LocalStorage::set(TOKEN_KEY, token);
}

/// Clear the session everywhere and return to the login screen. Safe to
/// call when already logged out.
pub fn logout(dispatch: &Dispatch<Session>, navigator: &Navigator) {
    LocalStorage::delete(USER_KEY);
    LocalStorage::delete(TOKEN_KEY);
    dispatch.reduce_mut(Session::cleared);
    navigator.push(&MainRoute::Login);
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn fresh_dispatch() -> Dispatch<Session> {
        Dispatch::new(&yewdux::Context::new())
    }

    #[wasm_bindgen_test]
    fn hydrate_with_empty_storage_clears_session() {
        LocalStorage::delete(USER_KEY);
        LocalStorage::delete(TOKEN_KEY);

        let dispatch = fresh_dispatch();
        hydrate(&dispatch);

        let session = dispatch.get();
        assert!(!session.loading);
        assert!(!session.is_authenticated());
    }

    #[wasm_bindgen_test]
    fn reset_token_persistence_drops_stale_user() {
        let user = User {
            id: uuid::Uuid::new_v4(),
            name: "Morgan Reyes".to_string(),
            email: "morgan@example.com".to_string(),
            role: Role::Manager,
        };
        let _ = LocalStorage::set(USER_KEY, &user);
        let _ = LocalStorage::set(TOKEN_KEY, "old-token");

        persist_reset_token("reset-token");

        // The previous identity must not survive the reset handoff.
        assert!(LocalStorage::raw().get_item(USER_KEY).unwrap().is_none());

        let dispatch = fresh_dispatch();
        hydrate(&dispatch);
        let session = dispatch.get();
        assert!(!session.is_authenticated());
        assert!(session.user.is_none());
    }

    #[wasm_bindgen_test]
    fn hydrate_with_corrupt_user_self_heals() {
        LocalStorage::raw()
            .set_item(USER_KEY, "{not json")
            .expect("raw storage write");
        let _ = LocalStorage::set(TOKEN_KEY, "T");

        let dispatch = fresh_dispatch();
        hydrate(&dispatch);

        let session = dispatch.get();
        assert!(!session.is_authenticated());
        assert!(session.user.is_none());
        assert!(LocalStorage::raw().get_item(USER_KEY).unwrap().is_none());
        assert!(LocalStorage::raw().get_item(TOKEN_KEY).unwrap().is_none());
    }
}
