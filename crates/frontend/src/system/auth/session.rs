use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};
use crate::shared::gateway::ApiError;

/// Session state of the console: Anonymous or Authenticated.
///
/// Constructed once in the app root and passed into views explicitly, so a
/// view's dependencies are visible in its signature and tests can build one
/// directly.
///
/// On startup a persisted token is trusted optimistically; validation is
/// deferred to the first API call. A 401-class failure then triggers one
/// background token refresh, and if that also fails the session drops to
/// Anonymous (which routes back to the login view).
#[derive(Clone, Copy)]
pub struct Session {
    token: RwSignal<Option<String>>,
    /// Location requested before the login redirect; restored after login.
    return_to: RwSignal<Option<String>>,
    refresh_in_flight: RwSignal<bool>,
}

impl Session {
    /// Restore from durable storage: a persisted token starts the session
    /// Authenticated without a server round trip.
    pub fn restore() -> Self {
        Self {
            token: RwSignal::new(storage::get_token()),
            return_to: RwSignal::new(None),
            refresh_in_flight: RwSignal::new(false),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.get().is_some()
    }

    /// Anonymous -> Authenticated: persist the token and flip the flag.
    pub fn login(&self, token: String) {
        storage::save_token(&token);
        self.token.set(Some(token));
    }

    /// Authenticated -> Anonymous: clear the persisted token. The routing
    /// layer reacts by showing the login view.
    pub fn logout(&self) {
        storage::clear_token();
        self.token.set(None);
    }

    /// Explicit logout: also revokes the token server-side (best effort).
    pub fn logout_with_revoke(&self) {
        let session = *self;
        spawn_local(async move {
            let _ = api::logout().await;
            session.logout();
        });
    }

    pub fn remember_location(&self, path: String) {
        if path != "/login" {
            self.return_to.set(Some(path));
        }
    }

    /// Where to go after a successful login (defaults to the grid).
    pub fn take_return_to(&self) -> String {
        let target = self.return_to.get_untracked();
        self.return_to.set(None);
        target.unwrap_or_else(|| "/".to_string())
    }

    /// Normalize an API failure for display and react to auth loss.
    ///
    /// On a 401-class error one token refresh is attempted in the
    /// background; if it fails the session drops to Anonymous and the
    /// router redirects to login.
    pub fn report(&self, err: &ApiError) -> String {
        if err.is_unauthorized() {
            self.try_refresh_or_logout();
        }
        err.to_string()
    }

    fn try_refresh_or_logout(&self) {
        if self.refresh_in_flight.get_untracked() {
            return;
        }
        let Some(current) = self.token.get_untracked() else {
            return;
        };
        self.refresh_in_flight.set(true);

        let session = *self;
        spawn_local(async move {
            match api::refresh(current).await {
                Ok(fresh) => {
                    log::info!("token refreshed after 401");
                    session.login(fresh);
                }
                Err(_) => {
                    log::warn!("token refresh failed, dropping session");
                    session.logout();
                }
            }
            session.refresh_in_flight.set(false);
        });
    }
}
