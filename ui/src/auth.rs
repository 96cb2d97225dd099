//! Authentication context: the one piece of cross-view shared state.
//!
//! [`AuthProvider`] owns the `Signal<AuthState>` and places it in context;
//! every mounted view reads it through [`use_auth`] and re-renders on change.
//! Only the flow functions in this module ([`sign_in`], [`sign_up`],
//! [`sign_out`]) and the bootstrap inside the provider ever write it — plus
//! the 401 interceptor in the `api` crate, which clears the *persisted* side
//! and reloads onto `/login`, at which point bootstrap lands in the anonymous
//! state.

use api::{ApiError, LoginRequest, RegisterRequest, User};
use dioxus::prelude::*;

/// Session state for the application.
///
/// Invariant: outside the initial `loading` window, `token` is present iff
/// `user` is present.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        AuthState {
            user: None,
            token: None,
            loading: true,
        }
    }
}

impl AuthState {
    pub fn authenticated(user: User, token: String) -> Self {
        AuthState {
            user: Some(user),
            token: Some(token),
            loading: false,
        }
    }

    pub fn anonymous() -> Self {
        AuthState {
            user: None,
            token: None,
            loading: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }

    /// The signed-in user's id, when known.
    pub fn user_id(&self) -> Option<u64> {
        self.user.as_ref().map(|user| user.id)
    }
}

/// What a route guard should do for a given session state. Pure function of
/// the state so both guard variants share one tested decision table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Bootstrap still in flight: render a loading indicator, fire no
    /// redirect yet.
    Loading,
    Allow,
    /// Redirect: to `/login` for protected routes, to `/dashboard` for
    /// public-only routes.
    Deny,
}

impl GuardDecision {
    pub fn for_protected(state: &AuthState) -> Self {
        if state.loading {
            GuardDecision::Loading
        } else if state.is_authenticated() {
            GuardDecision::Allow
        } else {
            GuardDecision::Deny
        }
    }

    pub fn for_public_only(state: &AuthState) -> Self {
        if state.loading {
            GuardDecision::Loading
        } else if state.is_authenticated() {
            GuardDecision::Deny
        } else {
            GuardDecision::Allow
        }
    }
}

/// Get the session signal. Panics if no [`AuthProvider`] is above the caller.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that owns the session state. Wrap the router with it.
///
/// Bootstrap: with a persisted token the session stays in `loading` while
/// `GET /auth/me` confirms it (the cached user seeds the state so the navbar
/// has a name to show); on any failure everything is cleared and the session
/// becomes anonymous.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth = use_signal(AuthState::default);
    use_context_provider(|| auth);

    let _bootstrap = use_resource(move || async move {
        let Some(token) = api::session::token() else {
            auth.set(AuthState::anonymous());
            return;
        };
        // Seed from the cached copy so the navbar has a name while the
        // token is confirmed; `loading` stays set until then.
        if let Some(cached) = api::session::cached_user() {
            auth.set(AuthState {
                user: Some(cached),
                token: Some(token.clone()),
                loading: true,
            });
        }
        match api::auth::current_user().await {
            Ok(user) => {
                api::session::set_cached_user(&user);
                auth.set(AuthState::authenticated(user, token));
            }
            Err(err) => {
                tracing::warn!("persisted session rejected: {err}");
                api::session::clear();
                auth.set(AuthState::anonymous());
            }
        }
    });

    rsx! {
        {children}
    }
}

/// Log in and populate the session. On failure the state is left unchanged
/// and the server's message is returned to the caller.
pub async fn sign_in(mut auth: Signal<AuthState>, request: &LoginRequest) -> Result<(), ApiError> {
    let response = api::auth::login(request).await?;
    api::session::set_token(&response.token);
    api::session::set_cached_user(&response.user);
    auth.set(AuthState::authenticated(response.user, response.token));
    Ok(())
}

/// Register a new account; a success signs the user in immediately.
pub async fn sign_up(
    mut auth: Signal<AuthState>,
    request: &RegisterRequest,
) -> Result<(), ApiError> {
    let response = api::auth::register(request).await?;
    api::session::set_token(&response.token);
    api::session::set_cached_user(&response.user);
    auth.set(AuthState::authenticated(response.user, response.token));
    Ok(())
}

/// Replace the session's user snapshot after a profile update, keeping the
/// token.
pub fn refresh_user(mut auth: Signal<AuthState>, user: User) {
    let token = auth.peek().token.clone();
    if let Some(token) = token {
        api::session::set_cached_user(&user);
        auth.set(AuthState::authenticated(user, token));
    }
}

/// Log out: the backend call is best-effort, local state always ends up
/// anonymous.
pub async fn sign_out(mut auth: Signal<AuthState>) {
    if let Err(err) = api::auth::logout().await {
        tracing::warn!("logout request failed: {err}");
    }
    api::session::clear();
    auth.set(AuthState::anonymous());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: 1,
            username: "alice".to_string(),
            email: None,
            first_name: "Alice".to_string(),
            last_name: "Nguyen".to_string(),
            bio: None,
            college: None,
            major: None,
            graduation_year: None,
            skills: Vec::new(),
            github_url: None,
            linkedin_url: None,
            avatar_url: None,
            created_at: None,
        }
    }

    #[test]
    fn default_state_is_loading_and_unauthenticated() {
        let state = AuthState::default();
        assert!(state.loading);
        assert!(!state.is_authenticated());
        assert!(state.user_id().is_none());
    }

    #[test]
    fn authenticated_state_holds_user_and_token() {
        let state = AuthState::authenticated(user(), "t1".to_string());
        assert!(state.is_authenticated());
        assert_eq!(state.user_id(), Some(1));
        assert_eq!(state.token.as_deref(), Some("t1"));
        assert!(!state.loading);
    }

    #[test]
    fn protected_guard_decision_table() {
        assert_eq!(
            GuardDecision::for_protected(&AuthState::default()),
            GuardDecision::Loading
        );
        assert_eq!(
            GuardDecision::for_protected(&AuthState::anonymous()),
            GuardDecision::Deny
        );
        assert_eq!(
            GuardDecision::for_protected(&AuthState::authenticated(user(), "t1".into())),
            GuardDecision::Allow
        );
    }

    #[test]
    fn public_only_guard_decision_table() {
        assert_eq!(
            GuardDecision::for_public_only(&AuthState::default()),
            GuardDecision::Loading
        );
        assert_eq!(
            GuardDecision::for_public_only(&AuthState::anonymous()),
            GuardDecision::Allow
        );
        assert_eq!(
            GuardDecision::for_public_only(&AuthState::authenticated(user(), "t1".into())),
            GuardDecision::Deny
        );
    }
}
