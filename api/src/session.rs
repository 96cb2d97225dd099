//! Persisted session credentials.
//!
//! The only client state that survives a page reload: the bearer token and a
//! cached copy of the signed-in user. On wasm both live in browser
//! localStorage (keys `token` and `user`); on native targets they live in
//! process-wide statics so the same code paths run under plain `cargo test`.
//! Cleared on logout and whenever any request comes back 401.

use crate::models::User;

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";

/// The persisted bearer token, if any.
pub fn token() -> Option<String> {
    read(TOKEN_KEY)
}

pub fn set_token(token: &str) {
    write(TOKEN_KEY, token);
}

/// The cached user record stored alongside the token. Views use it only to
/// seed the session while `GET /auth/me` confirms the token is still good.
pub fn cached_user() -> Option<User> {
    let raw = read(USER_KEY)?;
    match serde_json::from_str(&raw) {
        Ok(user) => Some(user),
        Err(err) => {
            tracing::warn!("discarding unreadable cached user: {err}");
            None
        }
    }
}

pub fn set_cached_user(user: &User) {
    match serde_json::to_string(user) {
        Ok(raw) => write(USER_KEY, &raw),
        Err(err) => tracing::warn!("failed to cache user: {err}"),
    }
}

/// Drop both the token and the cached user.
pub fn clear() {
    remove(TOKEN_KEY);
    remove(USER_KEY);
}

#[cfg(target_arch = "wasm32")]
mod backend {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    pub(super) fn read(key: &str) -> Option<String> {
        storage()?.get_item(key).ok().flatten()
    }

    pub(super) fn write(key: &str, value: &str) {
        if let Some(storage) = storage() {
            let _ = storage.set_item(key, value);
        }
    }

    pub(super) fn remove(key: &str) {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod backend {
    use std::collections::HashMap;
    use std::sync::RwLock;

    static STORE: RwLock<Option<HashMap<String, String>>> = RwLock::new(None);

    pub(super) fn read(key: &str) -> Option<String> {
        STORE.read().ok()?.as_ref()?.get(key).cloned()
    }

    pub(super) fn write(key: &str, value: &str) {
        if let Ok(mut guard) = STORE.write() {
            guard
                .get_or_insert_with(HashMap::new)
                .insert(key.to_string(), value.to_string());
        }
    }

    pub(super) fn remove(key: &str) {
        if let Ok(mut guard) = STORE.write() {
            if let Some(map) = guard.as_mut() {
                map.remove(key);
            }
        }
    }
}

use backend::{read, remove, write};

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so the process-wide store is not contended across threads.
    #[test]
    fn token_and_user_round_trip() {
        clear();
        assert!(token().is_none());
        assert!(cached_user().is_none());

        set_token("t1");
        assert_eq!(token().as_deref(), Some("t1"));

        let user: User = serde_json::from_str(
            r#"{"id": 1, "username": "alice", "first_name": "Alice", "last_name": "Nguyen"}"#,
        )
        .unwrap();
        set_cached_user(&user);
        let cached = cached_user().expect("cached user should round-trip");
        assert_eq!(cached.id, 1);
        assert_eq!(cached.username, "alice");

        clear();
        assert!(token().is_none());
        assert!(cached_user().is_none());
    }
}
