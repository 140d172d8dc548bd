//! # Session context
//!
//! The session token used to be a browser-global read from anywhere; here it
//! is an explicit context object. [`SessionProvider`] initializes the state
//! once at app start from persisted storage, [`use_session`] hands any view a
//! [`Session`] handle, and login/logout go through that handle so the signal
//! and the persistence medium never disagree.
//!
//! Storage follows the build target: `localStorage` in the browser, an
//! in-process slot everywhere else (server-side rendering, native tests).
//! Presence of a token is the only authentication signal the client has —
//! there is no expiry tracking and no cross-tab notification.

use dioxus::prelude::*;

/// Key the token is persisted under.
const TOKEN_KEY: &str = "tasknet_token";

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    pub token: Option<String>,
}

/// Handle to the session context. Cheap to copy into event handlers.
#[derive(Clone, Copy)]
pub struct Session {
    state: Signal<SessionState>,
}

impl Session {
    /// The current token, if any.
    pub fn token(&self) -> Option<String> {
        (self.state)().token
    }

    /// Presence of a token implies "authenticated".
    pub fn is_authenticated(&self) -> bool {
        (self.state)().token.is_some()
    }

    /// Persist and publish a freshly issued token.
    pub fn login(&mut self, token: String) {
        storage::save(&token);
        self.state.set(SessionState {
            token: Some(token),
        });
    }

    /// Clear the persisted token. A no-op when already logged out.
    pub fn logout(&mut self) {
        storage::clear();
        self.state.set(SessionState::default());
    }
}

/// Get the session context.
pub fn use_session() -> Session {
    use_context::<Session>()
}

/// Provider component that owns the session state.
/// Wrap the app with this component once, above the router.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let state = use_signal(|| SessionState {
        token: storage::load(),
    });
    use_context_provider(|| Session { state });

    rsx! {
        {children}
    }
}

#[cfg(target_arch = "wasm32")]
mod storage {
    use super::TOKEN_KEY;

    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    pub fn load() -> Option<String> {
        local_storage()?.get_item(TOKEN_KEY).ok()?
    }

    pub fn save(token: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }

    pub fn clear() {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod storage {
    use std::sync::RwLock;

    static SLOT: RwLock<Option<String>> = RwLock::new(None);

    pub fn load() -> Option<String> {
        SLOT.read().ok()?.clone()
    }

    pub fn save(token: &str) {
        if let Ok(mut slot) = SLOT.write() {
            *slot = Some(token.to_string());
        }
    }

    pub fn clear() {
        if let Ok(mut slot) = SLOT.write() {
            *slot = None;
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::storage;

    // One sequential test: the in-process slot is shared state.
    #[test]
    fn save_load_clear_and_idempotent_clear() {
        storage::clear();
        assert_eq!(storage::load(), None);

        storage::save("tok-1");
        assert_eq!(storage::load(), Some("tok-1".to_string()));

        // Overwrites any prior value.
        storage::save("tok-2");
        assert_eq!(storage::load(), Some("tok-2".to_string()));

        storage::clear();
        assert_eq!(storage::load(), None);

        // Clearing when already empty is fine.
        storage::clear();
        assert_eq!(storage::load(), None);
    }
}
