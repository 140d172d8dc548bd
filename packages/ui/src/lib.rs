//! This crate contains the shared client-side pieces of TaskNet: the session
//! context, the REST API client, and the components used by more than one
//! view.

mod client;
pub use client::{ApiClient, ClientError};

mod session;
pub use session::{use_session, Session, SessionProvider, SessionState};

mod navbar;
pub use navbar::Navbar;

mod task_dialog;
pub use task_dialog::TaskDialog;

/// Hard browser redirect, used where no typed router is in scope.
/// No-op on non-wasm targets.
pub fn redirect(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!("redirect to {path} skipped outside the browser");
    }
}
