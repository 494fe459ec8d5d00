//! Browser `localStorage` session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The bearer token lives under [`TOKEN_KEY`] as a raw string so it survives
//! reloads. Outside the browser (native test builds) the store reads as logged
//! out and refuses writes.

#[cfg(test)]
#[path = "session_storage_test.rs"]
mod session_storage_test;

use drive::session::{SessionError, SessionStore, TOKEN_KEY, normalize_token};

/// Zero-sized handle; every call looks the storage object up again, so the
/// handle is `Send + Sync` and can live in Leptos context.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageSession;

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, SessionError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or_else(|| SessionError::Unavailable("localStorage is not available".to_owned()))
}

#[cfg(feature = "csr")]
fn storage_error(err: &wasm_bindgen::JsValue) -> SessionError {
    SessionError::Unavailable(format!("{err:?}"))
}

impl SessionStore for LocalStorageSession {
    fn get_token(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let storage = local_storage().ok()?;
            normalize_token(storage.get_item(TOKEN_KEY).ok().flatten())
        }
        #[cfg(not(feature = "csr"))]
        {
            normalize_token(None)
        }
    }

    fn set_token(&self, token: &str) -> Result<(), SessionError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .set_item(TOKEN_KEY, token)
                .map_err(|e| storage_error(&e))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
            Err(SessionError::Unavailable(format!("cannot persist `{TOKEN_KEY}` outside the browser")))
        }
    }

    fn clear_token(&self) -> Result<(), SessionError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .remove_item(TOKEN_KEY)
                .map_err(|e| storage_error(&e))
        }
        #[cfg(not(feature = "csr"))]
        {
            Ok(())
        }
    }
}
