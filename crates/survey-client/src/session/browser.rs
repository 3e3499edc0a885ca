//! `window.localStorage` and `window.location` capabilities for wasm32

use super::{Error, Navigator, SessionStorage};

fn local_storage() -> Result<web_sys::Storage, Error> {
    web_sys::window()
        .ok_or(Error::Unavailable)?
        .local_storage()
        .map_err(|err| Error::Browser(format!("{err:?}")))?
        .ok_or(Error::Unavailable)
}

/// Session storage backed by `window.localStorage`
///
/// Looks the storage object up on every call, so it stays `Send + Sync` and
/// reports itself unavailable outside a browser window (e.g. in a worker).
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStorage;

impl SessionStorage for BrowserStorage {
    fn is_available(&self) -> bool {
        local_storage().is_ok()
    }

    fn get_item(&self, key: &str) -> Result<Option<String>, Error> {
        local_storage()?
            .get_item(key)
            .map_err(|err| Error::Browser(format!("{err:?}")))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), Error> {
        local_storage()?
            .set_item(key, value)
            .map_err(|err| Error::Browser(format!("{err:?}")))
    }

    fn remove_item(&self, key: &str) -> Result<(), Error> {
        local_storage()?
            .remove_item(key)
            .map_err(|err| Error::Browser(format!("{err:?}")))
    }
}

/// Navigates the current window by assigning `location.href`
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn redirect(&self, route: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };

        if let Err(err) = window.location().set_href(route) {
            tracing::warn!("Could not navigate to {}: {:?}", route, err);
        }
    }
}
