//! Command implementations for the `folio` CLI.
//!
//! Each command receives the shared [`Context`]. Form input is validated
//! before any request is sent; the session is written back to disk by
//! `main` after every command.

pub mod auth;
pub mod catalog;
pub mod profile;
pub mod reviews;
pub mod stock;
pub mod users;

#[cfg(test)]
pub(crate) mod stub;

use folio_client::ApiClient;
use folio_core::FolioConfig;
use folio_session::SessionStore;

/// Everything a command needs.
pub struct Context {
    pub config: FolioConfig,
    pub session: SessionStore,
    pub client: ApiClient,
}

impl Context {
    pub fn new(config: FolioConfig, session: SessionStore) -> anyhow::Result<Self> {
        let client = ApiClient::new(&config.gateway, session.clone())?;
        Ok(Self {
            config,
            session,
            client,
        })
    }
}
