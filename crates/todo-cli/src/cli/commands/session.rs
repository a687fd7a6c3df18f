//! Per-command session: one HTTP client and one store.

use anyhow::{Result, bail};
use todo_core::api::HttpApi;
use todo_core::config::Config;
use todo_core::features::{app, auth};
use todo_core::store::Store;

pub struct Session {
    pub api: HttpApi,
    pub store: Store,
}

impl Session {
    pub fn open(config: &Config) -> Result<Self> {
        let api = HttpApi::from_config(config)?;
        tracing::debug!(base_url = %api.base_url(), "session opened");
        Ok(Self {
            api,
            store: Store::new(),
        })
    }

    /// Runs the identity check only.
    pub async fn initialize(config: &Config) -> Result<Self> {
        let session = Self::open(config)?;
        app::initialize_app(&session.api, &session.store).await?;
        Ok(session)
    }

    /// Runs the identity check, then logs in with the configured credentials
    /// when the server does not already know this client.
    pub async fn bootstrap(config: &Config) -> Result<Self> {
        let session = Self::initialize(config).await?;
        if !session.is_logged_in()
            && let Some(params) = config.credentials()
        {
            auth::login(&session.api, &session.store, &params).await;
            session.check()?;
        }
        Ok(session)
    }

    pub fn is_logged_in(&self) -> bool {
        self.store.select(|state| state.auth.is_logged_in)
    }

    /// Fails with the error reported into the app slice, if any.
    pub fn check(&self) -> Result<()> {
        if let Some(error) = self.store.select(|state| state.app.error.clone()) {
            bail!("{error}");
        }
        Ok(())
    }
}
