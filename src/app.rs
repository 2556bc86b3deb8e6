//! Application wiring: settings → HTTP remote store → bookmark controller.

use std::time::Duration;

use tracing::info;

use crate::managers::bookmark_controller::BookmarkController;
use crate::services::notification::NotificationSinkTrait;
use crate::services::remote_store::HttpRemoteStore;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};

/// Controller type used by the binaries.
pub type HttpController<N> = BookmarkController<HttpRemoteStore, N>;

/// Holds the settings engine and the controller built from it.
pub struct App<N> {
    pub settings_engine: SettingsEngine,
    pub controller: HttpController<N>,
}

impl<N: NotificationSinkTrait> App<N> {
    /// Loads settings, resolves the API URL and builds the controller.
    ///
    /// `api_url_flag` wins over the environment and the settings file. Fails
    /// when no API URL is configured anywhere.
    pub fn new(
        mut settings_engine: SettingsEngine,
        api_url_flag: Option<&str>,
        notifier: N,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let settings = settings_engine.load()?;
        let api_url = settings_engine.api_url(api_url_flag)?;
        let store = HttpRemoteStore::new(
            &api_url,
            Duration::from_secs(settings.request_timeout_secs),
        )?;

        let mut controller = BookmarkController::new(store, notifier);
        controller.select_tab(settings.default_tab);
        info!(api_url = %api_url, config = %settings_engine.get_config_path(), "bookmark client ready");

        Ok(Self {
            settings_engine,
            controller,
        })
    }
}
