pub mod account;
pub mod add;
pub mod browse;
pub mod delete;
pub mod duplicate;
pub mod edit;
pub mod info;
pub mod list;
pub mod theme;

use anyhow::{Context as _, Result};
use chrono::{Local, NaiveDate};
use eventdesk_core::EventRepository;
use eventdesk_core::config::EventDeskConfig;
use eventdesk_core::store::FileStore;
use eventdesk_core::theme::{self as core_theme, Theme};

use crate::render::Palette;

/// Config and storage shared by every command.
pub struct Context {
    pub config: EventDeskConfig,
    pub store: FileStore,
}

impl Context {
    pub fn load() -> Result<Self> {
        let config = EventDeskConfig::load().context("Failed to load config")?;
        let store = config.open_store();
        tracing::debug!(data_dir = %store.dir().display(), "opened store");

        Ok(Context { config, store })
    }

    pub fn repository(&self) -> Result<EventRepository<FileStore>> {
        EventRepository::load_at(self.store.clone(), today()).with_context(|| {
            format!("Failed to load events from {}", self.config.display_path().display())
        })
    }

    pub fn theme(&self) -> Result<Theme> {
        Ok(core_theme::resolve(&self.store, self.config.system_prefers_dark())?)
    }

    pub fn palette(&self) -> Result<Palette> {
        Ok(Palette::new(self.theme()?))
    }
}

/// Start of the current local day, used for all date comparisons.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
