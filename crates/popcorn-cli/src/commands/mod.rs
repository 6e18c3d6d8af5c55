pub mod config;
pub mod info;
pub mod search;
pub mod watched;

use color_eyre::eyre::eyre;
use color_eyre::Result;
use popcorn_config::{Config, PathManager};
use popcorn_core::{App, WatchedStore, Watchlist};
use popcorn_omdb::OmdbClient;

/// Everything a command needs: the application state (with the watched
/// list already loaded from disk) and a configured OMDb client.
pub struct AppContext {
    pub app: App,
    pub client: OmdbClient,
}

impl AppContext {
    pub fn load() -> Result<Self> {
        let paths = PathManager::new().map_err(|e| eyre!("{}", e))?;
        let config = Config::load(&paths.config_file()).map_err(|e| eyre!("{}", e))?;
        let store = WatchedStore::new(paths.watched_file());
        let watchlist = Watchlist::open(store).map_err(|e| eyre!("{}", e))?;
        let client = OmdbClient::new(config.omdb.api_key, config.omdb.base_url);
        Ok(Self {
            app: App::new(watchlist),
            client,
        })
    }
}
