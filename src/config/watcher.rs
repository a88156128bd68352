//! Configuration file watcher for hot reload.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};

use crate::config::loader::load_config;
use crate::logger::Logger;

/// A watcher that reapplies the configuration file to a logger on change.
pub struct ConfigWatcher {
    path: PathBuf,
    logger: Arc<Logger>,
}

impl ConfigWatcher {
    pub fn new(path: &Path, logger: Arc<Logger>) -> Self {
        Self {
            path: path.to_path_buf(),
            logger,
        }
    }

    /// Start watching on notify's background thread. Dropping the returned
    /// watcher stops it.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let path = self.path.clone();
        let logger = self.logger;

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    if event.kind.is_modify() || event.kind.is_create() {
                        tracing::info!("Config file change detected, reloading...");
                        match load_config(&path) {
                            Ok(new_config) => logger.reconfigure(new_config),
                            Err(e) => {
                                tracing::error!(
                                    "Failed to reload config: {}. Keeping current configuration.",
                                    e
                                );
                            }
                        }
                    }
                }
                Err(e) => tracing::error!("Watch error: {:?}", e),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&self.path, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?self.path, "Config watcher started");
        Ok(watcher)
    }
}
