use std::path::PathBuf;

use crate::config::AppConfig;
use crate::select::SelectOpts;

#[derive(Debug, Clone)]
pub struct AppContext {
    cfg: AppConfig,
}

impl AppContext {
    pub fn new(cfg: AppConfig) -> Self {
        Self { cfg }
    }

    pub fn cfg(&self) -> &AppConfig {
        &self.cfg
    }

    pub fn root(&self) -> PathBuf {
        PathBuf::from(&self.cfg.select.root)
    }

    pub fn select_opts(&self) -> SelectOpts {
        SelectOpts {
            follow_links: self.cfg.select.follow_links,
        }
    }
}
