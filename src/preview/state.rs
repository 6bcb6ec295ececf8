//! Preview State
//!
//! Shared by all preview handlers. The content snapshot is collected once at
//! startup; it is static for the life of the process.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use crate::config::PreviewConfig;
use crate::content::ContentSnapshot;
use crate::error::TandemResult;

#[derive(Clone)]
pub struct PreviewState {
    pub config: Arc<PreviewConfig>,
    pub snapshot: Arc<ContentSnapshot>,
    pub start_time: Instant,
}

impl PreviewState {
    pub fn new(config: PreviewConfig) -> TandemResult<Self> {
        Ok(Self {
            config: Arc::new(config),
            snapshot: Arc::new(ContentSnapshot::collect()?),
            start_time: Instant::now(),
        })
    }

    pub fn dist_dir(&self) -> PathBuf {
        self.config.dist_dir.clone()
    }

    /// Whether a built bundle (`index.html`) exists
    pub fn dist_ready(&self) -> bool {
        self.config.dist_dir.join("index.html").is_file()
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
