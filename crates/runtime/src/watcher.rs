//! # Parameter Hot-Reloading
//!
//! Watches the parameter file with [`notify`] and swaps freshly parsed
//! [`Params`] into the shared store. The driver copies the store at every
//! reset, so a reload shows up at the next episode.
//!
//! The parent directory is watched rather than the file itself, since many
//! editors save by replacing the file.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use foraging::Params;
use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher as NotifyWatcher};
use parking_lot::RwLock;
use tracing::{info, warn};

use crate::settings;

struct ParamsReloader {
    path: PathBuf,
    shared: Arc<RwLock<Params>>,
}

impl ParamsReloader {
    fn handle(&self, event: &Event) {
        if !(event.kind.is_modify() || event.kind.is_create()) {
            return;
        }
        if !event.paths.iter().any(|p| self.is_target(p)) {
            return;
        }
        match settings::load_params(&self.path) {
            Ok(params) => {
                *self.shared.write() = params;
                info!(?params, "parameters reloaded");
            }
            // Half-written files are common mid-save; keep the last good set.
            Err(e) => warn!("ignoring parameter reload: {e:#}"),
        }
    }

    fn is_target(&self, path: &Path) -> bool {
        path.file_name()
            .is_some_and(|name| Some(name) == self.path.file_name())
    }
}

/// Start watching `path`. The returned watcher must be kept alive.
///
/// # Errors
///
/// Fails if the watcher cannot be created or the directory cannot be watched.
pub fn start(path: &Path, shared: Arc<RwLock<Params>>) -> Result<RecommendedWatcher> {
    let reloader = ParamsReloader {
        path: path.to_path_buf(),
        shared,
    };
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| match res {
        Ok(event) => reloader.handle(&event),
        Err(e) => warn!("error watching parameter file: {e:?}"),
    })?;
    watcher
        .watch(&dir, RecursiveMode::NonRecursive)
        .with_context(|| format!("watching {}", dir.display()))?;
    info!(path = %path.display(), "watching parameter file");
    Ok(watcher)
}
