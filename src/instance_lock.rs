//! # Single-Instance Lock
//!
//! Two copies of the bot polling the same token fight over updates and
//! each sees half the traffic. The lock file prevents that: it is
//! created exclusively at startup, holds this process's PID for
//! diagnostics, and is removed again when the lock guard drops.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use log::{info, warn};

const LOCK_FILE_NAME: &str = "channelscope-bot.lock";

/// Guard for the process-wide lock file. Dropping it releases the lock.
#[derive(Debug)]
pub struct InstanceLock {
    path: PathBuf,
}

impl InstanceLock {
    /// Acquire the lock at the default location in the system temp dir.
    pub fn acquire() -> Result<Self> {
        Self::acquire_at(std::env::temp_dir().join(LOCK_FILE_NAME))
    }

    /// Acquire the lock at an explicit path.
    pub fn acquire_at(path: PathBuf) -> Result<Self> {
        let created = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path);
        match created {
            Ok(mut file) => {
                // Failing to record the PID leaves the lock valid, just
                // less informative for the next startup that hits it.
                if let Err(err) = writeln!(file, "{}", std::process::id()) {
                    warn!("Could not record PID in {}: {}", path.display(), err);
                }
                info!("Acquired instance lock at {}", path.display());
                Ok(Self { path })
            }
            Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => {
                let holder = fs::read_to_string(&path)
                    .map(|pid| pid.trim().to_string())
                    .unwrap_or_else(|_| "unknown".to_string());
                bail!(
                    "Another instance is already running (lock {} held by PID {}). \
                     Stop it first, or delete the lock file if it is stale.",
                    path.display(),
                    holder
                );
            }
            Err(err) => Err(err).context(format!(
                "Could not create instance lock at {}",
                path.display()
            )),
        }
    }
}

impl Drop for InstanceLock {
    fn drop(&mut self) {
        if let Err(err) = fs::remove_file(&self.path) {
            warn!(
                "Could not remove instance lock {}: {}",
                self.path.display(),
                err
            );
        } else {
            info!("Released instance lock at {}", self.path.display());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_acquire_creates_lock_file_with_pid() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bot.lock");

        let lock = InstanceLock::acquire_at(path.clone()).unwrap();
        assert!(path.exists());
        let recorded = fs::read_to_string(&path).unwrap();
        assert_eq!(recorded.trim(), std::process::id().to_string());
        drop(lock);
    }

    /// A second acquisition fails while the first lock is held.
    #[test]
    fn test_second_acquire_fails_and_names_the_holder() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bot.lock");

        let _held = InstanceLock::acquire_at(path.clone()).unwrap();
        let err = InstanceLock::acquire_at(path)
            .err()
            .map(|e| e.to_string())
            .unwrap_or_default();
        assert!(err.contains("already running"));
        assert!(err.contains(&std::process::id().to_string()));
    }

    /// Dropping the guard releases the lock for the next acquisition.
    #[test]
    fn test_drop_releases_the_lock() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bot.lock");

        let lock = InstanceLock::acquire_at(path.clone()).unwrap();
        drop(lock);
        assert!(!path.exists());

        let reacquired = InstanceLock::acquire_at(path);
        assert!(reacquired.is_ok());
    }
}
