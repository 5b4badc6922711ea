//! Centralized configuration and builder for RosterDB.
//!
//! Goals:
//! - Single place to collect tunables instead of scattering env lookups.
//! - RosterConfig::from_env() reads ROSTER_* variables on top of defaults.
//! - RegistryBuilder collects overrides and opens a Registry.
//!
//! Defaults:
//! - snapshot_path = ./students.json
//! - fsync = false (snapshot is replaced via tmp+rename without fsync)
//! - pretty = true (human-readable JSON on disk)

use std::fmt;
use std::path::{Path, PathBuf};

use crate::consts::{DEFAULT_SNAPSHOT_FILE, ENV_FILE, ENV_FSYNC, ENV_PRETTY};
use crate::registry::Registry;

/// Top-level configuration for the registry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RosterConfig {
    /// Path to the snapshot file.
    /// Env: ROSTER_FILE (default "students.json")
    pub snapshot_path: PathBuf,

    /// Whether to fsync the snapshot before rename.
    /// Env: ROSTER_FSYNC (default false; "1|true|on|yes" => true)
    pub fsync: bool,

    /// Pretty-print JSON in the snapshot.
    /// Env: ROSTER_PRETTY (default true; "0|false|off|no" => false)
    pub pretty: bool,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            snapshot_path: PathBuf::from(DEFAULT_SNAPSHOT_FILE),
            fsync: false,
            pretty: true,
        }
    }
}

fn env_flag(name: &str) -> Option<bool> {
    let v = std::env::var(name).ok()?;
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

impl RosterConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(v) = std::env::var(ENV_FILE) {
            let s = v.trim();
            if !s.is_empty() {
                cfg.snapshot_path = PathBuf::from(s);
            }
        }

        if let Some(on) = env_flag(ENV_FSYNC) {
            cfg.fsync = on;
        }

        if let Some(on) = env_flag(ENV_PRETTY) {
            cfg.pretty = on;
        }

        cfg
    }

    pub fn with_snapshot_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.snapshot_path = path.as_ref().to_path_buf();
        self
    }

    pub fn with_fsync(mut self, on: bool) -> Self {
        self.fsync = on;
        self
    }

    pub fn with_pretty(mut self, on: bool) -> Self {
        self.pretty = on;
        self
    }
}

impl fmt::Display for RosterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RosterConfig {{ snapshot_path: {}, fsync: {}, pretty: {} }}",
            self.snapshot_path.display(),
            self.fsync,
            self.pretty,
        )
    }
}

/// Builder that produces a RosterConfig and opens a Registry with it.
/// Registry exposes `Registry::builder()` returning this builder.
#[derive(Clone, Debug)]
pub struct RegistryBuilder {
    cfg: RosterConfig,
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        // Start from env, then allow overrides.
        Self {
            cfg: RosterConfig::from_env(),
        }
    }
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a clean default (without reading env).
    pub fn from_default() -> Self {
        Self {
            cfg: RosterConfig::default(),
        }
    }

    pub fn snapshot_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.cfg.snapshot_path = path.as_ref().to_path_buf();
        self
    }

    pub fn fsync(mut self, on: bool) -> Self {
        self.cfg.fsync = on;
        self
    }

    pub fn pretty(mut self, on: bool) -> Self {
        self.cfg.pretty = on;
        self
    }

    /// Finish the builder and obtain the configuration.
    pub fn build(self) -> RosterConfig {
        self.cfg
    }

    /// Finish the builder and open (restore) the registry.
    pub fn open(self) -> Registry {
        Registry::open_with_config(self.cfg)
    }
}
