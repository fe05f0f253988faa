// ── Demo configuration ────────────────────────────────────────────────────────
//
// Reads `%APPDATA%\Coords\demo.json` (or the file named by `COORDS_CONFIG`).
// Every field except `version` is optional; missing fields fall back to the
// built-in demo values.  No `unsafe`: pure safe Rust + serde_json.

use std::{fs, path::PathBuf};

use serde::{de::Error as _, Deserialize, Serialize};

use crate::{coord::Coord, error::Result};

// ── On-disk type ──────────────────────────────────────────────────────────────

/// Root of the JSON config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    pub version: u32,
    /// Absolute URI shown in the message box.
    #[serde(default = "default_uri")]
    pub uri: String,
    /// Message box caption.
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub a: Coord,
    #[serde(default = "default_b")]
    pub b: Coord,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            uri: default_uri(),
            title: default_title(),
            a: Coord::default(),
            b: default_b(),
        }
    }
}

fn default_uri() -> String {
    "http://aka.ms/cppwinrt".to_owned()
}

fn default_title() -> String {
    "Coords Desktop Application".to_owned()
}

fn default_b() -> Coord {
    Coord::new(39.0, 80.0)
}

// ── Format version ────────────────────────────────────────────────────────────

pub const CONFIG_VERSION: u32 = 1;

// ── Path ──────────────────────────────────────────────────────────────────────

/// Environment variable that points at an explicit config file.
pub const CONFIG_ENV: &str = "COORDS_CONFIG";

/// Return the config path: `$COORDS_CONFIG` if set, otherwise
/// `%APPDATA%\Coords\demo.json`.
///
/// Returns `None` if neither variable is set.
pub fn config_path() -> Option<PathBuf> {
    if let Some(explicit) = std::env::var_os(CONFIG_ENV) {
        return Some(PathBuf::from(explicit));
    }
    let appdata = std::env::var_os("APPDATA")?;
    let mut p = PathBuf::from(appdata);
    p.push("Coords");
    p.push("demo.json");
    Some(p)
}

// ── Parse ─────────────────────────────────────────────────────────────────────

/// Parse a config document, rejecting unknown format versions.
pub fn parse(data: &[u8]) -> Result<DemoConfig> {
    let cfg: DemoConfig = serde_json::from_slice(data)?;
    if cfg.version != CONFIG_VERSION {
        return Err(serde_json::Error::custom(format!(
            "unsupported config version {} (expected {CONFIG_VERSION})",
            cfg.version
        ))
        .into());
    }
    Ok(cfg)
}

// ── Load ──────────────────────────────────────────────────────────────────────

/// Read and parse the config file.
///
/// Returns `None` on any error: file missing, JSON parse failure, or an
/// unrecognised version number.  The caller continues with
/// `DemoConfig::default()`.
pub fn load() -> Option<DemoConfig> {
    let path = config_path()?;
    let data = match fs::read(&path) {
        Ok(data) => data,
        Err(e) => {
            // An explicit override that cannot be read deserves a visible hint.
            if std::env::var_os(CONFIG_ENV).is_some() {
                log::warn!("cannot read {CONFIG_ENV}={}: {e}", path.display());
            } else {
                log::debug!("no config at {}: {e}", path.display());
            }
            return None;
        }
    };
    match parse(&data) {
        Ok(cfg) => {
            log::info!("loaded config from {}", path.display());
            Some(cfg)
        }
        Err(e) => {
            log::warn!("ignoring {}: {e}", path.display());
            None
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
