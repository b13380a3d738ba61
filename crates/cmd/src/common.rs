// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use landing::{ClientConfig, ClientRegistry, SiteOrigin};

/// Environment variable naming the directory of client YAML files.
pub const CLIENTS_ENV: &str = "LANDING_CLIENTS";

/// Clients directory used when neither `--clients` nor `LANDING_CLIENTS` is set.
pub const DEFAULT_CLIENTS_DIR: &str = "clients";

/// Get the clients directory with an optional override, falling back to the
/// LANDING_CLIENTS environment variable and then to `./clients`
pub fn get_clients_dir_with_override(override_path: Option<PathBuf>) -> PathBuf {
    if let Some(path) = override_path {
        return path;
    }

    match env::var(CLIENTS_ENV) {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => PathBuf::from(DEFAULT_CLIENTS_DIR),
    }
}

/// Site origin from `--origin`, falling back to LANDING_BASE_URL
pub fn get_origin_with_override(override_origin: Option<String>) -> SiteOrigin {
    match override_origin {
        Some(origin) => SiteOrigin::new(origin),
        None => SiteOrigin::from_env(),
    }
}

/// Load the registry, attaching the directory to any failure.
pub fn load_registry(clients_dir: &Path) -> Result<ClientRegistry> {
    ClientRegistry::load_dir(clients_dir)
        .with_context(|| format!("Failed to load clients from {}", clients_dir.display()))
}

/// Resolve a client or fail with `client '<id>' not found`.
pub fn resolve_client<'a>(registry: &'a ClientRegistry, id: &str) -> Result<&'a ClientConfig> {
    registry
        .resolve(id)
        .ok_or_else(|| anyhow!("client '{}' not found", id))
}
