// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::io::Write;

use anyhow::{Context, Result};
use landing::ClientRegistry;

use crate::common::resolve_client;

/// Print the resolved config of one client as YAML.
pub fn show_command(registry: &ClientRegistry, client_id: &str, out: &mut impl Write) -> Result<()> {
    let client = resolve_client(registry, client_id)?;
    let yaml = serde_yaml_ng::to_string(client)
        .with_context(|| format!("Failed to serialize client '{}'", client_id))?;
    out.write_all(yaml.as_bytes())?;
    Ok(())
}
