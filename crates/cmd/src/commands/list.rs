// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::io::Write;

use anyhow::Result;
use landing::ClientRegistry;

/// One line per client: id, template, status and domain, tab separated.
pub fn list_command(registry: &ClientRegistry, out: &mut impl Write) -> Result<()> {
    for client in registry.iter() {
        writeln!(
            out,
            "{}\t{}\t{}\t{}",
            client.id,
            client.template.as_str(),
            client.status.as_str(),
            client.domain
        )?;
    }
    Ok(())
}
