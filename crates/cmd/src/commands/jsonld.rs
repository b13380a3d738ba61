// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::io::Write;

use anyhow::Result;
use landing::seo::structured::local_business;
use landing::{ClientRegistry, SiteOrigin};

use crate::common::resolve_client;

/// Print the `LocalBusiness` JSON-LD object of one client.
pub fn jsonld_command(
    registry: &ClientRegistry,
    client_id: &str,
    origin: &SiteOrigin,
    out: &mut impl Write,
) -> Result<()> {
    let client = resolve_client(registry, client_id)?;
    let business = local_business(
        &client.business,
        Some(client.content.services.as_slice()),
        origin,
    );
    serde_json::to_writer_pretty(&mut *out, &business)?;
    writeln!(out)?;
    Ok(())
}
