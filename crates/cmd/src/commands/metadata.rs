// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::io::Write;

use anyhow::Result;
use landing::seo::metadata::page_metadata;
use landing::{ClientRegistry, SiteOrigin};

use crate::common::resolve_client;

/// Print the page metadata of one client as pretty JSON.
///
/// `page_path` is appended to the origin for the canonical URL.
pub fn metadata_command(
    registry: &ClientRegistry,
    client_id: &str,
    page_path: Option<&str>,
    origin: &SiteOrigin,
    out: &mut impl Write,
) -> Result<()> {
    let client = resolve_client(registry, client_id)?;
    let metadata = page_metadata(&client.seo, &client.business, page_path, origin);
    serde_json::to_writer_pretty(&mut *out, &metadata)?;
    writeln!(out)?;
    Ok(())
}
