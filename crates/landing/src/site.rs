// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Static site generation.
//!
//! 1. Plan one `PageJob` per published client
//! 2. Render each page: metadata + JSON-LD + template body → layout
//! 3. Write `<id>/index.html` per client and `404.html` to the output directory

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::registry::ClientRegistry;
use crate::seo::SiteOrigin;
use crate::templates;
use std::path::{Path, PathBuf};

/// One page to generate.
#[derive(Debug, Clone)]
pub struct PageJob<'a> {
    /// Output path relative to the output directory (e.g. "dubois-plomberie/index.html")
    pub output_path: String,
    /// Public path of the page under a shared origin
    pub page_path: String,
    pub client: &'a ClientConfig,
}

/// Outcome of a site build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Files written, absolute or relative to the caller's output directory
    pub written: Vec<PathBuf>,
    /// Client ids left out because they are not active
    pub skipped: Vec<String>,
}

pub const NOT_FOUND_PAGE: &str = "404.html";

/// Plan the pages of the site. Inactive and draft clients are skipped.
pub fn plan_pages(registry: &ClientRegistry) -> (Vec<PageJob<'_>>, Vec<String>) {
    let mut jobs = Vec::new();
    let mut skipped = Vec::new();

    for client in registry.iter() {
        if !client.status.is_published() {
            diagnostics::warn!("Skipping client {client} with status {status}",
                client: client.id.as_str(), status: client.status.as_str());
            skipped.push(client.id.clone());
            continue;
        }
        jobs.push(PageJob {
            output_path: format!("{}/index.html", client.id),
            page_path: format!("/{}", client.id),
            client,
        });
    }

    (jobs, skipped)
}

/// Generate the complete static site into `output_dir`.
pub fn generate_site(
    registry: &ClientRegistry,
    origin: &SiteOrigin,
    output_dir: &Path,
) -> Result<BuildReport> {
    let (jobs, skipped) = plan_pages(registry);
    let count = jobs.len();
    diagnostics::info!("Site plan: {count} pages to generate", count: count);

    let mut written = Vec::with_capacity(jobs.len() + 1);
    for job in &jobs {
        // A fallback origin is the client's own domain, served at its root.
        let page_path = origin.as_deref().map(|_| job.page_path.as_str());
        let html = templates::render_client_page(job.client, origin, page_path)?;
        written.push(write_page(output_dir, &job.output_path, &html)?);
    }
    written.push(write_page(
        output_dir,
        NOT_FOUND_PAGE,
        &templates::render_not_found(),
    )?);

    let out_display = output_dir.display().to_string();
    diagnostics::info!("Site generation complete: {count} pages to {out}", count: count, out: out_display);
    Ok(BuildReport { written, skipped })
}

fn write_page(output_dir: &Path, relative: &str, html: &str) -> Result<PathBuf> {
    let out_path = output_dir.join(relative);
    if let Some(parent) = out_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    std::fs::write(&out_path, html.as_bytes()).map_err(|e| Error::io(&out_path, e))?;
    diagnostics::debug!("wrote {path}", path: relative);
    Ok(out_path)
}
