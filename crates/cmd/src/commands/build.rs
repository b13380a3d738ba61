// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use landing::{ClientRegistry, SiteOrigin, generate_site};

/// Generate the static site into `out_dir` and summarize what was written.
pub fn build_command(
    registry: &ClientRegistry,
    origin: &SiteOrigin,
    out_dir: &Path,
    out: &mut impl Write,
) -> Result<()> {
    let report = generate_site(registry, origin, out_dir)
        .with_context(|| format!("Failed to generate site into {}", out_dir.display()))?;

    for path in &report.written {
        writeln!(out, "wrote {}", path.display())?;
    }
    for client in &report.skipped {
        writeln!(out, "skipped {} (not active)", client)?;
    }
    writeln!(
        out,
        "{} files written to {}",
        report.written.len(),
        out_dir.display()
    )?;
    Ok(())
}
