// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Search metadata for client pages: `<head>` tags and schema.org JSON-LD.
//!
//! Everything here is a pure function of the client config and the site
//! origin. No clock, no randomness, no I/O.

pub mod hours;
pub mod metadata;
pub mod structured;

use crate::config::BusinessInfo;
use regex::Regex;
use std::sync::LazyLock;

/// Environment variable holding the public site origin.
pub const BASE_URL_ENV: &str = "LANDING_BASE_URL";

/// Top-level domain appended to the fallback origin.
const FALLBACK_TLD: &str = ".fr";

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("static regex"));

/// Externally supplied site origin (e.g. `https://sites.example.fr`).
///
/// When unset, each client falls back to an origin derived from its business
/// name. An empty string counts as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteOrigin(Option<String>);

impl SiteOrigin {
    pub fn new(origin: impl Into<String>) -> Self {
        let origin = origin.into();
        if origin.is_empty() {
            SiteOrigin(None)
        } else {
            SiteOrigin(Some(origin))
        }
    }

    pub fn unset() -> Self {
        SiteOrigin(None)
    }

    /// Read `LANDING_BASE_URL`.
    pub fn from_env() -> Self {
        std::env::var(BASE_URL_ENV)
            .map(SiteOrigin::new)
            .unwrap_or_default()
    }

    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// The origin used for absolute URLs of this business's pages.
    pub fn base_url(&self, business: &BusinessInfo) -> String {
        match &self.0 {
            Some(origin) => origin.clone(),
            None => fallback_base_url(&business.name),
        }
    }
}

/// `"Plomberie Dubois"` → `"https://plomberie-dubois.fr"`.
///
/// Lower-cases the name and replaces each whitespace run with one hyphen.
pub fn fallback_base_url(business_name: &str) -> String {
    let lower = business_name.to_lowercase();
    let slug = WHITESPACE_RUN.replace_all(&lower, "-");
    format!("https://{}{}", slug, FALLBACK_TLD)
}
