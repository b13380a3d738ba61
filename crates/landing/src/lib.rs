// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! # Landing — multi-tenant business landing pages
//!
//! Renders one static landing page per client from a YAML config: business
//! info, content, theme tokens. Each page carries search metadata and a
//! schema.org `LocalBusiness` JSON-LD block.
//!
//! ## Usage
//!
//! ```bash
//! landing --clients ./clients build ./dist
//! ```

pub mod config;
mod error;
pub mod layouts;
pub mod registry;
pub mod sections;
pub mod seo;
pub mod site;
pub mod templates;
pub mod theme;

pub use config::{BusinessInfo, ClientConfig, SeoConfig, Service, Template};
pub use error::{Error, Result};
pub use registry::ClientRegistry;
pub use seo::SiteOrigin;
pub use site::{BuildReport, generate_site};
