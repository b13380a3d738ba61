// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Maud HTML document shell shared by every generated page.
//!
//! The shell owns `<head>`: page metadata tags, theme variables and the
//! JSON-LD payloads. Templates only provide the body.

use crate::seo::metadata::PageMetadata;
use crate::theme::ThemeConfig;
use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Version baked into generated HTML as `<meta name="generator">`.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Context passed to the layout.
pub struct LayoutContext<'a> {
    pub metadata: &'a PageMetadata,
    pub theme: &'a ThemeConfig,
    /// Serialized JSON-LD objects, already escaped for a script element
    pub structured_data: &'a [String],
    /// Class on `<body>`, used by the stylesheet to pick template styling
    pub body_class: &'a str,
    pub body: Markup,
}

/// Wrap a page body in a complete HTML document.
pub fn render_document(ctx: &LayoutContext) -> String {
    let markup = html! {
        (DOCTYPE)
        html lang="fr" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                meta name="generator" content=(format!("landing v{}", VERSION));
                (ctx.metadata.head())
                link rel="stylesheet" href="/style.css";
                style { (PreEscaped(ctx.theme.css_variables())) }
                @for payload in ctx.structured_data {
                    script type="application/ld+json" { (PreEscaped(payload)) }
                }
            }
            body class=(ctx.body_class) {
                (ctx.body)
            }
        }
    };
    markup.into_string()
}
