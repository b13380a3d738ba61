// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Page templates — one per business vertical.
//!
//! Dispatch is an exhaustive `match` on [`Template`], so a new vertical does
//! not compile until it has a rendering.

use crate::config::{ClientConfig, Features, Template};
use crate::error::Result;
use crate::layouts::{self, LayoutContext};
use crate::sections::{self, NavItem};
use crate::seo::SiteOrigin;
use crate::seo::metadata::{PageMetadata, page_metadata};
use crate::seo::structured::{breadcrumb_list, local_business, to_script_json};
use crate::theme::ThemeConfig;
use maud::{Markup, html};

const PLUMBER_CERTIFICATIONS: &[&str] =
    &["Garantie décennale", "Artisan RGE", "Assurance RC Pro"];

/// Render the full HTML page of one client.
///
/// `page_path` is the public path of the page (e.g. `/dubois-plomberie`),
/// appended to the site origin for the canonical URL.
pub fn render_client_page(
    config: &ClientConfig,
    origin: &SiteOrigin,
    page_path: Option<&str>,
) -> Result<String> {
    let metadata = page_metadata(&config.seo, &config.business, page_path, origin);
    let business = local_business(
        &config.business,
        Some(config.content.services.as_slice()),
        origin,
    );
    let home_url = metadata
        .canonical
        .clone()
        .unwrap_or_else(|| origin.base_url(&config.business));
    let breadcrumbs = breadcrumb_list(&[("Accueil".to_string(), home_url)]);
    let structured_data = vec![to_script_json(&business)?, to_script_json(&breadcrumbs)?];

    let body = match config.template {
        Template::Plumber => plumber_body(config),
        Template::Restaurant | Template::Medical | Template::Legal | Template::Default => {
            placeholder_body(config)
        }
    };
    diagnostics::debug!("Rendered {client} with template {template}",
        client: config.id.as_str(), template: config.template.as_str());

    let theme = config.theme();
    let body_class = format!("template-{}", config.template.as_str());
    Ok(layouts::render_document(&LayoutContext {
        metadata: &metadata,
        theme: &theme,
        structured_data: &structured_data,
        body_class: &body_class,
        body,
    }))
}

/// The page served for unknown client keys.
pub fn render_not_found() -> String {
    let metadata = PageMetadata::not_found();
    let theme = ThemeConfig::for_template(Template::Default);
    layouts::render_document(&LayoutContext {
        metadata: &metadata,
        theme: &theme,
        structured_data: &[],
        body_class: "not-found",
        body: html! {
            main class="not-found" {
                h1 { (metadata.title) }
                p { (metadata.description) }
            }
        },
    })
}

/// Navigation entries for the plumber page, only for sections that render.
fn plumber_navigation(config: &ClientConfig) -> Vec<NavItem> {
    let mut items = vec![
        NavItem { name: "Accueil", href: "#hero" },
        NavItem { name: "Services", href: "#services" },
    ];
    if show_testimonials(config) {
        items.push(NavItem { name: "Témoignages", href: "#testimonials" });
    }
    if show_faq(config) {
        items.push(NavItem { name: "FAQ", href: "#faq" });
    }
    items.push(NavItem { name: "Contact", href: "#contact" });
    items
}

fn show_testimonials(config: &ClientConfig) -> bool {
    Features::enabled(config.features.testimonials)
        && config.content.testimonials.as_ref().is_some_and(|t| !t.is_empty())
}

fn show_faq(config: &ClientConfig) -> bool {
    Features::enabled(config.features.faq)
        && config.content.faqs.as_ref().is_some_and(|f| !f.is_empty())
}

fn plumber_body(config: &ClientConfig) -> Markup {
    let business = &config.business;
    let content = &config.content;
    let features = &config.features;
    html! {
        (sections::navigation(business, &plumber_navigation(config)))
        main {
            (sections::hero(&content.hero, business))
            (sections::services_grid(&content.services))
            @if let Some(about) = &content.about {
                (sections::about(about))
            }
            @if let Some(gallery) = content.gallery.as_ref().filter(|_| Features::enabled(features.gallery)) {
                (sections::gallery(gallery))
            }
            @if show_testimonials(config) {
                @if let Some(testimonials) = &content.testimonials {
                    (sections::testimonials(testimonials))
                }
            }
            @if show_faq(config) {
                @if let Some(faqs) = &content.faqs {
                    (sections::faq(faqs))
                }
            }
            (sections::contact(business, Features::enabled(features.contact_form)))
        }
        (sections::footer(business, PLUMBER_CERTIFICATIONS))
    }
}

/// Verticals without a dedicated layout yet.
fn placeholder_body(config: &ClientConfig) -> Markup {
    html! {
        main class="template-placeholder" {
            h1 { "Template " (config.template.label()) }
            p { "Template en cours de développement pour " (config.business.name) }
        }
    }
}
