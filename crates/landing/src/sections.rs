// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Shared page sections: navigation, hero, services grid, testimonials,
//! FAQ, about, gallery, contact and footer.
//!
//! Sections render static HTML only. The FAQ accordion uses `<details>` and
//! the testimonials carousel is a plain list, so pages need no script.

use crate::config::{
    About, BusinessInfo, Faq, Gallery, HeroContent, OpeningHours, Service, Testimonial,
};
use maud::{Markup, html};

/// One entry of the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
}

/// `tel:` link target: the phone number without whitespace.
pub fn tel_href(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:{}", digits)
}

/// Five-star rating line, clamped to 0..=5.
pub fn rating_stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

pub fn navigation(business: &BusinessInfo, items: &[NavItem]) -> Markup {
    let emergency = business
        .opening_hours
        .as_ref()
        .and_then(|h| h.emergency.as_deref());
    html! {
        header class="site-header" {
            @if let Some(note) = emergency {
                div class="emergency-banner" { (note) }
            }
            nav class="navbar" aria-label="Navigation principale" {
                a class="brand" href="#hero" {
                    @if let Some(logo) = &business.logo {
                        img class="brand-logo" src=(logo) alt=(business.name);
                    }
                    span class="brand-name" { (business.name) }
                }
                ul class="nav-links" {
                    @for item in items {
                        li { a href=(item.href) { (item.name) } }
                    }
                }
                div class="nav-meta" {
                    span class="nav-address" {
                        (business.address.city) " " (business.address.postal_code)
                    }
                    a class="nav-phone" href=(tel_href(&business.phone)) { (business.phone) }
                }
            }
        }
    }
}

pub fn hero(hero: &HeroContent, business: &BusinessInfo) -> Markup {
    let style = hero
        .background_image
        .as_ref()
        .map(|image| format!("background-image:url('{}')", image.replace('\'', "%27")));
    html! {
        section id="hero" class="hero" style=[style] {
            div class="hero-content" {
                h1 { (hero.headline) }
                p class="hero-subheadline" { (hero.subheadline) }
                @if !hero.features.is_empty() {
                    ul class="hero-features" {
                        @for feature in &hero.features {
                            li { (feature) }
                        }
                    }
                }
                div class="hero-actions" {
                    a class="cta cta-primary" href=(tel_href(&business.phone)) { (hero.cta) }
                    @if let Some(secondary) = &hero.cta_secondary {
                        a class="cta cta-secondary" href="#contact" { (secondary) }
                    }
                }
                p class="hero-address" {
                    (business.address.street) ", " (business.address.city)
                }
            }
            @if !hero.stats.is_empty() {
                dl class="hero-stats" {
                    @for stat in &hero.stats {
                        div class="stat" {
                            dt { (stat.value) }
                            dd { (stat.label) }
                        }
                    }
                }
            }
        }
    }
}

pub fn services_grid(services: &[Service]) -> Markup {
    html! {
        section id="services" class="services" {
            h2 { "Nos services" }
            div class="services-grid" {
                @for service in services {
                    article.service-card.highlighted[service.highlighted] {
                        @if !service.icon.is_empty() {
                            span class="service-icon" aria-hidden="true" { (service.icon) }
                        }
                        h3 { (service.title) }
                        p { (service.description) }
                        @if let Some(price) = &service.price {
                            p class="service-price" { (price) }
                        }
                    }
                }
            }
        }
    }
}

pub fn testimonials(testimonials: &[Testimonial]) -> Markup {
    html! {
        section id="testimonials" class="testimonials" {
            h2 { "Ils nous font confiance" }
            ul class="testimonial-list" {
                @for t in testimonials {
                    li class="testimonial" {
                        blockquote { (t.content) }
                        p class="rating" aria-label=(format!("{} sur 5", t.rating.min(5))) {
                            (rating_stars(t.rating))
                        }
                        p class="author" {
                            @if let Some(image) = &t.image {
                                img class="avatar" src=(image) alt=(t.name);
                            }
                            strong { (t.name) }
                            @if let Some(role) = &t.role {
                                span class="role" { " — " (role) }
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn faq(faqs: &[Faq]) -> Markup {
    html! {
        section id="faq" class="faq" {
            h2 { "Questions fréquentes" }
            @for (index, item) in faqs.iter().enumerate() {
                details class="faq-item" open[index == 0] {
                    summary { (item.question) }
                    p { (item.answer) }
                }
            }
        }
    }
}

pub fn about(about: &About) -> Markup {
    html! {
        section id="about" class="about" {
            h2 { (about.title) }
            p { (about.description) }
            @if let Some(image) = &about.image {
                img src=(image) alt=(about.title);
            }
            @if !about.features.is_empty() {
                ul class="about-features" {
                    @for feature in &about.features {
                        li { (feature) }
                    }
                }
            }
        }
    }
}

pub fn gallery(gallery: &Gallery) -> Markup {
    html! {
        section id="gallery" class="gallery" {
            h2 { (gallery.title) }
            div class="gallery-grid" {
                @for image in &gallery.images {
                    figure {
                        img src=(image.src) alt=(image.alt) loading="lazy";
                        @if let Some(caption) = &image.caption {
                            figcaption { (caption) }
                        }
                    }
                }
            }
        }
    }
}

/// Contact block: direct links plus a `mailto:` form.
pub fn contact(business: &BusinessInfo, with_form: bool) -> Markup {
    html! {
        section id="contact" class="contact" {
            h2 { "Contactez-nous" }
            div class="contact-info" {
                p { a href=(tel_href(&business.phone)) { (business.phone) } }
                p { a href=(format!("mailto:{}", business.email)) { (business.email) } }
                p { (business.address.street) ", " (business.address.city) }
                @if let Some(hours) = &business.opening_hours {
                    (contact_hours(hours))
                }
            }
            @if with_form {
                form class="contact-form" action=(format!("mailto:{}", business.email))
                    method="post" enctype="text/plain" {
                    label { "Nom" input type="text" name="name" required; }
                    label { "Téléphone" input type="tel" name="phone"; }
                    label { "Email" input type="email" name="email" required; }
                    label { "Message" textarea name="message" rows="5" required {} }
                    button type="submit" { "Envoyer" }
                }
            }
        }
    }
}

/// Condensed week for the contact block: weekdays as Monday's hours, then
/// Saturday, Sunday and the emergency line. Missing or empty values fall
/// back to the usual trade hours.
pub fn hours_summary(hours: &OpeningHours) -> (Vec<(&'static str, &str)>, &str) {
    fn value_or<'a>(value: Option<&'a str>, default: &'static str) -> &'a str {
        value.filter(|v| !v.is_empty()).unwrap_or(default)
    }
    let days = vec![
        ("Lun-Ven", value_or(hours.monday.as_deref(), "8h-19h")),
        ("Sam", value_or(hours.saturday.as_deref(), "9h-17h")),
        ("Dim", value_or(hours.sunday.as_deref(), "Fermé")),
    ];
    (days, value_or(hours.emergency.as_deref(), "Urgence 24h/24 7j/7"))
}

fn contact_hours(hours: &OpeningHours) -> Markup {
    let (days, emergency) = hours_summary(hours);
    html! {
        dl class="contact-hours" {
            @for (label, value) in &days {
                div {
                    dt { (label) }
                    dd { (value) }
                }
            }
        }
        p class="contact-emergency" { "🚨 " (emergency) }
    }
}

fn hours_table(hours: &OpeningHours) -> Markup {
    html! {
        table class="opening-hours" {
            @for (day, value) in hours.weekdays() {
                @if let Some(value) = value.filter(|v| !v.is_empty()) {
                    tr {
                        th scope="row" { (day.label_fr()) }
                        td { (value) }
                    }
                }
            }
        }
    }
}

pub fn footer(business: &BusinessInfo, certifications: &[&str]) -> Markup {
    let social = business
        .social_media
        .as_ref()
        .map(|s| s.links())
        .unwrap_or_default();
    html! {
        footer class="site-footer" {
            div class="footer-brand" {
                strong { (business.name) }
                address {
                    (business.address.street) br;
                    (business.address.postal_code) " " (business.address.city) br;
                    (business.address.country)
                }
                p { a href=(tel_href(&business.phone)) { (business.phone) } }
                p { a href=(format!("mailto:{}", business.email)) { (business.email) } }
            }
            @if let Some(hours) = &business.opening_hours {
                div class="footer-hours" {
                    h3 { "Horaires" }
                    (hours_table(hours))
                    @if let Some(emergency) = &hours.emergency {
                        p class="footer-emergency" { (emergency) }
                    }
                }
            }
            @if !social.is_empty() {
                ul class="footer-social" {
                    @for (label, url) in &social {
                        li { a href=(url) rel="noopener" { (label) } }
                    }
                }
            }
            @if !certifications.is_empty() {
                ul class="footer-certifications" {
                    @for cert in certifications {
                        li { (cert) }
                    }
                }
            }
            p class="copyright" { "© " (business.name) ". Tous droits réservés." }
        }
    }
}
