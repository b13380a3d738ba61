// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Client configuration — one YAML document per client.
//!
//! ```yaml
//! id: "dubois-plomberie"
//! template: plumber
//! domain: "dubois-plomberie.fr"
//!
//! business:
//!   name: "Plomberie Dubois"
//!   phone: "06 12 34 56 78"
//!   email: "contact@dubois-plomberie.fr"
//!   address:
//!     street: "123 rue de la République"
//!     city: "Lyon"
//!     postal_code: "69001"
//!     country: "France"
//!
//! seo:
//!   title: "Plombier Lyon 69001"
//!   description: "Plombier professionnel à Lyon 1er."
//!   keywords: ["plombier lyon"]
//!
//! content:
//!   hero:
//!     headline: "Votre Plombier de Confiance à Lyon"
//!     subheadline: "Intervention rapide 24h/24"
//!     cta: "Appeler maintenant"
//!   services: []
//! ```

use crate::theme::ThemeConfig;
use serde::{Deserialize, Serialize};

/// Aggregate root for one tenant. Built once at startup, read-only afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientConfig {
    /// Registry key, also the output directory of the client's page
    pub id: String,
    pub template: Template,
    pub domain: String,
    #[serde(default)]
    pub status: ClientStatus,
    pub business: BusinessInfo,
    pub seo: SeoConfig,
    pub content: ContentConfig,
    /// Falls back to the template's built-in theme when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeConfig>,
    #[serde(default)]
    pub features: Features,
}

impl ClientConfig {
    /// Theme tokens for this client: the configured theme or the template default.
    pub fn theme(&self) -> ThemeConfig {
        self.theme
            .clone()
            .unwrap_or_else(|| ThemeConfig::for_template(self.template))
    }
}

/// Page template a client is rendered with.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    Plumber,
    Restaurant,
    Medical,
    Legal,
    Default,
}

impl Template {
    pub fn as_str(self) -> &'static str {
        match self {
            Template::Plumber => "plumber",
            Template::Restaurant => "restaurant",
            Template::Medical => "medical",
            Template::Legal => "legal",
            Template::Default => "default",
        }
    }

    /// Display name used on generated pages.
    pub fn label(self) -> &'static str {
        match self {
            Template::Plumber => "Plombier",
            Template::Restaurant => "Restaurant",
            Template::Medical => "Médical",
            Template::Legal => "Juridique",
            Template::Default => "Standard",
        }
    }
}

/// Publication status. Only active clients are written by the site builder.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ClientStatus {
    #[default]
    Active,
    Inactive,
    Draft,
}

impl ClientStatus {
    pub fn is_published(self) -> bool {
        self == ClientStatus::Active
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ClientStatus::Active => "active",
            ClientStatus::Inactive => "inactive",
            ClientStatus::Draft => "draft",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BusinessInfo {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    pub phone: String,
    pub email: String,
    pub address: Address,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opening_hours: Option<OpeningHours>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_media: Option<SocialMedia>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Day of the week, in the order schedules are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// schema.org `dayOfWeek` value.
    pub fn schema_name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    pub fn label_fr(self) -> &'static str {
        match self {
            Weekday::Monday => "Lundi",
            Weekday::Tuesday => "Mardi",
            Weekday::Wednesday => "Mercredi",
            Weekday::Thursday => "Jeudi",
            Weekday::Friday => "Vendredi",
            Weekday::Saturday => "Samedi",
            Weekday::Sunday => "Dimanche",
        }
    }
}

/// Free-text weekly hours, e.g. `"8h00 - 19h00"` or `"Fermé"`.
///
/// A missing day is unspecified, not closed. `emergency` is a free-form
/// availability note and never part of the weekly schedule.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OpeningHours {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monday: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tuesday: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wednesday: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thursday: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friday: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saturday: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sunday: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emergency: Option<String>,
}

impl OpeningHours {
    pub fn day(&self, day: Weekday) -> Option<&str> {
        let value = match day {
            Weekday::Monday => &self.monday,
            Weekday::Tuesday => &self.tuesday,
            Weekday::Wednesday => &self.wednesday,
            Weekday::Thursday => &self.thursday,
            Weekday::Friday => &self.friday,
            Weekday::Saturday => &self.saturday,
            Weekday::Sunday => &self.sunday,
        };
        value.as_deref()
    }

    /// Monday through Sunday with their raw values.
    pub fn weekdays(&self) -> impl Iterator<Item = (Weekday, Option<&str>)> + '_ {
        Weekday::ALL.into_iter().map(move |day| (day, self.day(day)))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SocialMedia {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
}

impl SocialMedia {
    /// Non-empty links as (network label, url), in facebook, instagram,
    /// linkedin, twitter order.
    pub fn links(&self) -> Vec<(&'static str, &str)> {
        [
            ("Facebook", &self.facebook),
            ("Instagram", &self.instagram),
            ("LinkedIn", &self.linkedin),
            ("Twitter", &self.twitter),
        ]
        .into_iter()
        .filter_map(|(label, url)| match url.as_deref() {
            Some(url) if !url.is_empty() => Some((label, url)),
            _ => None,
        })
        .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeoConfig {
    pub title: String,
    pub description: String,
    /// Kept verbatim: order preserved, duplicates allowed
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContentConfig {
    pub hero: HeroContent,
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub testimonials: Option<Vec<Testimonial>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faqs: Option<Vec<Faq>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about: Option<About>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gallery: Option<Gallery>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeroContent {
    pub headline: String,
    pub subheadline: String,
    pub cta: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_secondary: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
    #[serde(default)]
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Service {
    /// Icon name or emoji, rendered as-is
    #[serde(default)]
    pub icon: String,
    pub title: String,
    pub description: String,
    /// Display string ("À partir de 80€", "Sur devis"), never parsed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default)]
    pub highlighted: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Testimonial {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub content: String,
    pub rating: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct About {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Gallery {
    pub title: String,
    #[serde(default)]
    pub images: Vec<GalleryImage>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

/// Per-client section toggles. Unset flags leave a section on when its
/// content exists.
///
/// `contact_form`, `gallery`, `testimonials` and `faq` drive rendering.
/// `online_booking`, `blog`, `newsletter` and `analytics` are carried through
/// unchanged for the hosting side (`landing show`); no section reads them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Features {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_form: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub online_booking: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gallery: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blog: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub testimonials: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faq: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub newsletter: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analytics: Option<Analytics>,
}

impl Features {
    /// A flag counts as enabled unless it is explicitly `false`.
    pub fn enabled(flag: Option<bool>) -> bool {
        flag.unwrap_or(true)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Analytics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_analytics: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook_pixel: Option<String>,
}
