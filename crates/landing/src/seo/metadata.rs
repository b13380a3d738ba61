// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Page metadata: title, description, canonical URL, Open Graph, Twitter
//! card and robots directives, plus their `<head>` rendering.

use super::SiteOrigin;
use crate::config::{BusinessInfo, SeoConfig};
use maud::{Markup, html};
use serde::Serialize;

const OG_IMAGE_WIDTH: u32 = 1200;
const OG_IMAGE_HEIGHT: u32 = 630;
const OG_LOCALE: &str = "fr_FR";
const TWITTER_CARD: &str = "summary_large_image";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_graph: Option<OpenGraph>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<TwitterCard>,
    pub robots: Robots,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub url: String,
    pub site_name: String,
    pub images: Vec<OgImage>,
    pub locale: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OgImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TwitterCard {
    pub card: &'static str,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Robots {
    pub index: bool,
    pub follow: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_bot: Option<GoogleBot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoogleBot {
    pub index: bool,
    pub follow: bool,
    /// -1 means no limit
    #[serde(rename = "max-video-preview")]
    pub max_video_preview: i32,
    #[serde(rename = "max-image-preview")]
    pub max_image_preview: &'static str,
    #[serde(rename = "max-snippet")]
    pub max_snippet: i32,
}

impl Robots {
    fn index_follow() -> Self {
        Robots {
            index: true,
            follow: true,
            google_bot: Some(GoogleBot {
                index: true,
                follow: true,
                max_video_preview: -1,
                max_image_preview: "large",
                max_snippet: -1,
            }),
        }
    }

    /// Content of `<meta name="robots">`, e.g. `"index, follow"`.
    pub fn directives(&self) -> String {
        index_follow(self.index, self.follow)
    }
}

impl GoogleBot {
    pub fn directives(&self) -> String {
        format!(
            "{}, max-video-preview:{}, max-image-preview:{}, max-snippet:{}",
            index_follow(self.index, self.follow),
            self.max_video_preview,
            self.max_image_preview,
            self.max_snippet
        )
    }
}

fn index_follow(index: bool, follow: bool) -> String {
    format!(
        "{}, {}",
        if index { "index" } else { "noindex" },
        if follow { "follow" } else { "nofollow" }
    )
}

/// Build page metadata for a client page.
///
/// The canonical URL is `base_url + page_path`, or `base_url` alone without a
/// path. `seo.canonical_url`, when set, replaces the root page's canonical.
pub fn page_metadata(
    seo: &SeoConfig,
    business: &BusinessInfo,
    page_path: Option<&str>,
    origin: &SiteOrigin,
) -> PageMetadata {
    let base_url = origin.base_url(business);
    let canonical = match (page_path, &seo.canonical_url) {
        (Some(path), _) => format!("{}{}", base_url, path),
        (None, Some(url)) => url.clone(),
        (None, None) => base_url,
    };

    let og_images = seo
        .og_image
        .iter()
        .map(|url| OgImage {
            url: url.clone(),
            width: OG_IMAGE_WIDTH,
            height: OG_IMAGE_HEIGHT,
            alt: business.name.clone(),
        })
        .collect();

    PageMetadata {
        title: seo.title.clone(),
        description: seo.description.clone(),
        keywords: Some(seo.keywords.join(", ")),
        canonical: Some(canonical.clone()),
        open_graph: Some(OpenGraph {
            title: seo.title.clone(),
            description: seo.description.clone(),
            url: canonical,
            site_name: business.name.clone(),
            images: og_images,
            locale: OG_LOCALE,
            kind: "website",
        }),
        twitter: Some(TwitterCard {
            card: TWITTER_CARD,
            title: seo.title.clone(),
            description: seo.description.clone(),
            images: seo.og_image.iter().cloned().collect(),
        }),
        robots: Robots::index_follow(),
    }
}

impl PageMetadata {
    /// Metadata for an unknown client key.
    pub fn not_found() -> Self {
        PageMetadata {
            title: "Page non trouvée".to_string(),
            description: "Cette page n'existe pas.".to_string(),
            keywords: None,
            canonical: None,
            open_graph: None,
            twitter: None,
            robots: Robots {
                index: false,
                follow: true,
                google_bot: None,
            },
        }
    }

    /// `<head>` tags for this page.
    pub fn head(&self) -> Markup {
        html! {
            title { (self.title) }
            meta name="description" content=(self.description);
            @if let Some(keywords) = &self.keywords {
                meta name="keywords" content=(keywords);
            }
            @if let Some(canonical) = &self.canonical {
                link rel="canonical" href=(canonical);
            }
            meta name="robots" content=(self.robots.directives());
            @if let Some(google_bot) = &self.robots.google_bot {
                meta name="googlebot" content=(google_bot.directives());
            }
            @if let Some(og) = &self.open_graph {
                meta property="og:title" content=(og.title);
                meta property="og:description" content=(og.description);
                meta property="og:url" content=(og.url);
                meta property="og:site_name" content=(og.site_name);
                meta property="og:locale" content=(og.locale);
                meta property="og:type" content=(og.kind);
                @for image in &og.images {
                    meta property="og:image" content=(image.url);
                    meta property="og:image:width" content=(image.width);
                    meta property="og:image:height" content=(image.height);
                    meta property="og:image:alt" content=(image.alt);
                }
            }
            @if let Some(twitter) = &self.twitter {
                meta name="twitter:card" content=(twitter.card);
                meta name="twitter:title" content=(twitter.title);
                meta name="twitter:description" content=(twitter.description);
                @for image in &twitter.images {
                    meta name="twitter:image" content=(image);
                }
            }
        }
    }
}
