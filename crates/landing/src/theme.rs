// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Theme tokens and the built-in theme of each template.
//!
//! Colors are design-token names (`blue-600`), not CSS colors. Pages expose
//! them as custom properties on `:root`; the shared stylesheet maps each token
//! name to a concrete value.

use crate::config::Template;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThemeConfig {
    pub colors: ThemeColors,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fonts: Option<ThemeFonts>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThemeColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreground: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThemeFonts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl ThemeConfig {
    fn new(
        colors: [&str; 5],
        heading: &str,
        body: &str,
        border_radius: &str,
    ) -> Self {
        let [primary, secondary, accent, background, foreground] = colors;
        ThemeConfig {
            colors: ThemeColors {
                primary: primary.to_string(),
                secondary: secondary.to_string(),
                accent: accent.to_string(),
                background: Some(background.to_string()),
                foreground: Some(foreground.to_string()),
            },
            fonts: Some(ThemeFonts {
                heading: Some(heading.to_string()),
                body: Some(body.to_string()),
            }),
            border_radius: Some(border_radius.to_string()),
        }
    }

    /// Built-in theme used when a client config carries no `theme` block.
    pub fn for_template(template: Template) -> Self {
        match template {
            Template::Plumber => Self::new(
                ["blue-600", "gray-800", "orange-500", "gray-50", "gray-900"],
                "Inter",
                "Inter",
                "rounded-lg",
            ),
            Template::Restaurant => Self::new(
                ["amber-600", "stone-800", "red-600", "stone-50", "stone-900"],
                "Playfair Display",
                "Inter",
                "rounded-xl",
            ),
            Template::Medical => Self::new(
                ["teal-600", "slate-800", "sky-500", "slate-50", "slate-900"],
                "Inter",
                "Inter",
                "rounded-lg",
            ),
            Template::Legal => Self::new(
                ["indigo-900", "gray-800", "amber-500", "white", "gray-900"],
                "Merriweather",
                "Inter",
                "rounded-md",
            ),
            Template::Default => Self::new(
                ["gray-900", "gray-700", "blue-500", "white", "gray-900"],
                "Inter",
                "Inter",
                "rounded-lg",
            ),
        }
    }

    /// CSS custom properties for the page `<style>` block.
    pub fn css_variables(&self) -> String {
        let mut vars = vec![
            ("color-primary", token_ref(&self.colors.primary)),
            ("color-secondary", token_ref(&self.colors.secondary)),
            ("color-accent", token_ref(&self.colors.accent)),
        ];
        if let Some(background) = &self.colors.background {
            vars.push(("color-background", token_ref(background)));
        }
        if let Some(foreground) = &self.colors.foreground {
            vars.push(("color-foreground", token_ref(foreground)));
        }
        if let Some(fonts) = &self.fonts {
            if let Some(heading) = &fonts.heading {
                vars.push(("font-heading", font_stack(heading)));
            }
            if let Some(body) = &fonts.body {
                vars.push(("font-body", font_stack(body)));
            }
        }
        if let Some(radius) = &self.border_radius {
            vars.push(("radius", token_ref(radius)));
        }

        let body: String = vars
            .iter()
            .map(|(name, value)| format!("--{}:{};", name, value))
            .collect();
        format!(":root{{{}}}", body)
    }
}

/// Token names may only contain `[A-Za-z0-9-]`; anything else is dropped so
/// config values cannot break out of the style block.
fn token_ref(token: &str) -> String {
    let clean: String = token
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect();
    format!("var(--{})", clean)
}

fn font_stack(family: &str) -> String {
    let clean: String = family
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == ' ' || *c == '-')
        .collect();
    format!("\"{}\",sans-serif", clean)
}
