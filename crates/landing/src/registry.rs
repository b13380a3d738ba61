// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Client registry — the immutable map of client id → `ClientConfig`.
//!
//! Built once at startup (usually from a directory of YAML files) and then
//! passed by reference to whatever renders pages. Nothing mutates it after
//! construction.

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::seo::hours::malformed_days;
use regex::Regex;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static CLIENT_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9-]+$").expect("static regex"));

#[derive(Debug, Clone, Default)]
pub struct ClientRegistry {
    clients: BTreeMap<String, ClientConfig>,
}

impl ClientRegistry {
    /// Validate and index client configs.
    ///
    /// Rejects empty ids, ids outside `[a-z0-9-]`, duplicate ids and weekday
    /// opening hours that are not `<H>h<MM> - <H>h<MM>` or a closed marker.
    pub fn new(configs: impl IntoIterator<Item = ClientConfig>) -> Result<Self> {
        let mut clients = BTreeMap::new();
        for config in configs {
            validate(&config)?;
            if clients.contains_key(&config.id) {
                return Err(Error::DuplicateClient(config.id));
            }
            clients.insert(config.id.clone(), config);
        }
        Ok(ClientRegistry { clients })
    }

    /// Parse one client YAML file.
    pub fn load_file(path: &Path) -> Result<ClientConfig> {
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        serde_yaml_ng::from_str(&text).map_err(|e| Error::parse(path, e))
    }

    /// Load every `*.yaml` / `*.yml` file of a directory, in file name order.
    pub fn load_dir(dir: &Path) -> Result<Self> {
        let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)
            .map_err(|e| Error::io(dir, e))?
            .map(|entry| entry.map(|e| e.path()).map_err(|e| Error::io(dir, e)))
            .collect::<Result<_>>()?;
        paths.retain(|p| p.is_file() && is_yaml(p));
        paths.sort();

        let mut configs = Vec::with_capacity(paths.len());
        for path in &paths {
            let config = Self::load_file(path)?;
            let path_display = path.display().to_string();
            diagnostics::debug!("Loaded client {client} from {path}", client: config.id.as_str(), path: path_display);
            configs.push(config);
        }

        let registry = Self::new(configs)?;
        let count = registry.len();
        let dir_display = dir.display().to_string();
        diagnostics::info!("Registry ready: {count} clients from {dir}", count: count, dir: dir_display);
        Ok(registry)
    }

    /// Look up a client by id. Unknown ids are `None`.
    pub fn resolve(&self, id: &str) -> Option<&ClientConfig> {
        self.clients.get(id)
    }

    /// All client ids, sorted.
    pub fn client_ids(&self) -> impl Iterator<Item = &str> {
        self.clients.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClientConfig> {
        self.clients.values()
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}

fn validate(config: &ClientConfig) -> Result<()> {
    if config.id.trim().is_empty() {
        return Err(Error::EmptyClientId);
    }
    if !CLIENT_ID.is_match(&config.id) {
        return Err(Error::InvalidClientId(config.id.clone()));
    }
    if let Some(hours) = &config.business.opening_hours
        && let Some((day, value)) = malformed_days(hours).into_iter().next()
    {
        return Err(Error::MalformedHours {
            client: config.id.clone(),
            day: day.schema_name(),
            value: value.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::*;

    fn client(id: &str) -> ClientConfig {
        ClientConfig {
            id: id.to_string(),
            template: Template::Plumber,
            domain: format!("{}.fr", id),
            status: ClientStatus::Active,
            business: BusinessInfo {
                name: "Plomberie Dubois".to_string(),
                logo: None,
                phone: "06 12 34 56 78".to_string(),
                email: "contact@dubois-plomberie.fr".to_string(),
                address: Address {
                    street: "123 rue de la République".to_string(),
                    city: "Lyon".to_string(),
                    postal_code: "69001".to_string(),
                    country: "France".to_string(),
                    coordinates: None,
                },
                opening_hours: None,
                social_media: None,
            },
            seo: SeoConfig {
                title: "Plombier Lyon".to_string(),
                description: "Dépannage".to_string(),
                keywords: vec![],
                og_image: None,
                canonical_url: None,
            },
            content: ContentConfig {
                hero: HeroContent {
                    headline: "Votre Plombier".to_string(),
                    subheadline: "Intervention rapide".to_string(),
                    cta: "Appeler".to_string(),
                    cta_secondary: None,
                    features: vec![],
                    background_image: None,
                    stats: vec![],
                },
                services: vec![],
                testimonials: None,
                faqs: None,
                about: None,
                gallery: None,
            },
            theme: None,
            features: Features::default(),
        }
    }

    #[test]
    fn test_resolve_known_and_unknown() {
        let registry = ClientRegistry::new(vec![client("dubois-plomberie"), client("bistrot")])
            .expect("registry");
        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.resolve("dubois-plomberie").map(|c| c.id.as_str()),
            Some("dubois-plomberie")
        );
        assert!(registry.resolve("unknown").is_none());
        assert!(registry.resolve("").is_none());
    }

    #[test]
    fn test_client_ids_sorted() {
        let registry =
            ClientRegistry::new(vec![client("zeta"), client("alpha")]).expect("registry");
        let ids: Vec<_> = registry.client_ids().collect();
        assert_eq!(ids, vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let err = ClientRegistry::new(vec![client("a"), client("a")]).unwrap_err();
        assert!(matches!(err, Error::DuplicateClient(ref id) if id == "a"));
    }

    #[test]
    fn test_empty_id_rejected() {
        let err = ClientRegistry::new(vec![client("  ")]).unwrap_err();
        assert!(matches!(err, Error::EmptyClientId));
    }

    #[test]
    fn test_path_like_ids_rejected() {
        for id in ["../x", "a/b", " dubois", "Dubois", "dubois.fr", "a\\b"] {
            let err = ClientRegistry::new(vec![client(id)]).unwrap_err();
            assert!(
                matches!(err, Error::InvalidClientId(ref bad) if bad == id),
                "accepted {:?}",
                id
            );
        }
    }

    #[test]
    fn test_slug_ids_accepted() {
        let registry = ClientRegistry::new(vec![client("dubois-plomberie"), client("cabinet-2")])
            .expect("registry");
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_malformed_hours_rejected() {
        let mut config = client("a");
        config.business.opening_hours = Some(OpeningHours {
            monday: Some("8h00 - 19h00".to_string()),
            tuesday: Some("8h00 to 19h00".to_string()),
            emergency: Some("24h/24 7j/7".to_string()),
            ..Default::default()
        });
        let err = ClientRegistry::new(vec![config]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "client 'a': malformed opening hours for Tuesday: '8h00 to 19h00'"
        );
    }

    #[test]
    fn test_empty_registry() {
        let registry = ClientRegistry::default();
        assert!(registry.is_empty());
        assert!(registry.resolve("a").is_none());
    }
}
