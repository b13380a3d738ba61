// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! schema.org JSON-LD for a client's business.
//!
//! Optional parts of the graph are omitted from the output, never written as
//! `null`: every optional field carries `skip_serializing_if`.

use super::SiteOrigin;
use super::hours::{OpeningHoursSpecification, opening_hours_specification};
use crate::config::{BusinessInfo, Service};
use serde::Serialize;

pub const SCHEMA_CONTEXT: &str = "https://schema.org";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalBusiness {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(rename = "@id")]
    pub id: String,
    pub url: String,
    pub telephone: String,
    pub email: String,
    pub address: PostalAddress,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo: Option<GeoCoordinates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opening_hours_specification: Option<Vec<OpeningHoursSpecification>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub same_as: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_offer_catalog: Option<OfferCatalog>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub street_address: String,
    pub address_locality: String,
    pub postal_code: String,
    pub address_country: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoCoordinates {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferCatalog {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: &'static str,
    pub item_list_element: Vec<Offer>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub item_offered: OfferedService,
    /// Display string copied verbatim ("120€", "Sur devis")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    /// 1-based, in input order
    pub position: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OfferedService {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreadcrumbList {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub item_list_element: Vec<ListItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub position: usize,
    pub name: String,
    pub item: String,
}

/// Build the `LocalBusiness` object for a business and its services.
///
/// `hasOfferCatalog` is only present for a non-empty services list.
pub fn local_business(
    business: &BusinessInfo,
    services: Option<&[Service]>,
    origin: &SiteOrigin,
) -> LocalBusiness {
    let base_url = origin.base_url(business);
    let address = &business.address;

    LocalBusiness {
        context: SCHEMA_CONTEXT,
        kind: "LocalBusiness",
        name: business.name.clone(),
        image: business.logo.clone(),
        id: format!("{}/#business", base_url),
        url: base_url,
        telephone: business.phone.clone(),
        email: business.email.clone(),
        address: PostalAddress {
            kind: "PostalAddress",
            street_address: address.street.clone(),
            address_locality: address.city.clone(),
            postal_code: address.postal_code.clone(),
            address_country: address.country.clone(),
        },
        geo: address.coordinates.map(|c| GeoCoordinates {
            kind: "GeoCoordinates",
            latitude: c.lat,
            longitude: c.lng,
        }),
        opening_hours_specification: business
            .opening_hours
            .as_ref()
            .map(opening_hours_specification),
        same_as: business
            .social_media
            .as_ref()
            .map(|social| {
                social
                    .links()
                    .into_iter()
                    .map(|(_, url)| url.to_string())
                    .collect()
            })
            .unwrap_or_default(),
        has_offer_catalog: services
            .filter(|services| !services.is_empty())
            .map(offer_catalog),
    }
}

fn offer_catalog(services: &[Service]) -> OfferCatalog {
    OfferCatalog {
        kind: "OfferCatalog",
        name: "Services",
        item_list_element: services
            .iter()
            .enumerate()
            .map(|(index, service)| Offer {
                kind: "Offer",
                item_offered: OfferedService {
                    kind: "Service",
                    name: service.title.clone(),
                    description: service.description.clone(),
                },
                price: service.price.clone(),
                position: index + 1,
            })
            .collect(),
    }
}

/// `BreadcrumbList` from (label, url) pairs, positions starting at 1.
pub fn breadcrumb_list(items: &[(String, String)]) -> BreadcrumbList {
    BreadcrumbList {
        context: SCHEMA_CONTEXT,
        kind: "BreadcrumbList",
        item_list_element: items
            .iter()
            .enumerate()
            .map(|(index, (name, url))| ListItem {
                kind: "ListItem",
                position: index + 1,
                name: name.clone(),
                item: url.clone(),
            })
            .collect(),
    }
}

/// Serialize for a `<script type="application/ld+json">` element.
///
/// `</` is written as `<\/` (same JSON value) so no string in the payload
/// can terminate the script element.
pub fn to_script_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Address, Coordinates, OpeningHours, SocialMedia};
    use serde_json::Value;

    fn business() -> BusinessInfo {
        BusinessInfo {
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
        }
    }

    fn service(title: &str, price: Option<&str>) -> Service {
        Service {
            icon: "Wrench".to_string(),
            title: title.to_string(),
            description: format!("{} description", title),
            price: price.map(str::to_string),
            highlighted: false,
        }
    }

    fn json(business: &BusinessInfo, services: Option<&[Service]>) -> Value {
        let origin = SiteOrigin::new("https://sites.example.fr");
        serde_json::to_value(local_business(business, services, &origin)).expect("serialize")
    }

    #[test]
    fn test_identity_and_address() {
        let value = json(&business(), None);
        assert_eq!(value["@context"], "https://schema.org");
        assert_eq!(value["@type"], "LocalBusiness");
        assert_eq!(value["@id"], "https://sites.example.fr/#business");
        assert_eq!(value["url"], "https://sites.example.fr");
        assert_eq!(value["telephone"], "06 12 34 56 78");
        assert_eq!(value["address"]["@type"], "PostalAddress");
        assert_eq!(value["address"]["streetAddress"], "123 rue de la République");
        assert_eq!(value["address"]["addressLocality"], "Lyon");
        assert_eq!(value["address"]["postalCode"], "69001");
        assert_eq!(value["address"]["addressCountry"], "France");
    }

    #[test]
    fn test_minimal_business_omits_optional_keys() {
        let value = json(&business(), Some(&[]));
        let object = value.as_object().expect("object");
        for key in [
            "image",
            "geo",
            "openingHoursSpecification",
            "sameAs",
            "hasOfferCatalog",
        ] {
            assert!(!object.contains_key(key), "unexpected key {}", key);
        }
        assert!(object.values().all(|v| !v.is_null()));
    }

    #[test]
    fn test_geo_from_coordinates() {
        let mut b = business();
        b.address.coordinates = Some(Coordinates {
            lat: 45.764043,
            lng: 4.835659,
        });
        let value = json(&b, None);
        assert_eq!(value["geo"]["@type"], "GeoCoordinates");
        assert_eq!(value["geo"]["latitude"], 45.764043);
        assert_eq!(value["geo"]["longitude"], 4.835659);
    }

    #[test]
    fn test_same_as_order() {
        let mut b = business();
        b.social_media = Some(SocialMedia {
            twitter: Some("https://twitter.com/d".to_string()),
            facebook: Some("https://facebook.com/d".to_string()),
            instagram: Some(String::new()),
            linkedin: Some("https://linkedin.com/d".to_string()),
        });
        let value = json(&b, None);
        assert_eq!(
            value["sameAs"],
            serde_json::json!([
                "https://facebook.com/d",
                "https://linkedin.com/d",
                "https://twitter.com/d"
            ])
        );
    }

    #[test]
    fn test_empty_social_media_omits_same_as() {
        let mut b = business();
        b.social_media = Some(SocialMedia::default());
        let value = json(&b, None);
        assert!(value.get("sameAs").is_none());
    }

    #[test]
    fn test_opening_hours_included() {
        let mut b = business();
        b.opening_hours = Some(OpeningHours {
            monday: Some("8h00 - 19h00".to_string()),
            sunday: Some("Fermé".to_string()),
            emergency: Some("24h/24".to_string()),
            ..Default::default()
        });
        let value = json(&b, None);
        let schedule = value["openingHoursSpecification"].as_array().expect("array");
        assert_eq!(schedule.len(), 1);
        assert_eq!(schedule[0]["opens"], "8:00");
        assert_eq!(schedule[0]["closes"], "19:00");
    }

    #[test]
    fn test_offer_catalog() {
        let services = vec![
            service("Débouchage", Some("120€")),
            service("Installation Sanitaire", None),
        ];
        let value = json(&business(), Some(&services));
        let catalog = &value["hasOfferCatalog"];
        assert_eq!(catalog["@type"], "OfferCatalog");
        assert_eq!(catalog["name"], "Services");

        let first = &catalog["itemListElement"][0];
        assert_eq!(first["@type"], "Offer");
        assert_eq!(first["position"], 1);
        assert_eq!(first["price"], "120€");
        assert_eq!(first["itemOffered"]["@type"], "Service");
        assert_eq!(first["itemOffered"]["name"], "Débouchage");

        let second = &catalog["itemListElement"][1];
        assert_eq!(second["position"], 2);
        assert!(second.get("price").is_none());
    }

    #[test]
    fn test_fallback_origin() {
        let value = serde_json::to_value(local_business(&business(), None, &SiteOrigin::unset()))
            .expect("serialize");
        assert_eq!(value["url"], "https://plomberie-dubois.fr");
        assert_eq!(value["@id"], "https://plomberie-dubois.fr/#business");
    }

    #[test]
    fn test_deterministic_output() {
        let services = vec![service("Débouchage", Some("120€"))];
        let origin = SiteOrigin::unset();
        let a = to_script_json(&local_business(&business(), Some(&services), &origin)).expect("a");
        let b = to_script_json(&local_business(&business(), Some(&services), &origin)).expect("b");
        assert_eq!(a, b);
    }

    #[test]
    fn test_breadcrumb_list() {
        let list = breadcrumb_list(&[
            ("Accueil".to_string(), "https://x.fr".to_string()),
            ("Services".to_string(), "https://x.fr/services".to_string()),
        ]);
        let value = serde_json::to_value(&list).expect("serialize");
        assert_eq!(value["@type"], "BreadcrumbList");
        assert_eq!(value["itemListElement"][0]["position"], 1);
        assert_eq!(value["itemListElement"][1]["position"], 2);
        assert_eq!(value["itemListElement"][1]["item"], "https://x.fr/services");
    }

    #[test]
    fn test_script_json_escapes_closing_tag() {
        let mut b = business();
        b.name = "Evil </script><script>alert(1)".to_string();
        let payload = to_script_json(&local_business(&b, None, &SiteOrigin::unset()))
            .expect("serialize");
        assert!(!payload.contains("</script>"));
        let parsed: Value = serde_json::from_str(&payload).expect("still valid json");
        assert_eq!(parsed["name"], "Evil </script><script>alert(1)");
    }
}
