// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Registry loading from YAML directories.

use landing::config::{ClientStatus, Template, Weekday};
use landing::{ClientRegistry, Error};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

const MINIMAL_CLIENT: &str = r#"
id: "garage-martin"
template: default
domain: "garage-martin.fr"
business:
  name: "Garage Martin"
  phone: "04 72 00 00 00"
  email: "contact@garage-martin.fr"
  address:
    street: "8 avenue Jean Jaurès"
    city: "Villeurbanne"
    postal_code: "69100"
    country: "France"
seo:
  title: "Garage Martin"
  description: "Entretien et réparation toutes marques."
content:
  hero:
    headline: "Votre garage de quartier"
    subheadline: "Depuis 1992"
    cta: "Prendre rendez-vous"
"#;

fn repo_clients_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../clients")
}

#[test]
fn test_load_repo_clients() -> Result<(), Box<dyn std::error::Error>> {
    let registry = ClientRegistry::load_dir(&repo_clients_dir())?;

    let ids: Vec<&str> = registry.client_ids().collect();
    assert_eq!(ids, vec!["bistrot-des-halles", "dubois-plomberie"]);

    let dubois = registry.resolve("dubois-plomberie").ok_or("missing dubois")?;
    assert_eq!(dubois.template, Template::Plumber);
    assert_eq!(dubois.status, ClientStatus::Active);
    assert_eq!(dubois.content.services.len(), 6);
    assert_eq!(dubois.content.faqs.as_ref().map(Vec::len), Some(5));
    let hours = dubois.business.opening_hours.as_ref().ok_or("missing hours")?;
    assert_eq!(hours.day(Weekday::Sunday), Some("Fermé"));

    let bistrot = registry.resolve("bistrot-des-halles").ok_or("missing bistrot")?;
    assert_eq!(bistrot.status, ClientStatus::Draft);
    assert!(bistrot.theme.is_none());

    assert!(registry.resolve("unknown").is_none());
    Ok(())
}

#[test]
fn test_load_dir_ignores_other_files() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    fs::write(tmp.path().join("garage-martin.yml"), MINIMAL_CLIENT)?;
    fs::write(tmp.path().join("README.md"), "# clients")?;
    fs::create_dir(tmp.path().join("archive.yaml"))?;

    let registry = ClientRegistry::load_dir(tmp.path())?;
    assert_eq!(registry.len(), 1);

    let garage = registry.resolve("garage-martin").ok_or("missing garage")?;
    assert_eq!(garage.status, ClientStatus::Active);
    assert!(garage.content.services.is_empty());
    assert!(garage.business.opening_hours.is_none());
    Ok(())
}

#[test]
fn test_load_order_is_stable() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    for id in ["zeta-garage", "alpha-garage", "mid-garage"] {
        let yaml = MINIMAL_CLIENT.replace("garage-martin", id);
        fs::write(tmp.path().join(format!("{}.yaml", id)), yaml)?;
    }

    let first = ClientRegistry::load_dir(tmp.path())?;
    let second = ClientRegistry::load_dir(tmp.path())?;
    let first_ids: Vec<&str> = first.client_ids().collect();
    let second_ids: Vec<&str> = second.client_ids().collect();
    assert_eq!(first_ids, vec!["alpha-garage", "mid-garage", "zeta-garage"]);
    assert_eq!(first_ids, second_ids);
    assert!(first.iter().zip(second.iter()).all(|(a, b)| a == b));
    Ok(())
}

#[test]
fn test_invalid_id_rejected_at_load() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    fs::write(
        tmp.path().join("garage.yaml"),
        MINIMAL_CLIENT.replace(r#"id: "garage-martin""#, r#"id: "garages/martin""#),
    )?;

    let err = ClientRegistry::load_dir(tmp.path()).expect_err("slash in id must fail");
    assert!(matches!(err, Error::InvalidClientId(ref id) if id == "garages/martin"));
    Ok(())
}

#[test]
fn test_empty_dir() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    let registry = ClientRegistry::load_dir(tmp.path())?;
    assert!(registry.is_empty());
    Ok(())
}

#[test]
fn test_missing_dir() {
    let tmp = tempdir().expect("tempdir");
    let missing = tmp.path().join("nope");
    let err = ClientRegistry::load_dir(&missing).expect_err("missing dir must fail");
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn test_parse_error_names_file() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    fs::write(tmp.path().join("broken.yaml"), "id: [unterminated")?;

    let err = ClientRegistry::load_dir(tmp.path()).expect_err("broken yaml must fail");
    assert!(matches!(err, Error::Parse { .. }));
    assert!(err.to_string().contains("broken.yaml"));
    Ok(())
}

#[test]
fn test_duplicate_ids_across_files() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    fs::write(tmp.path().join("a.yaml"), MINIMAL_CLIENT)?;
    fs::write(tmp.path().join("b.yaml"), MINIMAL_CLIENT)?;

    let err = ClientRegistry::load_dir(tmp.path()).expect_err("duplicates must fail");
    assert!(matches!(err, Error::DuplicateClient(ref id) if id == "garage-martin"));
    Ok(())
}

#[test]
fn test_malformed_hours_rejected_at_load() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempdir()?;
    let yaml = MINIMAL_CLIENT.replace(
        "seo:",
        "  opening_hours:\n    monday: \"8h00 - 19h00\"\n    tuesday: \"from 8 to 7\"\nseo:",
    );
    fs::write(tmp.path().join("garage-martin.yaml"), yaml)?;

    let err = ClientRegistry::load_dir(tmp.path()).expect_err("bad hours must fail");
    assert!(matches!(err, Error::MalformedHours { day: "Tuesday", .. }));
    assert!(err.to_string().contains("from 8 to 7"));
    Ok(())
}
