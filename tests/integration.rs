// SPDX-License-Identifier: MPL-2.0
use swatchbook::catalog::{self, Catalog, CatalogEntry, Location};
use swatchbook::config::{self, Config, GeneralConfig};
use swatchbook::error::CatalogError;
use swatchbook::i18n::fluent::I18n;
use swatchbook::navigation::{Intent, Sequencer, Slide};
use tempfile::tempdir;

fn fabrics(names: &[&str]) -> Vec<CatalogEntry> {
    names
        .iter()
        .map(|name| CatalogEntry {
            filename: format!("{}.jpg", name.to_lowercase()),
            name: (*name).to_string(),
            quantity: 3,
        })
        .collect()
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    let initial_config = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("intro-empty"), "No pillowcases found.");

    let french_config = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn every_catalog_error_has_a_translation() {
    let i18n = I18n::new(Some("en-US".into()), &Config::default());
    let errors = [
        CatalogError::Transport("refused".into()),
        CatalogError::HttpStatus(404),
        CatalogError::Io("missing".into()),
        CatalogError::Malformed("eof".into()),
        CatalogError::NotAnArray,
    ];
    for error in errors {
        let text = i18n.tr(error.i18n_key());
        assert!(!text.starts_with("MISSING"), "{} untranslated", error.i18n_key());
    }
}

#[test]
fn full_walk_through_a_three_fabric_catalog() {
    let entries = fabrics(&["Gingham", "Paisley", "Toile"]);
    let mut seq = Sequencer::new();
    seq.set_catalog_len(entries.len());

    let mut visited = vec![seq.current_slide(&entries)];
    while seq.apply(Intent::Next) {
        visited.push(seq.current_slide(&entries));
    }

    assert_eq!(
        visited,
        vec![
            Slide::Splash,
            Slide::Intro,
            Slide::Fabric(&entries[0]),
            Slide::Fabric(&entries[1]),
            Slide::Fabric(&entries[2]),
        ]
    );
    assert_eq!(seq.fabric_position().map(|p| (p.index, p.total)), Some((3, 3)));

    while seq.apply(Intent::Previous) {}
    assert_eq!(seq.current_slide(&entries), Slide::Splash);
}

#[test]
fn catalog_arriving_mid_session_extends_navigation() {
    let mut seq = Sequencer::new();
    seq.next();
    assert!(!seq.next(), "intro is the end until the catalog arrives");

    let entries = fabrics(&["Gingham"]);
    seq.set_catalog_len(entries.len());
    assert!(seq.next());
    assert_eq!(seq.current_slide(&entries), Slide::Fabric(&entries[0]));
}

#[tokio::test]
async fn local_manifest_loads_into_catalog() {
    let dir = tempdir().expect("temp dir");
    let manifest = dir.path().join("pillowcases.json");
    std::fs::write(
        &manifest,
        r#"[
            {"filename": "gingham.jpg", "name": "Gingham", "quantity": 3},
            {"filename": "toile.jpg", "name": "Toile", "quantity": 0, "note": "ignored"}
        ]"#,
    )
    .expect("write manifest");

    let catalog = Catalog::from(catalog::load(Location::Local(manifest)).await);
    assert!(catalog.is_loaded());
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.entries()[1].name, "Toile");
}

#[tokio::test]
async fn object_manifest_is_rejected() {
    let dir = tempdir().expect("temp dir");
    let manifest = dir.path().join("pillowcases.json");
    std::fs::write(&manifest, r#"{"items": []}"#).expect("write manifest");

    let catalog = Catalog::from(catalog::load(Location::Local(manifest)).await);
    assert_eq!(catalog.error(), Some(&CatalogError::NotAnArray));
    assert!(catalog.is_empty());
}
