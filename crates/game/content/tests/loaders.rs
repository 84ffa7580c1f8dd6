use std::fs;

use powers_content::{BUNDLED_DATA_DIR, ConfigLoader, ContentFactory, PowerLoader};
use powers_core::MouseButton;
use tempfile::TempDir;

#[test]
fn bundled_content_loads() {
    let factory = ContentFactory::bundled();
    assert_eq!(factory.data_dir().to_str(), Some(BUNDLED_DATA_DIR));

    let config = factory.load_config().unwrap();
    assert_eq!(config.ticks_per_second, 25);

    let catalog = factory.load_powers().unwrap();
    assert!(!catalog.is_empty());

    let paradrop = catalog.get("ParaDrop").unwrap();
    assert!(paradrop.allow_multiple);
    assert!(paradrop.targeting.is_some());

    let gps = catalog.get("GpsSatellite").unwrap();
    assert!(gps.one_shot);
    assert!(gps.targeting.is_none());

    let airstrike = catalog.get("Airstrike").unwrap();
    assert_eq!(airstrike.targeting.as_ref().unwrap().button, MouseButton::Left);
}

#[test]
fn factory_reads_custom_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.toml"), "ticks_per_second = 10\n").unwrap();
    fs::write(
        dir.path().join("powers.ron"),
        r#"(powers: [(order_name: "IronCurtain", charge_time: 3, one_shot: true)])"#,
    )
    .unwrap();

    let factory = ContentFactory::new(dir.path());
    assert_eq!(factory.load_config().unwrap().ticks_per_second, 10);

    let catalog = factory.load_powers().unwrap();
    assert_eq!(catalog.len(), 1);
    assert_eq!(
        catalog.get("IronCurtain").unwrap().charge_ticks(10),
        30
    );
}

#[test]
fn missing_files_report_their_path() {
    let dir = TempDir::new().unwrap();
    let err = PowerLoader::load(&dir.path().join("powers.ron")).unwrap_err();
    assert!(err.to_string().contains("powers.ron"));

    let err = ConfigLoader::load(&dir.path().join("config.toml")).unwrap_err();
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn zero_tick_rate_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "ticks_per_second = 0\n").unwrap();

    assert!(ConfigLoader::load(&path).is_err());
}
