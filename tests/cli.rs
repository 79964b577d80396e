use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn estimator(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("estimator").unwrap();
    cmd.env("ESTIMATOR_CONFIG_DIR", config_dir.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn catalog_lists_predefined_services() {
    let config = TempDir::new().unwrap();
    estimator(&config)
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("Trade Show Booth Design"))
        .stdout(predicate::str::contains("General tasks for custom services"));
}

#[test]
fn catalog_filters_by_task() {
    let config = TempDir::new().unwrap();
    estimator(&config)
        .args(["catalog", "--task", "events"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Predefined services for Events"))
        .stdout(predicate::str::contains("Webinar Setup & Promotion"))
        .stdout(predicate::str::contains("Poster Design").not());
}

#[test]
fn catalog_rejects_unknown_task() {
    let config = TempDir::new().unwrap();
    estimator(&config)
        .args(["catalog", "--task", "Astrology"])
        .assert()
        .failure();
}

#[test]
fn estimate_from_json_items_file() {
    let config = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    let items = work.path().join("items.json");
    std::fs::write(
        &items,
        r#"[
            {"department": "Sales", "country": "BE", "service": "Poster Design", "quantity": 2},
            {"department": "Sales", "country": "BE", "service": "Infographic Design"}
        ]"#,
    )
    .unwrap();
    let output = work.path().join("estimate.xlsx");

    estimator(&config)
        .arg("estimate")
        .arg("--items")
        .arg(&items)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Estimated Savings: EUR 550.00"))
        .stdout(predicate::str::contains("Saved"));

    let bytes = std::fs::read(&output).unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn estimate_with_empty_items_file_fails() {
    let config = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    let items = work.path().join("items.json");
    std::fs::write(&items, "[]").unwrap();

    estimator(&config)
        .arg("estimate")
        .arg("--items")
        .arg(&items)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please add at least one service"));
}

#[test]
fn session_reads_commands_from_stdin() {
    let config = TempDir::new().unwrap();
    estimator(&config)
        .write_stdin("add\n\n\n\n1\n2\nestimate\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Added: 2 x Poster Design"))
        .stdout(predicate::str::contains("Total Estimated Savings: EUR 300.00"));
}

#[test]
fn session_estimate_on_empty_list_warns_and_continues() {
    let config = TempDir::new().unwrap();
    estimator(&config)
        .arg("session")
        .write_stdin("estimate\nhelp\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Error: Please add at least one service to the list, then run the estimate.",
        ))
        .stdout(predicate::str::contains("Commands:"));
}

#[test]
fn config_shows_settings_path() {
    let config = TempDir::new().unwrap();
    estimator(&config)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("config.json"))
        .stdout(predicate::str::contains("Currency code:      EUR"));
}

#[test]
fn init_writes_settings_file() {
    let config = TempDir::new().unwrap();
    estimator(&config)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings written to"));

    let contents = std::fs::read_to_string(config.path().join("config.json")).unwrap();
    assert!(contents.contains("\"currency_code\": \"EUR\""));
}

#[test]
fn catalog_ignores_corrupt_settings() {
    let config = TempDir::new().unwrap();
    std::fs::write(config.path().join("config.json"), "{ not json").unwrap();

    estimator(&config)
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("Poster Design"));

    estimator(&config)
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse settings file"));
}
