use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_all_commands() {
    cargo_bin_cmd!("cpupedia")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("topics"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_search_narrows_to_matching_topic() {
    cargo_bin_cmd!("cpupedia")
        .args(["search", "open"])
        .assert()
        .success()
        .stdout(predicate::str::contains("riscv"))
        .stdout(predicate::str::contains("RISC-V"))
        .stdout(predicate::str::contains("cpu-def").not());
}

#[test]
fn test_search_is_case_insensitive() {
    cargo_bin_cmd!("cpupedia")
        .args(["search", "RISCV"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No topics match"));

    cargo_bin_cmd!("cpupedia")
        .args(["search", "RISC-V"])
        .assert()
        .success()
        .stdout(predicate::str::contains("riscv"));
}

#[test]
fn test_search_without_match_succeeds_with_notice() {
    cargo_bin_cmd!("cpupedia")
        .args(["search", "zzz-no-match"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No topics match 'zzz-no-match'."));
}

#[test]
fn test_topics_list_shows_every_topic() {
    cargo_bin_cmd!("cpupedia")
        .args(["topics", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cpu-def"))
        .stdout(predicate::str::contains("riscv"));
}

#[test]
fn test_topics_show_prints_the_full_text() {
    cargo_bin_cmd!("cpupedia")
        .args(["topics", "show", "cpu-def"])
        .assert()
        .success()
        .stdout(predicate::str::contains("What is a CPU?"))
        .stdout(predicate::str::contains("arithmetic"));
}

#[test]
fn test_topics_show_unknown_id_fails() {
    cargo_bin_cmd!("cpupedia")
        .args(["topics", "show", "z80"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No topic with id 'z80'"));
}

#[test]
fn test_config_path_honors_home_override() {
    let dir = tempfile::tempdir().unwrap();
    cargo_bin_cmd!("cpupedia")
        .args(["config", "path"])
        .env("CPUPEDIA_HOME", dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"))
        .stdout(predicate::str::contains(dir.path().to_str().unwrap()));
}

#[test]
fn test_config_init_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();

    cargo_bin_cmd!("cpupedia")
        .args(["config", "init"])
        .env("CPUPEDIA_HOME", dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config at"));

    cargo_bin_cmd!("cpupedia")
        .args(["config", "init"])
        .env("CPUPEDIA_HOME", dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Config already exists"));
}

#[test]
fn test_log_filter_writes_a_log_file() {
    let dir = tempfile::tempdir().unwrap();

    cargo_bin_cmd!("cpupedia")
        .args(["topics", "list"])
        .env("CPUPEDIA_HOME", dir.path())
        .env("CPUPEDIA_LOG", "debug")
        .assert()
        .success();

    let entries: Vec<_> = std::fs::read_dir(dir.path().join("logs"))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(entries.len(), 1);
    let contents = std::fs::read_to_string(entries[0].path()).unwrap();
    assert!(contents.contains("cpupedia starting"));
}

#[test]
fn test_tui_refuses_to_start_without_a_terminal() {
    // assert_cmd pipes stderr, so the terminal check fails.
    cargo_bin_cmd!("cpupedia")
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires a terminal"));
}
