use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn inkboard_cmd() -> Command {
    Command::cargo_bin("inkboard").expect("binary exists")
}

#[test]
fn inkboard_help_prints_usage() {
    inkboard_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Interactive whiteboard with pen, eraser, and text tools",
        ));
}

#[test]
fn unknown_tool_is_rejected() {
    inkboard_cmd()
        .env("XDG_CONFIG_HOME", TempDir::new().unwrap().path())
        .args(["--tool", "scribble"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown tool 'scribble'"));
}

#[test]
fn unknown_color_is_rejected() {
    inkboard_cmd()
        .env("XDG_CONFIG_HOME", TempDir::new().unwrap().path())
        .args(["--color", "chartreuse-ish"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown color"));
}

#[test]
fn init_config_writes_example_once() {
    let temp = TempDir::new().unwrap();

    inkboard_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("--init-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created default config"));

    let config_path = temp.path().join("inkboard").join("config.toml");
    let contents = std::fs::read_to_string(&config_path).unwrap();
    assert!(contents.contains("[drawing]"));
    assert!(contents.contains("[keybindings]"));

    // A second run refuses to clobber the existing file.
    inkboard_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("--init-config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn invalid_config_toml_fails_loudly() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("inkboard");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "this is [not] = toml =").unwrap();

    inkboard_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .args(["--tool", "bogus"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config"));
}
