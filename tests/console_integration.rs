use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn rtlkit(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("rtlkit").unwrap();
    cmd.current_dir(dir).env_remove("RTLKIT_LOG").arg("--no-color");
    cmd
}

#[test]
fn test_demo_prints_visual_text_in_panel() {
    let temp_dir = tempfile::tempdir().unwrap();

    rtlkit(temp_dir.path())
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("?וישכע דבוע הז םאה !םלוע םולש"))
        .stdout(predicate::str::contains(" תכרעמ תקידב "))
        .stdout(predicate::str::contains(".רבוחמ Gemini ןכוסה"))
        .stdout(predicate::str::contains(".תוניקת תוכרעמה לכ"))
        .stdout(predicate::str::contains("╭"))
        .stdout(predicate::str::contains("╯"));
}

#[test]
fn test_demo_accepts_custom_body() {
    let temp_dir = tempfile::tempdir().unwrap();

    rtlkit(temp_dir.path())
        .args(["demo", "--title", "כותרת", "--body", "שורה אחת\\nשורה שתיים"])
        .assert()
        .success()
        .stdout(predicate::str::contains(" תרתוכ "))
        .stdout(predicate::str::contains("תחא הרוש"))
        .stdout(predicate::str::contains("םייתש הרוש"));
}

#[test]
fn test_reorder_arguments() {
    let temp_dir = tempfile::tempdir().unwrap();

    rtlkit(temp_dir.path())
        .args(["reorder", "מחיר", "100", "שקל"])
        .assert()
        .success()
        .stdout("לקש 100 ריחמ\n");
}

#[test]
fn test_reorder_stdin_keeps_lines() {
    let temp_dir = tempfile::tempdir().unwrap();

    rtlkit(temp_dir.path())
        .arg("reorder")
        .write_stdin("שלום עולם!\nplain text\n")
        .assert()
        .success()
        .stdout("!םלוע םולש\nplain text\n");
}

#[test]
fn test_reorder_rejects_invalid_utf8() {
    let temp_dir = tempfile::tempdir().unwrap();

    rtlkit(temp_dir.path())
        .arg("reorder")
        .write_stdin(&b"ab\xffcd"[..])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("valid up to byte 2"));
}

#[test]
fn test_config_init_writes_defaults() {
    let temp_dir = tempfile::tempdir().unwrap();

    rtlkit(temp_dir.path())
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"templates_dir\": \"templates/bodies\""));

    let written = fs::read_to_string(temp_dir.path().join(".rtlkit").join("config.json")).unwrap();
    assert!(written.contains("\"template_pattern\": \"*.html\""));

    rtlkit(temp_dir.path())
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn test_no_command_prints_help() {
    let temp_dir = tempfile::tempdir().unwrap();

    rtlkit(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_text_commands_ignore_broken_template_pattern() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_dir = temp_dir.path().join(".rtlkit");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.json"), r#"{ "template_pattern": "[x" }"#).unwrap();

    rtlkit(temp_dir.path())
        .args(["reorder", "שלום"])
        .assert()
        .success()
        .stdout("םולש\n");

    rtlkit(temp_dir.path())
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("╭"));

    rtlkit(temp_dir.path())
        .arg("spacing")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid pattern"));
}

#[test]
fn test_reorder_stdin_keeps_carriage_returns() {
    let temp_dir = tempfile::tempdir().unwrap();

    rtlkit(temp_dir.path())
        .arg("reorder")
        .write_stdin("שלום\rעולם\n")
        .assert()
        .success()
        .stdout("םולש\rםלוע\n");
}
