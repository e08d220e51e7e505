use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

const OLD_BODY: &str = r#"<table>
  <tr>
    <td style="padding-top: 13px;">
      <!-- Top border above subject -->
      <div style="border-top: 1px solid #000000; margin-bottom: 13px;"></div>
    </td>
  </tr>
  <tr>
    <td style="padding-top: 24px;">
      <div style="text-align: right; padding-bottom: 10px;">נקודה</div>
    </td>
  </tr>
</table>
"#;

const NEW_BODY: &str = r#"<table>
  <tr>
    <td style="padding-top: 20px;">
      <!-- Top border above subject -->
      <div style="border-top: 1px solid #000000; margin-bottom: 20px;"></div>
    </td>
  </tr>
  <tr>
    <td style="padding-top: 20px;">
      <div style="text-align: right; padding-bottom: 20px;">נקודה</div>
    </td>
  </tr>
</table>
"#;

fn rtlkit(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("rtlkit").unwrap();
    cmd.current_dir(dir).env_remove("RTLKIT_LOG").arg("--no-color");
    cmd
}

fn bodies(dir: &Path) -> std::path::PathBuf {
    let bodies = dir.join("templates").join("bodies");
    fs::create_dir_all(&bodies).unwrap();
    bodies
}

#[test]
fn test_spacing_rewrites_and_reports() {
    let temp_dir = tempfile::tempdir().unwrap();
    let bodies = bodies(temp_dir.path());
    fs::write(bodies.join("welcome.html"), OLD_BODY).unwrap();
    fs::write(bodies.join("notes.txt"), OLD_BODY).unwrap();

    rtlkit(temp_dir.path())
        .arg("spacing")
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 1 body template files"))
        .stdout(predicate::str::contains("Processing: templates/bodies/welcome.html"))
        .stdout(predicate::str::contains("  ✅ Updated"))
        .stdout(predicate::str::contains("✅ All body templates processed!"));

    assert_eq!(fs::read_to_string(bodies.join("welcome.html")).unwrap(), NEW_BODY);
    // Not matched by *.html
    assert_eq!(fs::read_to_string(bodies.join("notes.txt")).unwrap(), OLD_BODY);
}

#[test]
fn test_spacing_second_run_changes_nothing() {
    let temp_dir = tempfile::tempdir().unwrap();
    let bodies = bodies(temp_dir.path());
    fs::write(bodies.join("a.html"), OLD_BODY).unwrap();

    rtlkit(temp_dir.path()).arg("spacing").assert().success();

    rtlkit(temp_dir.path())
        .arg("update-body-spacing")
        .assert()
        .success()
        .stdout(predicate::str::contains("  ⚠️  No changes made"))
        .stdout(predicate::str::contains("Updated").not());

    assert_eq!(fs::read_to_string(bodies.join("a.html")).unwrap(), NEW_BODY);
}

#[test]
fn test_spacing_dry_run_leaves_files() {
    let temp_dir = tempfile::tempdir().unwrap();
    let bodies = bodies(temp_dir.path());
    fs::write(bodies.join("a.html"), OLD_BODY).unwrap();

    rtlkit(temp_dir.path())
        .args(["spacing", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  🔍 Would update"));

    assert_eq!(fs::read_to_string(bodies.join("a.html")).unwrap(), OLD_BODY);
}

#[test]
fn test_spacing_verbose_lists_rules() {
    let temp_dir = tempfile::tempdir().unwrap();
    let bodies = bodies(temp_dir.path());
    fs::write(bodies.join("a.html"), OLD_BODY).unwrap();

    rtlkit(temp_dir.path())
        .args(["spacing", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "rules: body-top, subject-border, bullet-spacing, section-gap",
        ));
}

#[test]
fn test_spacing_custom_dir_and_pattern() {
    let temp_dir = tempfile::tempdir().unwrap();
    let mail = temp_dir.path().join("mail");
    fs::create_dir_all(&mail).unwrap();
    fs::write(mail.join("a.htm"), OLD_BODY).unwrap();

    rtlkit(temp_dir.path())
        .args(["spacing", "--dir", "mail", "--pattern", "*.htm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 1 body template files"));

    assert_eq!(fs::read_to_string(mail.join("a.htm")).unwrap(), NEW_BODY);
}

#[test]
fn test_spacing_reads_dir_from_config() {
    let temp_dir = tempfile::tempdir().unwrap();
    let mail = temp_dir.path().join("mail");
    fs::create_dir_all(&mail).unwrap();
    fs::write(mail.join("a.html"), OLD_BODY).unwrap();

    let config_dir = temp_dir.path().join(".rtlkit");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.json"),
        r#"{ "templates_dir": "mail" }"#,
    )
    .unwrap();

    rtlkit(temp_dir.path()).arg("spacing").assert().success();

    assert_eq!(fs::read_to_string(mail.join("a.html")).unwrap(), NEW_BODY);
}

#[test]
fn test_spacing_without_templates_dir() {
    let temp_dir = tempfile::tempdir().unwrap();

    rtlkit(temp_dir.path())
        .arg("spacing")
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 0 body template files"))
        .stdout(predicate::str::contains("✅ All body templates processed!"));
}

#[test]
fn test_spacing_fails_on_non_utf8_template() {
    let temp_dir = tempfile::tempdir().unwrap();
    let bodies = bodies(temp_dir.path());
    fs::write(bodies.join("a.html"), OLD_BODY).unwrap();
    fs::write(bodies.join("b.html"), b"<p>caf\xe9</p>").unwrap();

    rtlkit(temp_dir.path())
        .arg("spacing")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Processing: templates/bodies/b.html"))
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("not valid UTF-8"));

    // Files before the failure keep their rewrite
    assert_eq!(fs::read_to_string(bodies.join("a.html")).unwrap(), NEW_BODY);
    assert_eq!(fs::read(bodies.join("b.html")).unwrap(), b"<p>caf\xe9</p>");
}

#[test]
fn test_invalid_config_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_dir = temp_dir.path().join("cfg");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.json"), "{ nope").unwrap();

    rtlkit(temp_dir.path())
        .args(["--config-dir", "cfg", "spacing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}
