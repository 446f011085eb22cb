//! End-to-end CLI tests for allyconnect

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get a command pointing to the allyconnect binary, run from an empty
/// directory so no stray `allyconnect.toml` is picked up.
fn allyconnect(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("allyconnect");
    cmd.current_dir(dir.path());
    cmd
}

fn stdout_json(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).unwrap()
}

// ============================================
// Basic CLI Tests
// ============================================

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        let dir = TempDir::new().unwrap();
        allyconnect(&dir)
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("preview"))
            .stdout(predicate::str::contains("schema"));
    }

    #[test]
    fn shows_version() {
        let dir = TempDir::new().unwrap();
        allyconnect(&dir)
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn rejects_zero_interval() {
        let dir = TempDir::new().unwrap();
        allyconnect(&dir)
            .args(["preview", "--interval-ms", "0"])
            .assert()
            .failure();
    }
}

// ============================================
// Preview
// ============================================

mod preview {
    use super::*;

    #[test]
    fn zero_ticks_prints_first_slide_only() {
        let dir = TempDir::new().unwrap();
        allyconnect(&dir)
            .args(["preview", "--ticks", "0"])
            .assert()
            .success()
            .stdout("[1/3] Connect with Alumni Network -> Join Network\n");
    }

    #[test]
    fn advances_on_timer() {
        let dir = TempDir::new().unwrap();
        let output = allyconnect(&dir)
            .args(["preview", "--ticks", "3", "--interval-ms", "40"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        let stdout = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = stdout.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("[1/3] "));
        assert!(lines.iter().all(|line| line.contains("/3] ")));
    }

    #[test]
    fn spotlight_deck_starts_with_first_alumni() {
        let dir = TempDir::new().unwrap();
        allyconnect(&dir)
            .args(["preview", "--deck", "spotlight", "--ticks", "0"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with(
                "[1/3] Priya Sharma, Senior Software Engineer at Google",
            ));
    }
}

// ============================================
// Content
// ============================================

mod content {
    use super::*;

    #[test]
    fn text_summary_lists_every_section() {
        let dir = TempDir::new().unwrap();
        allyconnect(&dir)
            .arg("content")
            .assert()
            .success()
            .stdout(predicate::str::contains("Upcoming Events"))
            .stdout(predicate::str::contains("Latest Opportunities"))
            .stdout(predicate::str::contains("Alumni Spotlight"))
            .stdout(predicate::str::contains("Top Contributors"));
    }

    #[test]
    fn leaderboard_shows_medals_and_movement() {
        let dir = TempDir::new().unwrap();
        allyconnect(&dir)
            .args(["content", "--section", "leaderboard"])
            .assert()
            .success()
            .stdout(predicate::str::contains("gold"))
            .stdout(predicate::str::contains("3,200 pts  up 1"))
            .stdout(predicate::str::contains("15,420 points"));
    }

    #[test]
    fn opportunities_collapse_extra_requirements() {
        let dir = TempDir::new().unwrap();
        allyconnect(&dir)
            .args(["content", "--section", "opportunities"])
            .assert()
            .success()
            .stdout(predicate::str::contains("React.js, Node.js, JavaScript +1 more"))
            .stdout(predicate::str::contains("[Internship]"));
    }

    #[test]
    fn hero_section_as_json() {
        let dir = TempDir::new().unwrap();
        let slides = stdout_json(allyconnect(&dir).args(["content", "--section", "hero", "--json"]));

        let slides = slides.as_array().unwrap();
        assert_eq!(slides.len(), 3);
        assert_eq!(slides[2]["cta"], "Explore Jobs");
    }

    #[test]
    fn loads_content_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("content.json");
        std::fs::write(
            &path,
            r#"{
                "slides": [{
                    "id": "a", "title": "Reunion", "description": "", "image": "",
                    "cta": "RSVP", "cta_link": "/rsvp"
                }]
            }"#,
        )
        .unwrap();

        allyconnect(&dir)
            .args(["--content", "content.json", "preview", "--ticks", "0"])
            .assert()
            .success()
            .stdout("[1/1] Reunion -> RSVP\n");
    }

    #[test]
    fn single_slide_preview_finishes() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("content.json"),
            r#"{
                "slides": [{
                    "id": "a", "title": "Reunion", "description": "", "image": "",
                    "cta": "RSVP", "cta_link": "/rsvp"
                }]
            }"#,
        )
        .unwrap();

        allyconnect(&dir)
            .args(["--content", "content.json", "preview", "--ticks", "2", "--interval-ms", "50"])
            .timeout(std::time::Duration::from_secs(10))
            .assert()
            .success()
            .stdout("[1/1] Reunion -> RSVP\n");
    }

    #[test]
    fn empty_deck_is_an_error() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("content.json"), r#"{"slides": []}"#).unwrap();

        allyconnect(&dir)
            .args(["--content", "content.json", "content"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("the hero deck has no items"));
    }
}

// ============================================
// Schema
// ============================================

mod schema {
    use super::*;

    #[test]
    fn full_contract() {
        let dir = TempDir::new().unwrap();
        let contract = stdout_json(allyconnect(&dir).arg("schema"));

        assert_eq!(contract["tables"].as_array().unwrap().len(), 12);
        assert_eq!(contract["functions"][0]["name"], "get_user_role");
    }

    #[test]
    fn single_table() {
        let dir = TempDir::new().unwrap();
        let table = stdout_json(allyconnect(&dir).args(["schema", "--table", "doubts"]));

        assert_eq!(table["name"], "doubts");
        let columns = table["columns"].as_array().unwrap();
        assert!(columns.iter().any(|c| c == "status"));
    }

    #[test]
    fn unknown_table_fails() {
        let dir = TempDir::new().unwrap();
        allyconnect(&dir)
            .args(["schema", "--table", "nope"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("unknown table `nope`"));
    }
}

// ============================================
// Config
// ============================================

mod config {
    use super::*;

    #[test]
    fn prints_defaults() {
        let dir = TempDir::new().unwrap();
        allyconnect(&dir)
            .arg("config")
            .assert()
            .success()
            .stdout(predicate::str::contains("interval_ms = 5000"))
            .stdout(predicate::str::contains("interval_ms = 7000"))
            .stdout(predicate::str::contains(r#"out_of_range = "reject""#));
    }

    #[test]
    fn explicit_config_overrides() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("site.toml"),
            "[hero]\ninterval_ms = 1200\n\n[navigation]\nout_of_range = \"wrap\"\n",
        )
        .unwrap();

        allyconnect(&dir)
            .args(["--config", "site.toml", "config"])
            .assert()
            .success()
            .stdout(predicate::str::contains("interval_ms = 1200"))
            .stdout(predicate::str::contains(r#"out_of_range = "wrap""#));
    }

    #[test]
    fn invalid_explicit_config_fails() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("site.toml"), "[spotlight]\ninterval_ms = 0\n").unwrap();

        allyconnect(&dir)
            .args(["--config", "site.toml", "config"])
            .assert()
            .failure()
            .stderr(predicate::str::contains(
                "spotlight.interval_ms must be greater than zero",
            ));
    }

    #[test]
    fn invalid_implicit_config_falls_back() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("allyconnect.toml"), "[hero]\ninterval_ms = 0\n").unwrap();

        allyconnect(&dir)
            .arg("config")
            .assert()
            .success()
            .stdout(predicate::str::contains("interval_ms = 5000"));
    }
}
