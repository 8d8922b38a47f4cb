use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn chalkboard_cmd(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("chalkboard").expect("binary exists");
    cmd.env("XDG_CONFIG_HOME", config_home.path());
    cmd
}

#[test]
fn chalkboard_help_prints_usage() {
    let temp = TempDir::new().unwrap();
    chalkboard_cmd(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Embeddable canvas drawing surface",
        ));
}

#[test]
fn markup_contains_single_default_canvas() {
    let temp = TempDir::new().unwrap();
    chalkboard_cmd(&temp)
        .arg("markup")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "<div><canvas id=\"chalkboard-1\" width=\"300\" height=\"150\"></canvas></div>",
        ));
}

#[test]
fn markup_honors_config_file() {
    let temp = TempDir::new().unwrap();
    let config_dir = temp.path().join("chalkboard");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "[board]\nwidth = 64\nheight = 32\n",
    )
    .unwrap();

    chalkboard_cmd(&temp)
        .arg("markup")
        .assert()
        .success()
        .stdout(predicate::str::contains("width=\"64\" height=\"32\""));
}

#[test]
fn replay_writes_png_to_output() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("strokes.txt");
    std::fs::write(&script, "down 10 10\nmove 90 40\nmove 20 70\nup\n").unwrap();
    let output = temp.path().join("board.png");

    chalkboard_cmd(&temp)
        .args(["replay", "--width", "100", "--height", "80", "--output"])
        .arg(&output)
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved"));

    let bytes = std::fs::read(&output).unwrap();
    assert_eq!(&bytes[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
}

#[test]
fn replay_reports_script_line() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("bad.txt");
    std::fs::write(&script, "down 1 1\nscribble\n").unwrap();

    chalkboard_cmd(&temp)
        .args(["replay", "--output"])
        .arg(temp.path().join("never.png"))
        .arg(&script)
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn replay_rejects_unknown_color() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("empty.txt");
    std::fs::write(&script, "").unwrap();

    chalkboard_cmd(&temp)
        .args(["replay", "--line-color", "plaid"])
        .arg(&script)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unrecognized line color"));
}

#[test]
fn oversized_width_flag_is_clamped() {
    let temp = TempDir::new().unwrap();
    chalkboard_cmd(&temp)
        .args(["markup", "--width", "9000", "--height", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("width=\"8192\" height=\"10\""));
}

#[test]
fn nan_line_width_flag_falls_back_to_default() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("line.txt");
    std::fs::write(&script, "down 5 5\nmove 40 5\nup\n").unwrap();
    let output = temp.path().join("line.png");

    chalkboard_cmd(&temp)
        .env("RUST_LOG", "warn")
        .args(["replay", "--width", "50", "--height", "10", "--line-width", "NaN"])
        .arg("--output")
        .arg(&output)
        .arg(&script)
        .assert()
        .success()
        .stderr(predicate::str::contains("Invalid line_width NaN"));

    assert!(output.exists());
}

#[test]
fn dump_config_schema_lists_sections() {
    Command::cargo_bin("dump_config_schema")
        .expect("binary exists")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"board\""))
        .stdout(predicate::str::contains("\"export\""));
}
