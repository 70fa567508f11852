// Integration testing can be done either by calling library functions directly or by invoking your CLI as a subprocess.
use predicates::prelude::*;
use std::fs;

fn cotree() -> assert_cmd::Command {
    assert_cmd::Command::cargo_bin("cotree").unwrap()
}

#[test]
fn prints_example_without_input() {
    let tmp = tempfile::tempdir().unwrap();

    cotree()
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Provide an input file structured like the following example:",
        ))
        .stdout(predicate::str::contains("└──requirements.txt"));

    assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 0);
}

#[test]
fn creates_tree_in_output_directory() {
    let tmp = tempfile::tempdir().unwrap();
    let input = tmp.path().join("tree.txt");
    fs::write(&input, "app/   # root\n    ├──src/\n    │   └──main.rs\n    └──README.md\n").unwrap();

    cotree()
        .arg(&input)
        .arg("--output")
        .arg(tmp.path().join("out"))
        .assert()
        .success()
        .stdout(predicate::str::contains("2 directories, 2 files"));

    assert!(tmp.path().join("out/app/src/main.rs").is_file());
    assert!(tmp.path().join("out/app/README.md").is_file());
}

#[test]
fn defaults_to_current_directory() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join("tree.txt"), "notes/\nnotes.txt\n").unwrap();

    cotree()
        .current_dir(tmp.path())
        .arg("tree.txt")
        .assert()
        .success();

    assert!(tmp.path().join("notes").is_dir());
    assert!(tmp.path().join("notes.txt").is_file());
}

#[test]
fn missing_input_fails() {
    let tmp = tempfile::tempdir().unwrap();

    cotree()
        .current_dir(tmp.path())
        .arg("does-not-exist.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("does-not-exist.txt"));

    assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 0);
}

#[test]
fn dry_run_only_previews() {
    let tmp = tempfile::tempdir().unwrap();
    let input = tmp.path().join("tree.txt");
    fs::write(&input, "a/\n    b.txt\n").unwrap();

    cotree()
        .arg(&input)
        .arg("-o")
        .arg(tmp.path().join("out"))
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Preview"))
        .stdout(predicate::str::contains("b.txt"))
        .stdout(predicate::str::contains("nothing created"));

    assert!(!tmp.path().join("out").exists());
}

#[test]
fn output_from_config_file() {
    let tmp = tempfile::tempdir().unwrap();
    let input = tmp.path().join("tree.txt");
    let config = tmp.path().join("cotree.toml");
    fs::write(&input, "a/\n").unwrap();
    fs::write(&config, "output = \"scaffold\"\n").unwrap();

    cotree()
        .current_dir(tmp.path())
        .arg(&input)
        .arg("--config")
        .arg(&config)
        .assert()
        .success();

    assert!(tmp.path().join("scaffold/a").is_dir());
}

#[test]
fn invalid_config_fails_before_mutation() {
    let tmp = tempfile::tempdir().unwrap();
    let input = tmp.path().join("tree.txt");
    let config = tmp.path().join("cotree.toml");
    fs::write(&input, "a/\n").unwrap();
    fs::write(&config, "output = [1, 2]\n").unwrap();

    cotree()
        .current_dir(tmp.path())
        .arg(&input)
        .arg("--config")
        .arg(&config)
        .assert()
        .failure();

    assert!(!tmp.path().join("a").exists());
}
