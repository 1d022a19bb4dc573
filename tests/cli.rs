use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn packtxt_cmd() -> Command {
    Command::cargo_bin("packtxt").expect("packtxt binary")
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// Drop the timestamped header line so report bodies can be compared.
fn body_without_timestamp(report: &str) -> String {
    report
        .lines()
        .filter(|l| !l.starts_with("Generated on: "))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn exports_matching_files_and_prunes_ignored_dirs() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("a.py"), "x");
    write_file(&temp.path().join("b.txt"), "y");
    write_file(&temp.path().join(".git/config"), "z");
    let out = temp.path().join("report.txt");

    packtxt_cmd()
        .arg(temp.path())
        .args(["-e", "py", "-o"])
        .arg(&out)
        .assert()
        .success();

    let report = fs::read_to_string(&out).unwrap();
    assert!(report.starts_with("File Content Export\n"));
    assert!(report.contains("File: a.py"));
    assert!(report.contains("\nx\n"));
    // b.txt shows up in the tree listing but must not be collected.
    assert!(!report.contains("File: b.txt"));
    // The header's ignore list mentions .git; the tree and sections must not.
    let body = report.splitn(2, "\n\n").nth(1).unwrap();
    assert!(!body.contains(".git"));
    // Exactly one collected-file section.
    assert_eq!(report.matches("\nFile: ").count(), 1);
}

#[test]
fn zero_matches_still_writes_header_and_tree() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("notes.txt"), "hello");
    let out = temp.path().join("report.txt");

    packtxt_cmd()
        .arg(temp.path())
        .args(["-e", "py", "-o"])
        .arg(&out)
        .assert()
        .success();

    let report = fs::read_to_string(&out).unwrap();
    assert!(report.starts_with("File Content Export\n"));
    assert!(report.contains("notes.txt")); // tree listing is extension-independent
    assert!(!report.contains("\nFile: "));
}

#[test]
fn report_body_is_deterministic_across_runs() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("b.py"), "two");
    write_file(&temp.path().join("a.py"), "one");
    write_file(&temp.path().join("sub/c.py"), "three");

    // Reports go elsewhere so the second run scans an unchanged tree.
    let outdir = tempdir().unwrap();
    let out1 = outdir.path().join("r1.txt");
    let out2 = outdir.path().join("r2.txt");
    for out in [&out1, &out2] {
        packtxt_cmd()
            .arg(temp.path())
            .args(["-e", "py", "-o"])
            .arg(out)
            .assert()
            .success();
    }

    let r1 = fs::read_to_string(&out1).unwrap();
    let r2 = fs::read_to_string(&out2).unwrap();
    assert_eq!(body_without_timestamp(&r1), body_without_timestamp(&r2));

    // Collected files appear in lexicographic path order.
    let a = r1.find("File: a.py").unwrap();
    let b = r1.find("File: b.py").unwrap();
    let c = r1.find("File: sub/c.py").unwrap();
    assert!(a < b && b < c);
}

#[test]
fn user_ignore_names_are_unioned() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("fixtures/skip.py"), "no");
    write_file(&temp.path().join("keep.py"), "yes");
    let out = temp.path().join("report.txt");

    packtxt_cmd()
        .arg(temp.path())
        .args(["-e", "py", "-i", "fixtures", "-o"])
        .arg(&out)
        .assert()
        .success();

    let report = fs::read_to_string(&out).unwrap();
    assert!(report.contains("File: keep.py"));
    assert!(!report.contains("skip.py"));
    assert!(report.contains("Ignored patterns: "));
    assert!(report.contains("fixtures"));
}

#[cfg(unix)]
#[test]
fn unreadable_file_gets_inline_error_and_exit_zero() {
    let temp = tempdir().unwrap();
    std::os::unix::fs::symlink("missing-target", temp.path().join("broken.py")).unwrap();
    write_file(&temp.path().join("ok.py"), "fine");
    let out = temp.path().join("report.txt");

    packtxt_cmd()
        .arg(temp.path())
        .args(["-e", "py", "-o"])
        .arg(&out)
        .assert()
        .success();

    let report = fs::read_to_string(&out).unwrap();
    assert!(report.contains("File: broken.py"));
    assert!(report.contains("\nERROR: "));
    assert!(report.contains("File: ok.py"));
}

#[test]
fn lossy_encoding_recovers_invalid_utf8() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("bad.py"), [0xFFu8, 0x48, 0x69]).unwrap();
    let out = temp.path().join("report.txt");

    packtxt_cmd()
        .arg(temp.path())
        .args(["-e", "py", "--encoding", "utf-8-lossy", "-o"])
        .arg(&out)
        .assert()
        .success();

    let report = fs::read_to_string(&out).unwrap();
    assert!(report.contains("File: bad.py"));
    assert!(!report.contains("\nERROR: "));
}

#[test]
fn missing_directory_is_fatal() {
    packtxt_cmd()
        .arg("/definitely/not/a/real/dir")
        .args(["-e", "py"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a directory"));
}

#[test]
fn target_must_be_a_directory_not_a_file() {
    let temp = tempdir().unwrap();
    let file = temp.path().join("plain.txt");
    write_file(&file, "x");

    packtxt_cmd()
        .arg(&file)
        .args(["-e", "py"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a directory"));
}

#[test]
fn unsupported_encoding_is_fatal() {
    let temp = tempdir().unwrap();

    packtxt_cmd()
        .arg(temp.path())
        .args(["-e", "py", "--encoding", "latin-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported encoding"));
}

#[test]
fn empty_extension_set_after_normalization_is_fatal() {
    let temp = tempdir().unwrap();

    packtxt_cmd()
        .arg(temp.path())
        .args(["-e", "."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("extensions"));
}

#[test]
fn extensions_flag_is_required() {
    let temp = tempdir().unwrap();

    packtxt_cmd().arg(temp.path()).assert().failure();
}

#[test]
fn default_output_name_lands_in_working_directory() {
    let scan = tempdir().unwrap();
    let cwd = tempdir().unwrap();
    write_file(&scan.path().join("a.py"), "x");

    packtxt_cmd()
        .current_dir(cwd.path())
        .arg(scan.path())
        .args(["-e", "py"])
        .assert()
        .success();

    let produced: Vec<_> = fs::read_dir(cwd.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(produced.len(), 1);
    assert!(produced[0].starts_with("file_contents_py_"));
    assert!(produced[0].ends_with(".txt"));
}

#[test]
fn output_write_failure_is_fatal() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("a.py"), "x");

    packtxt_cmd()
        .arg(temp.path())
        .args(["-e", "py", "-o"])
        .arg(temp.path().join("no-such-dir/report.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot write report"));
}
