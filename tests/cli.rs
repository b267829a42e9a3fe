//! End-to-end runs of `audit-fill` and `audit-qna` against temporary files.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use auditqna::store::{Record, backup_path, load};

const FILL: &str = env!("CARGO_BIN_EXE_audit-fill");
const QNA: &str = env!("CARGO_BIN_EXE_audit-qna");

const TWO_RECORDS: &str = r#"[
  {
    "question": "Où sont stockées les sauvegardes ?",
    "answer": "Sur site",
    "optional": false
  },
  {
    "question": "Qui valide les accès ?",
    "answer": "",
    "optional": true
  }
]
"#;

const WITH_DUPLICATE: &str = r#"[
  {"question": "What color?", "answer": "", "optional": false},
  {"question": "what   color?", "answer": "Blue", "optional": true},
  {"question": "Size?", "answer": "M", "optional": false}
]"#;

fn run(bin: &str, data: &Path, args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(bin)
        .arg("--data")
        .arg(data)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn test_qna_json_echoes_file_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("audit1_questions.json");
    fs::write(&data, TWO_RECORDS).unwrap();

    for flag in ["--json", "-j"] {
        let out = run(QNA, &data, &[flag], "");
        assert!(out.status.success());
        assert_eq!(String::from_utf8(out.stdout).unwrap(), TWO_RECORDS);
    }
    assert!(!backup_path(&data).exists());
}

#[test]
fn test_qna_transcript_keeps_duplicates() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("audit1_questions.json");
    fs::write(&data, WITH_DUPLICATE).unwrap();

    let out = run(QNA, &data, &["--something-else"], "");
    assert!(out.status.success());
    let text = String::from_utf8(out.stdout).unwrap();
    assert!(text.starts_with("1. Question: What color?\n   Réponse: \n\n"));
    assert!(text.contains("2. Question: what   color?\n   Réponse: Blue\n"));
    assert!(text.contains("3. Question: Size?\n   Réponse: M\n"));
    assert_eq!(fs::read_to_string(&data).unwrap(), WITH_DUPLICATE);
}

#[test]
fn test_qna_missing_file_exits_2() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("audit1_questions.json");

    let out = run(QNA, &data, &[], "");
    assert_eq!(out.status.code(), Some(2));
    let err = String::from_utf8(out.stderr).unwrap();
    assert!(err.contains("Fichier de questions introuvable"));
    assert!(err.contains(&data.display().to_string()));
}

#[test]
fn test_fill_dedupe_only_drops_one_record() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("audit1_questions.json");
    fs::write(&data, WITH_DUPLICATE).unwrap();

    let out = run(FILL, &data, &["--dedupe-only"], "");
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.starts_with("Nettoyé et enregistré 2 questions dans "));

    let saved = load(&data).unwrap();
    assert_eq!(saved.len(), 2);
    assert_eq!(saved[0], Record::new("What color?", "Blue", true));
    assert_eq!(fs::read_to_string(backup_path(&data)).unwrap(), WITH_DUPLICATE);
}

#[test]
fn test_fill_json_summary() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("audit1_questions.json");
    fs::write(&data, WITH_DUPLICATE).unwrap();

    let out = run(FILL, &data, &["--json"], "");
    assert!(out.status.success());
    let summary: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(summary["input"], 3);
    assert_eq!(summary["kept"], 2);
    assert_eq!(summary["merged"], 1);
    assert_eq!(summary["discarded"], 0);
}

#[test]
fn test_fill_interactive_wins_over_dedupe_only() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("audit1_questions.json");
    fs::write(&data, WITH_DUPLICATE).unwrap();

    let out = run(FILL, &data, &["--dedupe-only", "--interactive"], "Red\n\n");
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("Réponse actuelle: Blue"));
    assert!(stdout.contains("Réponse actuelle: M"));

    let saved = load(&data).unwrap();
    assert_eq!(saved[0].answer, "Red");
    assert_eq!(saved[1].answer, "M");
}

#[test]
fn test_fill_interactive_end_of_input_saves_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("audit1_questions.json");
    fs::write(&data, WITH_DUPLICATE).unwrap();

    let out = run(FILL, &data, &["--interactive"], "Red\n");
    assert_eq!(out.status.code(), Some(130));
    assert_eq!(fs::read_to_string(&data).unwrap(), WITH_DUPLICATE);
    assert_eq!(fs::read_to_string(backup_path(&data)).unwrap(), WITH_DUPLICATE);
}

#[test]
fn test_fill_missing_file_is_soft_exit() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("audit1_questions.json");

    let out = run(FILL, &data, &[], "");
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("Fichier de questions introuvable"));
    assert!(!data.exists());
    assert!(!backup_path(&data).exists());
}

#[test]
fn test_fill_parse_error_fails() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("audit1_questions.json");
    fs::write(&data, "{\"question\": 1").unwrap();

    let out = run(FILL, &data, &[], "");
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8(out.stderr).unwrap().starts_with("Erreur: "));
}

#[test]
fn test_qna_usage_error_is_not_not_found_status() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("audit1_questions.json");
    fs::write(&data, TWO_RECORDS).unwrap();

    let out = run(QNA, &data, &["--output", "bogus"], "");
    assert_eq!(out.status.code(), Some(64));

    let out = Command::new(QNA).arg("--data").output().unwrap();
    assert_eq!(out.status.code(), Some(64));
}

#[test]
fn test_qna_help_flags_print_transcript() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("audit1_questions.json");
    fs::write(&data, TWO_RECORDS).unwrap();

    for flag in ["-h", "--help", "-V"] {
        let out = run(QNA, &data, &[flag], "");
        assert!(out.status.success());
        let text = String::from_utf8(out.stdout).unwrap();
        assert!(text.starts_with("1. Question: Où sont stockées les sauvegardes ?\n"));
    }
}

#[test]
fn test_qna_json_keeps_raw_objects() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("audit1_questions.json");
    let raw = "[\n  {\n    \"question\": \"Q?\",\n    \"section\": \"A.1\"\n  }\n]\n";
    fs::write(&data, raw).unwrap();

    let out = run(QNA, &data, &["-j"], "");
    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap(), raw);
}

#[test]
fn test_fill_json_interactive_keeps_stdout_parseable() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("audit1_questions.json");
    fs::write(&data, WITH_DUPLICATE).unwrap();

    let out = run(FILL, &data, &["--json", "--interactive"], "\nL\n");
    assert!(out.status.success());
    let summary: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(summary["answers_updated"], 1);
    assert!(String::from_utf8(out.stderr).unwrap().contains("Question: Size?"));
}

#[cfg(unix)]
#[test]
fn test_fill_through_symlink_rewrites_target() {
    let dir = tempfile::tempdir().unwrap();
    let real_dir = dir.path().join("real");
    fs::create_dir(&real_dir).unwrap();
    let real = real_dir.join("q.json");
    fs::write(&real, WITH_DUPLICATE).unwrap();
    let link = dir.path().join("link.json");
    std::os::unix::fs::symlink(&real, &link).unwrap();

    let out = run(FILL, &link, &["--dedupe-only"], "");
    assert!(out.status.success());
    assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
    assert_eq!(load(&real).unwrap().len(), 2);
}
