//! Integration tests for the Micro frontend and the `micro` binary

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use micro::diagnostics::DiagnosticKind;
use micro::frontend::{lexer, parser};

fn fixtures(kind: &str) -> Vec<PathBuf> {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(kind);
    let mut paths: Vec<_> = fs::read_dir(&dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.extension().is_some_and(|e| e == "micro"))
        .collect();
    paths.sort();
    paths
}

fn fixture(relative: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(relative)
}

fn micro(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_micro"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run micro binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

/// Test that all valid fixtures are recognized without diagnostics
#[test]
fn test_valid_fixtures() {
    let paths = fixtures("valid");
    assert!(!paths.is_empty());

    for path in paths {
        let source = fs::read_to_string(&path).unwrap();
        let lexed = lexer::lex(&source).unwrap();
        assert!(lexed.diagnostics.is_empty(), "{}: {:?}", path.display(), lexed.diagnostics);

        let outcome = parser::recognize(&source).unwrap();
        assert!(
            outcome.is_success(),
            "Expected {} to be recognized, got: {:?}",
            path.display(),
            outcome.diagnostics()
        );
    }
}

/// Test that invalid fixtures produce at least one diagnostic
#[test]
fn test_invalid_fixtures() {
    let paths = fixtures("invalid");
    assert!(!paths.is_empty());

    for path in paths {
        let source = fs::read_to_string(&path).unwrap();
        let outcome = parser::recognize(&source).unwrap();
        assert!(!outcome.is_success(), "Expected {} to be rejected", path.display());
    }
}

#[test]
fn test_reader_and_string_paths_agree_on_fixtures() {
    let config = micro::config::SyntaxConfig::default();
    for path in fixtures("valid").into_iter().chain(fixtures("invalid")) {
        let source = fs::read_to_string(&path).unwrap();
        let from_str = parser::recognize(&source).unwrap();
        let file = std::io::BufReader::new(fs::File::open(&path).unwrap());
        let from_reader = parser::recognize_reader(file, &config).unwrap();
        assert_eq!(from_str, from_reader, "{}", path.display());
    }
}

#[test]
fn test_lexical_error_is_reported_on_its_line() {
    let source = fs::read_to_string(fixture("invalid/bad_character.micro")).unwrap();
    let outcome = parser::recognize(&source).unwrap();
    let first = outcome.diagnostics()[0];
    assert_eq!(first.kind, DiagnosticKind::Lexical { found: '#' });
    assert_eq!(first.line, 2);
}

#[test]
fn test_cli_parse_valid() {
    let path = fixture("valid/sum.micro");
    let output = micro(&["parse", path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "Parsing was successful. No errors were found.\n");
}

#[test]
fn test_cli_parse_invalid_reports_cascade() {
    let path = fixture("invalid/missing_semicolon.micro");
    let output = micro(&["parse", path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    insta::assert_snapshot!(stdout(&output), @r"
    syntax error on line 3
    Error was an unexpected WRITE token
    syntax error on line 3
    Error was an unexpected LPAREN token
    syntax error on line 3
    Error was an unexpected ID token
    Parsing complete.
    ");
}

#[test]
fn test_cli_parse_fancy_diagnostics() {
    let path = fixture("invalid/bad_character.micro");
    let output = micro(&["parse", path.to_str().unwrap(), "--diagnostics", "fancy"]);
    assert_eq!(output.status.code(), Some(1));
    let text = stdout(&output);
    assert!(text.contains("micro::lexical"), "{text}");
    assert!(text.ends_with("Parsing complete.\n"), "{text}");
}

#[test]
fn test_cli_scan_to_file() {
    let path = fixture("invalid/bad_character.micro");
    let out = std::env::temp_dir().join(format!("micro_scan_{}.txt", std::process::id()));
    let output = micro(&["scan", path.to_str().unwrap(), "-o", out.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "Lexical error on line 2\nPrinting complete.\n");

    let dump = fs::read_to_string(&out).unwrap();
    let _ = fs::remove_file(&out);
    insta::assert_snapshot!(dump, @r"
    MAIN LBRACK
    ID ASSIGNOP INTLITERAL INTLITERAL SEMICOLON
    RBRACK
    SCANEOF
    ");
}

#[test]
fn test_cli_scan_to_stdout_keeps_dump_lines_intact() {
    let path = fixture("invalid/bad_character.micro");
    let output = micro(&["scan", path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    insta::assert_snapshot!(stdout(&output), @r"
    MAIN LBRACK
    ID ASSIGNOP INTLITERAL INTLITERAL SEMICOLON
    RBRACK
    SCANEOF
    Printing complete.
    ");
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr, "Lexical error on line 2\n");
}

#[test]
fn test_cli_scan_clean_file_to_stdout() {
    let path = fixture("valid/trailing_comment.micro");
    let output = micro(&["scan", path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "MAIN LBRACK READ LPAREN ID RPAREN SEMICOLON RBRACK SCANEOF\nPrinting complete. No lexical errors were found.\n"
    );
}

#[test]
fn test_cli_missing_input_is_fatal() {
    let output = micro(&["parse", "no/such/file.micro"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Cannot access file"), "{stderr}");
}

#[test]
fn test_cli_token_length_flag() {
    let path = fixture("valid/countdown.micro");
    let output = micro(&["scan", path.to_str().unwrap(), "--max-token-len", "3"]);
    // `write` and `while` overflow a three-character buffer.
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr.clone()).unwrap();
    assert!(stderr.contains("Lexical error on line"));
    assert!(!stdout(&output).contains("Lexical error"));
}
