use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn minic_cmd() -> Command {
    Command::cargo_bin("minic-lex").unwrap()
}

fn source_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_lists_tokens() {
    let file = source_file("int main() { return 0; }");
    minic_cmd()
        .arg(file.path())
        .assert()
        .success()
        .stdout(
            "1:1\tint\t\n\
             1:5\tIDENT\tmain\n\
             1:9\t(\t\n\
             1:10\t)\t\n\
             1:12\t{\t\n\
             1:14\treturn\t\n\
             1:21\tINTLIT\t0\n\
             1:22\t;\t\n\
             1:24\t}\t\n",
        );
}

#[test]
fn test_reads_stdin() {
    minic_cmd()
        .arg("-")
        .arg("--include-eof")
        .write_stdin("7")
        .assert()
        .success()
        .stdout("1:1\tINTLIT\t7\n1:2\tEOF\t\n");
}

#[test]
fn test_json_format() {
    let file = source_file("x;");
    minic_cmd()
        .arg(file.path())
        .args(["--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""kind": "IDENT""#))
        .stdout(predicate::str::contains(r#""literal": "x""#));
}

#[test]
fn test_config_file() {
    let file = source_file("a @ b");
    let config = source_file(r#"{"stop_on_illegal": true}"#);
    minic_cmd()
        .arg(file.path())
        .arg("--config")
        .arg(config.path())
        .assert()
        .code(2)
        .stdout("1:1\tIDENT\ta\n1:3\tILLEGAL\t@\n");
}

#[test]
fn test_flags_switch_config_options_off() {
    let file = source_file("a @ b");
    let config = source_file(r#"{"stop_on_illegal": true, "include_eof": true}"#);
    minic_cmd()
        .arg(file.path())
        .arg("--config")
        .arg(config.path())
        .args(["--no-stop-on-illegal", "--no-include-eof"])
        .assert()
        .success()
        .stdout("1:1\tIDENT\ta\n1:3\tILLEGAL\t@\n1:5\tIDENT\tb\n");
}

#[test]
fn test_last_of_paired_flags_wins() {
    minic_cmd()
        .arg("-")
        .args(["--no-include-eof", "--include-eof"])
        .write_stdin("x")
        .assert()
        .success()
        .stdout("1:1\tIDENT\tx\n1:2\tEOF\t\n");
}

#[test]
fn test_illegal_characters_do_not_fail() {
    let file = source_file("@");
    minic_cmd()
        .arg(file.path())
        .assert()
        .success()
        .stdout("1:1\tILLEGAL\t@\n");
}

#[test]
fn test_missing_file() {
    minic_cmd()
        .arg("/no/such/file.c")
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error:"));
}

#[test]
fn test_invalid_utf8_is_fatal() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&[b'1', b' ', 0xff]).unwrap();
    minic_cmd()
        .arg(file.path())
        .assert()
        .code(1)
        .stdout("1:1\tINTLIT\t1\n")
        .stderr(predicate::str::contains("Invalid UTF-8"));
}
