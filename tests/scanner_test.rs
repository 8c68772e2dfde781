mod common;

use std::io::Cursor;

use minic_lex::tokenizer::{
    tokenize, CharSource, Position, ReaderSource, ScanError, Scanner, SourceError, StrSource,
    Token, TokenKind,
};
use pretty_assertions::assert_eq;

fn summary(tokens: &[Token]) -> Vec<(usize, usize, TokenKind, &str)> {
    tokens
        .iter()
        .map(|t| {
            (
                t.position.line,
                t.position.column,
                t.kind,
                t.literal.as_str(),
            )
        })
        .collect()
}

#[test]
fn it_scans_a_function_definition() {
    let tokens = tokenize("int main() { return 0; }").unwrap();
    assert_eq!(
        summary(&tokens),
        vec![
            (1, 1, TokenKind::KeywordInt, ""),
            (1, 5, TokenKind::Identifier, "main"),
            (1, 9, TokenKind::OpenParen, ""),
            (1, 10, TokenKind::CloseParen, ""),
            (1, 12, TokenKind::OpenBrace, ""),
            (1, 14, TokenKind::KeywordReturn, ""),
            (1, 21, TokenKind::IntegerLiteral, "0"),
            (1, 22, TokenKind::Semicolon, ""),
            (1, 24, TokenKind::CloseBrace, ""),
            (1, 25, TokenKind::EndOfInput, ""),
        ]
    );
}

#[test]
fn it_scans_empty_input() {
    let tokens = tokenize("").unwrap();
    assert_eq!(tokens.len(), 1);
    assert!(tokens[0].is_eof());
}

#[test]
fn it_reports_illegal_characters() {
    let tokens = tokenize("#").unwrap();
    assert_eq!(
        summary(&tokens),
        vec![(1, 1, TokenKind::Illegal, "#"), (1, 2, TokenKind::EndOfInput, "")]
    );
}

#[test]
fn it_tracks_lines() {
    let tokens = tokenize("42\n7").unwrap();
    assert_eq!(
        summary(&tokens[..2]),
        vec![
            (1, 1, TokenKind::IntegerLiteral, "42"),
            (2, 1, TokenKind::IntegerLiteral, "7"),
        ]
    );
    assert!(tokens[2].is_eof());
}

#[test]
fn it_requires_exact_keyword_match() {
    let tokens = tokenize("returns").unwrap();
    assert_eq!(tokens[0], Token::new(Position::new(1, 1), TokenKind::Identifier, "returns"));
    assert!(tokens[1].is_eof());
}

#[test]
fn it_scans_from_a_byte_reader() {
    let program = "int main() {\n    return 42;\n}\n";
    let from_reader = Scanner::new(ReaderSource::new(Cursor::new(program.as_bytes())))
        .scan_all()
        .unwrap();
    assert_eq!(from_reader, tokenize(program).unwrap());
    assert_eq!(from_reader[6].integer_value().unwrap(), 42);
}

#[test]
fn it_scans_a_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    std::io::Write::write_all(&mut file, b"return 1;").unwrap();

    let mut scanner = Scanner::new(ReaderSource::open(file.path()).unwrap());
    let kinds: Vec<_> = scanner.tokens().map(|t| t.unwrap().kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::KeywordReturn,
            TokenKind::IntegerLiteral,
            TokenKind::Semicolon
        ]
    );
}

#[test]
fn it_fails_on_invalid_encoding() {
    let mut bytes = b"int x".to_vec();
    bytes.push(0xc3);
    let mut scanner = Scanner::new(ReaderSource::new(Cursor::new(bytes)));

    assert_eq!(scanner.next_token().unwrap().kind, TokenKind::KeywordInt);
    let error = scanner.next_token().unwrap_err();
    assert!(matches!(
        error,
        ScanError::Source {
            source: SourceError::InvalidEncoding { .. },
            ..
        }
    ));
}

#[test]
fn it_borrows_a_source() {
    let mut source = StrSource::new("a b");
    {
        let mut scanner = Scanner::new(&mut source);
        assert_eq!(scanner.next_token().unwrap().literal, "a");
    }
    // the scanner pushed back the space after `a`
    assert_eq!(source.read().unwrap(), ' ');
}
