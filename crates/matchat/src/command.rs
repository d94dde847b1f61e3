use crate::cli::Cli;
use crate::error::{Error, Result};
use crate::output::Output;
use match_at::{AnchoredMatchable, Pattern, Position, Text};
use std::io::Read;
use termcolor::WriteColor;
use tracing::debug;

pub fn build_pattern(cli: &Cli) -> Result<Pattern> {
    let pattern = Pattern::builder()
        .case_insensitive(cli.ignore_case)
        .multi_line(cli.multi_line)
        .dot_matches_new_line(cli.dot_all)
        .ignore_whitespace(cli.extended)
        .literal(cli.fixed_strings)
        .charset(cli.pattern_charset)
        .build(&cli.pattern)?;
    debug!(source = pattern.as_str(), charset = %pattern.charset(), "compiled pattern");
    Ok(pattern)
}

/// The text argument, or stdin when it is "-".
pub fn read_text(cli: &Cli, stdin: impl Read) -> Result<Text<'static>> {
    let content = if cli.text == "-" {
        let mut content = String::new();
        let mut stdin = stdin;
        stdin
            .read_to_string(&mut content)
            .map_err(|source| Error::ReadInput { source })?;
        content
    } else {
        cli.text.clone()
    };
    debug!(chars = content.chars().count(), charset = %cli.text_charset, "read text");
    Ok(Text::with_charset(content, cli.text_charset))
}

/// Run one anchored match and print the result. Returns whether it matched.
pub fn execute<W: WriteColor>(cli: &Cli, text: &Text<'_>, output: &mut Output<W>) -> Result<bool> {
    let position = Position::parse(&cli.position)?;
    let pattern = build_pattern(cli)?;
    debug!(position = position.get(), "attempting anchored match");

    if cli.quiet {
        return Ok(pattern.matches(text, position)?);
    }

    if cli.length {
        let len = pattern.match_len(text, position)?;
        if let Some(len) = len {
            output.print_len(len)?;
        }
        return Ok(len.is_some());
    }

    let found = pattern.attempt_match(text, position)?;
    debug!(matched = found.is_some(), "match finished");
    if cli.json {
        output.print_json(found.as_ref())?;
    } else if let Some(m) = &found {
        output.print_match(m)?;
    }
    Ok(found.is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("matchat").chain(args.iter().copied()))
    }

    fn run(args: &[&str]) -> (Result<bool>, String) {
        let cli = cli(args);
        let text = read_text(&cli, std::io::empty()).unwrap();
        let mut output = Output::buffer();
        let result = execute(&cli, &text, &mut output);
        (result, output.contents())
    }

    #[test]
    fn test_match_output() {
        let (result, out) = run(&["o", "foobar", "-p", "1"]);
        assert!(result.unwrap());
        assert_eq!(out, "o\n1..2\n");
    }

    #[test]
    fn test_no_match_prints_nothing() {
        let (result, out) = run(&["o", "foobar"]);
        assert!(!result.unwrap());
        assert_eq!(out, "");
    }

    #[test]
    fn test_negative_position() {
        let (result, out) = run(&["bar", "foobar", "-p", "-3"]);
        assert!(result.unwrap());
        assert_eq!(out, "bar\n3..6\n");
    }

    #[test]
    fn test_groups_output() {
        let (result, out) = run(&[r"(?P<key>\w+)=(\d+)?", "a=", "--position", "0"]);
        assert!(result.unwrap());
        assert_eq!(out, "a=\n0..2\n  $key = \"a\" (0..1)\n  $2 = (no match)\n");
    }

    #[test]
    fn test_length() {
        let (result, out) = run(&["o+", "foobar", "-p", "1", "--length"]);
        assert!(result.unwrap());
        assert_eq!(out, "2\n");
    }

    #[test]
    fn test_json_no_match() {
        let (result, out) = run(&["o", "foobar", "--json"]);
        assert!(!result.unwrap());
        assert_eq!(out, "null\n");
    }

    #[test]
    fn test_json_match() {
        let (_, out) = run(&["o", "foobar", "-p", "2", "--json"]);
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["text"], "o");
        assert_eq!(json["start"], 2);
    }

    #[test]
    fn test_quiet() {
        let (result, out) = run(&["o", "foobar", "-p", "1", "-q"]);
        assert!(result.unwrap());
        assert_eq!(out, "");
    }

    #[test]
    fn test_fixed_strings() {
        let (result, _) = run(&["a.c", "abc", "-F"]);
        assert!(!result.unwrap());
        let (result, _) = run(&["a.c", "a.c", "-F"]);
        assert!(result.unwrap());
    }

    #[test]
    fn test_flags() {
        let (result, _) = run(&["BAR", "foobar", "-p", "3", "-i"]);
        assert!(result.unwrap());
        let (result, _) = run(&["^bar", "foo\nbar", "-p", "4", "-m"]);
        assert!(result.unwrap());
    }

    #[test]
    fn test_invalid_position() {
        let (result, _) = run(&["foo", "foo", "-p", "inf"]);
        assert!(matches!(
            result,
            Err(Error::Match(match_at::MatchError::PositionOutOfRange { .. }))
        ));
        let (result, _) = run(&["foo", "foo", "-p", "bar"]);
        assert!(matches!(
            result,
            Err(Error::Match(match_at::MatchError::InvalidPositionType { .. }))
        ));
    }

    #[test]
    fn test_charset_mismatch() {
        let (result, _) = run(&["foo", "foo", "--text-charset", "cp932"]);
        assert!(matches!(
            result,
            Err(Error::Match(
                match_at::MatchError::IncompatibleCharacterSets { .. }
            ))
        ));
    }

    #[test]
    fn test_bad_pattern() {
        let (result, _) = run(&["foo(", "foo"]);
        assert!(matches!(result, Err(Error::Pattern(_))));
    }

    #[test]
    fn test_read_text_from_stdin() {
        let cli = cli(&["bar"]);
        let text = read_text(&cli, "foo\nbar\n".as_bytes()).unwrap();
        assert_eq!(text.as_str(), "foo\nbar\n");
    }
}
