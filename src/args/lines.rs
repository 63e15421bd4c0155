//! Line reader: one argument per input line.

use std::io::{self, BufRead};

/// Read `input` to end-of-stream, one argument per line.
///
/// Exactly one line terminator (`\n` or `\r\n`) is stripped per line; any
/// other `\r` is part of the argument. Blank lines are kept as empty
/// arguments when more content follows them; blank lines at the very end
/// are dropped.
pub fn read_lines<R: BufRead>(input: R) -> io::Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in input.lines() {
        lines.push(line?);
    }

    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(input: &[u8]) -> Vec<String> {
        read_lines(input).unwrap()
    }

    #[test]
    fn empty_input() {
        assert!(read(b"").is_empty());
    }

    #[test]
    fn newline_terminated() {
        assert_eq!(read(b"a\nb\n"), vec!["a", "b"]);
    }

    #[test]
    fn unterminated_last_line() {
        assert_eq!(read(b"a\nb"), vec!["a", "b"]);
    }

    #[test]
    fn trailing_blank_lines_dropped() {
        assert_eq!(read(b"a\n\n\n"), vec!["a"]);
        assert!(read(b"\n\n").is_empty());
    }

    #[test]
    fn inner_blank_lines_kept() {
        assert_eq!(read(b"a\n\nb\n"), vec!["a", "", "b"]);
    }

    #[test]
    fn crlf_and_spaces() {
        assert_eq!(read(b"one two\r\nthree\r\n"), vec!["one two", "three"]);
    }

    #[test]
    fn only_one_terminator_stripped() {
        assert_eq!(read(b"a\r\r\n"), vec!["a\r"]);
        assert_eq!(read(b"a\r"), vec!["a\r"]);
        assert_eq!(read(b"x\ry\n"), vec!["x\ry"]);
    }

    #[test]
    fn invalid_utf8_is_error() {
        let err = read_lines(&b"ok\n\xff\xfe\n"[..]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
