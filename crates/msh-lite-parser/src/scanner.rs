// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Whitespace-delimited token scanner for ASCII MSH content
//!
//! Walks the raw text one token at a time, tracking the current line for
//! diagnostics. Section keywords, record counts, and record fields are all
//! plain tokens; nothing in the format needs more than one token of
//! lookahead, which [`TokenScanner::mark`] and [`TokenScanner::restore`]
//! provide.

use msh_lite_model::{ParseError, Result};

/// Saved scanner position
///
/// Produced by [`TokenScanner::mark`] and consumed by
/// [`TokenScanner::restore`] to give back a probed token.
#[derive(Clone, Copy, Debug)]
pub struct ScanMark {
    pos: usize,
    line: usize,
}

/// Token scanner over raw document text
pub struct TokenScanner<'a> {
    content: &'a str,
    pos: usize,
    line: usize,
}

impl<'a> TokenScanner<'a> {
    /// Create a scanner at the start of the content
    pub fn new(content: &'a str) -> Self {
        Self {
            content,
            pos: 0,
            line: 1,
        }
    }

    /// Current 1-based line number
    pub fn line(&self) -> usize {
        self.line
    }

    /// Save the current position
    pub fn mark(&self) -> ScanMark {
        ScanMark {
            pos: self.pos,
            line: self.line,
        }
    }

    /// Rewind to a previously saved position
    pub fn restore(&mut self, mark: ScanMark) {
        self.pos = mark.pos;
        self.line = mark.line;
    }

    /// Consume and return the next whitespace-delimited token
    ///
    /// Fails with [`ParseError::UnexpectedEof`] when only whitespace remains.
    pub fn next_token(&mut self) -> Result<&'a str> {
        let bytes = self.content.as_bytes();

        // Skip leading whitespace, counting lines as we go
        while self.pos < bytes.len() && bytes[self.pos].is_ascii_whitespace() {
            if bytes[self.pos] == b'\n' {
                self.line += 1;
            }
            self.pos += 1;
        }

        if self.pos >= bytes.len() {
            return Err(ParseError::UnexpectedEof);
        }

        let start = self.pos;
        while self.pos < bytes.len() && !bytes[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }

        Ok(&self.content[start..self.pos])
    }

    /// Consume a token and parse it as an `i64`
    pub fn next_i64(&mut self) -> Result<i64> {
        let token = self.next_token()?;
        parse_num(token, self.line)
    }

    /// Consume a token and parse it as an `i32`
    pub fn next_i32(&mut self) -> Result<i32> {
        let token = self.next_token()?;
        parse_num(token, self.line)
    }

    /// Consume a token and parse it as a record count
    pub fn next_count(&mut self) -> Result<usize> {
        let token = self.next_token()?;
        parse_num(token, self.line)
    }

    /// Consume a token and parse it as an `f64`
    pub fn next_f64(&mut self) -> Result<f64> {
        let token = self.next_token()?;
        parse_num(token, self.line)
    }

    /// Consume a token that must equal the given section keyword
    pub fn expect_keyword(&mut self, expected: &'static str) -> Result<()> {
        match self.next_token() {
            Ok(token) if token == expected => Ok(()),
            Ok(token) => Err(ParseError::MissingSection {
                expected,
                found: Some(token.to_string()),
            }),
            Err(ParseError::UnexpectedEof) => Err(ParseError::MissingSection {
                expected,
                found: None,
            }),
            Err(err) => Err(err),
        }
    }
}

/// Parse one numeric token, reporting failures with the token and its line
pub(crate) fn parse_num<N: lexical_core::FromLexical>(token: &str, line: usize) -> Result<N> {
    lexical_core::parse(token.as_bytes()).map_err(|_| ParseError::MalformedNumber {
        token: token.to_string(),
        line,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_across_lines() {
        let mut scan = TokenScanner::new("$Nodes\n2\n1 0.5 0 0\n");

        assert_eq!(scan.next_token().unwrap(), "$Nodes");
        assert_eq!(scan.line(), 1);
        assert_eq!(scan.next_token().unwrap(), "2");
        assert_eq!(scan.line(), 2);
        assert_eq!(scan.next_token().unwrap(), "1");
        assert_eq!(scan.next_token().unwrap(), "0.5");
        assert_eq!(scan.line(), 3);
    }

    #[test]
    fn test_eof_on_blank_content() {
        let mut scan = TokenScanner::new("  \n\t \n");
        assert!(matches!(scan.next_token(), Err(ParseError::UnexpectedEof)));
    }

    #[test]
    fn test_numeric_tokens() {
        let mut scan = TokenScanner::new("42 -7 2.5e-3 8");
        assert_eq!(scan.next_i64().unwrap(), 42);
        assert_eq!(scan.next_i32().unwrap(), -7);
        assert_eq!(scan.next_f64().unwrap(), 0.0025);
        assert_eq!(scan.next_count().unwrap(), 8);
    }

    #[test]
    fn test_malformed_number_reports_token_and_line() {
        let mut scan = TokenScanner::new("1\nabc");
        scan.next_i64().unwrap();

        match scan.next_i64() {
            Err(ParseError::MalformedNumber { token, line }) => {
                assert_eq!(token, "abc");
                assert_eq!(line, 2);
            }
            other => panic!("expected MalformedNumber, got {other:?}"),
        }
    }

    #[test]
    fn test_float_token_is_not_an_integer() {
        let mut scan = TokenScanner::new("2.5");
        assert!(matches!(
            scan.next_i64(),
            Err(ParseError::MalformedNumber { .. })
        ));
    }

    #[test]
    fn test_mark_restore_rewinds_one_probe() {
        let mut scan = TokenScanner::new("$Nodes 3");

        let mark = scan.mark();
        assert_eq!(scan.next_token().unwrap(), "$Nodes");
        scan.restore(mark);

        assert_eq!(scan.next_token().unwrap(), "$Nodes");
        assert_eq!(scan.next_count().unwrap(), 3);
    }

    #[test]
    fn test_expect_keyword() {
        let mut scan = TokenScanner::new("$MeshFormat");
        assert!(scan.expect_keyword("$MeshFormat").is_ok());

        let mut scan = TokenScanner::new("$Nodes");
        match scan.expect_keyword("$MeshFormat") {
            Err(ParseError::MissingSection { expected, found }) => {
                assert_eq!(expected, "$MeshFormat");
                assert_eq!(found.as_deref(), Some("$Nodes"));
            }
            other => panic!("expected MissingSection, got {other:?}"),
        }

        let mut scan = TokenScanner::new("");
        match scan.expect_keyword("$MeshFormat") {
            Err(ParseError::MissingSection { expected, found }) => {
                assert_eq!(expected, "$MeshFormat");
                assert_eq!(found, None);
            }
            other => panic!("expected MissingSection, got {other:?}"),
        }
    }
}
