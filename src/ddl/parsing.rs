//! Common DDL parsing machinery.
//!
//! The extension grammar is recursive descent over [`Cursor`], a scanner
//! that tracks its position in the raw statement text and reports failures
//! with exact 1-based line/column coordinates. Statement parsers consume
//! keywords, identifiers, and literals through it; optional clauses
//! backtrack by saving and restoring the position, while a committed
//! keyword sequence never backtracks.

use crate::compatibility::map_type_name_to_arrow;
use crate::error::{SyntaxError, EXTENSION_GRAMMAR};
use crate::keywords::is_reserved;
use crate::models::TableRef;
use crate::options::OptionMap;
use arrow::datatypes::DataType;

/// Scanner over a single statement's text.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// 1-based line/column of the current position.
    pub fn line_col(&self) -> (usize, usize) {
        self.line_col_at(self.pos)
    }

    fn line_col_at(&self, pos: usize) -> (usize, usize) {
        let consumed = &self.input[..pos];
        let line = consumed.matches('\n').count() + 1;
        let column = match consumed.rfind('\n') {
            Some(newline) => consumed[newline + 1..].chars().count() + 1,
            None => consumed.chars().count() + 1,
        };
        (line, column)
    }

    /// Extension-grammar failure at the current position.
    pub fn error(&self, message: impl Into<String>) -> SyntaxError {
        self.error_at(self.pos, message)
    }

    fn error_at(&self, pos: usize, message: impl Into<String>) -> SyntaxError {
        let (line, column) = self.line_col_at(pos);
        SyntaxError::new(EXTENSION_GRAMMAR, line, column, message)
    }

    fn error_expected(&self, what: &str) -> SyntaxError {
        match self.peek_char() {
            Some(found) => self.error(format!("expected {}, found '{}'", what, found)),
            None => self.error(format!("expected {}", what)),
        }
    }

    fn skip_whitespace(&mut self) {
        let rest = &self.input[self.pos..];
        let skipped = rest.len() - rest.trim_start().len();
        self.pos += skipped;
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// True once only whitespace remains. Skips leading whitespace so a
    /// failure reported afterwards lands on the first significant position.
    pub fn at_end(&mut self) -> bool {
        self.skip_whitespace();
        self.pos >= self.input.len()
    }

    /// Consume the next bare word (`[A-Za-z_][A-Za-z0-9_]*`), if any.
    fn take_word(&mut self) -> Option<&'a str> {
        self.skip_whitespace();
        let rest = &self.input[self.pos..];
        match rest.chars().next() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
            _ => return None,
        }
        let end = rest
            .char_indices()
            .find(|(_, c)| !(c.is_ascii_alphanumeric() || *c == '_'))
            .map(|(idx, _)| idx)
            .unwrap_or(rest.len());
        let word = &rest[..end];
        self.pos += end;
        Some(word)
    }

    /// Require `keyword` (case-insensitive). A mismatched word is consumed
    /// before reporting, so the failure points just past the offending word.
    pub fn expect_keyword(&mut self, keyword: &str) -> Result<(), SyntaxError> {
        match self.take_word() {
            Some(word) if word.eq_ignore_ascii_case(keyword) => Ok(()),
            Some(word) => Err(self.error(format!("expected {}, found '{}'", keyword, word))),
            None => Err(self.error_expected(keyword)),
        }
    }

    /// Consume `keyword` if it is next; otherwise leave the cursor untouched.
    pub fn accept_keyword(&mut self, keyword: &str) -> bool {
        let save = self.pos;
        match self.take_word() {
            Some(word) if word.eq_ignore_ascii_case(keyword) => true,
            _ => {
                self.pos = save;
                false
            }
        }
    }

    /// All-or-nothing variant of [`Cursor::accept_keyword`] for multi-word
    /// optional clauses such as `IF NOT EXISTS`.
    pub fn accept_keywords(&mut self, keywords: &[&str]) -> bool {
        let save = self.pos;
        for keyword in keywords {
            if !self.accept_keyword(keyword) {
                self.pos = save;
                return false;
            }
        }
        true
    }

    /// Parse an identifier. Bare identifiers must not be reserved words;
    /// `"quoted"` and `` `quoted` `` identifiers bypass the restriction.
    pub fn identifier(&mut self) -> Result<String, SyntaxError> {
        self.skip_whitespace();
        if let Some(quote) = self.peek_char().filter(|c| *c == '"' || *c == '`') {
            return self.quoted(quote);
        }
        match self.take_word() {
            Some(word) if is_reserved(word) => Err(self.error(format!(
                "reserved word '{}' cannot be used as an identifier",
                word
            ))),
            Some(word) => Ok(word.to_string()),
            None => Err(self.error_expected("identifier")),
        }
    }

    fn quoted(&mut self, quote: char) -> Result<String, SyntaxError> {
        let start = self.pos;
        self.pos += quote.len_utf8();
        let rest = &self.input[self.pos..];
        match rest.find(quote) {
            Some(end) => {
                let value = rest[..end].to_string();
                self.pos += end + quote.len_utf8();
                Ok(value)
            }
            None => {
                self.pos = self.input.len();
                Err(self.error_at(start, "unterminated quoted identifier"))
            }
        }
    }

    /// Parse a possibly qualified `[database.]table` reference.
    pub fn table_ref(&mut self) -> Result<TableRef, SyntaxError> {
        let first = self.identifier()?;
        if self.accept_symbol('.') {
            let table = self.identifier()?;
            Ok(TableRef::qualified(first, table))
        } else {
            Ok(TableRef::bare(first))
        }
    }

    /// Parse a dotted provider/package name (`strata.datasource.vora`).
    /// Segments are not subject to the reserved-word restriction.
    pub fn provider_name(&mut self) -> Result<String, SyntaxError> {
        let mut parts: Vec<&str> = Vec::new();
        loop {
            match self.take_word() {
                Some(word) => parts.push(word),
                None => return Err(self.error_expected("provider name")),
            }
            if !self.accept_symbol('.') {
                break;
            }
        }
        Ok(parts.join("."))
    }

    /// Parse a dotted option key. Reserved words are allowed here.
    pub fn option_key(&mut self) -> Result<String, SyntaxError> {
        let mut parts: Vec<&str> = Vec::new();
        loop {
            match self.take_word() {
                Some(word) => parts.push(word),
                None => return Err(self.error_expected("option key")),
            }
            if !self.accept_symbol('.') {
                break;
            }
        }
        Ok(parts.join("."))
    }

    /// Parse an optionally signed integer literal.
    pub fn integer(&mut self) -> Result<i64, SyntaxError> {
        self.skip_whitespace();
        let rest = self.input[self.pos..].as_bytes();
        let mut len = 0;
        if len < rest.len() && (rest[len] == b'+' || rest[len] == b'-') {
            len += 1;
        }
        let digits_start = len;
        while len < rest.len() && rest[len].is_ascii_digit() {
            len += 1;
        }
        if len == digits_start {
            return Err(self.error_expected("integer literal"));
        }
        let text = &self.input[self.pos..self.pos + len];
        self.pos += len;
        text.parse::<i64>()
            .map_err(|_| self.error("integer literal out of range"))
    }

    /// Parse a non-negative integer that fits a count (partition counts,
    /// parts counts, type lengths).
    pub fn unsigned_integer(&mut self) -> Result<u32, SyntaxError> {
        let value = self.integer()?;
        u32::try_from(value).map_err(|_| self.error("expected a non-negative integer"))
    }

    /// Parse a `'...'` or `"..."` string literal.
    pub fn string_literal(&mut self) -> Result<String, SyntaxError> {
        self.skip_whitespace();
        let quote = match self.peek_char() {
            Some(c @ ('"' | '\'')) => c,
            _ => return Err(self.error_expected("string literal")),
        };
        let start = self.pos;
        self.pos += quote.len_utf8();
        let rest = &self.input[self.pos..];
        match rest.find(quote) {
            Some(end) => {
                let value = rest[..end].to_string();
                self.pos += end + quote.len_utf8();
                Ok(value)
            }
            None => {
                self.pos = self.input.len();
                Err(self.error_at(start, "unterminated string literal"))
            }
        }
    }

    pub fn expect_symbol(&mut self, symbol: char) -> Result<(), SyntaxError> {
        self.skip_whitespace();
        match self.peek_char() {
            Some(c) if c == symbol => {
                self.pos += c.len_utf8();
                Ok(())
            }
            Some(c) => Err(self.error(format!("expected '{}', found '{}'", symbol, c))),
            None => Err(self.error(format!("expected '{}'", symbol))),
        }
    }

    pub fn accept_symbol(&mut self, symbol: char) -> bool {
        self.skip_whitespace();
        match self.peek_char() {
            Some(c) if c == symbol => {
                self.pos += c.len_utf8();
                true
            }
            _ => false,
        }
    }

    /// Parse a SQL data type name with optional length/precision arguments
    /// (`integer`, `varchar(10)`, `decimal(12,4)`).
    pub fn data_type(&mut self) -> Result<DataType, SyntaxError> {
        let name = match self.take_word() {
            Some(word) => word,
            None => return Err(self.error_expected("data type")),
        };
        let mut args = Vec::new();
        if self.accept_symbol('(') {
            loop {
                args.push(self.unsigned_integer()? as u64);
                if !self.accept_symbol(',') {
                    break;
                }
            }
            self.expect_symbol(')')?;
        }
        map_type_name_to_arrow(name, &args).map_err(|message| self.error(message))
    }

    /// Consume the remainder of the input verbatim, returning the 1-based
    /// line/column of its first character. Used for `AS <query>` and `USE`
    /// tails that other grammars interpret.
    pub fn take_rest(&mut self) -> (usize, usize, &'a str) {
        self.skip_whitespace();
        let (line, column) = self.line_col();
        let rest = &self.input[self.pos..];
        self.pos = self.input.len();
        (line, column, rest)
    }

    /// Require that nothing but whitespace (and at most one trailing `;`)
    /// remains: trailing unconsumed input is itself a syntax failure.
    pub fn finish(&mut self) -> Result<(), SyntaxError> {
        self.accept_symbol(';');
        self.skip_whitespace();
        if self.pos < self.input.len() {
            return Err(self.error_expected("end of statement"));
        }
        Ok(())
    }
}

/// Parse the shared `( key "value" [, key "value"]* )` options clause body.
/// The caller has already consumed the `OPTIONS` keyword; an empty
/// `OPTIONS()` is valid and yields an empty map.
pub fn parse_options_clause(cur: &mut Cursor<'_>) -> Result<OptionMap, SyntaxError> {
    cur.expect_symbol('(')?;
    let mut options = OptionMap::new();
    if cur.accept_symbol(')') {
        return Ok(options);
    }
    loop {
        let key = cur.option_key()?;
        let value = cur.string_literal()?;
        options.insert(key, value);
        if !cur.accept_symbol(',') {
            break;
        }
    }
    cur.expect_symbol(')')?;
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_fails_at_line_one_column_one() {
        let mut cur = Cursor::new("");
        let err = cur.expect_keyword("CREATE").unwrap_err();
        assert_eq!((err.line, err.column), (1, 1));
    }

    #[test]
    fn blank_lines_fail_past_the_last_newline() {
        let mut cur = Cursor::new("\n\n\n");
        let err = cur.expect_keyword("CREATE").unwrap_err();
        assert_eq!((err.line, err.column), (4, 1));
    }

    #[test]
    fn keyword_mismatch_reports_past_the_word() {
        let mut cur = Cursor::new("CREATE TEMPORARY TABL____ t");
        cur.expect_keyword("CREATE").unwrap();
        assert!(cur.accept_keyword("TEMPORARY"));
        let err = cur.expect_keyword("TABLE").unwrap_err();
        // "CREATE TEMPORARY TABL____" is 25 characters; the failure points
        // just past the malformed keyword.
        assert_eq!((err.line, err.column), (1, 26));
        assert!(err.message.contains("TABLE"));
    }

    #[test]
    fn accept_keywords_backtracks_on_partial_match() {
        let mut cur = Cursor::new("IF NOT banana");
        assert!(!cur.accept_keywords(&["IF", "NOT", "EXISTS"]));
        // The cursor is back at the start, so IF is still available.
        assert!(cur.accept_keyword("IF"));
    }

    #[test]
    fn reserved_word_rejected_as_identifier() {
        let mut cur = Cursor::new("table");
        let err = cur.identifier().unwrap_err();
        assert!(err.message.contains("reserved word"));
    }

    #[test]
    fn quoted_identifier_allows_reserved_words() {
        let mut cur = Cursor::new("\"table\"");
        assert_eq!(cur.identifier().unwrap(), "table");
    }

    #[test]
    fn qualified_table_ref() {
        let mut cur = Cursor::new("prod.events rest");
        let table = cur.table_ref().unwrap();
        assert_eq!(table, TableRef::qualified("prod", "events"));
    }

    #[test]
    fn provider_names_keep_their_dots() {
        let mut cur = Cursor::new("strata.datasource.vora OPTIONS");
        assert_eq!(cur.provider_name().unwrap(), "strata.datasource.vora");
    }

    #[test]
    fn signed_integers() {
        let mut cur = Cursor::new("-42 17");
        assert_eq!(cur.integer().unwrap(), -42);
        assert_eq!(cur.integer().unwrap(), 17);
    }

    #[test]
    fn options_clause_round_trip() {
        let mut cur = Cursor::new("(hosts \"alpha,beta\", Zkurls 'zk:2181')");
        let options = parse_options_clause(&mut cur).unwrap();
        assert_eq!(options.get("hosts"), Some("alpha,beta"));
        assert_eq!(options.get("zkurls"), Some("zk:2181"));
        assert!(cur.finish().is_ok());
    }

    #[test]
    fn empty_options_clause_is_valid() {
        let mut cur = Cursor::new("()");
        let options = parse_options_clause(&mut cur).unwrap();
        assert!(options.is_empty());
    }

    #[test]
    fn unterminated_options_clause_fails() {
        let mut cur = Cursor::new("(key \"value\"");
        assert!(parse_options_clause(&mut cur).is_err());
    }

    #[test]
    fn finish_tolerates_one_trailing_semicolon() {
        let mut cur = Cursor::new("  ; ");
        assert!(cur.finish().is_ok());

        let mut cur = Cursor::new(" ; extra");
        assert!(cur.finish().is_err());
    }

    #[test]
    fn data_types_with_arguments() {
        use arrow::datatypes::DataType;

        let mut cur = Cursor::new("varchar(200)");
        assert_eq!(cur.data_type().unwrap(), DataType::Utf8);

        let mut cur = Cursor::new("decimal(12, 4)");
        assert_eq!(cur.data_type().unwrap(), DataType::Decimal128(12, 4));
    }
}
