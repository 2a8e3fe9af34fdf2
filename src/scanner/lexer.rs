use crate::scanner::stream::CharacterStream;
use crate::scanner::symbol_table::SymbolTable;
use crate::scanner::token::{Span, Token, TokenKind, keyword_kind, symbol_kind};

/// The scanning state machine. Produces one token per `next_token` call,
/// interning identifiers and literal text in its symbol table as a side
/// effect.
pub struct LexicalAnalyzer<'a> {
    stream: CharacterStream<'a>,
    symbols: SymbolTable,
    lexical_error: bool,
    // Line/column of the first character of the token most recently
    // scanned. Diagnostics report this, the position of the offending
    // character itself, not the cursor after it was consumed.
    token_position: (usize, usize),
}

impl<'a> LexicalAnalyzer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            stream: CharacterStream::new(source),
            symbols: SymbolTable::new(),
            lexical_error: false,
            token_position: (1, 0),
        }
    }

    /// Scan the next token, maximal munch. At end of input this keeps
    /// returning `Eof`.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();
        self.token_position = self.stream.position();
        let start = self.stream.offset();

        let Some(c) = self.stream.peek() else {
            return Token::new(TokenKind::Eof, None, Span::new(start, 0));
        };

        let (kind, secondary) = if c.is_alphabetic() {
            let word = self.consume_word();
            match keyword_kind(&word) {
                Some(keyword) => (keyword, None),
                None => {
                    let id = self.symbols.get_identifier(&word);
                    (TokenKind::Identifier, Some(id))
                }
            }
        } else if c.is_ascii_digit() {
            let digits = self.consume_digits();
            let index = self.symbols.add_constant(digits);
            (TokenKind::Numeral, Some(index))
        } else if c == '"' {
            self.consume_string()
        } else if c == '\'' {
            self.consume_character()
        } else {
            (self.match_symbol_or_operator(c), None)
        };

        let len = self.stream.offset() - start;
        Token::new(kind, secondary, Span::new(start, len))
    }

    fn skip_whitespace(&mut self) {
        while self.stream.peek().is_some_and(char::is_whitespace) {
            self.stream.advance();
        }
    }

    fn consume_word(&mut self) -> String {
        let mut word = String::new();
        while let Some(c) = self.stream.peek() {
            if !c.is_alphanumeric() && c != '_' {
                break;
            }
            word.push(c);
            self.stream.advance();
        }
        word
    }

    fn consume_digits(&mut self) -> String {
        let mut digits = String::new();
        while let Some(c) = self.stream.peek() {
            if !c.is_ascii_digit() {
                break;
            }
            digits.push(c);
            self.stream.advance();
        }
        digits
    }

    /// String literal, stored with its delimiting quotes verbatim. Reaching
    /// end of input before the closing quote yields `UnterminatedLiteral`;
    /// the partial text is still recorded.
    fn consume_string(&mut self) -> (TokenKind, Option<usize>) {
        let mut text = String::from('"');
        self.stream.advance();
        while let Some(c) = self.stream.peek() {
            text.push(c);
            self.stream.advance();
            if c == '"' {
                let index = self.symbols.add_constant(text);
                return (TokenKind::StringLiteral, Some(index));
            }
        }
        let index = self.symbols.add_constant(text);
        (TokenKind::UnterminatedLiteral, Some(index))
    }

    /// Character literal: exactly one character between single quotes,
    /// stored without them. The closing quote is assumed, not validated.
    fn consume_character(&mut self) -> (TokenKind, Option<usize>) {
        self.stream.advance();
        match self.stream.peek() {
            Some(body) => {
                self.stream.advance();
                self.stream.advance();
                let index = self.symbols.add_constant(body.to_string());
                (TokenKind::CharacterLiteral, Some(index))
            }
            None => {
                let index = self.symbols.add_constant(String::new());
                (TokenKind::UnterminatedLiteral, Some(index))
            }
        }
    }

    /// Operators and punctuation. Two-character operators win over their
    /// single-character prefixes via one character of lookahead; `&` and
    /// `|` have no single-character fallback and come out `Unknown`.
    fn match_symbol_or_operator(&mut self, c: char) -> TokenKind {
        self.stream.advance();
        match c {
            '+' if self.stream.peek() == Some('+') => self.accept(TokenKind::PlusPlus),
            '-' if self.stream.peek() == Some('-') => self.accept(TokenKind::MinusMinus),
            '=' if self.stream.peek() == Some('=') => self.accept(TokenKind::EqualEqual),
            '=' => TokenKind::Equals,
            '&' if self.stream.peek() == Some('&') => self.accept(TokenKind::And),
            '|' if self.stream.peek() == Some('|') => self.accept(TokenKind::Or),
            '<' if self.stream.peek() == Some('=') => self.accept(TokenKind::LessOrEqual),
            '<' => TokenKind::LessThan,
            '>' if self.stream.peek() == Some('=') => self.accept(TokenKind::GreaterOrEqual),
            '>' => TokenKind::GreaterThan,
            '!' if self.stream.peek() == Some('=') => self.accept(TokenKind::NotEqual),
            '!' => TokenKind::Not,
            _ => symbol_kind(c).unwrap_or(TokenKind::Unknown),
        }
    }

    fn accept(&mut self, kind: TokenKind) -> TokenKind {
        self.stream.advance();
        kind
    }

    /// Print a diagnostic for an error token and set the sticky error flag.
    /// Non-error tokens are ignored, so callers can pass every token.
    pub fn report_error(&mut self, token: &Token) {
        let (line, column) = self.token_position;
        match token.kind {
            TokenKind::Unknown => {
                self.lexical_error = true;
                println!("Character not expected at line {line}, column {column}");
            }
            TokenKind::UnterminatedLiteral => {
                self.lexical_error = true;
                println!("Unterminated literal at line {line}, column {column}");
            }
            _ => {}
        }
    }

    /// Drive the scan to end of input, reporting every error token as it
    /// appears. Errors are non-fatal; one pass surfaces all of them.
    pub fn run(&mut self) {
        loop {
            let token = self.next_token();
            if token.kind == TokenKind::Eof {
                break;
            }
            if matches!(
                token.kind,
                TokenKind::Unknown | TokenKind::UnterminatedLiteral
            ) {
                self.report_error(&token);
            }
        }
        if !self.lexical_error {
            println!("Compiled successfully.");
        }
    }

    pub fn had_error(&self) -> bool {
        self.lexical_error
    }

    /// `(line, column)` of the first character of the last scanned token.
    pub fn token_position(&self) -> (usize, usize) {
        self.token_position
    }

    pub fn symbol_table(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn into_symbol_table(self) -> SymbolTable {
        self.symbols
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        let mut lexer = LexicalAnalyzer::new(source);
        let mut kinds = Vec::new();
        loop {
            let token = lexer.next_token();
            kinds.push(token.kind);
            if token.kind == TokenKind::Eof {
                break;
            }
        }
        kinds
    }

    #[test]
    fn single_symbols() {
        assert_eq!(
            kinds(": + - ; , [ ] { } ( ) * . /"),
            vec![
                TokenKind::Colon,
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::SemiColon,
                TokenKind::Comma,
                TokenKind::LeftSquare,
                TokenKind::RightSquare,
                TokenKind::LeftBraces,
                TokenKind::RightBraces,
                TokenKind::LeftParenthesis,
                TokenKind::RightParenthesis,
                TokenKind::Times,
                TokenKind::Dot,
                TokenKind::Divide,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn two_character_operators() {
        assert_eq!(
            kinds("++ -- == && || <= >= !="),
            vec![
                TokenKind::PlusPlus,
                TokenKind::MinusMinus,
                TokenKind::EqualEqual,
                TokenKind::And,
                TokenKind::Or,
                TokenKind::LessOrEqual,
                TokenKind::GreaterOrEqual,
                TokenKind::NotEqual,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn single_character_fallbacks() {
        assert_eq!(
            kinds("= ! < >"),
            vec![
                TokenKind::Equals,
                TokenKind::Not,
                TokenKind::LessThan,
                TokenKind::GreaterThan,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn adjacent_operators_munch_greedily() {
        // `==` must not scan as two `=`; `<=` must not scan as `<` `=`.
        assert_eq!(
            kinds("a == b <= c"),
            vec![
                TokenKind::Identifier,
                TokenKind::EqualEqual,
                TokenKind::Identifier,
                TokenKind::LessOrEqual,
                TokenKind::Identifier,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn lone_ampersand_and_pipe_are_unknown() {
        assert_eq!(
            kinds("& |"),
            vec![TokenKind::Unknown, TokenKind::Unknown, TokenKind::Eof]
        );
    }

    #[test]
    fn keywords_do_not_reach_the_identifier_table() {
        let mut lexer = LexicalAnalyzer::new("while whilex");
        assert_eq!(lexer.next_token().kind, TokenKind::While);
        assert_eq!(lexer.symbol_table().identifier_count(), 0);
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::Identifier);
        assert_eq!(token.secondary, Some(0));
    }

    #[test]
    fn identifier_ids_are_reused() {
        let mut lexer = LexicalAnalyzer::new("var1 var2 var1");
        let ids: Vec<_> = (0..3).map(|_| lexer.next_token().secondary).collect();
        assert_eq!(ids, vec![Some(0), Some(1), Some(0)]);
        assert_eq!(lexer.symbol_table().identifier_count(), 2);
    }

    #[test]
    fn numerals_are_stored_as_text() {
        let mut lexer = LexicalAnalyzer::new("123 456 0");
        for expected in ["123", "456", "0"] {
            let token = lexer.next_token();
            assert_eq!(token.kind, TokenKind::Numeral);
            let index = token.secondary.unwrap();
            assert_eq!(lexer.symbol_table().constant(index), Some(expected));
        }
    }

    #[test]
    fn duplicate_numerals_get_distinct_indices() {
        let mut lexer = LexicalAnalyzer::new("123 123");
        let first = lexer.next_token().secondary.unwrap();
        let second = lexer.next_token().secondary.unwrap();
        assert_ne!(first, second);
        assert_eq!(lexer.symbol_table().constant(first), Some("123"));
        assert_eq!(lexer.symbol_table().constant(second), Some("123"));
    }

    #[test]
    fn string_constants_keep_their_quotes() {
        let mut lexer = LexicalAnalyzer::new("\"hello\" \"test string\"");
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::StringLiteral);
        let index = token.secondary.unwrap();
        assert_eq!(lexer.symbol_table().constant(index), Some("\"hello\""));
        let index = lexer.next_token().secondary.unwrap();
        assert_eq!(
            lexer.symbol_table().constant(index),
            Some("\"test string\"")
        );
    }

    #[test]
    fn empty_string_literal() {
        let mut lexer = LexicalAnalyzer::new("\"\"");
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::StringLiteral);
        let index = token.secondary.unwrap();
        assert_eq!(lexer.symbol_table().constant(index), Some("\"\""));
    }

    #[test]
    fn character_constants_drop_their_quotes() {
        let mut lexer = LexicalAnalyzer::new("'a' 'b' '1'");
        for expected in ["a", "b", "1"] {
            let token = lexer.next_token();
            assert_eq!(token.kind, TokenKind::CharacterLiteral);
            let index = token.secondary.unwrap();
            assert_eq!(lexer.symbol_table().constant(index), Some(expected));
        }
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    }

    #[test]
    fn unterminated_string_is_its_own_kind() {
        let mut lexer = LexicalAnalyzer::new("\"abc");
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::UnterminatedLiteral);
        let index = token.secondary.unwrap();
        assert_eq!(lexer.symbol_table().constant(index), Some("\"abc"));
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    }

    #[test]
    fn unterminated_character_is_its_own_kind() {
        let mut lexer = LexicalAnalyzer::new("'");
        assert_eq!(lexer.next_token().kind, TokenKind::UnterminatedLiteral);
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    }

    #[test]
    fn unknown_character() {
        let mut lexer = LexicalAnalyzer::new("@");
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::Unknown);
        assert_eq!(token.secondary, None);
    }

    #[test]
    fn eof_is_idempotent() {
        let mut lexer = LexicalAnalyzer::new("x");
        lexer.next_token();
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    }

    #[test]
    fn error_position_is_the_offending_character() {
        let mut lexer = LexicalAnalyzer::new("ab\n  @");
        lexer.next_token(); // ab
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::Unknown);
        assert_eq!(lexer.token_position(), (2, 2));
    }

    #[test]
    fn report_error_sets_the_sticky_flag() {
        let mut lexer = LexicalAnalyzer::new("@");
        let token = lexer.next_token();
        assert!(!lexer.had_error());
        lexer.report_error(&token);
        assert!(lexer.had_error());
    }

    #[test]
    fn report_error_ignores_ordinary_tokens() {
        let mut lexer = LexicalAnalyzer::new("x");
        let token = lexer.next_token();
        lexer.report_error(&token);
        assert!(!lexer.had_error());
    }

    #[test]
    fn run_continues_past_errors() {
        let mut lexer = LexicalAnalyzer::new("@ x @ y");
        lexer.run();
        assert!(lexer.had_error());
        // The scan kept going: both identifiers were interned.
        assert_eq!(lexer.symbol_table().identifier_count(), 2);
    }

    #[test]
    fn clean_run_has_no_error() {
        let mut lexer = LexicalAnalyzer::new("var x: integer;");
        lexer.run();
        assert!(!lexer.had_error());
    }

    #[test]
    fn spans_cover_the_lexeme() {
        let mut lexer = LexicalAnalyzer::new("var x = 42;");
        assert_eq!(lexer.next_token().span, Span::new(0, 3)); // var
        assert_eq!(lexer.next_token().span, Span::new(4, 1)); // x
        assert_eq!(lexer.next_token().span, Span::new(6, 1)); // =
        assert_eq!(lexer.next_token().span, Span::new(8, 2)); // 42
        assert_eq!(lexer.next_token().span, Span::new(10, 1)); // ;
        assert_eq!(lexer.next_token().span, Span::new(11, 0)); // EOF
    }
}
