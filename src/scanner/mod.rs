//! Lexical analysis for the minilang language.
//!
//! [`LexicalAnalyzer`] produces one token per call, interning identifier
//! names and literal constant text in its [`SymbolTable`]. The [`scan`]
//! wrapper drives a full pass, batching every lexical error so one scan
//! surfaces all of them.

pub mod lexer;
pub mod stream;
pub mod symbol_table;
pub mod token;

use crate::error::CompileError;
use lexer::LexicalAnalyzer;
use symbol_table::SymbolTable;
use token::{Token, TokenKind};

/// Result of a full scan: the token list (EOF included) and the symbol
/// table its secondary values index into.
#[derive(Debug)]
pub struct ScanOutput {
    pub tokens: Vec<Token>,
    pub symbols: SymbolTable,
}

/// Scan source code to end of input. Errors are collected, not fatal; the
/// whole input is always consumed.
pub fn scan(source: &str) -> Result<ScanOutput, Vec<CompileError>> {
    let mut lexer = LexicalAnalyzer::new(source);
    let mut tokens = Vec::new();
    let mut errors = Vec::new();

    loop {
        let token = lexer.next_token();
        match token.kind {
            TokenKind::Unknown => {
                let lexeme = &source[token.span.offset..token.span.offset + token.span.len];
                errors.push(
                    CompileError::scan(
                        format!("unexpected character '{lexeme}'"),
                        token.span.offset,
                        token.span.len,
                    )
                    .with_source_code("input", source),
                );
            }
            TokenKind::UnterminatedLiteral => {
                errors.push(
                    CompileError::unterminated_literal(token.span.offset, token.span.len.max(1))
                        .with_source_code("input", source),
                );
            }
            TokenKind::Eof => {
                tokens.push(token);
                break;
            }
            _ => tokens.push(token),
        }
    }

    if errors.is_empty() {
        Ok(ScanOutput {
            tokens,
            symbols: lexer.into_symbol_table(),
        })
    } else {
        Err(errors)
    }
}
