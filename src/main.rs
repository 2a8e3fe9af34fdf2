use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use minilang::scanner;
use minilang::scanner::lexer::LexicalAnalyzer;
use minilang::scanner::symbol_table::SymbolTable;
use minilang::scanner::token::{Token, TokenKind};

#[derive(Parser, Debug)]
#[command(name = "minilang", about = "Lexical analyzer for the minilang language")]
struct Cli {
    /// Source file to scan
    file: PathBuf,

    /// Dump tokens and exit
    #[arg(long)]
    dump_tokens: bool,

    /// Dump interned identifiers and constants and exit
    #[arg(long)]
    dump_symbols: bool,
}

fn describe(token: &Token, symbols: &SymbolTable) -> String {
    let lexeme = match token.secondary {
        Some(index) if token.kind == TokenKind::Identifier => {
            symbols.identifier_name(index).unwrap_or("").to_string()
        }
        Some(index) => symbols.constant(index).unwrap_or("").to_string(),
        None => token.kind.to_string(),
    };
    format!("{:?} '{}' @{}", token.kind, lexeme, token.span.offset)
}

fn report_scan_errors(errors: &[minilang::CompileError]) -> anyhow::Error {
    for e in errors {
        eprintln!("{e}");
    }
    anyhow::anyhow!("{} error(s)", errors.len())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let source = std::fs::read_to_string(&cli.file)
        .with_context(|| format!("read source file '{}'", cli.file.display()))?;

    if cli.dump_tokens || cli.dump_symbols {
        let output = scanner::scan(&source).map_err(|e| report_scan_errors(&e))?;
        if cli.dump_tokens {
            for token in &output.tokens {
                println!("{}", describe(token, &output.symbols));
            }
        }
        if cli.dump_symbols {
            for (id, name) in output.symbols.identifiers() {
                println!("identifier {id}: {name}");
            }
            for (index, text) in output.symbols.constants().iter().enumerate() {
                println!("constant {index}: {text}");
            }
        }
        return Ok(());
    }

    let mut analyzer = LexicalAnalyzer::new(&source);
    analyzer.run();
    if analyzer.had_error() {
        std::process::exit(1);
    }
    Ok(())
}
