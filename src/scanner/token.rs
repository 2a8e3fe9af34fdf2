use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum TokenKind {
    // Literal classes; these carry a secondary index into the symbol table
    #[strum(serialize = "IDENTIFIER")]
    Identifier,
    #[strum(serialize = "NUMERAL")]
    Numeral,
    #[strum(serialize = "STRING")]
    StringLiteral,
    #[strum(serialize = "CHARACTER")]
    CharacterLiteral,

    // Single-character symbols
    #[strum(serialize = ":")]
    Colon,
    #[strum(serialize = "+")]
    Plus,
    #[strum(serialize = "-")]
    Minus,
    #[strum(serialize = ";")]
    SemiColon,
    #[strum(serialize = ",")]
    Comma,
    #[strum(serialize = "[")]
    LeftSquare,
    #[strum(serialize = "]")]
    RightSquare,
    #[strum(serialize = "{{")]
    LeftBraces,
    #[strum(serialize = "}}")]
    RightBraces,
    #[strum(serialize = "(")]
    LeftParenthesis,
    #[strum(serialize = ")")]
    RightParenthesis,
    #[strum(serialize = "*")]
    Times,
    #[strum(serialize = ".")]
    Dot,
    #[strum(serialize = "/")]
    Divide,

    // One or two character operators
    #[strum(serialize = "++")]
    PlusPlus,
    #[strum(serialize = "--")]
    MinusMinus,
    #[strum(serialize = "=")]
    Equals,
    #[strum(serialize = "==")]
    EqualEqual,
    #[strum(serialize = "&&")]
    And,
    #[strum(serialize = "||")]
    Or,
    #[strum(serialize = "!")]
    Not,
    #[strum(serialize = "!=")]
    NotEqual,
    #[strum(serialize = "<")]
    LessThan,
    #[strum(serialize = "<=")]
    LessOrEqual,
    #[strum(serialize = ">")]
    GreaterThan,
    #[strum(serialize = ">=")]
    GreaterOrEqual,

    // Keywords
    #[strum(serialize = "array")]
    Array,
    #[strum(serialize = "boolean")]
    Boolean,
    #[strum(serialize = "break")]
    Break,
    #[strum(serialize = "char")]
    Char,
    #[strum(serialize = "continue")]
    Continue,
    #[strum(serialize = "do")]
    Do,
    #[strum(serialize = "else")]
    Else,
    #[strum(serialize = "false")]
    False,
    #[strum(serialize = "function")]
    Function,
    #[strum(serialize = "if")]
    If,
    #[strum(serialize = "integer")]
    Integer,
    #[strum(serialize = "of")]
    Of,
    #[strum(serialize = "string")]
    String,
    #[strum(serialize = "struct")]
    Struct,
    #[strum(serialize = "true")]
    True,
    #[strum(serialize = "type")]
    Type,
    #[strum(serialize = "var")]
    Var,
    #[strum(serialize = "while")]
    While,

    #[strum(serialize = "EOF")]
    Eof,
    #[strum(serialize = "UNKNOWN")]
    Unknown,
    #[strum(serialize = "UNTERMINATED")]
    UnterminatedLiteral,
}

impl TokenKind {
    /// Kinds whose secondary value indexes the symbol table.
    pub fn has_secondary(self) -> bool {
        matches!(
            self,
            Self::Identifier | Self::Numeral | Self::StringLiteral | Self::CharacterLiteral
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub offset: usize,
    pub len: usize,
}

impl Span {
    pub fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        miette::SourceSpan::new(span.offset.into(), span.len)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Index into the symbol table for identifier and literal kinds.
    pub secondary: Option<usize>,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, secondary: Option<usize>, span: Span) -> Self {
        Self {
            kind,
            secondary,
            span,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.secondary {
            Some(index) => write!(f, "{:?} #{} @{}", self.kind, index, self.span.offset),
            None => write!(f, "{:?} @{}", self.kind, self.span.offset),
        }
    }
}

pub fn keyword_kind(word: &str) -> Option<TokenKind> {
    match word {
        "array" => Some(TokenKind::Array),
        "boolean" => Some(TokenKind::Boolean),
        "break" => Some(TokenKind::Break),
        "char" => Some(TokenKind::Char),
        "continue" => Some(TokenKind::Continue),
        "do" => Some(TokenKind::Do),
        "else" => Some(TokenKind::Else),
        "false" => Some(TokenKind::False),
        "function" => Some(TokenKind::Function),
        "if" => Some(TokenKind::If),
        "integer" => Some(TokenKind::Integer),
        "of" => Some(TokenKind::Of),
        "string" => Some(TokenKind::String),
        "struct" => Some(TokenKind::Struct),
        "true" => Some(TokenKind::True),
        "type" => Some(TokenKind::Type),
        "var" => Some(TokenKind::Var),
        "while" => Some(TokenKind::While),
        _ => None,
    }
}

pub fn symbol_kind(c: char) -> Option<TokenKind> {
    match c {
        ':' => Some(TokenKind::Colon),
        '+' => Some(TokenKind::Plus),
        '-' => Some(TokenKind::Minus),
        ';' => Some(TokenKind::SemiColon),
        ',' => Some(TokenKind::Comma),
        '[' => Some(TokenKind::LeftSquare),
        ']' => Some(TokenKind::RightSquare),
        '{' => Some(TokenKind::LeftBraces),
        '}' => Some(TokenKind::RightBraces),
        '(' => Some(TokenKind::LeftParenthesis),
        ')' => Some(TokenKind::RightParenthesis),
        '*' => Some(TokenKind::Times),
        '.' => Some(TokenKind::Dot),
        '/' => Some(TokenKind::Divide),
        _ => None,
    }
}
