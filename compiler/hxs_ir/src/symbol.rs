//! Operator and punctuation symbols.
//!
//! The symbol set is closed; the lexer maps source text onto it and both
//! evaluator tables key on it.

use std::fmt;

/// A symbol node's exact text, as a closed enum.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// `**`
    StarStar,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `<=`
    LtEq,
    /// `>=`
    GtEq,
    /// `==`
    EqEq,
    /// `!=`
    NotEq,
    /// `&`
    Amp,
    /// `^`
    Caret,
    /// `|`
    Pipe,
    /// `&&`
    AmpAmp,
    /// `||`
    PipePipe,
    /// `!`
    Bang,
    /// `=`
    Eq,
    /// `.`
    Dot,
    /// `$`
    Dollar,
    /// `#`
    Hash,
    /// `@`
    At,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// `;`
    Semicolon,
}

impl Symbol {
    /// Every symbol, longest spellings first.
    pub const ALL: [Symbol; 25] = [
        Symbol::StarStar,
        Symbol::LtEq,
        Symbol::GtEq,
        Symbol::EqEq,
        Symbol::NotEq,
        Symbol::AmpAmp,
        Symbol::PipePipe,
        Symbol::Star,
        Symbol::Slash,
        Symbol::Plus,
        Symbol::Minus,
        Symbol::Lt,
        Symbol::Gt,
        Symbol::Amp,
        Symbol::Caret,
        Symbol::Pipe,
        Symbol::Bang,
        Symbol::Eq,
        Symbol::Dot,
        Symbol::Dollar,
        Symbol::Hash,
        Symbol::At,
        Symbol::Comma,
        Symbol::Colon,
        Symbol::Semicolon,
    ];

    /// Source spelling of the symbol.
    pub const fn as_str(self) -> &'static str {
        match self {
            Symbol::StarStar => "**",
            Symbol::Star => "*",
            Symbol::Slash => "/",
            Symbol::Plus => "+",
            Symbol::Minus => "-",
            Symbol::Lt => "<",
            Symbol::Gt => ">",
            Symbol::LtEq => "<=",
            Symbol::GtEq => ">=",
            Symbol::EqEq => "==",
            Symbol::NotEq => "!=",
            Symbol::Amp => "&",
            Symbol::Caret => "^",
            Symbol::Pipe => "|",
            Symbol::AmpAmp => "&&",
            Symbol::PipePipe => "||",
            Symbol::Bang => "!",
            Symbol::Eq => "=",
            Symbol::Dot => ".",
            Symbol::Dollar => "$",
            Symbol::Hash => "#",
            Symbol::At => "@",
            Symbol::Comma => ",",
            Symbol::Colon => ":",
            Symbol::Semicolon => ";",
        }
    }

    /// Look up a symbol by its exact spelling.
    pub fn from_text(text: &str) -> Option<Symbol> {
        Symbol::ALL.into_iter().find(|sym| sym.as_str() == text)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
