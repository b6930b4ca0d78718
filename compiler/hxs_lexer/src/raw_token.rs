//! Raw logos tokens, before positions and nesting are applied.

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub(crate) enum RawToken {
    // Literals
    #[regex(r"[0-9][0-9A-Za-z_]*(\.[0-9A-Za-z_]+)?")]
    Number,
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Word,
    #[regex(r"'([^'\\]|\\(.|\n))*'")]
    #[regex(r#""([^"\\]|\\(.|\n))*""#)]
    #[regex(r"`([^`\\]|\\(.|\n))*`")]
    Glob,
    #[regex(r"'([^'\\]|\\(.|\n))*")]
    #[regex(r#""([^"\\]|\\(.|\n))*"#)]
    #[regex(r"`([^`\\]|\\(.|\n))*")]
    UnterminatedGlob,

    // Delimiters
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,

    // Symbols (spelling resolved through `Symbol::from_text`)
    #[token("**")]
    #[token("<=")]
    #[token(">=")]
    #[token("==")]
    #[token("!=")]
    #[token("&&")]
    #[token("||")]
    #[token("*")]
    #[token("/")]
    #[token("+")]
    #[token("-")]
    #[token("<")]
    #[token(">")]
    #[token("&")]
    #[token("^")]
    #[token("|")]
    #[token("!")]
    #[token("=")]
    #[token(".")]
    #[token("$")]
    #[token("#")]
    #[token("@")]
    #[token(",")]
    #[token(":")]
    #[token(";")]
    Symbol,
}
