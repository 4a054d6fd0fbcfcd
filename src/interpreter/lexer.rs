use logos::Logos;

use crate::ast::Operator;

/// Represents a lexical token in a line of input.
///
/// Parentheses are structural only; they never become tree nodes. Every
/// accepted operator spelling lexes to `Token::Operator` and the parser reads
/// the original spelling back from the token's span.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(skip r"[ \t\f\r\n]+")]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `-7` or `3.5`.
    ///
    /// The fractional part is lexed but discarded when the literal is read.
    #[regex(r"-?[0-9]+(\.[0-9]+)?", |lex| lex.slice().to_string())]
    Number(String),
    /// Operator tokens: `+ - * / %` and `add sub mul div`.
    #[token("+", |_| Operator::Add)]
    #[token("add", |_| Operator::Add)]
    #[token("-", |_| Operator::Sub)]
    #[token("sub", |_| Operator::Sub)]
    #[token("*", |_| Operator::Mul)]
    #[token("mul", |_| Operator::Mul)]
    #[token("/", |_| Operator::Div)]
    #[token("div", |_| Operator::Div)]
    #[token("%", |_| Operator::Rem)]
    Operator(Operator),
    /// Any other bare word. Words are not part of the grammar; the parser
    /// rejects them with a diagnostic naming the word.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Word(String),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

/// A token paired with the byte range it was lexed from.
pub type Spanned = (Token, std::ops::Range<usize>);
