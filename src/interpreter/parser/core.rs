use std::iter::Peekable;

use logos::Logos;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Spanned, Token},
        parser::read::{read_number, read_symbol},
        value::core::Value,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// The deepest parenthesis nesting a line may have.
///
/// Parsing, evaluation and dropping a tree all recurse once per level, so
/// this bound keeps every stage within the stack.
pub const MAX_DEPTH: usize = 256;

/// Parses one line of input into a tree.
///
/// The line is a sequence of zero or more expressions; the result is always
/// an S-expression holding them, so an empty line parses to `()` and
/// `(+ 1 2)` parses to `((+ 1 2))`.
///
/// Grammar:
/// ```text
///     input := expr*
///     expr  := number | operator | "(" expr* ")"
/// ```
///
/// # Errors
/// Returns a `ParseError` if the line contains a token outside the grammar or
/// its parentheses are unbalanced. No partial tree is returned.
///
/// # Example
/// ```
/// use clips::interpreter::{parser::core::parse, value::core::Value};
///
/// let tree = parse("(+ 1 2)").unwrap();
/// assert_eq!(tree.to_string(), "((+ 1 2))");
///
/// assert_eq!(parse("   ").unwrap(), Value::sexpr());
/// assert!(parse("(+ 1 2").is_err());
/// ```
pub fn parse(source: &str) -> ParseResult<Value> {
    let tokens = tokenize(source)?;
    log::trace!("lexed {} tokens from {source:?}", tokens.len());

    let mut iter = tokens.iter().peekable();
    let mut children = Vec::new();

    while iter.peek().is_some() {
        children.push(parse_expression(&mut iter, source, 0)?);
    }

    Ok(Value::SExpr(children))
}

/// Splits a line into spanned tokens.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` for the first character sequence no
/// token matches.
pub fn tokenize(source: &str) -> ParseResult<Vec<Spanned>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.span()));
        } else {
            return Err(ParseError::UnexpectedToken { token:  lexer.slice().to_string(),
                                                     column: column_of(source,
                                                                       lexer.span().start), });
        }
    }

    Ok(tokens)
}

/// Parses a single expression: a number, an operator or a parenthesized
/// list.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of the expression.
/// - `source`: The line being parsed, used to recover token spellings.
/// - `depth`: The number of enclosing parentheses.
fn parse_expression<'a, I>(tokens: &mut Peekable<I>,
                           source: &str,
                           depth: usize)
                           -> ParseResult<Value>
    where I: Iterator<Item = &'a Spanned>
{
    let Some((token, span)) = tokens.next() else {
        return Err(ParseError::ExpectedClosingParen { column: column_of(source, source.len()) });
    };

    match token {
        Token::Number(text) => Ok(read_number(text)),
        Token::Operator(op) => Ok(read_symbol(&source[span.clone()], *op)),
        Token::LParen => {
            let column = column_of(source, span.start);
            if depth >= MAX_DEPTH {
                return Err(ParseError::TooDeeplyNested { column });
            }
            parse_sexpr(tokens, source, column, depth + 1)
        },
        Token::RParen => {
            Err(ParseError::UnexpectedClosingParen { column: column_of(source, span.start) })
        },
        Token::Word(word) => Err(ParseError::UnexpectedToken { token:  word.clone(),
                                                               column: column_of(source,
                                                                                 span.start), }),
    }
}

/// Parses the contents of a parenthesized list up to and including its `)`.
///
/// The parentheses themselves are not represented in the tree; only the
/// expressions between them become children.
///
/// # Parameters
/// - `tokens`: Token iterator positioned just after the `(`.
/// - `source`: The line being parsed.
/// - `open_column`: Column of the `(`, reported if it is never closed.
/// - `depth`: The nesting level of this list, counting its own `(`.
fn parse_sexpr<'a, I>(tokens: &mut Peekable<I>,
                      source: &str,
                      open_column: usize,
                      depth: usize)
                      -> ParseResult<Value>
    where I: Iterator<Item = &'a Spanned>
{
    let mut children = Vec::new();

    loop {
        match tokens.peek() {
            Some((Token::RParen, _)) => {
                tokens.next();
                return Ok(Value::SExpr(children));
            },
            Some(_) => children.push(parse_expression(tokens, source, depth)?),
            None => return Err(ParseError::ExpectedClosingParen { column: open_column }),
        }
    }
}

/// Converts a byte offset into a 1-based character column.
fn column_of(source: &str, offset: usize) -> usize {
    source[..offset].chars().count() + 1
}
