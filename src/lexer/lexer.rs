use tracing::{debug, trace};

use crate::{registry::registry::IdentifierRegistry, MK_TOKEN};

use super::{
    cursor::{is_digit, is_letter_or_underscore, is_name_continue, is_whitespace, Cursor},
    tokens::{Token, TokenCategory, DELIMITERS, MULTI_CHAR_OPERATORS, OPERATOR_STARTS, RESERVED_WORDS},
};

/// Coarse classification of the character under the cursor.
///
/// Variants are listed in dispatch priority order.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Dispatch {
    LineComment,
    BlockComment,
    Name,
    Number,
    Quoted(char),
    Delimiter,
    Operator,
    Unrecognized,
}

/// Tokens and identifier table produced by one scan session.
#[derive(Debug, Clone)]
pub struct ScanResult {
    pub tokens: Vec<Token>,
    pub identifiers: IdentifierRegistry,
}

pub struct Lexer<'src> {
    cursor: Cursor<'src>,
    tokens: Vec<Token>,
    identifiers: IdentifierRegistry,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Lexer<'src> {
        Lexer {
            cursor: Cursor::new(source),
            tokens: vec![],
            identifiers: IdentifierRegistry::new(),
        }
    }

    pub fn push(&mut self, token: Token) {
        trace!(category = %token.category, lexeme = %token.lexeme, position = %token.position, "token");
        self.tokens.push(token);
    }

    fn skip_whitespace(&mut self) {
        self.cursor.eat_while(is_whitespace);
    }

    /// Classifies the current character. `None` once the buffer is exhausted.
    pub fn classify(&self) -> Option<Dispatch> {
        let current = self.cursor.current()?;

        let dispatch = match (current, self.cursor.peek(1)) {
            ('/', Some('/')) => Dispatch::LineComment,
            ('/', Some('*')) => Dispatch::BlockComment,
            _ if is_letter_or_underscore(Some(current)) => Dispatch::Name,
            _ if is_digit(Some(current)) => Dispatch::Number,
            ('"' | '\'', _) => Dispatch::Quoted(current),
            _ if DELIMITERS.contains(&current) => Dispatch::Delimiter,
            _ if OPERATOR_STARTS.contains(&current) => Dispatch::Operator,
            _ => Dispatch::Unrecognized,
        };

        Some(dispatch)
    }

    pub fn run(mut self) -> ScanResult {
        while !self.cursor.at_eof() {
            self.skip_whitespace();

            let Some(dispatch) = self.classify() else {
                break;
            };

            match dispatch {
                Dispatch::LineComment => line_comment_handler(&mut self),
                Dispatch::BlockComment => block_comment_handler(&mut self),
                Dispatch::Name => name_handler(&mut self),
                Dispatch::Number => number_handler(&mut self),
                Dispatch::Quoted(delimiter) => quoted_handler(&mut self, delimiter),
                Dispatch::Delimiter => delimiter_handler(&mut self),
                Dispatch::Operator => operator_handler(&mut self),
                Dispatch::Unrecognized => unrecognized_handler(&mut self),
            }
        }

        ScanResult {
            tokens: self.tokens,
            identifiers: self.identifiers,
        }
    }
}

fn line_comment_handler(lexer: &mut Lexer) {
    lexer.cursor.advance_n(2);
    lexer.cursor.eat_while(|c| c != Some('\n'));
}

fn block_comment_handler(lexer: &mut Lexer) {
    let start = lexer.cursor.position();
    lexer.cursor.advance_n(2);

    while !lexer.cursor.at_eof() {
        if lexer.cursor.current() == Some('*') && lexer.cursor.peek(1) == Some('/') {
            lexer.cursor.advance_n(2);
            return;
        }
        lexer.cursor.advance();
    }

    debug!(%start, "unterminated block comment closed at end of input");
}

fn name_handler(lexer: &mut Lexer) {
    let start = lexer.cursor.position();
    lexer.cursor.eat_while(is_name_continue);

    let token = if RESERVED_WORDS.contains(lexer.cursor.slice_from(start.offset)) {
        MK_TOKEN!(lexer, TokenCategory::Reserved, start)
    } else {
        let token = MK_TOKEN!(lexer, TokenCategory::Identifier, start);
        lexer.identifiers.add(&token.lexeme, start);
        token
    };

    lexer.push(token);
}

fn number_handler(lexer: &mut Lexer) {
    let start = lexer.cursor.position();
    lexer.cursor.eat_while(is_digit);

    let category = if lexer.cursor.current() == Some('.') && is_digit(lexer.cursor.peek(1)) {
        lexer.cursor.advance();
        lexer.cursor.eat_while(is_digit);
        TokenCategory::Decimal
    } else {
        TokenCategory::Integer
    };

    lexer.push(MK_TOKEN!(lexer, category, start));
}

fn quoted_handler(lexer: &mut Lexer, delimiter: char) {
    let start = lexer.cursor.position();
    lexer.cursor.advance();

    while let Some(c) = lexer.cursor.current() {
        if c == delimiter {
            break;
        }

        // Escapes pass through unchecked, including an escaped delimiter
        if c == '\\' {
            lexer.cursor.advance();
        }
        lexer.cursor.advance();
    }

    if lexer.cursor.current() == Some(delimiter) {
        lexer.cursor.advance();
    } else {
        debug!(%start, "unterminated text literal closed at end of input");
    }

    lexer.push(MK_TOKEN!(lexer, TokenCategory::TextLiteral, start));
}

fn operator_handler(lexer: &mut Lexer) {
    let start = lexer.cursor.position();

    let width = match (lexer.cursor.current(), lexer.cursor.peek(1)) {
        (Some(first), Some(second)) if is_multi_char_operator(first, second) => 2,
        // The lone character is not checked against any single-character set
        _ => 1,
    };
    lexer.cursor.advance_n(width);

    lexer.push(MK_TOKEN!(lexer, TokenCategory::Operator, start));
}

fn delimiter_handler(lexer: &mut Lexer) {
    let start = lexer.cursor.position();
    lexer.cursor.advance();
    lexer.push(MK_TOKEN!(lexer, TokenCategory::Separator, start));
}

fn unrecognized_handler(lexer: &mut Lexer) {
    let start = lexer.cursor.position();
    lexer.cursor.advance();
    lexer.push(MK_TOKEN!(lexer, TokenCategory::Unrecognized, start));
}

fn is_multi_char_operator(first: char, second: char) -> bool {
    let mut pair = String::with_capacity(2);
    pair.push(first);
    pair.push(second);

    MULTI_CHAR_OPERATORS.contains(pair.as_str())
}

/// Scans `source` into its token sequence.
pub fn scan(source: &str) -> Vec<Token> {
    scan_with_registry(source).tokens
}

/// Scans `source`, returning the tokens together with the identifier table.
///
/// Never fails: malformed input degrades to unterminated literals, silently
/// closed comments and `Unrecognized` tokens.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn scan_with_registry(source: &str) -> ScanResult {
    let result = Lexer::new(source).run();

    debug!(
        tokens = result.tokens.len(),
        identifiers = result.identifiers.len(),
        "scan complete"
    );

    result
}
