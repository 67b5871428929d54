use lazy_static::lazy_static;
use std::{collections::HashSet, fmt::Display};

use crate::Position;

lazy_static! {
    pub static ref RESERVED_WORDS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        for word in [
            "if", "else", "while", "for", "do", "break", "continue", "return",
            "int", "float", "double", "char", "void", "bool", "true", "false",
            "null", "class", "public", "private", "protected", "static", "const",
            "new", "delete", "this", "switch", "case", "default", "struct",
            "typedef", "enum", "sizeof", "import", "package", "try", "catch",
            "throw", "finally", "def", "lambda", "print", "input", "range",
            "var", "let", "function", "string",
        ] {
            set.insert(word);
        }
        set
    };

    /// Two-character operators, matched before falling back to one character.
    pub static ref MULTI_CHAR_OPERATORS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        for operator in [
            "==", "!=", "<=", ">=", "&&", "||", "<<", ">>", "++", "--",
            "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=", "->",
        ] {
            set.insert(operator);
        }
        set
    };

    pub static ref OPERATOR_STARTS: HashSet<char> = {
        let mut set = HashSet::new();
        for c in ['+', '-', '*', '/', '%', '=', '!', '<', '>', '&', '|', '^', '~'] {
            set.insert(c);
        }
        set
    };

    pub static ref DELIMITERS: HashSet<char> = {
        let mut set = HashSet::new();
        for c in ['(', ')', '{', '}', '[', ']', ';', ',', '.', ':'] {
            set.insert(c);
        }
        set
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenCategory {
    Reserved,
    Identifier,
    Integer,
    Decimal,
    TextLiteral,
    Operator,
    Separator,
    Unrecognized,
}

impl TokenCategory {
    pub fn label(&self) -> &'static str {
        match self {
            TokenCategory::Reserved => "RESERVED",
            TokenCategory::Identifier => "IDENTIFIER",
            TokenCategory::Integer => "INTEGER",
            TokenCategory::Decimal => "DECIMAL",
            TokenCategory::TextLiteral => "TEXT_LITERAL",
            TokenCategory::Operator => "OPERATOR",
            TokenCategory::Separator => "SEPARATOR",
            TokenCategory::Unrecognized => "UNRECOGNIZED",
        }
    }
}

impl Display for TokenCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Padding flags apply to the label
        f.pad(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub category: TokenCategory,
    pub lexeme: String,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Token({:15}, '{:20}', Row: {:3}, Col: {:3})",
            self.category, self.lexeme, self.position.row, self.position.column
        )
    }
}

impl Token {
    pub fn row(&self) -> usize {
        self.position.row
    }

    pub fn column(&self) -> usize {
        self.position.column
    }

    /// Byte range of the lexeme in the scanned source.
    pub fn source_range(&self) -> std::ops::Range<usize> {
        self.position.offset..self.position.offset + self.lexeme.len()
    }
}
