//! Utility macros for the scanner.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//!
//! Sub-scanners build every token through this macro so the lexeme is always
//! the exact source slice between the recorded start and the cursor.

/// Creates a Token instance from the lexeme consumed since `$start`.
///
/// # Arguments
///
/// * `$lexer` - The lexer whose cursor sits just past the lexeme
/// * `$category` - The TokenCategory
/// * `$start` - The Position recorded before the lexeme was consumed
///
/// # Example
///
/// ```ignore
/// let start = lexer.cursor.position();
/// lexer.cursor.advance();
/// let token = MK_TOKEN!(lexer, TokenCategory::Separator, start);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($lexer:expr, $category:expr, $start:expr) => {
        Token {
            category: $category,
            lexeme: String::from($lexer.cursor.slice_from($start.offset)),
            position: $start,
        }
    };
}
